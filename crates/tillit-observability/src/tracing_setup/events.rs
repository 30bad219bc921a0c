//! Structured log events for key scoring operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// Log a completed trust score calculation.
pub fn score_calculated(
    claim_count: usize,
    final_score: f64,
    confidence: f64,
    penalties: usize,
    fingerprint: &str,
) {
    tracing::info!(
        event = "score_calculated",
        claim_count = claim_count,
        final_score = final_score,
        confidence = confidence,
        penalties = penalties,
        fingerprint = %fingerprint,
        "trust score calculated"
    );
}

/// Log a contradiction that became a penalty.
pub fn contradiction_detected(claim_ids: &[String], contradiction_type: &str, confidence: f64) {
    tracing::warn!(
        event = "contradiction_detected",
        claim_ids = ?claim_ids,
        contradiction_type = %contradiction_type,
        confidence = confidence,
        "contradiction detected"
    );
}

/// Log a claim whose source is not in the registry.
pub fn unknown_source(claim_id: &str, source: &str, fallback_weight: f64) {
    tracing::debug!(
        event = "unknown_source",
        claim_id = %claim_id,
        source = %source,
        fallback_weight = fallback_weight,
        "source not in registry, using fallback weight"
    );
}

/// Log the registry and lexicon an engine was built with.
pub fn registry_loaded(registry_version: &str, sources: usize, lexicon_version: &str, pairs: usize) {
    tracing::info!(
        event = "registry_loaded",
        registry_version = %registry_version,
        sources = sources,
        lexicon_version = %lexicon_version,
        pairs = pairs,
        "authority registry loaded"
    );
}
