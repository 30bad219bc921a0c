use chrono::{DateTime, Utc};
use tillit_core::Evidence;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Freshness of one piece of evidence: `0.5^(age_days / half_life_days)`.
///
/// Undated evidence counts as age 0. Evidence dated after `as_of` also counts
/// as age 0.
pub fn reliability(
    timestamp: Option<DateTime<Utc>>,
    as_of: DateTime<Utc>,
    half_life_days: f64,
) -> f64 {
    let Some(ts) = timestamp else {
        return 1.0;
    };
    let age_days = (as_of - ts).num_seconds().max(0) as f64 / SECONDS_PER_DAY;
    0.5_f64.powf(age_days / half_life_days)
}

/// Mean reliability over the evidence, 1.0 without evidence.
pub fn calculate(evidence: &[Evidence], as_of: DateTime<Utc>, half_life_days: f64) -> f64 {
    if evidence.is_empty() {
        return 1.0;
    }
    let total: f64 = evidence
        .iter()
        .map(|e| reliability(e.timestamp, as_of, half_life_days))
        .sum();
    total / evidence.len() as f64
}
