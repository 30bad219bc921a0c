//! TrustScoreEngine: implements ITrustScorer over a fixed registry, lexicon,
//! detector and configuration.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::debug;

use tillit_authority::AuthorityRegistry;
use tillit_contradiction::{ContradictionDetector, CorroborationIndex, DetectionContext};
use tillit_core::constants::UNKNOWN_SOURCE_WEIGHT;
use tillit_core::traits::ITrustScorer;
use tillit_core::{Claim, Lexicon, TillitConfig, TillitResult, TrustScoreCalculation};
use tillit_observability::events;

use crate::aggregation;
use crate::factors::{self, FactorContext};
use crate::penalties;

/// Computes trust scores. Immutable after construction and safe to share
/// across threads.
pub struct TrustScoreEngine {
    registry: AuthorityRegistry,
    lexicon: Lexicon,
    detector: ContradictionDetector,
    config: TillitConfig,
}

impl TrustScoreEngine {
    pub fn new(registry: AuthorityRegistry, lexicon: Lexicon, config: TillitConfig) -> Self {
        events::registry_loaded(
            registry.version(),
            registry.len(),
            lexicon.version(),
            lexicon.len(),
        );
        Self {
            registry,
            lexicon,
            detector: ContradictionDetector::new(),
            config,
        }
    }

    /// Embedded Norwegian registry and lexicon with default configuration.
    pub fn norwegian() -> Self {
        Self::new(
            AuthorityRegistry::norwegian(),
            Lexicon::norwegian(),
            TillitConfig::default(),
        )
    }

    /// Build from TOML documents for the registry, the lexicon and the
    /// configuration. Every document is validated.
    pub fn from_toml(registry: &str, lexicon: &str, config: &str) -> TillitResult<Self> {
        Ok(Self::new(
            AuthorityRegistry::from_toml(registry)?,
            Lexicon::from_toml(lexicon)?,
            TillitConfig::from_toml(config)?,
        ))
    }

    /// Replace the contradiction strategies.
    pub fn with_detector(mut self, detector: ContradictionDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn registry(&self) -> &AuthorityRegistry {
        &self.registry
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn detector(&self) -> &ContradictionDetector {
        &self.detector
    }

    pub fn config(&self) -> &TillitConfig {
        &self.config
    }

    /// Score `claims`, measuring each piece of evidence's age against the
    /// timestamp of the claim it supports. Adding a claim never re-ages the
    /// evidence of another.
    pub fn calculate_trust_score(&self, claims: &[Claim]) -> TrustScoreCalculation {
        self.calculate(claims, None)
    }

    /// Score `claims`, measuring all evidence age against `as_of`.
    pub fn calculate_trust_score_at(
        &self,
        claims: &[Claim],
        as_of: DateTime<Utc>,
    ) -> TrustScoreCalculation {
        self.calculate(claims, Some(as_of))
    }

    fn calculate(&self, claims: &[Claim], as_of: Option<DateTime<Utc>>) -> TrustScoreCalculation {
        let span = tillit_observability::scoring_span!(claims.len(), self.registry.version());
        let _guard = span.enter();

        if claims.is_empty() {
            return self.calculate_empty();
        }

        let parallel = claims.len() >= self.config.scoring.parallel_pair_threshold;
        let index = CorroborationIndex::new(claims);
        let factor_ctx = FactorContext {
            registry: &self.registry,
            corroboration: &index,
            scoring: &self.config.scoring,
            corroboration_config: &self.config.corroboration,
            as_of,
        };

        for claim in claims {
            if !self.registry.contains(&claim.source) {
                events::unknown_source(&claim.id, &claim.source, UNKNOWN_SOURCE_WEIGHT);
            }
        }

        let authority_factors: Vec<_> = if parallel {
            (0..claims.len())
                .into_par_iter()
                .map(|i| factors::compute(claims, i, &factor_ctx))
                .collect()
        } else {
            (0..claims.len())
                .map(|i| factors::compute(claims, i, &factor_ctx))
                .collect()
        };

        let detection_ctx = DetectionContext {
            registry: &self.registry,
            lexicon: &self.lexicon,
            config: &self.config.detection,
        };
        let contradiction_penalties = penalties::collect(
            claims,
            &self.detector,
            &detection_ctx,
            &self.registry,
            &self.config.scoring,
        );

        let positive_score = aggregation::positive_score(&authority_factors);
        let penalty_score = aggregation::penalty_score(&contradiction_penalties);
        let final_score = aggregation::final_score(positive_score, penalty_score);
        let confidence = aggregation::confidence(
            authority_factors.len(),
            contradiction_penalties.len(),
            self.config.scoring.evidence_saturation,
        );
        debug!(positive_score, penalty_score, "aggregated");

        let calculation = TrustScoreCalculation {
            authority_factors,
            contradiction_penalties,
            positive_score,
            penalty_score,
            final_score,
            confidence,
            registry_version: self.registry.version().to_string(),
            lexicon_version: self.lexicon.version().to_string(),
        };
        self.report(&calculation);
        calculation
    }

    fn calculate_empty(&self) -> TrustScoreCalculation {
        let calculation = TrustScoreCalculation::empty(self.registry.version(), self.lexicon.version());
        self.report(&calculation);
        calculation
    }

    fn report(&self, calculation: &TrustScoreCalculation) {
        events::score_calculated(
            calculation.authority_factors.len(),
            calculation.final_score,
            calculation.confidence,
            calculation.contradiction_penalties.len(),
            &calculation.fingerprint(),
        );
    }
}

impl Default for TrustScoreEngine {
    fn default() -> Self {
        Self::norwegian()
    }
}

impl ITrustScorer for TrustScoreEngine {
    fn calculate_trust_score(&self, claims: &[Claim]) -> TrustScoreCalculation {
        TrustScoreEngine::calculate_trust_score(self, claims)
    }
}
