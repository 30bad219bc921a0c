use tillit_core::Evidence;

/// Mean authority weight of the attached evidence, `None` without evidence.
///
/// Weights outside [0, 1] are a caller contract violation and trip a debug
/// assertion.
pub fn calculate(evidence: &[Evidence]) -> Option<f64> {
    if evidence.is_empty() {
        return None;
    }
    let total: f64 = evidence
        .iter()
        .map(|e| {
            debug_assert!(
                (0.0..=1.0).contains(&e.authority_weight),
                "evidence authority weight {} from {} outside [0, 1]",
                e.authority_weight,
                e.source
            );
            e.authority_weight
        })
        .sum();
    Some(total / evidence.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillit_core::EvidenceCategory;

    fn evidence(weight: f64) -> Evidence {
        Evidence {
            category: EvidenceCategory::Document,
            source: "lovdata".to_string(),
            authority_weight: weight,
            content: String::new(),
            timestamp: None,
            verified: true,
        }
    }

    #[test]
    fn empty_evidence_has_no_quality() {
        assert_eq!(calculate(&[]), None);
    }

    #[test]
    fn quality_is_mean_weight() {
        let q = calculate(&[evidence(0.9), evidence(0.5)]).unwrap();
        assert!((q - 0.7).abs() < 1e-12);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside [0, 1]")]
    fn negative_weight_fails_loudly() {
        calculate(&[evidence(-0.2)]);
    }
}
