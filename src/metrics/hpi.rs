//! HPI: Heavy-metal Pollution Index
//!
//! HPI = Σ(W_m × Q_m) / Σ(W_m)
//!
//! Weights come from *all* measured metals, but metals whose standard equals
//! their ideal value have no defined Q_m and are dropped from both sums. If
//! nothing survives, the index is a computation error, never a sentinel.

use serde::Serialize;

use super::{sub_index, unit_weights, MetalTerm};
use crate::classification::IndexKind;
use crate::error::ComputationError;

/// Contribution of one metal to a weighted index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubIndexTerm {
    pub symbol: String,
    pub weight: f64,
    pub quality: f64,
}

/// Result of a weighted index calculation (HPI or HMPI)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedIndexResult {
    pub value: f64,
    /// Metals that entered the weighted sums
    pub terms: Vec<SubIndexTerm>,
    /// Metals dropped because standard == ideal
    pub excluded: Vec<String>,
}

/// Shared weighted construction behind HPI and HMPI
///
/// `index` only labels the error; the arithmetic is identical for both.
pub fn weighted_pollution_index(
    terms: &[MetalTerm],
    index: IndexKind,
) -> Result<WeightedIndexResult, ComputationError> {
    if terms.is_empty() {
        return Err(ComputationError::NoMeasuredMetals { index });
    }

    let weights = unit_weights(terms);

    let mut included = Vec::with_capacity(terms.len());
    let mut excluded = Vec::new();

    for (term, weight) in terms.iter().zip(weights) {
        match sub_index(term) {
            Some(quality) => included.push(SubIndexTerm {
                symbol: term.symbol.clone(),
                weight,
                quality,
            }),
            None => excluded.push(term.symbol.clone()),
        }
    }

    if included.is_empty() {
        return Err(ComputationError::NoWeightedMetals { index });
    }

    let weighted_sum: f64 = included.iter().map(|t| t.weight * t.quality).sum();
    let weight_sum: f64 = included.iter().map(|t| t.weight).sum();

    Ok(WeightedIndexResult {
        value: weighted_sum / weight_sum,
        terms: included,
        excluded,
    })
}

/// Calculate HPI over the measured metals
pub fn calculate_hpi(terms: &[MetalTerm]) -> Result<WeightedIndexResult, ComputationError> {
    weighted_pollution_index(terms, IndexKind::Hpi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hpi_two_metals() {
        // Pb: S=0.01, Q=200; Cu: S=2.0, Q=50
        // K = 1 / (100 + 0.5); W_Pb = K/0.01, W_Cu = K/2
        let terms = vec![
            MetalTerm::new("Cu", 1.0, 2.0, 0.0),
            MetalTerm::new("Pb", 0.02, 0.01, 0.0),
        ];
        let result = calculate_hpi(&terms).unwrap();

        let expected = (100.0 * 200.0 + 0.5 * 50.0) / 100.5;
        assert_relative_eq!(result.value, expected, epsilon = 1e-9);
        assert_eq!(result.terms.len(), 2);
        assert!(result.excluded.is_empty());
    }

    #[test]
    fn test_degenerate_metal_excluded_from_both_sums() {
        let with_fe = vec![
            MetalTerm::new("Cu", 1.0, 2.0, 0.0),
            MetalTerm::new("Fe", 0.9, 0.3, 0.3),
        ];
        let result = calculate_hpi(&with_fe).unwrap();

        // Only Cu survives, so HPI collapses to its Q
        assert_relative_eq!(result.value, 50.0, epsilon = 1e-9);
        assert_eq!(result.excluded, vec!["Fe".to_string()]);
    }

    #[test]
    fn test_only_degenerate_metals_is_error() {
        let terms = vec![MetalTerm::new("Fe", 0.2, 0.3, 0.3)];
        assert_eq!(
            calculate_hpi(&terms),
            Err(ComputationError::NoWeightedMetals { index: IndexKind::Hpi })
        );
    }

    #[test]
    fn test_empty_is_error() {
        assert_eq!(
            calculate_hpi(&[]),
            Err(ComputationError::NoMeasuredMetals { index: IndexKind::Hpi })
        );
    }
}
