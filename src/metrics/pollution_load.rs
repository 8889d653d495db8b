//! PLI: Pollution Load Index
//!
//! PLI = (Π C_m / S_m)^(1/n), the geometric mean of the pollution ratios.
//! A single zero ratio makes the whole index zero.

use super::{ensure_measured, MetalTerm};
use crate::classification::IndexKind;
use crate::error::ComputationError;

/// Geometric mean of non-negative values; 0 if any value is 0
pub fn geometric_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    if values.iter().any(|&v| v == 0.0) {
        return 0.0;
    }
    let product: f64 = values.iter().product();
    product.powf(1.0 / values.len() as f64)
}

pub fn calculate_pli(terms: &[MetalTerm]) -> Result<f64, ComputationError> {
    ensure_measured(terms, IndexKind::Pli)?;
    let ratios: Vec<f64> = terms.iter().map(MetalTerm::ratio).collect();
    Ok(geometric_mean(&ratios))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pli_geometric_mean() {
        let terms = vec![
            MetalTerm::new("Pb", 0.02, 0.01, 0.0),
            MetalTerm::new("Cu", 1.0, 2.0, 0.0),
        ];
        // sqrt(2.0 × 0.5)
        assert_relative_eq!(calculate_pli(&terms).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pli_zero_dominates() {
        let terms = vec![
            MetalTerm::new("Pb", 0.5, 0.01, 0.0),
            MetalTerm::new("Hg", 0.0, 0.001, 0.0),
            MetalTerm::new("Cd", 0.3, 0.003, 0.0),
        ];
        assert_eq!(calculate_pli(&terms).unwrap(), 0.0);
    }

    #[test]
    fn test_geometric_mean_three_values() {
        assert_relative_eq!(geometric_mean(&[1.0, 8.0, 27.0]), 6.0, epsilon = 1e-12);
    }
}
