//! HEI: Heavy-metal Evaluation Index
//!
//! HEI = Σ(C_m / S_m) over all measured metals. Every term is >= 0.

use super::{ensure_measured, MetalTerm};
use crate::classification::IndexKind;
use crate::error::ComputationError;

pub fn calculate_hei(terms: &[MetalTerm]) -> Result<f64, ComputationError> {
    ensure_measured(terms, IndexKind::Hei)?;
    Ok(terms.iter().map(MetalTerm::ratio).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hei() {
        let terms = vec![
            MetalTerm::new("Pb", 0.02, 0.01, 0.0),
            MetalTerm::new("Cu", 1.0, 2.0, 0.0),
        ];
        assert_relative_eq!(calculate_hei(&terms).unwrap(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_hei_includes_degenerate_metals() {
        // Fe has standard == ideal but still contributes C/S
        let terms = vec![MetalTerm::new("Fe", 0.6, 0.3, 0.3)];
        assert_relative_eq!(calculate_hei(&terms).unwrap(), 2.0, epsilon = 1e-12);
    }
}
