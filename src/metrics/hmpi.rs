//! HMPI: Heavy Metal Pollution Index (headline composite)
//!
//! Same weighted construction as HPI, exposed as its own entry point so the
//! scorer can feed it a separate standards pass. Given identical terms the two
//! indices are equal.

use super::{weighted_pollution_index, MetalTerm, WeightedIndexResult};
use crate::classification::IndexKind;
use crate::error::ComputationError;

/// Calculate HMPI over the measured metals
pub fn calculate_hmpi(terms: &[MetalTerm]) -> Result<WeightedIndexResult, ComputationError> {
    weighted_pollution_index(terms, IndexKind::Hmpi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::calculate_hpi;

    #[test]
    fn test_hmpi_equals_hpi_on_same_terms() {
        let terms = vec![
            MetalTerm::new("As", 0.004, 0.01, 0.0),
            MetalTerm::new("Cd", 0.002, 0.003, 0.0),
            MetalTerm::new("Zn", 2.5, 3.0, 0.0),
        ];
        let hpi = calculate_hpi(&terms).unwrap();
        let hmpi = calculate_hmpi(&terms).unwrap();
        assert_eq!(hpi.value, hmpi.value);
    }

    #[test]
    fn test_hmpi_error_is_labelled_hmpi() {
        let terms = vec![MetalTerm::new("Mn", 0.2, 0.1, 0.1)];
        assert_eq!(
            calculate_hmpi(&terms),
            Err(ComputationError::NoWeightedMetals { index: IndexKind::Hmpi })
        );
    }
}
