//! Unit weights and sub-index quality ratings
//!
//! W_m = K / S_m with K = 1 / Σ(1 / S_m) over the measured metals, so the
//! weights of whatever subset was measured sum to 1.
//!
//! Q_m = 100 × (C_m − I_m) / (S_m − I_m), undefined when S_m == I_m.

use super::MetalTerm;

/// Unit weight for every term, in input order
///
/// Standards are > 0 (checked when the overlay is resolved), so 1/S is finite.
pub fn unit_weights(terms: &[MetalTerm]) -> Vec<f64> {
    let inverse_sum: f64 = terms.iter().map(|t| 1.0 / t.standard).sum();
    if inverse_sum == 0.0 {
        return vec![0.0; terms.len()];
    }
    let k = 1.0 / inverse_sum;

    terms.iter().map(|t| k / t.standard).collect()
}

/// Sub-index quality rating; `None` when standard == ideal
pub fn sub_index(term: &MetalTerm) -> Option<f64> {
    if term.standard == term.ideal {
        return None;
    }
    Some(100.0 * (term.concentration - term.ideal) / (term.standard - term.ideal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weights_sum_to_one() {
        let terms = vec![
            MetalTerm::new("Pb", 0.02, 0.01, 0.0),
            MetalTerm::new("Cu", 1.0, 2.0, 0.0),
            MetalTerm::new("Hg", 0.0005, 0.001, 0.0),
        ];
        let weights = unit_weights(&terms);

        assert_relative_eq!(weights.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        // Stricter standard → larger weight
        assert!(weights[2] > weights[0]);
        assert!(weights[0] > weights[1]);
    }

    #[test]
    fn test_single_metal_weight_is_one() {
        let terms = vec![MetalTerm::new("Cu", 1.2, 2.0, 0.0)];
        assert_eq!(unit_weights(&terms), vec![1.0]);
    }

    #[test]
    fn test_sub_index() {
        let pb = MetalTerm::new("Pb", 0.02, 0.01, 0.0);
        assert_relative_eq!(sub_index(&pb).unwrap(), 200.0, epsilon = 1e-9);

        let below_ideal = MetalTerm::new("Zn", 0.5, 3.0, 1.0);
        assert_relative_eq!(sub_index(&below_ideal).unwrap(), -25.0, epsilon = 1e-9);

        let fe = MetalTerm::new("Fe", 0.5, 0.3, 0.3);
        assert_eq!(sub_index(&fe), None);
    }
}
