//! Cd: degree of contamination
//!
//! Contamination factor Cf_m = C_m / S_m − 1. Cd sums only the positive
//! factors, so metals below their standard cannot mask an exceedance elsewhere.

use super::{ensure_measured, MetalTerm};
use crate::classification::IndexKind;
use crate::error::ComputationError;

pub fn contamination_factor(term: &MetalTerm) -> f64 {
    term.ratio() - 1.0
}

pub fn calculate_cd(terms: &[MetalTerm]) -> Result<f64, ComputationError> {
    ensure_measured(terms, IndexKind::Cd)?;
    Ok(terms
        .iter()
        .map(|t| contamination_factor(t).max(0.0))
        .sum())
}
