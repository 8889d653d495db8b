//! PI: pollution index (per-sample summary)
//!
//! PI = mean(C_m / S_m) over the measured metals.

use super::{ensure_measured, MetalTerm};
use crate::classification::IndexKind;
use crate::error::ComputationError;

pub fn calculate_pi(terms: &[MetalTerm]) -> Result<f64, ComputationError> {
    ensure_measured(terms, IndexKind::Pi)?;
    let total: f64 = terms.iter().map(MetalTerm::ratio).sum();
    Ok(total / terms.len() as f64)
}
