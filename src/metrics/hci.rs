//! HCI: Heavy-metal Contamination Index
//!
//! HCI = Σ(C_m / S_m) / n, i.e. HEI normalized by the number of measured metals.

use super::{calculate_hei, ensure_measured, MetalTerm};
use crate::classification::IndexKind;
use crate::error::ComputationError;

pub fn calculate_hci(terms: &[MetalTerm]) -> Result<f64, ComputationError> {
    ensure_measured(terms, IndexKind::Hci)?;
    let hei = calculate_hei(terms)?;
    Ok(hei / terms.len() as f64)
}
