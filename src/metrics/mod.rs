//! Index modules for sample scoring
//!
//! Each index is implemented in its own module. All of them consume the same
//! prepared input: one `MetalTerm` per *measured* metal. Unmeasured metals
//! never enter a formula.

pub mod unit_weight;
pub mod hpi;
pub mod hmpi;
pub mod hei;
pub mod hci;
pub mod contamination;
pub mod pollution_index;
pub mod pollution_load;

// Re-export metric functions
pub use unit_weight::{sub_index, unit_weights};
pub use hpi::{calculate_hpi, weighted_pollution_index, SubIndexTerm, WeightedIndexResult};
pub use hmpi::calculate_hmpi;
pub use hei::calculate_hei;
pub use hci::calculate_hci;
pub use contamination::{calculate_cd, contamination_factor};
pub use pollution_index::calculate_pi;
pub use pollution_load::{calculate_pli, geometric_mean};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::classification::IndexKind;
use crate::error::{ComputationError, InputError};
use crate::sample::ConcentrationSet;
use crate::utils::ResolvedStandards;

/// One measured metal with its resolved standard and ideal
#[derive(Debug, Clone, PartialEq)]
pub struct MetalTerm {
    pub symbol: String,
    pub concentration: f64,
    pub standard: f64,
    pub ideal: f64,
}

impl MetalTerm {
    pub fn new(symbol: impl Into<String>, concentration: f64, standard: f64, ideal: f64) -> Self {
        Self {
            symbol: symbol.into(),
            concentration,
            standard,
            ideal,
        }
    }

    /// Pollution ratio C / S
    pub fn ratio(&self) -> f64 {
        self.concentration / self.standard
    }
}

/// Measured metals of one sample; the registry has 11 metals
pub type MetalTerms = SmallVec<[MetalTerm; 12]>;

/// Pair each measured concentration with its resolved standard/ideal
pub fn build_terms(
    concentrations: &ConcentrationSet,
    standards: &ResolvedStandards,
) -> Result<MetalTerms, InputError> {
    if concentrations.is_empty() {
        return Err(InputError::EmptyConcentrations);
    }

    concentrations
        .iter()
        .map(|(symbol, concentration)| {
            let resolved = standards
                .get(symbol)
                .ok_or_else(|| InputError::UnknownMetal(symbol.to_string()))?;
            Ok(MetalTerm::new(symbol, concentration, resolved.standard, resolved.ideal))
        })
        .collect()
}

/// Guard for the unweighted aggregates (HEI, HCI, Cd, PI, PLI)
pub(crate) fn ensure_measured(terms: &[MetalTerm], index: IndexKind) -> Result<(), ComputationError> {
    if terms.is_empty() {
        Err(ComputationError::NoMeasuredMetals { index })
    } else {
        Ok(())
    }
}

/// The seven numeric indices for one sample (full precision)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexValues {
    #[serde(rename = "HPI")]
    pub hpi: f64,
    #[serde(rename = "HEI")]
    pub hei: f64,
    #[serde(rename = "HMPI")]
    pub hmpi: f64,
    #[serde(rename = "HCI")]
    pub hci: f64,
    #[serde(rename = "Cd")]
    pub cd: f64,
    #[serde(rename = "PI")]
    pub pi: f64,
    #[serde(rename = "PLI")]
    pub pli: f64,
}

impl IndexValues {
    pub fn get(&self, index: IndexKind) -> f64 {
        match index {
            IndexKind::Hpi => self.hpi,
            IndexKind::Hei => self.hei,
            IndexKind::Hmpi => self.hmpi,
            IndexKind::Hci => self.hci,
            IndexKind::Cd => self.cd,
            IndexKind::Pi => self.pi,
            IndexKind::Pli => self.pli,
        }
    }

    /// Apply `f` to every index (used for display rounding)
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            hpi: f(self.hpi),
            hei: f(self.hei),
            hmpi: f(self.hmpi),
            hci: f(self.hci),
            cd: f(self.cd),
            pi: f(self.pi),
            pli: f(self.pli),
        }
    }
}
