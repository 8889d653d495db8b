//! Reference Registry
//!
//! Static catalog of the metals a sample can report. Each entry carries the
//! default regulatory standard and ideal (background) concentration used when
//! the caller supplies no override. All values are mg/L.
//!
//! The table is process-wide constant data: it is built at compile time and
//! shared by reference, so concurrent scorers read it without locking.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::InputError;

/// Metal grouping used by sample-entry forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetalCategory {
    Toxic,
    Essential,
    Trace,
}

/// A registry entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metal {
    pub symbol: &'static str,
    pub name: &'static str,
    /// Default standard (mg/L), always > 0
    pub standard: f64,
    /// Default ideal/background value (mg/L), always >= 0
    pub ideal: f64,
    pub category: MetalCategory,
}

impl Metal {
    pub const fn new(
        symbol: &'static str,
        name: &'static str,
        standard: f64,
        ideal: f64,
        category: MetalCategory,
    ) -> Self {
        Self { symbol, name, standard, ideal, category }
    }
}

/// WHO drinking-water guideline values
static WHO_METALS: [Metal; 11] = [
    Metal::new("Pb", "Lead", 0.01, 0.0, MetalCategory::Toxic),
    Metal::new("Cd", "Cadmium", 0.003, 0.0, MetalCategory::Toxic),
    Metal::new("Cr", "Chromium", 0.05, 0.0, MetalCategory::Toxic),
    Metal::new("As", "Arsenic", 0.01, 0.0, MetalCategory::Toxic),
    Metal::new("Hg", "Mercury", 0.001, 0.0, MetalCategory::Toxic),
    Metal::new("Ni", "Nickel", 0.07, 0.0, MetalCategory::Toxic),
    Metal::new("Cu", "Copper", 2.0, 0.0, MetalCategory::Essential),
    Metal::new("Zn", "Zinc", 3.0, 0.0, MetalCategory::Essential),
    // Fe and Mn: standard == ideal, excluded from HPI/HMPI weighting
    Metal::new("Fe", "Iron", 0.3, 0.3, MetalCategory::Essential),
    Metal::new("Mn", "Manganese", 0.1, 0.1, MetalCategory::Essential),
    Metal::new("Co", "Cobalt", 0.05, 0.0, MetalCategory::Trace),
];

/// Default registry shared by every scorer
pub static DEFAULT_REGISTRY: Registry = Registry::new("who-guidelines-v1", &WHO_METALS);

/// Versioned, read-only metal table
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    version: &'static str,
    metals: &'static [Metal],
}

impl Registry {
    /// Wrap a static table. Call `validate` before scoring against a custom table.
    pub const fn new(version: &'static str, metals: &'static [Metal]) -> Self {
        Self { version, metals }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    /// All metals in table order
    pub fn metals(&self) -> &'static [Metal] {
        self.metals
    }

    pub fn len(&self) -> usize {
        self.metals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metals.is_empty()
    }

    /// Look up a metal by its symbol (case-sensitive, e.g. "Pb")
    pub fn get(&self, symbol: &str) -> Option<&'static Metal> {
        self.metals.iter().find(|m| m.symbol == symbol)
    }

    /// Same as `get`, but unknown symbols are an input error
    pub fn require(&self, symbol: &str) -> Result<&'static Metal, InputError> {
        self.get(symbol)
            .ok_or_else(|| InputError::UnknownMetal(symbol.to_string()))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// Metals of one category, in table order
    pub fn by_category(&self, category: MetalCategory) -> impl Iterator<Item = &'static Metal> {
        self.metals.iter().filter(move |m| m.category == category)
    }

    /// Check table invariants: unique symbols, standard > 0, ideal >= 0
    pub fn validate(&self) -> Result<(), InputError> {
        let mut seen = HashSet::with_capacity(self.metals.len());

        for metal in self.metals {
            if !seen.insert(metal.symbol) {
                return Err(InputError::DuplicateMetal(metal.symbol.to_string()));
            }
            if !metal.standard.is_finite() || !metal.ideal.is_finite() {
                return Err(InputError::NonFinite {
                    symbol: metal.symbol.to_string(),
                    field: "registry value",
                });
            }
            if metal.standard <= 0.0 {
                return Err(InputError::NonPositiveStandard {
                    symbol: metal.symbol.to_string(),
                    value: metal.standard,
                });
            }
            if metal.ideal < 0.0 {
                return Err(InputError::NegativeIdeal {
                    symbol: metal.symbol.to_string(),
                    value: metal.ideal,
                });
            }
        }

        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        DEFAULT_REGISTRY
    }
}
