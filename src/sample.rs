//! Sample input: metadata plus a sparse set of measured concentrations
//!
//! Absent metals are "not measured", which is distinct from a measured zero.
//! Field-level parsing happens upstream; `Sample::validate` only re-checks the
//! domain invariants the scorer relies on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

use crate::data::Registry;
use crate::error::InputError;

/// Descriptive metadata for a water sample
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleMeta {
    pub sample_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Well depth in metres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub well_depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampling_date: Option<NaiveDate>,
}

impl SampleMeta {
    pub fn new(sample_id: impl Into<String>) -> Self {
        Self {
            sample_id: sample_id.into(),
            ..Default::default()
        }
    }

    /// Attach coordinates from a location provider
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_well_depth(mut self, depth_m: f64) -> Self {
        self.well_depth = Some(depth_m);
        self
    }

    pub fn with_sampling_date(mut self, date: NaiveDate) -> Self {
        self.sampling_date = Some(date);
        self
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.sample_id.trim().is_empty() {
            return Err(InputError::EmptySampleId);
        }
        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(InputError::LatitudeOutOfRange(lat));
            }
        }
        if let Some(lon) = self.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(InputError::LongitudeOutOfRange(lon));
            }
        }
        if let Some(depth) = self.well_depth {
            // NaN fails the comparison too
            if !(depth >= 0.0) {
                return Err(InputError::NegativeWellDepth(depth));
            }
        }
        Ok(())
    }
}

/// Sparse mapping of metal symbol -> measured concentration (mg/L)
///
/// Ordered by symbol so every aggregate is computed in a stable order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConcentrationSet(BTreeMap<String, f64>);

impl ConcentrationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measurement, replacing any previous value for the metal
    pub fn insert(&mut self, symbol: impl Into<String>, concentration: f64) -> Option<f64> {
        self.0.insert(symbol.into(), concentration)
    }

    pub fn with(mut self, symbol: impl Into<String>, concentration: f64) -> Self {
        self.insert(symbol, concentration);
        self
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.0.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Non-empty, registry-known symbols, finite non-negative values
    pub fn validate(&self, registry: &Registry) -> Result<(), InputError> {
        if self.is_empty() {
            return Err(InputError::EmptyConcentrations);
        }
        for (symbol, value) in self.iter() {
            registry.require(symbol)?;
            if !value.is_finite() {
                return Err(InputError::NonFinite {
                    symbol: symbol.to_string(),
                    field: "concentration",
                });
            }
            if value < 0.0 {
                return Err(InputError::NegativeConcentration {
                    symbol: symbol.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ConcentrationSet {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(s, v)| (s.into(), v)).collect())
    }
}

/// One sample ready for scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub meta: SampleMeta,
    pub concentrations: ConcentrationSet,
}

impl Sample {
    pub fn new(meta: SampleMeta, concentrations: ConcentrationSet) -> Self {
        Self { meta, concentrations }
    }

    /// Load a sample from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read sample file: {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse sample JSON: {:?}", path))
    }

    pub fn validate(&self, registry: &Registry) -> Result<(), InputError> {
        self.meta.validate()?;
        self.concentrations.validate(registry)
    }
}
