//! Standards Overlay
//!
//! Caller-supplied per-metal standard/ideal overrides, merged onto the
//! registry defaults. An override replaces the default for its own metal and
//! field only; every other value resolves to the registry.
//!
//! Overlay file format (JSON, keyed by metal symbol, both fields optional):
//!
//! ```json
//! { "Pb": { "standard": 0.015 }, "Fe": { "ideal": 0.1 } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

use crate::data::Registry;
use crate::error::InputError;

/// Override for a single metal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StandardOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal: Option<f64>,
}

/// Sparse set of overrides, not yet checked against a registry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandardsOverlay {
    overrides: BTreeMap<String, StandardOverride>,
}

impl StandardsOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load overrides from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read standards file: {:?}", path))?;

        let overlay: StandardsOverlay = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse standards JSON")?;

        tracing::info!(
            "Loaded {} standard override(s) from {:?}",
            overlay.len(),
            path
        );

        Ok(overlay)
    }

    pub fn with_standard(mut self, symbol: impl Into<String>, standard: f64) -> Self {
        self.overrides.entry(symbol.into()).or_default().standard = Some(standard);
        self
    }

    pub fn with_ideal(mut self, symbol: impl Into<String>, ideal: f64) -> Self {
        self.overrides.entry(symbol.into()).or_default().ideal = Some(ideal);
        self
    }

    pub fn get(&self, symbol: &str) -> Option<&StandardOverride> {
        self.overrides.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Merge onto registry defaults
    ///
    /// Rejects unknown symbols, non-finite values, standard <= 0 and ideal < 0.
    /// A zero standard can therefore never reach the index formulas.
    pub fn resolve(&self, registry: &Registry) -> Result<ResolvedStandards, InputError> {
        for symbol in self.overrides.keys() {
            registry.require(symbol)?;
        }

        let mut entries = BTreeMap::new();

        for metal in registry.metals() {
            let over = self.overrides.get(metal.symbol).copied().unwrap_or_default();
            let standard = over.standard.unwrap_or(metal.standard);
            let ideal = over.ideal.unwrap_or(metal.ideal);

            if !standard.is_finite() {
                return Err(InputError::NonFinite {
                    symbol: metal.symbol.to_string(),
                    field: "standard",
                });
            }
            if !ideal.is_finite() {
                return Err(InputError::NonFinite {
                    symbol: metal.symbol.to_string(),
                    field: "ideal",
                });
            }
            if standard <= 0.0 {
                return Err(InputError::NonPositiveStandard {
                    symbol: metal.symbol.to_string(),
                    value: standard,
                });
            }
            if ideal < 0.0 {
                return Err(InputError::NegativeIdeal {
                    symbol: metal.symbol.to_string(),
                    value: ideal,
                });
            }

            entries.insert(metal.symbol, ResolvedStandard { standard, ideal });
        }

        Ok(ResolvedStandards { entries })
    }
}

/// Standard and ideal for one metal after the merge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedStandard {
    pub standard: f64,
    pub ideal: f64,
}

impl ResolvedStandard {
    /// Sub-index undefined: standard equals background
    pub fn is_degenerate(&self) -> bool {
        self.standard == self.ideal
    }
}

/// Total StandardSet/IdealSet: every registry metal resolves to a value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStandards {
    entries: BTreeMap<&'static str, ResolvedStandard>,
}

impl ResolvedStandards {
    pub fn get(&self, symbol: &str) -> Option<&ResolvedStandard> {
        self.entries.get(symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ResolvedStandard)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEFAULT_REGISTRY;

    #[test]
    fn test_empty_overlay_resolves_to_registry() {
        let resolved = StandardsOverlay::new().resolve(&DEFAULT_REGISTRY).unwrap();
        assert_eq!(resolved.len(), DEFAULT_REGISTRY.len());

        let cu = resolved.get("Cu").unwrap();
        assert_eq!(cu.standard, 2.0);
        assert_eq!(cu.ideal, 0.0);
        assert!(resolved.get("Fe").unwrap().is_degenerate());
    }

    #[test]
    fn test_override_replaces_only_its_field() {
        let overlay = StandardsOverlay::new()
            .with_standard("Pb", 0.015)
            .with_ideal("Fe", 0.1);
        let resolved = overlay.resolve(&DEFAULT_REGISTRY).unwrap();

        let pb = resolved.get("Pb").unwrap();
        assert_eq!(pb.standard, 0.015);
        assert_eq!(pb.ideal, 0.0);

        let fe = resolved.get("Fe").unwrap();
        assert_eq!(fe.standard, 0.3);
        assert_eq!(fe.ideal, 0.1);
        assert!(!fe.is_degenerate());

        // Untouched metal
        assert_eq!(resolved.get("Hg").unwrap().standard, 0.001);
    }

    #[test]
    fn test_rejects_unknown_metal() {
        let overlay = StandardsOverlay::new().with_standard("Au", 1.0);
        assert_eq!(
            overlay.resolve(&DEFAULT_REGISTRY),
            Err(InputError::UnknownMetal("Au".to_string()))
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        let zero = StandardsOverlay::new().with_standard("Cu", 0.0);
        assert!(matches!(
            zero.resolve(&DEFAULT_REGISTRY),
            Err(InputError::NonPositiveStandard { .. })
        ));

        let negative_ideal = StandardsOverlay::new().with_ideal("Cu", -0.5);
        assert!(matches!(
            negative_ideal.resolve(&DEFAULT_REGISTRY),
            Err(InputError::NegativeIdeal { .. })
        ));

        let inf = StandardsOverlay::new().with_standard("Cu", f64::INFINITY);
        assert!(matches!(
            inf.resolve(&DEFAULT_REGISTRY),
            Err(InputError::NonFinite { field: "standard", .. })
        ));
    }

    #[test]
    fn test_overlay_json() {
        let json = r#"{ "Pb": { "standard": 0.015 }, "Mn": { "standard": 0.4, "ideal": 0.05 } }"#;
        let overlay: StandardsOverlay = serde_json::from_str(json).unwrap();
        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay.get("Pb").unwrap().ideal, None);

        let resolved = overlay.resolve(&DEFAULT_REGISTRY).unwrap();
        assert_eq!(resolved.get("Mn").unwrap().standard, 0.4);
        assert_eq!(resolved.get("Mn").unwrap().ideal, 0.05);
    }
}
