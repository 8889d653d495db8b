//! Scored sample record
//!
//! Built once per scoring call and handed to the caller. Values are full
//! precision; `rounded` produces a display copy.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::classification::{Classification, ClassifiedIndex, IndexKind, QualityLevel};
use crate::metrics::IndexValues;
use crate::sample::SampleMeta;
use crate::utils::round_to;

/// Indices, per-index levels and overall classification for one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleResult {
    pub meta: SampleMeta,
    #[serde(flatten)]
    pub indices: IndexValues,
    pub classification: QualityLevel,
    pub binding_index: ClassifiedIndex,
    pub per_index_level: BTreeMap<ClassifiedIndex, QualityLevel>,
    /// Metals that participated in the formulas, in symbol order
    pub measured_metals: Vec<String>,
    /// Metals dropped from the HPI/HMPI weighted sums (standard == ideal)
    pub excluded_from_weighting: Vec<String>,
}

impl SampleResult {
    pub fn new(
        meta: SampleMeta,
        indices: IndexValues,
        classification: Classification,
        measured_metals: Vec<String>,
        excluded_from_weighting: Vec<String>,
    ) -> Self {
        Self {
            meta,
            indices,
            classification: classification.overall,
            binding_index: classification.binding_index,
            per_index_level: classification.per_index,
            measured_metals,
            excluded_from_weighting,
        }
    }

    pub fn sample_id(&self) -> &str {
        &self.meta.sample_id
    }

    pub fn value(&self, index: IndexKind) -> f64 {
        self.indices.get(index)
    }

    /// Level of one classified index
    pub fn level(&self, index: ClassifiedIndex) -> Option<QualityLevel> {
        self.per_index_level.get(&index).copied()
    }

    /// Copy with every index rounded to `places` decimals
    ///
    /// Levels are not re-derived; they always reflect full-precision values.
    pub fn rounded(&self, places: u32) -> Self {
        Self {
            indices: self.indices.map(|v| round_to(v, places)),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::{classify, IndexReadings};

    fn sample_result() -> SampleResult {
        let indices = IndexValues {
            hpi: 49.996,
            hei: 2.5,
            hmpi: 49.996,
            hci: 1.25,
            cd: 1.0,
            pi: 1.25,
            pli: 1.0,
        };
        let classification = classify(&IndexReadings::from(&indices));
        SampleResult::new(
            SampleMeta::new("W-1"),
            indices,
            classification,
            vec!["Cu".to_string(), "Pb".to_string()],
            vec![],
        )
    }

    #[test]
    fn test_rounded_keeps_levels() {
        let result = sample_result();
        assert_eq!(result.level(ClassifiedIndex::Hpi), Some(QualityLevel::Acceptable));

        let shown = result.rounded(2);
        assert_eq!(shown.indices.hpi, 50.0);
        // Level still reflects 49.996
        assert_eq!(shown.level(ClassifiedIndex::Hpi), Some(QualityLevel::Acceptable));
        assert_eq!(shown.classification, result.classification);
    }

    #[test]
    fn test_stable_json_field_names() {
        let json = serde_json::to_value(sample_result()).unwrap();
        for key in ["HPI", "HEI", "HMPI", "HCI", "Cd", "PI", "PLI", "classification"] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(json["classification"], "Acceptable");
        assert_eq!(json["meta"]["sampleId"], "W-1");
    }
}
