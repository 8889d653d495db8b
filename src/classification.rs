//! Classification Engine
//!
//! Maps HMPI, HPI, HEI and PLI onto an ordinal quality level using a fixed
//! threshold table, then derives one overall level by a worst-case rule.
//!
//! | Index | Good (<) | Acceptable (<) | Poor (<) | else     |
//! |-------|----------|----------------|----------|----------|
//! | HMPI  | 25       | 50             | 100      | Critical |
//! | HPI   | 25       | 50             | 100      | Critical |
//! | HEI   | 10       | 20             | 40       | Critical |
//! | PLI   | 1        | 2              | 5        | Critical |
//!
//! Indices are scanned in the order HMPI, HPI, HEI, PLI. The first index to
//! reach a rank stays binding; a later index replaces it only with a strictly
//! higher rank.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;
use crate::metrics::IndexValues;

/// The seven indices produced by the scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndexKind {
    #[serde(rename = "HPI")]
    Hpi,
    #[serde(rename = "HEI")]
    Hei,
    #[serde(rename = "HMPI")]
    Hmpi,
    #[serde(rename = "HCI")]
    Hci,
    #[serde(rename = "Cd")]
    Cd,
    #[serde(rename = "PI")]
    Pi,
    #[serde(rename = "PLI")]
    Pli,
}

impl IndexKind {
    /// Display/report order
    pub const ALL: [IndexKind; 7] = [
        IndexKind::Hpi,
        IndexKind::Hei,
        IndexKind::Hmpi,
        IndexKind::Hci,
        IndexKind::Cd,
        IndexKind::Pi,
        IndexKind::Pli,
    ];

    pub fn code(self) -> &'static str {
        match self {
            IndexKind::Hpi => "HPI",
            IndexKind::Hei => "HEI",
            IndexKind::Hmpi => "HMPI",
            IndexKind::Hci => "HCI",
            IndexKind::Cd => "Cd",
            IndexKind::Pi => "PI",
            IndexKind::Pli => "PLI",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IndexKind::Hpi => "Heavy-metal Pollution Index",
            IndexKind::Hei => "Heavy-metal Evaluation Index",
            IndexKind::Hmpi => "Heavy Metal Pollution Index",
            IndexKind::Hci => "Heavy-metal Contamination Index",
            IndexKind::Cd => "Degree of Contamination",
            IndexKind::Pi => "Pollution Index",
            IndexKind::Pli => "Pollution Load Index",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for IndexKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndexKind::ALL
            .into_iter()
            .find(|k| k.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InputError::UnknownIndex(s.to_string()))
    }
}

/// Indices that carry a threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassifiedIndex {
    #[serde(rename = "HMPI")]
    Hmpi,
    #[serde(rename = "HPI")]
    Hpi,
    #[serde(rename = "HEI")]
    Hei,
    #[serde(rename = "PLI")]
    Pli,
}

impl ClassifiedIndex {
    /// Scan order for the overall classification (tie-break: earliest wins)
    pub const ORDER: [ClassifiedIndex; 4] = [
        ClassifiedIndex::Hmpi,
        ClassifiedIndex::Hpi,
        ClassifiedIndex::Hei,
        ClassifiedIndex::Pli,
    ];

    /// Upper bounds (exclusive) for Good, Acceptable, Poor
    pub fn thresholds(self) -> [f64; 3] {
        match self {
            ClassifiedIndex::Hmpi => [25.0, 50.0, 100.0],
            ClassifiedIndex::Hpi => [25.0, 50.0, 100.0],
            ClassifiedIndex::Hei => [10.0, 20.0, 40.0],
            ClassifiedIndex::Pli => [1.0, 2.0, 5.0],
        }
    }

    pub fn kind(self) -> IndexKind {
        match self {
            ClassifiedIndex::Hmpi => IndexKind::Hmpi,
            ClassifiedIndex::Hpi => IndexKind::Hpi,
            ClassifiedIndex::Hei => IndexKind::Hei,
            ClassifiedIndex::Pli => IndexKind::Pli,
        }
    }

    /// Level for a value of this index
    pub fn classify(self, value: f64) -> QualityLevel {
        let [good, acceptable, poor] = self.thresholds();
        if value < good {
            QualityLevel::Good
        } else if value < acceptable {
            QualityLevel::Acceptable
        } else if value < poor {
            QualityLevel::Poor
        } else {
            // NaN lands here as well
            QualityLevel::Critical
        }
    }
}

impl fmt::Display for ClassifiedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().code())
    }
}

impl TryFrom<IndexKind> for ClassifiedIndex {
    type Error = InputError;

    fn try_from(kind: IndexKind) -> Result<Self, Self::Error> {
        ClassifiedIndex::ORDER
            .into_iter()
            .find(|c| c.kind() == kind)
            .ok_or_else(|| InputError::UnknownIndex(kind.code().to_string()))
    }
}

impl FromStr for ClassifiedIndex {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind: IndexKind = s.parse()?;
        ClassifiedIndex::try_from(kind).map_err(|_| InputError::UnknownIndex(s.to_string()))
    }
}

/// Ordinal water-quality level (declaration order is rank order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityLevel {
    Good,
    Acceptable,
    Poor,
    Critical,
}

impl QualityLevel {
    pub fn rank(self) -> u8 {
        match self {
            QualityLevel::Good => 0,
            QualityLevel::Acceptable => 1,
            QualityLevel::Poor => 2,
            QualityLevel::Critical => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityLevel::Good => "Good",
            QualityLevel::Acceptable => "Acceptable",
            QualityLevel::Poor => "Poor",
            QualityLevel::Critical => "Critical",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QualityLevel::Good => "Water quality is excellent for consumption",
            QualityLevel::Acceptable => "Water quality is acceptable with minor concerns",
            QualityLevel::Poor => "Water quality is poor and requires treatment",
            QualityLevel::Critical => "Water quality is critical and unsafe for consumption",
        }
    }

    /// Short action guidance for report legends
    pub fn guidance(self) -> &'static str {
        match self {
            QualityLevel::Good => "Safe for consumption",
            QualityLevel::Acceptable => "Monitor regularly",
            QualityLevel::Poor => "Treatment required",
            QualityLevel::Critical => "Immediate action needed",
        }
    }

    pub const ALL: [QualityLevel; 4] = [
        QualityLevel::Good,
        QualityLevel::Acceptable,
        QualityLevel::Poor,
        QualityLevel::Critical,
    ];
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four readings the classification consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexReadings {
    pub hmpi: f64,
    pub hpi: f64,
    pub hei: f64,
    pub pli: f64,
}

impl IndexReadings {
    pub fn get(&self, index: ClassifiedIndex) -> f64 {
        match index {
            ClassifiedIndex::Hmpi => self.hmpi,
            ClassifiedIndex::Hpi => self.hpi,
            ClassifiedIndex::Hei => self.hei,
            ClassifiedIndex::Pli => self.pli,
        }
    }
}

impl From<&IndexValues> for IndexReadings {
    fn from(values: &IndexValues) -> Self {
        Self {
            hmpi: values.hmpi,
            hpi: values.hpi,
            hei: values.hei,
            pli: values.pli,
        }
    }
}

/// Per-index levels plus the overall verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub overall: QualityLevel,
    /// Index whose level determined `overall`
    pub binding_index: ClassifiedIndex,
    pub per_index: BTreeMap<ClassifiedIndex, QualityLevel>,
}

/// Classify the four readings and pick the binding index
pub fn classify(readings: &IndexReadings) -> Classification {
    let per_index: BTreeMap<_, _> = ClassifiedIndex::ORDER
        .into_iter()
        .map(|index| (index, index.classify(readings.get(index))))
        .collect();

    let mut binding_index = ClassifiedIndex::ORDER[0];
    let mut overall = per_index[&binding_index];

    for index in &ClassifiedIndex::ORDER[1..] {
        let level = per_index[index];
        if level.rank() > overall.rank() {
            binding_index = *index;
            overall = level;
        }
    }

    Classification {
        overall,
        binding_index,
        per_index,
    }
}
