//! HMPI Scorer
//!
//! Heavy-metal pollution indices and water-quality classification for a
//! single water sample.
//!
//! Pipeline: Reference Registry → Standards Overlay (merge) → index metrics
//! (measured metals only) → Classification → `SampleResult`.
//!
//! - `data`: static metal registry with default standards/ideal values
//! - `sample`: sample metadata and sparse concentration sets
//! - `utils/`: standards overlay merge, display rounding
//! - `metrics/`: one module per index (HPI, HMPI, HEI, HCI, Cd, PI, PLI)
//! - `classification`: threshold table, worst-case overall level
//! - `scorer`: coordinator, sequential and Rayon batch scoring
//! - `report/`: markdown and JSON formatters
//!
//! Scoring is pure and synchronous. A `SampleScorer` holds only read-only
//! state and can be shared across threads as is.

pub mod error;
pub mod data;
pub mod sample;
pub mod utils;
pub mod metrics;
pub mod classification;
pub mod result;
pub mod scorer;
pub mod report;

#[cfg(feature = "cache")]
pub mod cache;

// Re-export commonly used types
pub use error::{ComputationError, EngineError, InputError};
pub use data::{Metal, MetalCategory, Registry, DEFAULT_REGISTRY};
pub use sample::{ConcentrationSet, Sample, SampleMeta};
pub use utils::{round_to, ResolvedStandards, StandardsOverlay, DEFAULT_PRECISION};
pub use metrics::IndexValues;
pub use classification::{classify, Classification, ClassifiedIndex, IndexKind, IndexReadings, QualityLevel};
pub use result::SampleResult;
pub use scorer::SampleScorer;
pub use report::{JsonFormatter, MarkdownFormatter};

#[cfg(feature = "cache")]
pub use cache::CachedScorer;
