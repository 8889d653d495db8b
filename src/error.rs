//! Error types for sample scoring
//!
//! Two families of failure:
//! - `InputError`: the sample, overlay or registry violates a domain invariant.
//!   Raised before any index is computed.
//! - `ComputationError`: an index has nothing left to aggregate (e.g. every
//!   measured metal has standard == ideal, so HPI has no weighted terms).
//!
//! Both are terminal for a single sample. No partial result is ever produced.

use thiserror::Error;

use crate::classification::IndexKind;

/// Top-level error returned by the scoring pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("computation error: {0}")]
    Computation(#[from] ComputationError),
}

impl EngineError {
    pub fn is_input(&self) -> bool {
        matches!(self, EngineError::Input(_))
    }

    pub fn is_computation(&self) -> bool {
        matches!(self, EngineError::Computation(_))
    }
}

/// Domain-invariant violations in caller-supplied data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("at least one metal concentration is required")]
    EmptyConcentrations,

    #[error("unknown metal symbol: '{0}'")]
    UnknownMetal(String),

    #[error("standard for {symbol} must be > 0 (got {value})")]
    NonPositiveStandard { symbol: String, value: f64 },

    #[error("ideal value for {symbol} must be >= 0 (got {value})")]
    NegativeIdeal { symbol: String, value: f64 },

    #[error("concentration for {symbol} must be >= 0 (got {value})")]
    NegativeConcentration { symbol: String, value: f64 },

    #[error("{field} for {symbol} is not a finite number")]
    NonFinite { symbol: String, field: &'static str },

    #[error("sample ID is required")]
    EmptySampleId,

    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("well depth must be >= 0 (got {0})")]
    NegativeWellDepth(f64),

    #[error("metal symbol '{0}' appears more than once in the registry")]
    DuplicateMetal(String),

    #[error("unknown index identifier: '{0}'")]
    UnknownIndex(String),
}

/// Failures that arise while aggregating an index
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    #[error("{index}: no metals left after excluding those with standard == ideal")]
    NoWeightedMetals { index: IndexKind },

    #[error("{index}: no measured metals to aggregate")]
    NoMeasuredMetals { index: IndexKind },
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_converts_to_engine_error() {
        let err: EngineError = InputError::UnknownMetal("Xx".to_string()).into();
        assert!(err.is_input());
        assert!(!err.is_computation());
        assert_eq!(err.to_string(), "input error: unknown metal symbol: 'Xx'");
    }

    #[test]
    fn test_computation_error_names_index() {
        let err: EngineError = ComputationError::NoWeightedMetals { index: IndexKind::Hpi }.into();
        assert!(err.is_computation());
        assert!(err.to_string().starts_with("computation error: HPI"));
    }
}
