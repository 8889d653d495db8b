//! Utility modules for sample scoring
//!
//! - Standards: registry/override merge and overlay file loading
//! - Display: presentation-time rounding

pub mod standards;
pub mod display;

// Re-export commonly used types
pub use standards::{ResolvedStandard, ResolvedStandards, StandardOverride, StandardsOverlay};
pub use display::{format_value, round_to, DEFAULT_PRECISION};
