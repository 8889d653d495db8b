//! Presentation-time rounding
//!
//! The engine always returns full-precision values. Rounding happens only
//! when a result is rendered for display or export.

/// Decimal places used by the reference report
pub const DEFAULT_PRECISION: u32 = 2;

/// Round to `places` decimal places, halves away from zero
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Fixed-width text for a value at `places` decimals (e.g. "2.50")
pub fn format_value(value: f64, places: u32) -> String {
    format!("{:.*}", places as usize, round_to(value, places))
}
