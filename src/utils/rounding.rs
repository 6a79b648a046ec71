//! Decimal Rounding
//!
//! Breakdown figures are reported to 2 decimal places and savings to 1.
//! Rounding works on the exact binary value of the input, so 3.285 (stored
//! as 3.28500000000000014...) rounds up and 1.095 (stored as 1.09499999...)
//! rounds down. Only exactly representable halves tie to even.

/// Round `value` to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // The formatter rounds the exact decimal expansion of `value`
    let rounded = format!("{:.*}", decimals as usize, value)
        .parse::<f64>()
        .unwrap_or(value);

    // Avoid "-0" in reports
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
