//! Utility modules shared across the estimator
//!
//! - Rounding: decimal rounding used for display figures

pub mod rounding;

pub use rounding::round_to;
