//! Emission computation
//!
//! - `factors`: fixed emission factor tables
//! - `model`: questionnaire → breakdown and total
//! - `types`: categories, breakdown and result record

pub mod factors;
pub mod model;
pub mod types;

pub use model::EmissionModel;
pub use types::{Category, EmissionBreakdown, ResultRecord};
