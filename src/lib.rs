//! Carbon Footprint Estimator
//!
//! Estimates a person's annual carbon footprint from a short lifestyle
//! questionnaire and produces ranked reduction advice.
//!
//! - `lifestyle`: questionnaire input and strict validation
//! - `emissions/`: factor tables and the emission model
//! - `insights`: per-category share and severity
//! - `advice/`: advice provider, fallback templates and selection policy
//! - `report/`: report assembly and markdown/JSON formatters
//! - `storage`: SQLite calculation history
//! - `api_server`: HTTP API (feature `api`)

pub mod advice;
pub mod config;
pub mod emissions;
pub mod estimator;
pub mod insights;
pub mod lifestyle;
pub mod report;
pub mod storage;
pub mod utils;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use advice::{AdviceProvider, AdviceSource, Recommendation, RecommendationSelector};
pub use config::{AdviceConfig, EngineConfig};
pub use emissions::{Category, EmissionBreakdown, EmissionModel, ResultRecord};
pub use estimator::FootprintEstimator;
pub use insights::{CategoryInsight, CategoryInsights, InsightClassifier, SeverityLevel};
pub use lifestyle::{LifestyleInput, ValidationError};
pub use report::{FootprintReport, JsonFormatter, MarkdownFormatter};
pub use storage::{CalculationStore, Statistics, StoredCalculation};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
