//! Recommendation generation
//!
//! - `provider`: advice provider capability and the OpenAI-compatible client
//! - `prompt`: advice request text
//! - `fallback`: fixed per-category templates
//! - `selector`: ranking, provider call and fallback policy

pub mod fallback;
pub mod prompt;
pub mod provider;
pub mod selector;
pub mod types;

pub use fallback::{fallback_recommendations, FallbackTemplate};
pub use prompt::build_prompt;
pub use provider::{AdviceProvider, OpenAiAdviceProvider};
pub use selector::{parse_reply, rank_categories, top_categories, RecommendationSelector};
pub use types::{Advice, AdviceError, AdviceSource, Recommendation, Selection};
