//! Recommendation Selector
//!
//! Ranks categories, asks the advice provider for recommendations and falls
//! back to the fixed templates on any failure. Provider errors, malformed
//! replies and timeouts are all absorbed here; callers always get a list.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use smallvec::SmallVec;

use crate::advice::fallback::{fallback_recommendations, MAX_RECOMMENDATIONS};
use crate::advice::prompt::build_prompt;
use crate::advice::provider::AdviceProvider;
use crate::advice::types::{AdviceError, AdviceSource, Recommendation, Selection};
use crate::emissions::{Category, EmissionBreakdown, ResultRecord};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct RecommendationSelector {
    provider: Option<Arc<dyn AdviceProvider>>,
    timeout: Duration,
}

impl RecommendationSelector {
    pub fn new(provider: Arc<dyn AdviceProvider>) -> Self {
        Self {
            provider: Some(provider),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Selector without a provider: always uses the fallback templates
    pub fn offline() -> Self {
        Self {
            provider: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn select(&self, result: &ResultRecord) -> Vec<Recommendation> {
        self.select_with_source(result).await.recommendations
    }

    /// Select recommendations and report which path produced them.
    pub async fn select_with_source(&self, result: &ResultRecord) -> Selection {
        let top = top_categories(&result.breakdown);

        if let Some(provider) = &self.provider {
            let categories: SmallVec<[Category; 3]> = top.iter().map(|(c, _)| *c).collect();
            let prompt = build_prompt(result, &categories);

            match self.ask_provider(provider.as_ref(), &prompt).await {
                Ok(recommendations) => {
                    tracing::debug!("Advice provider returned {} recommendations", recommendations.len());
                    return Selection {
                        recommendations,
                        source: AdviceSource::Provider,
                    };
                }
                Err(e) => {
                    tracing::warn!("Advice provider failed, using fallback recommendations: {}", e);
                }
            }
        }

        Selection {
            recommendations: fallback_recommendations(&top),
            source: AdviceSource::Fallback,
        }
    }

    async fn ask_provider(
        &self,
        provider: &dyn AdviceProvider,
        prompt: &str,
    ) -> Result<Vec<Recommendation>, AdviceError> {
        let reply = tokio::time::timeout(self.timeout, provider.suggest(prompt))
            .await
            .map_err(|_| AdviceError::Timeout(self.timeout.as_secs()))??;

        parse_reply(&reply)
    }
}

/// Decode a provider reply. Succeeds for any JSON object with a
/// `recommendations` array, whose items are returned as received; the item
/// count is not capped.
pub fn parse_reply(reply: &str) -> Result<Vec<Recommendation>, AdviceError> {
    let mut value: Value = serde_json::from_str(reply)?;

    match value.get_mut("recommendations").map(Value::take) {
        Some(Value::Array(items)) => Ok(items.into_iter().map(Recommendation::from_value).collect()),
        _ => Err(AdviceError::MissingRecommendations),
    }
}

/// All five categories, highest emissions first. Equal values keep
/// declaration order (travel, transport, diet, shopping, home_energy).
pub fn rank_categories(breakdown: &EmissionBreakdown) -> SmallVec<[(Category, f64); 5]> {
    let mut ranked: SmallVec<[(Category, f64); 5]> = breakdown.entries().into_iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Up to 3 highest-emitting categories with emissions > 0
pub fn top_categories(breakdown: &EmissionBreakdown) -> SmallVec<[(Category, f64); 3]> {
    rank_categories(breakdown)
        .into_iter()
        .filter(|(_, emissions)| *emissions > 0.0)
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
