//! Footprint Estimator
//!
//! Entry point tying the emission model, insight classification and
//! recommendation selection together into a [`FootprintReport`].

use std::sync::Arc;
use std::time::Duration;

use crate::advice::{AdviceError, AdviceProvider, OpenAiAdviceProvider, RecommendationSelector};
use crate::config::EngineConfig;
use crate::emissions::{EmissionModel, ResultRecord};
use crate::lifestyle::{LifestyleInput, ValidationError};
use crate::report::FootprintReport;

pub struct FootprintEstimator {
    selector: RecommendationSelector,
    strict_validation: bool,
}

impl FootprintEstimator {
    pub fn new(selector: RecommendationSelector) -> Self {
        Self {
            selector,
            strict_validation: false,
        }
    }

    /// Estimator that never calls a provider
    pub fn offline() -> Self {
        Self::new(RecommendationSelector::offline())
    }

    pub fn with_provider(provider: Arc<dyn AdviceProvider>) -> Self {
        Self::new(RecommendationSelector::new(provider))
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    /// Build from configuration. A missing API key gives an offline estimator.
    pub fn from_config(config: &EngineConfig) -> Result<Self, AdviceError> {
        let timeout = Duration::from_secs(config.advice.timeout_secs);

        let selector = match OpenAiAdviceProvider::from_config(&config.advice)? {
            Some(provider) => {
                tracing::info!("Advice provider enabled (model {})", config.advice.model);
                RecommendationSelector::new(Arc::new(provider)).with_timeout(timeout)
            }
            None => {
                tracing::info!("No advice API key configured, using fallback recommendations only");
                RecommendationSelector::offline().with_timeout(timeout)
            }
        };

        Ok(Self::new(selector).with_strict_validation(config.strict_validation))
    }

    pub fn strict_validation(&self) -> bool {
        self.strict_validation
    }

    pub fn has_provider(&self) -> bool {
        self.selector.has_provider()
    }

    /// Apply strict validation when enabled. Lenient mode accepts anything.
    pub fn check(&self, lifestyle: &LifestyleInput) -> Result<(), ValidationError> {
        if self.strict_validation {
            lifestyle.validate()?;
        }
        Ok(())
    }

    /// Emission figures only, no advice
    pub fn compute(&self, lifestyle: &LifestyleInput) -> Result<ResultRecord, ValidationError> {
        self.check(lifestyle)?;
        Ok(EmissionModel::compute(lifestyle))
    }

    /// Full estimate: figures, insights, recommendations and comparisons
    pub async fn estimate(&self, lifestyle: &LifestyleInput) -> Result<FootprintReport, ValidationError> {
        let result = self.compute(lifestyle)?;
        let selection = self.selector.select_with_source(&result).await;

        tracing::info!(
            "Estimated footprint {:.2} t ({} recommendations, {:?})",
            result.total_emissions,
            selection.recommendations.len(),
            selection.source
        );

        Ok(FootprintReport::build(result, selection.recommendations, selection.source))
    }

    /// Figures for many questionnaires in parallel, order preserved.
    /// Fails on the first invalid input when strict validation is on.
    pub fn estimate_batch(&self, inputs: &[LifestyleInput]) -> Result<Vec<ResultRecord>, ValidationError> {
        for input in inputs {
            self.check(input)?;
        }
        Ok(EmissionModel::compute_batch(inputs))
    }
}
