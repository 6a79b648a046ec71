//! Footprint reports
//!
//! A [`FootprintReport`] bundles the result record, category insights,
//! recommendations and comparisons to reference averages. Formatters render
//! it as markdown or JSON.

pub mod json;
pub mod markdown;
pub mod types;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use types::{benchmark_comparisons, BenchmarkComparison, FootprintReport, GLOBAL_AVERAGE, UK_AVERAGE};

use crate::advice::{fallback_recommendations, top_categories, AdviceSource, Recommendation};
use crate::emissions::ResultRecord;
use crate::insights::InsightClassifier;

impl FootprintReport {
    /// Assemble a report from a computed result and its recommendations
    pub fn build(result: ResultRecord, recommendations: Vec<Recommendation>, advice_source: AdviceSource) -> Self {
        let insights = InsightClassifier::classify(&result.breakdown, result.total_emissions);
        let comparisons = benchmark_comparisons(result.total_emissions);

        Self {
            result,
            insights,
            recommendations,
            advice_source,
            comparisons,
        }
    }

    /// Report using only the fallback templates
    pub fn offline(result: ResultRecord) -> Self {
        let recommendations = fallback_recommendations(&top_categories(&result.breakdown));
        Self::build(result, recommendations, AdviceSource::Fallback)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::emissions::EmissionModel;
    use crate::lifestyle::LifestyleInput;

    pub(crate) fn reference_report() -> FootprintReport {
        FootprintReport::offline(EmissionModel::compute(&LifestyleInput {
            flights_short: 2,
            flights_long: 1,
            transport_type: "Car (Petrol)".to_string(),
            daily_distance: 20.0,
            meat_frequency: "1-2 times per week".to_string(),
            dairy_frequency: "Sometimes".to_string(),
            clothing_spend: 50.0,
            online_shopping: 100.0,
            home_type: "Medium House".to_string(),
            heating_type: "Gas Boiler".to_string(),
        }))
    }

    #[test]
    fn test_offline_report_has_all_parts() {
        let report = reference_report();
        assert_eq!(report.insights.len(), 5);
        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(report.advice_source, AdviceSource::Fallback);
        assert_eq!(report.comparisons.len(), 2);
    }
}
