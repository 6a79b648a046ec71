//! Category Insights
//!
//! Share of the total per category, bucketed into a severity level.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::emissions::{Category, EmissionBreakdown};
use crate::utils::round_to;

/// Relative severity of one category's share of the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl SeverityLevel {
    /// Bucket a percentage of total emissions (first match wins):
    /// >40 Very High, >25 High, >15 Medium, >5 Low, otherwise Very Low.
    pub fn from_percentage(percentage: f64) -> Self {
        match percentage {
            p if p > 40.0 => SeverityLevel::VeryHigh,
            p if p > 25.0 => SeverityLevel::High,
            p if p > 15.0 => SeverityLevel::Medium,
            p if p > 5.0 => SeverityLevel::Low,
            _ => SeverityLevel::VeryLow,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::VeryLow => "Very Low",
            SeverityLevel::Low => "Low",
            SeverityLevel::Medium => "Medium",
            SeverityLevel::High => "High",
            SeverityLevel::VeryHigh => "Very High",
        }
    }
}

/// Insight for a single category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryInsight {
    pub emissions: f64,
    /// Share of the total (0 when the total is 0). Unrounded in memory,
    /// serialized to 1 decimal place.
    #[serde(serialize_with = "serialize_one_decimal")]
    pub percentage: f64,
    pub level: SeverityLevel,
}

impl CategoryInsight {
    /// Percentage to 1 decimal place, for display
    pub fn display_percentage(&self) -> f64 {
        round_to(self.percentage, 1)
    }
}

fn serialize_one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, 1))
}

pub type CategoryInsights = BTreeMap<Category, CategoryInsight>;

pub struct InsightClassifier;

impl InsightClassifier {
    /// Classify every category of `breakdown` against `total`.
    pub fn classify(breakdown: &EmissionBreakdown, total: f64) -> CategoryInsights {
        breakdown
            .entries()
            .into_iter()
            .map(|(category, emissions)| {
                let percentage = if total > 0.0 {
                    emissions / total * 100.0
                } else {
                    0.0
                };

                let insight = CategoryInsight {
                    emissions,
                    percentage,
                    level: SeverityLevel::from_percentage(percentage),
                };
                (category, insight)
            })
            .collect()
    }
}
