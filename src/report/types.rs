use serde::{Deserialize, Serialize};

use crate::advice::{AdviceSource, Recommendation};
use crate::emissions::ResultRecord;
use crate::insights::CategoryInsights;
use crate::utils::round_to;

/// Reference annual footprints (tonnes CO₂e per person)
pub const UK_AVERAGE: f64 = 8.5;
pub const GLOBAL_AVERAGE: f64 = 4.8;

/// Complete estimate for one questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintReport {
    pub result: ResultRecord,
    pub insights: CategoryInsights,
    pub recommendations: Vec<Recommendation>,
    pub advice_source: AdviceSource,
    pub comparisons: Vec<BenchmarkComparison>,
}

/// Total compared against a reference average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub name: String,
    pub average: f64,
    /// `total - average`, 1 decimal. Negative means below the average.
    pub difference: f64,
}

impl BenchmarkComparison {
    pub fn new(name: &str, average: f64, total: f64) -> Self {
        Self {
            name: name.to_string(),
            average,
            difference: round_to(total - average, 1),
        }
    }

    pub fn is_below(&self) -> bool {
        self.difference < 0.0
    }
}

/// UK and global comparisons for `total`
pub fn benchmark_comparisons(total: f64) -> Vec<BenchmarkComparison> {
    vec![
        BenchmarkComparison::new("UK average", UK_AVERAGE, total),
        BenchmarkComparison::new("Global average", GLOBAL_AVERAGE, total),
    ]
}
