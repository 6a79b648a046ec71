use serde::{Deserialize, Serialize};

use crate::lifestyle::LifestyleInput;

/// Emission category. Declaration order is the tie-break order used when
/// ranking categories with equal emissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Travel,
    Transport,
    Diet,
    Shopping,
    HomeEnergy,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Travel,
        Category::Transport,
        Category::Diet,
        Category::Shopping,
        Category::HomeEnergy,
    ];

    /// Breakdown key ("home_energy")
    pub fn key(self) -> &'static str {
        match self {
            Category::Travel => "travel",
            Category::Transport => "transport",
            Category::Diet => "diet",
            Category::Shopping => "shopping",
            Category::HomeEnergy => "home_energy",
        }
    }

    /// Human-readable name for reports and prompts
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Travel => "Travel (flights)",
            Category::Transport => "Daily Transport",
            Category::Diet => "Diet",
            Category::Shopping => "Shopping",
            Category::HomeEnergy => "Home Energy",
        }
    }
}

/// Annual emissions per category, tonnes CO₂, each rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub travel: f64,
    pub transport: f64,
    pub diet: f64,
    pub shopping: f64,
    pub home_energy: f64,
}

impl EmissionBreakdown {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Travel => self.travel,
            Category::Transport => self.transport,
            Category::Diet => self.diet,
            Category::Shopping => self.shopping,
            Category::HomeEnergy => self.home_energy,
        }
    }

    /// All five categories in declaration order
    pub fn entries(&self) -> [(Category, f64); 5] {
        Category::ALL.map(|c| (c, self.get(c)))
    }

    /// Sum of the (already rounded) category figures.
    ///
    /// May differ from [`ResultRecord::total_emissions`] by up to 0.02, since
    /// the total is rounded from the unrounded category sums.
    pub fn sum(&self) -> f64 {
        self.entries().iter().map(|(_, v)| v).sum()
    }
}

/// Output of one calculation, passed unchanged to every downstream consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub total_emissions: f64,
    pub breakdown: EmissionBreakdown,
    pub lifestyle_data: LifestyleInput,
}
