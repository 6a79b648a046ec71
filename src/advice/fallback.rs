//! Fallback Recommendations
//!
//! Offline, deterministic advice used whenever the provider path fails. One
//! fixed template per category; the savings figure is a fixed fraction of
//! that category's emissions.

use crate::advice::types::{Advice, Recommendation};
use crate::emissions::Category;

/// Fixed advice for one category
#[derive(Debug, Clone)]
pub struct FallbackTemplate {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    /// Share of the category's emissions the advice could save
    pub savings_fraction: f64,
}

static TEMPLATES: &[FallbackTemplate] = &[
    FallbackTemplate {
        category: Category::Travel,
        title: "Reduce Flight Emissions",
        description: "Consider reducing the number of flights per year, choosing direct routes when possible, and exploring train alternatives for shorter distances. Video conferencing can replace some business travel.",
        savings_fraction: 0.3,
    },
    FallbackTemplate {
        category: Category::Transport,
        title: "Optimize Daily Transportation",
        description: "Consider walking, cycling, or using public transport more often. If driving is necessary, consider carpooling, combining trips, or switching to an electric vehicle.",
        savings_fraction: 0.4,
    },
    FallbackTemplate {
        category: Category::Diet,
        title: "Adjust Your Diet",
        description: "Reducing red meat consumption and choosing more plant-based meals can significantly lower your carbon footprint. Try \"Meatless Monday\" or explore delicious vegetarian recipes.",
        savings_fraction: 0.5,
    },
    FallbackTemplate {
        category: Category::Shopping,
        title: "Mindful Shopping Habits",
        description: "Buy less, choose quality over quantity, shop second-hand when possible, and avoid impulse purchases. Consider the lifecycle of products before buying.",
        savings_fraction: 0.3,
    },
    FallbackTemplate {
        category: Category::HomeEnergy,
        title: "Improve Home Energy Efficiency",
        description: "Improve insulation, use energy-efficient appliances, lower heating temperatures by 1-2°C, and consider renewable energy options like solar panels or green energy suppliers.",
        savings_fraction: 0.25,
    },
];

pub const MAX_RECOMMENDATIONS: usize = 3;

pub fn template_for(category: Category) -> Option<&'static FallbackTemplate> {
    TEMPLATES.iter().find(|t| t.category == category)
}

/// Render the template for `category` with the given emissions.
pub fn category_recommendation(category: Category, emissions: f64) -> Option<Recommendation> {
    let template = template_for(category)?;

    Some(Recommendation::Advice(Advice {
        title: template.title.to_string(),
        description: template.description.to_string(),
        potential_savings: format!(
            "{:.1} tonnes CO₂ per year",
            emissions * template.savings_fraction
        ),
    }))
}

/// Fallback advice for already-ranked `(category, emissions)` pairs.
/// Zero-emission categories are skipped; at most 3 are returned.
pub fn fallback_recommendations(ranked: &[(Category, f64)]) -> Vec<Recommendation> {
    ranked
        .iter()
        .filter(|(_, emissions)| *emissions > 0.0)
        .filter_map(|&(category, emissions)| category_recommendation(category, emissions))
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
