use crate::report::types::FootprintReport;

/// Markdown formatter for footprint reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &FootprintReport) -> String {
        let mut md = String::with_capacity(2048);
        let result = &report.result;

        md.push_str("# Your Carbon Footprint\n\n");
        md.push_str(&format!(
            "**Total:** {:.2} tonnes CO₂e per year\n\n",
            result.total_emissions
        ));

        // Comparisons
        for comparison in &report.comparisons {
            let direction = if comparison.is_below() { "below" } else { "above" };
            md.push_str(&format!(
                "- {:.1} t {} the {} ({:.1} t)\n",
                comparison.difference.abs(),
                direction,
                comparison.name,
                comparison.average
            ));
        }
        md.push('\n');

        // Breakdown
        md.push_str("## Breakdown\n\n");
        md.push_str("| Category | Tonnes CO₂e | Share | Level |\n");
        md.push_str("|----------|-------------|-------|-------|\n");
        for (category, emissions) in result.breakdown.entries() {
            match report.insights.get(&category) {
                Some(insight) => md.push_str(&format!(
                    "| {} | {:.2} | {:.1}% | {} |\n",
                    category.display_name(),
                    emissions,
                    insight.display_percentage(),
                    insight.level.label()
                )),
                None => md.push_str(&format!(
                    "| {} | {:.2} | - | - |\n",
                    category.display_name(),
                    emissions
                )),
            }
        }
        md.push('\n');

        // Recommendations
        if !report.recommendations.is_empty() {
            md.push_str("## Recommendations\n\n");
            for (i, rec) in report.recommendations.iter().enumerate() {
                match rec.title() {
                    Some(title) => md.push_str(&format!("### {}. {}\n\n", i + 1, title)),
                    None => md.push_str(&format!("### {}. {}\n\n", i + 1, rec.summary())),
                }
                if let Some(description) = rec.description() {
                    md.push_str(&format!("{}\n\n", description));
                }
                if let Some(savings) = rec.potential_savings().filter(|s| !s.is_empty()) {
                    md.push_str(&format!("*Potential savings:* {}\n\n", savings));
                }
            }
        }

        md
    }
}
