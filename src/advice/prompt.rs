use crate::emissions::{Category, ResultRecord};

/// Build the advice request for one result.
///
/// `top_categories` are the highest-emitting non-zero categories, in ranked
/// order (at most 3 are named).
/// Quantities are printed with a decimal point (`20.0`, not `20`).
pub fn build_prompt(result: &ResultRecord, top_categories: &[Category]) -> String {
    let b = &result.breakdown;
    let l = &result.lifestyle_data;

    let focus = top_categories
        .iter()
        .take(3)
        .map(|c| c.key())
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = Vec::new();

    lines.push("A user has calculated their annual carbon footprint with the following results:".to_string());
    lines.push(String::new());
    lines.push(format!("TOTAL EMISSIONS: {:?} tonnes CO₂ per year", result.total_emissions));
    lines.push(String::new());

    lines.push("BREAKDOWN BY CATEGORY:".to_string());
    for (category, emissions) in b.entries() {
        lines.push(format!("- {}: {:?} tonnes CO₂", category.display_name(), emissions));
    }
    lines.push(String::new());

    lines.push("KEY LIFESTYLE DETAILS:".to_string());
    lines.push(format!("- Short flights per year: {}", l.flights_short));
    lines.push(format!("- Long flights per year: {}", l.flights_long));
    lines.push(format!("- Primary transport: {}", l.transport_type));
    lines.push(format!("- Daily driving distance: {:?} km", l.daily_distance));
    lines.push(format!("- Red meat frequency: {}", l.meat_frequency));
    lines.push(format!("- Dairy frequency: {}", l.dairy_frequency));
    lines.push(format!("- Monthly clothing spend: £{:?}", l.clothing_spend));
    lines.push(format!("- Monthly online shopping: £{:?}", l.online_shopping));
    lines.push(format!("- Home type: {}", l.home_type));
    lines.push(format!("- Heating type: {}", l.heating_type));
    lines.push(String::new());

    lines.push("Please provide exactly 3 personalized, practical recommendations to help reduce their carbon footprint.".to_string());
    lines.push(format!("Focus on the highest-impact categories: {}.", focus));
    lines.push(String::new());
    lines.push("Make the advice:".to_string());
    lines.push("1. Specific and actionable".to_string());
    lines.push("2. Non-judgmental and encouraging".to_string());
    lines.push("3. Realistic for their lifestyle".to_string());
    lines.push("4. Include estimated CO₂ savings where possible".to_string());
    lines.push(String::new());
    lines.push("Respond in JSON format:".to_string());
    lines.push(RESPONSE_SHAPE.to_string());

    lines.join("\n")
}

const RESPONSE_SHAPE: &str = r#"{
    "recommendations": [
        {
            "title": "Short, clear title",
            "description": "Detailed explanation with specific actions",
            "potential_savings": "X.X tonnes CO₂ per year"
        }
    ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emissions::EmissionModel;
    use crate::lifestyle::LifestyleInput;

    fn result() -> ResultRecord {
        EmissionModel::compute(&LifestyleInput {
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
        })
    }

    #[test]
    fn test_prompt_names_totals_and_focus() {
        let prompt = build_prompt(
            &result(),
            &[Category::Shopping, Category::HomeEnergy, Category::Travel],
        );

        assert!(prompt.contains("TOTAL EMISSIONS: 41.01 tonnes CO₂ per year"));
        assert!(prompt.contains("- Daily Transport: 1.31 tonnes CO₂"));
        assert!(prompt.contains("- Shopping: 33.0 tonnes CO₂"));
        assert!(prompt.contains("Focus on the highest-impact categories: shopping, home_energy, travel."));
        assert!(prompt.contains("exactly 3"));
        assert!(prompt.contains("\"recommendations\""));
    }

    #[test]
    fn test_prompt_carries_all_ten_answers() {
        let prompt = build_prompt(&result(), &[]);

        for needle in [
            "Short flights per year: 2",
            "Long flights per year: 1",
            "Primary transport: Car (Petrol)",
            "Daily driving distance: 20.0 km",
            "Red meat frequency: 1-2 times per week",
            "Dairy frequency: Sometimes",
            "Monthly clothing spend: £50.0",
            "Monthly online shopping: £100.0",
            "Home type: Medium House",
            "Heating type: Gas Boiler",
        ] {
            assert!(prompt.contains(needle), "missing '{}'", needle);
        }
    }
}
