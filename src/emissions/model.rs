//! Emission Model
//!
//! Pure function from a completed questionnaire to an annual emissions
//! breakdown. Unknown answers never fail: they fall back to the category
//! default documented in [`crate::emissions::factors`].

use rayon::prelude::*;

use crate::emissions::factors;
use crate::emissions::types::{EmissionBreakdown, ResultRecord};
use crate::lifestyle::LifestyleInput;
use crate::utils::round_to;

/// Emission model over the fixed factor tables
pub struct EmissionModel;

impl EmissionModel {
    /// Compute the emissions estimate for one questionnaire.
    ///
    /// Each category is rounded to 2 decimals for the breakdown, while the
    /// total is rounded from the unrounded category sums. The two can
    /// disagree by up to 0.02.
    pub fn compute(lifestyle: &LifestyleInput) -> ResultRecord {
        let travel = Self::travel(lifestyle);
        let transport = Self::transport(lifestyle);
        let diet = Self::diet(lifestyle);
        let shopping = Self::shopping(lifestyle);
        let home_energy = Self::home_energy(lifestyle);

        let total = travel + transport + diet + shopping + home_energy;

        let breakdown = EmissionBreakdown {
            travel: round_to(travel, 2),
            transport: round_to(transport, 2),
            diet: round_to(diet, 2),
            shopping: round_to(shopping, 2),
            home_energy: round_to(home_energy, 2),
        };

        tracing::debug!(
            "Computed footprint: total={:.2}, travel={:.2}, transport={:.2}, diet={:.2}, shopping={:.2}, home_energy={:.2}",
            total, travel, transport, diet, shopping, home_energy
        );

        ResultRecord {
            total_emissions: round_to(total, 2),
            breakdown,
            lifestyle_data: lifestyle.clone(),
        }
    }

    /// Compute many independent questionnaires in parallel (Rayon).
    /// Output order matches input order.
    pub fn compute_batch(inputs: &[LifestyleInput]) -> Vec<ResultRecord> {
        inputs.par_iter().map(Self::compute).collect()
    }

    /// Flights: per-flight factor × count
    pub fn travel(lifestyle: &LifestyleInput) -> f64 {
        lifestyle.flights_short as f64 * factors::FLIGHT_SHORT
            + lifestyle.flights_long as f64 * factors::FLIGHT_LONG
    }

    /// Daily transport, annualised. Unknown modes contribute nothing.
    pub fn transport(lifestyle: &LifestyleInput) -> f64 {
        match lifestyle.transport().and_then(factors::transport_kg_per_km) {
            Some(kg_per_km) => {
                let daily_kg = lifestyle.daily_distance * kg_per_km;
                daily_kg * factors::DAYS_PER_YEAR / factors::KG_PER_TONNE
            }
            None => 0.0,
        }
    }

    /// Meat plus dairy. Unknown frequencies contribute nothing.
    pub fn diet(lifestyle: &LifestyleInput) -> f64 {
        let meat = lifestyle.meat().and_then(factors::meat).unwrap_or(0.0);
        let dairy = lifestyle.dairy().and_then(factors::dairy).unwrap_or(0.0);
        meat + dairy
    }

    /// Clothing and online spend, annualised
    pub fn shopping(lifestyle: &LifestyleInput) -> f64 {
        let clothing_annual = lifestyle.clothing_spend * factors::MONTHS_PER_YEAR;
        let online_annual = lifestyle.online_shopping * factors::MONTHS_PER_YEAR;

        clothing_annual * factors::CLOTHING_FACTOR + online_annual * factors::ONLINE_SHOPPING_FACTOR
    }

    /// Dwelling base × heating multiplier
    pub fn home_energy(lifestyle: &LifestyleInput) -> f64 {
        let base = lifestyle
            .home()
            .and_then(factors::home_base)
            .unwrap_or(factors::DEFAULT_HOME_BASE);
        let multiplier = lifestyle
            .heating()
            .and_then(factors::heating_multiplier)
            .unwrap_or(factors::DEFAULT_HEATING_MULTIPLIER);

        base * multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference_input() -> LifestyleInput {
        LifestyleInput {
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
        }
    }

    fn minimal_input(home: &str, heating: &str) -> LifestyleInput {
        LifestyleInput {
            flights_short: 0,
            flights_long: 0,
            transport_type: "Walking/Cycling".to_string(),
            daily_distance: 0.0,
            meat_frequency: "Never".to_string(),
            dairy_frequency: "Never".to_string(),
            clothing_spend: 0.0,
            online_shopping: 0.0,
            home_type: home.to_string(),
            heating_type: heating.to_string(),
        }
    }

    #[test]
    fn test_reference_breakdown() {
        let result = EmissionModel::compute(&reference_input());
        let b = result.breakdown;

        assert_abs_diff_eq!(b.travel, 2.10, epsilon = 1e-9);
        assert_abs_diff_eq!(b.transport, 1.31, epsilon = 1e-9);
        assert_abs_diff_eq!(b.diet, 1.10, epsilon = 1e-9);
        assert_abs_diff_eq!(b.shopping, 33.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.home_energy, 3.50, epsilon = 1e-9);
        assert_abs_diff_eq!(result.total_emissions, 41.01, epsilon = 1e-9);
    }

    #[test]
    fn test_home_energy_only_baseline() {
        let result = EmissionModel::compute(&minimal_input("Apartment/Flat", "Heat Pump"));
        assert_abs_diff_eq!(result.total_emissions, 0.60, epsilon = 1e-9);
        assert_abs_diff_eq!(result.breakdown.home_energy, 0.60, epsilon = 1e-9);
        assert_eq!(result.breakdown.travel, 0.0);
        assert_eq!(result.breakdown.shopping, 0.0);
    }

    #[test]
    fn test_unknown_home_and_heating_use_defaults() {
        let result = EmissionModel::compute(&minimal_input("Houseboat", "Geothermal"));
        // 2.5 × 1.0
        assert_abs_diff_eq!(result.breakdown.home_energy, 2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_transport_contributes_nothing() {
        let mut input = reference_input();
        input.transport_type = "Hoverboard".to_string();
        input.daily_distance = 50.0;

        assert_eq!(EmissionModel::transport(&input), 0.0);
    }

    #[test]
    fn test_unknown_diet_answers_contribute_nothing() {
        let mut input = reference_input();
        input.meat_frequency = "Weekly".to_string();
        assert_abs_diff_eq!(EmissionModel::diet(&input), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_long_flight_adds_exactly_one_and_a_half() {
        let base = reference_input();
        let mut more = base.clone();
        more.flights_long += 1;

        let before = EmissionModel::compute(&base).breakdown.travel;
        let after = EmissionModel::compute(&more).breakdown.travel;
        assert_abs_diff_eq!(after - before, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_breakdown_rounds_exact_value_not_scaled_value() {
        let mut petrol = reference_input();
        petrol.daily_distance = 50.0;
        assert_eq!(EmissionModel::compute(&petrol).breakdown.transport, 3.29);

        let mut public = reference_input();
        public.transport_type = "Public Transport".to_string();
        public.daily_distance = 75.0;
        assert_eq!(EmissionModel::compute(&public).breakdown.transport, 1.09);
    }

    #[test]
    fn test_total_close_to_rounded_sum() {
        let mut input = reference_input();
        for distance in [0.0, 3.3, 7.77, 13.0, 41.9] {
            input.daily_distance = distance;
            let result = EmissionModel::compute(&input);
            let rounded_sum = round_to(result.breakdown.sum(), 2);
            assert!(
                (rounded_sum - result.total_emissions).abs() <= 0.02 + 1e-9,
                "distance {}: sum {} vs total {}",
                distance,
                rounded_sum,
                result.total_emissions
            );
        }
    }

    #[test]
    fn test_result_carries_input() {
        let input = reference_input();
        let result = EmissionModel::compute(&input);
        assert_eq!(result.lifestyle_data, input);
    }

    #[test]
    fn test_batch_preserves_order() {
        let inputs = vec![
            minimal_input("Apartment/Flat", "Heat Pump"),
            reference_input(),
            minimal_input("Large House", "Oil Heating"),
        ];

        let results = EmissionModel::compute_batch(&inputs);
        assert_eq!(results.len(), 3);
        assert_abs_diff_eq!(results[0].total_emissions, 0.6, epsilon = 1e-9);
        assert_abs_diff_eq!(results[1].total_emissions, 41.01, epsilon = 1e-9);
        assert_abs_diff_eq!(results[2].total_emissions, 6.5, epsilon = 1e-9);
    }
}
