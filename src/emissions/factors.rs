//! Emission Factor Tables
//!
//! Fixed factors for every questionnaire answer. All values are tonnes CO₂ per
//! year unless stated otherwise.
//!
//! Lookups return `None` for answers outside the table; the model applies the
//! category default in that case.

use crate::lifestyle::{DairyFrequency, HeatingType, HomeType, MeatFrequency, TransportType};

// ============================================================================
// TRAVEL
// ============================================================================

/// Per short flight (< 3 hours)
pub const FLIGHT_SHORT: f64 = 0.3;

/// Per long flight (> 3 hours)
pub const FLIGHT_LONG: f64 = 1.5;

// ============================================================================
// DAILY TRANSPORT (kg CO₂ per km)
// ============================================================================

static TRANSPORT_KG_PER_KM: &[(TransportType, f64)] = &[
    (TransportType::WalkingCycling, 0.0),
    (TransportType::PublicTransport, 0.04),
    (TransportType::CarPetrol, 0.18),
    (TransportType::CarDiesel, 0.16),
    (TransportType::CarElectric, 0.05), // includes electricity generation
    (TransportType::Motorcycle, 0.12),
];

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const KG_PER_TONNE: f64 = 1000.0;

// ============================================================================
// DIET
// ============================================================================

static MEAT: &[(MeatFrequency, f64)] = &[
    (MeatFrequency::Never, 0.0),
    (MeatFrequency::MonthlyOnceOrTwice, 0.3),
    (MeatFrequency::WeeklyOnceOrTwice, 0.8),
    (MeatFrequency::WeeklyThreeToFour, 1.5),
    (MeatFrequency::Daily, 2.5),
];

static DAIRY: &[(DairyFrequency, f64)] = &[
    (DairyFrequency::Never, 0.0),
    (DairyFrequency::Rarely, 0.1),
    (DairyFrequency::Sometimes, 0.3),
    (DairyFrequency::Regularly, 0.6),
    (DairyFrequency::Daily, 1.0),
];

// ============================================================================
// SHOPPING
// ============================================================================
//
// Applied to annual spend (monthly × 12). These are used exactly as the
// questionnaire back-end defines them; with tonnes as the output unit they
// give tens of tonnes for ordinary spending, an order of magnitude above the
// other categories.

pub const CLOTHING_FACTOR: f64 = 0.025;
pub const ONLINE_SHOPPING_FACTOR: f64 = 0.015;
pub const MONTHS_PER_YEAR: f64 = 12.0;

// ============================================================================
// HOME ENERGY
// ============================================================================

static HOME_BASE: &[(HomeType, f64)] = &[
    (HomeType::ApartmentFlat, 1.5),
    (HomeType::SmallHouse, 2.5),
    (HomeType::MediumHouse, 3.5),
    (HomeType::LargeHouse, 5.0),
];

static HEATING_MULTIPLIER: &[(HeatingType, f64)] = &[
    (HeatingType::GasBoiler, 1.0),
    (HeatingType::ElectricHeating, 1.2),
    (HeatingType::HeatPump, 0.4),
    (HeatingType::OilHeating, 1.3),
    (HeatingType::WoodBiomass, 0.1),
];

/// Home base used when the dwelling type is not recognised
pub const DEFAULT_HOME_BASE: f64 = 2.5;

/// Multiplier used when the heating source is not recognised
pub const DEFAULT_HEATING_MULTIPLIER: f64 = 1.0;

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

fn lookup<K: PartialEq + Copy>(table: &[(K, f64)], key: K) -> Option<f64> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn transport_kg_per_km(transport: TransportType) -> Option<f64> {
    lookup(TRANSPORT_KG_PER_KM, transport)
}

pub fn meat(frequency: MeatFrequency) -> Option<f64> {
    lookup(MEAT, frequency)
}

pub fn dairy(frequency: DairyFrequency) -> Option<f64> {
    lookup(DAIRY, frequency)
}

pub fn home_base(home: HomeType) -> Option<f64> {
    lookup(HOME_BASE, home)
}

pub fn heating_multiplier(heating: HeatingType) -> Option<f64> {
    lookup(HEATING_MULTIPLIER, heating)
}
