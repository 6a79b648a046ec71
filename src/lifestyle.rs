//! Lifestyle Questionnaire Input
//!
//! The answers collected by the questionnaire, as handed to the emission model.
//! Enumerated answers are kept as their questionnaire labels so an unrecognised
//! label survives untouched into the advice prompt and the calculation history;
//! the typed enums below are only used when looking up emission factors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleInput {
    /// Short flights (< 3 hours) in the past year
    pub flights_short: u32,
    /// Long flights (> 3 hours) in the past year
    pub flights_long: u32,
    /// Primary mode of daily transportation (see [`TransportType`])
    pub transport_type: String,
    /// Average daily distance in km, multiplied by the mode's per-km factor
    pub daily_distance: f64,
    /// Red meat frequency (see [`MeatFrequency`])
    pub meat_frequency: String,
    /// Dairy frequency (see [`DairyFrequency`])
    pub dairy_frequency: String,
    /// Monthly spend on clothing
    pub clothing_spend: f64,
    /// Monthly spend on online shopping and deliveries
    pub online_shopping: f64,
    /// Dwelling size (see [`HomeType`])
    pub home_type: String,
    /// Primary heating source (see [`HeatingType`])
    pub heating_type: String,
}

/// Strict validation failure. Only produced by [`LifestyleInput::validate`];
/// the emission model itself never rejects input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidQuantity { field: &'static str, value: f64 },

    #[error("{field} has unrecognised value '{value}'")]
    UnknownOption { field: &'static str, value: String },
}

impl LifestyleInput {
    /// Reject negative or non-finite quantities and unrecognised labels.
    ///
    /// This is stricter than [`crate::EmissionModel::compute`], which silently
    /// falls back to default factors for unknown labels.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("daily_distance", self.daily_distance),
            ("clothing_spend", self.clothing_spend),
            ("online_shopping", self.online_shopping),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidQuantity { field, value });
            }
        }

        check_label("transport_type", &self.transport_type, TransportType::from_label)?;
        check_label("meat_frequency", &self.meat_frequency, MeatFrequency::from_label)?;
        check_label("dairy_frequency", &self.dairy_frequency, DairyFrequency::from_label)?;
        check_label("home_type", &self.home_type, HomeType::from_label)?;
        check_label("heating_type", &self.heating_type, HeatingType::from_label)?;

        Ok(())
    }

    pub fn transport(&self) -> Option<TransportType> {
        TransportType::from_label(&self.transport_type)
    }

    pub fn meat(&self) -> Option<MeatFrequency> {
        MeatFrequency::from_label(&self.meat_frequency)
    }

    pub fn dairy(&self) -> Option<DairyFrequency> {
        DairyFrequency::from_label(&self.dairy_frequency)
    }

    pub fn home(&self) -> Option<HomeType> {
        HomeType::from_label(&self.home_type)
    }

    pub fn heating(&self) -> Option<HeatingType> {
        HeatingType::from_label(&self.heating_type)
    }
}

fn check_label<T>(
    field: &'static str,
    value: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<(), ValidationError> {
    match parse(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::UnknownOption {
            field,
            value: value.to_string(),
        }),
    }
}

// ============================================================================
// Questionnaire Options
// ============================================================================

/// Primary mode of daily transportation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportType {
    WalkingCycling,
    PublicTransport,
    CarPetrol,
    CarDiesel,
    CarElectric,
    Motorcycle,
}

impl TransportType {
    pub const ALL: [TransportType; 6] = [
        TransportType::WalkingCycling,
        TransportType::PublicTransport,
        TransportType::CarPetrol,
        TransportType::CarDiesel,
        TransportType::CarElectric,
        TransportType::Motorcycle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransportType::WalkingCycling => "Walking/Cycling",
            TransportType::PublicTransport => "Public Transport",
            TransportType::CarPetrol => "Car (Petrol)",
            TransportType::CarDiesel => "Car (Diesel)",
            TransportType::CarElectric => "Car (Electric)",
            TransportType::Motorcycle => "Motorcycle",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// Red meat consumption frequency (5-point ordinal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeatFrequency {
    Never,
    MonthlyOnceOrTwice,
    WeeklyOnceOrTwice,
    WeeklyThreeToFour,
    Daily,
}

impl MeatFrequency {
    pub const ALL: [MeatFrequency; 5] = [
        MeatFrequency::Never,
        MeatFrequency::MonthlyOnceOrTwice,
        MeatFrequency::WeeklyOnceOrTwice,
        MeatFrequency::WeeklyThreeToFour,
        MeatFrequency::Daily,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MeatFrequency::Never => "Never",
            MeatFrequency::MonthlyOnceOrTwice => "1-2 times per month",
            MeatFrequency::WeeklyOnceOrTwice => "1-2 times per week",
            MeatFrequency::WeeklyThreeToFour => "3-4 times per week",
            MeatFrequency::Daily => "Daily",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }
}

/// Dairy consumption frequency (5-point ordinal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DairyFrequency {
    Never,
    Rarely,
    Sometimes,
    Regularly,
    Daily,
}

impl DairyFrequency {
    pub const ALL: [DairyFrequency; 5] = [
        DairyFrequency::Never,
        DairyFrequency::Rarely,
        DairyFrequency::Sometimes,
        DairyFrequency::Regularly,
        DairyFrequency::Daily,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DairyFrequency::Never => "Never",
            DairyFrequency::Rarely => "Rarely",
            DairyFrequency::Sometimes => "Sometimes",
            DairyFrequency::Regularly => "Regularly",
            DairyFrequency::Daily => "Daily",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }
}

/// Dwelling size proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeType {
    ApartmentFlat,
    SmallHouse,
    MediumHouse,
    LargeHouse,
}

impl HomeType {
    pub const ALL: [HomeType; 4] = [
        HomeType::ApartmentFlat,
        HomeType::SmallHouse,
        HomeType::MediumHouse,
        HomeType::LargeHouse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HomeType::ApartmentFlat => "Apartment/Flat",
            HomeType::SmallHouse => "Small House",
            HomeType::MediumHouse => "Medium House",
            HomeType::LargeHouse => "Large House",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.label() == label)
    }
}

/// Primary heating source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatingType {
    GasBoiler,
    ElectricHeating,
    HeatPump,
    OilHeating,
    WoodBiomass,
}

impl HeatingType {
    pub const ALL: [HeatingType; 5] = [
        HeatingType::GasBoiler,
        HeatingType::ElectricHeating,
        HeatingType::HeatPump,
        HeatingType::OilHeating,
        HeatingType::WoodBiomass,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HeatingType::GasBoiler => "Gas Boiler",
            HeatingType::ElectricHeating => "Electric Heating",
            HeatingType::HeatPump => "Heat Pump",
            HeatingType::OilHeating => "Oil Heating",
            HeatingType::WoodBiomass => "Wood/Biomass",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.label() == label)
    }
}
