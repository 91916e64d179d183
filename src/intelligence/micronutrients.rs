// ABOUTME: Micronutrient adequacy against fixed daily values
// ABOUTME: Percent of daily value and Adequate/Moderate/Low status derived from supplied intake
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Micronutrient adequacy
//!
//! The food ledger carries no micronutrient fields, so intake is an input:
//! a JSON object keyed by nutrient name (`vitaminD`, `iron`, ...) holding the
//! average daily amount in the nutrient's unit. Status is derived from the
//! percent of daily value and never asserted.

use crate::constants::thresholds::{ADEQUATE_PERCENT_DV, MODERATE_PERCENT_DV};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A tracked micronutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Micronutrient {
    /// Vitamin D (mcg)
    VitaminD,
    /// Vitamin E (mg)
    VitaminE,
    /// Vitamin K (mcg)
    VitaminK,
    /// Vitamin C (mg)
    VitaminC,
    /// Folate (mcg DFE)
    Folate,
    /// Vitamin B12 (mcg)
    VitaminB12,
    /// Calcium (mg)
    Calcium,
    /// Iron (mg)
    Iron,
    /// Zinc (mg)
    Zinc,
    /// Magnesium (mg)
    Magnesium,
    /// Potassium (mg)
    Potassium,
}

impl Micronutrient {
    /// Every tracked micronutrient in report order
    pub const ALL: [Self; 11] = [
        Self::VitaminD,
        Self::VitaminE,
        Self::VitaminK,
        Self::VitaminC,
        Self::Folate,
        Self::VitaminB12,
        Self::Calcium,
        Self::Iron,
        Self::Zinc,
        Self::Magnesium,
        Self::Potassium,
    ];

    /// Adult daily value
    #[must_use]
    pub const fn daily_value(&self) -> f64 {
        match self {
            Self::VitaminD => 20.0,
            Self::VitaminE => 15.0,
            Self::VitaminK => 120.0,
            Self::VitaminC => 90.0,
            Self::Folate => 400.0,
            Self::VitaminB12 => 2.4,
            Self::Calcium => 1300.0,
            Self::Iron => 18.0,
            Self::Zinc => 11.0,
            Self::Magnesium => 420.0,
            Self::Potassium => 4700.0,
        }
    }

    /// Measurement unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::VitaminD | Self::VitaminK | Self::Folate | Self::VitaminB12 => "mcg",
            Self::VitaminE
            | Self::VitaminC
            | Self::Calcium
            | Self::Iron
            | Self::Zinc
            | Self::Magnesium
            | Self::Potassium => "mg",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VitaminD => "Vitamin D",
            Self::VitaminE => "Vitamin E",
            Self::VitaminK => "Vitamin K",
            Self::VitaminC => "Vitamin C",
            Self::Folate => "Folate",
            Self::VitaminB12 => "Vitamin B12",
            Self::Calcium => "Calcium",
            Self::Iron => "Iron",
            Self::Zinc => "Zinc",
            Self::Magnesium => "Magnesium",
            Self::Potassium => "Potassium",
        }
    }
}

impl fmt::Display for Micronutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Micronutrient {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|nutrient| nutrient.label().replace(' ', "").to_lowercase() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown micronutrient '{s}'")))
    }
}

/// Average daily micronutrient intake
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MicronutrientIntake(BTreeMap<Micronutrient, f64>);

impl MicronutrientIntake {
    /// Empty intake table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style entry
    #[must_use]
    pub fn with(mut self, nutrient: Micronutrient, amount: f64) -> Self {
        self.0.insert(nutrient, amount);
        self
    }

    /// Intake of `nutrient`; absent entries count as zero
    #[must_use]
    pub fn amount(&self, nutrient: Micronutrient) -> f64 {
        self.0.get(&nutrient).copied().unwrap_or(0.0)
    }
}

impl FromIterator<(Micronutrient, f64)> for MicronutrientIntake {
    fn from_iter<I: IntoIterator<Item = (Micronutrient, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Adequacy band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdequacyStatus {
    /// At least 90% of daily value
    Adequate,
    /// At least 50% of daily value
    Moderate,
    /// Below 50% of daily value
    Low,
}

impl AdequacyStatus {
    /// Band for a percent of daily value
    #[must_use]
    pub fn from_percent(percent_dv: f64) -> Self {
        if percent_dv >= ADEQUATE_PERCENT_DV {
            Self::Adequate
        } else if percent_dv >= MODERATE_PERCENT_DV {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for AdequacyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adequate => write!(f, "adequate"),
            Self::Moderate => write!(f, "moderate"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Adequacy of one micronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MicronutrientAdequacy {
    /// Assessed nutrient
    pub nutrient: Micronutrient,
    /// Daily intake
    pub amount: f64,
    /// Daily value
    pub daily_value: f64,
    /// Unit of `amount` and `daily_value`
    pub unit: &'static str,
    /// Intake as percent of daily value
    pub percent_dv: f64,
    /// Adequacy band
    pub status: AdequacyStatus,
}

/// Assess every tracked micronutrient, in report order
#[must_use]
pub fn assess_micronutrients(intake: &MicronutrientIntake) -> Vec<MicronutrientAdequacy> {
    Micronutrient::ALL
        .into_iter()
        .map(|nutrient| {
            let amount = intake.amount(nutrient);
            let daily_value = nutrient.daily_value();
            let percent_dv = amount / daily_value * 100.0;
            MicronutrientAdequacy {
                nutrient,
                amount,
                daily_value,
                unit: nutrient.unit(),
                percent_dv,
                status: AdequacyStatus::from_percent(percent_dv),
            }
        })
        .collect()
}
