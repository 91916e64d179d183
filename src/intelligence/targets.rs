// ABOUTME: Fixed user profile, daily nutrient targets, and diet-phase calorie goals
// ABOUTME: Status rating, progress percentage, and macro distribution against those targets
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Profile and target provider
//!
//! The profile is a single fixed adult male (27 y, 74 kg, 185.4 cm). BMR and
//! TDEE are stored values computed offline with the Mifflin-St Jeor equation
//! and a moderate activity factor; nothing here recomputes them.

use crate::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::constants::thresholds::{DEFAULT_STATUS_TOLERANCE, GOOD_RATIO};
use crate::errors::{AppError, AppResult};
use crate::models::{NutrientField, NutritionFacts};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive target range in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl TargetRange {
    /// Midpoint of the range
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Daily nutrient targets as published for the profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTargets {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein range (g)
    pub protein: TargetRange,
    /// Fat (g)
    pub fat: f64,
    /// Saturated fat ceiling (g)
    pub saturated_fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fiber range (g)
    pub fiber: TargetRange,
    /// Sodium ceiling (mg)
    pub sodium: f64,
}

/// The fixed user profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Body weight (kg)
    pub weight: f64,
    /// Height (cm)
    pub height: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Daily targets
    pub targets: NutritionTargets,
}

/// Return the fixed user profile
#[must_use]
pub const fn user_profile() -> UserProfile {
    let tdee = 2816.0;
    UserProfile {
        age: 27,
        weight: 74.0,
        height: 185.4,
        bmr: 1817.0,
        tdee,
        targets: NutritionTargets {
            calories: tdee,
            protein: TargetRange {
                min: 120.0,
                max: 140.0,
            },
            fat: 94.0,
            saturated_fat: 25.0,
            carbs: 363.0,
            fiber: TargetRange {
                min: 30.0,
                max: 38.0,
            },
            sodium: 2300.0,
        },
    }
}

/// Targets flattened to a nutrition vector
///
/// Ranges collapse to their midpoints. Cholesterol has no target and is zero.
#[must_use]
pub fn user_targets() -> NutritionFacts {
    let targets = user_profile().targets;
    NutritionFacts {
        calories: targets.calories,
        protein: targets.protein.midpoint(),
        fat: targets.fat,
        saturated_fat: targets.saturated_fat,
        carbs: targets.carbs,
        fiber: targets.fiber.midpoint(),
        sodium: targets.sodium,
        cholesterol: 0.0,
    }
}

/// Diet phase selecting the calorie goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietPhase {
    /// Caloric surplus
    #[default]
    Bulking,
    /// Caloric deficit
    Cutting,
}

impl DietPhase {
    /// Daily calorie goal for this phase
    #[must_use]
    pub const fn calorie_target(&self) -> f64 {
        match self {
            Self::Bulking => 3200.0,
            Self::Cutting => 2600.0,
        }
    }

    /// Daily targets with the calorie goal of this phase
    #[must_use]
    pub fn targets(&self) -> NutritionFacts {
        NutritionFacts {
            calories: self.calorie_target(),
            ..user_targets()
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bulking => "bulking",
            Self::Cutting => "cutting",
        }
    }
}

impl fmt::Display for DietPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietPhase {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "bulking" | "bulk" => Ok(Self::Bulking),
            "cutting" | "cut" => Ok(Self::Cutting),
            other => Err(AppError::invalid_input(format!(
                "Unknown diet phase '{other}', expected 'bulking' or 'cutting'"
            ))),
        }
    }
}

/// Rating of an intake against its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    /// Within tolerance of the target or above it
    Excellent,
    /// At least 80% of the target
    Good,
    /// Below 80% of the target
    Deficient,
}

impl fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "excellent"),
            Self::Good => write!(f, "good"),
            Self::Deficient => write!(f, "deficient"),
        }
    }
}

/// Rate `actual` against `target`
///
/// A target of zero or less means "no target" and rates as excellent.
#[must_use]
pub fn nutrient_status(actual: f64, target: f64, tolerance: f64) -> NutrientStatus {
    if target <= 0.0 {
        return NutrientStatus::Excellent;
    }
    let ratio = actual / target;
    if ratio >= 1.0 - tolerance {
        NutrientStatus::Excellent
    } else if ratio >= GOOD_RATIO {
        NutrientStatus::Good
    } else {
        NutrientStatus::Deficient
    }
}

/// Percent of target reached, rounded and capped at 100
#[must_use]
pub fn progress_percentage(actual: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 100.0;
    }
    (actual / target * 100.0).round().min(100.0)
}

/// Share of calories from each macronutrient, in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Percent of calories from protein
    pub protein: f64,
    /// Percent of calories from fat
    pub fat: f64,
    /// Percent of calories from carbohydrates
    pub carbs: f64,
}

/// Split the calories of `facts` into macronutrient shares
#[must_use]
pub fn macro_distribution(facts: &NutritionFacts) -> MacroDistribution {
    let total = facts.calories;
    if total <= 0.0 {
        return MacroDistribution::default();
    }
    let percent = |kcal: f64| (kcal / total * 100.0).round();
    MacroDistribution {
        protein: percent(facts.protein * KCAL_PER_G_PROTEIN),
        fat: percent(facts.fat * KCAL_PER_G_FAT),
        carbs: percent(facts.carbs * KCAL_PER_G_CARBS),
    }
}

/// One row of a target comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetComparison {
    /// Compared field
    pub field: NutrientField,
    /// Intake
    pub actual: f64,
    /// Target
    pub target: f64,
    /// Rating with the default tolerance
    pub status: NutrientStatus,
    /// Percent of target reached, capped at 100
    pub progress: f64,
}

/// Compare `facts` to the profile targets
#[must_use]
pub fn compare_to_targets(facts: &NutritionFacts) -> Vec<TargetComparison> {
    compare_to_targets_with(facts, &user_targets())
}

/// Compare `facts` to arbitrary targets, skipping fields without a target
#[must_use]
pub fn compare_to_targets_with(
    facts: &NutritionFacts,
    targets: &NutritionFacts,
) -> Vec<TargetComparison> {
    NutrientField::ALL
        .into_iter()
        .filter(|field| field.value_of(targets) > 0.0)
        .map(|field| {
            let actual = field.value_of(facts);
            let target = field.value_of(targets);
            TargetComparison {
                field,
                actual,
                target,
                status: nutrient_status(actual, target, DEFAULT_STATUS_TOLERANCE),
                progress: progress_percentage(actual, target),
            }
        })
        .collect()
}
