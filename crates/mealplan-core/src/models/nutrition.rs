// ABOUTME: Nutrition vector and food ledger entry definitions
// ABOUTME: NutritionFacts arithmetic, NutrientField selection, and FoodItem with citation data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// The eight-field nutrient vector used at every aggregation level
///
/// Values are per one serving on a `FoodItem` and totals everywhere else.
/// A `NutritionFacts` carries no identity; provenance is rebuilt on demand by
/// the trace builder.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Total fat (g)
    pub fat: f64,
    /// Saturated fat (g)
    pub saturated_fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Dietary fiber (g)
    pub fiber: f64,
    /// Sodium (mg)
    pub sodium: f64,
    /// Cholesterol (mg)
    pub cholesterol: f64,
}

impl NutritionFacts {
    /// All fields zero
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein: 0.0,
        fat: 0.0,
        saturated_fat: 0.0,
        carbs: 0.0,
        fiber: 0.0,
        sodium: 0.0,
        cholesterol: 0.0,
    };

    /// Apply `f` to every field
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            fat: f(self.fat),
            saturated_fat: f(self.saturated_fat),
            carbs: f(self.carbs),
            fiber: f(self.fiber),
            sodium: f(self.sodium),
            cholesterol: f(self.cholesterol),
        }
    }

    /// Combine two vectors field by field
    #[must_use]
    pub fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            calories: f(self.calories, other.calories),
            protein: f(self.protein, other.protein),
            fat: f(self.fat, other.fat),
            saturated_fat: f(self.saturated_fat, other.saturated_fat),
            carbs: f(self.carbs, other.carbs),
            fiber: f(self.fiber, other.fiber),
            sodium: f(self.sodium, other.sodium),
            cholesterol: f(self.cholesterol, other.cholesterol),
        }
    }

    /// Multiply every field by `quantity`
    #[must_use]
    pub fn scaled(self, quantity: f64) -> Self {
        self.map(|value| value * quantity)
    }

    /// Divide every field by `count`
    #[must_use]
    pub fn divided_by(self, count: f64) -> Self {
        self.map(|value| value / count)
    }

    /// Per-field absolute difference
    #[must_use]
    pub fn abs_diff(self, other: Self) -> Self {
        self.zip_with(other, |a, b| (a - b).abs())
    }

    /// Round for presentation: energy and milligram fields to whole units,
    /// gram fields to one decimal place
    #[must_use]
    pub fn rounded_for_display(self) -> Self {
        let mut rounded = Self::ZERO;
        for field in NutrientField::ALL {
            field.set(&mut rounded, field.round_for_display(field.value_of(&self)));
        }
        rounded
    }

    /// Value of a single field
    #[must_use]
    pub const fn get(&self, field: NutrientField) -> f64 {
        field.value_of(self)
    }

    /// True when every field is finite and non-negative
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        NutrientField::ALL
            .iter()
            .all(|field| {
                let value = field.value_of(self);
                value.is_finite() && value >= 0.0
            })
    }

    /// First field holding a negative (or NaN) value
    #[must_use]
    pub fn first_negative(&self) -> Option<(NutrientField, f64)> {
        NutrientField::ALL
            .iter()
            .map(|field| (*field, field.value_of(self)))
            .find(|(_, value)| value.is_nan() || *value < 0.0)
    }
}

impl Add for NutritionFacts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl AddAssign for NutritionFacts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutritionFacts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// One selectable field of `NutritionFacts`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NutrientField {
    /// Energy
    Calories,
    /// Protein
    Protein,
    /// Total fat
    Fat,
    /// Saturated fat
    SaturatedFat,
    /// Carbohydrates
    Carbs,
    /// Dietary fiber
    Fiber,
    /// Sodium
    Sodium,
    /// Cholesterol
    Cholesterol,
}

impl NutrientField {
    /// Every field in declaration order
    pub const ALL: [Self; 8] = [
        Self::Calories,
        Self::Protein,
        Self::Fat,
        Self::SaturatedFat,
        Self::Carbs,
        Self::Fiber,
        Self::Sodium,
        Self::Cholesterol,
    ];

    /// Wire name, as used in the JSON dataset and validator messages
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::SaturatedFat => "saturatedFat",
            Self::Carbs => "carbs",
            Self::Fiber => "fiber",
            Self::Sodium => "sodium",
            Self::Cholesterol => "cholesterol",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Protein => "Protein",
            Self::Fat => "Fat",
            Self::SaturatedFat => "Saturated Fat",
            Self::Carbs => "Carbohydrates",
            Self::Fiber => "Fiber",
            Self::Sodium => "Sodium",
            Self::Cholesterol => "Cholesterol",
        }
    }

    /// Measurement unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Sodium | Self::Cholesterol => "mg",
            Self::Protein | Self::Fat | Self::SaturatedFat | Self::Carbs | Self::Fiber => "g",
        }
    }

    /// Whether display rounding keeps one decimal place
    #[must_use]
    pub const fn is_gram_field(&self) -> bool {
        !matches!(self, Self::Calories | Self::Sodium | Self::Cholesterol)
    }

    /// Read this field from a vector
    #[must_use]
    pub const fn value_of(&self, facts: &NutritionFacts) -> f64 {
        match self {
            Self::Calories => facts.calories,
            Self::Protein => facts.protein,
            Self::Fat => facts.fat,
            Self::SaturatedFat => facts.saturated_fat,
            Self::Carbs => facts.carbs,
            Self::Fiber => facts.fiber,
            Self::Sodium => facts.sodium,
            Self::Cholesterol => facts.cholesterol,
        }
    }

    /// Write this field on a vector
    pub fn set(&self, facts: &mut NutritionFacts, value: f64) {
        match self {
            Self::Calories => facts.calories = value,
            Self::Protein => facts.protein = value,
            Self::Fat => facts.fat = value,
            Self::SaturatedFat => facts.saturated_fat = value,
            Self::Carbs => facts.carbs = value,
            Self::Fiber => facts.fiber = value,
            Self::Sodium => facts.sodium = value,
            Self::Cholesterol => facts.cholesterol = value,
        }
    }

    /// Round a value of this field for presentation
    #[must_use]
    pub fn round_for_display(&self, value: f64) -> f64 {
        if self.is_gram_field() {
            (value * 10.0).round() / 10.0
        } else {
            value.round()
        }
    }
}

impl fmt::Display for NutrientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for NutrientField {
    type Err = AppError;

    /// Accepts the wire name, `snake_case`, or the label, ignoring case
    fn from_str(s: &str) -> AppResult<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "calories" | "energy" | "kcal" => Ok(Self::Calories),
            "protein" => Ok(Self::Protein),
            "fat" | "totalfat" => Ok(Self::Fat),
            "saturatedfat" | "satfat" => Ok(Self::SaturatedFat),
            "carbs" | "carbohydrates" => Ok(Self::Carbs),
            "fiber" | "fibre" => Ok(Self::Fiber),
            "sodium" => Ok(Self::Sodium),
            "cholesterol" => Ok(Self::Cholesterol),
            _ => Err(AppError::invalid_input(format!(
                "Unknown nutrient '{s}', expected one of: calories, protein, fat, saturatedFat, carbs, fiber, sodium, cholesterol"
            ))),
        }
    }
}

/// Food ledger entry: one serving of a food with its citation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Unique key within the ledger
    pub id: String,
    /// Display name
    pub name: String,
    /// Serving-size description (e.g. "1 cup cooked")
    pub serving_size: String,
    /// Nutrition per one serving
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
    /// Citation URL
    pub source_url: String,
    /// Citation number in the source document
    pub source_number: u32,
}
