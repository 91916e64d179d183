// ABOUTME: Meal catalog entry definitions
// ABOUTME: MealComponent (food reference with serving multiplier), Meal, and the MealSlot order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A meal-slot position within a day
///
/// Slots are always visited in the fixed order of [`MealSlot::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// First snack
    Snack1,
    /// Second snack
    Snack2,
}

impl MealSlot {
    /// All slots in aggregation and display order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Snack1,
        Self::Snack2,
    ];

    /// Wire name
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack1 => "snack1",
            Self::Snack2 => "snack2",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack1 => "Snack 1",
            Self::Snack2 => "Snack 2",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MealSlot {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown meal slot '{s}'")))
    }
}

/// One food reference inside a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealComponent {
    /// Food ledger key
    pub food_id: String,
    /// Multiplier of one serving (0 means the ingredient is omitted)
    pub quantity: f64,
}

impl MealComponent {
    /// Create a component
    pub fn new(food_id: impl Into<String>, quantity: f64) -> Self {
        Self {
            food_id: food_id.into(),
            quantity,
        }
    }
}

/// A named meal composed of weighted food references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique key within the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Informational category tag; aggregation ignores it
    #[serde(rename = "type")]
    pub category: MealSlot,
    /// Components in declared order
    pub components: Vec<MealComponent>,
}
