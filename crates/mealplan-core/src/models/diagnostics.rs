// ABOUTME: Data-integrity diagnostics produced while aggregating over the static dataset
// ABOUTME: Dangling food or meal references are reported here instead of failing the rollup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::MealSlot;
use super::plan::PlanVariant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-fatal defect found in the reference data
///
/// The offending reference contributes zero to every total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataIntegrityWarning {
    /// A meal component names a food absent from the ledger
    MissingFood {
        /// Meal holding the component
        meal_id: String,
        /// Unresolved food id
        food_id: String,
    },
    /// A day slot names a meal absent from the catalog
    MissingMeal {
        /// Day index
        day: u8,
        /// Slot holding the reference
        slot: MealSlot,
        /// Unresolved meal id
        meal_id: String,
    },
    /// A weekly average was requested over a plan without days
    EmptyPlan {
        /// Plan variant
        variant: PlanVariant,
    },
}

impl fmt::Display for DataIntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFood { meal_id, food_id } => {
                write!(f, "Food item {food_id} not found in database (meal {meal_id})")
            }
            Self::MissingMeal { day, slot, meal_id } => {
                write!(f, "Meal {meal_id} not found in database (day {day} {slot})")
            }
            Self::EmptyPlan { variant } => {
                write!(f, "The {variant} plan has no days to average")
            }
        }
    }
}
