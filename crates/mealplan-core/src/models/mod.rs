// ABOUTME: Data model for foods, meals, weekly plans, and derived nutrition values
// ABOUTME: Re-exports the leaf tables, the nutrition vector, diagnostics, and trace types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The three leaf tables (food ledger, meal catalog, weekly plans) are loaded
//! once and never mutated. `NutritionFacts` and `NutrientTrace` values are
//! derived fresh on every call and owned by the caller.

/// Data-integrity warnings emitted during aggregation
pub mod diagnostics;
/// Keyed lookup tables
pub mod ledger;
/// Meal catalog entries
pub mod meal;
/// Nutrition vector and food ledger entries
pub mod nutrition;
/// Weekly plans
pub mod plan;
/// Nutrient attribution tree
pub mod trace;

pub use diagnostics::DataIntegrityWarning;
pub use ledger::{FoodLedger, MealCatalog};
pub use meal::{Meal, MealComponent, MealSlot};
pub use nutrition::{FoodItem, NutrientField, NutritionFacts};
pub use plan::{DayPlan, PlanPair, PlanVariant, WeeklyPlan};
pub use trace::{NutrientTrace, TraceLevel};
