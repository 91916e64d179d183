// ABOUTME: Plan validator composing integrity checks and the calculation regression check
// ABOUTME: Produces structured sub-results and a human-readable pass/fail summary
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Plan Validator
//!
//! Surfaces data defects and calculation drift to a human. Nothing here is
//! fatal: every outcome is returned as data.

/// Calculation regression check against reference figures
pub mod calculations;
/// Referential integrity checks
pub mod integrity;
/// Published reference figures
pub mod reference_data;

pub use calculations::{
    tolerance, validate_calculations, validate_calculations_with, CalculationValidation,
    DailyValidationResult, ReferenceMismatch, WeeklyValidationResult,
};
pub use integrity::{
    validate_food_references, validate_food_references_with, validate_meal_definitions,
    validate_plan_structure, FoodReferenceValidation, MealDefinitionValidation,
    PlanStructureValidation,
};
pub use reference_data::{ReferenceDay, ReferenceTable};

use crate::models::{FoodLedger, MealCatalog, WeeklyPlan};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::{info, warn};

/// Combined outcome of every check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullValidation {
    /// True when the food, meal, and calculation checks passed
    pub overall_valid: bool,
    /// Required-foods check
    pub food: FoodReferenceValidation,
    /// Meal-definition check
    pub meal: MealDefinitionValidation,
    /// Calculation check
    pub calculations: CalculationValidation,
    /// Plan-structure check, reported alongside but not part of `overall_valid`
    /// since partial plans are a legitimate input
    pub plan_structure: PlanStructureValidation,
    /// Multi-line report
    pub summary: String,
}

/// Run every check against the published reference table
#[must_use]
pub fn run_full_validation(
    foods: &FoodLedger,
    meals: &MealCatalog,
    plan: &WeeklyPlan,
) -> FullValidation {
    run_full_validation_with(foods, meals, plan, &ReferenceTable::published())
}

/// Run every check against `reference`
#[must_use]
pub fn run_full_validation_with(
    foods: &FoodLedger,
    meals: &MealCatalog,
    plan: &WeeklyPlan,
    reference: &ReferenceTable,
) -> FullValidation {
    let food = validate_food_references_with(foods, reference);
    let meal = validate_meal_definitions(meals, foods);
    let plan_structure = validate_plan_structure(plan, meals);
    let calculations = validate_calculations_with(foods, meals, plan, reference);

    let overall_valid = food.is_valid && meal.is_valid && calculations.is_valid;

    let summary = summarize(&[
        ("Food References", food.is_valid, food.errors.len()),
        ("Meal Definitions", meal.is_valid, meal.errors.len()),
        (
            "Calculations",
            calculations.is_valid,
            calculations.errors.len(),
        ),
    ]);

    if overall_valid {
        info!(variant = %plan.version(), "All validations passed");
    } else {
        warn!(
            variant = %plan.version(),
            food_errors = food.errors.len(),
            meal_errors = meal.errors.len(),
            plan_errors = plan_structure.errors.len(),
            calculation_errors = calculations.errors.len(),
            "Some validations failed"
        );
    }

    FullValidation {
        overall_valid,
        food,
        meal,
        calculations,
        plan_structure,
        summary,
    }
}

fn summarize(sections: &[(&str, bool, usize)]) -> String {
    let mut summary = String::from("Validation Summary:\n");
    for (name, passed, error_count) in sections {
        let verdict = if *passed { "PASS" } else { "FAIL" };
        let _ = writeln!(summary, "- {name}: {verdict} ({error_count} errors)");
    }
    let overall = if sections.iter().all(|(_, passed, _)| *passed) {
        "ALL VALIDATIONS PASSED"
    } else {
        "SOME VALIDATIONS FAILED"
    };
    let _ = write!(summary, "\nOverall: {overall}");
    summary
}
