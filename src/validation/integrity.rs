// ABOUTME: Referential integrity checks over the food ledger, meal catalog, and weekly plan
// ABOUTME: Reports missing required foods, dangling food references, and malformed plans
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::reference_data::ReferenceTable;
use crate::constants::plan::DAYS_PER_WEEK;
use crate::models::{FoodLedger, MealCatalog, WeeklyPlan};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Outcome of the required-foods check
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodReferenceValidation {
    /// True when every required food is present
    pub is_valid: bool,
    /// One message per missing food
    pub errors: Vec<String>,
    /// Missing food ids, in required-list order
    pub missing_foods: Vec<String>,
}

/// Outcome of the meal-definition check
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealDefinitionValidation {
    /// True when every component resolves
    pub is_valid: bool,
    /// One message per dangling component
    pub errors: Vec<String>,
    /// Meals with at least one dangling component, in catalog order
    ///
    /// A meal appears once however many of its components dangle; the
    /// per-component detail lives in `errors`.
    pub invalid_meals: Vec<String>,
}

/// Outcome of the plan-structure check
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStructureValidation {
    /// True when the plan has seven days and every slot resolves
    pub is_valid: bool,
    /// One message per defect
    pub errors: Vec<String>,
    /// Meal ids named by the plan but absent from the catalog, each listed once
    pub missing_meals: Vec<String>,
}

/// Check that the ledger holds every food in the published required list
#[must_use]
pub fn validate_food_references(foods: &FoodLedger) -> FoodReferenceValidation {
    validate_food_references_with(foods, &ReferenceTable::published())
}

/// Check that the ledger holds every food required by `reference`
#[must_use]
pub fn validate_food_references_with(
    foods: &FoodLedger,
    reference: &ReferenceTable,
) -> FoodReferenceValidation {
    let missing_foods: Vec<String> = reference
        .required_foods
        .iter()
        .filter(|food_id| !foods.contains(food_id))
        .cloned()
        .collect();

    let errors: Vec<String> = missing_foods
        .iter()
        .map(|food_id| format!("Missing required food item: {food_id}"))
        .collect();

    FoodReferenceValidation {
        is_valid: errors.is_empty(),
        errors,
        missing_foods,
    }
}

/// Check that every meal component names a food in the ledger
///
/// Emits one error per dangling component but lists each offending meal
/// only once in `invalid_meals`.
#[must_use]
pub fn validate_meal_definitions(
    meals: &MealCatalog,
    foods: &FoodLedger,
) -> MealDefinitionValidation {
    let mut errors = Vec::new();
    let mut invalid_meals = Vec::new();
    let mut seen = HashSet::new();

    for meal in meals.iter() {
        for component in &meal.components {
            if foods.contains(&component.food_id) {
                continue;
            }
            errors.push(format!(
                "Meal {} references non-existent food: {}",
                meal.id, component.food_id
            ));
            if seen.insert(meal.id.as_str()) {
                invalid_meals.push(meal.id.clone());
            }
        }
    }

    debug!(
        meals = meals.len(),
        invalid = invalid_meals.len(),
        "Meal definitions checked"
    );

    MealDefinitionValidation {
        is_valid: errors.is_empty(),
        errors,
        invalid_meals,
    }
}

/// Check that `plan` covers seven days and every occupied slot names a known meal
#[must_use]
pub fn validate_plan_structure(plan: &WeeklyPlan, meals: &MealCatalog) -> PlanStructureValidation {
    let mut errors = Vec::new();
    let mut missing_meals = Vec::new();
    let mut seen = HashSet::new();

    let day_count = plan.days().len();
    if day_count != DAYS_PER_WEEK {
        errors.push(format!(
            "Plan {} has {day_count} days, expected {DAYS_PER_WEEK}",
            plan.version()
        ));
    }

    for day in plan.days() {
        for (slot, meal_id) in day.meal_refs() {
            if meals.contains(meal_id) {
                continue;
            }
            errors.push(format!(
                "Day {} {} references non-existent meal: {meal_id}",
                day.day,
                slot.label()
            ));
            if seen.insert(meal_id) {
                missing_meals.push(meal_id.to_owned());
            }
        }
    }

    PlanStructureValidation {
        is_valid: errors.is_empty(),
        errors,
        missing_meals,
    }
}
