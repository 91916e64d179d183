// ABOUTME: Builds the day -> meal -> food attribution tree for a single nutrient
// ABOUTME: Leaves carry food citations; parents hold the ordered sum of their children
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrient Trace Builder
//!
//! The tree is rebuilt on every call. Node values are summed in the same
//! order the aggregator uses, so the root value is bit-identical to
//! `day_nutrition(..).facts.get(field)`. Dangling references become
//! zero-valued placeholder nodes instead of disappearing from the tree.

use super::nutrition_aggregator::food_nutrition;
use crate::models::{
    DataIntegrityWarning, DayPlan, FoodLedger, Meal, MealCatalog, MealSlot, NutrientField,
    NutrientTrace, TraceLevel,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Name given to a food node whose id is not in the ledger
pub const UNKNOWN_FOOD_NAME: &str = "Unknown";

/// A day's attribution tree together with the defects met while building it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracedDay {
    /// Root node at day level
    pub trace: NutrientTrace,
    /// Dangling references that became placeholder nodes
    pub warnings: Vec<DataIntegrityWarning>,
}

/// Build the attribution tree of `field` for one day
#[must_use]
pub fn build_day_trace(
    day: &DayPlan,
    meals: &MealCatalog,
    foods: &FoodLedger,
    field: NutrientField,
) -> TracedDay {
    let unit = field.unit();
    let mut warnings = Vec::new();

    let meal_nodes = day
        .meal_refs()
        .map(|(slot, meal_id)| match meals.get(meal_id) {
            Some(meal) => meal_node(meal, slot, foods, field, &mut warnings),
            None => {
                let warning = DataIntegrityWarning::MissingMeal {
                    day: day.day,
                    slot,
                    meal_id: meal_id.to_owned(),
                };
                warn!(day = day.day, slot = %slot, meal_id = %meal_id, "{warning}");
                warnings.push(warning);
                NutrientTrace::branch(TraceLevel::Meal, meal_id, slot.label(), unit, Vec::new())
            }
        })
        .collect();

    let trace = NutrientTrace::branch(
        TraceLevel::Day,
        format!("day-{}", day.day),
        format!("Day {}", day.day),
        unit,
        meal_nodes,
    );

    debug!(
        day = day.day,
        nutrient = %field,
        value = trace.value,
        "Nutrient trace built"
    );

    TracedDay { trace, warnings }
}

fn meal_node(
    meal: &Meal,
    slot: MealSlot,
    foods: &FoodLedger,
    field: NutrientField,
    warnings: &mut Vec<DataIntegrityWarning>,
) -> NutrientTrace {
    let unit = field.unit();
    let food_nodes = meal
        .components
        .iter()
        .map(|component| {
            let name_prefix = format!("{}x ", component.quantity);
            match foods.get(&component.food_id) {
                Some(food) => {
                    let value = food_nutrition(food, component.quantity).get(field);
                    NutrientTrace::leaf(
                        &food.id,
                        format!("{name_prefix}{}", food.name),
                        value,
                        unit,
                    )
                    .with_citation(&food.source_url, food.source_number)
                }
                None => {
                    let warning = DataIntegrityWarning::MissingFood {
                        meal_id: meal.id.clone(),
                        food_id: component.food_id.clone(),
                    };
                    warn!(meal_id = %meal.id, food_id = %component.food_id, "{warning}");
                    warnings.push(warning);
                    NutrientTrace::leaf(
                        &component.food_id,
                        format!("{name_prefix}{UNKNOWN_FOOD_NAME}"),
                        0.0,
                        unit,
                    )
                }
            }
        })
        .collect();

    NutrientTrace::branch(TraceLevel::Meal, &meal.id, slot.label(), unit, food_nodes)
}
