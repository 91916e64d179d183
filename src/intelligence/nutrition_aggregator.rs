// ABOUTME: Deterministic rollup of nutrition vectors from foods to meals, days, and weekly averages
// ABOUTME: Missing references contribute zero and are reported as DataIntegrityWarning values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrition Aggregator
//!
//! Pure functions of the three leaf tables. Nothing here fails: a meal that
//! names an unknown food, or a day slot that names an unknown meal, adds zero
//! to the total and is recorded on the returned [`Rollup`] so the caller can
//! inspect it. Each warning is also emitted as a `tracing` event.
//!
//! Intermediate sums keep full precision. Rounding happens once, in
//! [`weekly_average`], and only for presentation.

use crate::models::{
    DataIntegrityWarning, DayPlan, FoodItem, FoodLedger, Meal, MealCatalog, NutritionFacts,
    WeeklyPlan,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A nutrition total together with the data defects met while computing it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rollup {
    /// The aggregated nutrition vector
    pub facts: NutritionFacts,
    /// Dangling references skipped during aggregation, in encounter order
    pub warnings: Vec<DataIntegrityWarning>,
}

impl Rollup {
    /// True when every reference resolved
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    fn absorb(&mut self, other: Self) {
        self.facts += other.facts;
        self.warnings.extend(other.warnings);
    }
}

/// Nutrition of a single day, tagged with its day index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayNutrition {
    /// Day index, 1-7
    pub day: u8,
    /// Full-precision day total
    pub facts: NutritionFacts,
    /// Dangling references met on this day
    pub warnings: Vec<DataIntegrityWarning>,
}

/// Scale one serving of `food` by `quantity`
#[must_use]
pub fn food_nutrition(food: &FoodItem, quantity: f64) -> NutritionFacts {
    food.nutrition.scaled(quantity)
}

/// Sum the nutrition of every component of `meal`
///
/// Components naming a food absent from `foods` contribute zero and produce a
/// `MissingFood` warning.
#[must_use]
pub fn meal_nutrition(meal: &Meal, foods: &FoodLedger) -> Rollup {
    let mut rollup = Rollup::default();
    for component in &meal.components {
        match foods.get(&component.food_id) {
            Some(food) => rollup.facts += food_nutrition(food, component.quantity),
            None => {
                let warning = DataIntegrityWarning::MissingFood {
                    meal_id: meal.id.clone(),
                    food_id: component.food_id.clone(),
                };
                report(&warning);
                rollup.warnings.push(warning);
            }
        }
    }
    rollup
}

/// Sum the nutrition of every occupied slot of `day`, in slot order
///
/// Empty slots are skipped silently. A slot naming a meal absent from `meals`
/// contributes zero and produces a `MissingMeal` warning.
#[must_use]
pub fn day_nutrition(day: &DayPlan, meals: &MealCatalog, foods: &FoodLedger) -> Rollup {
    let mut rollup = Rollup::default();
    for (slot, meal_id) in day.meal_refs() {
        match meals.get(meal_id) {
            Some(meal) => rollup.absorb(meal_nutrition(meal, foods)),
            None => {
                let warning = DataIntegrityWarning::MissingMeal {
                    day: day.day,
                    slot,
                    meal_id: meal_id.to_owned(),
                };
                report(&warning);
                rollup.warnings.push(warning);
            }
        }
    }
    debug!(
        day = day.day,
        calories = rollup.facts.calories,
        warnings = rollup.warnings.len(),
        "Day nutrition computed"
    );
    rollup
}

/// Full-precision per-day totals in plan order
#[must_use]
pub fn all_days_nutrition(
    plan: &WeeklyPlan,
    meals: &MealCatalog,
    foods: &FoodLedger,
) -> Vec<DayNutrition> {
    plan.days()
        .iter()
        .map(|day| {
            let Rollup { facts, warnings } = day_nutrition(day, meals, foods);
            DayNutrition {
                day: day.day,
                facts,
                warnings,
            }
        })
        .collect()
}

/// Unrounded mean of the plan's day totals
///
/// Divides by the number of days actually present. A plan with no days
/// yields zero with an `EmptyPlan` warning.
#[must_use]
pub fn weekly_mean(plan: &WeeklyPlan, meals: &MealCatalog, foods: &FoodLedger) -> Rollup {
    let day_count = plan.days().len();
    if day_count == 0 {
        let warning = DataIntegrityWarning::EmptyPlan {
            variant: plan.version(),
        };
        report(&warning);
        return Rollup {
            facts: NutritionFacts::ZERO,
            warnings: vec![warning],
        };
    }

    let mut total = Rollup::default();
    for day in plan.days() {
        total.absorb(day_nutrition(day, meals, foods));
    }

    Rollup {
        facts: total.facts.divided_by(day_count as f64),
        warnings: total.warnings,
    }
}

/// Weekly mean rounded for display
///
/// Calories, sodium, and cholesterol are rounded to whole units; gram fields
/// to one decimal place.
#[must_use]
pub fn weekly_average(plan: &WeeklyPlan, meals: &MealCatalog, foods: &FoodLedger) -> Rollup {
    let mean = weekly_mean(plan, meals, foods);
    debug!(
        variant = %plan.version(),
        days = plan.days().len(),
        calories = mean.facts.calories,
        "Weekly average computed"
    );
    Rollup {
        facts: mean.facts.rounded_for_display(),
        warnings: mean.warnings,
    }
}

fn report(warning: &DataIntegrityWarning) {
    match warning {
        DataIntegrityWarning::MissingFood { meal_id, food_id } => {
            warn!(meal_id = %meal_id, food_id = %food_id, "{warning}");
        }
        DataIntegrityWarning::MissingMeal { day, slot, meal_id } => {
            warn!(day = day, slot = %slot, meal_id = %meal_id, "{warning}");
        }
        DataIntegrityWarning::EmptyPlan { variant } => {
            warn!(variant = %variant, "{warning}");
        }
    }
}
