// ABOUTME: Single-day breakdown command for mealplan-cli
// ABOUTME: Prints each meal slot with its nutrition and the day total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_dashboard::{
    dataset::Dataset,
    errors::{AppError, AppResult},
    intelligence::{day_nutrition, meal_nutrition},
    models::PlanVariant,
};

use crate::helpers::display::{facts_line, print_facts, print_heading, print_warnings};

/// Print the meals and totals of one day
pub fn run(dataset: &Dataset, variant: PlanVariant, day_index: u8) -> AppResult<()> {
    let plan = dataset.plan(variant);
    let day = plan
        .day(day_index)
        .ok_or_else(|| AppError::not_found(format!("Day {day_index} in the {variant} plan")))?;

    print_heading(&format!("Day {day_index} ({variant} plan)"));
    for (slot, meal_id) in day.meal_refs() {
        match dataset.meals.get(meal_id) {
            Some(meal) => {
                let rollup = meal_nutrition(meal, &dataset.foods);
                println!("\n   {}: {}", slot.label(), meal.name);
                println!("      {}", facts_line(&rollup.facts));
                for component in &meal.components {
                    let name = dataset
                        .foods
                        .get(&component.food_id)
                        .map_or("Unknown", |food| food.name.as_str());
                    println!("      - {}x {name}", component.quantity);
                }
            }
            None => println!("\n   {}: {meal_id} (not in meal catalog)", slot.label()),
        }
    }

    let total = day_nutrition(day, &dataset.meals, &dataset.foods);
    print_heading("Day total");
    print_facts(&total.facts);
    print_warnings(&total.warnings);
    Ok(())
}
