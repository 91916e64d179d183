// ABOUTME: Nutrient trace command for mealplan-cli
// ABOUTME: Prints the day -> meal -> food attribution tree as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_dashboard::{
    dataset::Dataset,
    errors::{AppError, AppResult},
    intelligence::build_day_trace,
    models::{NutrientField, PlanVariant},
};

use crate::helpers::display::{print_heading, print_trace, print_warnings};

/// Print where one nutrient of one day comes from
pub fn run(
    dataset: &Dataset,
    variant: PlanVariant,
    day_index: u8,
    field: NutrientField,
    json: bool,
) -> AppResult<()> {
    let day = dataset
        .plan(variant)
        .day(day_index)
        .ok_or_else(|| AppError::not_found(format!("Day {day_index} in the {variant} plan")))?;

    let traced = build_day_trace(day, &dataset.meals, &dataset.foods, field);

    if json {
        println!("{}", serde_json::to_string_pretty(&traced.trace)?);
        return Ok(());
    }

    print_heading(&format!(
        "{} on day {day_index} ({variant} plan)",
        field.label()
    ));
    print_trace(&traced.trace);
    print_warnings(&traced.warnings);
    Ok(())
}
