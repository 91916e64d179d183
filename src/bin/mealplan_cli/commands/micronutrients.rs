// ABOUTME: Micronutrient adequacy command for mealplan-cli
// ABOUTME: Loads an intake table and prints percent of daily value with status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use mealplan_dashboard::{
    dataset::load_micronutrient_intake, errors::AppResult, intelligence::assess_micronutrients,
};

use crate::helpers::display::{format_with_unit, print_heading};

/// Print adequacy of every tracked micronutrient
pub async fn run(intake_path: &Path) -> AppResult<()> {
    let intake = load_micronutrient_intake(intake_path).await?;

    print_heading("Micronutrient adequacy (percent of daily value)");
    for row in assess_micronutrients(&intake) {
        println!(
            "   {:<12} {:>12} / {:<12} {:>4}%  {}",
            row.nutrient.label(),
            format_with_unit(row.amount, row.unit),
            format_with_unit(row.daily_value, row.unit),
            row.percent_dv.round(),
            row.status
        );
    }
    Ok(())
}
