// ABOUTME: Plan comparison command for mealplan-cli
// ABOUTME: Prints original and optimized weekly averages with their difference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_dashboard::{dataset::Dataset, intelligence::compare_plans, models::NutrientField};

use crate::helpers::display::{format_value, print_heading, print_warnings};

/// Print the two plans side by side
pub fn run(dataset: &Dataset) {
    let comparison = compare_plans(&dataset.plans, &dataset.meals, &dataset.foods);

    print_heading("Original vs optimized (weekly average)");
    println!(
        "   {:<15} {:>10} {:>10} {:>10}",
        "Nutrient", "Original", "Optimized", "Change"
    );
    for field in NutrientField::ALL {
        let unit = field.unit();
        let delta = comparison.delta.get(field);
        let sign = if delta > 0.0 { "+" } else { "" };
        println!(
            "   {:<15} {:>10} {:>10} {:>10}",
            format!("{} ({unit})", field.label()),
            format_value(comparison.original.get(field), unit),
            format_value(comparison.optimized.get(field), unit),
            format!("{sign}{}", format_value(delta, unit)),
        );
    }

    let swaps = dataset.plans.optimized.swaps_applied();
    if !swaps.is_empty() {
        print_heading("Swaps applied");
        for swap in swaps {
            println!("   - {swap}");
        }
    }

    print_warnings(&comparison.warnings);
}
