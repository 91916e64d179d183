// ABOUTME: Validation command for mealplan-cli
// ABOUTME: Runs every plan check and prints the summary followed by each error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_dashboard::{dataset::Dataset, models::PlanVariant, validation::run_full_validation};

use crate::helpers::display::{print_heading, print_warnings};

/// Run the full validation; returns `overall_valid`, which plan-structure
/// defects do not affect
pub fn run(dataset: &Dataset, variant: PlanVariant) -> bool {
    let report = run_full_validation(&dataset.foods, &dataset.meals, dataset.plan(variant));

    print_heading(&format!("Validation ({variant} plan)"));
    println!("{}", report.summary);

    let sections = [
        ("Food references", &report.food.errors),
        ("Meal definitions", &report.meal.errors),
        ("Plan structure", &report.plan_structure.errors),
        ("Calculations", &report.calculations.errors),
    ];
    for (name, errors) in sections {
        if errors.is_empty() {
            continue;
        }
        println!("\n{name}:");
        for error in errors {
            println!("   - {error}");
        }
    }

    print_warnings(&report.calculations.warnings);
    report.overall_valid
}
