// ABOUTME: Weekly summary command for mealplan-cli
// ABOUTME: Prints the weekly average, per-day totals, macro split, and target comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_dashboard::{
    dataset::Dataset,
    intelligence::{
        all_days_nutrition, compare_to_targets_with, macro_distribution, user_profile,
        weekly_average, DietPhase,
    },
    models::PlanVariant,
};
use tracing::info;

use crate::helpers::display::{
    facts_line, format_with_unit, print_facts, print_heading, print_warnings,
};

/// Print the weekly overview of one plan variant
pub fn run(dataset: &Dataset, variant: PlanVariant, phase: DietPhase) {
    let plan = dataset.plan(variant);
    info!(variant = %variant, phase = %phase, "Building weekly summary");

    let average = weekly_average(plan, &dataset.meals, &dataset.foods);
    let profile = user_profile();

    print_heading(&format!("Weekly average ({variant} plan, {phase})"));
    println!(
        "   Profile: {} y, {} kg, {} cm | BMR {} kcal | TDEE {} kcal",
        profile.age, profile.weight, profile.height, profile.bmr, profile.tdee
    );
    print_facts(&average.facts);

    let macros = macro_distribution(&average.facts);
    println!(
        "\n   Macro split: protein {}% | fat {}% | carbs {}%",
        macros.protein, macros.fat, macros.carbs
    );

    print_heading("Daily totals");
    for day in all_days_nutrition(plan, &dataset.meals, &dataset.foods) {
        println!("   Day {}: {}", day.day, facts_line(&day.facts));
    }

    print_heading(&format!(
        "Targets ({phase}: {} kcal)",
        phase.calorie_target()
    ));
    for row in compare_to_targets_with(&average.facts, &phase.targets()) {
        let unit = row.field.unit();
        println!(
            "   {:<15} {:>10} / {:<10} {:>4}%  {}",
            row.field.label(),
            format_with_unit(row.actual, unit),
            format_with_unit(row.target, unit),
            row.progress,
            row.status
        );
    }

    print_warnings(&average.warnings);
}
