// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for mealplan-cli
// ABOUTME: Nutrient value formatting, nutrition tables, trace trees, and warning lists

use mealplan_dashboard::models::{DataIntegrityWarning, NutrientField, NutrientTrace, NutritionFacts};

/// Format a nutrient value: energy and values of 100 or more as whole
/// numbers, everything else with at most one decimal
pub fn format_value(value: f64, unit: &str) -> String {
    if unit == "kcal" || value >= 100.0 {
        return format!("{}", value.round());
    }
    format!("{}", (value * 10.0).round() / 10.0)
}

/// Format a value followed by its unit
pub fn format_with_unit(value: f64, unit: &str) -> String {
    format!("{} {unit}", format_value(value, unit))
}

/// Print a heading underlined to its width
pub fn print_heading(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(title.len()));
}

/// Print one labelled row per nutrient field
pub fn print_facts(facts: &NutritionFacts) {
    for field in NutrientField::ALL {
        println!(
            "   {:<15} {:>10}",
            field.label(),
            format_with_unit(field.value_of(facts), field.unit())
        );
    }
}

/// Print a compact single-line summary of the main fields
pub fn facts_line(facts: &NutritionFacts) -> String {
    format!(
        "{} kcal | P {} g | F {} g | C {} g | Fiber {} g | Na {} mg",
        format_value(facts.calories, "kcal"),
        format_value(facts.protein, "g"),
        format_value(facts.fat, "g"),
        format_value(facts.carbs, "g"),
        format_value(facts.fiber, "g"),
        format_value(facts.sodium, "mg"),
    )
}

/// Print an attribution tree with indentation per level
pub fn print_trace(trace: &NutrientTrace) {
    print_trace_node(trace, 0);
}

fn print_trace_node(node: &NutrientTrace, depth: usize) {
    let indent = "   ".repeat(depth);
    let citation = node
        .source_number
        .map(|number| format!(" [{number}]"))
        .unwrap_or_default();
    println!(
        "{indent}{} - {}{citation}",
        node.name,
        format_with_unit(node.value, &node.unit)
    );
    for child in node.children() {
        print_trace_node(child, depth + 1);
    }
}

/// Print data-integrity warnings, if any
pub fn print_warnings(warnings: &[DataIntegrityWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("\nData integrity warnings ({}):", warnings.len());
    for warning in warnings {
        println!("   - {warning}");
    }
}
