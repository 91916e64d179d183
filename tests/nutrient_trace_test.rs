// ABOUTME: Integration tests for the nutrient trace builder
// ABOUTME: Checks the trace round-trip against day totals, tree shape, citations, and placeholders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{full_day, init_test_logging, meal, sample_foods, sample_meals};
use mealplan_dashboard::intelligence::{build_day_trace, day_nutrition};
use mealplan_dashboard::models::{
    DataIntegrityWarning, DayPlan, Meal, MealCatalog, MealSlot, NutrientField, TraceLevel,
};

#[test]
fn test_root_value_matches_day_nutrition_for_every_field() {
    init_test_logging();
    let foods = sample_foods();
    let meals = sample_meals();

    for day_index in 1..=7 {
        let day = full_day(day_index);
        let totals = day_nutrition(&day, &meals, &foods).facts;

        for field in NutrientField::ALL {
            let traced = build_day_trace(&day, &meals, &foods, field);
            assert_eq!(
                traced.trace.value.to_bits(),
                totals.get(field).to_bits(),
                "day {day_index} {field}"
            );
            traced.trace.walk(&mut |node| {
                if let Some(sum) = node.children_sum() {
                    assert!((node.value - sum).abs() < 1e-9, "node {}", node.id);
                }
            });
        }
    }
}

#[test]
fn test_tree_shape_labels_and_units() {
    let foods = sample_foods();
    let meals = sample_meals();
    let day = full_day(1);

    let traced = build_day_trace(&day, &meals, &foods, NutrientField::Sodium);
    let root = &traced.trace;

    assert_eq!(root.level, TraceLevel::Day);
    assert_eq!(root.id, "day-1");
    assert_eq!(root.name, "Day 1");
    assert_eq!(root.unit, "mg");

    let slot_names: Vec<_> = root.children().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        slot_names,
        vec!["Breakfast", "Lunch", "Dinner", "Snack 1", "Snack 2"]
    );

    let breakfast = &root.children()[0];
    assert_eq!(breakfast.level, TraceLevel::Meal);
    assert_eq!(breakfast.id, "protein-oatmeal");

    let whey = &breakfast.children()[1];
    assert_eq!(whey.level, TraceLevel::Food);
    assert_eq!(whey.name, "0.5x Whey Protein");
    assert_eq!(whey.unit, "mg");
    assert_eq!(whey.source_number, Some(3));
    assert_eq!(
        whey.source_url.as_deref(),
        Some("https://fdc.nal.usda.gov/food/whey-protein")
    );
    assert!(whey.children.is_none());
    assert!((whey.value - 25.0).abs() < 1e-9);
}

#[test]
fn test_units_follow_the_selected_field() {
    let foods = sample_foods();
    let meals = sample_meals();
    let day = full_day(2);

    assert_eq!(
        build_day_trace(&day, &meals, &foods, NutrientField::Calories).trace.unit,
        "kcal"
    );
    assert_eq!(
        build_day_trace(&day, &meals, &foods, NutrientField::Fiber).trace.unit,
        "g"
    );
}

#[test]
fn test_missing_references_become_zero_placeholders() {
    init_test_logging();
    let foods = sample_foods();
    let mut catalog: Vec<Meal> = sample_meals().into();
    catalog.push(meal(
        "broken-bowl",
        MealSlot::Lunch,
        &[("brown-rice-cooked", 1.0), ("ghost-food", 2.0)],
    ));
    let meals = MealCatalog::new(catalog).unwrap();
    let day = DayPlan::new(6)
        .with_slot(MealSlot::Breakfast, "egg-scramble")
        .with_slot(MealSlot::Lunch, "broken-bowl")
        .with_slot(MealSlot::Dinner, "vanished-meal");

    let traced = build_day_trace(&day, &meals, &foods, NutrientField::Protein);
    let root = &traced.trace;

    assert_eq!(root.children().len(), 3);

    let ghost = root.find("ghost-food").unwrap();
    assert_eq!(ghost.value, 0.0);
    assert_eq!(ghost.name, "2x Unknown");
    assert!(ghost.source_url.is_none());

    let vanished = root.find("vanished-meal").unwrap();
    assert_eq!(vanished.level, TraceLevel::Meal);
    assert_eq!(vanished.name, "Dinner");
    assert_eq!(vanished.value, 0.0);
    assert_eq!(vanished.children.as_deref(), Some(&[][..]));

    assert_eq!(
        root.value.to_bits(),
        day_nutrition(&day, &meals, &foods).facts.protein.to_bits()
    );
    assert_eq!(
        traced.warnings,
        vec![
            DataIntegrityWarning::MissingFood {
                meal_id: "broken-bowl".into(),
                food_id: "ghost-food".into(),
            },
            DataIntegrityWarning::MissingMeal {
                day: 6,
                slot: MealSlot::Dinner,
                meal_id: "vanished-meal".into(),
            },
        ]
    );
}

#[test]
fn test_empty_day_is_a_valid_zero_tree() {
    let traced = build_day_trace(
        &DayPlan::new(7),
        &sample_meals(),
        &sample_foods(),
        NutrientField::Carbs,
    );

    assert_eq!(traced.trace.value, 0.0);
    assert!(traced.trace.children().is_empty());
    assert!(traced.warnings.is_empty());
}

#[test]
fn test_trace_serializes_camel_case() {
    let traced = build_day_trace(
        &full_day(1),
        &sample_meals(),
        &sample_foods(),
        NutrientField::Fat,
    );
    let json = serde_json::to_value(&traced.trace).unwrap();

    assert_eq!(json["level"], "day");
    let leaf = &json["children"][0]["children"][0];
    assert_eq!(leaf["level"], "food");
    assert_eq!(leaf["sourceNumber"], 2);
    assert!(leaf.get("children").is_none());
}

#[test]
fn test_trace_is_idempotent() {
    let foods = sample_foods();
    let meals = sample_meals();
    let day = full_day(4);

    assert_eq!(
        build_day_trace(&day, &meals, &foods, NutrientField::SaturatedFat),
        build_day_trace(&day, &meals, &foods, NutrientField::SaturatedFat)
    );
}
