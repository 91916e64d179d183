// ABOUTME: Tests for the original vs optimized plan comparison
// ABOUTME: Checks both averages, the rounded delta, and merged integrity warnings
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{full_day, init_test_logging, sample_foods, sample_meals, sample_plan, sample_plan_pair};
use mealplan_dashboard::intelligence::{compare_plans, weekly_average};
use mealplan_dashboard::models::{
    DataIntegrityWarning, MealSlot, NutrientField, PlanPair, PlanVariant, WeeklyPlan,
};

#[test]
fn test_comparison_reports_both_averages_and_delta() {
    init_test_logging();
    let foods = sample_foods();
    let meals = sample_meals();
    let pair = sample_plan_pair();

    let comparison = compare_plans(&pair, &meals, &foods);

    assert_eq!(
        comparison.original,
        weekly_average(&pair.original, &meals, &foods).facts
    );
    assert_eq!(
        comparison.optimized,
        weekly_average(&pair.optimized, &meals, &foods).facts
    );
    for field in NutrientField::ALL {
        let raw = comparison.optimized.get(field) - comparison.original.get(field);
        assert!((comparison.delta.get(field) - raw).abs() <= 0.05 + 1e-9);
    }
    assert!(comparison.warnings.is_empty());
}

#[test]
fn test_egg_breakfasts_raise_cholesterol() {
    let comparison = compare_plans(&sample_plan_pair(), &sample_meals(), &sample_foods());

    assert!(comparison.delta.cholesterol > 0.0);
    assert!(comparison.delta.fiber < 0.0);
    assert!(comparison
        .changed_fields()
        .any(|(field, _)| field == NutrientField::Cholesterol));
}

#[test]
fn test_identical_plans_have_no_changes() {
    let pair = PlanPair {
        original: sample_plan(PlanVariant::Original),
        optimized: WeeklyPlan::new(PlanVariant::Optimized, (1..=7).map(full_day).collect())
            .unwrap(),
    };

    let comparison = compare_plans(&pair, &sample_meals(), &sample_foods());

    assert_eq!(comparison.changed_fields().count(), 0);
    assert_eq!(comparison.original, comparison.optimized);
}

#[test]
fn test_warnings_from_both_plans_are_kept() {
    init_test_logging();
    let broken_day = full_day(3).with_slot(MealSlot::Snack2, "deleted-shake");
    let mut optimized_days: Vec<_> = (1..=7).filter(|d| *d != 3).map(full_day).collect();
    optimized_days.push(broken_day);
    let pair = PlanPair {
        original: WeeklyPlan::new(PlanVariant::Original, Vec::new()).unwrap(),
        optimized: WeeklyPlan::new(PlanVariant::Optimized, optimized_days).unwrap(),
    };

    let comparison = compare_plans(&pair, &sample_meals(), &sample_foods());

    assert_eq!(
        comparison.warnings,
        vec![
            DataIntegrityWarning::EmptyPlan {
                variant: PlanVariant::Original
            },
            DataIntegrityWarning::MissingMeal {
                day: 3,
                slot: MealSlot::Snack2,
                meal_id: "deleted-shake".into(),
            },
        ]
    );
}
