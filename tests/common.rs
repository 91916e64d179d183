// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging plus small food ledgers, meal catalogs, and weekly plans
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `mealplan_dashboard`

use mealplan_dashboard::models::{
    DayPlan, FoodItem, FoodLedger, Meal, MealCatalog, MealComponent, MealSlot, NutritionFacts,
    PlanPair, PlanVariant, WeeklyPlan,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Nutrition vector with the four fields most scenarios care about
pub fn macros(calories: f64, protein: f64, fat: f64, carbs: f64) -> NutritionFacts {
    NutritionFacts {
        calories,
        protein,
        fat,
        carbs,
        ..NutritionFacts::ZERO
    }
}

/// Food item with a citation derived from its id
pub fn food(id: &str, name: &str, nutrition: NutritionFacts, source_number: u32) -> FoodItem {
    FoodItem {
        id: id.to_owned(),
        name: name.to_owned(),
        serving_size: "1 serving".to_owned(),
        nutrition,
        source_url: format!("https://fdc.nal.usda.gov/food/{id}"),
        source_number,
    }
}

/// Meal from `(food_id, quantity)` pairs
pub fn meal(id: &str, slot: MealSlot, components: &[(&str, f64)]) -> Meal {
    Meal {
        id: id.to_owned(),
        name: format!("Meal {id}"),
        category: slot,
        components: components
            .iter()
            .map(|(food_id, quantity)| MealComponent::new(*food_id, *quantity))
            .collect(),
    }
}

/// A small ledger with irregular values so sums exercise floating point
pub fn sample_foods() -> FoodLedger {
    FoodLedger::new(vec![
        food(
            "rolled-oats",
            "Rolled Oats",
            NutritionFacts {
                calories: 307.0,
                protein: 10.7,
                fat: 5.3,
                saturated_fat: 0.9,
                carbs: 54.8,
                fiber: 8.2,
                sodium: 5.0,
                cholesterol: 0.0,
            },
            2,
        ),
        food(
            "whey-protein",
            "Whey Protein",
            NutritionFacts {
                calories: 120.0,
                protein: 24.0,
                fat: 1.5,
                saturated_fat: 0.5,
                carbs: 3.0,
                fiber: 0.0,
                sodium: 50.0,
                cholesterol: 30.0,
            },
            3,
        ),
        food(
            "large-egg",
            "Large Egg",
            NutritionFacts {
                calories: 72.0,
                protein: 6.3,
                fat: 4.8,
                saturated_fat: 1.6,
                carbs: 0.4,
                fiber: 0.0,
                sodium: 71.0,
                cholesterol: 186.0,
            },
            1,
        ),
        food(
            "brown-rice-cooked",
            "Brown Rice (cooked)",
            NutritionFacts {
                calories: 218.0,
                protein: 4.5,
                fat: 1.6,
                saturated_fat: 0.3,
                carbs: 45.8,
                fiber: 3.5,
                sodium: 2.0,
                cholesterol: 0.0,
            },
            6,
        ),
        food(
            "tomato-dal",
            "Tomato Dal",
            NutritionFacts {
                calories: 230.0,
                protein: 13.1,
                fat: 6.2,
                saturated_fat: 1.1,
                carbs: 31.4,
                fiber: 9.7,
                sodium: 410.0,
                cholesterol: 0.0,
            },
            7,
        ),
        food(
            "apple-medium",
            "Apple (medium)",
            NutritionFacts {
                calories: 95.0,
                protein: 0.5,
                fat: 0.3,
                saturated_fat: 0.1,
                carbs: 25.1,
                fiber: 4.4,
                sodium: 2.0,
                cholesterol: 0.0,
            },
            22,
        ),
        food(
            "peanut-butter-tbsp",
            "Peanut Butter (1 tbsp)",
            NutritionFacts {
                calories: 94.0,
                protein: 4.0,
                fat: 8.1,
                saturated_fat: 1.6,
                carbs: 3.1,
                fiber: 1.0,
                sodium: 73.0,
                cholesterol: 0.0,
            },
            23,
        ),
    ])
    .unwrap()
}

/// Meals over `sample_foods`
pub fn sample_meals() -> MealCatalog {
    MealCatalog::new(vec![
        meal(
            "protein-oatmeal",
            MealSlot::Breakfast,
            &[("rolled-oats", 1.0), ("whey-protein", 0.5)],
        ),
        meal("egg-scramble", MealSlot::Breakfast, &[("large-egg", 3.0)]),
        meal(
            "dal-rice",
            MealSlot::Lunch,
            &[("brown-rice-cooked", 1.5), ("tomato-dal", 1.0)],
        ),
        meal(
            "apple-pb",
            MealSlot::Snack1,
            &[("apple-medium", 1.0), ("peanut-butter-tbsp", 2.0)],
        ),
        meal("shake", MealSlot::Snack2, &[("whey-protein", 1.0)]),
    ])
    .unwrap()
}

/// A day with every slot filled from `sample_meals`
pub fn full_day(day: u8) -> DayPlan {
    let breakfast = if day % 2 == 0 {
        "egg-scramble"
    } else {
        "protein-oatmeal"
    };
    DayPlan::new(day)
        .with_slot(MealSlot::Breakfast, breakfast)
        .with_slot(MealSlot::Lunch, "dal-rice")
        .with_slot(MealSlot::Dinner, "dal-rice")
        .with_slot(MealSlot::Snack1, "apple-pb")
        .with_slot(MealSlot::Snack2, "shake")
}

/// A seven-day plan built from `full_day`
pub fn sample_plan(variant: PlanVariant) -> WeeklyPlan {
    WeeklyPlan::new(variant, (1..=7).map(full_day).collect()).unwrap()
}

/// Both variants; the optimized one swaps every breakfast to eggs
pub fn sample_plan_pair() -> PlanPair {
    let optimized_days = (1..=7)
        .map(|day| full_day(day).with_slot(MealSlot::Breakfast, "egg-scramble"))
        .collect();
    PlanPair {
        original: sample_plan(PlanVariant::Original),
        optimized: WeeklyPlan::new(PlanVariant::Optimized, optimized_days)
            .unwrap()
            .with_swaps(vec!["Oatmeal breakfasts replaced by egg scramble".to_owned()]),
    }
}

/// Assert two floats are equal within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
