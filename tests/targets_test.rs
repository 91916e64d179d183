// ABOUTME: Tests for the profile and target provider
// ABOUTME: Status rating, progress percentage, macro split, diet phases, and target comparison
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::macros;
use mealplan_dashboard::errors::ErrorCode;
use mealplan_dashboard::intelligence::{
    compare_to_targets, compare_to_targets_with, macro_distribution, nutrient_status,
    progress_percentage, user_profile, user_targets, DietPhase, MacroDistribution,
    NutrientStatus,
};
use mealplan_dashboard::models::{NutrientField, NutritionFacts};

#[test]
fn test_profile_is_fixed() {
    let profile = user_profile();

    assert_eq!(profile.age, 27);
    assert_eq!(profile.weight, 74.0);
    assert_eq!(profile.height, 185.4);
    assert_eq!(profile.bmr, 1817.0);
    assert_eq!(profile.tdee, 2816.0);
    assert_eq!(profile.targets.calories, profile.tdee);
    assert!(profile.targets.protein.min < profile.targets.protein.max);
}

#[test]
fn test_ranged_targets_use_their_midpoint() {
    let targets = user_targets();

    assert_eq!(targets.protein, 130.0);
    assert_eq!(targets.fiber, 34.0);
    assert_eq!(targets.sodium, 2300.0);
    assert_eq!(targets.cholesterol, 0.0);
}

#[test]
fn test_nutrient_status_bands() {
    assert_eq!(nutrient_status(120.0, 100.0, 0.1), NutrientStatus::Excellent);
    assert_eq!(nutrient_status(95.0, 100.0, 0.1), NutrientStatus::Excellent);
    assert_eq!(nutrient_status(89.0, 100.0, 0.1), NutrientStatus::Good);
    assert_eq!(nutrient_status(80.0, 100.0, 0.1), NutrientStatus::Good);
    assert_eq!(nutrient_status(79.0, 100.0, 0.1), NutrientStatus::Deficient);
    assert_eq!(nutrient_status(0.0, 100.0, 0.1), NutrientStatus::Deficient);
    assert_eq!(nutrient_status(85.0, 100.0, 0.2), NutrientStatus::Excellent);
}

#[test]
fn test_zero_target_is_always_met() {
    assert_eq!(nutrient_status(0.0, 0.0, 0.1), NutrientStatus::Excellent);
    assert_eq!(progress_percentage(42.0, 0.0), 100.0);
}

#[test]
fn test_progress_is_rounded_and_capped() {
    assert_eq!(progress_percentage(50.0, 200.0), 25.0);
    assert_eq!(progress_percentage(1.0, 3.0), 33.0);
    assert_eq!(progress_percentage(2.0, 3.0), 67.0);
    assert_eq!(progress_percentage(300.0, 200.0), 100.0);
}

#[test]
fn test_macro_distribution_uses_atwater_factors() {
    let split = macro_distribution(&macros(2000.0, 150.0, 60.0, 200.0));

    assert_eq!(
        split,
        MacroDistribution {
            protein: 30.0,
            fat: 27.0,
            carbs: 40.0,
        }
    );
}

#[test]
fn test_macro_distribution_of_nothing_is_zero() {
    assert_eq!(
        macro_distribution(&NutritionFacts::ZERO),
        MacroDistribution::default()
    );
}

#[test]
fn test_diet_phase_calorie_targets() {
    assert_eq!(DietPhase::default(), DietPhase::Bulking);
    assert_eq!(DietPhase::Bulking.calorie_target(), 3200.0);
    assert_eq!(DietPhase::Cutting.calorie_target(), 2600.0);

    let cutting = DietPhase::Cutting.targets();
    assert_eq!(cutting.calories, 2600.0);
    assert_eq!(cutting.protein, user_targets().protein);
}

#[test]
fn test_diet_phase_parsing() {
    assert_eq!("bulk".parse::<DietPhase>().unwrap(), DietPhase::Bulking);
    assert_eq!(" Cutting ".parse::<DietPhase>().unwrap(), DietPhase::Cutting);
    assert_eq!(DietPhase::Cutting.to_string(), "cutting");

    let err = "recomp".parse::<DietPhase>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_compare_to_targets_skips_untargeted_fields() {
    let facts = NutritionFacts {
        calories: 2816.0,
        protein: 104.0,
        fat: 40.0,
        saturated_fat: 25.0,
        carbs: 363.0,
        fiber: 34.0,
        sodium: 2300.0,
        cholesterol: 450.0,
    };

    let rows = compare_to_targets(&facts);

    assert_eq!(rows.len(), 7);
    assert!(rows.iter().all(|row| row.field != NutrientField::Cholesterol));

    let protein = rows
        .iter()
        .find(|row| row.field == NutrientField::Protein)
        .unwrap();
    assert_eq!(protein.target, 130.0);
    assert_eq!(protein.progress, 80.0);
    assert_eq!(protein.status, NutrientStatus::Good);

    let fat = rows.iter().find(|row| row.field == NutrientField::Fat).unwrap();
    assert_eq!(fat.status, NutrientStatus::Deficient);

    let calories = &rows[0];
    assert_eq!(calories.field, NutrientField::Calories);
    assert_eq!(calories.status, NutrientStatus::Excellent);
    assert_eq!(calories.progress, 100.0);
}

#[test]
fn test_compare_against_a_phase() {
    let facts = macros(2800.0, 130.0, 94.0, 363.0);

    let bulking = compare_to_targets_with(&facts, &DietPhase::Bulking.targets());
    let cutting = compare_to_targets_with(&facts, &DietPhase::Cutting.targets());

    assert_eq!(bulking[0].target, 3200.0);
    assert_eq!(bulking[0].progress, 88.0);
    assert_eq!(bulking[0].status, NutrientStatus::Good);
    assert_eq!(cutting[0].status, NutrientStatus::Excellent);
    assert_eq!(cutting[0].progress, 100.0);
}
