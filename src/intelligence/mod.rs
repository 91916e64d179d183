// ABOUTME: Nutrition intelligence: rollups, nutrient traces, targets, and plan comparison
// ABOUTME: Pure functions over the immutable food ledger, meal catalog, and weekly plans
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Intelligence Module
//!
//! Every operation here is a synchronous, side-effect-free function of the
//! leaf tables it is handed. Nothing is cached; results are recomputed on
//! each call and owned by the caller.

/// Micronutrient adequacy against daily values
pub mod micronutrients;
/// Day -> meal -> food attribution trees
pub mod nutrient_trace;
/// Food, meal, day, and weekly rollups
pub mod nutrition_aggregator;
/// Original vs optimized plan comparison
pub mod plan_comparison;
/// Fixed profile, targets, and status rating
pub mod targets;

pub use micronutrients::{
    assess_micronutrients, AdequacyStatus, Micronutrient, MicronutrientAdequacy,
    MicronutrientIntake,
};
pub use nutrient_trace::{build_day_trace, TracedDay};
pub use nutrition_aggregator::{
    all_days_nutrition, day_nutrition, food_nutrition, meal_nutrition, weekly_average,
    weekly_mean, DayNutrition, Rollup,
};
pub use plan_comparison::{compare_plans, PlanComparison};
pub use targets::{
    compare_to_targets, compare_to_targets_with, macro_distribution, nutrient_status,
    progress_percentage, user_profile, user_targets, DietPhase, MacroDistribution,
    NutrientStatus, NutritionTargets, TargetComparison, TargetRange, UserProfile,
};
