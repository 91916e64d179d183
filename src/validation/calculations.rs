// ABOUTME: Recomputes day totals and the weekly average and diffs them against reference figures
// ABOUTME: Applies the relative/absolute tolerance band and reports each out-of-band field
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Calculation regression check
//!
//! A field is out of band when `|calculated - expected| > max(expected * 5%,
//! floor)`, with a floor of 10 units per day and 5 units for the weekly
//! average. The comparison is strict: a difference equal to the tolerance
//! passes.

use super::reference_data::ReferenceTable;
use crate::constants::validation::{
    DAILY_TOLERANCE_FLOOR, RELATIVE_TOLERANCE, WEEKLY_TOLERANCE_FLOOR,
};
use crate::intelligence::nutrition_aggregator::{day_nutrition, weekly_average};
use crate::models::{
    DataIntegrityWarning, FoodLedger, MealCatalog, NutrientField, NutritionFacts, WeeklyPlan,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Allowed deviation from `expected`
#[must_use]
pub fn tolerance(expected: f64, floor: f64) -> f64 {
    (expected * RELATIVE_TOLERANCE).max(floor)
}

/// One field outside its tolerance band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceMismatch {
    /// Day index, or `None` for the weekly average
    pub day: Option<u8>,
    /// Offending field
    pub field: NutrientField,
    /// Computed value
    pub calculated: f64,
    /// Reference value
    pub expected: f64,
    /// Absolute difference
    pub difference: f64,
    /// Tolerance that was exceeded
    pub tolerance: f64,
}

impl ReferenceMismatch {
    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> String {
        let subject = self
            .day
            .map_or_else(|| "Weekly average".to_owned(), |day| format!("Day {day}"));
        format!(
            "{subject} {}: calculated {:.1}, expected {}, difference {:.1}",
            self.field.key(),
            self.calculated,
            self.expected,
            self.difference
        )
    }
}

/// Computed versus expected figures for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyValidationResult {
    /// Day index
    pub day: u8,
    /// Full-precision computed total
    pub calculated: NutritionFacts,
    /// Reference total
    pub expected: NutritionFacts,
    /// Per-field absolute difference
    pub differences: NutritionFacts,
}

/// Computed versus expected weekly average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyValidationResult {
    /// Rounded computed weekly average
    pub calculated: NutritionFacts,
    /// Reference weekly average
    pub expected: NutritionFacts,
    /// Per-field absolute difference
    pub differences: NutritionFacts,
}

/// Outcome of the calculation check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationValidation {
    /// True when no field is out of band and every day has a reference row
    pub is_valid: bool,
    /// Messages in day order, weekly average last
    pub errors: Vec<String>,
    /// Structured form of the out-of-band entries in `errors`
    pub mismatches: Vec<ReferenceMismatch>,
    /// One entry per day that has a reference row
    pub daily_results: Vec<DailyValidationResult>,
    /// Weekly average comparison
    pub weekly_result: WeeklyValidationResult,
    /// Dangling references met while recomputing
    pub warnings: Vec<DataIntegrityWarning>,
}

/// Check the plan's computed figures against the published reference table
#[must_use]
pub fn validate_calculations(
    foods: &FoodLedger,
    meals: &MealCatalog,
    plan: &WeeklyPlan,
) -> CalculationValidation {
    validate_calculations_with(foods, meals, plan, &ReferenceTable::published())
}

/// Check the plan's computed figures against `reference`
#[must_use]
pub fn validate_calculations_with(
    foods: &FoodLedger,
    meals: &MealCatalog,
    plan: &WeeklyPlan,
    reference: &ReferenceTable,
) -> CalculationValidation {
    let mut errors = Vec::new();
    let mut mismatches = Vec::new();
    let mut daily_results = Vec::with_capacity(plan.days().len());
    let mut warnings = Vec::new();

    for day in plan.days() {
        let rollup = day_nutrition(day, meals, foods);
        warnings.extend(rollup.warnings);

        let Some(expected) = reference.day(day.day) else {
            errors.push(format!("No expected data found for day {}", day.day));
            continue;
        };

        for mismatch in out_of_band(Some(day.day), &rollup.facts, expected, DAILY_TOLERANCE_FLOOR)
        {
            errors.push(mismatch.message());
            mismatches.push(mismatch);
        }

        daily_results.push(DailyValidationResult {
            day: day.day,
            calculated: rollup.facts,
            expected: *expected,
            differences: rollup.facts.abs_diff(*expected),
        });
    }

    let weekly = weekly_average(plan, meals, foods);
    for mismatch in out_of_band(
        None,
        &weekly.facts,
        &reference.weekly_average,
        WEEKLY_TOLERANCE_FLOOR,
    ) {
        errors.push(mismatch.message());
        mismatches.push(mismatch);
    }
    for warning in weekly.warnings {
        if !warnings.contains(&warning) {
            warnings.push(warning);
        }
    }

    info!(
        variant = %plan.version(),
        mismatches = mismatches.len(),
        errors = errors.len(),
        "Calculation validation finished"
    );

    CalculationValidation {
        is_valid: errors.is_empty(),
        errors,
        mismatches,
        daily_results,
        weekly_result: WeeklyValidationResult {
            calculated: weekly.facts,
            expected: reference.weekly_average,
            differences: weekly.facts.abs_diff(reference.weekly_average),
        },
        warnings,
    }
}

fn out_of_band(
    day: Option<u8>,
    calculated: &NutritionFacts,
    expected: &NutritionFacts,
    floor: f64,
) -> Vec<ReferenceMismatch> {
    NutrientField::ALL
        .into_iter()
        .filter_map(|field| {
            let calculated = field.value_of(calculated);
            let expected = field.value_of(expected);
            let difference = (calculated - expected).abs();
            let allowed = tolerance(expected, floor);
            (difference > allowed).then_some(ReferenceMismatch {
                day,
                field,
                calculated,
                expected,
                difference,
                tolerance: allowed,
            })
        })
        .collect()
}
