// ABOUTME: Compares the original and optimized weekly plans by their weekly averages
// ABOUTME: Produces both averages and the per-field delta (optimized minus original)
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::nutrition_aggregator::weekly_average;
use crate::models::{
    DataIntegrityWarning, FoodLedger, MealCatalog, NutrientField, NutritionFacts, PlanPair,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weekly averages of both plan variants side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanComparison {
    /// Rounded weekly average of the original plan
    pub original: NutritionFacts,
    /// Rounded weekly average of the optimized plan
    pub optimized: NutritionFacts,
    /// `optimized - original`, per field
    pub delta: NutritionFacts,
    /// Integrity warnings from both plans, original first
    pub warnings: Vec<DataIntegrityWarning>,
}

impl PlanComparison {
    /// Fields whose average changed between the plans
    pub fn changed_fields(&self) -> impl Iterator<Item = (NutrientField, f64)> + '_ {
        NutrientField::ALL
            .into_iter()
            .map(|field| (field, self.delta.get(field)))
            .filter(|(_, delta)| delta.abs() > f64::EPSILON)
    }
}

/// Compare the two plans of `pair` by weekly average
#[must_use]
pub fn compare_plans(pair: &PlanPair, meals: &MealCatalog, foods: &FoodLedger) -> PlanComparison {
    let original = weekly_average(&pair.original, meals, foods);
    let optimized = weekly_average(&pair.optimized, meals, foods);

    let delta = optimized.facts.zip_with(original.facts, |after, before| {
        // keep the difference on the same display grid as its operands
        let diff = after - before;
        (diff * 10.0).round() / 10.0
    });

    debug!(
        calories_delta = delta.calories,
        protein_delta = delta.protein,
        "Plan comparison computed"
    );

    let mut warnings = original.warnings;
    warnings.extend(optimized.warnings);

    PlanComparison {
        original: original.facts,
        optimized: optimized.facts,
        delta,
        warnings,
    }
}
