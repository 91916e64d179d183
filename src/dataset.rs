// ABOUTME: Asynchronous loader for the static nutrition dataset
// ABOUTME: Reads the food ledger, meal catalog, and both weekly plans in one all-or-nothing step
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Dataset loading
//!
//! The three dataset files are read concurrently and parsed into their
//! validated model types. Any failure aborts the whole load; there is no
//! partially loaded dataset.

use crate::constants::dataset_files;
use crate::errors::{AppError, AppResult};
use crate::intelligence::micronutrients::MicronutrientIntake;
use crate::models::{FoodLedger, MealCatalog, PlanPair, PlanVariant, WeeklyPlan};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

/// The immutable leaf tables every computation reads from
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Food ledger keyed by food id
    pub foods: FoodLedger,
    /// Meal catalog keyed by meal id
    pub meals: MealCatalog,
    /// Original and optimized weekly plans
    pub plans: PlanPair,
}

impl Dataset {
    /// Build a dataset from already-parsed tables
    #[must_use]
    pub const fn new(foods: FoodLedger, meals: MealCatalog, plans: PlanPair) -> Self {
        Self {
            foods,
            meals,
            plans,
        }
    }

    /// Select a weekly plan by variant
    #[must_use]
    pub const fn plan(&self, variant: PlanVariant) -> &WeeklyPlan {
        self.plans.get(variant)
    }
}

/// Load `foodReferences.json`, `meals.json`, and `weeklyPlan.json` from `dir`
///
/// # Errors
///
/// Returns a `DataLoadFailed` error naming the first file that could not be
/// read, parsed, or validated
pub async fn load_dataset(dir: impl AsRef<Path>) -> AppResult<Dataset> {
    let dir = dir.as_ref();
    debug!(data_dir = %dir.display(), "Loading nutrition dataset");

    let (foods, meals, plans) = tokio::try_join!(
        load_json::<FoodLedger>(dir, dataset_files::FOOD_REFERENCES),
        load_json::<MealCatalog>(dir, dataset_files::MEALS),
        load_json::<PlanPair>(dir, dataset_files::WEEKLY_PLAN),
    )?;

    info!(
        foods = foods.len(),
        meals = meals.len(),
        original_days = plans.original.days().len(),
        optimized_days = plans.optimized.days().len(),
        "Nutrition dataset loaded"
    );

    Ok(Dataset::new(foods, meals, plans))
}

/// Load a micronutrient intake table from a JSON file
///
/// # Errors
///
/// Returns a `DataLoadFailed` error if the file cannot be read or parsed
pub async fn load_micronutrient_intake(path: impl AsRef<Path>) -> AppResult<MicronutrientIntake> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::data_load(format!("{}: {e}", path.display())).with_source(e))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::data_load(format!("{}: {e}", path.display())).with_source(e))
}

async fn load_json<T: DeserializeOwned>(dir: &Path, file_name: &str) -> AppResult<T> {
    let path = dir.join(file_name);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::data_load(format!("{file_name}: {e}")).with_source(e))?;

    let parsed = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::data_load(format!("{file_name}: {e}")).with_source(e))?;
    debug!(file = file_name, bytes = bytes.len(), "Dataset file parsed");
    Ok(parsed)
}
