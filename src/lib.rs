// ABOUTME: Main library entry point for the meal plan nutrition dashboard engine
// ABOUTME: Rollups, nutrient traceability, targets, validation, and the async dataset loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Plan Dashboard
//!
//! Nutrition engine for a fixed 7-day meal plan in two variants (original
//! and optimized). Food-level nutrition facts are rolled up into meals, days,
//! and weekly averages; any single nutrient of a day can be traced back to
//! the foods that contributed it; computed totals are regression-checked
//! against published reference figures.
//!
//! ## Architecture
//!
//! - **Models** (`mealplan-core`): food ledger, meal catalog, weekly plans,
//!   the nutrition vector, and the trace tree
//! - **Dataset**: the single asynchronous boundary, loading all three tables
//!   or failing as a whole
//! - **Intelligence**: pure rollup, trace, target, and comparison functions
//! - **Validation**: integrity and tolerance-band regression checks
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealplan_dashboard::dataset::load_dataset;
//! use mealplan_dashboard::errors::AppResult;
//! use mealplan_dashboard::intelligence::weekly_average;
//! use mealplan_dashboard::models::PlanVariant;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let dataset = load_dataset("./data").await?;
//!     let plan = dataset.plan(PlanVariant::Original);
//!     let average = weekly_average(plan, &dataset.meals, &dataset.foods);
//!     println!("Average calories: {}", average.facts.calories);
//!     Ok(())
//! }
//! ```

/// Data model re-exported from `mealplan-core`
pub use mealplan_core::models;

/// Unified error handling re-exported from `mealplan-core`
pub use mealplan_core::errors;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Asynchronous dataset loader
pub mod dataset;

/// Rollups, traces, targets, and plan comparison
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Plan validator
pub mod validation;
