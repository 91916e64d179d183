// ABOUTME: Core types and constants for the meal plan nutrition dashboard
// ABOUTME: Foundation crate with the data model, error handling, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Plan Core
//!
//! Foundation crate providing the shared data model for the meal plan
//! nutrition dashboard. The food ledger, meal catalog, and weekly plans are
//! loaded once and read by every rollup, so these types are designed to change
//! infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Domain constants (day range, energy factors, dataset file names)
//! - **models**: Foods, meals, plans, nutrition vectors, and nutrient traces

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (`FoodItem`, `Meal`, `WeeklyPlan`, `NutritionFacts`, `NutrientTrace`)
pub mod models;
