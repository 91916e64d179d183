// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for mealplan-cli
// ABOUTME: Provides access to report, trace, validation, and comparison commands

pub mod compare;
pub mod day;
pub mod micronutrients;
pub mod summary;
pub mod trace;
pub mod validate;
