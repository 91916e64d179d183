// ABOUTME: Application constants for configuration, validation tolerances, and defaults
// ABOUTME: Environment variable names and the fixed thresholds used by the plan validator
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

pub use mealplan_core::constants::{dataset_files, energy, plan, service_names};

/// Environment variable names
pub mod env_config {
    /// Directory holding the three dataset files
    pub const DATA_DIR: &str = "MEALPLAN_DATA_DIR";
    /// Active plan variant (`original` or `optimized`)
    pub const PLAN_VARIANT: &str = "MEALPLAN_PLAN_VARIANT";
    /// Active diet phase (`bulking` or `cutting`)
    pub const DIET_PHASE: &str = "MEALPLAN_DIET_PHASE";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default configuration values
pub mod defaults {
    /// Default dataset directory
    pub const DATA_DIR: &str = "./data";
}

/// Plan validator tolerance band
pub mod validation {
    /// Relative tolerance applied to the reference value (5%)
    pub const RELATIVE_TOLERANCE: f64 = 0.05;
    /// Absolute tolerance floor for per-day comparisons
    pub const DAILY_TOLERANCE_FLOOR: f64 = 10.0;
    /// Absolute tolerance floor for the weekly-average comparison
    pub const WEEKLY_TOLERANCE_FLOOR: f64 = 5.0;
}

/// Nutrient status and micronutrient adequacy thresholds
pub mod thresholds {
    /// Default tolerance below target still rated excellent (10%)
    pub const DEFAULT_STATUS_TOLERANCE: f64 = 0.1;
    /// Ratio of target at or above which a nutrient is rated good
    pub const GOOD_RATIO: f64 = 0.8;
    /// Percent of daily value at or above which intake is adequate
    pub const ADEQUATE_PERCENT_DV: f64 = 90.0;
    /// Percent of daily value at or above which intake is moderate
    pub const MODERATE_PERCENT_DV: f64 = 50.0;
}
