// ABOUTME: Domain constants for the meal plan dashboard
// ABOUTME: Dataset file names, plan shape, display rounding, and nutrition energy factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Names of the three static dataset files
pub mod dataset_files {
    /// Food ledger file
    pub const FOOD_REFERENCES: &str = "foodReferences.json";
    /// Meal catalog file
    pub const MEALS: &str = "meals.json";
    /// Weekly plan pair file (`original` and `optimized`)
    pub const WEEKLY_PLAN: &str = "weeklyPlan.json";
}

/// Weekly plan shape
pub mod plan {
    /// Number of days in a complete plan
    pub const DAYS_PER_WEEK: usize = 7;
    /// Lowest valid day index
    pub const FIRST_DAY: u8 = 1;
    /// Highest valid day index
    pub const LAST_DAY: u8 = 7;
}

/// Energy content of macronutrients (kcal per gram)
pub mod energy {
    /// Protein kcal per gram
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate kcal per gram
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat kcal per gram
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name for the dashboard
    pub const MEALPLAN_DASHBOARD: &str = "mealplan-dashboard";
}
