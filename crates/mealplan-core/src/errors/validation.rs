// ABOUTME: Invariant violation errors for the static lookup tables
// ABOUTME: Raised when a food ledger, meal catalog, or weekly plan is structurally unusable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Invariant violations detected while constructing the lookup tables
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The same identifier appears twice in one table
    #[error("Duplicate identifier in {table}: {id}")]
    DuplicateId {
        /// Table being built
        table: &'static str,
        /// Offending identifier
        id: String,
    },

    /// A food carries a negative nutrition value
    #[error("Food {food_id} has negative {field}: {value}")]
    NegativeNutrient {
        /// Offending food
        food_id: String,
        /// Wire name of the field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A meal component has a negative quantity
    #[error("Meal {meal_id} has negative quantity {quantity} for food {food_id}")]
    NegativeQuantity {
        /// Meal containing the component
        meal_id: String,
        /// Component food
        food_id: String,
        /// The rejected quantity
        quantity: f64,
    },

    /// A day index is outside 1..=7
    #[error("Day index {day} is outside the range 1-7")]
    DayOutOfRange {
        /// The rejected index
        day: u8,
    },

    /// Two days share an index
    #[error("Day {day} appears more than once in the {variant} plan")]
    DuplicateDay {
        /// Repeated index
        day: u8,
        /// Plan variant name
        variant: &'static str,
    },
}
