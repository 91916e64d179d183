// ABOUTME: Weekly plan definitions assigning meals to day slots
// ABOUTME: DayPlan, WeeklyPlan (original or optimized variant), and the PlanPair dataset shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::MealSlot;
use crate::constants::plan::{FIRST_DAY, LAST_DAY};
use crate::errors::{AppError, AppResult, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Which of the two coexisting weekly plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanVariant {
    /// The plan as originally written
    #[default]
    Original,
    /// The plan after ingredient swaps
    Optimized,
}

impl PlanVariant {
    /// Both variants
    pub const ALL: [Self; 2] = [Self::Original, Self::Optimized];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Optimized => "optimized",
        }
    }
}

impl fmt::Display for PlanVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanVariant {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "optimized" | "optimised" => Ok(Self::Optimized),
            other => Err(AppError::invalid_input(format!(
                "Unknown plan variant '{other}', expected 'original' or 'optimized'"
            ))),
        }
    }
}

/// One day of a weekly plan: a meal reference per slot
///
/// An absent slot and an empty string both mean "no meal in this slot".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day index, 1-7
    pub day: u8,
    /// Breakfast meal id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<String>,
    /// Lunch meal id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<String>,
    /// Dinner meal id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<String>,
    /// First snack meal id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snack1: Option<String>,
    /// Second snack meal id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snack2: Option<String>,
}

impl DayPlan {
    /// Create a day with every slot empty
    #[must_use]
    pub fn new(day: u8) -> Self {
        Self {
            day,
            ..Self::default()
        }
    }

    /// Builder-style slot assignment
    #[must_use]
    pub fn with_slot(mut self, slot: MealSlot, meal_id: impl Into<String>) -> Self {
        let meal_id = Some(meal_id.into());
        match slot {
            MealSlot::Breakfast => self.breakfast = meal_id,
            MealSlot::Lunch => self.lunch = meal_id,
            MealSlot::Dinner => self.dinner = meal_id,
            MealSlot::Snack1 => self.snack1 = meal_id,
            MealSlot::Snack2 => self.snack2 = meal_id,
        }
        self
    }

    /// Meal id assigned to `slot`, if any
    #[must_use]
    pub fn slot(&self, slot: MealSlot) -> Option<&str> {
        let raw = match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack1 => &self.snack1,
            MealSlot::Snack2 => &self.snack2,
        };
        raw.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Occupied slots with their meal ids, in fixed slot order
    pub fn meal_refs(&self) -> impl Iterator<Item = (MealSlot, &str)> + '_ {
        MealSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.slot(slot).map(|id| (slot, id)))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWeeklyPlan {
    version: PlanVariant,
    days: Vec<DayPlan>,
    #[serde(default)]
    swaps_applied: Vec<String>,
}

/// A 7-day assignment of meals to slots
///
/// Day indices are unique and within 1-7. Fewer than seven days is accepted
/// here so partial plans can be aggregated; completeness is a validator concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawWeeklyPlan")]
pub struct WeeklyPlan {
    version: PlanVariant,
    days: Vec<DayPlan>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    swaps_applied: Vec<String>,
}

impl WeeklyPlan {
    /// Build a plan, enforcing day-index range and uniqueness
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a day index is outside 1-7 or repeated
    pub fn new(version: PlanVariant, days: Vec<DayPlan>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(days.len());
        for day in &days {
            if !(FIRST_DAY..=LAST_DAY).contains(&day.day) {
                return Err(ValidationError::DayOutOfRange { day: day.day });
            }
            if !seen.insert(day.day) {
                return Err(ValidationError::DuplicateDay {
                    day: day.day,
                    variant: version.as_str(),
                });
            }
        }

        Ok(Self {
            version,
            days,
            swaps_applied: Vec::new(),
        })
    }

    /// Attach the list of applied swap descriptions
    #[must_use]
    pub fn with_swaps(mut self, swaps: Vec<String>) -> Self {
        self.swaps_applied = swaps;
        self
    }

    /// Plan variant
    #[must_use]
    pub const fn version(&self) -> PlanVariant {
        self.version
    }

    /// Days in plan order
    #[must_use]
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    /// Swap descriptions (optimized plans only)
    #[must_use]
    pub fn swaps_applied(&self) -> &[String] {
        &self.swaps_applied
    }

    /// Look up a day by index
    #[must_use]
    pub fn day(&self, day: u8) -> Option<&DayPlan> {
        self.days.iter().find(|plan| plan.day == day)
    }
}

impl TryFrom<RawWeeklyPlan> for WeeklyPlan {
    type Error = ValidationError;

    fn try_from(raw: RawWeeklyPlan) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.version, raw.days)?.with_swaps(raw.swaps_applied))
    }
}

/// The two weekly plans as stored in `weeklyPlan.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPair {
    /// Original plan
    pub original: WeeklyPlan,
    /// Optimized plan
    pub optimized: WeeklyPlan,
}

impl PlanPair {
    /// Select a plan by variant
    #[must_use]
    pub const fn get(&self, variant: PlanVariant) -> &WeeklyPlan {
        match variant {
            PlanVariant::Original => &self.original,
            PlanVariant::Optimized => &self.optimized,
        }
    }
}
