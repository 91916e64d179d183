// ABOUTME: Published reference nutrition figures used to regression-check computed totals
// ABOUTME: Seven daily rows, the weekly average, and the list of foods the plan requires
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::models::NutritionFacts;
use serde::{Deserialize, Serialize};

/// Expected nutrition for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDay {
    /// Day index, 1-7
    pub day: u8,
    /// Expected day total
    pub expected: NutritionFacts,
}

/// A complete set of reference figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTable {
    /// Expected per-day totals
    pub daily: Vec<ReferenceDay>,
    /// Expected rounded weekly average
    pub weekly_average: NutritionFacts,
    /// Food ids the ledger must contain
    pub required_foods: Vec<String>,
}

#[allow(clippy::too_many_arguments)]
const fn facts(
    calories: f64,
    protein: f64,
    fat: f64,
    saturated_fat: f64,
    carbs: f64,
    fiber: f64,
    sodium: f64,
    cholesterol: f64,
) -> NutritionFacts {
    NutritionFacts {
        calories,
        protein,
        fat,
        saturated_fat,
        carbs,
        fiber,
        sodium,
        cholesterol,
    }
}

const PUBLISHED_DAILY: [ReferenceDay; 7] = [
    ReferenceDay {
        day: 1,
        expected: facts(2829.0, 106.0, 114.7, 25.1, 350.2, 47.9, 2130.0, 111.0),
    },
    ReferenceDay {
        day: 2,
        expected: facts(2821.0, 138.8, 86.6, 21.9, 368.5, 45.4, 2236.0, 1003.0),
    },
    ReferenceDay {
        day: 3,
        expected: facts(2851.0, 101.4, 118.8, 32.7, 348.6, 45.3, 2684.0, 100.0),
    },
    ReferenceDay {
        day: 4,
        expected: facts(2841.0, 140.2, 94.6, 19.8, 355.6, 39.8, 2056.0, 1003.0),
    },
    ReferenceDay {
        day: 5,
        expected: facts(2809.0, 98.2, 81.0, 12.8, 425.0, 49.3, 1984.0, 39.0),
    },
    ReferenceDay {
        day: 6,
        expected: facts(2869.0, 135.5, 121.7, 35.8, 303.8, 42.0, 2216.0, 1003.0),
    },
    ReferenceDay {
        day: 7,
        expected: facts(2752.0, 98.0, 100.2, 23.0, 363.6, 46.9, 2128.0, 81.0),
    },
];

const PUBLISHED_WEEKLY_AVERAGE: NutritionFacts =
    facts(2824.0, 116.9, 102.5, 24.4, 359.3, 45.2, 2205.0, 477.0);

const PUBLISHED_REQUIRED_FOODS: [&str; 25] = [
    "large-egg",
    "rolled-oats",
    "whey-protein",
    "greek-yogurt-2percent",
    "milk-2percent",
    "brown-rice-cooked",
    "tomato-dal",
    "potato-fry",
    "chickpea-curry",
    "spaghetti-cooked",
    "paneer-curry",
    "black-bean-curry",
    "spinach-dal",
    "mixed-vegetable-curry",
    "veg-fried-rice",
    "great-grains-cereal",
    "white-bread-slice",
    "american-cheese-slice",
    "chia-seeds",
    "walnuts-quarter-cup",
    "banana-medium",
    "apple-medium",
    "peanut-butter-tbsp",
    "pomegranate-arils",
    "chapati-medium",
];

impl ReferenceTable {
    /// Build a table from arbitrary reference figures
    #[must_use]
    pub fn new(
        daily: Vec<ReferenceDay>,
        weekly_average: NutritionFacts,
        required_foods: Vec<String>,
    ) -> Self {
        Self {
            daily,
            weekly_average,
            required_foods,
        }
    }

    /// Figures from the published meal-plan analysis (Table 2)
    #[must_use]
    pub fn published() -> Self {
        Self::new(
            PUBLISHED_DAILY.to_vec(),
            PUBLISHED_WEEKLY_AVERAGE,
            PUBLISHED_REQUIRED_FOODS
                .iter()
                .map(|id| (*id).to_owned())
                .collect(),
        )
    }

    /// Expected totals for `day`
    #[must_use]
    pub fn day(&self, day: u8) -> Option<&NutritionFacts> {
        self.daily
            .iter()
            .find(|row| row.day == day)
            .map(|row| &row.expected)
    }
}
