// ABOUTME: Immutable keyed lookup tables for foods and meals
// ABOUTME: FoodLedger and MealCatalog preserve dataset order and index entries by identifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::Meal;
use super::nutrition::FoodItem;
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Builds an id -> position index, rejecting duplicates
fn build_index<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>, ValidationError> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_owned(), position).is_some() {
            return Err(ValidationError::DuplicateId {
                table,
                id: id.to_owned(),
            });
        }
    }
    Ok(index)
}

/// The food ledger: every food item keyed by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<FoodItem>", into = "Vec<FoodItem>")]
pub struct FoodLedger {
    items: Vec<FoodItem>,
    index: HashMap<String, usize>,
}

impl FoodLedger {
    /// Build a ledger from an ordered list of foods
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` on a duplicate id or a negative nutrition value
    pub fn new(items: Vec<FoodItem>) -> Result<Self, ValidationError> {
        for food in &items {
            if let Some((field, value)) = food.nutrition.first_negative() {
                return Err(ValidationError::NegativeNutrient {
                    food_id: food.id.clone(),
                    field: field.key(),
                    value,
                });
            }
        }
        let index = build_index("food ledger", items.iter().map(|food| food.id.as_str()))?;
        Ok(Self { items, index })
    }

    /// Look up a food by id
    #[must_use]
    pub fn get(&self, food_id: &str) -> Option<&FoodItem> {
        self.index.get(food_id).map(|&position| &self.items[position])
    }

    /// Whether `food_id` resolves
    #[must_use]
    pub fn contains(&self, food_id: &str) -> bool {
        self.index.contains_key(food_id)
    }

    /// Foods in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.items.iter()
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the ledger holds no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<FoodItem>> for FoodLedger {
    type Error = ValidationError;

    fn try_from(items: Vec<FoodItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<FoodLedger> for Vec<FoodItem> {
    fn from(ledger: FoodLedger) -> Self {
        ledger.items
    }
}

/// The meal catalog: every meal keyed by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Meal>", into = "Vec<Meal>")]
pub struct MealCatalog {
    meals: Vec<Meal>,
    index: HashMap<String, usize>,
}

impl MealCatalog {
    /// Build a catalog from an ordered list of meals
    ///
    /// Components referencing unknown foods are accepted; they are data
    /// defects surfaced by the aggregator warnings and the validator.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` on a duplicate id or a negative quantity
    pub fn new(meals: Vec<Meal>) -> Result<Self, ValidationError> {
        for meal in &meals {
            if let Some(component) = meal
                .components
                .iter()
                .find(|component| component.quantity.is_nan() || component.quantity < 0.0)
            {
                return Err(ValidationError::NegativeQuantity {
                    meal_id: meal.id.clone(),
                    food_id: component.food_id.clone(),
                    quantity: component.quantity,
                });
            }
        }
        let index = build_index("meal catalog", meals.iter().map(|meal| meal.id.as_str()))?;
        Ok(Self { meals, index })
    }

    /// Look up a meal by id
    #[must_use]
    pub fn get(&self, meal_id: &str) -> Option<&Meal> {
        self.index.get(meal_id).map(|&position| &self.meals[position])
    }

    /// Whether `meal_id` resolves
    #[must_use]
    pub fn contains(&self, meal_id: &str) -> bool {
        self.index.contains_key(meal_id)
    }

    /// Meals in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &Meal> {
        self.meals.iter()
    }

    /// Number of meals
    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Whether the catalog holds no meals
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

impl TryFrom<Vec<Meal>> for MealCatalog {
    type Error = ValidationError;

    fn try_from(meals: Vec<Meal>) -> Result<Self, Self::Error> {
        Self::new(meals)
    }
}

impl From<MealCatalog> for Vec<Meal> {
    fn from(catalog: MealCatalog) -> Self {
        catalog.meals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealComponent, MealSlot, NutritionFacts};

    fn food(id: &str, calories: f64) -> FoodItem {
        FoodItem {
            id: id.into(),
            name: id.into(),
            serving_size: "1 serving".into(),
            nutrition: NutritionFacts {
                calories,
                ..NutritionFacts::ZERO
            },
            source_url: String::new(),
            source_number: 0,
        }
    }

    #[test]
    fn test_ledger_lookup_preserves_order() {
        let ledger = FoodLedger::new(vec![food("b", 1.0), food("a", 2.0)]).unwrap();
        assert_eq!(ledger.len(), 2);
        assert!(ledger.contains("a"));
        assert_eq!(ledger.get("a").map(|f| f.nutrition.calories), Some(2.0));
        let ids: Vec<_> = ledger.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_ledger_rejects_duplicates_and_negatives() {
        assert!(matches!(
            FoodLedger::new(vec![food("a", 1.0), food("a", 2.0)]),
            Err(ValidationError::DuplicateId { .. })
        ));
        assert!(matches!(
            FoodLedger::new(vec![food("a", -5.0)]),
            Err(ValidationError::NegativeNutrient {
                field: "calories",
                ..
            })
        ));
    }

    #[test]
    fn test_catalog_rejects_negative_quantity() {
        let meal = Meal {
            id: "m".into(),
            name: "Meal".into(),
            category: MealSlot::Lunch,
            components: vec![MealComponent::new("a", -1.0)],
        };
        assert!(matches!(
            MealCatalog::new(vec![meal]),
            Err(ValidationError::NegativeQuantity { .. })
        ));
    }

    #[test]
    fn test_catalog_deserializes_from_array() {
        let json = r#"[{"id": "oatmeal", "name": "Protein Oatmeal", "type": "breakfast",
            "components": [{"foodId": "rolled-oats", "quantity": 1}, {"foodId": "whey-protein", "quantity": 0.5}]}]"#;
        let catalog: MealCatalog = serde_json::from_str(json).unwrap();
        let meal = catalog.get("oatmeal").unwrap();
        assert_eq!(meal.category, MealSlot::Breakfast);
        assert_eq!(meal.components.len(), 2);
        assert!((meal.components[1].quantity - 0.5).abs() < f64::EPSILON);
    }
}
