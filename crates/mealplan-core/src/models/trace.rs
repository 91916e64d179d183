// ABOUTME: Recursive nutrient attribution tree for drill-down display
// ABOUTME: NutrientTrace nodes at day, meal, and food level with citation data on leaves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Level of a node in the attribution tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    /// Root: one day
    Day,
    /// A meal slot within the day
    Meal,
    /// A food component within the meal
    Food,
}

/// One node of the day -> meal -> food attribution tree
///
/// Whenever `children` is present, `value` is the sum of the children's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientTrace {
    /// Node level
    pub level: TraceLevel,
    /// Day, meal, or food identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Amount of the selected nutrient at this node
    pub value: f64,
    /// Unit of `value`
    pub unit: String,
    /// Child nodes (day and meal levels only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NutrientTrace>>,
    /// Citation URL (food level only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Citation number (food level only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_number: Option<u32>,
}

impl NutrientTrace {
    /// Create a food-level leaf
    pub fn leaf(
        id: impl Into<String>,
        name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            level: TraceLevel::Food,
            id: id.into(),
            name: name.into(),
            value,
            unit: unit.into(),
            children: None,
            source_url: None,
            source_number: None,
        }
    }

    /// Create an inner node whose value is the ordered sum of its children
    pub fn branch(
        level: TraceLevel,
        id: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        children: Vec<Self>,
    ) -> Self {
        let value = children.iter().fold(0.0, |sum, child| sum + child.value);
        Self {
            level,
            id: id.into(),
            name: name.into(),
            value,
            unit: unit.into(),
            children: Some(children),
            source_url: None,
            source_number: None,
        }
    }

    /// Attach citation data to a leaf
    #[must_use]
    pub fn with_citation(mut self, source_url: impl Into<String>, source_number: u32) -> Self {
        self.source_url = Some(source_url.into());
        self.source_number = Some(source_number);
        self
    }

    /// Child nodes, empty for leaves
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Ordered sum of the children's values, `None` for leaves
    #[must_use]
    pub fn children_sum(&self) -> Option<f64> {
        self.children
            .as_ref()
            .map(|children| children.iter().fold(0.0, |sum, child| sum + child.value))
    }

    /// Depth-first search by identifier
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Self> {
        if self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// Visit every node depth-first, parents before children
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Self)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}
