//! Measured ingredients as handed over by the recipe editor
//!
//! The `optional` and `garnish` flags are carried, never interpreted.

use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use crate::{MeasurementSystem, PhysicalKind, Quantity};

/// An ingredient line: "2 dl milk"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredIngredient {
    pub name: String,
    pub measurement: Quantity,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub garnish: bool,
}

impl MeasuredIngredient {
    pub fn new(name: impl Into<String>, measurement: Quantity) -> Self {
        MeasuredIngredient {
            name: name.into(),
            measurement,
            optional: false,
            garnish: false,
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_garnish(mut self, garnish: bool) -> Self {
        self.garnish = garnish;
        self
    }

    /// Two lines describe the same ingredient when names match ignoring
    /// case and the measurements are of the same kind
    pub fn key(&self) -> (String, PhysicalKind) {
        (self.name.trim().to_lowercase(), self.measurement.kind())
    }
}

/// How an ingredient list is ordered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IngredientOrder {
    Alphabetical,
    InverseAlphabetical,
    QuantityLargest,
    QuantitySmallest,
    /// Grouped by kind: volumes, then weights, then misc
    ByKind,
    #[default]
    Original,
}

impl IngredientOrder {
    pub const ALL: [IngredientOrder; 6] = [
        IngredientOrder::Alphabetical,
        IngredientOrder::InverseAlphabetical,
        IngredientOrder::QuantityLargest,
        IngredientOrder::QuantitySmallest,
        IngredientOrder::ByKind,
        IngredientOrder::Original,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IngredientOrder::Alphabetical => "Alphabetical",
            IngredientOrder::InverseAlphabetical => "Inverse alphabetical",
            IngredientOrder::QuantityLargest => "Largest quantity",
            IngredientOrder::QuantitySmallest => "Smallest quantity",
            IngredientOrder::ByKind => "Per type",
            IngredientOrder::Original => "Original",
        }
    }
}

/// Sort in place. All orders are stable; `Original` leaves the list as is.
///
/// Quantity orders compare amounts in the canonical base unit, so
/// "1 l" sorts above "2 cups" regardless of the system each was written in.
pub fn sort_ingredients(ingredients: &mut [MeasuredIngredient], order: IngredientOrder) {
    match order {
        IngredientOrder::Alphabetical => {
            ingredients.sort_by_cached_key(|i| i.name.to_lowercase());
        }
        IngredientOrder::InverseAlphabetical => {
            ingredients.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
        }
        IngredientOrder::QuantityLargest => {
            ingredients.sort_by(|a, b| {
                b.measurement.base_amount().total_cmp(&a.measurement.base_amount())
            });
        }
        IngredientOrder::QuantitySmallest => {
            ingredients.sort_by(|a, b| {
                a.measurement.base_amount().total_cmp(&b.measurement.base_amount())
            });
        }
        IngredientOrder::ByKind => {
            ingredients.sort_by_key(|i| i.measurement.kind());
        }
        IngredientOrder::Original => {}
    }
}

/// Combine lines naming the same ingredient into one, summing their
/// measurements into `system`. The first occurrence keeps its position and
/// flags.
pub fn merge_ingredients(ingredients: &[MeasuredIngredient], system: MeasurementSystem) -> Vec<MeasuredIngredient> {
    let mut merged: Vec<MeasuredIngredient> = Vec::with_capacity(ingredients.len());
    let mut index: HashMap<(String, PhysicalKind), usize> = HashMap::new();

    for ingredient in ingredients {
        let key = ingredient.key();
        let Some(&slot) = index.get(&key) else {
            index.insert(key, merged.len());
            merged.push(ingredient.clone());
            continue;
        };

        let existing = &mut merged[slot];
        match existing.measurement.add(&ingredient.measurement, system) {
            Ok(sum) => existing.measurement = sum,
            Err(e) => {
                // Keys include the kind, so this only happens for a broken catalog
                tracing::warn!(name = %ingredient.name, "could not merge ingredient: {}", e);
                merged.push(ingredient.clone());
            }
        }
    }

    merged
}
