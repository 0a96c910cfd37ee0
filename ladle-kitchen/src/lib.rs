//! Ladle Kitchen Functions Plugin
//!
//! Exposes the quantity engine to host applications as named functions:
//! - Unit conversion between units of the same kind
//! - Normalization into the most legible unit of a measurement system
//! - Adding quantities, including unmeasured ones
//! - Catalog lookups: labels, families and units per kind
//!
//! Quantities are returned as objects `{amount, unit, label}`; a null
//! amount means "no amount given". Optional system and abbreviation
//! arguments fall back to the preferences carried by the `EvalContext`.

mod helpers;
mod convert;
mod normalize;
mod catalog;

use ladle_plugin::PluginRegistry;

/// Load kitchen functions into registry
pub fn load_kitchen_library(registry: PluginRegistry) -> PluginRegistry {
    let registry = registry
        // Conversion and arithmetic (2 functions)
        .with_function(convert::ConvertUnit)
        .with_function(convert::AddQuantities)

        // Normalization (2 functions)
        .with_function(normalize::NormalizeQuantity)
        .with_function(normalize::QuantityAlternatives)

        // Catalog (3 functions)
        .with_function(catalog::DescribeUnit)
        .with_function(catalog::FamilyMembers)
        .with_function(catalog::ListUnits);

    tracing::debug!(functions = registry.function_names().len(), "kitchen library loaded");
    registry
}
