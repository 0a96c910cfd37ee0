//! Ladle Units - Cooking quantities and unit normalization
//!
//! Converts between kitchen units of the same kind, picks the most legible
//! unit of a measurement system for an amount, and adds quantities written
//! in different units.
//!
//! Kinds:
//! - Volume (ml, dl, l, tsp, tbsp, US cup, imp. pint, ...), base: milliliter
//! - Weight (g, hg, kg, oz, lb), base: gram
//! - Misc (piece, pinch, part, dash), each its own base
//!
//! Units are identified by stable string ids (`"USCup"`, `"gram"`), which
//! is also how quantities serialize: `{"amount": 2.0, "unit": "USCup"}`.

mod kind;
mod unit;
mod family;
mod units;
mod quantity;
mod preferences;
mod ingredient;

pub use kind::{PhysicalKind, MeasurementSystem, DisplayedSystem};
pub use unit::{Unit, ConversionError};
pub use units::{UNITS, UnitRegistry};
pub use quantity::{Quantity, combine, portion_scale, format_amount};
pub use preferences::{Preferences, SYSTEM_VAR, ABBREVIATE_VAR};
pub use ingredient::{MeasuredIngredient, IngredientOrder, sort_ingredients, merge_ingredients};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ConversionError, DisplayedSystem, MeasurementSystem, PhysicalKind,
        Preferences, Quantity, Unit,
    };
}
