//! Unit catalog: every supported cooking unit with its kind, system and factor
//!
//! Factors are expressed in the canonical base of the unit's kind:
//! milliliters for volume, grams for weight. Misc units are their own base.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Serializer, Deserialize, Deserializer};
use thiserror::Error;
use crate::{MeasurementSystem, PhysicalKind};

/// A catalog unit.
///
/// Persisted data refers to units by [`Unit::id`], never by position, so
/// variants may be reordered freely but identifiers must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    // Weight - metric
    Kilo,
    Hecto,
    Gram,
    // Weight - US
    USPound,
    USOunce,
    // Weight - imperial
    ImperialPound,
    ImperialOunce,

    // Volume - metric
    Liter,
    Deciliter,
    Centiliter,
    Milliliter,
    // Volume - US
    USFluidOunce,
    USCup,
    USPint,
    USGallon,
    USQuart,
    // Volume - imperial
    ImperialFluidOunce,
    ImperialCup,
    ImperialPint,
    ImperialQuart,
    ImperialGallon,
    // Volume - spoons, shared by every system
    Tablespoon,
    Teaspoon,
    Dessertspoon,
    // Volume - Swedish kitchen measures
    Kryddmatt,
    Teacup,
    Coffeecup,
    Kanna,

    // Misc
    Piece,
    Pinch,
    Part,
    Dash,
}

impl Unit {
    /// Every unit in catalog order
    pub const ALL: [Unit; 32] = [
        Unit::Kilo, Unit::Hecto, Unit::Gram,
        Unit::USPound, Unit::USOunce,
        Unit::ImperialPound, Unit::ImperialOunce,
        Unit::Liter, Unit::Deciliter, Unit::Centiliter, Unit::Milliliter,
        Unit::USFluidOunce, Unit::USCup, Unit::USPint, Unit::USGallon, Unit::USQuart,
        Unit::ImperialFluidOunce, Unit::ImperialCup, Unit::ImperialPint,
        Unit::ImperialQuart, Unit::ImperialGallon,
        Unit::Tablespoon, Unit::Teaspoon, Unit::Dessertspoon,
        Unit::Kryddmatt, Unit::Teacup, Unit::Coffeecup, Unit::Kanna,
        Unit::Piece, Unit::Pinch, Unit::Part, Unit::Dash,
    ];

    /// Stable identifier used in persisted quantities
    pub fn id(&self) -> &'static str {
        match self {
            Unit::Kilo => "kilo",
            Unit::Hecto => "hecto",
            Unit::Gram => "gram",
            Unit::USPound => "USPound",
            Unit::USOunce => "USOunce",
            Unit::ImperialPound => "imperialPound",
            Unit::ImperialOunce => "imperialOunce",
            Unit::Liter => "liter",
            Unit::Deciliter => "deciliter",
            Unit::Centiliter => "centiliter",
            Unit::Milliliter => "milliliter",
            Unit::USFluidOunce => "USFluidOunce",
            Unit::USCup => "USCup",
            Unit::USPint => "USPint",
            Unit::USGallon => "USGallon",
            Unit::USQuart => "USQuart",
            Unit::ImperialFluidOunce => "imperialFluidOunce",
            Unit::ImperialCup => "imperialCup",
            Unit::ImperialPint => "imperialPint",
            Unit::ImperialQuart => "imperialQuart",
            Unit::ImperialGallon => "imperialGallon",
            Unit::Tablespoon => "tablespoon",
            Unit::Teaspoon => "teaspoon",
            Unit::Dessertspoon => "dessertspoon",
            Unit::Kryddmatt => "kryddmatt",
            Unit::Teacup => "teacup",
            Unit::Coffeecup => "coffeecup",
            Unit::Kanna => "kanna",
            Unit::Piece => "piece",
            Unit::Pinch => "pinch",
            Unit::Part => "part",
            Unit::Dash => "dash",
        }
    }

    /// Look up a unit by its stable identifier, see [`UnitRegistry::get`]
    ///
    /// [`UnitRegistry::get`]: crate::UnitRegistry::get
    pub fn from_id(id: &str) -> Option<Unit> {
        crate::UNITS.get(id)
    }

    pub fn kind(&self) -> PhysicalKind {
        match self {
            Unit::Kilo | Unit::Hecto | Unit::Gram
            | Unit::USPound | Unit::USOunce
            | Unit::ImperialPound | Unit::ImperialOunce => PhysicalKind::Weight,

            Unit::Liter | Unit::Deciliter | Unit::Centiliter | Unit::Milliliter
            | Unit::USFluidOunce | Unit::USCup | Unit::USPint | Unit::USGallon | Unit::USQuart
            | Unit::ImperialFluidOunce | Unit::ImperialCup | Unit::ImperialPint
            | Unit::ImperialQuart | Unit::ImperialGallon
            | Unit::Tablespoon | Unit::Teaspoon | Unit::Dessertspoon
            | Unit::Kryddmatt | Unit::Teacup | Unit::Coffeecup | Unit::Kanna => PhysicalKind::Volume,

            Unit::Piece | Unit::Pinch | Unit::Part | Unit::Dash => PhysicalKind::Misc,
        }
    }

    /// Amount of the canonical base unit in one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            // Volume, in milliliters
            Unit::Liter => 1000.0,
            Unit::Deciliter => 100.0,
            Unit::Centiliter => 10.0,
            Unit::Milliliter => 1.0,
            Unit::Tablespoon => 15.0,
            Unit::Teaspoon => 5.0,
            Unit::Dessertspoon => 10.0,
            Unit::Kryddmatt => 1.0,
            Unit::Teacup => 250.0,
            Unit::Coffeecup => 150.0,
            Unit::Kanna => 2600.0,
            Unit::USFluidOunce => 29.57,
            Unit::USCup => 240.0,
            Unit::USPint => 473.176473,
            Unit::USQuart => 946.352946,
            Unit::USGallon => 3785.41,
            Unit::ImperialFluidOunce => 28.41,
            Unit::ImperialCup => 250.0,
            Unit::ImperialPint => 568.26125,
            Unit::ImperialQuart => 1136.52,
            Unit::ImperialGallon => 4546.09,
            // Weight, in grams
            Unit::Kilo => 1000.0,
            Unit::Hecto => 100.0,
            Unit::Gram => 1.0,
            Unit::USPound | Unit::ImperialPound => 453.592,
            Unit::USOunce | Unit::ImperialOunce => 28.3495,
            // Misc
            Unit::Piece | Unit::Pinch | Unit::Part | Unit::Dash => 1.0,
        }
    }

    /// System membership. Spoons belong to whichever system is preferred.
    pub fn system_in(&self, preferred: MeasurementSystem) -> MeasurementSystem {
        match self {
            Unit::Tablespoon | Unit::Teaspoon | Unit::Dessertspoon => preferred,

            Unit::Kilo | Unit::Hecto | Unit::Gram
            | Unit::Liter | Unit::Deciliter | Unit::Centiliter | Unit::Milliliter
            | Unit::Kryddmatt | Unit::Teacup | Unit::Coffeecup | Unit::Kanna => MeasurementSystem::Metric,

            Unit::USPound | Unit::USOunce
            | Unit::USFluidOunce | Unit::USCup | Unit::USPint | Unit::USGallon | Unit::USQuart => MeasurementSystem::US,

            Unit::ImperialPound | Unit::ImperialOunce
            | Unit::ImperialFluidOunce | Unit::ImperialCup | Unit::ImperialPint
            | Unit::ImperialQuart | Unit::ImperialGallon => MeasurementSystem::Imperial,

            Unit::Piece | Unit::Pinch | Unit::Part | Unit::Dash => MeasurementSystem::NotApplicable,
        }
    }

    /// Milliliter for volume, gram for weight, the unit itself for misc
    pub fn canonical_base(&self) -> Unit {
        match self.kind() {
            PhysicalKind::Volume => Unit::Milliliter,
            PhysicalKind::Weight => Unit::Gram,
            PhysicalKind::Misc => *self,
        }
    }

    /// Whether amounts can be converted between the two units
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.kind() == other.kind()
    }

    /// Human readable label, e.g. "tsp" or "teaspoon"
    pub fn describe(&self, abbreviated: bool) -> &'static str {
        let (long, short) = match self {
            Unit::Kilo => ("kilo", "kg"),
            Unit::Hecto => ("hecto", "hg"),
            Unit::Gram => ("gram", "g"),
            Unit::Liter => ("liter", "l"),
            Unit::Deciliter => ("deciliter", "dl"),
            Unit::Centiliter => ("centiliter", "cl"),
            Unit::Milliliter => ("milliliter", "ml"),
            Unit::Teaspoon => ("teaspoon", "tsp"),
            Unit::Dessertspoon => ("dessertspoon", "dstspn"),
            Unit::Tablespoon => ("tablespoon", "tbsp"),
            Unit::USPound => ("US pounds", "lb"),
            Unit::USOunce => ("US ounce", "oz"),
            Unit::USFluidOunce => ("US fl. oz", "fl. oz"),
            Unit::USCup => ("US cup", "cup"),
            Unit::USPint => ("US pint", "pt"),
            Unit::USQuart => ("US quart", "qt"),
            Unit::USGallon => ("US gallon", "gal"),
            Unit::ImperialFluidOunce => ("imp. fl. oz", "fl. oz"),
            Unit::ImperialCup => ("imp. cup", "cp"),
            Unit::ImperialPint => ("imp. pint", "pt"),
            Unit::ImperialQuart => ("imp. quart", "qt"),
            Unit::ImperialGallon => ("imp. gallon", "gal"),
            Unit::ImperialOunce => ("imp. ounce", "oz"),
            Unit::ImperialPound => ("imp. pound", "lb"),
            Unit::Kryddmatt => ("kryddmått", "krm"),
            Unit::Teacup => ("tekopp", "tekopp"),
            Unit::Coffeecup => ("kaffekopp", "kaffekopp"),
            Unit::Kanna => ("kanna", "kanna"),
            Unit::Piece => ("piece", "pc"),
            Unit::Pinch => ("pinch", "pinch"),
            Unit::Part => ("part", "part"),
            Unit::Dash => ("dash", "dash"),
        };
        if abbreviated { short } else { long }
    }

    /// Convert an amount of this unit into `target`.
    ///
    /// An absent amount stays absent. Converting a unit to itself returns
    /// the amount untouched.
    pub fn convert(&self, amount: Option<f64>, target: Unit) -> Result<Option<f64>, ConversionError> {
        let Some(amount) = amount else {
            return Ok(None);
        };
        if !self.is_compatible(&target) {
            tracing::debug!(from = self.id(), to = target.id(), "refusing cross-kind conversion");
            return Err(ConversionError::IncompatibleKind {
                from: *self,
                to: target,
                from_kind: self.kind(),
                to_kind: target.kind(),
            });
        }
        if *self == target {
            return Ok(Some(amount));
        }
        Ok(Some(amount * self.factor() / target.factor()))
    }

    fn position(&self) -> usize {
        *self as usize
    }
}

/// Units order by physical magnitude of one unit; equal factors keep
/// catalog order.
impl Ord for Unit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.factor()
            .total_cmp(&other.factor())
            .then_with(|| self.position().cmp(&other.position()))
    }
}

impl PartialOrd for Unit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Unit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_id(s).ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Unit::from_id(&id).ok_or_else(|| serde::de::Error::custom(ConversionError::UnknownUnit(id)))
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Units belong to different physical kinds
    #[error("cannot convert {from} ({from_kind}) to {to} ({to_kind}): incompatible kinds")]
    IncompatibleKind {
        from: Unit,
        to: Unit,
        from_kind: PhysicalKind,
        to_kind: PhysicalKind,
    },

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unknown measurement system: {0}")]
    UnknownSystem(String),

    #[error("unknown kind: {0}")]
    UnknownKind(String),
}
