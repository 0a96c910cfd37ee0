//! Unit families: the units a cook would naturally reach for in a system
//!
//! Families are curated per (system, kind), not derived from the catalog.
//! Some catalog units (US pint, the Swedish measures) are deliberately left
//! out because they are not idiomatic display choices.

use crate::{MeasurementSystem, PhysicalKind, Unit};

const METRIC_VOLUME: [Unit; 7] = [
    Unit::Liter, Unit::Milliliter, Unit::Deciliter, Unit::Centiliter,
    Unit::Tablespoon, Unit::Teaspoon, Unit::Dessertspoon,
];
const METRIC_WEIGHT: [Unit; 3] = [Unit::Kilo, Unit::Hecto, Unit::Gram];

const US_VOLUME: [Unit; 7] = [
    Unit::USCup, Unit::Teaspoon, Unit::Tablespoon, Unit::USQuart,
    Unit::USGallon, Unit::USFluidOunce, Unit::Dessertspoon,
];
const US_WEIGHT: [Unit; 2] = [Unit::USOunce, Unit::USPound];

const IMPERIAL_VOLUME: [Unit; 6] = [
    Unit::ImperialCup, Unit::ImperialPint, Unit::ImperialGallon,
    Unit::ImperialQuart, Unit::Dessertspoon, Unit::ImperialFluidOunce,
];
const IMPERIAL_WEIGHT: [Unit; 2] = [Unit::ImperialOunce, Unit::ImperialPound];

/// Curated members for a system and kind, `None` where the family is just
/// the unit itself (misc kinds and the not-applicable system)
fn curated(system: MeasurementSystem, kind: PhysicalKind) -> Option<&'static [Unit]> {
    match (system, kind) {
        (MeasurementSystem::Metric, PhysicalKind::Volume) => Some(&METRIC_VOLUME),
        (MeasurementSystem::Metric, PhysicalKind::Weight) => Some(&METRIC_WEIGHT),
        (MeasurementSystem::US, PhysicalKind::Volume) => Some(&US_VOLUME),
        (MeasurementSystem::US, PhysicalKind::Weight) => Some(&US_WEIGHT),
        (MeasurementSystem::Imperial, PhysicalKind::Volume) => Some(&IMPERIAL_VOLUME),
        (MeasurementSystem::Imperial, PhysicalKind::Weight) => Some(&IMPERIAL_WEIGHT),
        (_, PhysicalKind::Misc) | (MeasurementSystem::NotApplicable, _) => None,
    }
}

impl Unit {
    /// Family of this unit's kind in `system`, sorted by ascending factor.
    ///
    /// With `include_self == false` the unit itself is filtered out.
    pub fn family_members(&self, system: MeasurementSystem, include_self: bool) -> Vec<Unit> {
        let mut members = match curated(system, self.kind()) {
            Some(units) => units.to_vec(),
            None => vec![*self],
        };
        if !include_self {
            members.retain(|u| u != self);
        }
        // Stable sort: equal factors keep curated order
        members.sort_by(|a, b| a.factor().total_cmp(&b.factor()));
        members
    }
}
