//! Unit registry - lookup by stable identifier and catalog listings

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{MeasurementSystem, PhysicalKind, Unit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all catalog units, keyed by identifier
pub struct UnitRegistry {
    units: HashMap<&'static str, Unit>,
    aliases: HashMap<String, Unit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        for unit in Unit::ALL {
            registry.register(unit);
        }
        registry
    }

    /// Get a unit by identifier (case-insensitive fallback)
    pub fn get(&self, id: &str) -> Option<Unit> {
        let id = id.trim();
        if let Some(unit) = self.units.get(id) {
            return Some(*unit);
        }
        self.aliases.get(&id.to_lowercase()).copied()
    }

    /// Every unit in catalog order
    pub fn all(&self) -> &'static [Unit] {
        &Unit::ALL
    }

    /// All units of a kind, smallest first
    pub fn by_kind(&self, kind: PhysicalKind) -> Vec<Unit> {
        let mut units: Vec<Unit> = Unit::ALL.into_iter().filter(|u| u.kind() == kind).collect();
        units.sort();
        units
    }

    /// Units of `kind` belonging to `system`, smallest first.
    ///
    /// Spoons are resolved against `preferred`, so they show up under the
    /// preferred system only.
    pub fn sorted_filtered(
        &self,
        kind: PhysicalKind,
        system: MeasurementSystem,
        preferred: MeasurementSystem,
    ) -> Vec<Unit> {
        let mut units: Vec<Unit> = Unit::ALL
            .into_iter()
            .filter(|u| u.kind() == kind && u.system_in(preferred) == system)
            .collect();
        units.sort();
        units
    }

    /// Get all unit identifiers
    pub fn ids(&self) -> Vec<&'static str> {
        Unit::ALL.iter().map(|u| u.id()).collect()
    }

    fn register(&mut self, unit: Unit) {
        self.units.insert(unit.id(), unit);
        self.aliases.insert(unit.id().to_lowercase(), unit);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(UNITS.get("USCup"), Some(Unit::USCup));
        assert_eq!(UNITS.get("uscup"), Some(Unit::USCup));
        assert_eq!(UNITS.get(" gram "), Some(Unit::Gram));
        assert_eq!(UNITS.get("cups"), None);
        assert_eq!(UNITS.ids().len(), Unit::ALL.len());
    }

    #[test]
    fn test_registry_is_the_only_lookup_path() {
        for unit in UNITS.all() {
            let upper = unit.id().to_uppercase();
            assert_eq!(UNITS.get(&upper), Some(*unit));
            assert_eq!(Unit::from_id(&upper), UNITS.get(&upper));
            assert_eq!(upper.parse::<Unit>(), Ok(*unit));
        }
        assert_eq!(UNITS.all().len(), 32);
        assert_eq!(Unit::from_id(" kryddmatt "), Some(Unit::Kryddmatt));
        assert_eq!(Unit::from_id("kryddmått"), None);
    }

    #[test]
    fn test_by_kind() {
        let misc = UNITS.by_kind(PhysicalKind::Misc);
        assert_eq!(misc, vec![Unit::Piece, Unit::Pinch, Unit::Part, Unit::Dash]);
        let weights = UNITS.by_kind(PhysicalKind::Weight);
        assert_eq!(weights.first(), Some(&Unit::Gram));
        assert_eq!(weights.last(), Some(&Unit::Kilo));
    }

    #[test]
    fn test_sorted_filtered_resolves_spoons() {
        let metric = UNITS.sorted_filtered(PhysicalKind::Volume, MeasurementSystem::Metric, MeasurementSystem::Metric);
        assert!(metric.contains(&Unit::Tablespoon));
        assert!(metric.contains(&Unit::Kanna));

        let us = UNITS.sorted_filtered(PhysicalKind::Volume, MeasurementSystem::US, MeasurementSystem::Metric);
        assert!(!us.contains(&Unit::Tablespoon));
        assert!(us.contains(&Unit::USPint));

        let us = UNITS.sorted_filtered(PhysicalKind::Volume, MeasurementSystem::US, MeasurementSystem::US);
        assert_eq!(us.first(), Some(&Unit::Teaspoon));
        assert_eq!(us.last(), Some(&Unit::USGallon));
    }

    #[test]
    fn test_sorted_filtered_not_applicable() {
        let units = UNITS.sorted_filtered(PhysicalKind::Misc, MeasurementSystem::NotApplicable, MeasurementSystem::US);
        assert_eq!(units.len(), 4);
        assert!(UNITS.sorted_filtered(PhysicalKind::Weight, MeasurementSystem::NotApplicable, MeasurementSystem::US).is_empty());
    }
}
