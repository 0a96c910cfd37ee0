//! Physical kinds and measurement systems
//!
//! A kind decides which units are interchangeable; a system only groups
//! units a cook recognizes together and never changes a conversion factor.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::ConversionError;

/// Physical category of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalKind {
    Volume,
    Weight,
    /// Count-like units (piece, pinch, ...) that only convert to themselves
    Misc,
}

impl PhysicalKind {
    pub const ALL: [PhysicalKind; 3] = [PhysicalKind::Volume, PhysicalKind::Weight, PhysicalKind::Misc];

    pub fn label(&self) -> &'static str {
        match self {
            PhysicalKind::Volume => "Volume",
            PhysicalKind::Weight => "Weight",
            PhysicalKind::Misc => "Misc.",
        }
    }

    /// Stable identifier, also used by serde
    pub fn id(&self) -> &'static str {
        match self {
            PhysicalKind::Volume => "volume",
            PhysicalKind::Weight => "weight",
            PhysicalKind::Misc => "misc",
        }
    }
}

impl fmt::Display for PhysicalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PhysicalKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhysicalKind::ALL
            .into_iter()
            .find(|k| k.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConversionError::UnknownKind(s.to_string()))
    }
}

/// Named convention grouping of units.
///
/// Identifiers are stable strings; persisted settings refer to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementSystem {
    #[serde(rename = "metric")]
    Metric,
    #[serde(rename = "us")]
    US,
    #[serde(rename = "imperial")]
    Imperial,
    #[serde(rename = "notApplicable")]
    NotApplicable,
}

impl MeasurementSystem {
    pub const ALL: [MeasurementSystem; 4] = [
        MeasurementSystem::Metric,
        MeasurementSystem::Imperial,
        MeasurementSystem::US,
        MeasurementSystem::NotApplicable,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::US => "us",
            MeasurementSystem::Imperial => "imperial",
            MeasurementSystem::NotApplicable => "notApplicable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "Metric",
            MeasurementSystem::US => "US",
            MeasurementSystem::Imperial => "Imperial",
            MeasurementSystem::NotApplicable => "N.A",
        }
    }

    /// The remaining cooking systems, in menu order
    pub fn other_systems(&self) -> &'static [MeasurementSystem] {
        match self {
            MeasurementSystem::Metric => &[MeasurementSystem::Imperial, MeasurementSystem::US],
            MeasurementSystem::Imperial => &[MeasurementSystem::US, MeasurementSystem::Metric],
            MeasurementSystem::US => &[MeasurementSystem::Metric, MeasurementSystem::Imperial],
            MeasurementSystem::NotApplicable => &[],
        }
    }

    /// Whether this system can be chosen as a user preference
    pub fn is_preferable(&self) -> bool {
        !matches!(self, MeasurementSystem::NotApplicable)
    }

    /// Default system for a locale region code ("US", "GB", "se", ...)
    pub fn from_region(region: &str) -> MeasurementSystem {
        match region.trim().to_ascii_uppercase().as_str() {
            "US" | "LR" | "MM" => MeasurementSystem::US,
            "GB" | "UK" => MeasurementSystem::Imperial,
            _ => MeasurementSystem::Metric,
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MeasurementSystem {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MeasurementSystem::ALL
            .into_iter()
            .find(|sys| sys.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConversionError::UnknownSystem(s.to_string()))
    }
}

/// How recipe quantities are shown: in one system, or as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayedSystem {
    Metric,
    Imperial,
    #[serde(rename = "us")]
    US,
    Original,
}

impl DisplayedSystem {
    pub const ALL: [DisplayedSystem; 4] = [
        DisplayedSystem::Metric,
        DisplayedSystem::Imperial,
        DisplayedSystem::US,
        DisplayedSystem::Original,
    ];

    /// Target system to normalize into, `None` for the original units
    pub fn system(&self) -> Option<MeasurementSystem> {
        match self {
            DisplayedSystem::Metric => Some(MeasurementSystem::Metric),
            DisplayedSystem::Imperial => Some(MeasurementSystem::Imperial),
            DisplayedSystem::US => Some(MeasurementSystem::US),
            DisplayedSystem::Original => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayedSystem::Metric => "Metric",
            DisplayedSystem::Imperial => "Imperial",
            DisplayedSystem::US => "US",
            DisplayedSystem::Original => "Original",
        }
    }
}

impl From<MeasurementSystem> for DisplayedSystem {
    fn from(system: MeasurementSystem) -> Self {
        match system {
            MeasurementSystem::Metric => DisplayedSystem::Metric,
            MeasurementSystem::Imperial => DisplayedSystem::Imperial,
            MeasurementSystem::US => DisplayedSystem::US,
            MeasurementSystem::NotApplicable => DisplayedSystem::Original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_systems_exclude_self() {
        for system in MeasurementSystem::ALL {
            assert!(!system.other_systems().contains(&system));
        }
        assert_eq!(MeasurementSystem::Metric.other_systems(),
            &[MeasurementSystem::Imperial, MeasurementSystem::US]);
        assert!(MeasurementSystem::NotApplicable.other_systems().is_empty());
    }

    #[test]
    fn test_system_from_str() {
        assert_eq!("metric".parse::<MeasurementSystem>().unwrap(), MeasurementSystem::Metric);
        assert_eq!("US".parse::<MeasurementSystem>().unwrap(), MeasurementSystem::US);
        assert_eq!(" Imperial ".parse::<MeasurementSystem>().unwrap(), MeasurementSystem::Imperial);
        assert!(matches!("cubits".parse::<MeasurementSystem>(),
            Err(ConversionError::UnknownSystem(_))));
    }

    #[test]
    fn test_from_region() {
        assert_eq!(MeasurementSystem::from_region("us"), MeasurementSystem::US);
        assert_eq!(MeasurementSystem::from_region("GB"), MeasurementSystem::Imperial);
        assert_eq!(MeasurementSystem::from_region("SE"), MeasurementSystem::Metric);
        assert_eq!(MeasurementSystem::from_region(""), MeasurementSystem::Metric);
    }

    #[test]
    fn test_system_serde_ids() {
        let json = serde_json::to_string(&MeasurementSystem::NotApplicable).unwrap();
        assert_eq!(json, "\"notApplicable\"");
        let back: MeasurementSystem = serde_json::from_str("\"us\"").unwrap();
        assert_eq!(back, MeasurementSystem::US);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(PhysicalKind::Misc.label(), "Misc.");
        assert_eq!("weight".parse::<PhysicalKind>().unwrap(), PhysicalKind::Weight);
        assert_eq!(serde_json::to_string(&PhysicalKind::Volume).unwrap(), "\"volume\"");
    }

    #[test]
    fn test_displayed_system() {
        assert_eq!(DisplayedSystem::Original.system(), None);
        assert_eq!(DisplayedSystem::US.system(), Some(MeasurementSystem::US));
        assert_eq!(DisplayedSystem::from(MeasurementSystem::Imperial), DisplayedSystem::Imperial);
        let back: DisplayedSystem = serde_json::from_str("\"original\"").unwrap();
        assert_eq!(back, DisplayedSystem::Original);
    }

    #[test]
    fn test_displayed_system_menu() {
        let labels: Vec<&str> = DisplayedSystem::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["Metric", "Imperial", "US", "Original"]);
        let targets: Vec<Option<MeasurementSystem>> =
            DisplayedSystem::ALL.iter().map(|d| d.system()).collect();
        assert_eq!(targets.iter().filter(|t| t.is_none()).count(), 1);
    }
}
