//! Display preferences supplied by the host application
//!
//! The engine never reads settings on its own; hosts resolve a
//! `Preferences` value at the call boundary and pass it in.

use std::env;
use serde::{Serialize, Deserialize};
use crate::MeasurementSystem;

/// Environment variable holding the preferred system id
pub const SYSTEM_VAR: &str = "LADLE_MEASUREMENT_SYSTEM";
/// Environment variable holding the abbreviation flag
pub const ABBREVIATE_VAR: &str = "LADLE_ABBREVIATE";

/// Preferred measurement system and label style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredPreferences")]
pub struct Preferences {
    pub system: MeasurementSystem,
    pub abbreviate: bool,
}

/// Settings document as stored; missing keys take the defaults
#[derive(Deserialize)]
#[serde(default)]
struct StoredPreferences {
    system: MeasurementSystem,
    abbreviate: bool,
}

impl Default for StoredPreferences {
    fn default() -> Self {
        let defaults = Preferences::default();
        StoredPreferences {
            system: defaults.system,
            abbreviate: defaults.abbreviate,
        }
    }
}

impl From<StoredPreferences> for Preferences {
    fn from(stored: StoredPreferences) -> Self {
        Preferences::new(stored.system, stored.abbreviate)
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            system: MeasurementSystem::Metric,
            abbreviate: true,
        }
    }
}

impl Preferences {
    pub fn new(system: MeasurementSystem, abbreviate: bool) -> Self {
        Preferences::default().with_system(system).with_abbreviate(abbreviate)
    }

    /// Builder: set the preferred system. `NotApplicable` is not a cooking
    /// system and falls back to metric.
    pub fn with_system(mut self, system: MeasurementSystem) -> Self {
        self.system = if system.is_preferable() {
            system
        } else {
            tracing::warn!(system = system.id(), "not a preferable system, using metric");
            MeasurementSystem::Metric
        };
        self
    }

    pub fn with_abbreviate(mut self, abbreviate: bool) -> Self {
        self.abbreviate = abbreviate;
        self
    }

    /// Read `LADLE_MEASUREMENT_SYSTEM` and `LADLE_ABBREVIATE`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build preferences from any key/value source. Missing keys keep their
    /// defaults; unreadable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut prefs = Preferences::default();

        if let Some(raw) = lookup(SYSTEM_VAR) {
            match raw.parse::<MeasurementSystem>() {
                Ok(system) => prefs = prefs.with_system(system),
                Err(e) => tracing::warn!(var = SYSTEM_VAR, value = %raw, "{}, using metric", e),
            }
        }

        if let Some(raw) = lookup(ABBREVIATE_VAR) {
            match parse_flag(&raw) {
                Some(flag) => prefs.abbreviate = flag,
                None => tracing::warn!(var = ABBREVIATE_VAR, value = %raw, "not a boolean, keeping default"),
            }
        }

        prefs
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Quantity, Unit};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.system, MeasurementSystem::Metric);
        assert!(prefs.abbreviate);
        assert_eq!(Preferences::from_lookup(lookup(&[])), prefs);
    }

    #[test]
    fn test_from_lookup() {
        let prefs = Preferences::from_lookup(lookup(&[(SYSTEM_VAR, "US"), (ABBREVIATE_VAR, "no")]));
        assert_eq!(prefs, Preferences::new(MeasurementSystem::US, false));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let prefs = Preferences::from_lookup(lookup(&[(SYSTEM_VAR, "cubits"), (ABBREVIATE_VAR, "maybe")]));
        assert_eq!(prefs, Preferences::default());

        let prefs = Preferences::from_lookup(lookup(&[(SYSTEM_VAR, "notApplicable")]));
        assert_eq!(prefs.system, MeasurementSystem::Metric);
    }

    #[test]
    fn test_serde_partial_document() {
        let prefs: Preferences = serde_json::from_str(r#"{"system": "imperial"}"#).unwrap();
        assert_eq!(prefs.system, MeasurementSystem::Imperial);
        assert!(prefs.abbreviate);

        let json = serde_json::to_string(&Preferences::new(MeasurementSystem::US, false)).unwrap();
        assert_eq!(json, r#"{"system":"us","abbreviate":false}"#);
    }

    #[test]
    fn test_serde_not_applicable_falls_back_to_metric() {
        let prefs: Preferences = serde_json::from_str(r#"{"system": "notApplicable"}"#).unwrap();
        assert_eq!(prefs.system, MeasurementSystem::Metric);
        assert!(prefs.abbreviate);

        let q = Quantity::new(1200.0, Unit::Milliliter).normalized_with(&prefs);
        assert_eq!(q.unit, Unit::Liter);
        assert!((q.amount.unwrap() - 1.2).abs() < 1e-9);
    }
}
