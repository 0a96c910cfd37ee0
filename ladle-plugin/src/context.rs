//! Evaluation Context

use ladle_units::{MeasurementSystem, Preferences};

/// Context passed to every function call.
///
/// Carries the host's display preferences so functions never read
/// settings themselves.
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    pub preferences: Preferences,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context seeded from `LADLE_MEASUREMENT_SYSTEM` / `LADLE_ABBREVIATE`
    pub fn from_env() -> Self {
        Self::new().with_preferences(Preferences::from_env())
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_system(mut self, system: MeasurementSystem) -> Self {
        self.preferences = self.preferences.with_system(system);
        self
    }

    pub fn with_abbreviate(mut self, abbreviate: bool) -> Self {
        self.preferences = self.preferences.with_abbreviate(abbreviate);
        self
    }

    pub fn system(&self) -> MeasurementSystem {
        self.preferences.system
    }

    pub fn abbreviate(&self) -> bool {
        self.preferences.abbreviate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let ctx = EvalContext::new()
            .with_system(MeasurementSystem::US)
            .with_abbreviate(false);
        assert_eq!(ctx.system(), MeasurementSystem::US);
        assert!(!ctx.abbreviate());
    }

    #[test]
    fn test_defaults() {
        let ctx = EvalContext::new();
        assert_eq!(ctx.system(), MeasurementSystem::Metric);
        assert!(ctx.abbreviate());
    }
}
