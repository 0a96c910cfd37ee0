//! Quantity type - an optional amount with an associated unit
//!
//! Normalization picks the most legible unit of a family for an amount:
//! the smallest converted amount that still reads as at least one unit
//! ("1.2 l" rather than "1200 ml").

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::{ConversionError, DisplayedSystem, MeasurementSystem, PhysicalKind, Preferences, Unit};

/// A measured amount. An absent amount means "no quantity given", as in
/// "a pinch of salt".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    #[serde(default)]
    pub amount: Option<f64>,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(amount: f64, unit: Unit) -> Self {
        Quantity { amount: Some(amount), unit }
    }

    /// A quantity without an amount
    pub fn unmeasured(unit: Unit) -> Self {
        Quantity { amount: None, unit }
    }

    pub fn from_parts(amount: Option<f64>, unit: Unit) -> Self {
        Quantity { amount, unit }
    }

    pub fn kind(&self) -> PhysicalKind {
        self.unit.kind()
    }

    pub fn is_measured(&self) -> bool {
        self.amount.is_some()
    }

    /// Check if two quantities can be converted into each other
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Convert to another unit of the same kind
    pub fn convert_to(&self, target: Unit) -> Result<Quantity, ConversionError> {
        let amount = self.unit.convert(self.amount, target)?;
        Ok(Quantity::from_parts(amount, target))
    }

    /// Amount in the canonical base unit (ml, g), absent when unmeasured
    fn to_base(&self) -> Option<f64> {
        self.unit.convert(self.amount, self.unit.canonical_base()).ok().flatten()
    }

    /// Amount in the canonical base unit, 0 when unmeasured.
    ///
    /// Comparable across systems for quantities of the same kind.
    pub fn base_amount(&self) -> f64 {
        self.unit
            .convert(Some(self.amount.unwrap_or(0.0)), self.unit.canonical_base())
            .ok()
            .flatten()
            .unwrap_or(0.0)
    }

    /// Multiply the amount, keeping the unit; unmeasured stays unmeasured
    pub fn scaled(&self, factor: f64) -> Quantity {
        Quantity::from_parts(self.amount.map(|a| a * factor), self.unit)
    }

    /// Re-express this quantity in the most legible unit of `system`.
    ///
    /// The amount is first multiplied by `scale`. Candidates are the
    /// family members of the unit in `system`; the smallest converted amount
    /// that is at least 1 wins. When nothing reaches 1 the largest converted
    /// amount is returned. An unmeasured quantity counts as zero.
    pub fn normalized(&self, system: MeasurementSystem, scale: f64) -> Quantity {
        if self.amount.is_none() {
            tracing::debug!(unit = self.unit.id(), "unmeasured quantity normalized as zero");
        }
        let amount = self.amount_or_zero();

        let base = self.unit.canonical_base();
        let base_amount = match self.unit.convert(Some(scale * amount), base) {
            Ok(Some(a)) => a,
            Ok(None) | Err(_) => {
                tracing::debug!(unit = self.unit.id(), "no canonical base amount, keeping quantity");
                return *self;
            }
        };

        let mut candidates: Vec<Quantity> = self
            .unit
            .family_members(system, true)
            .into_iter()
            .filter_map(|member| {
                base.convert(Some(base_amount), member)
                    .ok()
                    .flatten()
                    .map(|a| Quantity::new(a, member))
            })
            .collect();

        candidates.sort_by(|a, b| a.amount_or_zero().total_cmp(&b.amount_or_zero()));

        if let Some(best) = candidates.iter().find(|q| q.amount_or_zero() >= 1.0) {
            return *best;
        }

        match candidates.last() {
            Some(largest) => {
                tracing::debug!(
                    unit = largest.unit.id(),
                    amount = largest.amount_or_zero(),
                    "no candidate reaches one unit, using largest amount"
                );
                *largest
            }
            None => *self,
        }
    }

    /// Normalize into the collaborator's preferred system
    pub fn normalized_with(&self, preferences: &Preferences) -> Quantity {
        self.normalized(preferences.system, 1.0)
    }

    /// Quantity as shown for a display choice: normalized into a system, or
    /// scaled in its own unit for [`DisplayedSystem::Original`]
    pub fn for_display(&self, displayed: DisplayedSystem, scale: f64) -> Quantity {
        match displayed.system() {
            Some(system) => self.normalized(system, scale),
            None => self.scaled(scale),
        }
    }

    /// This quantity expressed in every other family member of `system`,
    /// smallest unit first
    pub fn alternatives(&self, system: MeasurementSystem, scale: f64) -> Vec<Quantity> {
        let scaled = self.scaled(scale);
        self.unit
            .family_members(system, false)
            .into_iter()
            .filter_map(|member| scaled.convert_to(member).ok())
            .collect()
    }

    /// Add two quantities of the same kind.
    ///
    /// Both sides are summed in their canonical base unit and the result is
    /// normalized into `system`. If one side cannot be expressed in its base
    /// unit (it is unmeasured) the other side is returned unchanged and the
    /// first contributes nothing. Quantities of different kinds are an
    /// [`ConversionError::IncompatibleKind`] error.
    pub fn add(&self, other: &Quantity, system: MeasurementSystem) -> Result<Quantity, ConversionError> {
        let Some(lhs) = self.to_base() else {
            tracing::debug!(unit = self.unit.id(), "left operand unmeasured, returning right operand");
            return Ok(*other);
        };
        let Some(rhs) = other.to_base() else {
            tracing::debug!(unit = other.unit.id(), "right operand unmeasured, returning left operand");
            return Ok(*self);
        };

        if !self.is_compatible(other) {
            return Err(ConversionError::IncompatibleKind {
                from: other.unit,
                to: self.unit,
                from_kind: other.kind(),
                to_kind: self.kind(),
            });
        }

        Ok(Quantity::new(lhs + rhs, self.unit.canonical_base()).normalized(system, 1.0))
    }

    /// Label with formatted amount, e.g. "1.25 dl" or "pinch" when unmeasured
    pub fn describe(&self, abbreviated: bool) -> String {
        let label = self.unit.describe(abbreviated);
        match self.amount {
            Some(amount) => format!("{} {}", format_amount(amount), label),
            None => label.to_string(),
        }
    }

    fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

/// Add two optional quantities; a missing side yields the other side
/// without any arithmetic.
pub fn combine(
    lhs: Option<&Quantity>,
    rhs: Option<&Quantity>,
    system: MeasurementSystem,
) -> Result<Option<Quantity>, ConversionError> {
    match (lhs, rhs) {
        (Some(l), Some(r)) => l.add(r, system).map(Some),
        (Some(q), None) | (None, Some(q)) => Ok(Some(*q)),
        (None, None) => Ok(None),
    }
}

/// Scale factor for cooking `portions` of a recipe written for
/// `recipe_portions`
pub fn portion_scale(portions: f64, recipe_portions: f64) -> f64 {
    if recipe_portions == 0.0 {
        return 1.0;
    }
    portions / recipe_portions
}

/// Format an amount with at most two fraction digits and no trailing zeros
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.2}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe(true))
    }
}
