//! Response payload of an interaction check.

use crate::{InteractionRecord, RiskLevel};

/// Outcome of checking a medication list.
///
/// The display fields are always derived from `risk_level`; there is no way to
/// set them independently.
///
/// # Examples
///
/// ```
/// use medcheck_types::{CheckResult, RiskLevel};
///
/// let result = CheckResult::none();
/// assert_eq!(result.risk_level(), RiskLevel::None);
/// assert_eq!(result.color(), "green");
/// assert!(result.interactions().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CheckResult {
    risk_level: RiskLevel,
    display_text: &'static str,
    color: &'static str,
    icon: &'static str,
    interactions: Vec<InteractionRecord>,
}

impl CheckResult {
    /// Creates a result for `risk_level` carrying `interactions` in discovery order.
    pub fn new(risk_level: RiskLevel, interactions: Vec<InteractionRecord>) -> Self {
        let display = risk_level.display();
        Self {
            risk_level,
            display_text: display.text,
            color: display.color,
            icon: display.icon,
            interactions,
        }
    }

    /// The result for an empty medication list or no findings.
    pub fn none() -> Self {
        Self::new(RiskLevel::None, Vec::new())
    }

    /// Overall risk level.
    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    /// Message for the overall risk level.
    pub fn display_text(&self) -> &'static str {
        self.display_text
    }

    /// Colour for the overall risk level.
    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Icon for the overall risk level.
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    /// All interactions found.
    pub fn interactions(&self) -> &[InteractionRecord] {
        &self.interactions
    }

    /// Consumes the result, returning the interactions.
    pub fn into_interactions(self) -> Vec<InteractionRecord> {
        self.interactions
    }
}
