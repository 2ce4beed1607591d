//! Known interaction between two substances.

use crate::RiskLevel;

/// One known interaction between two substances.
///
/// `drug1` and `drug2` are unordered: [`InteractionRecord::involves`] treats
/// the pair symmetrically.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InteractionRecord {
    /// First substance name.
    pub drug1: String,
    /// Second substance name.
    pub drug2: String,
    /// Severity of the interaction.
    pub risk_level: RiskLevel,
    /// Pharmacological explanation.
    pub mechanism: String,
    /// Clinical consequence.
    pub concerns: String,
    /// Provenance label.
    pub source: String,
}

impl InteractionRecord {
    /// Returns true if this record is about the substances `a` and `b`, in either order.
    ///
    /// # Examples
    ///
    /// ```
    /// use medcheck_types::{InteractionRecord, RiskLevel};
    ///
    /// let record = InteractionRecord {
    ///     drug1: "warfarin".into(),
    ///     drug2: "ginkgo".into(),
    ///     risk_level: RiskLevel::Moderate,
    ///     mechanism: String::new(),
    ///     concerns: String::new(),
    ///     source: "table".into(),
    /// };
    ///
    /// assert!(record.involves("ginkgo", "warfarin"));
    /// assert!(!record.involves("ginkgo", "aspirin"));
    /// ```
    pub fn involves(&self, a: &str, b: &str) -> bool {
        (self.drug1 == a && self.drug2 == b) || (self.drug1 == b && self.drug2 == a)
    }
}
