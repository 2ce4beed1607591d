//! Reduces found interactions to one overall risk level and its display.

use medcheck_types::{CheckResult, InteractionRecord, RiskDisplay, RiskLevel};

/// Overall risk of a set of interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Highest severity present, `None` for no interactions.
    pub level: RiskLevel,
    /// Fixed display for `level`.
    pub display: RiskDisplay,
}

impl Resolution {
    /// Builds the response payload for `interactions`, which must be the
    /// slice this resolution was computed from.
    pub fn into_result(self, interactions: Vec<InteractionRecord>) -> CheckResult {
        CheckResult::new(self.level, interactions)
    }
}

/// Returns the highest severity among `interactions` with its display.
///
/// # Examples
///
/// ```
/// use medcheck_engine::resolve;
/// use medcheck_types::RiskLevel;
///
/// let resolution = resolve(&[]);
/// assert_eq!(resolution.level, RiskLevel::None);
/// assert_eq!(resolution.display.color, "green");
/// ```
pub fn resolve(interactions: &[InteractionRecord]) -> Resolution {
    let level = interactions
        .iter()
        .map(|i| i.risk_level)
        .max()
        .unwrap_or(RiskLevel::None);

    Resolution {
        level,
        display: level.display(),
    }
}

/// Resolves `interactions` and wraps them into a [`CheckResult`].
pub fn resolve_result(interactions: Vec<InteractionRecord>) -> CheckResult {
    resolve(&interactions).into_result(interactions)
}
