//! Fixed user-facing presentation for each risk level.

use crate::RiskLevel;

/// Text, colour and icon shown for a risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RiskDisplay {
    /// Message shown to the user.
    pub text: &'static str,
    /// Colour name used by the client.
    pub color: &'static str,
    /// Emoji badge.
    pub icon: &'static str,
}

const SEVERE: RiskDisplay = RiskDisplay {
    text: "【最重要】深刻な相互作用の可能性があります。専門家への相談を強く推奨します。",
    color: "red",
    icon: "🔴",
};

const MODERATE: RiskDisplay = RiskDisplay {
    text: "【要注意】中程度の相互作用の懸念があります。専門家にご相談ください。",
    color: "yellow",
    icon: "🟡",
};

const MILD: RiskDisplay = RiskDisplay {
    text: "【軽度懸念】相互作用の報告があります。",
    color: "blue",
    icon: "🔵",
};

const NONE: RiskDisplay = RiskDisplay {
    text: "【現状データでは】特段の記載はありません。",
    color: "green",
    icon: "🟢",
};

impl RiskLevel {
    /// Returns the display triple for this level.
    ///
    /// # Examples
    ///
    /// ```
    /// use medcheck_types::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::Severe.display().color, "red");
    /// assert_eq!(RiskLevel::None.display().icon, "🟢");
    /// ```
    pub fn display(self) -> RiskDisplay {
        match self {
            Self::Severe => SEVERE,
            Self::Moderate => MODERATE,
            Self::Mild => MILD,
            Self::None => NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_colors() {
        assert_eq!(RiskLevel::Severe.display().color, "red");
        assert_eq!(RiskLevel::Moderate.display().color, "yellow");
        assert_eq!(RiskLevel::Mild.display().color, "blue");
        assert_eq!(RiskLevel::None.display().color, "green");
    }

    #[test]
    fn test_display_is_distinct_per_level() {
        for (i, a) in RiskLevel::ALL.iter().enumerate() {
            for b in &RiskLevel::ALL[i + 1..] {
                assert_ne!(a.display(), b.display());
            }
        }
    }
}
