//! Enumerations for medication kinds and interaction risk levels.
//!
//! Both enums round-trip through the lowercase names used by the client JSON
//! and the tab-delimited data files.

use std::fmt;
use std::str::FromStr;

/// Error returned when a coded value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeParseError {
    /// Unknown risk level name.
    RiskLevel(String),
    /// Unknown medication kind name.
    MedicationKind(String),
}

impl fmt::Display for CodeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RiskLevel(s) => write!(
                f,
                "invalid risk level: '{}' (expected severe, moderate, mild or none)",
                s
            ),
            Self::MedicationKind(s) => write!(
                f,
                "invalid medication type: '{}' (expected prescription, otc or supplement)",
                s
            ),
        }
    }
}

impl std::error::Error for CodeParseError {}

/// Severity of a known interaction.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Severe > Moderate > Mild > None`.
///
/// # Examples
///
/// ```
/// use medcheck_types::RiskLevel;
///
/// assert!(RiskLevel::Severe > RiskLevel::Moderate);
/// assert_eq!(RiskLevel::Mild.priority(), 1);
/// assert_eq!("moderate".parse::<RiskLevel>(), Ok(RiskLevel::Moderate));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskLevel {
    /// Nothing known in the current data.
    #[default]
    None,
    /// Minor reported concern.
    Mild,
    /// Caution advised.
    Moderate,
    /// Combination should be avoided.
    Severe,
}

impl RiskLevel {
    /// All levels, lowest first.
    pub const ALL: [RiskLevel; 4] = [Self::None, Self::Mild, Self::Moderate, Self::Severe];

    /// Numeric priority: severe=3, moderate=2, mild=1, none=0.
    pub fn priority(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
        }
    }

    /// Returns the lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "mild" => Ok(Self::Mild),
            "moderate" => Ok(Self::Moderate),
            "severe" => Ok(Self::Severe),
            _ => Err(CodeParseError::RiskLevel(s.to_string())),
        }
    }
}

/// What sort of product a medication entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MedicationKind {
    /// Prescribed medicine.
    #[cfg_attr(feature = "serde", serde(rename = "prescription"))]
    Prescription,
    /// Over-the-counter medicine.
    #[cfg_attr(feature = "serde", serde(rename = "otc"))]
    OverTheCounter,
    /// Dietary supplement, herbal product or food.
    #[cfg_attr(feature = "serde", serde(rename = "supplement"))]
    Supplement,
}

impl MedicationKind {
    /// Returns the short name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prescription => "prescription",
            Self::OverTheCounter => "otc",
            Self::Supplement => "supplement",
        }
    }
}

impl fmt::Display for MedicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MedicationKind {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prescription" => Ok(Self::Prescription),
            "otc" => Ok(Self::OverTheCounter),
            "supplement" => Ok(Self::Supplement),
            _ => Err(CodeParseError::MedicationKind(s.to_string())),
        }
    }
}
