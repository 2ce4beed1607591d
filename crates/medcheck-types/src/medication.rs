//! Medication entry submitted by the client.

use crate::MedicationKind;

/// One medication, OTC product or supplement a person is taking.
///
/// # Examples
///
/// ```
/// use medcheck_types::{Medication, MedicationKind};
///
/// let med = Medication::new("1", "BrandX Memory Formula", MedicationKind::Supplement)
///     .with_ingredient("ginkgo");
///
/// assert_eq!(med.lookup_key(), "ginkgo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Medication {
    /// Caller-assigned identifier. Not checked for uniqueness.
    pub id: String,
    /// Display and lookup name.
    pub name: String,
    /// Free-text strength or frequency.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub dosage: Option<String>,
    /// Product kind.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: MedicationKind,
    /// Informational only; does not affect matching.
    pub currently_taking: bool,
    /// Active ingredient, when it differs from the marketed name.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ingredient: Option<String>,
}

impl Medication {
    /// Creates a medication that is currently being taken, with no dosage or ingredient.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: MedicationKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dosage: None,
            kind,
            currently_taking: true,
            ingredient: None,
        }
    }

    /// Sets the active ingredient.
    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredient = Some(ingredient.into());
        self
    }

    /// Sets the dosage text.
    pub fn with_dosage(mut self, dosage: impl Into<String>) -> Self {
        self.dosage = Some(dosage.into());
        self
    }

    /// Returns the ingredient if present and non-empty.
    pub fn ingredient(&self) -> Option<&str> {
        self.ingredient.as_deref().filter(|i| !i.is_empty())
    }

    /// Returns the name used for table matching: the ingredient when set, else the name.
    pub fn lookup_key(&self) -> &str {
        self.ingredient().unwrap_or(&self.name)
    }

    /// Returns true for supplements.
    pub fn is_supplement(&self) -> bool {
        self.kind == MedicationKind::Supplement
    }
}
