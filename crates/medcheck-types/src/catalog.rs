//! Entries of the medication suggestion catalog.

use crate::MedicationKind;

/// A known product offered as a suggestion while the user types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    /// Product name.
    pub name: String,
    /// Product kind.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: MedicationKind,
    /// Active ingredient, mostly given for supplements.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ingredient: Option<String>,
}

impl CatalogEntry {
    /// Returns true if `needle` (already lowercased) occurs in the name or ingredient.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .ingredient
                .as_deref()
                .is_some_and(|i| i.to_lowercase().contains(needle))
    }
}
