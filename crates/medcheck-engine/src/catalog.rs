//! Medication catalog: product suggestions and supplement ingredients.
//!
//! Parses `medications*.tsv` files with columns `name`, `type`, `ingredient`.

use std::path::Path;

use csv::StringRecord;
use medcheck_types::{CatalogEntry, Medication, MedicationKind};

use crate::parser::{parse, TableParser, TableRecord};
use crate::types::{TableConfig, TableResult};

/// Number of suggestions returned when the caller does not ask for a limit.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Expected columns in a catalog file.
const CATALOG_COLUMNS: &[&str] = &["name", "type", "ingredient"];

impl TableRecord for CatalogEntry {
    const EXPECTED_COLUMNS: &'static [&'static str] = CATALOG_COLUMNS;

    fn from_record(record: &StringRecord) -> TableResult<Self> {
        Ok(CatalogEntry {
            name: parse::required(record, 0, "name")?.to_string(),
            kind: parse::medication_kind(parse::required(record, 1, "type")?)?,
            ingredient: parse::optional(record, 2),
        })
    }

    fn passes_filter(&self, _config: &TableConfig) -> bool {
        true
    }
}

/// In-memory list of known products, in file order.
#[derive(Debug, Clone, Default)]
pub struct MedicationCatalog {
    entries: Vec<CatalogEntry>,
}

impl MedicationCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from entries.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Appends entries from a catalog file. Returns the number of entries added.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> TableResult<usize> {
        let parser: TableParser<_, CatalogEntry> =
            TableParser::from_path(path, TableConfig::default())?;
        let entries = parser.parse_all()?;
        let count = entries.len();
        self.entries.extend(entries);
        Ok(count)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Suggests entries whose name or ingredient contains `query`.
    ///
    /// The query is trimmed and compared case-insensitively. A blank query
    /// suggests nothing. `limit == 0` means [`DEFAULT_SUGGESTION_LIMIT`].
    pub fn suggest(
        &self,
        query: &str,
        kind: Option<MedicationKind>,
        limit: usize,
    ) -> Vec<&CatalogEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let limit = if limit > 0 { limit } else { DEFAULT_SUGGESTION_LIMIT };

        self.entries
            .iter()
            .filter(|e| kind.map_or(true, |k| e.kind == k))
            .filter(|e| e.matches_lowercase(&needle))
            .take(limit)
            .collect()
    }

    /// Returns the ingredient of the supplement named exactly `name`.
    pub fn supplement_ingredient(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.kind == MedicationKind::Supplement && e.name == name)
            .and_then(|e| e.ingredient.as_deref())
    }

    /// Fills in a missing ingredient for a supplement listed in the catalog.
    ///
    /// Returns true if the medication was changed.
    pub fn complete_ingredient(&self, medication: &mut Medication) -> bool {
        if !medication.is_supplement() || medication.ingredient().is_some() {
            return false;
        }

        match self.supplement_ingredient(&medication.name) {
            Some(ingredient) => {
                medication.ingredient = Some(ingredient.to_string());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kind: MedicationKind, ingredient: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            kind,
            ingredient: ingredient.map(str::to_string),
        }
    }

    fn sample_catalog() -> MedicationCatalog {
        MedicationCatalog::from_entries(vec![
            entry("ワーファリン", MedicationKind::Prescription, None),
            entry("バイアスピリン", MedicationKind::Prescription, None),
            entry("アスピリン", MedicationKind::Prescription, None),
            entry("バファリンA", MedicationKind::OverTheCounter, None),
            entry("イチョウ葉エキス", MedicationKind::Supplement, Some("イチョウ葉")),
            entry("オメガ3", MedicationKind::Supplement, Some("オメガ3脂肪酸")),
        ])
    }

    #[test]
    fn test_parse_catalog_record() {
        let mut record = StringRecord::new();
        record.push_field("オメガ3");
        record.push_field("supplement");
        record.push_field("オメガ3脂肪酸");

        let parsed = CatalogEntry::from_record(&record).unwrap();
        assert_eq!(parsed.kind, MedicationKind::Supplement);
        assert_eq!(parsed.ingredient.as_deref(), Some("オメガ3脂肪酸"));
    }

    #[test]
    fn test_suggest_by_substring_in_catalog_order() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog
            .suggest("アスピリン", None, 0)
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["バイアスピリン", "アスピリン"]);
    }

    #[test]
    fn test_suggest_filters_by_kind_and_ingredient() {
        let catalog = sample_catalog();
        let hits = catalog.suggest("脂肪酸", Some(MedicationKind::Supplement), 0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "オメガ3");

        assert!(catalog
            .suggest("脂肪酸", Some(MedicationKind::Prescription), 0)
            .is_empty());
    }

    #[test]
    fn test_suggest_blank_query_and_limit() {
        let catalog = sample_catalog();
        assert!(catalog.suggest("   ", None, 0).is_empty());
        assert_eq!(catalog.suggest("リン", None, 1).len(), 1);
    }

    #[test]
    fn test_complete_ingredient_only_for_supplements() {
        let catalog = sample_catalog();

        let mut ginkgo = Medication::new("1", "イチョウ葉エキス", MedicationKind::Supplement);
        assert!(catalog.complete_ingredient(&mut ginkgo));
        assert_eq!(ginkgo.lookup_key(), "イチョウ葉");

        let mut explicit = Medication::new("2", "イチョウ葉エキス", MedicationKind::Supplement)
            .with_ingredient("ginkgo");
        assert!(!catalog.complete_ingredient(&mut explicit));
        assert_eq!(explicit.lookup_key(), "ginkgo");

        let mut warfarin = Medication::new("3", "ワーファリン", MedicationKind::Prescription);
        assert!(!catalog.complete_ingredient(&mut warfarin));
        assert_eq!(warfarin.ingredient, None);
    }
}
