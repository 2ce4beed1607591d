//! In-memory reference interaction table.
//!
//! Records are kept in load order. An index from each unordered substance
//! pair to the position of its first record gives O(1) "first match in table
//! order" lookups for the matcher.
//!
//! ```ignore
//! let mut table = ReferenceTable::new();
//! table.load_interactions("data/interactions.tsv", TableConfig::default())?;
//!
//! if let Some(record) = table.first_match("warfarin", "ginkgo") {
//!     println!("{} x {}: {}", record.drug1, record.drug2, record.risk_level);
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use medcheck_types::InteractionRecord;

use crate::parser::TableParser;
use crate::types::{TableConfig, TableResult};

/// Read-only table of known interactions.
///
/// Build it once at startup and share it (e.g. behind an `Arc`); lookups
/// take `&self` and need no locking.
#[derive(Default)]
pub struct ReferenceTable {
    /// Records in table order.
    records: Vec<InteractionRecord>,
    /// substance -> other substance -> position of the first record for the pair.
    first_by_pair: HashMap<String, HashMap<String, usize>>,
}

impl std::fmt::Debug for ReferenceTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceTable")
            .field("records", &self.records.len())
            .field("substances", &self.first_by_pair.len())
            .finish()
    }
}

impl ReferenceTable {
    /// Creates a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from records, keeping their order.
    pub fn from_records(records: impl IntoIterator<Item = InteractionRecord>) -> Self {
        let mut table = Self::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    /// Appends a record. Later duplicates of a pair never shadow the first.
    pub fn insert(&mut self, record: InteractionRecord) {
        let position = self.records.len();

        self.first_by_pair
            .entry(record.drug1.clone())
            .or_default()
            .entry(record.drug2.clone())
            .or_insert(position);
        self.first_by_pair
            .entry(record.drug2.clone())
            .or_default()
            .entry(record.drug1.clone())
            .or_insert(position);

        self.records.push(record);
    }

    /// Appends all records from an interaction table file.
    ///
    /// Returns the number of records added.
    pub fn load_interactions<P: AsRef<Path>>(
        &mut self,
        path: P,
        config: TableConfig,
    ) -> TableResult<usize> {
        let parser: TableParser<_, InteractionRecord> = TableParser::from_path(path, config)?;
        let records = parser.parse_all()?;
        let count = records.len();
        for record in records {
            self.insert(record);
        }
        Ok(count)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `position`.
    pub fn get(&self, position: usize) -> Option<&InteractionRecord> {
        self.records.get(position)
    }

    /// Returns the position of the first record about `a` and `b`, in either order.
    pub fn first_position(&self, a: &str, b: &str) -> Option<usize> {
        self.first_by_pair.get(a)?.get(b).copied()
    }

    /// Returns the first record about `a` and `b`, in either order.
    pub fn first_match(&self, a: &str, b: &str) -> Option<&InteractionRecord> {
        self.first_position(a, b).and_then(|p| self.get(p))
    }

    /// Returns the number of distinct substances named in the table.
    pub fn substance_count(&self) -> usize {
        self.first_by_pair.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcheck_types::RiskLevel;

    fn record(a: &str, b: &str, level: RiskLevel, concerns: &str) -> InteractionRecord {
        InteractionRecord {
            drug1: a.to_string(),
            drug2: b.to_string(),
            risk_level: level,
            mechanism: String::new(),
            concerns: concerns.to_string(),
            source: "test".to_string(),
        }
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let table = ReferenceTable::from_records(vec![record(
            "warfarin",
            "ginkgo",
            RiskLevel::Moderate,
            "bleeding",
        )]);

        assert_eq!(table.first_position("warfarin", "ginkgo"), Some(0));
        assert_eq!(table.first_position("ginkgo", "warfarin"), Some(0));
        assert_eq!(table.first_position("ginkgo", "aspirin"), None);
        assert_eq!(table.substance_count(), 2);
    }

    #[test]
    fn test_first_record_wins_for_duplicate_pairs() {
        let table = ReferenceTable::from_records(vec![
            record("warfarin", "ginkgo", RiskLevel::Moderate, "first"),
            record("ginkgo", "warfarin", RiskLevel::Severe, "second"),
        ]);

        assert_eq!(table.len(), 2);
        let found = table.first_match("ginkgo", "warfarin").unwrap();
        assert_eq!(found.concerns, "first");
    }

    #[test]
    fn test_self_pair() {
        let table = ReferenceTable::from_records(vec![record(
            "iron",
            "iron",
            RiskLevel::Mild,
            "overdose",
        )]);

        assert_eq!(table.first_position("iron", "iron"), Some(0));
    }

    #[test]
    fn test_empty_table() {
        let table = ReferenceTable::new();
        assert!(table.is_empty());
        assert!(table.first_match("a", "b").is_none());
    }
}
