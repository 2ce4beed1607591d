//! Generic tab-delimited data file parser.
//!
//! Provides a streaming parser for the interaction table and medication
//! catalog files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{TableConfig, TableError, TableResult};

/// Trait for types that can be parsed from data file rows.
pub trait TableRecord: Sized {
    /// Expected column names for this record type.
    const EXPECTED_COLUMNS: &'static [&'static str];

    /// Parse a record from a CSV StringRecord.
    fn from_record(record: &StringRecord) -> TableResult<Self>;

    /// Returns true if this record passes the given filter config.
    fn passes_filter(&self, config: &TableConfig) -> bool;
}

/// A streaming parser for tab-delimited data files.
///
/// Lines starting with `#` are comments. Quote characters carry no meaning,
/// so free-text columns may contain them.
pub struct TableParser<R: Read, T: TableRecord> {
    reader: Reader<R>,
    config: TableConfig,
    _marker: PhantomData<T>,
}

impl<T: TableRecord> TableParser<BufReader<File>, T> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or has invalid headers.
    pub fn from_path<P: AsRef<Path>>(path: P, config: TableConfig) -> TableResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TableError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }
}

impl<R: Read, T: TableRecord> TableParser<R, T> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R, config: TableConfig) -> TableResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(false)
            .quoting(false)
            .comment(Some(b'#'))
            .trim(csv::Trim::None)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            config,
            _marker: PhantomData,
        })
    }

    /// Validates that the file has the expected column headers.
    fn validate_headers(reader: &mut Reader<R>) -> TableResult<()> {
        let headers = reader.headers()?;
        let expected = T::EXPECTED_COLUMNS;

        if headers.len() < expected.len() {
            return Err(TableError::InvalidHeader {
                expected: expected.len(),
                found: headers.len(),
            });
        }

        for (i, expected_col) in expected.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Handle UTF-8 BOM at start of file
            let found = found.trim_start_matches('\u{feff}');
            if found != *expected_col {
                return Err(TableError::UnexpectedColumn {
                    position: i,
                    expected: expected_col.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Parses all records into a Vec, applying filters.
    ///
    /// Stops at the first malformed row.
    pub fn parse_all(self) -> TableResult<Vec<T>> {
        self.collect()
    }
}

impl<R: Read, T: TableRecord> Iterator for TableParser<R, T> {
    type Item = TableResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    // Skip empty records
                    if record.is_empty() || record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }

                    match T::from_record(&record) {
                        Ok(parsed) => {
                            if parsed.passes_filter(&self.config) {
                                return Some(Ok(parsed));
                            }
                            continue;
                        }
                        Err(e) => return Some(Err(e)),
                    }
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Helper functions for parsing field values.
pub mod parse {
    use csv::StringRecord;
    use medcheck_types::{MedicationKind, RiskLevel};

    use super::{TableError, TableResult};

    /// Returns the trimmed value of a required column.
    pub fn required<'r>(record: &'r StringRecord, index: usize, column: &str) -> TableResult<&'r str> {
        let value = record.get(index).unwrap_or("").trim();
        if value.is_empty() {
            return Err(TableError::MissingField {
                column: column.to_string(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
            });
        }
        Ok(value)
    }

    /// Returns the trimmed value of a free-text column (may be empty).
    pub fn text(record: &StringRecord, index: usize) -> String {
        record.get(index).unwrap_or("").trim().to_string()
    }

    /// Returns the trimmed value of an optional column, `None` when blank.
    pub fn optional(record: &StringRecord, index: usize) -> Option<String> {
        let value = record.get(index).unwrap_or("").trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Parses a risk level name.
    pub fn risk_level(value: &str) -> TableResult<RiskLevel> {
        value.parse().map_err(|_| TableError::InvalidRiskLevel {
            value: value.to_string(),
        })
    }

    /// Parses a medication type name.
    pub fn medication_kind(value: &str) -> TableResult<MedicationKind> {
        value.parse().map_err(|_| TableError::InvalidMedicationKind {
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcheck_types::{MedicationKind, RiskLevel};

    fn make_record(fields: &[&str]) -> StringRecord {
        let mut record = StringRecord::new();
        for field in fields {
            record.push_field(field);
        }
        record
    }

    #[test]
    fn test_parse_risk_level() {
        assert_eq!(parse::risk_level("severe").unwrap(), RiskLevel::Severe);
        assert_eq!(parse::risk_level("none").unwrap(), RiskLevel::None);
        assert!(matches!(
            parse::risk_level("high"),
            Err(TableError::InvalidRiskLevel { .. })
        ));
    }

    #[test]
    fn test_parse_medication_kind() {
        assert_eq!(
            parse::medication_kind("otc").unwrap(),
            MedicationKind::OverTheCounter
        );
        assert!(matches!(
            parse::medication_kind("vitamin"),
            Err(TableError::InvalidMedicationKind { .. })
        ));
    }

    #[test]
    fn test_parse_required_and_optional() {
        let record = make_record(&[" ginkgo ", "", "  "]);
        assert_eq!(parse::required(&record, 0, "drug1").unwrap(), "ginkgo");
        assert!(matches!(
            parse::required(&record, 1, "drug2"),
            Err(TableError::MissingField { .. })
        ));
        assert_eq!(parse::optional(&record, 2), None);
        assert_eq!(parse::optional(&record, 0), Some("ginkgo".to_string()));
        assert_eq!(parse::text(&record, 5), "");
    }
}
