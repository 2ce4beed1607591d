//! Interaction table file parser.
//!
//! Parses `interactions*.tsv` files: one known drug pair per row.

use csv::StringRecord;
use medcheck_types::{well_known, InteractionRecord};

use crate::parser::{parse, TableRecord};
use crate::types::{TableConfig, TableResult};

/// Expected columns in an interaction table file.
const INTERACTION_COLUMNS: &[&str] = &[
    "drug1",
    "drug2",
    "riskLevel",
    "mechanism",
    "concerns",
    "source",
];

impl TableRecord for InteractionRecord {
    const EXPECTED_COLUMNS: &'static [&'static str] = INTERACTION_COLUMNS;

    fn from_record(record: &StringRecord) -> TableResult<Self> {
        let source = parse::optional(record, 5)
            .unwrap_or_else(|| well_known::CURATED_TABLE_SOURCE.to_string());

        Ok(InteractionRecord {
            drug1: parse::required(record, 0, "drug1")?.to_string(),
            drug2: parse::required(record, 1, "drug2")?.to_string(),
            risk_level: parse::risk_level(parse::required(record, 2, "riskLevel")?)?,
            mechanism: parse::text(record, 3),
            concerns: parse::text(record, 4),
            source,
        })
    }

    fn passes_filter(&self, config: &TableConfig) -> bool {
        self.risk_level >= config.min_risk_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TableParser;
    use crate::types::TableError;
    use medcheck_types::RiskLevel;
    use std::io::Cursor;

    fn make_record(fields: &[&str]) -> StringRecord {
        let mut record = StringRecord::new();
        for field in fields {
            record.push_field(field);
        }
        record
    }

    #[test]
    fn test_parse_interaction_record() {
        let record = make_record(&[
            "ワーファリン",
            "イチョウ葉",
            "moderate",
            "血小板凝集抑制作用が重なる。",
            "出血傾向が増強されるおそれがある。",
            "curated",
        ]);

        let parsed = InteractionRecord::from_record(&record).unwrap();
        assert_eq!(parsed.drug1, "ワーファリン");
        assert_eq!(parsed.drug2, "イチョウ葉");
        assert_eq!(parsed.risk_level, RiskLevel::Moderate);
        assert_eq!(parsed.source, "curated");
    }

    #[test]
    fn test_blank_source_gets_default_label() {
        let record = make_record(&["a", "b", "mild", "", "", ""]);
        let parsed = InteractionRecord::from_record(&record).unwrap();
        assert_eq!(parsed.source, well_known::CURATED_TABLE_SOURCE);
        assert!(parsed.mechanism.is_empty());
    }

    #[test]
    fn test_missing_drug_name_is_rejected() {
        let record = make_record(&["a", "", "mild", "", "", ""]);
        assert!(matches!(
            InteractionRecord::from_record(&record),
            Err(TableError::MissingField { .. })
        ));
    }

    #[test]
    fn test_filter_min_risk_level() {
        let mild = InteractionRecord::from_record(&make_record(&["a", "b", "mild", "", "", ""]))
            .unwrap();

        let listed_only =
            InteractionRecord::from_record(&make_record(&["a", "c", "none", "", "", ""]))
                .unwrap();

        assert!(mild.passes_filter(&TableConfig::default()));
        assert!(!mild.passes_filter(&TableConfig::at_least(RiskLevel::Moderate)));
        assert!(!listed_only.passes_filter(&TableConfig::default()));
        assert!(listed_only.passes_filter(&TableConfig::at_least(RiskLevel::None)));
    }

    #[test]
    fn test_parse_file_with_bom_comments_and_quotes() {
        let data = "\u{feff}drug1\tdrug2\triskLevel\tmechanism\tconcerns\tsource\n\
                    # curated sample\n\
                    warfarin\tginkgo\tmoderate\t\"antiplatelet\" effect\tbleeding\tcurated\n\
                    \n\
                    simvastatin\tgrapefruit\tmild\tCYP3A4\tmyopathy\t\n";

        let parser: TableParser<_, InteractionRecord> =
            TableParser::from_reader(Cursor::new(data), TableConfig::default()).unwrap();
        let records = parser.parse_all().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].mechanism, "\"antiplatelet\" effect");
        assert_eq!(records[1].source, well_known::CURATED_TABLE_SOURCE);
    }

    #[test]
    fn test_parse_file_rejects_wrong_header() {
        let data = "drugA\tdrugB\triskLevel\tmechanism\tconcerns\tsource\n";
        let result: TableResult<TableParser<_, InteractionRecord>> =
            TableParser::from_reader(Cursor::new(data), TableConfig::default());

        match result {
            Err(TableError::UnexpectedColumn { position, .. }) => assert_eq!(position, 0),
            other => panic!("expected UnexpectedColumn, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_parse_file_rejects_short_header() {
        let data = "drug1\tdrug2\n";
        let result: TableResult<TableParser<_, InteractionRecord>> =
            TableParser::from_reader(Cursor::new(data), TableConfig::default());

        assert!(matches!(
            result.err(),
            Some(TableError::InvalidHeader {
                expected: 6,
                found: 2
            })
        ));
    }
}
