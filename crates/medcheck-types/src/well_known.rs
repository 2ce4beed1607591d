//! Well-known provenance labels for interaction records.
//!
//! # Examples
//!
//! ```
//! use medcheck_types::well_known;
//!
//! assert_eq!(well_known::ORCA_SOURCE, "ORCA (Japan Medical Association)");
//! ```

/// Source label for findings returned by the ORCA clinical database.
pub const ORCA_SOURCE: &str = "ORCA (Japan Medical Association)";

/// Default source label for curated table rows that leave the column blank.
pub const CURATED_TABLE_SOURCE: &str = "curated interaction table";
