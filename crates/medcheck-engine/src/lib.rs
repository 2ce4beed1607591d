//! # medcheck-engine
//!
//! Reference interaction table, pairwise matcher and risk resolver.
//!
//! The table and the medication catalog are read from tab-delimited files
//! once at startup and are read-only afterwards, so a single instance can be
//! shared by any number of concurrent checks.
//!
//! ```ignore
//! use medcheck_engine::{discover_data_files, load_reference_table, match_pairs, resolve_result, TableConfig};
//!
//! let files = discover_data_files("data")?;
//! let table = load_reference_table(&files, TableConfig::default())?;
//! let result = resolve_result(match_pairs(&medications, &table));
//! ```

#![warn(missing_docs)]

mod catalog;
mod interaction;
mod loader;
mod matcher;
mod parser;
mod resolver;
mod store;
mod types;

pub use catalog::{MedicationCatalog, DEFAULT_SUGGESTION_LIMIT};
pub use loader::{discover_data_files, file_names, load_catalog, load_reference_table};
pub use matcher::{match_pair, match_pairs};
pub use parser::{parse, TableParser, TableRecord};
pub use resolver::{resolve, resolve_result, Resolution};
pub use store::ReferenceTable;
pub use types::{DataFiles, TableConfig, TableError, TableResult};

// Re-export medcheck-types for convenience
pub use medcheck_types;
