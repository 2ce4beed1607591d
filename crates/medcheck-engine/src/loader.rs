//! Data directory discovery and loading utilities.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::MedicationCatalog;
use crate::store::ReferenceTable;
use crate::types::{DataFiles, TableConfig, TableError, TableResult};

const INTERACTION_PREFIX: &str = "interactions";
const CATALOG_PREFIX: &str = "medications";
const DATA_EXTENSION: &str = ".tsv";

/// Discovers data files in a data directory.
///
/// Interaction tables are `interactions*.tsv`, catalogs `medications*.tsv`.
/// Files of each kind are returned in file name order, which is also the
/// order their rows are loaded in.
pub fn discover_data_files<P: AsRef<Path>>(path: P) -> TableResult<DataFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(TableError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut files = DataFiles::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let filename = entry.file_name();
        let filename_str = filename.to_string_lossy();

        if !filename_str.ends_with(DATA_EXTENSION) {
            continue;
        }

        if filename_str.starts_with(INTERACTION_PREFIX) {
            files.interaction_files.push(entry.path());
        } else if filename_str.starts_with(CATALOG_PREFIX) {
            files.catalog_files.push(entry.path());
        }
    }

    files.interaction_files.sort();
    files.catalog_files.sort();

    if !files.has_required_files() {
        return Err(TableError::RequiredFileMissing {
            file_type: files.missing_files().join(", "),
            directory: path.display().to_string(),
        });
    }

    Ok(files)
}

/// Loads every discovered interaction table into one [`ReferenceTable`].
pub fn load_reference_table(files: &DataFiles, config: TableConfig) -> TableResult<ReferenceTable> {
    let mut table = ReferenceTable::new();
    for path in &files.interaction_files {
        table.load_interactions(path, config.clone())?;
    }
    Ok(table)
}

/// Loads every discovered catalog file into one [`MedicationCatalog`].
pub fn load_catalog(files: &DataFiles) -> TableResult<MedicationCatalog> {
    let mut catalog = MedicationCatalog::new();
    for path in &files.catalog_files {
        catalog.load(path)?;
    }
    Ok(catalog)
}

/// Returns the file names of `paths`, for logging.
pub fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect()
}
