//! Interaction check orchestration.
//!
//! One check consults the local reference table and the external authority
//! concurrently, concatenates their findings (table first) and resolves the
//! overall risk level.

use std::sync::Arc;

use medcheck_engine::{match_pairs, resolve_result, MedicationCatalog, ReferenceTable};
use medcheck_types::{CheckResult, InteractionRecord, Medication};
use thiserror::Error;

use crate::authority::AuthorityClient;

/// Errors that abort a check.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The table matching task panicked or was cancelled.
    #[error("Interaction matching task failed: {0}")]
    Internal(#[from] tokio::task::JoinError),
}

/// Runs interaction checks against the configured sources.
#[derive(Default)]
pub struct InteractionChecker {
    table: Option<Arc<ReferenceTable>>,
    authority: Option<AuthorityClient>,
    catalog: Option<Arc<MedicationCatalog>>,
}

impl InteractionChecker {
    /// Creates a checker with no sources; every check reports no interactions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consults `table` on every check.
    pub fn with_table(mut self, table: Arc<ReferenceTable>) -> Self {
        self.table = Some(table);
        self
    }

    /// Consults `authority` on every check.
    pub fn with_authority(mut self, authority: AuthorityClient) -> Self {
        self.authority = Some(authority);
        self
    }

    /// Fills in missing supplement ingredients from `catalog` before matching.
    pub fn with_catalog(mut self, catalog: Arc<MedicationCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Returns the reference table, if consulted.
    pub fn table(&self) -> Option<&ReferenceTable> {
        self.table.as_deref()
    }

    /// Returns the authority client, if consulted.
    pub fn authority(&self) -> Option<&AuthorityClient> {
        self.authority.as_ref()
    }

    /// Checks `medications` for interactions.
    ///
    /// A failing authority contributes nothing; the table findings are still
    /// returned.
    pub async fn check(&self, mut medications: Vec<Medication>) -> Result<CheckResult, CheckError> {
        if medications.is_empty() {
            return Ok(CheckResult::none());
        }

        if let Some(catalog) = &self.catalog {
            for medication in &mut medications {
                if catalog.complete_ingredient(medication) {
                    tracing::debug!("Completed ingredient for {}", medication.name);
                }
            }
        }

        let (local, remote) = tokio::join!(
            self.match_table(&medications),
            self.query_authority(&medications)
        );

        let mut interactions = local?;
        interactions.extend(remote);
        Ok(resolve_result(interactions))
    }

    async fn match_table(&self, medications: &[Medication]) -> Result<Vec<InteractionRecord>, CheckError> {
        let Some(table) = &self.table else {
            return Ok(Vec::new());
        };

        let table = Arc::clone(table);
        let medications = medications.to_vec();
        let found = tokio::task::spawn_blocking(move || match_pairs(&medications, &table)).await?;
        Ok(found)
    }

    async fn query_authority(&self, medications: &[Medication]) -> Vec<InteractionRecord> {
        let Some(authority) = &self.authority else {
            return Vec::new();
        };

        match authority.check(medications).await {
            Ok(found) => found,
            Err(e) => {
                tracing::error!("ORCA check failed, continuing without its findings: {}", e);
                Vec::new()
            }
        }
    }
}
