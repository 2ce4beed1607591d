//! Medication interaction gRPC server binary.

use std::sync::Arc;

use medcheck_engine::{
    discover_data_files, file_names, load_catalog, load_reference_table, MedicationCatalog,
    ReferenceTable, TableConfig,
};
use medcheck_service::proto::interaction_service_server::InteractionServiceServer;
use medcheck_service::{AuthorityClient, InteractionChecker, InteractionServer, ServiceConfig};
use tonic::transport::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!("Loading interaction data from: {}", config.data_path.display());

    // A missing or broken data directory leaves the table empty; the
    // authority can still answer.
    let (table, catalog) = match discover_data_files(&config.data_path) {
        Ok(files) => {
            tracing::info!(
                "Discovered interaction tables {:?}, catalogs {:?}",
                file_names(&files.interaction_files),
                file_names(&files.catalog_files)
            );

            let table = match load_reference_table(&files, TableConfig::default()) {
                Ok(table) => table,
                Err(e) => {
                    tracing::warn!("Could not load interaction table: {}", e);
                    ReferenceTable::new()
                }
            };

            let catalog = match load_catalog(&files) {
                Ok(catalog) => catalog,
                Err(e) => {
                    tracing::warn!("Could not load medication catalog: {}", e);
                    MedicationCatalog::new()
                }
            };

            (table, catalog)
        }
        Err(e) => {
            tracing::warn!("No interaction data loaded: {}", e);
            (ReferenceTable::new(), MedicationCatalog::new())
        }
    };

    tracing::info!(
        "Loaded {} interactions over {} substances, {} catalog entries",
        table.len(),
        table.substance_count(),
        catalog.len()
    );

    let catalog = Arc::new(catalog);
    let mut checker = InteractionChecker::new().with_catalog(Arc::clone(&catalog));

    if config.sources.uses_table() {
        checker = checker.with_table(Arc::new(table));
    }

    if config.sources.uses_authority() {
        let authority = AuthorityClient::from_config(&config.authority)?;
        tracing::info!(
            "ORCA interaction check enabled ({}, {})",
            authority.mode(),
            config.authority.endpoint
        );
        checker = checker.with_authority(authority);
    }

    let addr = config.bind_addr()?;
    let server = InteractionServer::new(checker, catalog);

    tracing::info!("Starting gRPC server on {}", addr);

    Server::builder()
        .add_service(InteractionServiceServer::new(server))
        .serve(addr)
        .await?;

    Ok(())
}
