//! gRPC server implementation.

use std::sync::Arc;

use medcheck_engine::MedicationCatalog;
use medcheck_types::{CatalogEntry, InteractionRecord, Medication, MedicationKind, RiskLevel};
use tonic::{Request, Response, Status};

use crate::checker::InteractionChecker;
use crate::proto::{
    self, interaction_service_server::InteractionService, CheckInteractionsRequest,
    CheckInteractionsResponse, HealthRequest, HealthResponse, SuggestMedicationsRequest,
    SuggestMedicationsResponse,
};

const HEALTH_MESSAGE: &str = "Drug Interaction Checker API is running";

/// Medication interaction gRPC server.
#[derive(Clone)]
pub struct InteractionServer {
    checker: Arc<InteractionChecker>,
    catalog: Arc<MedicationCatalog>,
}

impl InteractionServer {
    /// Creates a new server over `checker`, suggesting from `catalog`.
    pub fn new(checker: InteractionChecker, catalog: Arc<MedicationCatalog>) -> Self {
        Self {
            checker: Arc::new(checker),
            catalog,
        }
    }

    /// Convert proto Medication to the domain type, rejecting unusable input.
    fn from_proto_medication(medication: proto::Medication) -> Result<Medication, Status> {
        if medication.name.trim().is_empty() {
            return Err(Status::invalid_argument(format!(
                "Medication '{}' has no name",
                medication.id
            )));
        }

        let kind = Self::from_proto_kind(medication.kind)?.ok_or_else(|| {
            Status::invalid_argument(format!("Medication '{}' has no type", medication.name))
        })?;

        Ok(Medication {
            id: medication.id,
            name: medication.name,
            dosage: medication.dosage,
            kind,
            currently_taking: medication.currently_taking,
            ingredient: medication.ingredient.filter(|i| !i.is_empty()),
        })
    }

    /// Unspecified maps to `None`; values outside the enum are rejected.
    fn from_proto_kind(value: i32) -> Result<Option<MedicationKind>, Status> {
        match proto::MedicationKind::try_from(value) {
            Ok(proto::MedicationKind::Unspecified) => Ok(None),
            Ok(proto::MedicationKind::Prescription) => Ok(Some(MedicationKind::Prescription)),
            Ok(proto::MedicationKind::Otc) => Ok(Some(MedicationKind::OverTheCounter)),
            Ok(proto::MedicationKind::Supplement) => Ok(Some(MedicationKind::Supplement)),
            Err(_) => Err(Status::invalid_argument(format!(
                "Unknown medication type: {}",
                value
            ))),
        }
    }

    fn to_proto_kind(kind: MedicationKind) -> proto::MedicationKind {
        match kind {
            MedicationKind::Prescription => proto::MedicationKind::Prescription,
            MedicationKind::OverTheCounter => proto::MedicationKind::Otc,
            MedicationKind::Supplement => proto::MedicationKind::Supplement,
        }
    }

    fn to_proto_risk_level(level: RiskLevel) -> proto::RiskLevel {
        match level {
            RiskLevel::None => proto::RiskLevel::None,
            RiskLevel::Mild => proto::RiskLevel::Mild,
            RiskLevel::Moderate => proto::RiskLevel::Moderate,
            RiskLevel::Severe => proto::RiskLevel::Severe,
        }
    }

    fn to_proto_interaction(record: InteractionRecord) -> proto::Interaction {
        proto::Interaction {
            drug1: record.drug1,
            drug2: record.drug2,
            risk_level: Self::to_proto_risk_level(record.risk_level) as i32,
            mechanism: record.mechanism,
            concerns: record.concerns,
            source: record.source,
        }
    }

    fn to_proto_catalog_entry(entry: &CatalogEntry) -> proto::CatalogEntry {
        proto::CatalogEntry {
            name: entry.name.clone(),
            kind: Self::to_proto_kind(entry.kind) as i32,
            ingredient: entry.ingredient.clone(),
        }
    }
}

#[tonic::async_trait]
impl InteractionService for InteractionServer {
    async fn check_interactions(
        &self,
        request: Request<CheckInteractionsRequest>,
    ) -> Result<Response<CheckInteractionsResponse>, Status> {
        let req = request.into_inner();
        tracing::info!("Checking interactions for {} medications", req.medications.len());

        let medications = req
            .medications
            .into_iter()
            .map(Self::from_proto_medication)
            .collect::<Result<Vec<_>, Status>>()?;

        let result = self.checker.check(medications).await.map_err(|e| {
            tracing::error!("Error checking interactions: {}", e);
            Status::internal("internal server error")
        })?;

        tracing::info!(
            "Found {} interactions, highest risk: {}",
            result.interactions().len(),
            result.risk_level()
        );

        let risk_level = Self::to_proto_risk_level(result.risk_level()) as i32;
        let display_text = result.display_text().to_string();
        let color = result.color().to_string();
        let icon = result.icon().to_string();
        let interactions = result
            .into_interactions()
            .into_iter()
            .map(Self::to_proto_interaction)
            .collect();

        Ok(Response::new(CheckInteractionsResponse {
            risk_level,
            display_text,
            color,
            icon,
            interactions,
        }))
    }

    async fn suggest_medications(
        &self,
        request: Request<SuggestMedicationsRequest>,
    ) -> Result<Response<SuggestMedicationsResponse>, Status> {
        let req = request.into_inner();
        let kind = Self::from_proto_kind(req.kind)?;
        let entries = self
            .catalog
            .suggest(&req.query, kind, req.limit as usize)
            .into_iter()
            .map(Self::to_proto_catalog_entry)
            .collect();

        Ok(Response::new(SuggestMedicationsResponse { entries }))
    }

    async fn health(
        &self,
        _request: Request<HealthRequest>,
    ) -> Result<Response<HealthResponse>, Status> {
        let authority_mode = self
            .checker
            .authority()
            .map(|a| a.mode().as_str())
            .unwrap_or("disabled");

        Ok(Response::new(HealthResponse {
            status: "ok".to_string(),
            message: HEALTH_MESSAGE.to_string(),
            table_entries: self.checker.table().map_or(0, |t| t.len()) as u64,
            catalog_entries: self.catalog.len() as u64,
            authority_mode: authority_mode.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authority::{AuthorityClient, SimulatedTransport};
    use medcheck_engine::ReferenceTable;
    use medcheck_types::well_known;

    fn proto_med(id: &str, name: &str, kind: proto::MedicationKind) -> proto::Medication {
        proto::Medication {
            id: id.to_string(),
            name: name.to_string(),
            dosage: None,
            kind: kind as i32,
            currently_taking: true,
            ingredient: None,
        }
    }

    fn catalog() -> Arc<MedicationCatalog> {
        Arc::new(MedicationCatalog::from_entries(vec![
            CatalogEntry {
                name: "ワーファリン".to_string(),
                kind: MedicationKind::Prescription,
                ingredient: None,
            },
            CatalogEntry {
                name: "イチョウ葉エキス".to_string(),
                kind: MedicationKind::Supplement,
                ingredient: Some("イチョウ葉".to_string()),
            },
            CatalogEntry {
                name: "ロキソニンS".to_string(),
                kind: MedicationKind::OverTheCounter,
                ingredient: Some("ロキソプロフェン".to_string()),
            },
        ]))
    }

    fn server() -> InteractionServer {
        let table = Arc::new(ReferenceTable::from_records(vec![InteractionRecord {
            drug1: "ワーファリン".to_string(),
            drug2: "イチョウ葉".to_string(),
            risk_level: RiskLevel::Severe,
            mechanism: "血小板凝集抑制作用が重なる。".to_string(),
            concerns: "出血リスクが高まる。".to_string(),
            source: well_known::CURATED_TABLE_SOURCE.to_string(),
        }]));
        let catalog = catalog();
        let checker = InteractionChecker::new()
            .with_table(table)
            .with_authority(AuthorityClient::with_transport(
                Box::new(SimulatedTransport),
                "99999999",
            ))
            .with_catalog(Arc::clone(&catalog));
        InteractionServer::new(checker, catalog)
    }

    #[tokio::test]
    async fn test_check_interactions() {
        let request = CheckInteractionsRequest {
            medications: vec![
                proto_med("1", "ワーファリン", proto::MedicationKind::Prescription),
                proto_med("2", "イチョウ葉エキス", proto::MedicationKind::Supplement),
            ],
        };

        let response = server()
            .check_interactions(Request::new(request))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.risk_level, proto::RiskLevel::Severe as i32);
        assert_eq!(response.display_text, RiskLevel::Severe.display().text);
        assert_eq!(response.interactions.len(), 1);
        assert_eq!(response.interactions[0].drug2, "イチョウ葉");
    }

    #[tokio::test]
    async fn test_check_empty_list() {
        let response = server()
            .check_interactions(Request::new(CheckInteractionsRequest { medications: vec![] }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.risk_level, proto::RiskLevel::None as i32);
        assert!(response.interactions.is_empty());
        assert_eq!(response.icon, RiskLevel::None.display().icon);
    }

    #[tokio::test]
    async fn test_check_rejects_invalid_medications() {
        let server = server();

        let nameless = CheckInteractionsRequest {
            medications: vec![proto_med("1", " ", proto::MedicationKind::Prescription)],
        };
        let status = server.check_interactions(Request::new(nameless)).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let untyped = CheckInteractionsRequest {
            medications: vec![proto_med("1", "ワーファリン", proto::MedicationKind::Unspecified)],
        };
        let status = server.check_interactions(Request::new(untyped)).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let mut unknown = proto_med("1", "ワーファリン", proto::MedicationKind::Prescription);
        unknown.kind = 42;
        let status = server
            .check_interactions(Request::new(CheckInteractionsRequest {
                medications: vec![unknown],
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_suggest_medications() {
        let server = server();

        let response = server
            .suggest_medications(Request::new(SuggestMedicationsRequest {
                query: "イチョウ".to_string(),
                kind: proto::MedicationKind::Unspecified as i32,
                limit: 0,
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.entries.len(), 1);
        assert_eq!(response.entries[0].kind, proto::MedicationKind::Supplement as i32);

        let response = server
            .suggest_medications(Request::new(SuggestMedicationsRequest {
                query: "ロキソ".to_string(),
                kind: proto::MedicationKind::Supplement as i32,
                limit: 0,
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(response.entries.is_empty());
    }

    #[tokio::test]
    async fn test_suggest_limit() {
        let server = server();
        let suggest = |limit: u32| SuggestMedicationsRequest {
            query: "ン".to_string(),
            kind: proto::MedicationKind::Unspecified as i32,
            limit,
        };

        let all = server
            .suggest_medications(Request::new(suggest(0)))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(all.entries.len(), 2);

        let first = server
            .suggest_medications(Request::new(suggest(1)))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(first.entries.len(), 1);
        assert_eq!(first.entries[0].name, "ワーファリン");
    }

    #[tokio::test]
    async fn test_health() {
        let response = server()
            .health(Request::new(HealthRequest {}))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.status, "ok");
        assert_eq!(response.table_entries, 1);
        assert_eq!(response.catalog_entries, 3);
        assert_eq!(response.authority_mode, "simulated");
    }
}
