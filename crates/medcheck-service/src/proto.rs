//! gRPC messages for the `medcheck.InteractionService` service.
//!
//! Field numbers are part of the wire contract; never renumber them.

/// Kind of product, as sent by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum MedicationKind {
    Unspecified = 0,
    Prescription = 1,
    Otc = 2,
    Supplement = 3,
}

/// Interaction risk level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum RiskLevel {
    None = 0,
    Mild = 1,
    Moderate = 2,
    Severe = 3,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Medication {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, optional, tag = "3")]
    pub dosage: Option<String>,
    #[prost(enumeration = "MedicationKind", tag = "4")]
    pub kind: i32,
    #[prost(bool, tag = "5")]
    pub currently_taking: bool,
    #[prost(string, optional, tag = "6")]
    pub ingredient: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Interaction {
    #[prost(string, tag = "1")]
    pub drug1: String,
    #[prost(string, tag = "2")]
    pub drug2: String,
    #[prost(enumeration = "RiskLevel", tag = "3")]
    pub risk_level: i32,
    #[prost(string, tag = "4")]
    pub mechanism: String,
    #[prost(string, tag = "5")]
    pub concerns: String,
    #[prost(string, tag = "6")]
    pub source: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CheckInteractionsRequest {
    #[prost(message, repeated, tag = "1")]
    pub medications: Vec<Medication>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CheckInteractionsResponse {
    #[prost(enumeration = "RiskLevel", tag = "1")]
    pub risk_level: i32,
    #[prost(string, tag = "2")]
    pub display_text: String,
    #[prost(string, tag = "3")]
    pub color: String,
    #[prost(string, tag = "4")]
    pub icon: String,
    #[prost(message, repeated, tag = "5")]
    pub interactions: Vec<Interaction>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SuggestMedicationsRequest {
    #[prost(string, tag = "1")]
    pub query: String,
    /// `Unspecified` suggests every kind.
    #[prost(enumeration = "MedicationKind", tag = "2")]
    pub kind: i32,
    /// 0 means the default limit.
    #[prost(uint32, tag = "3")]
    pub limit: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CatalogEntry {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(enumeration = "MedicationKind", tag = "2")]
    pub kind: i32,
    #[prost(string, optional, tag = "3")]
    pub ingredient: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SuggestMedicationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub entries: Vec<CatalogEntry>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct HealthRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct HealthResponse {
    #[prost(string, tag = "1")]
    pub status: String,
    #[prost(string, tag = "2")]
    pub message: String,
    #[prost(uint64, tag = "3")]
    pub table_entries: u64,
    #[prost(uint64, tag = "4")]
    pub catalog_entries: u64,
    #[prost(string, tag = "5")]
    pub authority_mode: String,
}

include!(concat!(env!("OUT_DIR"), "/medcheck.InteractionService.rs"));
