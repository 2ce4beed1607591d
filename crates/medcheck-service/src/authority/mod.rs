//! Client for the ORCA drug interaction-check API.
//!
//! A check sends the display names of all medications in one XML request
//! and converts the reported findings to [`InteractionRecord`]s. Transport
//! failures are returned to the caller; an unreadable response body is
//! logged and treated as "no findings".

mod protocol;
mod simulation;
mod transport;

use medcheck_types::{InteractionRecord, Medication, RiskLevel};
use quick_xml::errors::serialize::{DeError, SeError};
use thiserror::Error;

pub use protocol::{classify, InteractionEntry, InteractionRequest, InteractionResponse};
pub use simulation::SimulatedTransport;
pub use transport::{AuthorityTransport, HttpTransport, TransportMode};

use crate::config::AuthorityConfig;

/// Errors talking to the authority.
#[derive(Error, Debug)]
pub enum AuthorityError {
    /// Connection, timeout or body read failure.
    #[error("HTTP error calling ORCA: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("ORCA returned HTTP status {status}")]
    UnexpectedStatus {
        /// Status received.
        status: reqwest::StatusCode,
    },

    /// The request document could not be serialized.
    #[error("Failed to encode ORCA request: {0}")]
    Encode(#[from] SeError),

    /// The simulated authority received an unreadable request.
    #[error("Malformed ORCA request document: {0}")]
    MalformedRequest(#[source] DeError),
}

/// Queries the authority for interactions among a medication list.
pub struct AuthorityClient {
    transport: Box<dyn AuthorityTransport>,
    patient_id: String,
}

impl AuthorityClient {
    /// Creates a client from `config`, simulated or live.
    pub fn from_config(config: &AuthorityConfig) -> Result<Self, AuthorityError> {
        let transport: Box<dyn AuthorityTransport> = if config.simulate {
            Box::new(SimulatedTransport)
        } else {
            Box::new(HttpTransport::new(config)?)
        };
        Ok(Self::with_transport(transport, config.patient_id.clone()))
    }

    /// Creates a client over an arbitrary transport.
    pub fn with_transport(transport: Box<dyn AuthorityTransport>, patient_id: impl Into<String>) -> Self {
        Self {
            transport,
            patient_id: patient_id.into(),
        }
    }

    /// Returns how the authority is reached.
    pub fn mode(&self) -> TransportMode {
        self.transport.mode()
    }

    /// Checks `medications` against the authority.
    ///
    /// An empty list returns no findings without contacting the authority.
    pub async fn check(&self, medications: &[Medication]) -> Result<Vec<InteractionRecord>, AuthorityError> {
        if medications.is_empty() {
            return Ok(Vec::new());
        }

        let request = InteractionRequest::new(&self.patient_id, medications).to_xml()?;
        tracing::debug!(
            "Sending {} drugs to ORCA ({})",
            medications.len(),
            self.transport.mode()
        );

        let body = self.transport.exchange(&request).await?;
        Ok(decode_findings(&body))
    }
}

/// Converts a response body to interaction records.
///
/// An undecodable body yields no records.
pub fn decode_findings(body: &[u8]) -> Vec<InteractionRecord> {
    let text = String::from_utf8_lossy(body);
    let response = match InteractionResponse::from_xml(&text) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Failed to parse ORCA response: {}", e);
            return Vec::new();
        }
    };

    response
        .into_entries()
        .into_iter()
        .map(|entry| {
            let record = entry.into_record();
            if record.risk_level == RiskLevel::Severe {
                tracing::warn!(
                    "ORCA reports contraindicated combination: {} + {}",
                    record.drug1,
                    record.drug2
                );
            } else {
                tracing::info!(
                    "ORCA reports {} interaction: {} + {}",
                    record.risk_level,
                    record.drug1,
                    record.drug2
                );
            }
            record
        })
        .collect()
}
