//! In-process stand-in for the authority.
//!
//! Used when no ORCA instance is reachable. It knows one rule: an
//! anticoagulant together with an NSAID.

use super::protocol::{InteractionEntry, InteractionRequest, InteractionResponse};
use super::transport::{AuthorityTransport, TransportMode};
use super::AuthorityError;

const ANTICOAGULANT_ALIASES: &[&str] = &["ワーファリン", "Warfarin"];
const NSAID_ALIASES: &[&str] = &["ロキソニン", "アスピリン", "Loxoprofen"];

/// Transport that answers from a fixed rule instead of calling out.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport;

impl SimulatedTransport {
    /// Builds the response the simulation gives for `request`.
    ///
    /// A drug matches a group when its name contains one of the group's
    /// aliases; the comparison is case-sensitive. At most one finding is
    /// reported however many aliases are present.
    pub fn respond(request: &InteractionRequest) -> InteractionResponse {
        let names: Vec<&str> = request.drug_names().collect();
        let has_any = |aliases: &[&str]| {
            names
                .iter()
                .any(|n| aliases.iter().any(|alias| n.contains(alias)))
        };

        let mut entries = Vec::new();
        if has_any(ANTICOAGULANT_ALIASES) && has_any(NSAID_ALIASES) {
            entries.push(InteractionEntry {
                drug_a: "ワーファリン".to_string(),
                drug_b: "ロキソニン".to_string(),
                symptom: "出血傾向が増強されるおそれがある。".to_string(),
                detail: "抗血小板作用により、ワーファリンの抗凝固作用が増強される。".to_string(),
                context_class: "併用注意".to_string(),
            });
        }

        InteractionResponse::new(entries)
    }
}

#[tonic::async_trait]
impl AuthorityTransport for SimulatedTransport {
    async fn exchange(&self, request: &str) -> Result<Vec<u8>, AuthorityError> {
        let request = InteractionRequest::from_xml(request).map_err(AuthorityError::MalformedRequest)?;
        let response = Self::respond(&request);
        Ok(response.to_xml()?.into_bytes())
    }

    fn mode(&self) -> TransportMode {
        TransportMode::Simulated
    }
}
