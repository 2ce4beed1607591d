//! ORCA interaction-check XML documents.
//!
//! Request:
//!
//! ```xml
//! <Request>
//!   <Patient_Information><Patient_ID>99999999</Patient_ID></Patient_Information>
//!   <Medical_Information>
//!     <Drug_Information><Drug_Name>ワーファリン</Drug_Name></Drug_Information>
//!   </Medical_Information>
//! </Request>
//! ```
//!
//! Response:
//!
//! ```xml
//! <Response>
//!   <Interaction_Result>
//!     <Interaction>
//!       <Drug_Name_A/><Drug_Name_B/><Symptom_Content/><Symptom_Detail/><Context_Class/>
//!     </Interaction>
//!   </Interaction_Result>
//! </Response>
//! ```

use medcheck_types::{well_known, InteractionRecord, Medication, RiskLevel};
use quick_xml::errors::serialize::{DeError, SeError};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

const INTERACTION_TAG: &[u8] = b"Interaction";

/// Markers of a contraindicated combination (併用禁忌).
const CONTRAINDICATED_MARKERS: &[&str] = &["禁忌", "contraindicated"];

/// Markers of a combination to use with caution (併用注意).
const CAUTION_MARKERS: &[&str] = &["注意", "caution"];

/// Outbound request document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Request")]
pub struct InteractionRequest {
    /// Subject section.
    #[serde(rename = "Patient_Information")]
    pub patient: PatientInformation,
    /// Drug list section.
    #[serde(rename = "Medical_Information")]
    pub medical: MedicalInformation,
}

/// Subject section. Only ever carries the placeholder identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInformation {
    /// Placeholder identifier.
    #[serde(rename = "Patient_ID")]
    pub patient_id: String,
}

/// Drug list section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MedicalInformation {
    /// Drugs, one per medication.
    #[serde(rename = "Drug_Information", default)]
    pub drugs: Vec<DrugInformation>,
}

/// One drug of the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugInformation {
    /// Display name of the medication.
    #[serde(rename = "Drug_Name")]
    pub name: String,
}

impl InteractionRequest {
    /// Builds a request for `medications` under the placeholder `patient_id`.
    ///
    /// Display names are sent as given; the authority resolves them itself.
    pub fn new(patient_id: &str, medications: &[Medication]) -> Self {
        Self {
            patient: PatientInformation {
                patient_id: patient_id.to_string(),
            },
            medical: MedicalInformation {
                drugs: medications
                    .iter()
                    .map(|m| DrugInformation {
                        name: m.name.clone(),
                    })
                    .collect(),
            },
        }
    }

    /// Returns the drug names in request order.
    pub fn drug_names(&self) -> impl Iterator<Item = &str> {
        self.medical.drugs.iter().map(|d| d.name.as_str())
    }

    /// Serializes the request document, with XML declaration.
    pub fn to_xml(&self) -> Result<String, SeError> {
        let body = quick_xml::se::to_string(self)?;
        Ok(format!("{XML_DECLARATION}{body}"))
    }

    /// Parses a request document.
    pub fn from_xml(xml: &str) -> Result<Self, DeError> {
        quick_xml::de::from_str(xml)
    }
}

/// Inbound response document.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename = "Response")]
pub struct InteractionResponse {
    /// Result section.
    #[serde(rename = "Interaction_Result")]
    pub result: InteractionResult,
}

/// Container of interaction entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InteractionResult {
    /// Reported interactions.
    #[serde(rename = "Interaction")]
    pub interactions: Vec<InteractionEntry>,
}

/// One interaction reported by the authority. Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionEntry {
    /// First drug.
    #[serde(rename = "Drug_Name_A", default)]
    pub drug_a: String,
    /// The contraindicated partner ("contra name").
    #[serde(rename = "Drug_Name_B", default)]
    pub drug_b: String,
    /// Expected clinical consequence.
    #[serde(rename = "Symptom_Content", default)]
    pub symptom: String,
    /// Mechanism or further detail.
    #[serde(rename = "Symptom_Detail", default)]
    pub detail: String,
    /// 併用禁忌 / 併用注意 / ...
    #[serde(rename = "Context_Class", default)]
    pub context_class: String,
}

impl InteractionEntry {
    /// Severity of this entry, see [`classify`].
    pub fn risk_level(&self) -> RiskLevel {
        classify(&self.context_class, &self.symptom)
    }

    /// Converts to an interaction record attributed to ORCA.
    pub fn into_record(self) -> InteractionRecord {
        let risk_level = self.risk_level();
        InteractionRecord {
            drug1: self.drug_a,
            drug2: self.drug_b,
            risk_level,
            mechanism: self.detail,
            concerns: self.symptom,
            source: well_known::ORCA_SOURCE.to_string(),
        }
    }
}

impl InteractionResponse {
    /// Creates a response carrying `interactions`.
    pub fn new(interactions: Vec<InteractionEntry>) -> Self {
        Self {
            result: InteractionResult { interactions },
        }
    }

    /// Serializes the response document, with XML declaration.
    pub fn to_xml(&self) -> Result<String, SeError> {
        let body = quick_xml::se::to_string(self)?;
        Ok(format!("{XML_DECLARATION}{body}"))
    }

    /// Parses a response document.
    ///
    /// Every `Interaction` element is collected, at any depth and in document
    /// order, so other elements between entries and repeated result sections
    /// do not hide findings. The whole document must still be well-formed.
    pub fn from_xml(xml: &str) -> Result<Self, DeError> {
        let mut reader = Reader::from_str(xml);
        let mut interactions = Vec::new();
        let mut depth = 0usize;
        let mut seen_root = false;

        loop {
            let start = reader.buffer_position() as usize;
            match reader.read_event()? {
                Event::Start(e) if e.local_name().as_ref() == INTERACTION_TAG => {
                    seen_root = true;
                    reader.read_to_end(e.name())?;
                    let element = &xml[start..reader.buffer_position() as usize];
                    interactions.push(quick_xml::de::from_str(element)?);
                }
                Event::Empty(e) if e.local_name().as_ref() == INTERACTION_TAG => {
                    seen_root = true;
                    interactions.push(InteractionEntry::default());
                }
                Event::Start(_) => {
                    seen_root = true;
                    depth += 1;
                }
                Event::Empty(_) => seen_root = true,
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(DeError::custom("document has no root element"));
        }
        if depth > 0 {
            return Err(DeError::UnexpectedEof);
        }

        Ok(Self::new(interactions))
    }

    /// Returns the entries.
    pub fn into_entries(self) -> Vec<InteractionEntry> {
        self.result.interactions
    }
}

/// Classifies an authority finding. First matching rule wins:
///
/// 1. context class or symptom mentions a contraindication → severe
/// 2. context class or symptom mentions caution → moderate
/// 3. anything else → mild
pub fn classify(context_class: &str, symptom: &str) -> RiskLevel {
    let context_class = context_class.to_lowercase();
    let symptom = symptom.to_lowercase();
    let mentions = |markers: &[&str]| {
        markers
            .iter()
            .any(|m| context_class.contains(m) || symptom.contains(m))
    };

    if mentions(CONTRAINDICATED_MARKERS) {
        RiskLevel::Severe
    } else if mentions(CAUTION_MARKERS) {
        RiskLevel::Moderate
    } else {
        RiskLevel::Mild
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcheck_types::MedicationKind;

    #[test]
    fn test_request_carries_placeholder_and_display_names() {
        let meds = vec![
            Medication::new("1", "ワーファリン", MedicationKind::Prescription),
            Medication::new("2", "イチョウ葉エキス", MedicationKind::Supplement)
                .with_ingredient("イチョウ葉"),
        ];

        let xml = InteractionRequest::new("99999999", &meds).to_xml().unwrap();

        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<Patient_ID>99999999</Patient_ID>"));
        assert!(xml.contains("<Drug_Name>ワーファリン</Drug_Name>"));
        assert!(xml.contains("<Drug_Name>イチョウ葉エキス</Drug_Name>"));
        assert!(!xml.contains("<Drug_Name>イチョウ葉</Drug_Name>"));
    }

    #[test]
    fn test_request_parses_back() {
        let meds = vec![
            Medication::new("1", "Warfarin", MedicationKind::Prescription),
            Medication::new("2", "Loxoprofen", MedicationKind::Prescription),
        ];
        let request = InteractionRequest::new("0001", &meds);

        let parsed = InteractionRequest::from_xml(&request.to_xml().unwrap()).unwrap();
        assert_eq!(parsed.patient.patient_id, "0001");
        assert_eq!(
            parsed.drug_names().collect::<Vec<_>>(),
            vec!["Warfarin", "Loxoprofen"]
        );
    }

    #[test]
    fn test_decode_response_with_missing_fields() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <Response>
              <Interaction_Result>
                <Interaction>
                  <Drug_Name_A>ワーファリン</Drug_Name_A>
                  <Drug_Name_B>アスピリン</Drug_Name_B>
                  <Context_Class>併用注意</Context_Class>
                  <Extra_Code>12345</Extra_Code>
                </Interaction>
                <Interaction>
                  <Drug_Name_A>A</Drug_Name_A>
                  <Drug_Name_B>B</Drug_Name_B>
                  <Symptom_Content>併用禁忌</Symptom_Content>
                  <Symptom_Detail>detail</Symptom_Detail>
                </Interaction>
              </Interaction_Result>
            </Response>"#;

        let entries = InteractionResponse::from_xml(xml).unwrap().into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].symptom, "");
        assert_eq!(entries[0].detail, "");
        assert_eq!(entries[0].risk_level(), RiskLevel::Moderate);
        assert_eq!(entries[1].risk_level(), RiskLevel::Severe);

        let record = entries[1].clone().into_record();
        assert_eq!(record.drug1, "A");
        assert_eq!(record.mechanism, "detail");
        assert_eq!(record.concerns, "併用禁忌");
        assert_eq!(record.source, well_known::ORCA_SOURCE);
    }

    #[test]
    fn test_decode_empty_result() {
        let xml = "<Response><Interaction_Result/></Response>";
        assert!(InteractionResponse::from_xml(xml)
            .unwrap()
            .into_entries()
            .is_empty());
    }

    #[test]
    fn test_decode_entries_around_other_elements() {
        let xml = "<Response><Interaction_Result>\
                   <Interaction><Drug_Name_A>A</Drug_Name_A><Drug_Name_B>B</Drug_Name_B>\
                   <Context_Class>併用注意</Context_Class></Interaction>\
                   <Api_Note>x</Api_Note>\
                   <Interaction><Drug_Name_A>C</Drug_Name_A><Drug_Name_B>D</Drug_Name_B>\
                   <Context_Class>併用禁忌</Context_Class></Interaction>\
                   </Interaction_Result></Response>";

        let entries = InteractionResponse::from_xml(xml).unwrap().into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].drug_a, "A");
        assert_eq!(entries[1].drug_a, "C");
        assert_eq!(entries[1].risk_level(), RiskLevel::Severe);
    }

    #[test]
    fn test_decode_several_result_sections() {
        let xml = "<Response>\
                   <Interaction_Result><Interaction><Drug_Name_A>A</Drug_Name_A>\
                   <Drug_Name_B>B</Drug_Name_B></Interaction></Interaction_Result>\
                   <Api_Result>00</Api_Result>\
                   <Interaction_Result><Interaction><Drug_Name_A>C</Drug_Name_A>\
                   <Drug_Name_B>D</Drug_Name_B><Symptom_Content>併用禁忌 &amp; 出血</Symptom_Content>\
                   </Interaction></Interaction_Result>\
                   </Response>";

        let entries = InteractionResponse::from_xml(xml).unwrap().into_entries();
        let pairs: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.drug_a.as_str(), e.drug_b.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", "B"), ("C", "D")]);
        assert_eq!(entries[1].symptom, "併用禁忌 & 出血");
    }

    #[test]
    fn test_decode_malformed_document() {
        assert!(InteractionResponse::from_xml("<Response><Interaction_Result></Response>").is_err());
        assert!(InteractionResponse::from_xml("<Response><Interaction_Result>").is_err());
        assert!(InteractionResponse::from_xml("").is_err());
    }

    #[test]
    fn test_classify_rules_in_order() {
        assert_eq!(classify("併用禁忌", ""), RiskLevel::Severe);
        assert_eq!(classify("", "原則禁忌とする"), RiskLevel::Severe);
        assert_eq!(classify("併用注意", "禁忌"), RiskLevel::Severe);
        assert_eq!(classify("併用注意", ""), RiskLevel::Moderate);
        assert_eq!(classify("", "注意すること"), RiskLevel::Moderate);
        assert_eq!(classify("Use with Caution", ""), RiskLevel::Moderate);
        assert_eq!(classify("CONTRAINDICATED", ""), RiskLevel::Severe);
        assert_eq!(classify("", "相互作用の報告あり"), RiskLevel::Mild);
        assert_eq!(classify("", ""), RiskLevel::Mild);
    }
}
