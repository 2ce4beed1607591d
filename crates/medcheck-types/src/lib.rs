//! # medcheck-types
//!
//! Type definitions for medication interaction checking.
//!
//! This crate provides the value types shared by the matching engine and the
//! service: medications submitted by a client, known interaction records,
//! risk levels with their fixed display table, and the check result payload.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Field names follow the client's camelCase JSON.
//!
//! ## Usage
//!
//! ```rust
//! use medcheck_types::{CheckResult, InteractionRecord, Medication, MedicationKind, RiskLevel};
//!
//! let med = Medication::new("1", "ワーファリン", MedicationKind::Prescription);
//! assert_eq!(med.lookup_key(), "ワーファリン");
//!
//! let result = CheckResult::new(RiskLevel::Severe, Vec::<InteractionRecord>::new());
//! assert_eq!(result.icon(), "🔴");
//! ```

#![warn(missing_docs)]

mod catalog;
mod display;
mod enums;
mod interaction;
mod medication;
mod result;
pub mod well_known;

// Re-export all public types at crate root
pub use catalog::CatalogEntry;
pub use display::RiskDisplay;
pub use enums::{CodeParseError, MedicationKind, RiskLevel};
pub use interaction::InteractionRecord;
pub use medication::Medication;
pub use result::CheckResult;
