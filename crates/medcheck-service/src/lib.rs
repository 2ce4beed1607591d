//! # medcheck-service
//!
//! gRPC service for medication interaction checks.
//!
//! A check looks every pair of the submitted medications up in the curated
//! reference table loaded by `medcheck-engine`, asks the ORCA interaction
//! API about the same list, and reports the combined findings with the
//! highest risk level among them.
//!
//! The ORCA client runs against a built-in simulation unless
//! `ORCA_MOCK_MODE=false`.

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod proto;

pub mod authority;
pub mod checker;
pub mod config;
mod server;

pub use authority::{AuthorityClient, AuthorityError};
pub use checker::{CheckError, InteractionChecker};
pub use config::{AuthorityConfig, ConfigError, ServiceConfig, SourceMode};
pub use server::InteractionServer;
