//! Local verification client for the VeritasChain Protocol audit log.
//!
//! "Verify, don't trust": the explorer serves Merkle inclusion proofs,
//! and this crate recomputes the published root on the local machine so
//! a tampered or incomplete proof is detected without trusting any
//! server.

pub mod config;
pub mod error;
pub mod explorer;
pub mod proof;

pub use config::AppConfig;
pub use error::VcpError;
pub use explorer::ExplorerClient;
pub use proof::{verify_audit_proof, AuditProof, VerifyResult};
