//! Audit Proof Verification
//!
//! Types and verification logic for Merkle inclusion proofs over the
//! VCP audit log. Verification runs entirely on the local machine;
//! no server trust is required.

pub mod types;
pub mod verify;

pub use types::{AuditProof, Hash, Position, ProofStep};
pub use verify::{
    load_proof_file, verify_audit_proof, verify_proof_file, VerifyResult,
    DEFAULT_MAX_PROOF_DEPTH,
};
