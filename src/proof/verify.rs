//! Proof Verification Engine
//!
//! Recomputes the Merkle root from a leaf hash and its sibling path and
//! compares it against the published root. This is the security-critical
//! core of the crate: a bug here would let a forged proof be accepted.
//!
//! The function is pure and stateless; concurrent calls need no
//! coordination and cost is O(path length) SHA-256 digests, bounded by
//! the caller-supplied depth cap.

use sha2::{Digest, Sha256};
use tracing::info;

use crate::error::VcpError;
use crate::explorer::types::ProofResponse;
use crate::proof::types::{AuditProof, Hash, Position};

/// Default cap on proof path length. A SHA-256 tree cannot meaningfully
/// exceed 2^64 leaves, so 64 levels covers any honest proof.
pub const DEFAULT_MAX_PROOF_DEPTH: usize = 64;

/// Outcome of verifying a single audit proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyResult {
    /// Recomputed root matches: the leaf is provably included under the
    /// given root.
    Valid,
    /// Recomputed root differs: tampering, a stale root, or a corrupted
    /// proof. A normal outcome, not a fault.
    Invalid,
    /// Path length exceeds the configured cap; rejected before any
    /// hashing. A defensive outcome, not proof of tampering.
    ProofTooLarge,
}

impl VerifyResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerifyResult::Valid)
    }

    /// Human-readable verdict line.
    pub fn summary(&self) -> &'static str {
        match self {
            VerifyResult::Valid => "VERIFIED: proof is mathematically valid",
            VerifyResult::Invalid => "FAILED: recomputed root does not match",
            VerifyResult::ProofTooLarge => "REJECTED: proof path exceeds depth cap",
        }
    }
}

/// Verify a Merkle inclusion proof against its expected root.
///
/// Folds the leaf hash with each sibling in path order: a `Left`
/// sibling contributes on the left of the concatenation, a `Right`
/// sibling on the right. An empty path means the leaf claims to be the
/// root itself, so the comparison is direct and no hashing happens.
pub fn verify_audit_proof(proof: &AuditProof, max_path_length: usize) -> VerifyResult {
    if proof.path.len() > max_path_length {
        return VerifyResult::ProofTooLarge;
    }

    let mut current = proof.leaf_hash;

    for step in &proof.path {
        let mut hasher = Sha256::new();
        match step.position {
            Position::Left => {
                hasher.update(step.sibling.as_bytes());
                hasher.update(current.as_bytes());
            }
            Position::Right => {
                hasher.update(current.as_bytes());
                hasher.update(step.sibling.as_bytes());
            }
        }
        current = Hash::from_bytes(hasher.finalize().into());
    }

    if current == proof.expected_root {
        VerifyResult::Valid
    } else {
        VerifyResult::Invalid
    }
}

/// Load a proof saved as JSON from disk. Same wire shape as the
/// explorer's proof endpoint.
pub fn load_proof_file(path: &str) -> Result<ProofResponse, VcpError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| VcpError::IoError(format!("Failed to read proof file {}: {}", path, e)))?;

    serde_json::from_str(&raw)
        .map_err(|e| VcpError::MalformedInput(format!("Failed to parse proof file {}: {}", path, e)))
}

/// Decode and verify a proof file offline, without contacting the
/// explorer.
pub fn verify_proof_file(path: &str, max_path_length: usize) -> Result<VerifyResult, VcpError> {
    info!("Verifying proof file: {}", path);

    let response = load_proof_file(path)?;
    let proof = AuditProof::from_response(&response)?;
    Ok(verify_audit_proof(&proof, max_path_length))
}
