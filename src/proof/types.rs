//! Audit Proof Types
//!
//! Strongly-typed domain model for Merkle inclusion proofs. All hex
//! decoding and token validation happens here, at the boundary between
//! untrusted wire data and the verification engine; a value of these
//! types is guaranteed well-formed.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::VcpError;
use crate::explorer::types::{ProofResponse, ProofStepWire};

/// A SHA-256 digest, always exactly 32 bytes.
///
/// Canonical external form is lowercase hex with no prefix. Decoding
/// accepts either case but anything that is not exactly 64 hex
/// characters is rejected as `MalformedInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash([u8; 32]);

impl Hash {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Decode a 64-character hex string. `field` names the offending
    /// field in error messages.
    pub fn from_hex(field: &str, s: &str) -> Result<Self, VcpError> {
        if s.len() != 64 {
            return Err(VcpError::invalid_hex_length(field, s.len()));
        }

        let raw = hex::decode(s).map_err(|e| VcpError::invalid_hex(field, e))?;

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&raw);
        Ok(Self(bytes))
    }

    /// SHA-256 of arbitrary bytes.
    pub fn digest(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Where the sibling hash sits relative to the accumulated hash at one
/// step of the proof path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Right,
}

impl Position {
    /// Decode the wire token. Only the literal tokens `"left"` and
    /// `"right"` are accepted.
    pub fn from_token(token: &str) -> Result<Self, VcpError> {
        match token {
            "left" => Ok(Position::Left),
            "right" => Ok(Position::Right),
            other => Err(VcpError::unknown_position(other)),
        }
    }
}

/// One level of the proof path, ordered from the leaf upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofStep {
    pub sibling: Hash,
    pub position: Position,
}

impl ProofStep {
    pub fn new(sibling: Hash, position: Position) -> Self {
        Self { sibling, position }
    }

    fn from_wire(wire: &ProofStepWire) -> Result<Self, VcpError> {
        Ok(Self {
            sibling: Hash::from_hex("proof_path.hash", &wire.hash)?,
            position: Position::from_token(&wire.position)?,
        })
    }
}

/// A fully-decoded Merkle inclusion proof: the event's leaf hash, the
/// sibling path to the root, and the root the server published.
///
/// Constructed fresh per verification request from untrusted wire data
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditProof {
    pub leaf_hash: Hash,
    pub path: Vec<ProofStep>,
    pub expected_root: Hash,
}

impl AuditProof {
    pub fn new(leaf_hash: Hash, path: Vec<ProofStep>, expected_root: Hash) -> Self {
        Self {
            leaf_hash,
            path,
            expected_root,
        }
    }

    /// Decode an explorer proof response into a validated proof.
    ///
    /// Any malformed hex or unrecognized position token fails here with
    /// `MalformedInput`; the verification engine never sees it.
    pub fn from_response(response: &ProofResponse) -> Result<Self, VcpError> {
        let leaf_hash = Hash::from_hex("event_hash", &response.event_hash)?;
        let expected_root = Hash::from_hex("merkle_root", &response.merkle_root)?;

        let path = response
            .proof_path
            .iter()
            .map(ProofStep::from_wire)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(leaf_hash, path, expected_root))
    }
}
