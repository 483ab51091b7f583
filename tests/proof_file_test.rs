//! Offline proof-file verification: decode a proof JSON from disk and
//! check it against its embedded root, with no explorer involved.

use sha2::{Digest, Sha256};
use std::io::Write;
use tempfile::NamedTempFile;

use vcp_verifier::explorer::types::{ProofResponse, ProofStepWire};
use vcp_verifier::proof::{verify_proof_file, Hash, DEFAULT_MAX_PROOF_DEPTH};
use vcp_verifier::{VcpError, VerifyResult};

fn combine(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    Hash::from_bytes(hasher.finalize().into())
}

fn write_proof_file(response: &ProofResponse) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string_pretty(response).unwrap().as_bytes())
        .unwrap();
    file
}

fn two_leaf_proof() -> ProofResponse {
    let leaf = Hash::digest(b"saved event");
    let sibling = Hash::digest(b"its neighbor");
    ProofResponse {
        event_hash: leaf.to_hex(),
        merkle_root: combine(&sibling, &leaf).to_hex(),
        proof_path: vec![ProofStepWire {
            hash: sibling.to_hex(),
            position: "left".to_string(),
        }],
        tree_size: Some(2),
        leaf_index: Some(1),
    }
}

#[test]
fn test_valid_proof_file_verifies() {
    let file = write_proof_file(&two_leaf_proof());

    let result =
        verify_proof_file(file.path().to_str().unwrap(), DEFAULT_MAX_PROOF_DEPTH).unwrap();
    assert_eq!(result, VerifyResult::Valid);
}

#[test]
fn test_tampered_proof_file_is_invalid() {
    let mut response = two_leaf_proof();
    response.merkle_root = Hash::digest(b"forged root").to_hex();
    let file = write_proof_file(&response);

    let result =
        verify_proof_file(file.path().to_str().unwrap(), DEFAULT_MAX_PROOF_DEPTH).unwrap();
    assert_eq!(result, VerifyResult::Invalid);
}

#[test]
fn test_proof_file_depth_cap_applies() {
    let file = write_proof_file(&two_leaf_proof());

    let result = verify_proof_file(file.path().to_str().unwrap(), 0).unwrap();
    assert_eq!(result, VerifyResult::ProofTooLarge);
}

#[test]
fn test_malformed_hash_in_proof_file_is_rejected() {
    let mut response = two_leaf_proof();
    response.event_hash.pop();
    let file = write_proof_file(&response);

    let err =
        verify_proof_file(file.path().to_str().unwrap(), DEFAULT_MAX_PROOF_DEPTH).unwrap_err();
    assert!(matches!(err, VcpError::MalformedInput(_)));
}

#[test]
fn test_unparseable_proof_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ this is not json").unwrap();

    let err =
        verify_proof_file(file.path().to_str().unwrap(), DEFAULT_MAX_PROOF_DEPTH).unwrap_err();
    assert!(matches!(err, VcpError::MalformedInput(_)));
}

#[test]
fn test_missing_proof_file_is_io_error() {
    let err = verify_proof_file("/nonexistent/proof.json", DEFAULT_MAX_PROOF_DEPTH).unwrap_err();
    assert!(matches!(err, VcpError::IoError(_)));
}
