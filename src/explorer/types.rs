//! Explorer API Wire Types
//!
//! JSON shapes returned by the explorer endpoints, kept separate from
//! the validated domain types in `proof::types`. Hashes here are still
//! raw hex strings; they only become `Hash` values after the decode
//! boundary has checked them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response from `GET /system/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    pub total_events: Option<u64>,
    pub vcp_version: Option<String>,
    pub api_version: Option<String>,
    pub last_anchor: Option<AnchorInfo>,
}

/// Most recent blockchain anchor, if the log has been anchored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorInfo {
    pub network: Option<String>,
    pub block_number: Option<u64>,
}

/// Response from `GET /events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListResponse {
    #[serde(default)]
    pub events: Vec<VcpEvent>,
    pub total_count: Option<u64>,
}

/// A single audit-log event: header, free-form payload, and the
/// security block linking it into the hash chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VcpEvent {
    pub header: EventHeader,
    #[serde(default)]
    pub payload: serde_json::Value,
    pub security: EventSecurity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventHeader {
    pub event_id: Uuid,
    pub trace_id: Option<String>,
    pub timestamp_iso: DateTime<Utc>,
    pub event_type: String,
    pub venue_id: Option<String>,
    pub symbol: Option<String>,
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSecurity {
    pub prev_hash: String,
    pub event_hash: String,
    pub hash_algo: Option<String>,
    pub signature: Option<String>,
}

/// Response from `GET /events/{id}/proof`.
///
/// `tree_size` and `leaf_index` are informational: the proof path
/// carries explicit positions, so verification does not need them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofResponse {
    pub event_hash: String,
    pub merkle_root: String,
    #[serde(default)]
    pub proof_path: Vec<ProofStepWire>,
    pub tree_size: Option<u64>,
    pub leaf_index: Option<u64>,
}

/// One undecoded step of the proof path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofStepWire {
    pub hash: String,
    pub position: String,
}
