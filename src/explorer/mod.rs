//! VCP Explorer API Client
//!
//! Thin transport layer over the explorer's REST API: system status,
//! event listing, and Merkle proof retrieval. No verification logic
//! lives here; proofs are handed to the proof engine already decoded.

pub mod client;
pub mod types;

pub use client::ExplorerClient;
pub use types::{ProofResponse, SystemStatus, VcpEvent};
