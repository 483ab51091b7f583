use serde::{Deserialize, Serialize};
use std::env;

use crate::error::VcpError;
use crate::proof::DEFAULT_MAX_PROOF_DEPTH;

pub const DEFAULT_API_BASE: &str = "https://explorer.veritaschain.org/api/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub max_proof_depth: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self, VcpError> {
        let api_base = env::var("VCP_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let api_key = env::var("VCP_API_KEY").ok().filter(|k| !k.is_empty());

        let max_proof_depth = match env::var("VCP_MAX_PROOF_DEPTH") {
            Ok(raw) => raw.parse().map_err(|e| {
                VcpError::ConfigError(format!("VCP_MAX_PROOF_DEPTH: {}", e))
            })?,
            Err(_) => DEFAULT_MAX_PROOF_DEPTH,
        };

        Ok(AppConfig {
            api_base,
            api_key,
            max_proof_depth,
        })
    }
}
