use thiserror::Error;

#[derive(Error, Debug)]
pub enum VcpError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Explorer API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<reqwest::Error> for VcpError {
    fn from(err: reqwest::Error) -> Self {
        Self::TransportError(err.to_string())
    }
}

impl From<serde_json::Error> for VcpError {
    fn from(err: serde_json::Error) -> Self {
        Self::TransportError(format!("JSON decode error: {}", err))
    }
}

impl VcpError {
    pub fn invalid_hex_length(field: &str, len: usize) -> Self {
        Self::MalformedInput(format!(
            "{}: expected 64 hex characters, got {}",
            field, len
        ))
    }

    pub fn invalid_hex(field: &str, err: hex::FromHexError) -> Self {
        Self::MalformedInput(format!("{}: invalid hex: {}", field, err))
    }

    pub fn unknown_position(token: &str) -> Self {
        Self::MalformedInput(format!(
            "unrecognized position token: {:?} (expected \"left\" or \"right\")",
            token
        ))
    }
}
