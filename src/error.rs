use thiserror::Error;

/// Every failure a FreeNAS API call can surface.
///
/// Nothing is retried or swallowed: each failing call returns exactly one of
/// these variants.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, TLS failure or transport timeout.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The appliance answered with a non-2xx status.
    #[error("FreeNAS returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected model.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    #[error("WebSocket connection closed by server")]
    ConnectionClosed,

    #[error("WebSocket client is not connected")]
    NotConnected,

    #[error("Operation timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Error payload of a JSON-RPC `result` message.
    #[error("FreeNAS API error: {reason}")]
    Rpc { code: Option<i32>, reason: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status of the failed call, if the appliance answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// `true` for 401/403 answers and rejected WebSocket logins.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403)) || matches!(self, Self::Auth(_))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
