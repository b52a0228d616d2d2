//! Message types of the appliance's WebSocket API.
//!
//! The endpoint speaks DDP framing: a `connect`/`connected` handshake, then
//! `method` calls answered by `result` messages carrying the same `id`.
//! The server may interleave `ping` messages (answered with `pong`) and
//! collection events, which are skipped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outgoing method call
#[derive(Debug, Serialize)]
pub struct RpcRequest {
    pub id: String,
    pub msg: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl RpcRequest {
    pub fn method(id: String, method: &str, params: Option<serde_json::Value>) -> Self {
        Self {
            id,
            msg: "method".to_string(),
            method: method.to_string(),
            params,
        }
    }
}

/// Any message sent by the server.
#[derive(Debug, Deserialize)]
pub struct ServerMessage {
    pub msg: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    #[serde(default)]
    pub error: Option<i32>,
    #[serde(default)]
    pub errname: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// DDP connect message
#[derive(Debug, Serialize)]
pub struct DdpConnect {
    pub msg: String,
    pub version: String,
    pub support: Vec<String>,
}

impl Default for DdpConnect {
    fn default() -> Self {
        Self {
            msg: "connect".to_string(),
            version: "1".to_string(),
            support: vec!["1".to_string()],
        }
    }
}

/// Reply to a server `ping`
#[derive(Debug, Serialize)]
pub struct DdpPong {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DdpPong {
    pub fn reply_to(id: Option<String>) -> Self {
        Self {
            msg: "pong".to_string(),
            id,
        }
    }
}

/// Lifecycle state of a [`WebsocketClient`](super::WebsocketClient).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
    /// Transient: the handshake failed or the socket closed unexpectedly.
    /// Always followed by `Disconnected`.
    Errored,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Disconnecting => "disconnecting",
            Self::Errored => "errored",
        };
        f.write_str(name)
    }
}
