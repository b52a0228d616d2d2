//! WebSocket Connection Management
//!
//! [`WebsocketClient`] owns at most one socket to the appliance's `/websocket`
//! endpoint. `connect`, `disconnect` and `call` are serialized by a single
//! mutex, so two concurrent `connect()`s never open two sockets.
//!
//! # Lifecycle
//!
//! ```text
//! Disconnected -> Connecting -> Connected -> Disconnecting -> Disconnected
//!                     |             |
//!                     +-> Errored <-+  (handshake failure / unexpected close)
//!                            |
//!                            +-> Disconnected
//! ```
//!
//! `connect()` while connected and `disconnect()` while disconnected return
//! `Ok(())` without any transition. There is no automatic reconnection.

use crate::config::{BasicAuthConfig, FreeNasConfig, WebsocketConfig};
use crate::error::{ClientError, Result};
use crate::websocket::listener::ConnectionListener;
use crate::websocket::types::{ConnectionState, DdpConnect, DdpPong, RpcRequest, ServerMessage};
use futures_util::{SinkExt, StreamExt};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, trace, warn};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

struct Connection {
    state: ConnectionState,
    stream: Option<WsStream>,
}

pub struct WebsocketClient {
    url: String,
    auth: Option<BasicAuthConfig>,
    verify_ssl: bool,
    connect_timeout: Duration,
    connection: Mutex<Connection>,
    listeners: RwLock<Vec<Arc<dyn ConnectionListener>>>,
    request_id: AtomicU64,
}

impl WebsocketClient {
    /// Client for the socket at `url`, logging in with `auth` when given.
    pub fn new(url: impl Into<String>, auth: Option<BasicAuthConfig>) -> Self {
        Self {
            url: url.into(),
            auth,
            verify_ssl: true,
            connect_timeout: Duration::from_secs(
                WebsocketConfig::default().connect_timeout_seconds,
            ),
            connection: Mutex::new(Connection {
                state: ConnectionState::Disconnected,
                stream: None,
            }),
            listeners: RwLock::new(Vec::new()),
            request_id: AtomicU64::new(0),
        }
    }

    /// Client for the appliance described by `freenas`, using its credentials
    /// and TLS settings.
    pub fn from_config(freenas: &FreeNasConfig, websocket: &WebsocketConfig) -> Self {
        let url = websocket
            .url
            .clone()
            .unwrap_or_else(|| freenas.websocket_url());

        let mut client = Self::new(url, freenas.basic_auth())
            .with_connect_timeout(Duration::from_secs(websocket.connect_timeout_seconds));
        client.verify_ssl = freenas.verify_ssl;
        client
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn add_listener(&self, listener: Arc<dyn ConnectionListener>) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    pub async fn state(&self) -> ConnectionState {
        self.connection.lock().await.state
    }

    /// Get next request ID
    fn next_id(&self) -> String {
        self.request_id.fetch_add(1, Ordering::SeqCst).to_string()
    }

    fn transition(&self, conn: &mut Connection, to: ConnectionState) {
        let from = conn.state;
        conn.state = to;
        info!("WebSocket {} -> {}", from, to);

        let listeners = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in &listeners {
            listener.on_state_changed(from, to);
        }
    }

    /// Drop the socket and walk through `Errored` to `Disconnected`.
    fn fail(&self, conn: &mut Connection) {
        conn.stream = None;
        self.transition(conn, ConnectionState::Errored);
        self.transition(conn, ConnectionState::Disconnected);
    }

    /// Open the socket, perform the DDP handshake and log in.
    pub async fn connect(&self) -> Result<()> {
        let mut conn = self.connection.lock().await;
        if conn.state == ConnectionState::Connected {
            debug!("Already connected to {}", self.url);
            return Ok(());
        }

        self.transition(&mut conn, ConnectionState::Connecting);

        match tokio::time::timeout(self.connect_timeout, self.open_session()).await {
            Ok(Ok(stream)) => {
                conn.stream = Some(stream);
                self.transition(&mut conn, ConnectionState::Connected);
                Ok(())
            }
            Ok(Err(e)) => {
                warn!("Connecting to {} failed: {}", self.url, e);
                self.fail(&mut conn);
                Err(e)
            }
            Err(_) => {
                warn!("Connecting to {} timed out", self.url);
                self.fail(&mut conn);
                Err(ClientError::Timeout {
                    timeout_secs: self.connect_timeout.as_secs(),
                })
            }
        }
    }

    /// Close the socket.
    pub async fn disconnect(&self) -> Result<()> {
        let mut conn = self.connection.lock().await;
        if conn.state == ConnectionState::Disconnected {
            debug!("Already disconnected from {}", self.url);
            return Ok(());
        }

        self.transition(&mut conn, ConnectionState::Disconnecting);
        if let Some(mut stream) = conn.stream.take() {
            // The server may already have dropped its side
            if let Err(e) = stream.close(None).await {
                debug!("Close handshake failed: {}", e);
            }
        }
        self.transition(&mut conn, ConnectionState::Disconnected);
        Ok(())
    }

    /// Call `method` on the open connection and decode its result into `T`.
    ///
    /// An RPC error payload fails with [`ClientError::Rpc`] and leaves the
    /// connection open; a broken socket moves the client to `Disconnected`.
    pub async fn call<T>(&self, method: &str, params: Option<serde_json::Value>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut conn = self.connection.lock().await;
        let Some(stream) = conn.stream.as_mut() else {
            return Err(ClientError::NotConnected);
        };

        let id = self.next_id();
        debug!("Calling {} (id {})", method, id);
        let request = RpcRequest::method(id.clone(), method, params);
        let outcome = send_and_receive(stream, request, &id).await;

        let response = match outcome {
            Ok(response) => response,
            Err(e @ (ClientError::WebSocket(_) | ClientError::ConnectionClosed)) => {
                warn!("WebSocket connection lost during {}: {}", method, e);
                self.fail(&mut conn);
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        if let Some(error) = response.error {
            return Err(ClientError::Rpc {
                code: error.error,
                reason: error
                    .reason
                    .or(error.errname)
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        let result = response.result.unwrap_or(serde_json::Value::Null);
        T::deserialize(&result).map_err(|e| ClientError::Deserialization {
            message: e.to_string(),
            body: result.to_string(),
        })
    }

    async fn open_session(&self) -> Result<WsStream> {
        let mut stream = self.connect_websocket().await?;
        handshake(&mut stream).await?;

        if let Some(auth) = &self.auth {
            self.authenticate(&mut stream, auth).await?;
        }

        Ok(stream)
    }

    /// Connect to WebSocket
    async fn connect_websocket(&self) -> Result<WsStream> {
        debug!("Connecting to {}", self.url);

        let (ws_stream, _) = if self.url.starts_with("wss") && !self.verify_ssl {
            // Custom TLS connector for self-signed certs
            let connector = native_tls::TlsConnector::builder()
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true)
                .build()
                .map_err(|e| ClientError::Config(e.to_string()))?;

            let connector = tokio_tungstenite::Connector::NativeTls(connector);
            tokio_tungstenite::connect_async_tls_with_config(&self.url, None, false, Some(connector))
                .await?
        } else {
            connect_async(&self.url).await?
        };

        Ok(ws_stream)
    }

    async fn authenticate(&self, stream: &mut WsStream, auth: &BasicAuthConfig) -> Result<()> {
        let id = self.next_id();
        let request = RpcRequest::method(
            id.clone(),
            "auth.login",
            Some(serde_json::json!([
                auth.username,
                auth.password.expose_secret()
            ])),
        );

        debug!("Sending auth request");
        let response = send_and_receive(stream, request, &id).await?;

        if let Some(error) = response.error {
            let reason = error.reason.unwrap_or_else(|| "Unknown error".to_string());
            return Err(ClientError::Auth(reason));
        }

        match response.result {
            Some(serde_json::Value::Bool(true)) => {
                info!("Authenticated to {} as {}", self.url, auth.username);
                Ok(())
            }
            _ => Err(ClientError::Auth("credentials rejected by FreeNAS".to_string())),
        }
    }
}

async fn send_text(stream: &mut WsStream, payload: &impl serde::Serialize) -> Result<()> {
    let json = serde_json::to_string(payload)?;
    trace!("-> {}", json);
    stream.send(Message::Text(json.into())).await?;
    Ok(())
}

/// Read the next server message, answering pings on the way.
async fn next_message(stream: &mut WsStream) -> Result<ServerMessage> {
    loop {
        let msg = match stream.next().await {
            Some(msg) => msg?,
            None => return Err(ClientError::ConnectionClosed),
        };

        match msg {
            Message::Text(text) => {
                trace!("<- {}", text);
                let message: ServerMessage = serde_json::from_str(&text)?;
                if message.msg == "ping" {
                    send_text(stream, &DdpPong::reply_to(message.id)).await?;
                    continue;
                }
                return Ok(message);
            }
            Message::Close(_) => return Err(ClientError::ConnectionClosed),
            _ => continue,
        }
    }
}

async fn handshake(stream: &mut WsStream) -> Result<()> {
    send_text(stream, &DdpConnect::default()).await?;

    let response = next_message(stream).await?;
    match response.msg.as_str() {
        "connected" => Ok(()),
        other => Err(ClientError::Rpc {
            code: None,
            reason: format!("unexpected DDP handshake response: {other}"),
        }),
    }
}

async fn send_and_receive(
    stream: &mut WsStream,
    request: RpcRequest,
    id: &str,
) -> Result<ServerMessage> {
    send_text(stream, &request).await?;

    loop {
        let message = next_message(stream).await?;
        if message.msg == "result" && message.id.as_deref() == Some(id) {
            return Ok(message);
        }
        trace!("Skipping {} message", message.msg);
    }
}
