//! WebSocket (v2.0) API client

pub mod connection;
pub mod listener;
pub mod types;

pub use connection::WebsocketClient;
pub use listener::ConnectionListener;
pub use types::ConnectionState;
