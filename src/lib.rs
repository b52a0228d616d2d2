//! FreeNAS API Client
//!
//! Async Rust client for the FreeNAS storage appliance.
//!
//! # Overview
//!
//! Two API generations are covered:
//!
//! - the **REST API v1.0** (`https://{host}/api/v1.0/...`), wrapped as one
//!   capability trait per resource (volumes, datasets, disks, scrubs,
//!   snapshots, periodic snapshot tasks, jails, jail templates and jail
//!   mountpoints) with facades aggregating them;
//! - the **WebSocket API v2.0** (`wss://{host}/websocket`), exposed as a
//!   connection with an explicit lifecycle and a generic method call.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐                    ┌────────────────┐
//! │ FreeNasClient│─┬─ StorageManager ─┤                │   HTTPS + basic auth  ┌──────────┐
//! │              │ │                  │ RequestManager │ ◄───────────────────► │          │
//! │              │ └─ JailsManager ───┤                │                       │ FreeNAS  │
//! └──────────────┘                    └────────────────┘                       │          │
//! ┌────────────────┐                    DDP / JSON-RPC over WebSocket         │          │
//! │WebsocketClient │ ◄──────────────────────────────────────────────────────► │          │
//! └────────────────┘                                                          └──────────┘
//! ```
//!
//! # Modules
//!
//! - [`client`] - REST entry point
//! - [`request`] - base URL, authentication and request execution
//! - [`storage`] - storage resources and [`storage::StorageManager`]
//! - [`jails`] - jail resources and [`jails::JailsManager`]
//! - [`websocket`] - WebSocket client and listener
//! - [`config`] - Configuration management and shared constants
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use freenas_api_client::config::{Config, DEFAULT_LIMIT, DEFAULT_OFFSET};
//! use freenas_api_client::storage::SnapshotApi;
//! use freenas_api_client::FreeNasClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/Default.toml")?;
//!     let client = FreeNasClient::new(&config.freenas)?;
//!     for snapshot in client.storage().get_snapshots(DEFAULT_LIMIT, DEFAULT_OFFSET).await? {
//!         println!("{}", snapshot.fullname);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod jails;
pub mod request;
pub mod storage;
pub mod websocket;

pub use client::FreeNasClient;
pub use error::{ClientError, Result};
pub use websocket::WebsocketClient;
