//! FreeNAS REST API Client
//!
//! [`FreeNasClient`] is the entry point for the v1.0 REST API. It owns the
//! shared [`RequestManager`] and exposes the storage and jail facades built on
//! top of it.
//!
//! # Example
//!
//! ```no_run
//! use freenas_api_client::config::{FreeNasConfig, DEFAULT_LIMIT, DEFAULT_OFFSET};
//! use freenas_api_client::storage::VolumeApi;
//! use freenas_api_client::FreeNasClient;
//! use secrecy::SecretString;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut config = FreeNasConfig::new("freenas.local");
//! config.username = Some("root".to_string());
//! config.password = Some(SecretString::from("secret"));
//!
//! let client = FreeNasClient::new(&config)?;
//! let volumes = client.storage().get_volumes(DEFAULT_LIMIT, DEFAULT_OFFSET).await?;
//! # Ok(())
//! # }
//! ```

use crate::config::FreeNasConfig;
use crate::error::Result;
use crate::jails::JailsManager;
use crate::request::RequestManager;
use crate::storage::StorageManager;
use std::sync::Arc;

/// Client for the FreeNAS v1.0 REST API
///
/// Cheap to clone; every clone shares the same `RequestManager`, so setter
/// calls on [`request_manager`](Self::request_manager) affect all of them.
#[derive(Clone)]
pub struct FreeNasClient {
    request_manager: Arc<RequestManager>,
    storage: StorageManager,
    jails: JailsManager,
}

impl FreeNasClient {
    pub fn new(config: &FreeNasConfig) -> Result<Self> {
        let request_manager = Arc::new(RequestManager::new(config)?);
        Ok(Self::with_request_manager(request_manager))
    }

    /// Build the facades on an existing request manager.
    pub fn with_request_manager(request_manager: Arc<RequestManager>) -> Self {
        Self {
            storage: StorageManager::new(request_manager.clone()),
            jails: JailsManager::new(request_manager.clone()),
            request_manager,
        }
    }

    pub fn request_manager(&self) -> &Arc<RequestManager> {
        &self.request_manager
    }

    pub fn storage(&self) -> &StorageManager {
        &self.storage
    }

    pub fn jails(&self) -> &JailsManager {
        &self.jails
    }
}
