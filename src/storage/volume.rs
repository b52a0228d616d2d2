//! ZFS volumes (pools): `/storage/volume/`

use crate::error::Result;
use crate::request::{RawResponse, RequestManager};
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Volume as reported by `GET /storage/volume/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    pub id: u64,
    pub vol_name: String,
    #[serde(default)]
    pub vol_guid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mountpoint: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub avail: Option<u64>,
    #[serde(default)]
    pub used: Option<u64>,
    #[serde(default)]
    pub used_pct: Option<String>,
    #[serde(default)]
    pub vol_encrypt: u32,
    #[serde(default)]
    pub is_decrypted: Option<bool>,
    #[serde(default)]
    pub is_upgraded: Option<bool>,
    /// Dataset tree below the volume root, left undecoded.
    #[serde(default)]
    pub children: Vec<serde_json::Value>,
}

#[async_trait]
pub trait VolumeApi: Send + Sync {
    /// Get a page of volumes
    async fn get_volumes(&self, limit: u32, offset: u32) -> Result<Vec<Volume>>;

    async fn get_volume(&self, volume_id: u64) -> Result<Volume>;

    /// Create a volume named `volume_name`
    async fn create_volume(&self, volume_name: &str) -> Result<RawResponse>;

    async fn delete_volume(&self, volume_id: u64) -> Result<RawResponse>;
}

pub struct VolumeHandler {
    request_manager: Arc<RequestManager>,
}

impl VolumeHandler {
    pub fn new(request_manager: Arc<RequestManager>) -> Self {
        Self { request_manager }
    }
}

#[async_trait]
impl VolumeApi for VolumeHandler {
    async fn get_volumes(&self, limit: u32, offset: u32) -> Result<Vec<Volume>> {
        self.request_manager
            .request_json(
                "/storage/volume/",
                Method::GET,
                &RequestManager::limit_offset_params(limit, offset),
            )
            .await
    }

    async fn get_volume(&self, volume_id: u64) -> Result<Volume> {
        self.request_manager
            .request_json(&format!("/storage/volume/{volume_id}/"), Method::GET, &[])
            .await
    }

    async fn create_volume(&self, volume_name: &str) -> Result<RawResponse> {
        let body = serde_json::json!({ "volumeName": volume_name });
        self.request_manager
            .request_with_body("/storage/volume/", Method::POST, &body)
            .await
    }

    async fn delete_volume(&self, volume_id: u64) -> Result<RawResponse> {
        self.request_manager
            .request(&format!("/storage/volume/{volume_id}/"), Method::DELETE, &[])
            .await
    }
}
