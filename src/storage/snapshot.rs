//! ZFS snapshots: `/storage/snapshot/`

use crate::error::Result;
use crate::request::{encode_path, RawResponse, RequestManager};
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// `dataset@name`, also used as the id in delete URLs.
    pub fullname: String,
    pub name: String,
    pub filesystem: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub mostrecent: bool,
    #[serde(default)]
    pub parent_type: Option<String>,
    #[serde(default)]
    pub refer: Option<String>,
    #[serde(default)]
    pub used: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSnapshot {
    pub dataset: String,
    pub name: String,
}

#[async_trait]
pub trait SnapshotApi: Send + Sync {
    async fn get_snapshots(&self, limit: u32, offset: u32) -> Result<Vec<Snapshot>>;

    async fn create_snapshot(&self, snapshot: &NewSnapshot) -> Result<Snapshot>;

    /// Delete the snapshot `dataset@name`
    async fn delete_snapshot(&self, fullname: &str) -> Result<RawResponse>;
}

pub struct SnapshotHandler {
    request_manager: Arc<RequestManager>,
}

impl SnapshotHandler {
    pub fn new(request_manager: Arc<RequestManager>) -> Self {
        Self { request_manager }
    }
}

#[async_trait]
impl SnapshotApi for SnapshotHandler {
    async fn get_snapshots(&self, limit: u32, offset: u32) -> Result<Vec<Snapshot>> {
        self.request_manager
            .request_json(
                "/storage/snapshot/",
                Method::GET,
                &RequestManager::limit_offset_params(limit, offset),
            )
            .await
    }

    async fn create_snapshot(&self, snapshot: &NewSnapshot) -> Result<Snapshot> {
        self.request_manager
            .request_with_body_json("/storage/snapshot/", Method::POST, snapshot)
            .await
    }

    async fn delete_snapshot(&self, fullname: &str) -> Result<RawResponse> {
        self.request_manager
            .request(
                &format!("/storage/snapshot/{}/", encode_path(fullname)),
                Method::DELETE,
                &[],
            )
            .await
    }
}
