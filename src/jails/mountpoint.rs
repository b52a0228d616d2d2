//! Jail mountpoints (nullfs mounts into a jail): `/jails/mountpoints/`

use crate::error::Result;
use crate::request::{RawResponse, RequestManager};
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mountpoint {
    pub id: u64,
    /// Name of the jail the mountpoint belongs to
    pub jail: String,
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub mounted: bool,
    #[serde(default)]
    pub readonly: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MountpointFields {
    pub jail: String,
    pub source: String,
    pub destination: String,
    pub mounted: bool,
    pub readonly: bool,
}

#[async_trait]
pub trait MountpointApi: Send + Sync {
    async fn get_mountpoints(&self, limit: u32, offset: u32) -> Result<Vec<Mountpoint>>;

    async fn create_mountpoint(&self, mountpoint: &MountpointFields) -> Result<Mountpoint>;

    async fn update_mountpoint(
        &self,
        mountpoint_id: u64,
        mountpoint: &MountpointFields,
    ) -> Result<Mountpoint>;

    async fn delete_mountpoint(&self, mountpoint_id: u64) -> Result<RawResponse>;
}

pub struct MountpointHandler {
    request_manager: Arc<RequestManager>,
}

impl MountpointHandler {
    pub fn new(request_manager: Arc<RequestManager>) -> Self {
        Self { request_manager }
    }
}

#[async_trait]
impl MountpointApi for MountpointHandler {
    async fn get_mountpoints(&self, limit: u32, offset: u32) -> Result<Vec<Mountpoint>> {
        self.request_manager
            .request_json(
                "/jails/mountpoints/",
                Method::GET,
                &RequestManager::limit_offset_params(limit, offset),
            )
            .await
    }

    async fn create_mountpoint(&self, mountpoint: &MountpointFields) -> Result<Mountpoint> {
        self.request_manager
            .request_with_body_json("/jails/mountpoints/", Method::POST, mountpoint)
            .await
    }

    async fn update_mountpoint(
        &self,
        mountpoint_id: u64,
        mountpoint: &MountpointFields,
    ) -> Result<Mountpoint> {
        self.request_manager
            .request_with_body_json(
                &format!("/jails/mountpoints/{mountpoint_id}/"),
                Method::PUT,
                mountpoint,
            )
            .await
    }

    async fn delete_mountpoint(&self, mountpoint_id: u64) -> Result<RawResponse> {
        self.request_manager
            .request(
                &format!("/jails/mountpoints/{mountpoint_id}/"),
                Method::DELETE,
                &[],
            )
            .await
    }
}
