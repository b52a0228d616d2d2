//! Physical disks: `/storage/disk/`
//!
//! Disks are discovered by the appliance, so there is no create or delete.

use crate::error::Result;
use crate::request::{encode_path, RequestManager};
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disk {
    pub disk_identifier: String,
    pub disk_name: String,
    #[serde(default)]
    pub disk_serial: Option<String>,
    #[serde(default)]
    pub disk_size: Option<String>,
    #[serde(default)]
    pub disk_description: Option<String>,
    #[serde(default)]
    pub disk_multipath_name: Option<String>,
    #[serde(default)]
    pub disk_multipath_member: Option<String>,
    #[serde(default)]
    pub disk_transfermode: Option<String>,
    #[serde(default)]
    pub disk_hddstandby: Option<String>,
    #[serde(default)]
    pub disk_advpowermgmt: Option<String>,
    #[serde(default)]
    pub disk_acousticlevel: Option<String>,
    #[serde(default)]
    pub disk_togglesmart: Option<bool>,
    #[serde(default)]
    pub disk_smartoptions: Option<String>,
}

/// Writable disk settings; `None` leaves a setting untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_hddstandby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_advpowermgmt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_acousticlevel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_togglesmart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_smartoptions: Option<String>,
}

#[async_trait]
pub trait DiskApi: Send + Sync {
    async fn get_disks(&self, limit: u32, offset: u32) -> Result<Vec<Disk>>;

    /// Update the settings of the disk identified by `disk_identifier`
    async fn update_disk(&self, disk_identifier: &str, update: &DiskUpdate) -> Result<Disk>;
}

pub struct DiskHandler {
    request_manager: Arc<RequestManager>,
}

impl DiskHandler {
    pub fn new(request_manager: Arc<RequestManager>) -> Self {
        Self { request_manager }
    }
}

#[async_trait]
impl DiskApi for DiskHandler {
    async fn get_disks(&self, limit: u32, offset: u32) -> Result<Vec<Disk>> {
        self.request_manager
            .request_json(
                "/storage/disk/",
                Method::GET,
                &RequestManager::limit_offset_params(limit, offset),
            )
            .await
    }

    async fn update_disk(&self, disk_identifier: &str, update: &DiskUpdate) -> Result<Disk> {
        self.request_manager
            .request_with_body_json(
                &format!("/storage/disk/{}/", encode_path(disk_identifier)),
                Method::PUT,
                update,
            )
            .await
    }
}
