//! Datasets below a volume: `/storage/volume/{volume}/datasets/`

use crate::error::Result;
use crate::request::{encode_path, RawResponse, RequestManager};
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    #[serde(default)]
    pub pool: Option<String>,
    #[serde(default)]
    pub mountpoint: Option<String>,
    #[serde(default)]
    pub avail: Option<u64>,
    #[serde(default)]
    pub used: Option<u64>,
    #[serde(default)]
    pub refer: Option<u64>,
    #[serde(default)]
    pub recordsize: Option<u64>,
    #[serde(default)]
    pub quota: Option<u64>,
    #[serde(default)]
    pub refquota: Option<u64>,
    #[serde(default)]
    pub compression: Option<String>,
    #[serde(default)]
    pub dedup: Option<String>,
    #[serde(default)]
    pub atime: Option<String>,
    #[serde(default)]
    pub readonly: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

/// Payload for creating a dataset. Unset options inherit from the parent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewDataset {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refquota: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recordsize: Option<String>,
}

impl NewDataset {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[async_trait]
pub trait DatasetApi: Send + Sync {
    /// Get a page of datasets of `volume`
    async fn get_datasets(&self, volume: &str, limit: u32, offset: u32) -> Result<Vec<Dataset>>;

    async fn create_dataset(&self, volume: &str, dataset: &NewDataset) -> Result<Dataset>;

    async fn delete_dataset(&self, volume: &str, dataset_name: &str) -> Result<RawResponse>;
}

pub struct DatasetHandler {
    request_manager: Arc<RequestManager>,
}

impl DatasetHandler {
    pub fn new(request_manager: Arc<RequestManager>) -> Self {
        Self { request_manager }
    }
}

#[async_trait]
impl DatasetApi for DatasetHandler {
    async fn get_datasets(&self, volume: &str, limit: u32, offset: u32) -> Result<Vec<Dataset>> {
        self.request_manager
            .request_json(
                &format!("/storage/volume/{}/datasets/", encode_path(volume)),
                Method::GET,
                &RequestManager::limit_offset_params(limit, offset),
            )
            .await
    }

    async fn create_dataset(&self, volume: &str, dataset: &NewDataset) -> Result<Dataset> {
        self.request_manager
            .request_with_body_json(
                &format!("/storage/volume/{}/datasets/", encode_path(volume)),
                Method::POST,
                dataset,
            )
            .await
    }

    async fn delete_dataset(&self, volume: &str, dataset_name: &str) -> Result<RawResponse> {
        self.request_manager
            .request(
                &format!(
                    "/storage/volume/{}/datasets/{}/",
                    encode_path(volume),
                    encode_path(dataset_name)
                ),
                Method::DELETE,
                &[],
            )
            .await
    }
}
