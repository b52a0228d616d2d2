//! Scheduled scrubs: `/storage/scrub/`

use crate::error::Result;
use crate::request::{RawResponse, RequestManager};
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scrub {
    pub id: u64,
    /// Volume name; the appliance reports names but expects ids on write.
    pub scrub_volume: String,
    pub scrub_threshold: u32,
    #[serde(default)]
    pub scrub_description: String,
    pub scrub_minute: String,
    pub scrub_hour: String,
    pub scrub_daymonth: String,
    pub scrub_month: String,
    pub scrub_dayweek: String,
    pub scrub_enabled: bool,
}

/// Writable fields of a scrub schedule (cron-style fields).
#[derive(Debug, Clone, Serialize)]
pub struct ScrubFields {
    pub scrub_volume: u64,
    pub scrub_threshold: u32,
    pub scrub_description: String,
    pub scrub_minute: String,
    pub scrub_hour: String,
    pub scrub_daymonth: String,
    pub scrub_month: String,
    pub scrub_dayweek: String,
    pub scrub_enabled: bool,
}

#[async_trait]
pub trait ScrubApi: Send + Sync {
    async fn get_scrubs(&self, limit: u32, offset: u32) -> Result<Vec<Scrub>>;

    async fn create_scrub(&self, scrub: &ScrubFields) -> Result<Scrub>;

    async fn update_scrub(&self, scrub_id: u64, scrub: &ScrubFields) -> Result<Scrub>;

    async fn delete_scrub(&self, scrub_id: u64) -> Result<RawResponse>;
}

pub struct ScrubHandler {
    request_manager: Arc<RequestManager>,
}

impl ScrubHandler {
    pub fn new(request_manager: Arc<RequestManager>) -> Self {
        Self { request_manager }
    }
}

#[async_trait]
impl ScrubApi for ScrubHandler {
    async fn get_scrubs(&self, limit: u32, offset: u32) -> Result<Vec<Scrub>> {
        self.request_manager
            .request_json(
                "/storage/scrub/",
                Method::GET,
                &RequestManager::limit_offset_params(limit, offset),
            )
            .await
    }

    async fn create_scrub(&self, scrub: &ScrubFields) -> Result<Scrub> {
        self.request_manager
            .request_with_body_json("/storage/scrub/", Method::POST, scrub)
            .await
    }

    async fn update_scrub(&self, scrub_id: u64, scrub: &ScrubFields) -> Result<Scrub> {
        self.request_manager
            .request_with_body_json(&format!("/storage/scrub/{scrub_id}/"), Method::PUT, scrub)
            .await
    }

    async fn delete_scrub(&self, scrub_id: u64) -> Result<RawResponse> {
        self.request_manager
            .request(&format!("/storage/scrub/{scrub_id}/"), Method::DELETE, &[])
            .await
    }
}
