//! Periodic snapshot tasks: `/storage/task/`

use crate::error::Result;
use crate::request::{RawResponse, RequestManager};
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub task_filesystem: String,
    pub task_recursive: bool,
    pub task_ret_count: u32,
    pub task_ret_unit: String,
    /// Minutes between snapshots
    pub task_interval: u32,
    pub task_begin: String,
    pub task_end: String,
    pub task_enabled: bool,
    #[serde(default)]
    pub task_repeat_unit: Option<String>,
    #[serde(default)]
    pub task_byweekday: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskFields {
    pub task_filesystem: String,
    pub task_recursive: bool,
    pub task_ret_count: u32,
    pub task_ret_unit: String,
    pub task_interval: u32,
    pub task_begin: String,
    pub task_end: String,
    pub task_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_repeat_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_byweekday: Option<String>,
}

#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn get_tasks(&self, limit: u32, offset: u32) -> Result<Vec<Task>>;

    async fn create_task(&self, task: &TaskFields) -> Result<Task>;

    async fn update_task(&self, task_id: u64, task: &TaskFields) -> Result<Task>;

    async fn delete_task(&self, task_id: u64) -> Result<RawResponse>;
}

pub struct TaskHandler {
    request_manager: Arc<RequestManager>,
}

impl TaskHandler {
    pub fn new(request_manager: Arc<RequestManager>) -> Self {
        Self { request_manager }
    }
}

#[async_trait]
impl TaskApi for TaskHandler {
    async fn get_tasks(&self, limit: u32, offset: u32) -> Result<Vec<Task>> {
        self.request_manager
            .request_json(
                "/storage/task/",
                Method::GET,
                &RequestManager::limit_offset_params(limit, offset),
            )
            .await
    }

    async fn create_task(&self, task: &TaskFields) -> Result<Task> {
        self.request_manager
            .request_with_body_json("/storage/task/", Method::POST, task)
            .await
    }

    async fn update_task(&self, task_id: u64, task: &TaskFields) -> Result<Task> {
        self.request_manager
            .request_with_body_json(&format!("/storage/task/{task_id}/"), Method::PUT, task)
            .await
    }

    async fn delete_task(&self, task_id: u64) -> Result<RawResponse> {
        self.request_manager
            .request(&format!("/storage/task/{task_id}/"), Method::DELETE, &[])
            .await
    }
}
