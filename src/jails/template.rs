//! Jail templates: `/jails/templates/`

use crate::error::Result;
use crate::request::{RawResponse, RequestManager};
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: u64,
    pub jt_arch: String,
    /// Number of jails created from this template
    pub jt_instances: u64,
    pub jt_name: String,
    pub jt_os: String,
    pub jt_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateFields {
    pub jt_arch: String,
    pub jt_instances: u64,
    pub jt_name: String,
    pub jt_os: String,
    pub jt_url: String,
}

#[async_trait]
pub trait TemplateApi: Send + Sync {
    /// Get a page of templates
    async fn get_templates(&self, limit: u32, offset: u32) -> Result<Vec<Template>>;

    async fn create_template(&self, template: &TemplateFields) -> Result<Template>;

    async fn update_template(&self, template_id: u64, template: &TemplateFields)
        -> Result<Template>;

    async fn delete_template(&self, template_id: u64) -> Result<RawResponse>;
}

pub struct TemplateHandler {
    request_manager: Arc<RequestManager>,
}

impl TemplateHandler {
    pub fn new(request_manager: Arc<RequestManager>) -> Self {
        Self { request_manager }
    }
}

#[async_trait]
impl TemplateApi for TemplateHandler {
    async fn get_templates(&self, limit: u32, offset: u32) -> Result<Vec<Template>> {
        self.request_manager
            .request_json(
                "/jails/templates/",
                Method::GET,
                &RequestManager::limit_offset_params(limit, offset),
            )
            .await
    }

    async fn create_template(&self, template: &TemplateFields) -> Result<Template> {
        self.request_manager
            .request_with_body_json("/jails/templates/", Method::POST, template)
            .await
    }

    async fn update_template(
        &self,
        template_id: u64,
        template: &TemplateFields,
    ) -> Result<Template> {
        self.request_manager
            .request_with_body_json(
                &format!("/jails/templates/{template_id}/"),
                Method::PUT,
                template,
            )
            .await
    }

    async fn delete_template(&self, template_id: u64) -> Result<RawResponse> {
        self.request_manager
            .request(&format!("/jails/templates/{template_id}/"), Method::DELETE, &[])
            .await
    }
}
