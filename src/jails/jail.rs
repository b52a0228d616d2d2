//! Jails: `/jails/jails/`

use crate::error::Result;
use crate::request::{RawResponse, RequestManager};
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jail {
    pub id: u64,
    pub jail_host: String,
    #[serde(default)]
    pub jail_type: Option<String>,
    #[serde(default)]
    pub jail_status: Option<String>,
    #[serde(default)]
    pub jail_ipv4: Option<String>,
    #[serde(default)]
    pub jail_ipv4_netmask: Option<String>,
    #[serde(default)]
    pub jail_defaultrouter_ipv4: Option<String>,
    #[serde(default)]
    pub jail_mac: Option<String>,
    #[serde(default)]
    pub jail_flags: Option<String>,
    #[serde(default)]
    pub jail_autostart: bool,
    #[serde(default)]
    pub jail_vnet: bool,
    #[serde(default)]
    pub jail_nat: bool,
}

/// Payload for creating a jail; unset options take the appliance defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JailFields {
    pub jail_host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jail_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jail_ipv4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jail_ipv4_netmask: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jail_defaultrouter_ipv4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jail_mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jail_flags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jail_autostart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jail_vnet: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jail_nat: Option<bool>,
}

#[async_trait]
pub trait JailApi: Send + Sync {
    async fn get_jails(&self, limit: u32, offset: u32) -> Result<Vec<Jail>>;

    async fn create_jail(&self, jail: &JailFields) -> Result<Jail>;

    async fn delete_jail(&self, jail_id: u64) -> Result<RawResponse>;

    async fn start_jail(&self, jail_id: u64) -> Result<RawResponse>;

    async fn stop_jail(&self, jail_id: u64) -> Result<RawResponse>;

    async fn restart_jail(&self, jail_id: u64) -> Result<RawResponse>;
}

pub struct JailHandler {
    request_manager: Arc<RequestManager>,
}

impl JailHandler {
    pub fn new(request_manager: Arc<RequestManager>) -> Self {
        Self { request_manager }
    }

    async fn jail_action(&self, jail_id: u64, action: &str) -> Result<RawResponse> {
        self.request_manager
            .request(&format!("/jails/jails/{jail_id}/{action}/"), Method::POST, &[])
            .await
    }
}

#[async_trait]
impl JailApi for JailHandler {
    async fn get_jails(&self, limit: u32, offset: u32) -> Result<Vec<Jail>> {
        self.request_manager
            .request_json(
                "/jails/jails/",
                Method::GET,
                &RequestManager::limit_offset_params(limit, offset),
            )
            .await
    }

    async fn create_jail(&self, jail: &JailFields) -> Result<Jail> {
        self.request_manager
            .request_with_body_json("/jails/jails/", Method::POST, jail)
            .await
    }

    async fn delete_jail(&self, jail_id: u64) -> Result<RawResponse> {
        self.request_manager
            .request(&format!("/jails/jails/{jail_id}/"), Method::DELETE, &[])
            .await
    }

    async fn start_jail(&self, jail_id: u64) -> Result<RawResponse> {
        self.jail_action(jail_id, "start").await
    }

    async fn stop_jail(&self, jail_id: u64) -> Result<RawResponse> {
        self.jail_action(jail_id, "stop").await
    }

    async fn restart_jail(&self, jail_id: u64) -> Result<RawResponse> {
        self.jail_action(jail_id, "restart").await
    }
}
