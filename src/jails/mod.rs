//! Jail resources and the [`JailsManager`] facade.

pub mod jail;
pub mod mountpoint;
pub mod template;

use crate::error::Result;
use crate::request::{RawResponse, RequestManager};
use async_trait::async_trait;
use std::sync::Arc;

pub use jail::{Jail, JailApi, JailFields, JailHandler};
pub use mountpoint::{Mountpoint, MountpointApi, MountpointFields, MountpointHandler};
pub use template::{Template, TemplateApi, TemplateFields, TemplateHandler};

/// Forwards every jail-related call to the handler of its resource.
#[derive(Clone)]
pub struct JailsManager {
    jails: Arc<dyn JailApi>,
    mountpoints: Arc<dyn MountpointApi>,
    templates: Arc<dyn TemplateApi>,
}

impl JailsManager {
    pub fn new(request_manager: Arc<RequestManager>) -> Self {
        Self {
            jails: Arc::new(JailHandler::new(request_manager.clone())),
            mountpoints: Arc::new(MountpointHandler::new(request_manager.clone())),
            templates: Arc::new(TemplateHandler::new(request_manager)),
        }
    }

    pub fn with_jail_api(mut self, api: Arc<dyn JailApi>) -> Self {
        self.jails = api;
        self
    }

    pub fn with_mountpoint_api(mut self, api: Arc<dyn MountpointApi>) -> Self {
        self.mountpoints = api;
        self
    }

    pub fn with_template_api(mut self, api: Arc<dyn TemplateApi>) -> Self {
        self.templates = api;
        self
    }
}

#[async_trait]
impl JailApi for JailsManager {
    async fn get_jails(&self, limit: u32, offset: u32) -> Result<Vec<Jail>> {
        self.jails.get_jails(limit, offset).await
    }

    async fn create_jail(&self, jail: &JailFields) -> Result<Jail> {
        self.jails.create_jail(jail).await
    }

    async fn delete_jail(&self, jail_id: u64) -> Result<RawResponse> {
        self.jails.delete_jail(jail_id).await
    }

    async fn start_jail(&self, jail_id: u64) -> Result<RawResponse> {
        self.jails.start_jail(jail_id).await
    }

    async fn stop_jail(&self, jail_id: u64) -> Result<RawResponse> {
        self.jails.stop_jail(jail_id).await
    }

    async fn restart_jail(&self, jail_id: u64) -> Result<RawResponse> {
        self.jails.restart_jail(jail_id).await
    }
}

#[async_trait]
impl MountpointApi for JailsManager {
    async fn get_mountpoints(&self, limit: u32, offset: u32) -> Result<Vec<Mountpoint>> {
        self.mountpoints.get_mountpoints(limit, offset).await
    }

    async fn create_mountpoint(&self, mountpoint: &MountpointFields) -> Result<Mountpoint> {
        self.mountpoints.create_mountpoint(mountpoint).await
    }

    async fn update_mountpoint(
        &self,
        mountpoint_id: u64,
        mountpoint: &MountpointFields,
    ) -> Result<Mountpoint> {
        self.mountpoints
            .update_mountpoint(mountpoint_id, mountpoint)
            .await
    }

    async fn delete_mountpoint(&self, mountpoint_id: u64) -> Result<RawResponse> {
        self.mountpoints.delete_mountpoint(mountpoint_id).await
    }
}

#[async_trait]
impl TemplateApi for JailsManager {
    async fn get_templates(&self, limit: u32, offset: u32) -> Result<Vec<Template>> {
        self.templates.get_templates(limit, offset).await
    }

    async fn create_template(&self, template: &TemplateFields) -> Result<Template> {
        self.templates.create_template(template).await
    }

    async fn update_template(
        &self,
        template_id: u64,
        template: &TemplateFields,
    ) -> Result<Template> {
        self.templates.update_template(template_id, template).await
    }

    async fn delete_template(&self, template_id: u64) -> Result<RawResponse> {
        self.templates.delete_template(template_id).await
    }
}
