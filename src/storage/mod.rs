//! Storage resources and the [`StorageManager`] facade.
//!
//! `StorageManager` holds one handler per storage resource and implements
//! every storage trait by forwarding to it. [`StorageManager::new`] wires the
//! default handlers on a shared [`RequestManager`]; the `with_*_api` methods
//! swap in another implementation for a single resource.

pub mod dataset;
pub mod disk;
pub mod scrub;
pub mod snapshot;
pub mod task;
pub mod volume;

use crate::error::Result;
use crate::request::{RawResponse, RequestManager};
use async_trait::async_trait;
use std::sync::Arc;

pub use dataset::{Dataset, DatasetApi, DatasetHandler, NewDataset};
pub use disk::{Disk, DiskApi, DiskHandler, DiskUpdate};
pub use scrub::{Scrub, ScrubApi, ScrubFields, ScrubHandler};
pub use snapshot::{NewSnapshot, Snapshot, SnapshotApi, SnapshotHandler};
pub use task::{Task, TaskApi, TaskFields, TaskHandler};
pub use volume::{Volume, VolumeApi, VolumeHandler};

#[derive(Clone)]
pub struct StorageManager {
    datasets: Arc<dyn DatasetApi>,
    disks: Arc<dyn DiskApi>,
    scrubs: Arc<dyn ScrubApi>,
    snapshots: Arc<dyn SnapshotApi>,
    tasks: Arc<dyn TaskApi>,
    volumes: Arc<dyn VolumeApi>,
}

impl StorageManager {
    pub fn new(request_manager: Arc<RequestManager>) -> Self {
        Self {
            datasets: Arc::new(DatasetHandler::new(request_manager.clone())),
            disks: Arc::new(DiskHandler::new(request_manager.clone())),
            scrubs: Arc::new(ScrubHandler::new(request_manager.clone())),
            snapshots: Arc::new(SnapshotHandler::new(request_manager.clone())),
            tasks: Arc::new(TaskHandler::new(request_manager.clone())),
            volumes: Arc::new(VolumeHandler::new(request_manager)),
        }
    }

    pub fn with_dataset_api(mut self, api: Arc<dyn DatasetApi>) -> Self {
        self.datasets = api;
        self
    }

    pub fn with_disk_api(mut self, api: Arc<dyn DiskApi>) -> Self {
        self.disks = api;
        self
    }

    pub fn with_scrub_api(mut self, api: Arc<dyn ScrubApi>) -> Self {
        self.scrubs = api;
        self
    }

    pub fn with_snapshot_api(mut self, api: Arc<dyn SnapshotApi>) -> Self {
        self.snapshots = api;
        self
    }

    pub fn with_task_api(mut self, api: Arc<dyn TaskApi>) -> Self {
        self.tasks = api;
        self
    }

    pub fn with_volume_api(mut self, api: Arc<dyn VolumeApi>) -> Self {
        self.volumes = api;
        self
    }
}

#[async_trait]
impl DatasetApi for StorageManager {
    async fn get_datasets(&self, volume: &str, limit: u32, offset: u32) -> Result<Vec<Dataset>> {
        self.datasets.get_datasets(volume, limit, offset).await
    }

    async fn create_dataset(&self, volume: &str, dataset: &NewDataset) -> Result<Dataset> {
        self.datasets.create_dataset(volume, dataset).await
    }

    async fn delete_dataset(&self, volume: &str, dataset_name: &str) -> Result<RawResponse> {
        self.datasets.delete_dataset(volume, dataset_name).await
    }
}

#[async_trait]
impl DiskApi for StorageManager {
    async fn get_disks(&self, limit: u32, offset: u32) -> Result<Vec<Disk>> {
        self.disks.get_disks(limit, offset).await
    }

    async fn update_disk(&self, disk_identifier: &str, update: &DiskUpdate) -> Result<Disk> {
        self.disks.update_disk(disk_identifier, update).await
    }
}

#[async_trait]
impl ScrubApi for StorageManager {
    async fn get_scrubs(&self, limit: u32, offset: u32) -> Result<Vec<Scrub>> {
        self.scrubs.get_scrubs(limit, offset).await
    }

    async fn create_scrub(&self, scrub: &ScrubFields) -> Result<Scrub> {
        self.scrubs.create_scrub(scrub).await
    }

    async fn update_scrub(&self, scrub_id: u64, scrub: &ScrubFields) -> Result<Scrub> {
        self.scrubs.update_scrub(scrub_id, scrub).await
    }

    async fn delete_scrub(&self, scrub_id: u64) -> Result<RawResponse> {
        self.scrubs.delete_scrub(scrub_id).await
    }
}

#[async_trait]
impl SnapshotApi for StorageManager {
    async fn get_snapshots(&self, limit: u32, offset: u32) -> Result<Vec<Snapshot>> {
        self.snapshots.get_snapshots(limit, offset).await
    }

    async fn create_snapshot(&self, snapshot: &NewSnapshot) -> Result<Snapshot> {
        self.snapshots.create_snapshot(snapshot).await
    }

    async fn delete_snapshot(&self, fullname: &str) -> Result<RawResponse> {
        self.snapshots.delete_snapshot(fullname).await
    }
}

#[async_trait]
impl TaskApi for StorageManager {
    async fn get_tasks(&self, limit: u32, offset: u32) -> Result<Vec<Task>> {
        self.tasks.get_tasks(limit, offset).await
    }

    async fn create_task(&self, task: &TaskFields) -> Result<Task> {
        self.tasks.create_task(task).await
    }

    async fn update_task(&self, task_id: u64, task: &TaskFields) -> Result<Task> {
        self.tasks.update_task(task_id, task).await
    }

    async fn delete_task(&self, task_id: u64) -> Result<RawResponse> {
        self.tasks.delete_task(task_id).await
    }
}

#[async_trait]
impl VolumeApi for StorageManager {
    async fn get_volumes(&self, limit: u32, offset: u32) -> Result<Vec<Volume>> {
        self.volumes.get_volumes(limit, offset).await
    }

    async fn get_volume(&self, volume_id: u64) -> Result<Volume> {
        self.volumes.get_volume(volume_id).await
    }

    async fn create_volume(&self, volume_name: &str) -> Result<RawResponse> {
        self.volumes.create_volume(volume_name).await
    }

    async fn delete_volume(&self, volume_id: u64) -> Result<RawResponse> {
        self.volumes.delete_volume(volume_id).await
    }
}
