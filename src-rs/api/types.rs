use async_trait::async_trait;

use crate::error::SyncError;
use crate::task::{Task, TaskId, TaskInput, TaskStatus};

/// The remote task collection, as seen by the client.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `GET /tasks`, constrained to one status when given.
    async fn list(&self, status: Option<TaskStatus>) -> Result<Vec<Task>, SyncError>;
    async fn get(&self, id: &TaskId) -> Result<Task, SyncError>;
    async fn create(&self, input: &TaskInput) -> Result<Task, SyncError>;
    async fn update(&self, id: &TaskId, input: &TaskInput) -> Result<Task, SyncError>;
    async fn delete(&self, id: &TaskId) -> Result<(), SyncError>;
}
