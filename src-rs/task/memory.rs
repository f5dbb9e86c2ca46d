use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use super::types::{Task, TaskId, TaskInput, TaskStatus};
use crate::api::TaskApi;
use crate::error::SyncError;

static COUNTER: AtomicUsize = AtomicUsize::new(1);

/// One request as received by [`MemoryTaskApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    List(Option<TaskStatus>),
    Get(TaskId),
    Create(TaskInput),
    Update(TaskId, TaskInput),
    Delete(TaskId),
}

impl ApiCall {
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            ApiCall::Create(_) | ApiCall::Update(_, _) | ApiCall::Delete(_)
        )
    }
}

/// In-process stand-in for the remote service. Newest tasks are listed first,
/// ids and timestamps are assigned here, and every call is journaled.
#[derive(Default)]
pub struct MemoryTaskApi {
    tasks: RwLock<Vec<Task>>,
    calls: Mutex<Vec<ApiCall>>,
    fail_next: Mutex<Option<SyncError>>,
}

impl MemoryTaskApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
            ..Self::default()
        }
    }

    /// The next call, whatever it is, fails with `err` instead of running.
    pub fn fail_next(&self, err: SyncError) {
        if let Ok(mut slot) = self.fail_next.lock() {
            *slot = Some(err);
        }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn clear_calls(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }

    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.read().map(|tasks| tasks.clone()).unwrap_or_default()
    }

    fn record(&self, call: ApiCall) -> Result<(), SyncError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match self.fail_next.lock() {
            Ok(mut slot) => match slot.take() {
                Some(err) => Err(err),
                None => Ok(()),
            },
            Err(_) => Err(poisoned()),
        }
    }
}

#[async_trait]
impl TaskApi for MemoryTaskApi {
    async fn list(&self, status: Option<TaskStatus>) -> Result<Vec<Task>, SyncError> {
        self.record(ApiCall::List(status.clone()))?;
        let tasks = self.tasks.read().map_err(|_| poisoned())?;
        Ok(tasks
            .iter()
            .rev()
            .filter(|task| status.as_ref().map_or(true, |s| &task.status == s))
            .cloned()
            .collect())
    }

    async fn get(&self, id: &TaskId) -> Result<Task, SyncError> {
        self.record(ApiCall::Get(id.clone()))?;
        let tasks = self.tasks.read().map_err(|_| poisoned())?;
        tasks
            .iter()
            .find(|task| &task.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create(&self, input: &TaskInput) -> Result<Task, SyncError> {
        self.record(ApiCall::Create(input.clone()))?;
        validate(input)?;
        let task = Task {
            id: next_id(),
            title: input.title.clone(),
            description: input.description.clone(),
            status: input.status.clone(),
            created_at: Utc::now(),
        };
        self.tasks
            .write()
            .map_err(|_| poisoned())?
            .push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: &TaskId, input: &TaskInput) -> Result<Task, SyncError> {
        self.record(ApiCall::Update(id.clone(), input.clone()))?;
        validate(input)?;
        let mut tasks = self.tasks.write().map_err(|_| poisoned())?;
        let task = tasks
            .iter_mut()
            .find(|task| &task.id == id)
            .ok_or_else(not_found)?;
        task.title = input.title.clone();
        task.description = input.description.clone();
        task.status = input.status.clone();
        Ok(task.clone())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), SyncError> {
        self.record(ApiCall::Delete(id.clone()))?;
        let mut tasks = self.tasks.write().map_err(|_| poisoned())?;
        let before = tasks.len();
        tasks.retain(|task| &task.id != id);
        if tasks.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}

fn validate(input: &TaskInput) -> Result<(), SyncError> {
    if input.title.trim().is_empty() {
        return Err(SyncError::rejected("title required"));
    }
    Ok(())
}

fn not_found() -> SyncError {
    SyncError::rejected("Task not found")
}

fn poisoned() -> SyncError {
    SyncError::Transport("task store lock poisoned".to_string())
}

fn next_id() -> TaskId {
    let count = COUNTER.fetch_add(1, Ordering::SeqCst);
    TaskId::new(format!("task_{}_{}", Utc::now().timestamp_millis(), count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_newest_first_and_filters_by_status() {
        let api = MemoryTaskApi::new();
        api.create(&TaskInput::new("first", "", TaskStatus::Pending))
            .await
            .unwrap();
        api.create(&TaskInput::new("second", "", TaskStatus::Completed))
            .await
            .unwrap();

        let all = api.list(None).await.unwrap();
        assert_eq!(
            all.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
            vec!["second", "first"]
        );
        let done = api.list(Some(TaskStatus::Completed)).await.unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].title, "second");
    }

    #[tokio::test]
    async fn update_keeps_id_and_created_at() {
        let api = MemoryTaskApi::new();
        let created = api
            .create(&TaskInput::new("a", "", TaskStatus::Pending))
            .await
            .unwrap();
        let updated = api
            .update(&created.id, &TaskInput::new("b", "d", TaskStatus::InProgress))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "b");
    }

    #[tokio::test]
    async fn empty_title_is_rejected() {
        let api = MemoryTaskApi::new();
        let err = api
            .create(&TaskInput::new("  ", "", TaskStatus::Pending))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "title required");
        assert!(api.snapshot().is_empty());
    }

    #[tokio::test]
    async fn injected_failure_applies_once() {
        let api = MemoryTaskApi::new();
        api.fail_next(SyncError::Transport("down".to_string()));
        assert!(api.list(None).await.is_err());
        assert!(api.list(None).await.is_ok());
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn deleting_unknown_id_is_rejected() {
        let api = MemoryTaskApi::new();
        let err = api.delete(&TaskId::new("missing")).await.unwrap_err();
        assert_eq!(err, SyncError::rejected("Task not found"));
    }
}
