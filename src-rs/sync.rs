use std::time::Duration;

use tracing::{debug, info, warn};

use crate::api::TaskApi;
use crate::config::ClientConfig;
use crate::error::SyncError;
use crate::session::SessionState;
use crate::task::{Filter, TaskId, TaskInput};
use crate::ui::{FormKind, ListContent, Notification, SubmitMode, TaskUi};

pub const DELETE_QUESTION: &str = "Are you sure you want to delete this task?";

/// Keeps the rendered task list in step with the remote collection.
///
/// Every operation catches its own failures: they are logged and shown
/// through the UI, never returned. Operations take `&mut self`, so on a
/// single event loop they run one after another and the latest list request
/// is always the one left on screen.
pub struct TaskSyncClient<A, U> {
    api: A,
    ui: U,
    session: SessionState,
    notification_ttl: Duration,
}

impl<A: TaskApi, U: TaskUi> TaskSyncClient<A, U> {
    pub fn new(api: A, ui: U) -> Self {
        Self::with_config(api, ui, &ClientConfig::default())
    }

    pub fn with_config(api: A, ui: U, cfg: &ClientConfig) -> Self {
        Self {
            api,
            ui,
            session: SessionState::new(),
            notification_ttl: cfg.notification_ttl,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub async fn load_tasks(&mut self) {
        let filter = self.session.current_filter().clone();
        self.ui.render_list(&ListContent::Loading);
        match self.api.list(filter.status()).await {
            Ok(tasks) if tasks.is_empty() => self.ui.render_list(&ListContent::Empty),
            Ok(tasks) => {
                debug!(count = tasks.len(), filter = %filter, "tasks loaded");
                self.ui.render_list(&ListContent::Tasks(tasks));
            }
            Err(err) => {
                warn!(error = %err, filter = %filter, "failed to load tasks");
                self.ui.render_list(&ListContent::Failed);
            }
        }
    }

    /// Creates a task, or updates the one under edit in `form`.
    pub async fn submit(&mut self, form: FormKind, values: TaskInput) {
        let target = self.session.editing_in(form).cloned();
        match (form, target) {
            (FormKind::Primary, None) => self.create(values).await,
            (_, Some(id)) => self.update(form, id, values).await,
            (FormKind::Modal, None) => {
                self.notify_error("Select a task to edit first");
            }
        }
    }

    async fn create(&mut self, values: TaskInput) {
        match self.api.create(&values).await {
            Ok(task) => {
                info!(id = %task.id, "task created");
                self.notify_success("Task added successfully!");
                self.ui.reset(FormKind::Primary);
                self.load_tasks().await;
            }
            Err(err) => self.report("Failed to save task", &err),
        }
    }

    async fn update(&mut self, form: FormKind, id: TaskId, values: TaskInput) {
        match self.api.update(&id, &values).await {
            Ok(task) => {
                info!(id = %task.id, "task updated");
                self.notify_success("Task updated successfully!");
                self.end_edit();
                self.load_tasks().await;
            }
            Err(err) => {
                let prefix = match form {
                    FormKind::Primary => "Failed to save task",
                    FormKind::Modal => "Failed to update task",
                };
                self.report(prefix, &err);
            }
        }
    }

    /// Loads a task into the primary form and switches it to update mode.
    pub async fn begin_edit(&mut self, id: TaskId) {
        let task = match self.api.get(&id).await {
            Ok(task) => task,
            Err(err) => {
                warn!(error = %err, id = %id, "failed to fetch task for editing");
                self.notify_error("Failed to load task for editing");
                return;
            }
        };
        self.end_edit();
        self.ui.fill(FormKind::Primary, &TaskInput::from(&task));
        self.ui.set_submit_mode(SubmitMode::Update);
        self.session.begin_edit(id, FormKind::Primary);
    }

    /// Loads a task into the modal form and opens it.
    pub async fn begin_modal_edit(&mut self, id: TaskId) {
        let task = match self.api.get(&id).await {
            Ok(task) => task,
            Err(err) => {
                warn!(error = %err, id = %id, "failed to fetch task for editing");
                self.notify_error("Failed to load task for editing");
                return;
            }
        };
        self.end_edit();
        self.ui.fill(FormKind::Modal, &TaskInput::from(&task));
        self.ui.show_modal();
        self.session.begin_edit(id, FormKind::Modal);
    }

    pub fn cancel_edit(&mut self) {
        self.end_edit();
        self.ui.reset(FormKind::Primary);
        self.ui.set_submit_mode(SubmitMode::Create);
    }

    pub fn close_modal(&mut self) {
        if self.session.editing_in(FormKind::Modal).is_some() {
            self.end_edit();
        } else {
            self.ui.hide_modal();
        }
    }

    pub async fn delete_task(&mut self, id: TaskId) {
        if !self.ui.confirm(DELETE_QUESTION) {
            debug!(id = %id, "delete not confirmed");
            return;
        }
        match self.api.delete(&id).await {
            Ok(()) => {
                info!(id = %id, "task deleted");
                if self.session.editing_id() == Some(&id) {
                    self.end_edit();
                }
                self.notify_success("Task deleted successfully!");
                self.load_tasks().await;
            }
            Err(err) => self.report("Failed to delete task", &err),
        }
    }

    pub async fn set_filter(&mut self, filter: Filter) {
        self.ui.set_active_filter(filter.clone());
        self.session.set_filter(filter);
        self.load_tasks().await;
    }

    /// Clears the edit in progress and returns its form to the idle state.
    fn end_edit(&mut self) {
        match self.session.clear_edit().map(|target| target.form) {
            Some(FormKind::Primary) => {
                self.ui.reset(FormKind::Primary);
                self.ui.set_submit_mode(SubmitMode::Create);
            }
            Some(FormKind::Modal) => {
                self.ui.hide_modal();
                self.ui.reset(FormKind::Modal);
            }
            None => {}
        }
    }

    fn report(&mut self, prefix: &str, err: &SyncError) {
        warn!(error = %err, transport = err.is_transport(), "{}", prefix);
        self.notify_error(&format!("{}: {}", prefix, err.user_message()));
    }

    fn notify_success(&mut self, message: &str) {
        self.ui
            .notify(Notification::success(message, self.notification_ttl));
    }

    fn notify_error(&mut self, message: &str) {
        self.ui
            .notify(Notification::error(message, self.notification_ttl));
    }
}
