use std::time::Duration;

use crate::task::{Filter, Task, TaskInput};

/// What the task list area currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ListContent {
    Loading,
    Tasks(Vec<Task>),
    Empty,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message that dismisses itself after `ttl`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub ttl: Duration,
}

impl Notification {
    pub fn success(message: &str, ttl: Duration) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.to_string(),
            ttl,
        }
    }

    pub fn error(message: &str, ttl: Duration) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.to_string(),
            ttl,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Primary,
    Modal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitMode {
    #[default]
    Create,
    Update,
}

impl SubmitMode {
    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitMode::Create => "Add Task",
            SubmitMode::Update => "Update Task",
        }
    }
}

pub trait TaskListView {
    /// Replaces everything the list area shows.
    fn render_list(&mut self, content: &ListContent);
}

pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

pub trait FilterBar {
    /// Marks `filter` as the single active option.
    fn set_active_filter(&mut self, filter: Filter);
}

pub trait TaskForms {
    fn fill(&mut self, form: FormKind, values: &TaskInput);
    fn reset(&mut self, form: FormKind);
    fn set_submit_mode(&mut self, mode: SubmitMode);
    fn show_modal(&mut self);
    fn hide_modal(&mut self);
}

/// Everything the sync client needs from a front-end.
pub trait TaskUi: TaskListView + Notifier + Confirm + FilterBar + TaskForms {}

impl<T> TaskUi for T where T: TaskListView + Notifier + Confirm + FilterBar + TaskForms {}
