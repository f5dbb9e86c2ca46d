use super::types::{
    Confirm, FilterBar, FormKind, ListContent, Notification, Notifier, SubmitMode, TaskForms,
    TaskListView,
};
use crate::task::{Filter, TaskInput};

/// Headless front-end that records what it was asked to show.
#[derive(Clone, Debug, Default)]
pub struct MemoryUi {
    pub renders: Vec<ListContent>,
    pub notifications: Vec<Notification>,
    pub primary: TaskInput,
    pub modal: TaskInput,
    pub submit_mode: SubmitMode,
    pub modal_open: bool,
    pub active_filter: Filter,
    /// Answer given to every confirmation question.
    pub confirm_answer: bool,
    pub questions: Vec<String>,
}

impl MemoryUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirming(answer: bool) -> Self {
        Self {
            confirm_answer: answer,
            ..Self::default()
        }
    }

    pub fn list(&self) -> Option<&ListContent> {
        self.renders.last()
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn form(&self, form: FormKind) -> &TaskInput {
        match form {
            FormKind::Primary => &self.primary,
            FormKind::Modal => &self.modal,
        }
    }
}

impl TaskListView for MemoryUi {
    fn render_list(&mut self, content: &ListContent) {
        self.renders.push(content.clone());
    }
}

impl Notifier for MemoryUi {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

impl Confirm for MemoryUi {
    fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.confirm_answer
    }
}

impl FilterBar for MemoryUi {
    fn set_active_filter(&mut self, filter: Filter) {
        self.active_filter = filter;
    }
}

impl TaskForms for MemoryUi {
    fn fill(&mut self, form: FormKind, values: &TaskInput) {
        match form {
            FormKind::Primary => self.primary = values.clone(),
            FormKind::Modal => self.modal = values.clone(),
        }
    }

    fn reset(&mut self, form: FormKind) {
        self.fill(form, &TaskInput::default());
    }

    fn set_submit_mode(&mut self, mode: SubmitMode) {
        self.submit_mode = mode;
    }

    fn show_modal(&mut self) {
        self.modal_open = true;
    }

    fn hide_modal(&mut self) {
        self.modal_open = false;
    }
}
