use crate::task::{Filter, TaskId};
use crate::ui::FormKind;

/// The task loaded into a form for editing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditTarget {
    pub id: TaskId,
    pub form: FormKind,
}

/// Per-session state of the sync client: the active filter and at most one
/// edit in progress.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    current_filter: Filter,
    editing: Option<EditTarget>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_filter(&self) -> &Filter {
        &self.current_filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.current_filter = filter;
    }

    pub fn editing(&self) -> Option<&EditTarget> {
        self.editing.as_ref()
    }

    pub fn editing_id(&self) -> Option<&TaskId> {
        self.editing.as_ref().map(|target| &target.id)
    }

    /// The id under edit in `form`, if that form holds the edit.
    pub fn editing_in(&self, form: FormKind) -> Option<&TaskId> {
        self.editing
            .as_ref()
            .filter(|target| target.form == form)
            .map(|target| &target.id)
    }

    pub fn begin_edit(&mut self, id: TaskId, form: FormKind) {
        self.editing = Some(EditTarget { id, form });
    }

    pub fn clear_edit(&mut self) -> Option<EditTarget> {
        self.editing.take()
    }
}
