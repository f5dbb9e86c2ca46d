pub mod format;
pub mod html;
pub mod memory;
pub mod types;

pub use format::format_date;
pub use html::{escape_html, HtmlListView};
pub use memory::MemoryUi;
pub use types::{
    Confirm, FilterBar, FormKind, ListContent, Notification, NotificationKind, Notifier,
    SubmitMode, TaskForms, TaskListView, TaskUi,
};
