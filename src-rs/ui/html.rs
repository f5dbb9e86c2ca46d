use chrono::Local;

use super::format::format_date;
use super::types::{ListContent, TaskListView};
use crate::task::Task;

pub const LOADING_TEXT: &str = "Loading tasks...";
pub const EMPTY_TEXT: &str = "📭 No tasks found. Add your first task!";
pub const FAILED_TEXT: &str = "❌ Failed to load tasks. Make sure the backend is running!";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_card(task: &Task) -> String {
    format!(
        concat!(
            "<div class=\"task-card\">",
            "<h3>{title}</h3>",
            "<p>{description}</p>",
            "<span class=\"task-status {slug}\">{label}</span>",
            "<div class=\"task-actions\">",
            "<button class=\"edit-btn\" data-id=\"{id}\">✏️ Edit</button>",
            "<button class=\"delete-btn\" data-id=\"{id}\">🗑️ Delete</button>",
            "</div>",
            "<div class=\"task-date\">Created: {created}</div>",
            "</div>"
        ),
        title = escape_html(&task.title),
        description = escape_html(&task.description),
        slug = escape_html(task.status.slug()),
        label = escape_html(&task.status.label()),
        id = escape_html(task.id.as_str()),
        created = format_date(&task.created_at.with_timezone(&Local)),
    )
}

pub fn render_list(content: &ListContent) -> String {
    match content {
        ListContent::Loading => format!("<div class=\"loading\">{}</div>", LOADING_TEXT),
        ListContent::Empty => format!("<div class=\"empty-state\">{}</div>", EMPTY_TEXT),
        ListContent::Failed => format!("<div class=\"empty-state\">{}</div>", FAILED_TEXT),
        ListContent::Tasks(tasks) => tasks.iter().map(render_card).collect(),
    }
}

/// Keeps the last rendered list as an HTML fragment.
#[derive(Clone, Debug, Default)]
pub struct HtmlListView {
    markup: String,
}

impl HtmlListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl TaskListView for HtmlListView {
    fn render_list(&mut self, content: &ListContent) {
        self.markup = render_list(content);
    }
}
