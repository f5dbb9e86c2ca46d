use std::io::{self, Write};

use chrono::Local;
use task_sync_rs::task::{Filter, Task, TaskInput};
use task_sync_rs::ui::html::{EMPTY_TEXT, FAILED_TEXT, LOADING_TEXT};
use task_sync_rs::ui::{
    format_date, Confirm, FilterBar, FormKind, HtmlListView, ListContent, Notification,
    NotificationKind, Notifier, SubmitMode, TaskForms, TaskListView,
};

use crate::models::CLIConfig;

/// Terminal implementation of the task UI. Task text is printed with control
/// characters escaped so it cannot drive the terminal.
#[derive(Default)]
pub struct TerminalUi {
    pub primary: TaskInput,
    pub modal: TaskInput,
    pub submit_mode: SubmitMode,
    pub modal_open: bool,
    pub active_filter: Filter,
    pub html: HtmlListView,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form_mut(&mut self, form: FormKind) -> &mut TaskInput {
        match form {
            FormKind::Primary => &mut self.primary,
            FormKind::Modal => &mut self.modal,
        }
    }
}

impl TaskListView for TerminalUi {
    fn render_list(&mut self, content: &ListContent) {
        self.html.render_list(content);
        match content {
            ListContent::Loading => println!("{}", LOADING_TEXT),
            ListContent::Empty => println!("{}", EMPTY_TEXT),
            ListContent::Failed => println!("{}", FAILED_TEXT),
            ListContent::Tasks(tasks) => {
                for task in tasks {
                    card(task);
                }
            }
        }
    }
}

impl Notifier for TerminalUi {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => println!("✔ {}", clean(&notification.message)),
            NotificationKind::Error => eprintln!("✖ {}", clean(&notification.message)),
        }
    }
}

impl Confirm for TerminalUi {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{} [y/N] ", question);
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

impl FilterBar for TerminalUi {
    fn set_active_filter(&mut self, filter: Filter) {
        let bar: Vec<String> = Filter::options()
            .into_iter()
            .map(|option| {
                if option == filter {
                    format!("[{}]", option)
                } else {
                    option.to_string()
                }
            })
            .collect();
        println!("filter: {}", bar.join(" "));
        self.active_filter = filter;
    }
}

impl TaskForms for TerminalUi {
    fn fill(&mut self, form: FormKind, values: &TaskInput) {
        *self.form_mut(form) = values.clone();
        form_fields(form, values);
    }

    fn reset(&mut self, form: FormKind) {
        *self.form_mut(form) = TaskInput::default();
    }

    fn set_submit_mode(&mut self, mode: SubmitMode) {
        if self.submit_mode != mode {
            self.submit_mode = mode;
            println!("submit: {}", mode.button_label());
            if mode == SubmitMode::Update {
                println!("{}", EDIT_MODE_NOTE);
            }
        }
    }

    fn show_modal(&mut self) {
        self.modal_open = true;
        println!("edit dialog open (/mtitle, /mdesc, /mstatus, /msubmit, /close)");
    }

    fn hide_modal(&mut self) {
        if self.modal_open {
            self.modal_open = false;
            println!("edit dialog closed");
        }
    }
}

fn card(task: &Task) {
    println!("[{}] {}  (id: {})", clean(&task.status.label()), clean(&task.title), clean(task.id.as_str()));
    if !task.description.is_empty() {
        println!("    {}", clean(&task.description));
    }
    println!(
        "    Created: {}",
        format_date(&task.created_at.with_timezone(&Local))
    );
}

pub fn form_fields(form: FormKind, values: &TaskInput) {
    let name = match form {
        FormKind::Primary => "form",
        FormKind::Modal => "dialog",
    };
    println!("{}:", name);
    println!("  title: {}", clean(&values.title));
    println!("  description: {}", clean(&values.description));
    println!("  status: {}", clean(values.status.slug()));
}

/// Escapes control characters, including ESC and newlines.
pub fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_control() {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn banner(cfg: &CLIConfig) {
    println!("Task Sync CLI");
    if cfg.client.offline {
        println!("API: offline (in-memory)");
    } else {
        println!("API: {}", cfg.client.base_url);
    }
    println!("Type /help for commands.");
}

pub fn prompt(mode: SubmitMode) {
    let marker = match mode {
        SubmitMode::Create => ">",
        SubmitMode::Update => "edit>",
    };
    print!("{} ", marker);
    let _ = io::stdout().flush();
}

const COMMANDS: &[(&str, &str)] = &[
    ("/help", "Show commands"),
    ("/exit | /quit", "Exit"),
    ("/list", "Reload tasks"),
    ("/filter <all|status>", "Filter by status"),
    ("/title <text>", "Set form title"),
    ("/desc <text>", "Set form description"),
    ("/status <status>", "Set form status"),
    ("/form", "Show form"),
    ("/submit", "Add or update from form"),
    ("/add <title> [| desc [| status]]", "Fill form and submit"),
    ("<title> [| desc [| status]]", "Same as /add"),
    ("/edit <id>", "Load task into form"),
    ("/cancel", "Cancel edit"),
    ("/modal <id>", "Edit task in dialog"),
    ("/mtitle /mdesc /mstatus", "Set dialog fields"),
    ("/msubmit", "Save dialog"),
    ("/close", "Close dialog"),
    ("/delete <id>", "Delete task"),
    ("/export <path>", "Write list as HTML"),
    ("/config", "Show current config"),
];

/// Shown in /help and whenever the form enters edit mode.
pub const EDIT_MODE_NOTE: &str =
    "While the prompt reads edit>, a plain line, /add or /submit updates the task being edited. Use /cancel to go back to adding.";

fn help_lines() -> Vec<String> {
    let mut lines = vec!["Commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|(usage, about)| format!("  {:<34} {}", usage, about)),
    );
    lines.push(String::new());
    lines.push(EDIT_MODE_NOTE.to_string());
    lines
}

pub fn help() {
    for line in help_lines() {
        println!("{}", line);
    }
}

pub fn config(cfg: &CLIConfig) {
    println!("config:");
    println!("  base: {}", cfg.client.base_url);
    match cfg.client.timeout {
        Some(timeout) => println!("  timeout: {}s", timeout.as_secs()),
        None => println!("  timeout: none"),
    }
    println!("  offline: {}", cfg.client.offline);
    println!("  log: {}", cfg.log_filter);
}

pub fn info(msg: &str) {
    println!("{}", msg);
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_neutralises_escape_sequences() {
        assert_eq!(clean("\u{1b}[2Jgone"), "\\u{1b}[2Jgone");
        assert_eq!(clean("a\nb"), "a\\nb");
        assert_eq!(clean("Buy milk 🥛"), "Buy milk 🥛");
    }

    #[test]
    fn fill_and_reset_track_form_buffers() {
        let mut ui = TerminalUi::new();
        let values = TaskInput::new("a", "b", Default::default());
        ui.fill(FormKind::Modal, &values);
        assert_eq!(ui.modal, values);
        assert_eq!(ui.primary, TaskInput::default());
        ui.reset(FormKind::Modal);
        assert_eq!(ui.modal, TaskInput::default());
    }

    #[test]
    fn help_warns_that_plain_lines_update_while_editing() {
        let lines = help_lines();
        assert!(lines.iter().any(|line| line.contains("/cancel") && line.contains("Cancel edit")));
        assert_eq!(lines.last().map(String::as_str), Some(EDIT_MODE_NOTE));
        assert!(EDIT_MODE_NOTE.contains("edit>"));
        assert!(EDIT_MODE_NOTE.contains("plain line"));
    }

    #[test]
    fn entering_edit_mode_flips_the_prompt() {
        let mut ui = TerminalUi::new();
        assert_eq!(ui.submit_mode, SubmitMode::Create);
        ui.set_submit_mode(SubmitMode::Update);
        assert_eq!(ui.submit_mode, SubmitMode::Update);
        ui.set_submit_mode(SubmitMode::Create);
        assert_eq!(ui.submit_mode, SubmitMode::Create);
    }
}
