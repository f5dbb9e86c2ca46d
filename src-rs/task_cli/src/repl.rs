use std::fs;
use std::io;

use task_sync_rs::api::TaskApi;
use task_sync_rs::task::{Filter, TaskId, TaskInput, TaskStatus};
use task_sync_rs::ui::{FormKind, TaskForms};
use task_sync_rs::TaskSyncClient;

use crate::models::CLIConfig;
use crate::render::{self, TerminalUi};

pub struct REPL<A> {
    pub config: CLIConfig,
    pub client: TaskSyncClient<A, TerminalUi>,
}

impl<A: TaskApi> REPL<A> {
    pub fn new(config: CLIConfig, api: A) -> Self {
        let client = TaskSyncClient::with_config(api, TerminalUi::new(), &config.client);
        Self { config, client }
    }

    pub async fn run(&mut self) {
        render::banner(&self.config);
        self.client.load_tasks().await;
        loop {
            render::prompt(self.client.ui().submit_mode);
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('/') {
                if self.handle_command(&line).await {
                    break;
                }
                continue;
            }
            self.quick_add(&line).await;
        }
    }

    async fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("").trim_start_matches('/');
        let rest = parts.next().unwrap_or("").trim();
        match cmd {
            "exit" | "quit" => return true,
            "help" => render::help(),
            "list" => self.client.load_tasks().await,
            "filter" => {
                if rest.is_empty() {
                    render::info(&format!(
                        "filter: {}",
                        self.client.session().current_filter()
                    ));
                } else {
                    match rest.parse::<Filter>() {
                        Ok(filter) => self.client.set_filter(filter).await,
                        Err(err) => render::error(&err),
                    }
                }
            }
            "title" => self.set_field(FormKind::Primary, Field::Title, rest),
            "desc" => self.set_field(FormKind::Primary, Field::Description, rest),
            "status" => self.set_field(FormKind::Primary, Field::Status, rest),
            "mtitle" => self.set_field(FormKind::Modal, Field::Title, rest),
            "mdesc" => self.set_field(FormKind::Modal, Field::Description, rest),
            "mstatus" => self.set_field(FormKind::Modal, Field::Status, rest),
            "form" => {
                render::form_fields(FormKind::Primary, &self.client.ui().primary);
                if self.client.ui().modal_open {
                    render::form_fields(FormKind::Modal, &self.client.ui().modal);
                }
            }
            "submit" => {
                let values = self.client.ui().primary.clone();
                self.client.submit(FormKind::Primary, values).await;
            }
            "msubmit" => {
                let values = self.client.ui().modal.clone();
                self.client.submit(FormKind::Modal, values).await;
            }
            "add" => self.quick_add(rest).await,
            "edit" => match task_id(rest) {
                Some(id) => self.client.begin_edit(id).await,
                None => render::error("usage: /edit <id>"),
            },
            "modal" => match task_id(rest) {
                Some(id) => self.client.begin_modal_edit(id).await,
                None => render::error("usage: /modal <id>"),
            },
            "cancel" => {
                self.client.cancel_edit();
                render::info("edit canceled");
            }
            "close" => self.client.close_modal(),
            "delete" => match task_id(rest) {
                Some(id) => self.client.delete_task(id).await,
                None => render::error("usage: /delete <id>"),
            },
            "export" => {
                if rest.is_empty() {
                    render::error("usage: /export <path>");
                } else if let Err(err) = fs::write(rest, self.client.ui().html.markup()) {
                    render::error(&format!("write {}: {}", rest, err));
                } else {
                    render::info(&format!("list written to {}", rest));
                }
            }
            "config" => render::config(&self.config),
            _ => render::info("unknown command, type /help"),
        }
        false
    }

    /// `<title> [| description [| status]]` straight into the primary form.
    async fn quick_add(&mut self, raw: &str) {
        let values = match parse_quick_add(raw) {
            Ok(values) => values,
            Err(err) => {
                render::error(&err);
                return;
            }
        };
        self.client.ui_mut().fill(FormKind::Primary, &values);
        self.client.submit(FormKind::Primary, values).await;
    }

    fn set_field(&mut self, form: FormKind, field: Field, value: &str) {
        let values = self.client.ui_mut().form_mut(form);
        match field {
            Field::Title => values.title = value.to_string(),
            Field::Description => values.description = value.to_string(),
            Field::Status => match value.parse::<TaskStatus>() {
                Ok(status) => values.status = status,
                Err(err) => render::error(&err),
            },
        }
    }
}

enum Field {
    Title,
    Description,
    Status,
}

fn task_id(raw: &str) -> Option<TaskId> {
    if raw.is_empty() {
        None
    } else {
        Some(TaskId::new(raw))
    }
}

fn parse_quick_add(raw: &str) -> Result<TaskInput, String> {
    let mut parts = raw.splitn(3, '|').map(str::trim);
    let title = parts.next().unwrap_or("");
    let description = parts.next().unwrap_or("");
    let status = match parts.next() {
        Some(value) if !value.is_empty() => value.parse::<TaskStatus>()?,
        _ => TaskStatus::default(),
    };
    Ok(TaskInput::new(title, description, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_add_splits_on_pipes() {
        assert_eq!(
            parse_quick_add("Buy milk | 2% | in-progress").unwrap(),
            TaskInput::new("Buy milk", "2%", TaskStatus::InProgress)
        );
        assert_eq!(
            parse_quick_add("Buy milk").unwrap(),
            TaskInput::new("Buy milk", "", TaskStatus::Pending)
        );
    }

    #[test]
    fn quick_add_rejects_unknown_status() {
        assert!(parse_quick_add("x | y | someday").is_err());
    }
}
