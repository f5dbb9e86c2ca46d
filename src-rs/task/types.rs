use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Lifecycle state of a task. The service owns the member set: values this
/// client does not know are kept verbatim in `Other`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl TaskStatus {
    /// Statuses offered as filters and form choices.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Wire form, also used as the `?status=` query value.
    pub fn slug(&self) -> &str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TaskStatus::Other(_))
    }

    pub fn label(&self) -> String {
        self.slug()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => TaskStatus::Pending,
            "in-progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Other(raw),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(raw) => raw,
            known => known.slug().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Accepts only the statuses in [`TaskStatus::ALL`].
impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_lowercase();
        TaskStatus::ALL
            .iter()
            .find(|status| status.slug() == value)
            .cloned()
            .ok_or_else(|| format!("unknown status: {}", raw.trim()))
    }
}

/// A task as owned by the remote service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: TaskId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub status: TaskStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The writable subset of a task; the only body ever sent on create/update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskInput {
    pub fn new(title: &str, description: &str, status: TaskStatus) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            status,
        }
    }
}

impl From<&Task> for TaskInput {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Status(TaskStatus),
}

impl Filter {
    pub fn options() -> Vec<Filter> {
        let mut out = vec![Filter::All];
        out.extend(TaskStatus::ALL.iter().cloned().map(Filter::Status));
        out
    }

    pub fn status(&self) -> Option<TaskStatus> {
        match self {
            Filter::All => None,
            Filter::Status(status) => Some(status.clone()),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Status(status) => f.write_str(status.slug()),
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }
        raw.parse::<TaskStatus>().map(Filter::Status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Envelope;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn task_accepts_mongo_style_id_and_camel_case_timestamp() {
        let task: Task = serde_json::from_value(json!({
            "_id": "65f1c0",
            "title": "Buy milk",
            "description": "2%",
            "status": "in-progress",
            "createdAt": "2024-03-13T09:30:00.000Z",
            "__v": 0
        }))
        .unwrap();
        assert_eq!(task.id.as_str(), "65f1c0");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.created_at.to_rfc3339(), "2024-03-13T09:30:00+00:00");
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let task: Task = serde_json::from_value(json!({
            "id": "t1",
            "title": "x",
            "status": "pending",
            "createdAt": "2024-03-13T09:30:00Z"
        }))
        .unwrap();
        assert_eq!(task.description, "");
    }

    #[test]
    fn null_description_reads_as_empty() {
        let task: Task = serde_json::from_value(json!({
            "_id": "t1",
            "title": "x",
            "description": null,
            "status": "pending",
            "createdAt": "2024-03-13T09:30:00Z"
        }))
        .unwrap();
        assert_eq!(task.description, "");
    }

    #[test]
    fn unknown_status_survives_a_list_decode() {
        let env: Envelope<Vec<Task>> = serde_json::from_value(json!({
            "success": true,
            "data": [
                {"_id": "t1", "title": "a", "status": "pending", "createdAt": "2024-03-13T09:30:00Z"},
                {"_id": "t2", "title": "b", "status": "on-hold", "createdAt": "2024-03-13T09:30:00Z"}
            ]
        }))
        .unwrap();
        let tasks = env.into_result().unwrap();
        assert_eq!(tasks[0].status, TaskStatus::Pending);
        assert_eq!(tasks[1].status, TaskStatus::Other("on-hold".to_string()));
        assert_eq!(tasks[1].status.label(), "On Hold");
        assert!(!tasks[1].status.is_known());
    }

    #[test]
    fn unknown_status_is_written_back_verbatim() {
        let input = TaskInput::new("a", "", TaskStatus::Other("on-hold".to_string()));
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["status"], "on-hold");
    }

    #[test]
    fn only_known_statuses_parse_from_user_input() {
        assert_eq!("Completed".parse::<TaskStatus>().unwrap(), TaskStatus::Completed);
        assert!("on-hold".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn input_serializes_only_writable_fields() {
        let input = TaskInput::new("a", "b", TaskStatus::Completed);
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            json!({"title": "a", "description": "b", "status": "completed"})
        );
    }

    #[rstest]
    #[case(TaskStatus::Pending, "Pending")]
    #[case(TaskStatus::InProgress, "In Progress")]
    #[case(TaskStatus::Completed, "Completed")]
    fn status_labels(#[case] status: TaskStatus, #[case] label: &str) {
        assert_eq!(status.label(), label);
    }

    #[rstest]
    #[case("all", Filter::All)]
    #[case("ALL", Filter::All)]
    #[case("pending", Filter::Status(TaskStatus::Pending))]
    #[case(" in-progress ", Filter::Status(TaskStatus::InProgress))]
    fn filter_parses(#[case] raw: &str, #[case] expected: Filter) {
        assert_eq!(raw.parse::<Filter>().unwrap(), expected);
    }

    #[test]
    fn unknown_filter_is_rejected() {
        assert!("archived".parse::<Filter>().is_err());
    }

    #[test]
    fn filter_options_start_with_all() {
        let options = Filter::options();
        assert_eq!(options[0], Filter::All);
        assert_eq!(options.len(), 1 + TaskStatus::ALL.len());
        assert_eq!(options[2].to_string(), "in-progress");
    }
}
