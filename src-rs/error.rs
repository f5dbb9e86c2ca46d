use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SyncError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived but was not a readable envelope.
    #[error("decode error: {0}")]
    Decode(String),

    /// The service answered with `success: false`.
    #[error("rejected by service: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl SyncError {
    pub fn rejected(message: &str) -> Self {
        SyncError::Rejected(Some(message.to_string()))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, SyncError::Transport(_) | SyncError::InvalidBaseUrl(_))
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, SyncError::Rejected(_) | SyncError::Decode(_))
    }

    /// Text placed into user-facing notifications.
    pub fn user_message(&self) -> String {
        match self {
            SyncError::Rejected(Some(message)) if !message.trim().is_empty() => message.clone(),
            SyncError::Rejected(_) => "request failed".to_string(),
            SyncError::Transport(message) | SyncError::Decode(message) => message.clone(),
            SyncError::InvalidBaseUrl(url) => format!("invalid base url: {}", url),
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SyncError::Decode(err.to_string())
        } else {
            SyncError::Transport(err.to_string())
        }
    }
}
