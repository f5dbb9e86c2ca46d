use serde::{Deserialize, Serialize};

use crate::error::SyncError;

/// `{success, data?, error?}` wrapper every response body uses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }

    pub fn into_result(self) -> Result<T, SyncError> {
        if !self.success {
            return Err(SyncError::Rejected(self.error));
        }
        self.data
            .ok_or_else(|| SyncError::Decode("success envelope without data".to_string()))
    }

    /// Like `into_result` but for calls whose payload is not used.
    pub fn into_ack(self) -> Result<(), SyncError> {
        if self.success {
            Ok(())
        } else {
            Err(SyncError::Rejected(self.error))
        }
    }
}
