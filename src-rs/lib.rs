pub mod config;
pub mod envelope;
pub mod error;
pub mod session;
pub mod sync;

#[path = "task/lib.rs"]
pub mod task;
#[path = "api/lib.rs"]
pub mod api;
#[path = "ui/lib.rs"]
pub mod ui;

pub use config::ClientConfig;
pub use error::SyncError;
pub use session::SessionState;
pub use sync::TaskSyncClient;
