use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://task-manager-backend-k6f5.onrender.com/api";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Service root; the `tasks` collection lives directly beneath it.
    pub base_url: String,
    /// `None` leaves request timing to the transport.
    pub timeout: Option<Duration>,
    pub notification_ttl: Duration,
    pub offline: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            notification_ttl: Duration::from_secs(3),
            offline: false,
        }
    }
}
