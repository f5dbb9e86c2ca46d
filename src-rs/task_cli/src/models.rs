use task_sync_rs::ClientConfig;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Debug)]
pub struct CLIConfig {
    pub client: ClientConfig,
    pub log_filter: String,
}

impl Default for CLIConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
