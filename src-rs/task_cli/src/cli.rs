use std::env;
use std::time::Duration;

use crate::models::{CLIConfig, DEFAULT_LOG_FILTER};

pub fn parse_config() -> CLIConfig {
    let mut cfg = CLIConfig::default();
    if let Some(url) = env_opt("TASKS_API_URL") {
        cfg.client.base_url = url;
    }
    cfg.client.timeout = env_secs("TASKS_API_TIMEOUT_SECS");
    cfg.client.offline = env_bool("TASKS_OFFLINE", false);
    cfg.log_filter = env_opt("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let args: Vec<String> = env::args().collect();
    let mut idx = 1;
    while idx < args.len() {
        match args[idx].as_str() {
            "--base" => {
                if let Some(value) = args.get(idx + 1) {
                    cfg.client.base_url = value.clone();
                    idx += 1;
                }
            }
            "--timeout" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(secs) = value.parse::<u64>() {
                        cfg.client.timeout = Some(Duration::from_secs(secs));
                    }
                    idx += 1;
                }
            }
            "--offline" => cfg.client.offline = true,
            "--log" => {
                if let Some(value) = args.get(idx + 1) {
                    cfg.log_filter = value.clone();
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }

    cfg
}

fn env_opt(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn env_bool(key: &str, fallback: bool) -> bool {
    match env::var(key) {
        Ok(value) => value.parse::<bool>().unwrap_or(fallback),
        Err(_) => fallback,
    }
}

fn env_secs(key: &str) -> Option<Duration> {
    env_opt(key)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}
