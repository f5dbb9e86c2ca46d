mod cli;
mod models;
mod render;
mod repl;

use task_sync_rs::api::HttpTaskApi;
use task_sync_rs::task::MemoryTaskApi;
use tracing_subscriber::EnvFilter;

use repl::REPL;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = cli::parse_config();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(base = %config.client.base_url, offline = config.client.offline, "starting");

    if config.client.offline {
        REPL::new(config, MemoryTaskApi::new()).run().await;
        return;
    }

    match HttpTaskApi::new(&config.client) {
        Ok(api) => REPL::new(config, api).run().await,
        Err(err) => {
            render::error(&err.to_string());
            std::process::exit(1);
        }
    }
}
