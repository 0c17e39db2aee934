use mma8452q_reader::{init_tracing, run_reader};
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Config directory from CONFIG_PATH or default; a missing file means defaults
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config".to_string());

    match run_reader(&config_path).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[main] {}", e);
            ExitCode::FAILURE
        }
    }
}
