use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use chess_rules::config::SessionConfig;
use chess_rules::console::console_top::run_stdio_loop;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = match SessionConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid session configuration");
            return ExitCode::FAILURE;
        }
    };

    match run_stdio_loop(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "console loop failed");
            ExitCode::FAILURE
        }
    }
}
