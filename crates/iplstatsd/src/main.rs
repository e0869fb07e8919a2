use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use signal_hook::consts::signal::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use thiserror::Error;
use tracing::{error, info};

use iplstats_config::Config;
use iplstatsd::{Dataset, ListenerError, SessionConnectionHandler, SocketListener, telemetry};

const SERVER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::server");

#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Listener(#[from] ListenerError),
    #[error("failed to install signal handlers: {source}")]
    Signals {
        #[source]
        source: io::Error,
    },
}

fn main() -> ExitCode {
    let config = Config::load();
    if let Err(telemetry_error) = telemetry::initialise(&config) {
        eprintln!("failed to initialise telemetry: {telemetry_error}");
        return ExitCode::FAILURE;
    }
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(server_error) => {
            error!(target: SERVER_TARGET, error = %server_error, "server terminated");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), ServerError> {
    let dataset = Arc::new(Dataset::sample());
    let handler = Arc::new(SessionConnectionHandler::new(dataset));
    let listener = SocketListener::bind(&config.listen)?;
    let handle = listener.start(config.pool_size, handler)?;
    info!(
        target: SERVER_TARGET,
        endpoint = %config.listen,
        pool_size = config.pool_size,
        "IPL stats server running"
    );
    wait_for_shutdown()?;
    handle.shutdown();
    handle.join()?;
    info!(target: SERVER_TARGET, "shutdown sequence completed");
    Ok(())
}

/// Blocks until the process receives a termination signal.
fn wait_for_shutdown() -> Result<(), ServerError> {
    let mut signals =
        Signals::new([SIGINT, SIGTERM]).map_err(|source| ServerError::Signals { source })?;
    if let Some(signal) = signals.forever().next() {
        info!(target: SERVER_TARGET, signal, "shutdown signal received");
    }
    Ok(())
}
