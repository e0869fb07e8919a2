//! Shared configuration for the IPL stats server.
//!
//! The server is configured entirely at process startup: the endpoint it
//! listens on, the worker pool bound for concurrent sessions, and the logging
//! surface. There is no configuration file and no runtime reloading; the
//! resolved [`Config`] is constructed once and handed to the daemon.

mod defaults;
mod endpoint;
mod logging;

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_POOL_SIZE, DEFAULT_TCP_PORT, default_listen_endpoint,
    default_log_format,
};
pub use endpoint::{EndpointParseError, ListenEndpoint};
pub use logging::{LogFormat, LogFormatParseError};

use clap::Parser;

/// Resolved runtime configuration for the stats server.
#[derive(Debug, Clone, Parser, PartialEq, Eq)]
#[command(name = "iplstatsd", about = "Line-delimited JSON IPL stats server", version)]
pub struct Config {
    /// Endpoint the server listens on, for example `tcp://127.0.0.1:12345`.
    #[arg(long, default_value_t = defaults::default_listen_endpoint())]
    pub listen: ListenEndpoint,

    /// Maximum number of concurrently handled client sessions.
    #[arg(long, default_value_t = defaults::DEFAULT_POOL_SIZE)]
    pub pool_size: usize,

    /// Log filter expression, for example `info` or `iplstatsd=debug`.
    #[arg(long, default_value = defaults::DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    /// Log output format.
    #[arg(long, default_value_t = defaults::default_log_format())]
    pub log_format: LogFormat,
}

impl Config {
    /// Loads the configuration from process arguments.
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: defaults::default_listen_endpoint(),
            pool_size: defaults::DEFAULT_POOL_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
        }
    }
}
