use crate::endpoint::ListenEndpoint;
use crate::logging::LogFormat;

/// Default TCP port the stats server binds.
pub const DEFAULT_TCP_PORT: u16 = 12345;

/// Default number of worker slots bounding concurrent sessions.
pub const DEFAULT_POOL_SIZE: usize = 10;

/// Default log filter expression used by the binaries.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Computes the default listen endpoint for the server.
pub fn default_listen_endpoint() -> ListenEndpoint {
    ListenEndpoint::new("127.0.0.1", DEFAULT_TCP_PORT)
}

/// Default logging format for the binaries.
pub fn default_log_format() -> LogFormat {
    LogFormat::Json
}
