//! Socket listener and worker pool for the server transport.
//!
//! The transport module binds the configured TCP endpoint, accepts
//! connections in a background thread, and hands each one to a bounded pool
//! of session workers. When every worker is busy, newly accepted connections
//! wait for a free slot rather than being dropped.

mod errors;
mod handler;
mod listener;
mod pool;

pub use self::errors::ListenerError;
pub use self::handler::ConnectionHandler;
pub use self::listener::{ListenerHandle, SocketListener};

const LISTENER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::transport");
