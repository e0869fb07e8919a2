//! Line-delimited JSON IPL stats server.
//!
//! The server accepts TCP connections, greets each client, and answers flat
//! JSON requests (`getteams`, `getschedule`, `getplayer`, `exit`) from an
//! immutable in-memory dataset. Two components carry the design:
//!
//! - [`transport`]: the listening socket, its accept loop, and the bounded
//!   worker pool that caps concurrent sessions.
//! - [`session`]: the per-connection state machine that parses the
//!   restricted JSON grammar, dispatches commands, and serializes replies.
//!
//! The dataset is constructed once at startup and shared read-only across
//! sessions; sessions never block on one another, and a fault in one never
//! disturbs the rest.

mod dataset;
pub mod session;
pub mod telemetry;
pub mod transport;

pub use dataset::Dataset;
pub use session::SessionConnectionHandler;
pub use telemetry::{TelemetryError, TelemetryHandle};
pub use transport::{ConnectionHandler, ListenerError, ListenerHandle, SocketListener};

#[cfg(test)]
mod tests;
