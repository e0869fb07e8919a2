//! Line-delimited JSON request handling for client sessions.
//!
//! Each connection is a session: the server writes a welcome line, then
//! reads one request per line, dispatches it against the static dataset, and
//! writes exactly one reply per request until the client disconnects or
//! sends `exit`.
//!
//! ## Protocol
//!
//! Requests are flat JSON objects of string keys to string values carrying a
//! `command` field:
//!
//! ```json
//! {"command":"getPlayer","name":"Dhoni"}
//! ```
//!
//! Replies are single-key JSON objects:
//!
//! ```json
//! {"player":"MS Dhoni - CSK Captain, Wicketkeeper"}
//! {"error":"Player not found"}
//! ```
//!
//! Blank lines are skipped silently. Malformed lines produce an `error`
//! reply and the session continues; only transport faults or `exit` end it.

mod command;
mod errors;
mod handler;
mod reply;
mod request;

pub use self::command::Command;
pub use self::errors::SessionError;
pub use self::handler::SessionConnectionHandler;
pub use self::reply::{Reply, ReplyWriter};
pub use self::request::{Request, RequestParseError};

const SESSION_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::session");
