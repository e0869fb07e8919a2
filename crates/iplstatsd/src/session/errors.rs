//! Error types for session transport faults.
//!
//! Protocol-level failures (malformed lines, missing fields, unknown
//! commands, lookup misses) are not errors here: they become `error` replies
//! and the session continues. The variants below are the transport faults
//! that terminate a single session without touching the acceptor or any
//! other session.

use std::io;

use thiserror::Error;

/// Faults that end one session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Socket read or write failure.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Reply serialization failed.
    #[error("failed to serialize reply: {0}")]
    SerializeReply(#[from] serde_json::Error),
}
