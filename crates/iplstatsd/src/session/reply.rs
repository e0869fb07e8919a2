//! Reply serialization helpers for the session loop.
//!
//! Every reply is a single flat JSON object with exactly one top-level key:
//! a string value, a string array, or an `error` message. The writer handles
//! JSONL framing and flushes after every reply so pipelined commands observe
//! their answers strictly in order.

use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::errors::SessionError;

/// A single-key reply sent to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `{"<key>":"<value>"}`
    Text {
        /// Top-level key.
        key: &'static str,
        /// String payload.
        value: String,
    },
    /// `{"<key>":["<v1>","<v2>",...]}`
    List {
        /// Top-level key.
        key: &'static str,
        /// Ordered string payload.
        values: Vec<String>,
    },
}

impl Reply {
    /// Creates a `message` reply.
    pub fn message(text: impl Into<String>) -> Self {
        Self::Text {
            key: "message",
            value: text.into(),
        }
    }

    /// Creates an `error` reply.
    pub fn error(text: impl Into<String>) -> Self {
        Self::Text {
            key: "error",
            value: text.into(),
        }
    }

    /// Creates a `player` reply.
    pub fn player(info: impl Into<String>) -> Self {
        Self::Text {
            key: "player",
            value: info.into(),
        }
    }

    /// Creates a `teams` reply.
    #[must_use]
    pub fn teams(values: Vec<String>) -> Self {
        Self::List {
            key: "teams",
            values,
        }
    }

    /// Creates a `schedule` reply.
    #[must_use]
    pub fn schedule(values: Vec<String>) -> Self {
        Self::List {
            key: "schedule",
            values,
        }
    }
}

impl Serialize for Reply {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Text { key, value } => map.serialize_entry(key, value)?,
            Self::List { key, values } => map.serialize_entry(key, values)?,
        }
        map.end()
    }
}

/// Writer that frames replies as JSONL.
pub struct ReplyWriter<W> {
    writer: W,
}

impl<W: Write> ReplyWriter<W> {
    /// Creates a reply writer wrapping the given output stream.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one reply as a newline-terminated JSON object and flushes.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when serialization or the socket write
    /// fails.
    pub fn write_reply(&mut self, reply: &Reply) -> Result<(), SessionError> {
        serde_json::to_writer(&mut self.writer, reply)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
