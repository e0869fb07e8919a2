//! Per-connection protocol loop.

use std::io::{BufRead, BufReader};
use std::net::TcpStream;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::dataset::Dataset;
use crate::transport::ConnectionHandler;

use super::SESSION_TARGET;
use super::command::Command;
use super::errors::SessionError;
use super::reply::{Reply, ReplyWriter};
use super::request::Request;

const WELCOME: &str = "Welcome to IPL Stats Server";
const GOODBYE: &str = "Goodbye!";
const INVALID_REQUEST: &str = "Invalid JSON or missing 'command'";
const MISSING_NAME: &str = "Missing 'name' parameter for getPlayer";
const PLAYER_NOT_FOUND: &str = "Player not found";
const UNKNOWN_COMMAND: &str = "Unknown command";

/// Connection handler that runs the request/reply loop for each session.
///
/// Each accepted connection becomes one session: a greeting, then a
/// strict line-in/reply-out pipeline until the client disconnects or sends
/// `exit`. Transport faults end only the affected session; they are logged
/// and never surfaced to other sessions or the acceptor.
#[derive(Debug)]
pub struct SessionConnectionHandler {
    dataset: Arc<Dataset>,
}

impl SessionConnectionHandler {
    /// Creates a handler serving the given dataset.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}

impl ConnectionHandler for SessionConnectionHandler {
    fn handle(&self, stream: TcpStream) {
        let peer = stream
            .peer_addr()
            .map_or_else(|_| "unknown".to_string(), |addr| addr.to_string());
        let session = match Session::new(stream, Arc::clone(&self.dataset)) {
            Ok(session) => session,
            Err(error) => {
                warn!(target: SESSION_TARGET, %peer, %error, "failed to initialise session");
                return;
            }
        };
        match session.run() {
            Ok(()) => info!(target: SESSION_TARGET, %peer, "client disconnected"),
            Err(error) => {
                warn!(target: SESSION_TARGET, %peer, %error, "session ended on transport fault");
            }
        }
    }
}

/// One client connection from acceptance to closure.
///
/// State is transient: nothing carries over between requests, and the
/// session is destroyed when the socket closes or `exit` is processed.
struct Session {
    reader: BufReader<TcpStream>,
    writer: ReplyWriter<TcpStream>,
    dataset: Arc<Dataset>,
}

impl Session {
    fn new(stream: TcpStream, dataset: Arc<Dataset>) -> Result<Self, SessionError> {
        let reader = BufReader::new(stream.try_clone()?);
        Ok(Self {
            reader,
            writer: ReplyWriter::new(stream),
            dataset,
        })
    }

    /// Runs the session to completion.
    ///
    /// Replies are written and flushed before the next line is read, so a
    /// pipelining client observes answers strictly in request order.
    fn run(mut self) -> Result<(), SessionError> {
        self.writer.write_reply(&Reply::message(WELCOME))?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let text = line.trim();
            if text.is_empty() {
                // Blank lines are discarded without a reply.
                continue;
            }

            let Some((command, request)) = decode(text) else {
                debug!(target: SESSION_TARGET, "rejected malformed request line");
                self.writer.write_reply(&Reply::error(INVALID_REQUEST))?;
                continue;
            };
            let reply = self.reply_for(command, &request);
            self.writer.write_reply(&reply)?;
            if matches!(command, Command::Exit) {
                return Ok(());
            }
        }
    }

    fn reply_for(&self, command: Command, request: &Request) -> Reply {
        match command {
            Command::GetTeams => Reply::teams(self.dataset.teams().to_vec()),
            Command::GetSchedule => Reply::schedule(self.dataset.schedule().to_vec()),
            Command::GetPlayer => match request.field("name") {
                None => Reply::error(MISSING_NAME),
                Some(name) => self
                    .dataset
                    .player(name)
                    .map_or_else(|| Reply::error(PLAYER_NOT_FOUND), Reply::player),
            },
            Command::Exit => Reply::message(GOODBYE),
            Command::Unknown => Reply::error(UNKNOWN_COMMAND),
        }
    }
}

/// Decodes a trimmed line into a command and its request.
///
/// Malformed lines and objects without a `command` field are rejected
/// identically; the client sees one error message for both.
fn decode(text: &str) -> Option<(Command, Request)> {
    let request = Request::parse(text).ok()?;
    let command = request.command().map(Command::parse)?;
    Some((command, request))
}
