//! Shared harness for behaviour tests: a bound server and a line client.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpStream};
use std::sync::Arc;
use std::time::Duration;

use iplstats_config::ListenEndpoint;

use crate::dataset::Dataset;
use crate::session::SessionConnectionHandler;
use crate::transport::{ListenerHandle, SocketListener};

const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Starts a server on an ephemeral port with the sample dataset.
pub(crate) fn start_server(pool_size: usize) -> (ListenerHandle, SocketAddr) {
    let listener =
        SocketListener::bind(&ListenEndpoint::new("127.0.0.1", 0)).expect("bind listener");
    let addr = listener.local_addr().expect("local address");
    let handler = Arc::new(SessionConnectionHandler::new(Arc::new(Dataset::sample())));
    let handle = listener.start(pool_size, handler).expect("start listener");
    (handle, addr)
}

/// Line-oriented test client.
pub(crate) struct Client {
    stream: TcpStream,
    reader: BufReader<TcpStream>,
}

impl Client {
    pub(crate) fn connect(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).expect("connect client");
        stream
            .set_read_timeout(Some(READ_TIMEOUT))
            .expect("set read timeout");
        let reader = BufReader::new(stream.try_clone().expect("clone stream"));
        Self { stream, reader }
    }

    /// Reads and checks the welcome line every session starts with.
    pub(crate) fn expect_greeting(&mut self) {
        assert_eq!(
            self.read_reply().as_deref(),
            Some(r#"{"message":"Welcome to IPL Stats Server"}"#)
        );
    }

    pub(crate) fn send_line(&mut self, line: &str) {
        self.stream.write_all(line.as_bytes()).expect("write line");
        self.stream.write_all(b"\n").expect("write newline");
        self.stream.flush().expect("flush");
    }

    /// Reads one reply line, or `None` when the server closed the stream.
    pub(crate) fn read_reply(&mut self) -> Option<String> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line).expect("read reply");
        if bytes == 0 {
            None
        } else {
            Some(line.trim_end().to_string())
        }
    }

    /// Sends a request and returns its single reply line.
    pub(crate) fn request(&mut self, line: &str) -> String {
        self.send_line(line);
        self.read_reply().expect("reply before close")
    }
}
