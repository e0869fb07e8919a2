//! Listener implementation for the server's TCP socket.

use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use iplstats_config::ListenEndpoint;

use super::pool::WorkerPool;
use super::{ConnectionHandler, LISTENER_TARGET, ListenerError};

const ACCEPT_BACKOFF: Duration = Duration::from_millis(25);
const ERROR_BACKOFF: Duration = Duration::from_millis(150);

/// Listener bound to the configured endpoint.
#[derive(Debug)]
pub struct SocketListener {
    endpoint: ListenEndpoint,
    listener: TcpListener,
}

impl SocketListener {
    /// Binds the listener.
    ///
    /// # Errors
    ///
    /// Returns a [`ListenerError`] when the endpoint fails to resolve or the
    /// address is unavailable. Bind failure is fatal to the server: callers
    /// must surface it and exit rather than continue half-started.
    pub fn bind(endpoint: &ListenEndpoint) -> Result<Self, ListenerError> {
        let listener = bind_tcp(&endpoint.host, endpoint.port)?;
        Ok(Self {
            endpoint: endpoint.clone(),
            listener,
        })
    }

    /// Address the listener actually bound, useful when the port was 0.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error when the socket address is unavailable.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Starts the accept loop on a background thread.
    ///
    /// Accepted connections are handed to a bounded pool of `pool_size`
    /// workers; while every worker is busy, the accept loop blocks on
    /// submission until a slot frees up.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::NonBlocking`] when the listening socket
    /// cannot be switched to non-blocking mode.
    pub fn start(
        self,
        pool_size: usize,
        handler: Arc<dyn ConnectionHandler>,
    ) -> Result<ListenerHandle, ListenerError> {
        self.listener
            .set_nonblocking(true)
            .map_err(|source| ListenerError::NonBlocking { source })?;
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_flag = Arc::clone(&shutdown);
        let pool = WorkerPool::new(pool_size);
        let handle = thread::spawn(move || run_accept_loop(&self, &shutdown_flag, &pool, &handler));
        Ok(ListenerHandle {
            shutdown,
            handle: Some(handle),
        })
    }
}

/// Handle to the background listener thread.
pub struct ListenerHandle {
    shutdown: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ListenerHandle {
    /// Signals the accept loop to terminate.
    ///
    /// Idempotent. Sessions already running are left to finish on their own
    /// termination conditions.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// Waits for the accept loop to exit and in-flight sessions to drain.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::ThreadPanic`] when the accept thread
    /// panicked.
    pub fn join(mut self) -> Result<(), ListenerError> {
        if let Some(handle) = self.handle.take() {
            match handle.join() {
                Ok(()) => Ok(()),
                Err(_) => Err(ListenerError::ThreadPanic),
            }
        } else {
            Ok(())
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }
}

fn run_accept_loop(
    listener: &SocketListener,
    shutdown: &AtomicBool,
    pool: &WorkerPool,
    handler: &Arc<dyn ConnectionHandler>,
) {
    info!(
        target: LISTENER_TARGET,
        endpoint = %listener.endpoint,
        "socket listener active"
    );
    let mut last_error = None::<io::ErrorKind>;
    while !shutdown.load(Ordering::SeqCst) {
        match accept_connection(&listener.listener) {
            Ok(Some((stream, peer))) => {
                last_error = None;
                info!(target: LISTENER_TARGET, %peer, "client connected");
                let handler = Arc::clone(handler);
                if pool.submit(Box::new(move || handler.handle(stream))).is_err() {
                    warn!(
                        target: LISTENER_TARGET,
                        "worker pool closed; stopping accept loop"
                    );
                    break;
                }
            }
            Ok(None) => {
                thread::sleep(ACCEPT_BACKOFF);
            }
            Err(error) => {
                let kind = error.kind();
                if last_error != Some(kind) {
                    warn!(
                        target: LISTENER_TARGET,
                        error = %error,
                        "socket accept error"
                    );
                }
                last_error = Some(kind);
                thread::sleep(ERROR_BACKOFF);
            }
        }
    }
    // The pool is dropped by the caller when this function returns, joining
    // workers once in-flight sessions complete.
}

fn accept_connection(listener: &TcpListener) -> Result<Option<(TcpStream, SocketAddr)>, io::Error> {
    match listener.accept() {
        Ok((stream, peer)) => {
            stream.set_nonblocking(false)?;
            Ok(Some((stream, peer)))
        }
        Err(error) if error.kind() == io::ErrorKind::WouldBlock => Ok(None),
        Err(error) => Err(error),
    }
}

fn bind_tcp(host: &str, port: u16) -> Result<TcpListener, ListenerError> {
    let mut addrs = (host, port)
        .to_socket_addrs()
        .map_err(|source| ListenerError::Resolve {
            host: host.to_string(),
            port,
            source,
        })?;
    let addr = addrs
        .find(|addr| matches!(addr, SocketAddr::V4(_) | SocketAddr::V6(_)))
        .ok_or_else(|| ListenerError::ResolveEmpty {
            host: host.to_string(),
            port,
        })?;
    TcpListener::bind(addr).map_err(|source| ListenerError::Bind { addr, source })
}
