//! mio event loop implementation.
//!
//! Readiness-based model: poll tells us when sockets are ready, then we
//! perform non-blocking read/write syscalls. Uses epoll on Linux, kqueue
//! on macOS.
//!
//! Per connection the loop guarantees:
//! - accept order: registry insert, `connection_made`, poller registration
//! - read order: fill up to one maximum chunk, drain in chunks, re-check closure
//!   after every chunk
//! - teardown order: registry remove, `connection_lost`, release
//!
//! Teardown is keyed on registry membership, so reaching it twice for the
//! same connection (e.g. handler close and EOF in one event) is harmless.

use crate::address::Address;
use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::runtime::{
    Connection, ConnectionId, ConnectionRegistry, Dispatch, Fill, ProtocolFactory, MAX_CHUNK_SIZE,
};
use mio::net::{TcpListener, TcpStream};
use mio::{Events, Interest, Poll, Token, Waker};
use socket2::{Domain, SockAddr, SockRef, Socket, Type};
use std::fmt;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::os::unix::io::AsRawFd;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

const LISTENER_TOKEN: Token = Token(usize::MAX);
const WAKER_TOKEN: Token = Token(usize::MAX - 1);

/// Why a connection was torn down. Logged, never shown to handlers.
#[derive(Debug)]
pub enum CloseReason {
    /// The handler called `lose_connection`.
    Local,
    /// The peer closed the stream.
    Eof,
    /// Reading or writing failed.
    Error(io::Error),
    /// The server is shutting down.
    Shutdown,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseReason::Local => f.write_str("closed by handler"),
            CloseReason::Eof => f.write_str("closed by peer"),
            CloseReason::Error(e) => write!(f, "I/O error: {e}"),
            CloseReason::Shutdown => f.write_str("server shutdown"),
        }
    }
}

/// Stops a running [`Server`] from any thread.
#[derive(Clone)]
pub struct ShutdownHandle {
    stopping: Arc<AtomicBool>,
    waker: Arc<Waker>,
}

impl ShutdownHandle {
    /// Ask the server to stop. `Server::run` tears down every live
    /// connection and returns.
    pub fn shutdown(&self) {
        self.stopping.store(true, Ordering::Release);
        if let Err(e) = self.waker.wake() {
            warn!(error = %e, "Failed to wake event loop");
        }
    }
}

/// Readiness of one token, copied out of `Events` so the loop can borrow
/// the server mutably while handling it.
#[derive(Debug, Clone, Copy)]
struct Readiness {
    token: Token,
    readable: bool,
    writable: bool,
}

/// A listening socket, its live connections and the poller driving them.
pub struct Server<F> {
    poll: Poll,
    events: Events,
    ready: Vec<Readiness>,
    listener: TcpListener,
    local_addr: SocketAddr,
    connections: ConnectionRegistry,
    /// Read area shared by every connection; zeroed once.
    scratch: Box<[u8]>,
    factory: F,
    descriptor_limit: usize,
    stopping: Arc<AtomicBool>,
    waker: Arc<Waker>,
}

impl<F: ProtocolFactory> Server<F> {
    /// Create the poller, bind and listen, and register the listener.
    ///
    /// Nothing is kept if any step fails.
    pub fn bind(config: &Config, factory: F) -> Result<Self> {
        let ip: IpAddr = config
            .host
            .parse()
            .map_err(|source| ServerError::InvalidAddress {
                addr: config.host.clone(),
                source,
            })?;
        let addr = SocketAddr::new(ip, config.port);

        let poll = Poll::new().map_err(ServerError::EventLoop)?;

        let mut listener = create_listener(addr, config.backlog)
            .map(TcpListener::from_std)
            .map_err(|source| ServerError::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ServerError::Bind { addr, source })?;

        poll.registry()
            .register(&mut listener, LISTENER_TOKEN, Interest::READABLE)
            .map_err(ServerError::Register)?;
        let waker = Waker::new(poll.registry(), WAKER_TOKEN).map_err(ServerError::Register)?;

        let descriptor_limit = config.effective_descriptor_limit();
        debug!(addr = %local_addr, backlog = config.backlog, descriptor_limit, "Listener bound");

        Ok(Self {
            poll,
            events: Events::with_capacity(config.events_capacity.max(1)),
            ready: Vec::new(),
            listener,
            local_addr,
            connections: ConnectionRegistry::new(config.max_connections),
            scratch: vec![0u8; MAX_CHUNK_SIZE].into_boxed_slice(),
            factory,
            descriptor_limit,
            stopping: Arc::new(AtomicBool::new(false)),
            waker: Arc::new(waker),
        })
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            stopping: Arc::clone(&self.stopping),
            waker: Arc::clone(&self.waker),
        }
    }

    /// Whether `id` names a live connection.
    pub fn is_active(&self, id: ConnectionId) -> bool {
        self.connections
            .get(id)
            .is_some_and(|conn| !conn.is_closed())
    }

    /// Number of live connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Ids of all live connections.
    pub fn connection_ids(&self) -> Vec<ConnectionId> {
        self.connections.ids()
    }

    /// Serve until [`ShutdownHandle::shutdown`] is called.
    ///
    /// Every live connection is torn down before this returns, including
    /// when polling fails.
    pub fn run(&mut self) -> Result<()> {
        info!(
            addr = %self.local_addr,
            max_connections = self.connections.capacity(),
            "Server listening"
        );

        let result = loop {
            if self.stopping.load(Ordering::Acquire) {
                break Ok(());
            }
            if let Err(e) = self.turn(None) {
                error!(error = %e, "Event loop failed");
                break Err(e);
            }
        };

        self.close_all();
        info!(addr = %self.local_addr, "Server stopped");
        result
    }

    /// Wait for readiness once and handle every event it reports.
    pub fn turn(&mut self, timeout: Option<Duration>) -> Result<()> {
        if let Err(e) = self.poll.poll(&mut self.events, timeout) {
            if e.kind() == io::ErrorKind::Interrupted {
                return Ok(());
            }
            return Err(ServerError::Poll(e));
        }

        let mut ready = std::mem::take(&mut self.ready);
        ready.clear();
        ready.extend(self.events.iter().map(|event| Readiness {
            token: event.token(),
            // Errors and hang-ups surface through the next read.
            readable: event.is_readable() || event.is_read_closed() || event.is_error(),
            writable: event.is_writable() || event.is_write_closed(),
        }));

        for readiness in &ready {
            match readiness.token {
                LISTENER_TOKEN => self.accept_connections(),
                WAKER_TOKEN => debug!("Event loop woken"),
                Token(id) => self.handle_connection_event(id, readiness),
            }
        }

        self.ready = ready;
        Ok(())
    }

    /// Tear down every live connection.
    pub fn close_all(&mut self) {
        if self.connections.is_empty() {
            return;
        }

        info!(count = self.connections.len(), "Closing connections");
        for id in self.connections.ids() {
            self.teardown(id, CloseReason::Shutdown);
        }
    }

    fn accept_connections(&mut self) {
        loop {
            let accepted = SockRef::from(&self.listener).accept();
            match accepted {
                Ok((socket, peer)) => {
                    self.admit(socket, peer);
                }
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    error!(error = %e, "Accept error");
                    break;
                }
            }
        }
    }

    /// Turn an accepted socket into a registered connection.
    ///
    /// Rejected sockets are closed by dropping them; no handler is built
    /// for them.
    pub(crate) fn admit(&mut self, socket: Socket, peer: SockAddr) -> Option<ConnectionId> {
        let fd = socket.as_raw_fd();
        if fd < 0 || fd as usize >= self.descriptor_limit {
            warn!(fd, limit = self.descriptor_limit, "Rejecting socket descriptor out of range");
            return None;
        }

        let address = match Address::resolve(&peer) {
            Ok(address) => address,
            Err(e) => {
                warn!(error = %e, "Failed to resolve peer address");
                return None;
            }
        };

        if self.connections.is_full() {
            warn!(
                peer = %address,
                limit = self.connections.capacity(),
                "Connection limit reached"
            );
            return None;
        }

        if let Err(e) = socket.set_nonblocking(true) {
            warn!(peer = %address, error = %e, "Failed to make socket non-blocking");
            return None;
        }

        let stream = TcpStream::from_std(socket.into());
        let protocol = self.factory.build_protocol(&address);
        let id = self
            .connections
            .insert(Connection::new(stream, address, protocol))?;
        let conn = self.connections.get_mut(id)?;
        debug!(conn_id = id, peer = %conn.address(), "Accepted connection");

        if conn.make_connection() == Dispatch::Closed {
            self.teardown(id, CloseReason::Local);
            return None;
        }

        // Registers for readiness and sends anything written so far.
        self.flush(id);
        self.connections.contains(id).then_some(id)
    }

    fn handle_connection_event(&mut self, id: ConnectionId, readiness: &Readiness) {
        if readiness.readable {
            self.handle_readable(id);
        }

        // Re-check connection exists (may have been removed)
        if readiness.writable && self.connections.contains(id) {
            self.flush(id);
        }
    }

    fn handle_readable(&mut self, id: ConnectionId) {
        loop {
            let Some(conn) = self.connections.get_mut(id) else {
                return;
            };

            let fill = conn.fill_input(&mut self.scratch);

            // Bytes that arrived before EOF or an error are still delivered.
            if conn.dispatch_input() == Dispatch::Closed {
                self.teardown(id, CloseReason::Local);
                return;
            }

            match fill {
                // Stopped at the chunk limit; the socket may hold more and
                // edge-triggered readiness will not fire again for it.
                Ok(Fill::Full) => continue,
                Ok(Fill::Drained) => break,
                Ok(Fill::Eof) => {
                    self.teardown(id, CloseReason::Eof);
                    return;
                }
                Err(e) => {
                    self.teardown(id, CloseReason::Error(e));
                    return;
                }
            }
        }

        self.flush(id);
    }

    /// Write pending output and keep writable interest only while some
    /// remains.
    fn flush(&mut self, id: ConnectionId) {
        let Some(conn) = self.connections.get_mut(id) else {
            return;
        };

        if conn.has_pending_output() {
            if let Err(e) = conn.flush_output() {
                self.teardown(id, CloseReason::Error(e));
                return;
            }
        }

        if let Err(e) = conn.register(self.poll.registry(), Token(id)) {
            self.teardown(id, CloseReason::Error(e));
        }
    }

    /// The single destruction path for connections.
    fn teardown(&mut self, id: ConnectionId, reason: CloseReason) {
        let Some(conn) = self.connections.remove(id) else {
            return;
        };
        debug!(conn_id = id, peer = %conn.address(), reason = %reason, "Connection closed");
        conn.release(self.poll.registry());
    }
}

/// Create a non-blocking TCP listener with SO_REUSEADDR.
fn create_listener(addr: SocketAddr, backlog: i32) -> io::Result<std::net::TcpListener> {
    let socket = Socket::new(
        Domain::for_address(addr),
        Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(backlog)?;

    Ok(socket.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::testing::{Event, Recorder};
    use crate::runtime::{Protocol, Transport};
    use std::cell::Cell;
    use std::io::{Read, Write};
    use std::net::{Shutdown, TcpStream as StdTcpStream};
    use std::rc::Rc;
    use std::time::Instant;

    type TestFactory = Box<dyn FnMut(&Address) -> Box<dyn Protocol>>;

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..Config::default()
        }
    }

    /// Server whose factory hands out clones of `recorder` and counts builds.
    fn recording_server(config: &Config, recorder: &Recorder) -> (Server<TestFactory>, Rc<Cell<usize>>) {
        let builds = Rc::new(Cell::new(0));
        let recorder = recorder.clone();
        let counter = Rc::clone(&builds);
        let factory: TestFactory = Box::new(move |_address: &Address| -> Box<dyn Protocol> {
            counter.set(counter.get() + 1);
            Box::new(recorder.clone())
        });
        (Server::bind(config, factory).unwrap(), builds)
    }

    /// Turn the loop until `done` holds, panicking after five seconds.
    fn drive<F: ProtocolFactory>(server: &mut Server<F>, done: impl Fn(&Server<F>) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !done(&*server) {
            assert!(Instant::now() < deadline, "timed out driving event loop");
            server.turn(Some(Duration::from_millis(10))).unwrap();
        }
    }

    fn turn_for<F: ProtocolFactory>(server: &mut Server<F>, duration: Duration) {
        let deadline = Instant::now() + duration;
        while Instant::now() < deadline {
            server.turn(Some(Duration::from_millis(10))).unwrap();
        }
    }

    fn connect<F: ProtocolFactory>(server: &Server<F>) -> StdTcpStream {
        StdTcpStream::connect(server.local_addr()).unwrap()
    }

    #[test]
    fn test_bind_invalid_host() {
        let config = Config {
            host: "not-an-ip".to_string(),
            ..test_config()
        };
        match Server::bind(&config, NullFactory::new()) {
            Err(ServerError::InvalidAddress { addr, .. }) => assert_eq!(addr, "not-an-ip"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("bind succeeded"),
        }
    }

    type NullFactory = crate::runtime::BasicFactory<crate::runtime::NullProtocol>;

    #[test]
    fn test_bind_address_in_use() {
        let first = Server::bind(&test_config(), NullFactory::new()).unwrap();
        let config = Config {
            port: first.local_addr().port(),
            ..test_config()
        };
        // SO_REUSEADDR does not allow two active listeners on one port.
        assert!(matches!(
            Server::bind(&config, NullFactory::new()),
            Err(ServerError::Bind { .. })
        ));
    }

    #[test]
    fn test_hello_then_close() {
        let recorder = Recorder::new();
        let (mut server, _) = recording_server(&test_config(), &recorder);

        let mut client = connect(&server);
        client.write_all(b"Hello").unwrap();
        client.shutdown(Shutdown::Write).unwrap();

        drive(&mut server, |_| recorder.count(&Event::Lost) == 1);
        assert_eq!(
            recorder.events(),
            vec![Event::Made, Event::Data(b"Hello".to_vec()), Event::Lost]
        );
        assert_eq!(server.connection_count(), 0);
    }

    #[test]
    fn test_peer_close_without_data() {
        let recorder = Recorder::new();
        let (mut server, _) = recording_server(&test_config(), &recorder);

        drop(connect(&server));

        drive(&mut server, |_| recorder.count(&Event::Lost) == 1);
        assert_eq!(recorder.events(), vec![Event::Made, Event::Lost]);
    }

    #[test]
    fn test_handler_close_skips_remaining_input() {
        let recorder = Recorder::closing_after(1);
        let (mut server, _) = recording_server(&test_config(), &recorder);

        let mut client = connect(&server);
        client.write_all(&vec![b'z'; 20_000]).unwrap();
        client.shutdown(Shutdown::Write).unwrap();

        drive(&mut server, |_| recorder.count(&Event::Lost) == 1);
        turn_for(&mut server, Duration::from_millis(50));

        let events = recorder.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], Event::Made);
        assert!(matches!(&events[1], Event::Data(data) if !data.is_empty()));
        assert_eq!(events[2], Event::Lost);
    }

    #[test]
    fn test_reset_reaches_connection_lost() {
        let recorder = Recorder::new();
        let (mut server, _) = recording_server(&test_config(), &recorder);

        let client = connect(&server);
        drive(&mut server, |s| s.connection_count() == 1);

        // Linger of zero turns close into a reset.
        SockRef::from(&client)
            .set_linger(Some(Duration::ZERO))
            .unwrap();
        drop(client);

        drive(&mut server, |s| s.connection_count() == 0);
        turn_for(&mut server, Duration::from_millis(50));
        assert_eq!(recorder.events(), vec![Event::Made, Event::Lost]);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let recorder = Recorder::new();
        let (mut server, _) = recording_server(&test_config(), &recorder);

        let _client = connect(&server);
        drive(&mut server, |s| s.connection_count() == 1);
        let id = server.connection_ids()[0];
        assert!(server.is_active(id));

        server.teardown(id, CloseReason::Local);
        server.teardown(id, CloseReason::Eof);

        assert!(!server.is_active(id));
        assert_eq!(server.connection_count(), 0);
        assert_eq!(recorder.count(&Event::Lost), 1);
    }

    #[test]
    fn test_rejects_unresolvable_address() {
        let recorder = Recorder::new();
        let (mut server, builds) = recording_server(&test_config(), &recorder);

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let _client = StdTcpStream::connect(listener.local_addr().unwrap()).unwrap();
        let (accepted, _) = listener.accept().unwrap();
        let socket = Socket::from(accepted);
        let peer = SockAddr::unix("/tmp/strand-unresolvable.sock").unwrap();

        assert!(server.admit(socket, peer).is_none());
        assert_eq!(server.connection_count(), 0);
        assert_eq!(builds.get(), 0);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_rejects_descriptor_over_limit() {
        let config = Config {
            descriptor_limit: Some(0),
            ..test_config()
        };
        let recorder = Recorder::new();
        let (mut server, builds) = recording_server(&config, &recorder);

        let mut client = connect(&server);
        turn_for(&mut server, Duration::from_millis(100));

        assert_eq!(server.connection_count(), 0);
        assert_eq!(builds.get(), 0);
        assert!(recorder.events().is_empty());

        // The rejected socket was closed.
        client
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let mut buf = [0u8; 8];
        assert!(matches!(client.read(&mut buf), Ok(0) | Err(_)));
    }

    #[test]
    fn test_connection_limit() {
        let config = Config {
            max_connections: 1,
            ..test_config()
        };
        let recorder = Recorder::new();
        let (mut server, builds) = recording_server(&config, &recorder);

        let _first = connect(&server);
        drive(&mut server, |s| s.connection_count() == 1);
        let _second = connect(&server);
        turn_for(&mut server, Duration::from_millis(100));

        assert_eq!(server.connection_count(), 1);
        assert_eq!(builds.get(), 1);
    }

    /// Writes a payload as soon as it is connected; optionally closes.
    struct Greeter {
        payload: Vec<u8>,
        close: bool,
        lost: Rc<Cell<usize>>,
    }

    impl Protocol for Greeter {
        fn connection_made(&mut self, transport: &mut dyn Transport) {
            transport.write(&self.payload);
            if self.close {
                transport.lose_connection();
            }
        }

        fn data_received(&mut self, _data: &mut [u8], _transport: &mut dyn Transport) {
            panic!("no data expected");
        }

        fn connection_lost(&mut self) {
            self.lost.set(self.lost.get() + 1);
        }
    }

    fn greeter_server(payload: Vec<u8>, close: bool) -> (Server<TestFactory>, Rc<Cell<usize>>) {
        let lost = Rc::new(Cell::new(0));
        let counter = Rc::clone(&lost);
        let factory: TestFactory = Box::new(move |_address: &Address| -> Box<dyn Protocol> {
            Box::new(Greeter {
                payload: payload.clone(),
                close,
                lost: Rc::clone(&counter),
            })
        });
        (Server::bind(&test_config(), factory).unwrap(), lost)
    }

    #[test]
    fn test_close_inside_connection_made() {
        let (mut server, lost) = greeter_server(b"bye\r\n".to_vec(), true);

        let mut client = connect(&server);
        drive(&mut server, |_| lost.get() == 1);
        turn_for(&mut server, Duration::from_millis(50));

        assert_eq!(lost.get(), 1);
        assert_eq!(server.connection_count(), 0);

        // Output queued before closing is still flushed.
        client
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let mut received = [0u8; 5];
        client.read_exact(&mut received).unwrap();
        assert_eq!(&received, b"bye\r\n");
    }

    #[test]
    fn test_write_error_reaches_connection_lost_once() {
        // Larger than loopback socket buffers, so output stays pending.
        let (mut server, lost) = greeter_server(vec![b'w'; 32 * 1024 * 1024], false);

        let client = connect(&server);
        drive(&mut server, |s| s.connection_count() == 1);
        let id = server.connection_ids()[0];
        assert!(server.connections.get(id).unwrap().has_pending_output());

        // Reset without reading anything.
        SockRef::from(&client)
            .set_linger(Some(Duration::ZERO))
            .unwrap();
        drop(client);
        std::thread::sleep(Duration::from_millis(50));

        server.flush(id);
        assert_eq!(lost.get(), 1);
        assert_eq!(server.connection_count(), 0);
        assert!(!server.is_active(id));

        // Readiness left over from the reset finds nothing to tear down.
        turn_for(&mut server, Duration::from_millis(50));
        assert_eq!(lost.get(), 1);
    }

    #[test]
    fn test_reset_with_pending_output_through_event_loop() {
        let (mut server, lost) = greeter_server(vec![b'w'; 32 * 1024 * 1024], false);

        let client = connect(&server);
        drive(&mut server, |s| s.connection_count() == 1);

        SockRef::from(&client)
            .set_linger(Some(Duration::ZERO))
            .unwrap();
        drop(client);

        drive(&mut server, |s| s.connection_count() == 0);
        turn_for(&mut server, Duration::from_millis(50));
        assert_eq!(lost.get(), 1);
    }

    #[test]
    fn test_large_write_drains_through_writable_interest() {
        let payload: Vec<u8> = (0..8 * 1024 * 1024).map(|i| (i % 253) as u8).collect();
        let (mut server, lost) = greeter_server(payload.clone(), false);

        let mut client = connect(&server);
        client.set_nonblocking(true).unwrap();

        let mut received = Vec::with_capacity(payload.len());
        let mut buf = vec![0u8; 64 * 1024];
        let deadline = Instant::now() + Duration::from_secs(10);
        while received.len() < payload.len() {
            assert!(Instant::now() < deadline, "timed out receiving payload");
            server.turn(Some(Duration::from_millis(1))).unwrap();
            match client.read(&mut buf) {
                Ok(0) => panic!("unexpected EOF"),
                Ok(n) => received.extend_from_slice(&buf[..n]),
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => {}
                Err(e) => panic!("read failed: {e}"),
            }
        }

        assert!(received == payload);
        assert_eq!(lost.get(), 0);
        assert_eq!(server.connection_count(), 1);
    }

    #[test]
    fn test_shutdown_tears_down_all() {
        let recorder = Recorder::new();
        let (mut server, _) = recording_server(&test_config(), &recorder);

        let _a = connect(&server);
        let _b = connect(&server);
        drive(&mut server, |s| s.connection_count() == 2);

        server.shutdown_handle().shutdown();
        server.run().unwrap();

        assert_eq!(server.connection_count(), 0);
        assert_eq!(recorder.count(&Event::Lost), 2);
    }

    #[test]
    fn test_shutdown_from_other_thread() {
        let recorder = Recorder::new();
        let (mut server, _) = recording_server(&test_config(), &recorder);

        let handle = server.shutdown_handle();
        let stopper = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            handle.shutdown();
        });

        server.run().unwrap();
        stopper.join().unwrap();
    }

    #[test]
    fn test_close_reason_display() {
        assert_eq!(CloseReason::Eof.to_string(), "closed by peer");
        let reason = CloseReason::Error(io::ErrorKind::ConnectionReset.into());
        assert!(reason.to_string().starts_with("I/O error"));
    }
}
