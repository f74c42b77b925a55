//! Per-client connection state and the registry of live connections.
//!
//! A `Connection` owns its socket, its input and output buffers, its peer
//! address and its protocol handler. The handler only ever sees the
//! connection through the [`Transport`] half (`Link`), borrowed for the
//! duration of a single callback.
//!
//! Connections are destroyed in exactly one place, [`Connection::release`],
//! which takes the connection by value. The registry hands a connection
//! out of its slab at most once, so a second teardown of the same id finds
//! nothing to release.

use crate::address::Address;
use crate::runtime::buffer::{self, Fill};
use crate::runtime::{chunk_size, Protocol, Transport, MAX_CHUNK_SIZE};
use bytes::BytesMut;
use mio::net::TcpStream;
use mio::{Interest, Registry, Token};
use slab::Slab;
use std::io;
use tracing::{debug, trace};

/// Key of a connection in the [`ConnectionRegistry`].
pub type ConnectionId = usize;

/// Outcome of invoking handler callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The handler left the connection open.
    Open,
    /// The handler called `lose_connection`.
    Closed,
}

/// The part of a connection a handler may act on.
struct Link {
    address: Address,
    output: BytesMut,
    closing: bool,
}

impl Transport for Link {
    fn peer_address(&self) -> &Address {
        &self.address
    }

    fn write(&mut self, data: &[u8]) {
        if self.closing {
            debug!(peer = %self.address, len = data.len(), "Dropping write after lose_connection");
            return;
        }
        self.output.extend_from_slice(data);
    }

    fn lose_connection(&mut self) {
        self.closing = true;
    }

    fn is_closing(&self) -> bool {
        self.closing
    }
}

/// A single client connection.
pub struct Connection {
    stream: TcpStream,
    input: BytesMut,
    link: Link,
    protocol: Box<dyn Protocol>,
    /// Interest currently registered with the poller, if any.
    interest: Option<Interest>,
}

impl Connection {
    /// Bind `protocol` to an accepted, non-blocking stream.
    pub fn new(stream: TcpStream, address: Address, protocol: Box<dyn Protocol>) -> Self {
        Self {
            stream,
            input: BytesMut::with_capacity(MAX_CHUNK_SIZE),
            link: Link {
                address,
                output: BytesMut::new(),
                closing: false,
            },
            protocol,
            interest: None,
        }
    }

    pub fn address(&self) -> &Address {
        &self.link.address
    }

    /// Whether the handler has asked for this connection to be closed.
    pub fn is_closed(&self) -> bool {
        self.link.closing
    }

    pub fn has_pending_output(&self) -> bool {
        !self.link.output.is_empty()
    }

    /// Tell the handler it is connected.
    pub(crate) fn make_connection(&mut self) -> Dispatch {
        self.protocol.connection_made(&mut self.link);
        self.status()
    }

    /// Pull available bytes from the socket, up to `MAX_CHUNK_SIZE`
    /// buffered. `scratch` is the read area shared by all connections.
    pub(crate) fn fill_input(&mut self, scratch: &mut [u8]) -> io::Result<Fill> {
        buffer::fill(&mut self.stream, &mut self.input, scratch, MAX_CHUNK_SIZE)
    }

    /// Hand buffered input to the handler in bounded chunks.
    ///
    /// Stops as soon as the handler closes the connection. Input left over
    /// at that point is discarded, never delivered.
    pub(crate) fn dispatch_input(&mut self) -> Dispatch {
        let available = self.input.len();
        if available == 0 {
            return self.status();
        }

        let chunk = chunk_size(available);
        while !self.input.is_empty() {
            let len = chunk.min(self.input.len());
            let mut data = self.input.split_to(len);
            self.protocol.data_received(&mut data, &mut self.link);

            if self.link.closing {
                if !self.input.is_empty() {
                    trace!(
                        peer = %self.link.address,
                        discarded = self.input.len(),
                        "Connection closed mid-drain"
                    );
                    self.input.clear();
                }
                return Dispatch::Closed;
            }
        }

        Dispatch::Open
    }

    /// Write queued output. Returns `true` once nothing is pending.
    pub(crate) fn flush_output(&mut self) -> io::Result<bool> {
        buffer::flush(&mut self.stream, &mut self.link.output)
    }

    /// Register for readiness, readable always and writable while output
    /// is pending.
    pub(crate) fn register(&mut self, registry: &Registry, token: Token) -> io::Result<()> {
        let interest = self.wanted_interest();
        match self.interest {
            None => registry.register(&mut self.stream, token, interest)?,
            Some(current) if current != interest => {
                registry.reregister(&mut self.stream, token, interest)?
            }
            Some(_) => return Ok(()),
        }
        self.interest = Some(interest);
        Ok(())
    }

    /// Tear the connection down: notify the handler, push out what can be
    /// sent without blocking, and leave the poller.
    ///
    /// Consumes the connection, so it can run at most once.
    pub(crate) fn release(mut self, registry: &Registry) {
        self.protocol.connection_lost();

        if self.has_pending_output() {
            if let Err(e) = self.flush_output() {
                debug!(peer = %self.link.address, error = %e, "Dropping unsent output");
            }
        }

        if self.interest.is_some() {
            if let Err(e) = registry.deregister(&mut self.stream) {
                debug!(peer = %self.link.address, error = %e, "Deregister failed");
            }
        }
    }

    fn wanted_interest(&self) -> Interest {
        if self.has_pending_output() {
            Interest::READABLE | Interest::WRITABLE
        } else {
            Interest::READABLE
        }
    }

    fn status(&self) -> Dispatch {
        if self.link.closing {
            Dispatch::Closed
        } else {
            Dispatch::Open
        }
    }

    #[cfg(test)]
    pub(crate) fn input_mut(&mut self) -> &mut BytesMut {
        &mut self.input
    }
}

/// Registry of live connections using slab allocation.
///
/// A connection is in the registry exactly while it is open. Provides O(1)
/// insert, lookup, and remove.
pub struct ConnectionRegistry {
    connections: Slab<Connection>,
    max_connections: usize,
}

impl ConnectionRegistry {
    /// Create a new registry with specified maximum capacity.
    pub fn new(max_connections: usize) -> Self {
        Self {
            connections: Slab::with_capacity(max_connections.min(4096)),
            max_connections,
        }
    }

    /// Insert a new connection into the registry.
    ///
    /// Returns `None` if the registry is at capacity.
    pub fn insert(&mut self, conn: Connection) -> Option<ConnectionId> {
        if self.is_full() {
            return None;
        }
        Some(self.connections.insert(conn))
    }

    pub fn get(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id)
    }

    pub fn get_mut(&mut self, id: ConnectionId) -> Option<&mut Connection> {
        self.connections.get_mut(id)
    }

    /// Remove a connection from the registry.
    ///
    /// Returns `None` if it was already removed.
    pub fn remove(&mut self, id: ConnectionId) -> Option<Connection> {
        self.connections.try_remove(id)
    }

    pub fn contains(&self, id: ConnectionId) -> bool {
        self.connections.contains(id)
    }

    /// Number of live connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.connections.len() >= self.max_connections
    }

    /// Maximum number of connections allowed.
    pub fn capacity(&self) -> usize {
        self.max_connections
    }

    /// Ids of all live connections.
    pub fn ids(&self) -> Vec<ConnectionId> {
        self.connections.iter().map(|(id, _)| id).collect()
    }
}
