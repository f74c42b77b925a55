//! Single-threaded reactor runtime.
//!
//! Readiness comes from mio (epoll on Linux, kqueue on macOS). On top of
//! that the runtime provides:
//! - `buffer`: bounded input fills and queued output
//! - `Connection`: per-client state bound to one `Protocol` handler
//! - `ConnectionRegistry`: the set of live connections
//! - `Server`: accept loop, chunked dispatch and teardown

mod buffer;
mod connection;
mod event_loop;
mod protocol;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use buffer::Fill;
pub use connection::{Connection, ConnectionId, ConnectionRegistry, Dispatch};
pub use event_loop::{CloseReason, Server, ShutdownHandle};
pub use protocol::{BasicFactory, NullProtocol, Protocol, ProtocolFactory};
pub use transport::Transport;

/// Smallest chunk handed to `data_received` when at least this many bytes
/// are buffered.
pub const MIN_CHUNK_SIZE: usize = 1024;

/// Largest chunk handed to `data_received`. Also the most input buffered
/// by a single fill.
pub const MAX_CHUNK_SIZE: usize = 16384;

/// Chunk size used to drain `available` buffered bytes.
///
/// Small reads are rounded up to `MIN_CHUNK_SIZE` so that a single chunk
/// covers them; large reads are split at `MAX_CHUNK_SIZE`.
pub fn chunk_size(available: usize) -> usize {
    available.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE)
}
