//! Error types for server setup.
//!
//! Only setup failures are surfaced to the caller. Everything that happens
//! after a connection has been accepted is resolved by tearing that
//! connection down.

use std::io;
use std::net::AddrParseError;
use thiserror::Error;

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Fatal errors raised while creating or driving the event loop.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The poller could not be created.
    #[error("failed to initialize event loop: {0}")]
    EventLoop(#[source] io::Error),

    /// The configured host/port pair is not a socket address.
    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    /// Creating, binding or listening on the socket failed.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The listener or the shutdown waker could not be registered.
    #[error("failed to register with event loop: {0}")]
    Register(#[source] io::Error),

    /// Waiting for readiness failed.
    #[error("event loop poll failed: {0}")]
    Poll(#[source] io::Error),
}
