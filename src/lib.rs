//! strand: a minimal event-driven TCP server framework
//!
//! A single-threaded reactor accepts connections, binds each one to a
//! [`Protocol`] handler built by a [`ProtocolFactory`], and delivers input
//! to the handler in bounded chunks. Handlers act on their connection
//! through a [`Transport`]: they can write, look up the peer address, and
//! close.

pub mod address;
pub mod config;
pub mod error;
pub mod protocols;
pub mod runtime;

pub use address::Address;
pub use config::Config;
pub use error::{Result, ServerError};
pub use runtime::{
    BasicFactory, CloseReason, ConnectionId, NullProtocol, Protocol, ProtocolFactory, Server,
    ShutdownHandle, Transport,
};
