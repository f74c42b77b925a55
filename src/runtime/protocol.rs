//! Protocol handler contract.
//!
//! A `Protocol` reacts to the lifecycle of a single connection. The runtime
//! guarantees, per connection:
//!
//! 1. `connection_made` is called exactly once, before anything else.
//! 2. `data_received` is called zero or more times, in arrival order, with
//!    non-empty chunks of at most `MAX_CHUNK_SIZE` bytes.
//! 3. `connection_lost` is called exactly once, after the last
//!    `data_received`, whatever caused the closure.
//!
//! Handlers are built per connection by a [`ProtocolFactory`].

use crate::address::Address;
use crate::runtime::Transport;
use std::marker::PhantomData;

/// Callbacks for one connection. Every method defaults to a no-op.
pub trait Protocol {
    /// The connection is registered and about to receive data.
    fn connection_made(&mut self, _transport: &mut dyn Transport) {}

    /// A chunk of newly arrived bytes.
    ///
    /// The chunk may be modified in place, e.g. to transform it before
    /// writing it back.
    fn data_received(&mut self, _data: &mut [u8], _transport: &mut dyn Transport) {}

    /// The connection is gone. The handler is dropped right after.
    fn connection_lost(&mut self) {}
}

/// Builds one [`Protocol`] per accepted connection.
///
/// Building cannot fail. A factory that has nothing to serve returns a
/// [`NullProtocol`].
pub trait ProtocolFactory {
    fn build_protocol(&mut self, address: &Address) -> Box<dyn Protocol>;
}

impl<F> ProtocolFactory for F
where
    F: FnMut(&Address) -> Box<dyn Protocol>,
{
    fn build_protocol(&mut self, address: &Address) -> Box<dyn Protocol> {
        self(address)
    }
}

/// Factory for handlers that need no per-connection input.
pub struct BasicFactory<P> {
    _protocol: PhantomData<fn() -> P>,
}

impl<P> BasicFactory<P> {
    pub fn new() -> Self {
        Self {
            _protocol: PhantomData,
        }
    }
}

impl<P> Default for BasicFactory<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ProtocolFactory for BasicFactory<P>
where
    P: Protocol + Default + 'static,
{
    fn build_protocol(&mut self, _address: &Address) -> Box<dyn Protocol> {
        Box::new(P::default())
    }
}

/// Handler that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProtocol;

impl Protocol for NullProtocol {}
