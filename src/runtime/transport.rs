//! The capability a protocol handler uses to act on its connection.

use crate::address::Address;

/// Write to, or close, the connection a handler is bound to.
///
/// A `&mut dyn Transport` is only ever handed out as an argument of a
/// [`Protocol`](crate::runtime::Protocol) callback, so it cannot be used
/// once the callback has returned.
pub trait Transport {
    /// Address of the peer on the other end of this connection.
    fn peer_address(&self) -> &Address;

    /// Queue `data` for transmission.
    ///
    /// Has no effect after [`lose_connection`](Transport::lose_connection).
    fn write(&mut self, data: &[u8]);

    /// Mark the connection for closure.
    ///
    /// The connection is released when the current callback returns; no
    /// further `data_received` calls are made.
    fn lose_connection(&mut self);

    /// Whether `lose_connection` has been called.
    fn is_closing(&self) -> bool;
}
