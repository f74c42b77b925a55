//! Echo service: every chunk is written back unchanged.
//!
//! No framing, so the output is byte-for-byte the input. Useful for I/O
//! throughput testing.

use crate::runtime::{Protocol, Transport};

#[derive(Debug, Default)]
pub struct EchoProtocol;

impl Protocol for EchoProtocol {
    fn data_received(&mut self, data: &mut [u8], transport: &mut dyn Transport) {
        transport.write(data);
    }
}
