//! Ping protocol handler.

use super::parser::{self, Command, ParseResult};
use crate::runtime::{Protocol, Transport};
use bytes::{Buf, BytesMut};
use tracing::debug;

/// Line-based ping handler.
///
/// Chunks carry no framing, so partial lines are kept until their
/// terminator arrives.
#[derive(Debug, Default)]
pub struct PingProtocol {
    pending: BytesMut,
}

impl Protocol for PingProtocol {
    fn data_received(&mut self, data: &mut [u8], transport: &mut dyn Transport) {
        self.pending.extend_from_slice(data);

        loop {
            match parser::parse(&self.pending) {
                ParseResult::Complete(command, consumed) => {
                    self.pending.advance(consumed);
                    match command {
                        Command::Ping => transport.write(parser::RESPONSE_PONG),
                        Command::PingMsg(msg) => {
                            transport.write(b"PONG ");
                            transport.write(&msg);
                            transport.write(b"\r\n");
                        }
                        Command::Quit => {
                            transport.write(parser::RESPONSE_OK);
                            transport.lose_connection();
                            return;
                        }
                    }
                }
                ParseResult::Unknown(consumed) => {
                    self.pending.advance(consumed);
                    transport.write(parser::RESPONSE_UNKNOWN);
                }
                ParseResult::TooLong => {
                    debug!(peer = %transport.peer_address(), "Ping line too long");
                    transport.write(parser::RESPONSE_TOO_LONG);
                    transport.lose_connection();
                    return;
                }
                ParseResult::Incomplete => return,
            }
        }
    }

    fn connection_lost(&mut self) {
        self.pending.clear();
    }
}
