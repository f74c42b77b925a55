//! Ping protocol implementation.
//!
//! A minimal protocol for health checks and latency measurement:
//! - Client sends: `PING\r\n` or `PING <message>\r\n`
//! - Server responds: `PONG\r\n` or `PONG <message>\r\n`
//! - `QUIT\r\n` is answered with `OK\r\n`, then the connection is closed
//!
//! ## Protocol Format
//!
//! ```text
//! Request:  PING\r\n
//! Response: PONG\r\n
//!
//! Request:  PING hello\r\n
//! Response: PONG hello\r\n
//! ```
//!
//! Unknown commands get `ERROR unknown command\r\n`. Lines longer than
//! `MAX_LINE_LENGTH` get `ERROR line too long\r\n` and close the connection.

pub mod handler;
pub mod parser;

pub use handler::PingProtocol;
pub use parser::MAX_LINE_LENGTH;
