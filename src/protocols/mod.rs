//! Protocol implementations.
//!
//! Each protocol is a [`Protocol`] handler driven by the runtime.
//!
//! - `rot13`: rotates letters in every chunk and writes it back
//! - `echo`: writes every chunk back unchanged
//! - `ping`: line-based ping/pong for health checks

pub mod echo;
pub mod ping;
pub mod rot13;

pub use echo::EchoProtocol;
pub use ping::PingProtocol;
pub use rot13::Rot13Protocol;

use crate::address::Address;
use crate::config::ProtocolType;
use crate::runtime::{Protocol, ProtocolFactory};
use tracing::trace;

/// Factory building a fresh handler of the configured type per connection.
pub fn factory(protocol: ProtocolType) -> impl ProtocolFactory {
    move |address: &Address| -> Box<dyn Protocol> {
        trace!(peer = %address, ?protocol, "Building protocol handler");
        match protocol {
            ProtocolType::Rot13 => Box::new(Rot13Protocol),
            ProtocolType::Echo => Box::new(EchoProtocol),
            ProtocolType::Ping => Box::new(PingProtocol::default()),
        }
    }
}
