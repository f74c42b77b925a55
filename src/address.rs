//! Resolved peer addresses.
//!
//! An `Address` is the numeric host/port text of a connected peer. It is
//! built once at accept time from the raw socket address returned by
//! `accept(2)` and never changes afterwards.

use socket2::SockAddr;
use std::fmt;
use std::net::SocketAddr;
use thiserror::Error;

/// Failure to turn a raw socket address into an [`Address`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The address is not an IPv4 or IPv6 socket address.
    #[error("unsupported address family {0}")]
    UnsupportedFamily(u16),
}

/// Numeric host and service of a peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    socket_addr: SocketAddr,
    host: String,
    port: String,
}

impl Address {
    /// Resolve a raw peer address.
    ///
    /// Either every field is populated or an error is returned; there is no
    /// partially valid `Address`.
    pub fn resolve(raw: &SockAddr) -> Result<Self, AddressError> {
        raw.as_socket()
            .map(Self::from)
            .ok_or_else(|| AddressError::UnsupportedFamily(u16::from(raw.family())))
    }

    /// Numeric host, e.g. `127.0.0.1` or `::1`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Numeric port, e.g. `1618`.
    pub fn port(&self) -> &str {
        &self.port
    }
}

impl From<SocketAddr> for Address {
    fn from(socket_addr: SocketAddr) -> Self {
        Self {
            socket_addr,
            host: socket_addr.ip().to_string(),
            port: socket_addr.port().to_string(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.socket_addr.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ipv4() {
        let raw = SockAddr::from("10.1.2.3:4567".parse::<SocketAddr>().unwrap());
        let address = Address::resolve(&raw).unwrap();
        assert_eq!(address.host(), "10.1.2.3");
        assert_eq!(address.port(), "4567");
        assert_eq!(address.to_string(), "10.1.2.3:4567");
    }

    #[test]
    fn test_resolve_ipv6() {
        let raw = SockAddr::from("[::1]:80".parse::<SocketAddr>().unwrap());
        let address = Address::resolve(&raw).unwrap();
        assert_eq!(address.host(), "::1");
        assert_eq!(address.port(), "80");
        assert_eq!(address.to_string(), "[::1]:80");
    }

    #[test]
    fn test_resolve_unix_fails() {
        let raw = SockAddr::unix("/tmp/strand-address-test.sock").unwrap();
        match Address::resolve(&raw) {
            Err(AddressError::UnsupportedFamily(family)) => {
                assert_eq!(family, libc::AF_UNIX as u16);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
