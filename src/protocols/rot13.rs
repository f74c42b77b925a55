//! ROT13 service: every chunk is rotated in place and written back.

use crate::runtime::{Protocol, Transport};

/// Rotate ASCII letters by 13 places. Other bytes are left alone.
pub fn rot13(data: &mut [u8]) {
    for byte in data {
        *byte = match *byte {
            b'a'..=b'm' | b'A'..=b'M' => *byte + 13,
            b'n'..=b'z' | b'N'..=b'Z' => *byte - 13,
            other => other,
        };
    }
}

#[derive(Debug, Default)]
pub struct Rot13Protocol;

impl Protocol for Rot13Protocol {
    fn data_received(&mut self, data: &mut [u8], transport: &mut dyn Transport) {
        rot13(data);
        transport.write(data);
    }
}
