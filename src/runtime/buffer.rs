//! Buffered I/O on top of readiness notifications.
//!
//! mio only reports that a socket became ready; it never moves bytes. This
//! module supplies the buffered half of the event primitive:
//!
//! - `fill`: pull bytes from a non-blocking reader into an input buffer,
//!   stopping at a limit so that a single readiness event never buffers
//!   more than one maximum chunk.
//! - `flush`: push queued output to a non-blocking writer until it would
//!   block.
//!
//! Both operate on any `Read`/`Write` so they can be exercised without a
//! socket.

use bytes::{Buf, BytesMut};
use std::io::{self, Read, Write};

/// Why a `fill` stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// The reader has nothing more right now.
    Drained,
    /// The limit was reached; the reader may hold more.
    Full,
    /// The peer closed its half of the stream.
    Eof,
}

/// Read from `reader` into `buf` until it would block, hits EOF, or
/// `buf` holds `limit` bytes.
///
/// Reads land in `scratch` and are copied into `buf`, so `buf` never has
/// to be zero-filled ahead of a read. `scratch` must not be empty.
///
/// Bytes read before an error stay in `buf`.
pub fn fill<R: Read>(
    reader: &mut R,
    buf: &mut BytesMut,
    scratch: &mut [u8],
    limit: usize,
) -> io::Result<Fill> {
    debug_assert!(!scratch.is_empty(), "empty scratch buffer");

    while buf.len() < limit {
        let want = (limit - buf.len()).min(scratch.len());

        match reader.read(&mut scratch[..want]) {
            Ok(0) => return Ok(Fill::Eof),
            Ok(n) => buf.extend_from_slice(&scratch[..n]),
            Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(Fill::Drained),
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(Fill::Full)
}

/// Write queued bytes from `buf` to `writer` until it is empty or the
/// writer would block.
///
/// Returns `true` once `buf` is empty.
pub fn flush<W: Write>(writer: &mut W, buf: &mut BytesMut) -> io::Result<bool> {
    while !buf.is_empty() {
        match writer.write(buf) {
            Ok(0) => {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "write returned 0"));
            }
            Ok(n) => buf.advance(n),
            Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(false),
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(true)
}
