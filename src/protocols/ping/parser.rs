//! Ping protocol parser.

/// Longest accepted line, terminator excluded.
pub const MAX_LINE_LENGTH: usize = 1024;

/// Parsed ping command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Simple ping (no message).
    Ping,
    /// Ping with a message to echo back.
    PingMsg(Vec<u8>),
    /// Quit command.
    Quit,
}

/// Parse result.
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed command with bytes consumed.
    Complete(Command, usize),
    /// Need more data.
    Incomplete,
    /// Unknown command; the line spans this many bytes.
    Unknown(usize),
    /// The line exceeds `MAX_LINE_LENGTH`.
    TooLong,
}

/// Parse a ping protocol command from the input buffer.
///
/// Lines end in `\n`; a preceding `\r` is stripped.
pub fn parse(input: &[u8]) -> ParseResult {
    let line_end = match input.iter().position(|&b| b == b'\n') {
        Some(pos) => pos,
        None => {
            // A trailing `\r` may still be completed by its `\n`.
            let partial = input.strip_suffix(b"\r").unwrap_or(input);
            if partial.len() > MAX_LINE_LENGTH {
                return ParseResult::TooLong;
            }
            return ParseResult::Incomplete;
        }
    };

    let consumed = line_end + 1;
    let line = input[..line_end].strip_suffix(b"\r").unwrap_or(&input[..line_end]);
    if line.len() > MAX_LINE_LENGTH {
        return ParseResult::TooLong;
    }

    // Parse command (case-insensitive)
    if line.eq_ignore_ascii_case(b"PING") {
        ParseResult::Complete(Command::Ping, consumed)
    } else if line.eq_ignore_ascii_case(b"QUIT") {
        ParseResult::Complete(Command::Quit, consumed)
    } else if line.len() > 5 && line[..5].eq_ignore_ascii_case(b"PING ") {
        ParseResult::Complete(Command::PingMsg(line[5..].to_vec()), consumed)
    } else {
        ParseResult::Unknown(consumed)
    }
}

pub const RESPONSE_PONG: &[u8] = b"PONG\r\n";
pub const RESPONSE_OK: &[u8] = b"OK\r\n";
pub const RESPONSE_UNKNOWN: &[u8] = b"ERROR unknown command\r\n";
pub const RESPONSE_TOO_LONG: &[u8] = b"ERROR line too long\r\n";
