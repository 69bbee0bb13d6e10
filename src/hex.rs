use std::fmt::Write;

use crate::model::error::LoggerError;

/// Bytes reserved per rendered byte: `"0xXX "`, plus one spare.
const BYTES_PER_TOKEN: usize = 6;

/// Room for `"Message of length <usize> from client (hex): "`.
const MESSAGE_PREFIX_CAPACITY: usize = 64;

/// Scratch size for rendering `len` bytes: six per byte plus a terminator.
pub fn hex_capacity(len: usize) -> Result<usize, LoggerError> {
    len.checked_mul(BYTES_PER_TOKEN)
        .and_then(|n| n.checked_add(1))
        .ok_or(LoggerError::Allocation { requested: usize::MAX })
}

/// Scratch size for a full hex dump message of `len` bytes.
pub fn message_capacity(len: usize) -> Result<usize, LoggerError> {
    hex_capacity(len)?
        .checked_add(MESSAGE_PREFIX_CAPACITY)
        .ok_or(LoggerError::Allocation { requested: usize::MAX })
}

fn reserve(requested: usize) -> Result<String, LoggerError> {
    let mut buffer = String::new();
    buffer
        .try_reserve_exact(requested)
        .map_err(|_| LoggerError::Allocation { requested })?;
    Ok(buffer)
}

fn push_tokens(buffer: &mut String, bytes: &[u8]) {
    for byte in bytes {
        // Writing into a String cannot fail.
        let _ = write!(buffer, "0x{:02X} ", byte);
    }
}

/// Renders `bytes` as `0xXX ` tokens, uppercase, each followed by a space.
///
/// The scratch buffer is reserved up front for the worst case. If that
/// reservation fails nothing is rendered.
pub fn render_hex(bytes: &[u8]) -> Result<String, LoggerError> {
    let mut rendered = reserve(hex_capacity(bytes.len())?)?;
    push_tokens(&mut rendered, bytes);
    Ok(rendered)
}

/// Full message body for a hex dump of a client payload, built in a single
/// buffer reserved up front.
pub fn hex_message(bytes: &[u8]) -> Result<String, LoggerError> {
    let mut message = reserve(message_capacity(bytes.len())?)?;
    let _ = write!(
        message,
        "Message of length {} from client (hex): ",
        bytes.len()
    );
    push_tokens(&mut message, bytes);
    Ok(message)
}
