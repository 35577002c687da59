//! Error types for encoding and decoding.

use thiserror::Error;

/// Error variants for the compression pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The input contains a newline byte. The table format stores each
    /// symbol as the first byte of a line, so a newline symbol cannot be
    /// written without breaking the record framing.
    #[error("input contains a newline, which the table format cannot represent")]
    NewlineSymbol,

    /// A table record failed validation during reconstruction.
    #[error("malformed table at line {line}: {reason}")]
    MalformedTable { line: usize, reason: &'static str },

    /// The payload contains a byte that is neither '0', '1', nor whitespace.
    #[error("invalid payload byte {byte:#04x} at offset {offset}")]
    InvalidPayload { offset: usize, byte: u8 },

    /// An I/O error occurred while reading or writing a document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for compression operations.
pub type Result<T> = std::result::Result<T, Error>;
