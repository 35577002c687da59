//! Huffman file compression.
//!
//! Builds a prefix-code tree from byte frequency counts, serializes the
//! derived code table as text alongside a '0'/'1' payload, and reconstructs
//! the table later to decode the payload back to the original bytes.
//!
//! The pipeline lives in two modules: [`huffman`] builds the tree and
//! derives the codes, [`format`] owns the persisted document format and the
//! decoder. The binary in `src/main.rs` is only argument parsing and file
//! I/O around [`format::encode`] and [`format::decode`].

pub mod error;
pub mod format;
pub mod huffman;

pub use error::{Error, Result};
pub use format::{CodeBook, Encoded, decode, encode};
pub use huffman::Huffman;
