//! A streaming, incremental JSON parser that builds an in-memory value tree.
//!
//! Input is pushed into a [`Parser`] in arbitrary byte-sized chunks — whole
//! documents, network-sized buffers, or one byte at a time — and the parser
//! suspends and resumes at any byte, including in the middle of numbers,
//! escape sequences, and multibyte UTF-8 characters. When the root value is
//! complete, the caller takes ownership of the finished [`Value`] tree.
//!
//! The root must be an array or an object. Syntax errors carry the
//! `(line, column)` of the first offending byte and abort the parse.
//!
//! # Examples
//!
//! Whole-buffer parsing:
//!
//! ```
//! let value = jsontide::parse(br#"{ "name": "arthur", "answers": [42] }"#).unwrap();
//! let root = value.as_object().unwrap();
//! assert_eq!(root.get("name").unwrap().as_str(), Some("arthur"));
//! ```
//!
//! Chunked parsing:
//!
//! ```
//! use jsontide::{ParseStatus, Parser};
//!
//! let mut parser = Parser::new();
//! assert_eq!(parser.parse_chunk(b"[ 10, 2").unwrap(), ParseStatus::Incomplete);
//! assert_eq!(parser.parse_chunk(b"0, 30 ]").unwrap(), ParseStatus::Complete);
//! let root = parser.take_result().unwrap();
//! assert_eq!(root.as_array().unwrap().len(), 3);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod escape_buffer;
mod frame;
mod object;
mod options;
mod parser;
mod scanner;
mod scratch;
mod utf8_buffer;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, InvalidKeyError, ParseError};
pub use object::{Iter as ObjectIter, ObjectMap};
pub use options::Extensions;
pub use parser::{ParseStatus, Parser};
pub use value::{Array, Value, ValueKind};

/// Parses a complete JSON document held in one buffer.
///
/// Convenience wrapper over [`Parser`] for callers that already have the
/// whole text in memory.
///
/// # Errors
///
/// Returns the first syntax error, or [`ParseError::IncompleteObject`] if
/// the buffer ends mid-value.
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    let mut parser = Parser::new();
    parser.parse_chunk(input)?;
    parser.take_result()
}
