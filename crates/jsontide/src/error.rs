//! Error types for the parser and the value tree.
//!
//! Every syntax error carries the `(line, column)` of the first inadmissible
//! byte; the rendered message is produced by the `Display` implementation, so
//! there is no shared message table and no state outside the error value
//! itself.

use alloc::string::String;

use thiserror::Error;

/// An error raised while parsing, or while querying a parser in the wrong
/// state.
///
/// The first error on a [`Parser`](crate::Parser) is sticky: once raised, all
/// later calls to [`parse_chunk`](crate::Parser::parse_chunk) and
/// [`take_result`](crate::Parser::take_result) return a clone of it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The parser is not in a state where the requested operation makes
    /// sense, e.g. the root value was already taken.
    #[error("Invalid Context")]
    InvalidContext,

    /// An operating-system level failure reported by an I/O-adjacent caller
    /// (file or stream wrappers). The core parser never raises this.
    #[error("I/O Error: {message}")]
    Io {
        /// Rendered OS error text.
        message: String,
    },

    /// The first non-whitespace token was not `[` or `{`.
    #[error("Syntax Error [{line}:{column}]: Root value must be either an array or an object.")]
    InvalidRoot { line: usize, column: usize },

    /// A non-whitespace byte followed a complete root value.
    #[error(
        "Syntax Error [{line}:{column}]: Illegal characters outside of root object, starting with ({token})."
    )]
    TrailingChars {
        line: usize,
        column: usize,
        token: char,
    },

    /// A required token (such as `,` or `:`) was missing.
    #[error("Syntax Error [{line}:{column}]: Missing token ({token}).")]
    ExpectedToken {
        line: usize,
        column: usize,
        token: String,
    },

    /// A well-formed token appeared where the grammar does not allow it.
    #[error("Syntax Error [{line}:{column}]: Unexpected token ({token}).")]
    UnexpectedToken {
        line: usize,
        column: usize,
        token: String,
    },

    /// The bytes at the current position do not form any JSON token.
    #[error("Syntax Error [{line}:{column}]: Illegal token ({token}).")]
    IllegalToken {
        line: usize,
        column: usize,
        token: String,
    },

    /// Input ended before the root value was complete.
    #[error("Syntax Error [{line}:{column}]: Incomplete JSON object.")]
    IncompleteObject { line: usize, column: usize },
}

impl ParseError {
    /// The coarse category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::InvalidContext => ErrorKind::InvalidContext,
            ParseError::Io { .. } => ErrorKind::Io,
            ParseError::InvalidRoot { .. } => ErrorKind::InvalidRoot,
            ParseError::TrailingChars { .. } => ErrorKind::TrailingChars,
            ParseError::ExpectedToken { .. } => ErrorKind::ExpectedToken,
            ParseError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            ParseError::IllegalToken { .. } => ErrorKind::IllegalToken,
            ParseError::IncompleteObject { .. } => ErrorKind::IncompleteObject,
        }
    }

    /// The `(line, column)` where the error was detected, for the kinds that
    /// carry a source location.
    #[must_use]
    pub fn location(&self) -> Option<(usize, usize)> {
        match *self {
            ParseError::InvalidContext | ParseError::Io { .. } => None,
            ParseError::InvalidRoot { line, column }
            | ParseError::TrailingChars { line, column, .. }
            | ParseError::ExpectedToken { line, column, .. }
            | ParseError::UnexpectedToken { line, column, .. }
            | ParseError::IllegalToken { line, column, .. }
            | ParseError::IncompleteObject { line, column } => Some((line, column)),
        }
    }
}

/// Flat error categories, one per [`ParseError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidContext,
    Io,
    InvalidRoot,
    TrailingChars,
    ExpectedToken,
    UnexpectedToken,
    IllegalToken,
    IncompleteObject,
}

/// Returned by [`ObjectMap::insert`](crate::ObjectMap::insert) when a key
/// contains a byte outside the permitted alphabet: the control range
/// `0x00..=0x1F` (other than `\b \f \n \r \t`) and `0x7F` are rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("object keys may not contain unescapable control characters")]
pub struct InvalidKeyError;
