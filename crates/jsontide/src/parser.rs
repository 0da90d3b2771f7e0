//! The incremental parser: context, dispatch loop, and per-mode parsers.
//!
//! Input arrives in arbitrary byte-sized chunks. The parser suspends at any
//! byte: scalar tokens keep their progress in the context's side buffers and
//! set `inside_token` so the next chunk resumes at the exact byte where the
//! previous one ended, with no whitespace skipping in between. Structure is
//! tracked by the frame stack — a completed child value pops its frame and
//! travels to the parent through the parent's `pending` slot.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use bstr::ByteSlice;

use crate::{
    error::ParseError,
    escape_buffer::UnicodeEscapeBuffer,
    frame::{
        ArrayState, Frame, Mode, NUM_ACCEPT_DEC_PT, NUM_ACCEPT_DIGITS, NUM_ACCEPT_EXP,
        NUM_ACCEPT_SIGN, NUM_DEFAULT, NUM_HAS_DEC_PT, NUM_HAS_DIGITS, NUM_HAS_EXP, NUM_IS_VALID,
        ObjectState, STR_ESCAPE, STR_SURROGATE, STR_UNICODE, STR_UTF8,
    },
    object::ObjectMap,
    options::Extensions,
    scanner::{TokenType, starts_token, token_type},
    scratch::TokenScratch,
    utf8_buffer::{Utf8Accumulator, Utf8Step},
    value::Value,
};

/// Longest accepted number token, in bytes.
const NUMBER_TOKEN_MAX: usize = 25;
/// Longest keyword (`false`).
const KEYWORD_TOKEN_MAX: usize = 5;
/// Initial capacity of arrays under construction.
const DEFAULT_ARRAY_CAPACITY: usize = 8;
/// Initial capacity of string buffers under construction.
const DEFAULT_STRING_CAPACITY: usize = 16;

/// Outcome of feeding one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    /// More input is needed before the root value is complete.
    Incomplete,
    /// A full root value has been consumed; the tree is ready to take.
    Complete,
}

/// A resumable JSON parser.
///
/// Feed input with [`parse_chunk`](Parser::parse_chunk) — in one buffer or
/// byte by byte, the result is the same — then collect the finished tree
/// with [`take_result`](Parser::take_result).
///
/// A parser handles exactly one root value, which must be an array or an
/// object. The first error is sticky: every later call returns it again.
///
/// # Examples
///
/// ```
/// use jsontide::{ParseStatus, Parser};
///
/// let mut parser = Parser::new();
/// assert_eq!(parser.parse_chunk(b"[1, ").unwrap(), ParseStatus::Incomplete);
/// assert_eq!(parser.parse_chunk(b"2]").unwrap(), ParseStatus::Complete);
/// let root = parser.take_result().unwrap();
/// assert_eq!(root.as_array().unwrap().len(), 2);
/// ```
#[derive(Debug)]
pub struct Parser {
    frames: Vec<Frame>,
    line: usize,
    column: usize,
    depth: usize,

    /// Token text for numbers and keywords.
    scratch: TokenScratch,
    /// `\uXXXX` digits, with room for a surrogate pair.
    escape: UnicodeEscapeBuffer,
    /// Literal multibyte characters, in strings and bare tokens.
    utf8: Utf8Accumulator,

    /// A non-delimited token spans the current chunk boundary; the scanner
    /// must not skip whitespace before resuming it.
    inside_token: bool,

    extensions: Extensions,
    error: Option<ParseError>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser positioned at line 1, column 1.
    #[must_use]
    pub fn new() -> Self {
        Parser {
            frames: Vec::new(),
            line: 1,
            column: 1,
            depth: 0,
            scratch: TokenScratch::new(),
            escape: UnicodeEscapeBuffer::new(),
            utf8: Utf8Accumulator::new(),
            inside_token: false,
            extensions: Extensions::NONE,
            error: None,
        }
    }

    /// Enables optional syntax extensions. Call before feeding input.
    pub fn set_extensions(&mut self, extensions: Extensions) {
        self.extensions = extensions;
    }

    /// The sticky error, if one has been raised.
    #[must_use]
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Feeds one chunk of input.
    ///
    /// Returns [`ParseStatus::Complete`] once a whole root value has been
    /// consumed, [`ParseStatus::Incomplete`] when more input may follow.
    ///
    /// # Errors
    ///
    /// The first syntax error aborts the parse; it is returned here and from
    /// every subsequent call.
    pub fn parse_chunk(&mut self, chunk: &[u8]) -> Result<ParseStatus, ParseError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        if self.frames.is_empty() {
            self.frames.push(Frame::Start {
                result: None,
                done: false,
            });
        }

        match self.run(chunk) {
            Ok(()) => Ok(if self.mode() == Mode::Done {
                ParseStatus::Complete
            } else {
                ParseStatus::Incomplete
            }),
            Err(error) => {
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Transfers ownership of the parsed root value to the caller.
    ///
    /// # Errors
    ///
    /// Returns the sticky error if parsing failed,
    /// [`ParseError::IncompleteObject`] if input ended mid-value, and
    /// [`ParseError::InvalidContext`] if the root was already taken.
    pub fn take_result(&mut self) -> Result<Value, ParseError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        if self.mode() != Mode::Done {
            let error = ParseError::IncompleteObject {
                line: self.line,
                column: self.column,
            };
            self.error = Some(error.clone());
            return Err(error);
        }
        match self.frames.last_mut() {
            Some(Frame::Start { result, .. }) => result.take().ok_or(ParseError::InvalidContext),
            _ => Err(ParseError::InvalidContext),
        }
    }

    // --------------------------------------------------------------------
    // Dispatch loop
    // --------------------------------------------------------------------

    fn run(&mut self, src: &[u8]) -> Result<(), ParseError> {
        let mut pos = 0usize;

        while pos < src.len() {
            let Some(found) = self.find_token(src, pos) else {
                break;
            };
            pos = found;

            match self.mode() {
                Mode::Number => {
                    let (next, value) = self.step_number(src, pos)?;
                    pos = next;
                    if let Some(value) = value {
                        self.finish_token(value);
                    }
                    continue;
                }
                Mode::String => {
                    let (next, value) = self.step_string(src, pos)?;
                    pos = next;
                    if let Some(value) = value {
                        self.finish_token(value);
                    }
                    continue;
                }
                Mode::Keyword => {
                    let (next, value) = self.step_keyword(src, pos)?;
                    pos = next;
                    if let Some(value) = value {
                        self.finish_token(value);
                    }
                    continue;
                }
                Mode::Utf8 => {
                    let (next, value) = self.step_utf8(src, pos)?;
                    pos = next;
                    if let Some(value) = value {
                        self.finish_token(value);
                    }
                    continue;
                }
                Mode::Array => {
                    let (next, consumed) = self.step_array(src, pos)?;
                    pos = next;
                    if consumed {
                        continue;
                    }
                }
                Mode::Object => {
                    let (next, consumed) = self.step_object(src, pos)?;
                    pos = next;
                    if consumed {
                        continue;
                    }
                }
                Mode::Done => {
                    return Err(ParseError::TrailingChars {
                        line: self.line,
                        column: self.column,
                        token: display_char(src[pos]),
                    });
                }
                Mode::Start => {}
                Mode::Undefined => return Err(ParseError::InvalidContext),
            }

            self.start_value(src, &mut pos)?;
        }

        Ok(())
    }

    /// Skips whitespace up to the next token byte, tracking line and column.
    /// Returns `None` when the chunk holds nothing but whitespace. While a
    /// token spans the chunk boundary, the position comes back untouched.
    fn find_token(&mut self, src: &[u8], mut pos: usize) -> Option<usize> {
        if self.inside_token {
            return (pos < src.len()).then_some(pos);
        }

        while pos < src.len() {
            match src[pos] {
                b' ' => {
                    self.column += 1;
                    pos += 1;
                }
                b'\t' => {
                    self.column += 3;
                    pos += 1;
                }
                // \v counts as a line break, like \n.
                b'\n' | 0x0B => {
                    self.column = 1;
                    self.line += 1;
                    pos += 1;
                }
                _ => return Some(pos),
            }
        }
        None
    }

    /// Opens the value starting at `pos`: pushes the child frame, allocates
    /// its initial partial value, and consumes the opener byte where the
    /// token has one.
    fn start_value(&mut self, src: &[u8], pos: &mut usize) -> Result<(), ParseError> {
        let byte = src[*pos];
        let token = token_type(byte);

        if !starts_token(token) {
            return Err(self.illegal_byte(byte));
        }
        if self.depth == 0 && !matches!(token, TokenType::ArrayBegin | TokenType::ObjectBegin) {
            return Err(ParseError::InvalidRoot {
                line: self.line,
                column: self.column,
            });
        }

        match token {
            TokenType::ArrayBegin => {
                self.frames.push(Frame::Array {
                    items: Vec::with_capacity(DEFAULT_ARRAY_CAPACITY),
                    state: ArrayState::Default,
                    pending: None,
                });
                *pos += 1;
                self.column += 1;
                self.depth += 1;
            }
            TokenType::ObjectBegin => {
                self.frames.push(Frame::Object {
                    members: ObjectMap::new(),
                    state: ObjectState::Default,
                    key: None,
                    pending: None,
                });
                *pos += 1;
                self.column += 1;
                self.depth += 1;
            }
            TokenType::Number => {
                self.scratch.clear();
                self.frames.push(Frame::Number { flags: NUM_DEFAULT });
                self.inside_token = true;
            }
            TokenType::String => {
                self.frames.push(Frame::String {
                    buf: String::with_capacity(DEFAULT_STRING_CAPACITY),
                    flags: 0,
                });
                *pos += 1;
                self.column += 1;
                self.inside_token = true;
            }
            TokenType::Keyword => {
                self.scratch.clear();
                self.frames.push(Frame::Keyword);
                self.inside_token = true;
            }
            TokenType::Unicode => {
                self.utf8.clear();
                self.frames.push(Frame::Utf8);
                self.inside_token = true;
            }
            _ => return Err(self.illegal_byte(byte)),
        }

        Ok(())
    }

    /// Pops the finished scalar frame and hands its value to the parent.
    fn finish_token(&mut self, value: Value) {
        self.frames.pop();
        self.deposit(value);
        self.inside_token = false;
    }

    /// Stores a completed value in the parent frame's return slot. A value
    /// reaching the bottom frame is the root: the parse is done.
    fn deposit(&mut self, value: Value) {
        match self.frames.last_mut() {
            Some(Frame::Start { result, done }) => {
                *result = Some(value);
                *done = true;
            }
            Some(Frame::Array { pending, .. } | Frame::Object { pending, .. }) => {
                *pending = Some(value);
            }
            _ => {}
        }
    }

    fn mode(&self) -> Mode {
        match self.frames.last() {
            None => Mode::Undefined,
            Some(Frame::Start { done: true, .. }) => Mode::Done,
            Some(Frame::Start { .. }) => Mode::Start,
            Some(Frame::Array { .. }) => Mode::Array,
            Some(Frame::Object { .. }) => Mode::Object,
            Some(Frame::Number { .. }) => Mode::Number,
            Some(Frame::String { .. }) => Mode::String,
            Some(Frame::Keyword) => Mode::Keyword,
            Some(Frame::Utf8) => Mode::Utf8,
        }
    }

    // --------------------------------------------------------------------
    // Containers
    // --------------------------------------------------------------------

    fn step_array(&mut self, src: &[u8], pos: usize) -> Result<(usize, bool), ParseError> {
        let line = self.line;
        let column = self.column;
        let token = token_type(src[pos]);

        enum Act {
            Consume,
            Close,
            Fall,
        }

        let act = {
            let Some(Frame::Array {
                items,
                state,
                pending,
            }) = self.frames.last_mut()
            else {
                return Err(ParseError::InvalidContext);
            };

            if let Some(value) = pending.take() {
                items.push(value);
                *state = ArrayState::NewMember;
            }

            match token {
                TokenType::Separator => {
                    if *state != ArrayState::NewMember {
                        return Err(unexpected(line, column, ","));
                    }
                    *state = ArrayState::Separator;
                    Act::Consume
                }
                TokenType::ArrayEnd => {
                    if *state == ArrayState::Separator {
                        return Err(unexpected(line, column, ","));
                    }
                    Act::Close
                }
                TokenType::None => Act::Fall,
                _ => {
                    if *state == ArrayState::NewMember {
                        return Err(expected(line, column, ","));
                    }
                    Act::Fall
                }
            }
        };

        match act {
            Act::Consume => {
                self.column += 1;
                Ok((pos + 1, true))
            }
            Act::Close => {
                let items = match self.frames.pop() {
                    Some(Frame::Array { items, .. }) => items,
                    _ => return Err(ParseError::InvalidContext),
                };
                self.deposit(Value::Array(items));
                self.column += 1;
                self.depth -= 1;
                Ok((pos + 1, true))
            }
            Act::Fall => Ok((pos, false)),
        }
    }

    fn step_object(&mut self, src: &[u8], pos: usize) -> Result<(usize, bool), ParseError> {
        let line = self.line;
        let column = self.column;
        let token = token_type(src[pos]);

        enum Act {
            Consume,
            Close,
            Fall,
        }

        let act = {
            let Some(Frame::Object {
                members,
                state,
                key,
                pending,
            }) = self.frames.last_mut()
            else {
                return Err(ParseError::InvalidContext);
            };

            if let Some(value) = pending.take() {
                match *state {
                    ObjectState::Default | ObjectState::Separator => {
                        let Value::String(name) = value else {
                            return Err(expected(line, column, "\""));
                        };
                        *key = Some(name);
                        *state = ObjectState::PendingColon;
                    }
                    ObjectState::PendingValue => {
                        let name = key.take().unwrap_or_default();
                        if members.insert(&name, value).is_err() {
                            return Err(ParseError::IllegalToken {
                                line,
                                column,
                                token: "control character in string".into(),
                            });
                        }
                        *state = ObjectState::NewMember;
                    }
                    _ => {}
                }
            }

            match token {
                TokenType::Separator => {
                    if *state != ObjectState::NewMember {
                        return Err(unexpected(line, column, ","));
                    }
                    *state = ObjectState::Separator;
                    Act::Consume
                }
                TokenType::PairSeparator => {
                    if *state != ObjectState::PendingColon {
                        return Err(unexpected(line, column, ":"));
                    }
                    *state = ObjectState::PendingValue;
                    Act::Consume
                }
                TokenType::ObjectEnd => match *state {
                    ObjectState::Default | ObjectState::NewMember => Act::Close,
                    ObjectState::Separator => return Err(unexpected(line, column, ",")),
                    ObjectState::PendingColon => return Err(expected(line, column, ":")),
                    ObjectState::PendingValue => return Err(unexpected(line, column, "}")),
                },
                TokenType::None => Act::Fall,
                other => match *state {
                    ObjectState::NewMember => return Err(expected(line, column, ",")),
                    ObjectState::PendingColon => return Err(expected(line, column, ":")),
                    ObjectState::PendingValue => Act::Fall,
                    ObjectState::Default | ObjectState::Separator => {
                        if other == TokenType::String {
                            Act::Fall
                        } else {
                            return Err(unexpected(line, column, &token_text(src[pos])));
                        }
                    }
                },
            }
        };

        match act {
            Act::Consume => {
                self.column += 1;
                Ok((pos + 1, true))
            }
            Act::Close => {
                let members = match self.frames.pop() {
                    Some(Frame::Object { members, .. }) => members,
                    _ => return Err(ParseError::InvalidContext),
                };
                self.deposit(Value::Object(members));
                self.column += 1;
                self.depth -= 1;
                Ok((pos + 1, true))
            }
            Act::Fall => Ok((pos, false)),
        }
    }

    // --------------------------------------------------------------------
    // Scalars
    // --------------------------------------------------------------------

    fn step_number(&mut self, src: &[u8], mut pos: usize) -> Result<(usize, Option<Value>), ParseError> {
        let mut flags = match self.frames.last() {
            Some(Frame::Number { flags }) => *flags,
            _ => return Err(ParseError::InvalidContext),
        };

        let mut terminated = false;
        while pos < src.len() {
            let byte = src[pos];
            match byte {
                b'+' | b'-' => {
                    if flags & NUM_ACCEPT_SIGN == 0 {
                        return Err(
                            self.illegal_text("illegal position for sign character in number")
                        );
                    }
                    flags &= !(NUM_ACCEPT_SIGN | NUM_IS_VALID);
                }
                b'0'..=b'9' => {
                    if flags & NUM_ACCEPT_DIGITS == 0 {
                        return Err(self.illegal_text("invalid number"));
                    }
                    if byte == b'0' && flags & NUM_HAS_DIGITS == 0 {
                        flags &= !NUM_ACCEPT_DIGITS;
                    }
                    if flags & (NUM_HAS_DEC_PT | NUM_HAS_EXP) == 0 {
                        flags |= NUM_ACCEPT_DEC_PT;
                    }
                    if flags & NUM_HAS_EXP == 0 {
                        flags |= NUM_ACCEPT_EXP;
                    }
                    flags &= !NUM_ACCEPT_SIGN;
                    flags |= NUM_HAS_DIGITS | NUM_IS_VALID;
                }
                b'.' => {
                    if flags & NUM_ACCEPT_DEC_PT == 0 {
                        return Err(
                            self.illegal_text("illegal position for decimal point in number")
                        );
                    }
                    flags |= NUM_HAS_DEC_PT | NUM_ACCEPT_DIGITS;
                    flags &= !(NUM_ACCEPT_DEC_PT | NUM_ACCEPT_EXP | NUM_IS_VALID);
                }
                b'e' | b'E' => {
                    if flags & NUM_ACCEPT_EXP == 0 {
                        return Err(self.illegal_text("illegal position for exponent in number"));
                    }
                    flags |= NUM_HAS_EXP | NUM_ACCEPT_SIGN | NUM_ACCEPT_DIGITS;
                    flags &= !(NUM_IS_VALID | NUM_ACCEPT_EXP | NUM_ACCEPT_DEC_PT);
                }
                _ => {
                    terminated = true;
                    break;
                }
            }

            if self.scratch.len() == NUMBER_TOKEN_MAX {
                return Err(self.illegal_text("number too large"));
            }
            self.scratch.push(byte);
            pos += 1;
            self.column += 1;
        }

        if terminated {
            if flags & NUM_IS_VALID == 0 {
                return Err(self.illegal_text("invalid number"));
            }
            let text = core::str::from_utf8(self.scratch.bytes()).unwrap_or_default();
            let Ok(number) = text.parse::<f64>() else {
                return Err(self.illegal_text("invalid number"));
            };
            return Ok((pos, Some(Value::Number(number))));
        }

        if let Some(Frame::Number { flags: slot }) = self.frames.last_mut() {
            *slot = flags;
        }
        Ok((pos, None))
    }

    #[allow(clippy::too_many_lines)]
    fn step_string(&mut self, src: &[u8], mut pos: usize) -> Result<(usize, Option<Value>), ParseError> {
        let (mut buf, mut flags) = match self.frames.last_mut() {
            Some(Frame::String { buf, flags }) => (core::mem::take(buf), *flags),
            _ => return Err(ParseError::InvalidContext),
        };

        while pos < src.len() {
            let byte = src[pos];

            if flags & STR_ESCAPE != 0 {
                if flags & STR_SURROGATE != 0 && byte != b'u' {
                    return Err(self.illegal_text("invalid unicode character in string"));
                }
                match byte {
                    b'"' | b'\\' | b'/' => buf.push(byte as char),
                    b'b' => buf.push('\u{0008}'),
                    b'f' => buf.push('\u{000C}'),
                    b'n' => buf.push('\n'),
                    b'r' => buf.push('\r'),
                    b't' => buf.push('\t'),
                    b'u' => {
                        if flags & STR_SURROGATE == 0 {
                            self.escape.reset();
                        }
                        flags |= STR_UNICODE;
                    }
                    _ => return Err(self.illegal_text("unrecognized escape sequence")),
                }
                flags &= !STR_ESCAPE;
                pos += 1;
                self.column += 1;
            } else if flags & STR_UNICODE != 0 {
                let Ok(unit) = self.escape.push_digit(byte) else {
                    return Err(self.illegal_text("illegal unicode escape sequence"));
                };
                pos += 1;
                self.column += 1;
                if let Some(unit) = unit {
                    flags &= !STR_UNICODE;
                    if flags & STR_SURROGATE != 0 {
                        if !(0xDC00..=0xDFFF).contains(&unit) {
                            return Err(self.illegal_text("invalid unicode character in string"));
                        }
                        let code_point = self.escape.pair_code_point(unit);
                        self.escape.reset();
                        flags &= !STR_SURROGATE;
                        buf.push(self.decode_code_point(code_point)?);
                    } else if (0xD800..=0xDBFF).contains(&unit) {
                        self.escape.hold_high();
                        flags |= STR_SURROGATE;
                    } else if (0xDC00..=0xDFFF).contains(&unit) {
                        return Err(self.illegal_text("invalid unicode character in string"));
                    } else {
                        buf.push(self.decode_code_point(u32::from(unit))?);
                    }
                }
            } else if flags & STR_UTF8 != 0 {
                match self.utf8.push(byte) {
                    Utf8Step::Reject => {
                        return Err(self.illegal_text("illegal character in string"));
                    }
                    Utf8Step::NeedMore => pos += 1,
                    Utf8Step::Done => {
                        pos += 1;
                        // One column per character, however many bytes.
                        self.column += 1;
                        flags &= !STR_UTF8;
                        match core::str::from_utf8(self.utf8.bytes()) {
                            Ok(seq) => buf.push_str(seq),
                            Err(_) => {
                                return Err(self.illegal_text("illegal character in string"));
                            }
                        }
                    }
                }
            } else if flags & STR_SURROGATE != 0 && byte != b'\\' {
                return Err(self.illegal_text("invalid unicode character in string"));
            } else {
                match byte {
                    b'\\' => {
                        flags |= STR_ESCAPE;
                        pos += 1;
                        self.column += 1;
                    }
                    b'"' => {
                        pos += 1;
                        self.column += 1;
                        return Ok((pos, Some(Value::String(buf))));
                    }
                    0xC0..=0xFF => {
                        if !self.utf8.begin(byte) {
                            return Err(self.illegal_text("illegal character in string"));
                        }
                        flags |= STR_UTF8;
                        pos += 1;
                    }
                    0x20..=0x7E => {
                        buf.push(byte as char);
                        pos += 1;
                        self.column += 1;
                    }
                    _ => return Err(self.illegal_text("control character in string")),
                }
            }
        }

        if let Some(Frame::String {
            buf: slot,
            flags: state,
        }) = self.frames.last_mut()
        {
            *slot = buf;
            *state = flags;
        }
        Ok((pos, None))
    }

    fn step_keyword(&mut self, src: &[u8], mut pos: usize) -> Result<(usize, Option<Value>), ParseError> {
        while pos < src.len() {
            let byte = src[pos];
            if !byte.is_ascii_lowercase() {
                return Err(self.illegal_scratch());
            }
            self.scratch.push(byte);
            pos += 1;
            self.column += 1;

            match self.scratch.bytes() {
                b"null" => return Ok((pos, Some(Value::Null))),
                b"true" => return Ok((pos, Some(Value::Bool(true)))),
                b"false" => return Ok((pos, Some(Value::Bool(false)))),
                text if text.len() >= KEYWORD_TOKEN_MAX => return Err(self.illegal_scratch()),
                _ => {}
            }
        }
        Ok((pos, None))
    }

    fn step_utf8(&mut self, src: &[u8], mut pos: usize) -> Result<(usize, Option<Value>), ParseError> {
        while pos < src.len() {
            let byte = src[pos];
            if self.utf8.in_progress() {
                match self.utf8.push(byte) {
                    Utf8Step::Reject => return Err(self.illegal_utf8_token()),
                    Utf8Step::NeedMore => pos += 1,
                    Utf8Step::Done => {
                        pos += 1;
                        self.column += 1;
                        if self.extensions.contains(Extensions::UTF8_PI)
                            && matches!(self.utf8.bytes(), [0xCF, 0x80])
                        {
                            return Ok((pos, Some(Value::Number(3.14159))));
                        }
                        return Err(self.illegal_utf8_token());
                    }
                }
            } else {
                if !self.utf8.begin(byte) {
                    return Err(self.illegal_byte(byte));
                }
                pos += 1;
            }
        }
        Ok((pos, None))
    }

    // --------------------------------------------------------------------
    // Error construction
    // --------------------------------------------------------------------

    fn decode_code_point(&self, code_point: u32) -> Result<char, ParseError> {
        if code_point < 0x20 || code_point == 0x7F {
            return Err(self.illegal_text("control character in string"));
        }
        char::from_u32(code_point)
            .ok_or_else(|| self.illegal_text("illegal character in string"))
    }

    fn illegal_text(&self, text: &str) -> ParseError {
        ParseError::IllegalToken {
            line: self.line,
            column: self.column,
            token: text.into(),
        }
    }

    fn illegal_byte(&self, byte: u8) -> ParseError {
        ParseError::IllegalToken {
            line: self.line,
            column: self.column,
            token: token_text(byte),
        }
    }

    fn illegal_scratch(&self) -> ParseError {
        let token = core::str::from_utf8(self.scratch.bytes()).unwrap_or_default();
        ParseError::IllegalToken {
            line: self.line,
            column: self.column,
            token: token.into(),
        }
    }

    fn illegal_utf8_token(&self) -> ParseError {
        ParseError::IllegalToken {
            line: self.line,
            column: self.column,
            token: self.utf8.bytes().as_bstr().to_string(),
        }
    }
}

fn unexpected(line: usize, column: usize, token: &str) -> ParseError {
    ParseError::UnexpectedToken {
        line,
        column,
        token: token.into(),
    }
}

fn expected(line: usize, column: usize, token: &str) -> ParseError {
    ParseError::ExpectedToken {
        line,
        column,
        token: token.into(),
    }
}

/// Renders one byte for an illegal-token message.
fn token_text(byte: u8) -> String {
    match byte {
        0x00..=0x1F => String::from("control character"),
        0x20..=0x7E => String::from(byte as char),
        _ => [byte].as_bstr().to_string(),
    }
}

/// Renders one byte for the trailing-characters message.
fn display_char(byte: u8) -> char {
    if byte.is_ascii() {
        byte as char
    } else {
        char::REPLACEMENT_CHARACTER
    }
}
