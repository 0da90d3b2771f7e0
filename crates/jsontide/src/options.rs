//! Parser configuration.

use core::ops::{BitOr, BitOrAssign};

/// Optional syntax extensions, enabled as a bitmask before feeding input.
///
/// The only defined extension is [`Extensions::UTF8_PI`]: outside of strings
/// and numbers, the two-byte sequence `0xCF 0x80` (U+03C0, lowercase Greek
/// π) parses as the number `3.14159`.
///
/// # Examples
///
/// ```
/// use jsontide::{Extensions, Parser};
///
/// let mut parser = Parser::new();
/// parser.set_extensions(Extensions::UTF8_PI);
/// parser.parse_chunk("[π]".as_bytes()).unwrap();
/// let v = parser.take_result().unwrap();
/// assert_eq!(v.as_array().unwrap()[0].as_number(), Some(3.14159));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extensions(u32);

impl Extensions {
    /// No extensions; strict JSON.
    pub const NONE: Extensions = Extensions(0);

    /// Lowercase Greek π as a numeric literal.
    pub const UTF8_PI: Extensions = Extensions(1);

    /// Returns `true` if every extension in `other` is enabled in `self`.
    #[must_use]
    pub fn contains(self, other: Extensions) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Extensions {
    type Output = Extensions;

    fn bitor(self, rhs: Extensions) -> Extensions {
        Extensions(self.0 | rhs.0)
    }
}

impl BitOrAssign for Extensions {
    fn bitor_assign(&mut self, rhs: Extensions) {
        self.0 |= rhs.0;
    }
}
