//! Typed literal syntax: `<Tag>([v0 ,v1 ,...,vn])`.
//!
//! This module holds the pieces shared by both codec directions:
//!
//! - [`Element`]: one numeric value of an array payload
//! - [`LiteralWriter`]: prints elements with the exact `" ,"` separator
//! - [`LiteralParser`]: strict, column-tracking parser used by [`crate::try_encode`]
//! - [`find_body`]: lenient matcher used by [`crate::encode`]
//!
//! ```rust
//! use serial_chat::literal::{Element, LiteralWriter};
//! use serial_chat::DataType;
//!
//! let mut writer = LiteralWriter::new(DataType::Uint8Array);
//! writer.push(&Element::Unsigned(1));
//! writer.push(&Element::Unsigned(2));
//! assert_eq!(writer.finish(), "Uint8Array([1 ,2])");
//! ```

use crate::{DataType, Error, Result};
use std::fmt;

/// Separator printed between elements.
pub const SEPARATOR: &str = " ,";

/// One decoded element of an array payload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Element {
    Unsigned(u64),
    Float32(f32),
    Float64(f64),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display on floats is the shortest form that parses back to the same bits
        match self {
            Element::Unsigned(v) => write!(f, "{}", v),
            Element::Float32(v) => write!(f, "{}", v),
            Element::Float64(v) => write!(f, "{}", v),
        }
    }
}

/// Builds an array literal one element at a time.
pub struct LiteralWriter {
    output: String,
    count: usize,
}

impl LiteralWriter {
    pub fn new(ty: DataType) -> Self {
        let mut output = String::with_capacity(64);
        output.push_str(ty.tag());
        output.push_str("([");
        LiteralWriter { output, count: 0 }
    }

    pub fn push(&mut self, element: &Element) {
        use fmt::Write as _;
        if self.count > 0 {
            self.output.push_str(SEPARATOR);
        }
        // Writing into a String cannot fail
        let _ = write!(self.output, "{}", element);
        self.count += 1;
    }

    pub fn finish(mut self) -> String {
        self.output.push_str("])");
        self.output
    }
}

/// Locates the element list of the first `<tag>([ ... ])` occurrence in `text`.
///
/// The search is unanchored and stops at the first `])` after the opening, which must be
/// on the same line. Text around the literal is ignored.
///
/// ```rust
/// use serial_chat::literal::find_body;
///
/// assert_eq!(find_body("Uint8Array", "Uint8Array([1 ,2])"), Some("1 ,2"));
/// assert_eq!(find_body("Uint8Array", "Uint16Array([1])"), None);
/// ```
pub fn find_body<'a>(tag: &str, text: &'a str) -> Option<&'a str> {
    let open = format!("{}([", tag);
    let mut from = 0;
    while let Some(pos) = text[from..].find(&open) {
        let start = from + pos + open.len();
        let rest = &text[start..];
        let line = rest.find('\n').map_or(rest, |nl| &rest[..nl]);
        if let Some(end) = line.find("])") {
            return Some(&rest[..end]);
        }
        from = start;
    }
    None
}

/// A trimmed element token and the 1-based column it starts at.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub col: usize,
}

/// Parsed shape of an array literal, before any number conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct LiteralBody<'a> {
    pub tag: &'a str,
    pub tokens: Vec<Token<'a>>,
}

/// Strict literal parser.
///
/// Accepts exactly one literal with optional surrounding whitespace and reports the first
/// deviation with its column.
pub struct LiteralParser<'a> {
    input: &'a str,
    position: usize,
    column: usize,
}

impl<'a> LiteralParser<'a> {
    pub fn new(input: &'a str) -> Self {
        LiteralParser {
            input,
            position: 0,
            column: 1,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        self.column += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn error(&self, msg: &str) -> Error {
        Error::syntax(self.column, msg, self.input)
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek_char() {
            Some(ch) if ch == expected => {
                self.next_char();
                Ok(())
            }
            Some(ch) => Err(self.error(&format!("expected '{}', found '{}'", expected, ch))),
            None => Err(self.error(&format!("expected '{}', found end of input", expected))),
        }
    }

    fn parse_tag(&mut self) -> Result<&'a str> {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() {
                self.next_char();
            } else {
                break;
            }
        }
        if start == self.position {
            return Err(self.error("expected type tag"));
        }
        Ok(&self.input[start..self.position])
    }

    fn parse_tokens(&mut self) -> Result<Vec<Token<'a>>> {
        let start = self.position;
        let start_col = self.column;
        while let Some(ch) = self.peek_char() {
            if ch == ']' || ch == '\n' {
                break;
            }
            self.next_char();
        }
        let body = &self.input[start..self.position];
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut tokens = Vec::new();
        let mut col = start_col;
        for raw in body.split(',') {
            let leading = raw.chars().take_while(|c| c.is_whitespace()).count();
            tokens.push(Token {
                text: raw.trim(),
                col: col + leading,
            });
            col += raw.chars().count() + 1;
        }
        Ok(tokens)
    }

    /// Parses the whole input as a single array literal.
    pub fn parse(mut self) -> Result<LiteralBody<'a>> {
        self.skip_whitespace();
        let tag = self.parse_tag()?;
        self.expect('(')?;
        self.expect('[')?;
        let tokens = self.parse_tokens()?;
        self.expect(']')?;
        self.expect(')')?;
        self.skip_whitespace();
        if self.peek_char().is_some() {
            return Err(self.error("unexpected characters after literal"));
        }
        Ok(LiteralBody { tag, tokens })
    }
}
