//! Recursive-descent JSON parser.
//!
//! The parser walks a borrowed UTF-8 buffer left to right with a single
//! byte-offset cursor and builds a [`Value`] tree, or fails with a
//! [`ParseError`] carrying the offending offset. Each grammar production is
//! one method; productions recurse through `parse_value` and share the
//! cursor. There is no backtracking and no partial result: the first
//! failure aborts the whole parse.
//!
//! # Accepted grammar
//!
//! - Dispatch on the first non-whitespace byte: `n`/`t`/`f` → literal,
//!   `"` → string, `[` → array, `{` → object, digit or `-` → number.
//! - Whitespace (space, tab, newline, carriage return) is skipped before
//!   every value and around `,`/`:` separators.
//! - A comma before a closing `]`/`}` is accepted, and the comma between
//!   elements is optional. Both leniencies are intentional.
//! - Numbers are a maximal run over `0-9 . e E + -`; a lexeme containing
//!   `.`, `e`, or `E` becomes a `Double`, anything else an `Integer`.
//! - Strings decode the escapes `\"` `\\` `\/` `\n` `\r` `\t` `\b` `\f`.
//!   `\uXXXX` is not supported and fails as `InvalidEscape`.
//! - Trailing non-whitespace after the top-level value is rejected.
//! - Container nesting deeper than [`MAX_DEPTH`] fails as `DepthExceeded`
//!   rather than exhausting the call stack.

use std::collections::BTreeMap;

use crate::error::{ParseError, Result};
use crate::value::Value;

/// Maximum container nesting depth accepted by [`parse`].
pub const MAX_DEPTH: usize = 128;

/// Parse a JSON text buffer into a [`Value`] tree.
///
/// Returns the parsed value, or the first [`ParseError`] encountered.
/// The input is borrowed read-only for the duration of the parse.
///
/// ```
/// use mjson_core::{parse, Value};
///
/// let value = parse("[1,2.5,\"three\"]").unwrap();
/// assert_eq!(value[0], Value::Integer(1));
/// assert_eq!(value[1], Value::Double(2.5));
/// assert_eq!(value[2].as_str(), Some("three"));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    let mut parser = Parser::new(input);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos < input.len() {
        return Err(ParseError::TrailingContent { offset: parser.pos });
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume a maximal run of ASCII whitespace.
    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Dispatch on the lookahead byte and parse one value.
    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'-') => self.parse_number(),
            Some(b) if b.is_ascii_digit() => self.parse_number(),
            Some(_) => Err(ParseError::UnexpectedCharacter { offset: self.pos }),
            None => Err(ParseError::UnexpectedEndOfInput { offset: self.pos }),
        }
    }

    /// Match an expected keyword byte-for-byte and yield `value`.
    fn parse_literal(&mut self, keyword: &str, value: Value) -> Result<Value> {
        let rest = &self.input.as_bytes()[self.pos..];
        if rest.len() < keyword.len() || &rest[..keyword.len()] != keyword.as_bytes() {
            return Err(ParseError::InvalidLiteral { offset: self.pos });
        }
        self.pos += keyword.len();
        Ok(value)
    }

    /// Parse a quoted string, decoding basic backslash escapes.
    ///
    /// Bytes between escapes are copied as whole verbatim segments, so
    /// multi-byte UTF-8 sequences pass through untouched.
    fn parse_string(&mut self) -> Result<String> {
        let start = self.pos;
        self.pos += 1; // opening quote
        let bytes = self.input.as_bytes();
        let mut out = String::new();
        let mut run = self.pos;
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b'"' => {
                    out.push_str(&self.input[run..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                b'\\' => {
                    out.push_str(&self.input[run..self.pos]);
                    self.pos += 1;
                    let escape_offset = self.pos;
                    let decoded = match bytes.get(self.pos) {
                        Some(b'"') => '"',
                        Some(b'\\') => '\\',
                        Some(b'/') => '/',
                        Some(b'n') => '\n',
                        Some(b'r') => '\r',
                        Some(b't') => '\t',
                        Some(b'b') => '\u{0008}',
                        Some(b'f') => '\u{000C}',
                        Some(_) => return Err(ParseError::InvalidEscape { offset: escape_offset }),
                        None => return Err(ParseError::UnterminatedString { offset: start }),
                    };
                    out.push(decoded);
                    self.pos += 1;
                    run = self.pos;
                }
                _ => self.pos += 1,
            }
        }
        Err(ParseError::UnterminatedString { offset: start })
    }

    /// Parse a numeral: a maximal run over `0-9 . e E + -`, classified
    /// lexically — `.`/`e`/`E` present means `Double`, otherwise `Integer`.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-' => self.pos += 1,
                _ => break,
            }
        }
        let lexeme = &self.input[start..self.pos];
        if lexeme.bytes().any(|b| matches!(b, b'.' | b'e' | b'E')) {
            lexeme
                .parse::<f64>()
                .map(Value::Double)
                .map_err(|_| ParseError::InvalidNumber { offset: start })
        } else {
            lexeme
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| ParseError::InvalidNumber { offset: start })
        }
    }

    /// Parse `[` value (`,` value)* `]`, comma optional and a trailing
    /// comma before `]` accepted.
    fn parse_array(&mut self) -> Result<Value> {
        let start = self.pos;
        self.enter(start)?;
        self.pos += 1; // [
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => {}
                None => return Err(ParseError::UnterminatedArray { offset: start }),
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            if self.peek() == Some(b',') {
                self.pos += 1;
            }
        }
        self.leave();
        Ok(Value::Array(items))
    }

    /// Parse `{` key `:` value (`,` key `:` value)* `}` with the same
    /// separator leniency as arrays. Keys go through the full value parser
    /// and must come out string-typed. Duplicate keys: last write wins.
    fn parse_object(&mut self) -> Result<Value> {
        let start = self.pos;
        self.enter(start)?;
        self.pos += 1; // {
        let mut map = BTreeMap::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => {}
                None => return Err(ParseError::UnterminatedObject { offset: start }),
            }
            let key_offset = self.pos;
            let key = match self.parse_value()? {
                Value::String(key) => key,
                _ => return Err(ParseError::NonStringKey { offset: key_offset }),
            };
            self.skip_whitespace();
            match self.peek() {
                Some(b':') => self.pos += 1,
                Some(_) => return Err(ParseError::UnexpectedCharacter { offset: self.pos }),
                None => return Err(ParseError::UnterminatedObject { offset: start }),
            }
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            if self.peek() == Some(b',') {
                self.pos += 1;
            }
        }
        self.leave();
        Ok(Value::Object(map))
    }

    fn enter(&mut self, offset: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::DepthExceeded { offset });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
