//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords or validate escapes. Error conditions are encoded as `RawTag`
//! variants, not as `Result::Err`, so a single pass always reaches `Eof`.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner for Go source.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | b'\r' => self.whitespace(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.quoted(start, b'"'),
            b'\'' => self.quoted(start, b'\''),
            b'`' => self.raw_string(start),
            b'/' => self.slash_or_comment(start),
            b'.' => self.dot(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b'+' | b'-' | b'*' | b'%' | b'&' | b'|' | b'^' | b'<' | b'>' | b'=' | b'!'
            | b':' | b'~' => self.single(start, RawTag::Operator),
            0x80..=0xFF => self.non_ascii(start),
            _ => self.single(start, RawTag::InvalidByte),
        }
    }

    // ─── EOF ─────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            self.single(start, RawTag::InteriorNull)
        }
    }

    // ─── Whitespace ──────────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.finish(start, RawTag::Whitespace)
    }

    // ─── Comments ────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.eat_until_newline_or_eof();
                self.finish(start, RawTag::LineComment)
            }
            b'*' => {
                self.cursor.advance();
                if self.cursor.eat_block_comment_body() {
                    self.finish(start, RawTag::BlockComment)
                } else {
                    self.finish(start, RawTag::UnterminatedBlockComment)
                }
            }
            _ => self.finish(start, RawTag::Operator),
        }
    }

    // ─── Identifiers ─────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.eat_ident_continue();
        self.finish(start, RawTag::Ident)
    }

    /// Go identifiers may contain any Unicode letter or digit; anything else
    /// above ASCII is an invalid character. A BOM is accepted at offset 0.
    fn non_ascii(&mut self, start: u32) -> RawToken {
        let Some(c) = self.cursor.current_char() else {
            self.cursor.advance();
            return self.finish(start, RawTag::InvalidByte);
        };
        self.cursor.advance_char();
        if c == '\u{FEFF}' && start == 0 {
            return self.finish(start, RawTag::Bom);
        }
        if c.is_alphabetic() {
            self.eat_ident_continue();
            return self.finish(start, RawTag::Ident);
        }
        self.finish(start, RawTag::InvalidByte)
    }

    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.cursor.advance();
            } else if b >= 0x80 {
                match self.cursor.current_char() {
                    Some(c) if c.is_alphanumeric() => self.cursor.advance_char(),
                    _ => break,
                }
            } else {
                break;
            }
        }
    }

    // ─── Numbers ─────────────────────────────────────────────────

    /// Lumps every numeric form (decimal, hex, octal, binary, float,
    /// imaginary, `_` separators) into one token. Exponent signs are
    /// absorbed after `e`/`E`/`p`/`P`.
    fn number(&mut self, start: u32) -> RawToken {
        loop {
            match self.cursor.current() {
                b'e' | b'E' | b'p' | b'P' => {
                    self.cursor.advance();
                    if matches!(self.cursor.current(), b'+' | b'-') {
                        self.cursor.advance();
                    }
                }
                b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'.' => self.cursor.advance(),
                _ => break,
            }
        }
        self.finish(start, RawTag::Number)
    }

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            return self.number(start);
        }
        if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
            self.cursor.advance_n(3);
            return self.finish(start, RawTag::Operator);
        }
        self.single(start, RawTag::Dot)
    }

    // ─── Literals ────────────────────────────────────────────────

    /// Interpreted string or rune literal. Escapes skip exactly one byte;
    /// their validity is not checked.
    fn quoted(&mut self, start: u32, quote: u8) -> RawToken {
        let (ok, unterminated) = if quote == b'"' {
            (RawTag::String, RawTag::UnterminatedString)
        } else {
            (RawTag::Char, RawTag::UnterminatedChar)
        };
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.skip_to_literal_delim(quote) {
                b'\\' => {
                    self.cursor.advance();
                    if matches!(self.cursor.current(), b'\n') || self.cursor.is_eof() {
                        return self.finish(start, unterminated);
                    }
                    self.cursor.advance_char();
                }
                b'\n' | 0 => return self.finish(start, unterminated),
                _ => {
                    self.cursor.advance(); // closing quote
                    return self.finish(start, ok);
                }
            }
        }
    }

    fn raw_string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // opening backtick
        if self.cursor.skip_to_byte(b'`') == 0 {
            return self.finish(start, RawTag::UnterminatedRawString);
        }
        self.cursor.advance(); // closing backtick
        self.finish(start, RawTag::RawString)
    }

    // ─── Helpers ─────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.finish(start, tag)
    }

    #[inline]
    fn finish(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    /// Yields every token up to, but not including, `Eof`.
    fn next(&mut self) -> Option<RawToken> {
        let token = self.next_token();
        (token.tag != RawTag::Eof).then_some(token)
    }
}
