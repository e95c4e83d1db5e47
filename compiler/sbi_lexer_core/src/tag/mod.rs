//! Raw token tags produced by the scanner.
//!
//! Discriminants are grouped into semantic ranges so the cooking layer can
//! classify a tag with a single comparison.

/// Kind of a raw token. One byte.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    // === Identifiers & Literals: 0-15 ===
    /// Identifier or keyword (`import`, `package`, `main`, `_`).
    Ident = 0,
    /// Any numeric literal; Go number syntax is not validated here.
    Number = 1,
    /// Interpreted string literal `"..."`.
    String = 2,
    /// Raw string literal `` `...` ``. May span lines.
    RawString = 3,
    /// Rune literal `'x'`.
    Char = 4,

    // === Delimiters: 16-31 ===
    LeftParen = 16,
    RightParen = 17,
    LeftBracket = 18,
    RightBracket = 19,
    LeftBrace = 20,
    RightBrace = 21,
    Comma = 22,
    Semicolon = 23,
    Dot = 24,

    // === Operators: 32-47 ===
    /// Any single operator byte (`+`, `:`, `=`, `<`, `/`, ...).
    Operator = 32,

    // === Trivia: 112-119 ===
    /// Spaces, tabs, and carriage returns.
    Whitespace = 112,
    /// A single `\n`.
    Newline = 113,
    /// `// ...` up to (not including) the newline.
    LineComment = 114,
    /// `/* ... */`. May span lines.
    BlockComment = 115,
    /// UTF-8 byte order mark at offset 0.
    Bom = 116,

    // === Errors: 240-254 ===
    /// A byte or character that cannot start any token.
    InvalidByte = 240,
    /// `"` literal that hit a newline or EOF before its closing quote.
    UnterminatedString = 241,
    /// `` ` `` literal that hit EOF.
    UnterminatedRawString = 242,
    /// `'` literal that hit a newline or EOF.
    UnterminatedChar = 243,
    /// `/*` without a matching `*/`.
    UnterminatedBlockComment = 244,
    /// NUL byte inside the source content.
    InteriorNull = 245,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Fixed source text for tags that always have the same lexeme.
    pub fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            RawTag::LeftParen => "(",
            RawTag::RightParen => ")",
            RawTag::LeftBracket => "[",
            RawTag::RightBracket => "]",
            RawTag::LeftBrace => "{",
            RawTag::RightBrace => "}",
            RawTag::Comma => ",",
            RawTag::Semicolon => ";",
            RawTag::Dot => ".",
            RawTag::Newline => "\n",
            RawTag::Bom => "\u{FEFF}",
            _ => return None,
        })
    }

    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            RawTag::Ident => "identifier",
            RawTag::Number => "number",
            RawTag::String | RawTag::RawString => "string literal",
            RawTag::Char => "rune literal",
            RawTag::LeftParen => "'('",
            RawTag::RightParen => "')'",
            RawTag::LeftBracket => "'['",
            RawTag::RightBracket => "']'",
            RawTag::LeftBrace => "'{'",
            RawTag::RightBrace => "'}'",
            RawTag::Comma => "','",
            RawTag::Semicolon => "';'",
            RawTag::Dot => "'.'",
            RawTag::Operator => "operator",
            RawTag::Whitespace => "whitespace",
            RawTag::Newline => "newline",
            RawTag::LineComment | RawTag::BlockComment => "comment",
            RawTag::Bom => "byte order mark",
            RawTag::InvalidByte => "invalid character",
            RawTag::UnterminatedString => "unterminated string literal",
            RawTag::UnterminatedRawString => "unterminated raw string literal",
            RawTag::UnterminatedChar => "unterminated rune literal",
            RawTag::UnterminatedBlockComment => "unterminated comment",
            RawTag::InteriorNull => "NUL byte",
            RawTag::Eof => "end of file",
        }
    }

    /// Whitespace, newlines, and the BOM: never significant.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, RawTag::Whitespace | RawTag::Newline | RawTag::Bom)
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, RawTag::LineComment | RawTag::BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        (self as u8) >= 240 && self != RawTag::Eof
    }
}

/// A raw token: tag plus byte length. Positions are implied by the running
/// sum of lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
