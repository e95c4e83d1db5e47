//! Cooked tokens.
//!
//! Produced by `sbi_parse` from raw scanner output: trivia is dropped,
//! keywords are resolved, and each token carries its absolute [`Span`].
//! Comments stay in the stream so position-ordered consumers see them.

use std::fmt;

use crate::Span;

/// Kind of a cooked token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// The `package` keyword.
    Package,
    /// The `import` keyword.
    Import,
    /// Any other keyword or identifier.
    Ident,
    Number,
    /// Interpreted or raw string literal.
    String,
    Char,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Dot,
    Operator,
    /// Line or block comment.
    Comment,
}

impl TokenKind {
    /// Opening bracket kinds.
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace)
    }

    /// Closing bracket kinds.
    #[inline]
    pub fn is_close(self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace)
    }

    /// The closing bracket matching an opening one.
    pub fn closing(self) -> Option<TokenKind> {
        match self {
            TokenKind::LParen => Some(TokenKind::RParen),
            TokenKind::LBracket => Some(TokenKind::RBracket),
            TokenKind::LBrace => Some(TokenKind::RBrace),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Package => "'package'",
            TokenKind::Import => "'import'",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string literal",
            TokenKind::Char => "rune literal",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::Dot => "'.'",
            TokenKind::Operator => "operator",
            TokenKind::Comment => "comment",
        };
        f.write_str(text)
    }
}

/// A significant token with its absolute position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}
