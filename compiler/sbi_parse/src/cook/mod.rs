//! Raw token cooking: absolute spans, keyword resolution, lexical errors.
//!
//! Drops trivia and keeps comments. The first lexical error stops cooking,
//! since nothing downstream can recover from it.

use sbi_ir::{Comment, CommentKind, PositionTable, Span, Token, TokenKind};
use sbi_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::{SyntaxError, SyntaxErrorKind};

/// Cooked token stream plus the comments seen along the way.
pub(crate) struct Cooked {
    pub tokens: Vec<Token>,
    pub comments: Vec<Comment>,
}

/// Scan `source` into significant tokens.
pub(crate) fn cook(source: &str, table: &PositionTable) -> Result<Cooked, SyntaxError> {
    let buf = SourceBuffer::new(source);
    if let Some(issue) = buf.encoding_issues().first() {
        let span = Span::new(issue.pos, issue.pos + issue.len);
        return Err(SyntaxError::at(SyntaxErrorKind::NulByte, span, source, table));
    }

    let mut tokens = Vec::new();
    let mut comments = Vec::new();
    let mut offset = 0u32;

    for raw in RawScanner::new(buf.cursor()) {
        let span = Span::new(offset, offset + raw.len);
        offset += raw.len;

        if raw.tag.is_trivia() {
            continue;
        }
        if raw.tag.is_error() {
            let kind = lex_error_kind(raw.tag, source.get(span.to_range()).unwrap_or(""));
            return Err(SyntaxError::at(kind, span, source, table));
        }

        let kind = match raw.tag {
            RawTag::Ident => keyword_or_ident(source.get(span.to_range()).unwrap_or("")),
            RawTag::Number => TokenKind::Number,
            RawTag::String | RawTag::RawString => TokenKind::String,
            RawTag::Char => TokenKind::Char,
            RawTag::LeftParen => TokenKind::LParen,
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBracket => TokenKind::LBracket,
            RawTag::RightBracket => TokenKind::RBracket,
            RawTag::LeftBrace => TokenKind::LBrace,
            RawTag::RightBrace => TokenKind::RBrace,
            RawTag::Comma => TokenKind::Comma,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Dot => TokenKind::Dot,
            RawTag::LineComment => {
                comments.push(Comment::new(span, CommentKind::Line));
                TokenKind::Comment
            }
            RawTag::BlockComment => {
                comments.push(Comment::new(span, CommentKind::Block));
                TokenKind::Comment
            }
            _ => TokenKind::Operator,
        };
        tokens.push(Token::new(kind, span));
    }

    tracing::trace!(tokens = tokens.len(), comments = comments.len(), "cooked");
    Ok(Cooked { tokens, comments })
}

fn keyword_or_ident(text: &str) -> TokenKind {
    match text {
        "package" => TokenKind::Package,
        "import" => TokenKind::Import,
        _ => TokenKind::Ident,
    }
}

fn lex_error_kind(tag: RawTag, text: &str) -> SyntaxErrorKind {
    match tag {
        RawTag::UnterminatedString => SyntaxErrorKind::UnterminatedString,
        RawTag::UnterminatedRawString => SyntaxErrorKind::UnterminatedRawString,
        RawTag::UnterminatedChar => SyntaxErrorKind::UnterminatedRune,
        RawTag::UnterminatedBlockComment => SyntaxErrorKind::UnterminatedComment,
        RawTag::InteriorNull => SyntaxErrorKind::NulByte,
        _ => SyntaxErrorKind::InvalidCharacter(text.to_string()),
    }
}

#[cfg(test)]
mod tests;
