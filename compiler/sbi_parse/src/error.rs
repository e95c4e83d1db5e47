//! Syntax errors.

use sbi_ir::{PositionTable, Span, TokenKind};

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    #[error("source is not valid UTF-8")]
    InvalidUtf8,
    #[error("source file exceeds 4 GiB")]
    FileTooLarge,
    #[error("invalid character {0:?}")]
    InvalidCharacter(String),
    #[error("illegal NUL byte")]
    NulByte,
    #[error("string literal not terminated")]
    UnterminatedString,
    #[error("raw string literal not terminated")]
    UnterminatedRawString,
    #[error("rune literal not terminated")]
    UnterminatedRune,
    #[error("comment not terminated")]
    UnterminatedComment,
    #[error("expected {expected}, found {found}")]
    Expected {
        expected: &'static str,
        found: String,
    },
    #[error("unclosed {0}")]
    Unclosed(TokenKind),
    #[error("unexpected {0}")]
    UnexpectedClose(TokenKind),
    #[error("expected {expected}, found {found}")]
    MismatchedClose {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("invalid package name _")]
    InvalidPackageName,
    #[error("imports must appear before other declarations")]
    ImportAfterDecl,
    #[error("unexpected second package clause")]
    DuplicatePackage,
}

/// A syntax error with its 1-based position.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{line}:{column}: {kind}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl SyntaxError {
    /// Resolve `span` to a line and column through `table`.
    pub fn at(kind: SyntaxErrorKind, span: Span, source: &str, table: &PositionTable) -> Self {
        let (line, column) = table.line_col(source, span.start);
        SyntaxError {
            kind,
            span,
            line,
            column,
        }
    }

    /// An error that precedes any position information.
    pub fn whole_file(kind: SyntaxErrorKind) -> Self {
        SyntaxError {
            kind,
            span: Span::default(),
            line: 1,
            column: 1,
        }
    }
}
