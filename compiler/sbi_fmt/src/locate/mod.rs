//! Import block location.
//!
//! Finds the parentheses of the first `import` declaration. Matching is
//! first-open/first-close: the scan is not depth aware, and only the first
//! `import` keyword is considered.

use sbi_ir::{Token, TokenKind};

use crate::SquashError;

/// Offsets of the `(` and `)` delimiting an import block's contents.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BlockBounds {
    pub start: u32,
    pub end: u32,
}

impl BlockBounds {
    /// Whether `pos` lies strictly between the delimiters.
    #[inline]
    pub fn encloses(self, pos: u32) -> bool {
        self.start < pos && pos < self.end
    }
}

/// Locate the import block in a cooked token stream.
///
/// Comments are skipped. A string literal after `import` and before any
/// `(` means the declaration is a single bare import.
pub fn find_import_bounds(tokens: &[Token]) -> Result<BlockBounds, SquashError> {
    let mut tokens = tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Comment)
        .skip_while(|t| t.kind != TokenKind::Import)
        .skip(1);

    let mut start = None;
    for token in tokens.by_ref() {
        match token.kind {
            TokenKind::LParen => {
                start = Some(token.span.start);
                break;
            }
            TokenKind::String => return Err(SquashError::NonBlockImport),
            _ => {}
        }
    }
    let start = start.ok_or(SquashError::MalformedBlock)?;

    tokens
        .find(|t| t.kind == TokenKind::RParen)
        .map(|t| BlockBounds {
            start,
            end: t.span.start,
        })
        .ok_or(SquashError::MalformedBlock)
}
