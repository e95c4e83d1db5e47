//! Failure kinds of a transform.

use sbi_ir::Span;
use sbi_parse::SyntaxError;

/// Printing failed: the position table disagrees with the source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("position table covers {table} bytes, source has {source_len}")]
    TableMismatch { table: u32, source_len: usize },
    #[error("span {0} lies outside the source")]
    OutOfBounds(Span),
    #[error("merged lines would join the token at offset {0} onto the previous line")]
    JoinedLines(u32),
    #[error("{canonical} line breaks requested before offset {offset}, source has {physical}")]
    LinesAdded {
        offset: u32,
        canonical: u32,
        physical: u32,
    },
}

/// Why a file was not transformed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SquashError {
    #[error("{0}")]
    Syntax(#[from] SyntaxError),
    #[error("fewer than two imports, nothing to squash")]
    NotApplicable,
    #[error("first import declaration is not a parenthesized block")]
    NonBlockImport,
    #[error("unable to find import block bounds")]
    MalformedBlock,
    #[error("failed to print file: {0}")]
    Serialization(#[from] RenderError),
}

impl SquashError {
    /// Expected outcomes where the input should be emitted unchanged.
    pub fn is_pass_through(&self) -> bool {
        matches!(self, SquashError::NotApplicable | SquashError::NonBlockImport)
    }
}
