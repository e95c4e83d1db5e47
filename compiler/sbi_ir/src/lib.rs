//! Shared data model for stripblankimports.
//!
//! - [`Span`]: half-open byte range
//! - [`PositionTable`]: offset to line/column mapping with line merging
//! - [`Token`]/[`TokenKind`]: cooked token stream
//! - [`SourceFile`], [`ImportDecl`], [`ImportSpec`], [`CommentGroup`]:
//!   the parsed shape of a Go file's header

mod ast;
mod comment;
mod position;
mod span;
mod token;

pub use ast::{ImportDecl, ImportSpec, Positioned, SourceFile};
pub use comment::{Comment, CommentGroup, CommentKind};
pub use position::PositionTable;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
