//! Blank-line squashing for Go import blocks.
//!
//! Parses a Go file, finds the parentheses of its first import declaration,
//! and removes every blank line between the import specs and comment groups
//! inside them. Nothing outside the block changes, and nothing inside it is
//! reordered.
//!
//! # Architecture
//!
//! 1. [`locate`]: find the block's `(` and `)` in the token stream
//! 2. [`filter`]: keep only the specs and comment groups inside them
//! 3. [`squash`]: merge-walk both and merge blank lines in the position table
//! 4. [`render`]: print the file, dropping lines the table merged away
//!
//! # Example
//!
//! ```
//! let source = b"package main\n\nimport (\n\t\"fmt\"\n\n\n\t\"os\"\n)\n";
//! let Ok(out) = sbi_fmt::transform(source) else {
//!     panic!("import block present");
//! };
//! assert_eq!(out, b"package main\n\nimport (\n\t\"fmt\"\n\t\"os\"\n)\n");
//! ```

pub mod emitter;
mod error;
pub mod filter;
pub mod locate;
mod pipeline;
pub mod render;
pub mod squash;

pub use emitter::{Emitter, StringEmitter};
pub use error::{RenderError, SquashError};
pub use locate::{find_import_bounds, BlockBounds};
pub use pipeline::{GapPrinter, GoParser, Serializer, SourceParser, Squasher};

/// Squash the first import block of a Go file with the default parser and
/// printer.
pub fn transform(text: &[u8]) -> Result<Vec<u8>, SquashError> {
    Squasher::<GoParser, GapPrinter>::default().transform(text)
}
