//! The transform: parse, locate, filter, squash, print.

use sbi_ir::{PositionTable, SourceFile};
use sbi_parse::{ParseOutput, SyntaxError};

use crate::filter::within;
use crate::locate::find_import_bounds;
use crate::squash::squash_gaps;
use crate::{render, RenderError, SquashError};

/// Turns source bytes into a file and its position table.
pub trait SourceParser {
    fn parse(&self, text: &[u8]) -> Result<ParseOutput, SyntaxError>;
}

/// Turns a file and a (possibly merged) position table back into text.
pub trait Serializer {
    fn render(&self, file: &SourceFile, table: &PositionTable) -> Result<String, RenderError>;
}

/// The Go parser from `sbi_parse`.
#[derive(Copy, Clone, Debug, Default)]
pub struct GoParser;

impl SourceParser for GoParser {
    fn parse(&self, text: &[u8]) -> Result<ParseOutput, SyntaxError> {
        sbi_parse::parse_bytes(text)
    }
}

/// The gap-preserving printer from [`render`](crate::render).
#[derive(Copy, Clone, Debug, Default)]
pub struct GapPrinter;

impl Serializer for GapPrinter {
    fn render(&self, file: &SourceFile, table: &PositionTable) -> Result<String, RenderError> {
        render::render(file, table)
    }
}

/// Import block squasher over a pluggable parser and serializer.
#[derive(Copy, Clone, Debug, Default)]
pub struct Squasher<P = GoParser, S = GapPrinter> {
    parser: P,
    serializer: S,
}

impl<P: SourceParser, S: Serializer> Squasher<P, S> {
    pub fn new(parser: P, serializer: S) -> Self {
        Squasher { parser, serializer }
    }

    /// Remove blank lines between the members of the first import block.
    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn transform(&self, text: &[u8]) -> Result<Vec<u8>, SquashError> {
        let ParseOutput { file, mut table } = self.parser.parse(text)?;
        if file.imports.len() < 2 {
            return Err(SquashError::NotApplicable);
        }

        let bounds = find_import_bounds(&file.tokens)?;
        tracing::debug!(start = bounds.start, end = bounds.end, "located import block");

        let entries = within(&file.imports, bounds);
        let comments = within(&file.comments, bounds);
        tracing::debug!(
            entries = entries.len(),
            comments = comments.len(),
            "filtered block members"
        );
        if entries.len() < 2 {
            return Err(SquashError::NotApplicable);
        }

        let merged = squash_gaps(entries, comments, &mut table);
        tracing::debug!(merged, "squashed blank lines");

        let printed = self.serializer.render(&file, &table)?;
        Ok(printed.into_bytes())
    }
}
