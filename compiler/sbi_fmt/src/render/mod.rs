//! Gap-preserving printer.
//!
//! Tokens are copied verbatim. Only the whitespace between two tokens can
//! change: when the [`PositionTable`] reports fewer lines between them than
//! the source physically has, the surplus blank lines are dropped. The
//! first line breaks are kept with whatever trails them, and the later
//! token keeps its indentation.

use sbi_ir::{PositionTable, SourceFile, Span};

use crate::emitter::{Emitter, StringEmitter};
use crate::RenderError;

/// Print `file` into a new string.
pub fn render(file: &SourceFile, table: &PositionTable) -> Result<String, RenderError> {
    let mut emitter = StringEmitter::with_capacity(file.source.len());
    print_file(file, table, &mut emitter)?;
    Ok(emitter.output())
}

/// Print `file` into `emitter`.
pub fn print_file(
    file: &SourceFile,
    table: &PositionTable,
    emitter: &mut impl Emitter,
) -> Result<(), RenderError> {
    let source = file.source.as_str();
    if table.source_len() as usize != source.len() {
        return Err(RenderError::TableMismatch {
            table: table.source_len(),
            source_len: source.len(),
        });
    }

    let mut printer = Printer {
        source,
        table,
        emitter,
    };
    let mut prev_end = 0;
    for token in &file.tokens {
        printer.gap(prev_end, token.span.start)?;
        printer.emit(token.span)?;
        prev_end = token.span.end;
    }
    printer.gap(prev_end, table.source_len())
}

struct Printer<'a, E> {
    source: &'a str,
    table: &'a PositionTable,
    emitter: &'a mut E,
}

impl<'a, E: Emitter> Printer<'a, E> {
    fn emit(&mut self, span: Span) -> Result<(), RenderError> {
        let text = self.text(span)?;
        self.emitter.emit(text);
        Ok(())
    }

    fn text(&self, span: Span) -> Result<&'a str, RenderError> {
        self.source
            .get(span.to_range())
            .ok_or(RenderError::OutOfBounds(span))
    }

    /// Print the whitespace between `from` and `to`.
    fn gap(&mut self, from: u32, to: u32) -> Result<(), RenderError> {
        let span = Span::new(from, to);
        let text = self.text(span)?;
        let breaks: Vec<usize> = text.match_indices('\n').map(|(i, _)| i).collect();
        let physical = u32::try_from(breaks.len()).unwrap_or(u32::MAX);
        let canonical = self.table.line(to) - self.table.line(from);

        if canonical == physical {
            self.emitter.emit(text);
            return Ok(());
        }
        if canonical > physical {
            return Err(RenderError::LinesAdded {
                offset: to,
                canonical,
                physical,
            });
        }
        if canonical == 0 {
            return Err(RenderError::JoinedLines(to));
        }

        // Up to and including the last kept line break, then the indentation
        // that follows the final physical line break.
        let keep = breaks[canonical as usize - 1] + 1;
        let indent = breaks[breaks.len() - 1] + 1;
        self.emitter.emit(&text[..keep]);
        self.emitter.emit(&text[indent..]);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
