//! Offset to line/column mapping with line merging.
//!
//! [`PositionTable`] pre-computes the byte offset of every line start, so a
//! lookup is a binary search. A table can then be told that two adjacent
//! lines should be treated as one via [`PositionTable::merge_line`]: the
//! start of the later line is dropped, so every offset on it reports the
//! earlier line number, and every line after it shifts up by one.
//!
//! The printer in `sbi_fmt` compares these canonical line numbers against
//! the physical newlines in the source to decide how many line breaks to
//! emit between two tokens.
//!
//! # Example
//!
//! ```
//! use sbi_ir::PositionTable;
//!
//! let source = "a\n\n\nb";
//! let mut table = PositionTable::build(source);
//! assert_eq!(table.line(4), 4);
//!
//! assert!(table.merge_line(1));
//! assert!(table.merge_line(1));
//! assert_eq!(table.line(4), 2);
//! assert_eq!(table.line_count(), 2);
//! assert_eq!(table.physical_line_count(), 4);
//! ```

/// Pre-computed line start table with a line-merge mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionTable {
    /// Byte offset of each canonical line start (0-indexed lines internally).
    /// `line_starts[0] == 0` always.
    line_starts: Vec<u32>,
    /// Number of lines in the source before any merge.
    physical_lines: usize,
    /// Length of the source the table was built from.
    source_len: u32,
}

impl PositionTable {
    /// Build a table from source text.
    ///
    /// Scans the source once with `\n` as the only line terminator, so a
    /// `\r\n` file resolves the same lines as the `\n` form.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "sbi_parse rejects sources larger than u32::MAX bytes"
    )]
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        let physical_lines = line_starts.len();
        PositionTable {
            line_starts,
            physical_lines,
            source_len: source.len() as u32,
        }
    }

    /// Get the 1-based canonical line number containing `offset`.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count never exceeds source length, which fits in u32"
    )]
    pub fn line(&self, offset: u32) -> u32 {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        (line_idx as u32) + 1
    }

    /// Get 1-based (line, column) for `offset`. The column counts characters
    /// from the canonical line start, so it grows past a merged boundary.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line(offset);
        let line_start = self.line_start(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col_chars = source
            .get(line_start..end)
            .map_or(0, |text| text.chars().count());
        let col = u32::try_from(col_chars).unwrap_or(u32::MAX - 1) + 1;
        (line, col)
    }

    /// Byte offset where canonical `line` (1-based) starts.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.line_starts.get((line - 1) as usize).copied()
    }

    /// Merge canonical `line` with the line that currently follows it.
    ///
    /// Each call removes one more line boundary: merging line 3 twice folds
    /// physical lines 3, 4, and 5 into canonical line 3. Calling this on the
    /// last line, or with `line == 0`, changes nothing and returns `false`.
    pub fn merge_line(&mut self, line: u32) -> bool {
        let next_idx = line as usize;
        if line == 0 || next_idx >= self.line_starts.len() {
            return false;
        }
        self.line_starts.remove(next_idx);
        true
    }

    /// Number of canonical lines (after merges).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Number of lines in the source before any merge.
    pub fn physical_line_count(&self) -> usize {
        self.physical_lines
    }

    /// Number of boundaries removed by [`merge_line`](Self::merge_line).
    pub fn merged_count(&self) -> usize {
        self.physical_lines - self.line_starts.len()
    }

    /// Length of the source the table was built from.
    pub fn source_len(&self) -> u32 {
        self.source_len
    }
}
