//! Blank-line squashing between import block members.
//!
//! Entries and comment groups are walked together in position order
//! without building a combined list. For each adjacent pair, every blank
//! line between the end of the first member and the start of the second is
//! merged away in the [`PositionTable`]. A member only contributes its end
//! line (as the earlier one) or its start line (as the later one), so line
//! breaks inside a multi-line member are never touched.

use sbi_ir::{PositionTable, Positioned, Span};

/// Merge away blank lines between consecutive members.
///
/// Both slices must be sorted by position and must not overlap each other.
/// Does nothing when there are fewer than two entries. Returns the number
/// of line boundaries merged.
pub fn squash_gaps<E, C>(entries: &[E], comments: &[C], table: &mut PositionTable) -> usize
where
    E: Positioned,
    C: Positioned,
{
    if entries.len() < 2 {
        return 0;
    }

    let mut cursor = MergeCursor::new(entries, comments);
    let mut merged = 0;

    while let Some(current) = cursor.advance() {
        let Some(next) = cursor.peek() else {
            break;
        };
        let end_line = table.line(current.end);
        let start_line = table.line(next.start);
        if start_line <= end_line + 1 {
            continue;
        }
        for _ in 0..start_line - end_line - 1 {
            if table.merge_line(end_line) {
                merged += 1;
            }
        }
        tracing::trace!(end_line, start_line, "squashed gap");
    }

    merged
}

/// Which sequence a member came from.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Side {
    Entry,
    Comment,
}

/// Two read heads over position-sorted sequences.
struct MergeCursor<'a, E, C> {
    entries: &'a [E],
    comments: &'a [C],
    entry: usize,
    comment: usize,
}

impl<'a, E: Positioned, C: Positioned> MergeCursor<'a, E, C> {
    fn new(entries: &'a [E], comments: &'a [C]) -> Self {
        MergeCursor {
            entries,
            comments,
            entry: 0,
            comment: 0,
        }
    }

    /// The earlier of the two heads. Ties go to the entry.
    fn choose(&self) -> Option<(Side, Span)> {
        match (self.entries.get(self.entry), self.comments.get(self.comment)) {
            (Some(e), Some(c)) if c.start() < e.start() => Some((Side::Comment, c.span())),
            (Some(e), _) => Some((Side::Entry, e.span())),
            (None, Some(c)) => Some((Side::Comment, c.span())),
            (None, None) => None,
        }
    }

    fn peek(&self) -> Option<Span> {
        self.choose().map(|(_, span)| span)
    }

    fn advance(&mut self) -> Option<Span> {
        let (side, span) = self.choose()?;
        match side {
            Side::Entry => self.entry += 1,
            Side::Comment => self.comment += 1,
        }
        Some(span)
    }
}
