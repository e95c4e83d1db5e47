//! Comment grouping.
//!
//! Groups follow Go's parser: a comment starting on the line where the
//! previous non-comment token ended opens a trailing group that only takes
//! further comments on that same line. Any other comment opens a group that
//! keeps absorbing comments as long as each starts at most one line after
//! the previous one ended.

use sbi_ir::{Comment, CommentGroup, PositionTable, Positioned, Token, TokenKind};

/// Group `comments` in source order.
///
/// `comments` must hold exactly the comment tokens of `tokens`, in the same
/// order; cooking produces both side by side.
pub(crate) fn group_comments(
    tokens: &[Token],
    comments: &[Comment],
    table: &PositionTable,
) -> Vec<CommentGroup> {
    let mut groups = Vec::new();
    let mut prev_end_line: Option<u32> = None;
    let mut comments = comments.iter().copied();
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        i += 1;
        if token.kind != TokenKind::Comment {
            prev_end_line = Some(table.line(token.end()));
            continue;
        }
        let Some(first) = comments.next() else {
            break;
        };

        let trailing = prev_end_line == Some(table.line(first.start()));
        let max_gap = u32::from(!trailing);
        let mut end_line = table.line(first.end());
        let mut group = CommentGroup::new(first);

        while tokens.get(i).is_some_and(|next| {
            next.kind == TokenKind::Comment && table.line(next.start()) <= end_line + max_gap
        }) {
            let Some(next) = comments.next() else {
                break;
            };
            end_line = table.line(next.end());
            group.push(next);
            i += 1;
        }

        groups.push(group);
    }

    groups
}
