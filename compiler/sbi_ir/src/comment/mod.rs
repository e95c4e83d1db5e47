//! Comments and comment groups.
//!
//! Comments are kept both in the token stream and, grouped, in
//! [`SourceFile::comments`](crate::SourceFile). A group is a run of
//! comments with no blank line and no other token between them, matching
//! how Go's own parser attaches comments.

use crate::{Positioned, Span};

/// The two comment forms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`, possibly spanning lines.
    Block,
}

/// A single comment, `//` or `/*` included in its span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Comment {
    pub span: Span,
    pub kind: CommentKind,
}

impl Comment {
    #[inline]
    pub const fn new(span: Span, kind: CommentKind) -> Self {
        Comment { span, kind }
    }
}

/// A freestanding, possibly multi-line run of comments.
///
/// Never empty: constructed from a first comment and grown with
/// [`push`](Self::push).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CommentGroup {
    comments: Vec<Comment>,
}

impl CommentGroup {
    pub fn new(first: Comment) -> Self {
        CommentGroup {
            comments: vec![first],
        }
    }

    /// Append a comment that follows every comment already in the group.
    pub fn push(&mut self, comment: Comment) {
        debug_assert!(
            self.span().end <= comment.span.start,
            "comments must be pushed in source order"
        );
        self.comments.push(comment);
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Always `false`; groups hold at least one comment.
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

impl Positioned for CommentGroup {
    fn span(&self) -> Span {
        let start = self.comments.first().map_or(0, |c| c.span.start);
        let end = self.comments.last().map_or(start, |c| c.span.end);
        Span::new(start, end)
    }
}

impl Positioned for Comment {
    fn span(&self) -> Span {
        self.span
    }
}
