use super::*;
use sbi_ir::{Comment, CommentGroup, CommentKind, Span};

fn group(start: u32, end: u32) -> CommentGroup {
    CommentGroup::new(Comment::new(Span::new(start, end), CommentKind::Line))
}

fn starts(groups: &[CommentGroup]) -> Vec<u32> {
    groups.iter().map(Positioned::start).collect()
}

const BOUNDS: BlockBounds = BlockBounds { start: 10, end: 50 };

#[test]
fn keeps_only_enclosed_comments() {
    let groups = [group(0, 8), group(12, 20), group(30, 40), group(60, 70)];
    assert_eq!(starts(within(&groups, BOUNDS)), vec![12, 30]);
}

#[test]
fn delimiter_positions_are_excluded() {
    let groups = [group(10, 11), group(11, 12), group(49, 50), group(50, 51)];
    assert_eq!(starts(within(&groups, BOUNDS)), vec![11, 49]);
}

#[test]
fn nothing_inside() {
    let groups = [group(0, 5), group(55, 60)];
    assert!(within(&groups, BOUNDS).is_empty());
}

#[test]
fn empty_input() {
    let groups: [CommentGroup; 0] = [];
    assert!(within(&groups, BOUNDS).is_empty());
}

#[test]
fn everything_after_block() {
    let groups = [group(51, 52), group(53, 54)];
    assert!(within(&groups, BOUNDS).is_empty());
}
