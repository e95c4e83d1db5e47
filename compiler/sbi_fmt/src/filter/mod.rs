//! Restrict position-ordered members to an import block.

use sbi_ir::Positioned;

use crate::BlockBounds;

/// The contiguous run of `items` starting strictly inside `bounds`.
///
/// `items` must be sorted by start position. Items starting exactly on a
/// delimiter are excluded.
pub fn within<T: Positioned>(items: &[T], bounds: BlockBounds) -> &[T] {
    let Some(first) = items.iter().position(|item| item.start() > bounds.start) else {
        return &[];
    };
    let rest = &items[first..];
    let len = rest
        .iter()
        .take_while(|item| bounds.encloses(item.start()))
        .count();
    &rest[..len]
}

#[cfg(test)]
mod tests;
