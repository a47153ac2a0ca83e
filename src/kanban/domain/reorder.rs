//! Positional move used to reorder lists within a board.

/// Moves the element at `source` to `destination` with array-splice
/// semantics.
///
/// The element is removed first and then reinserted into the shortened
/// sequence. Negative indices count back from the end and clamp at zero; a
/// destination at or past the end appends.
///
/// A `source` that addresses no element removes nothing, and an empty slot
/// is inserted at `destination` in its place. Callers decide what an empty
/// slot means; the sequence is never validated up front.
#[must_use]
pub fn move_item<T>(items: Vec<T>, source: i64, destination: i64) -> Vec<Option<T>> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let from = resolve_index(source, slots.len());
    let moved = if from < slots.len() {
        slots.remove(from)
    } else {
        None
    };

    let to = resolve_index(destination, slots.len());
    slots.insert(to, moved);
    slots
}

/// Resolves a possibly negative splice index against a sequence length.
fn resolve_index(index: i64, len: usize) -> usize {
    if index < 0 {
        let back = usize::try_from(index.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(back)
    } else {
        usize::try_from(index).map_or(len, |value| value.min(len))
    }
}
