use core::ops::{Bound, RangeBounds};

use crate::Cursor;

/// A sequence that cursors can be constructed over.
///
/// The cursor is handed a half-open element range up front (any
/// `RangeBounds<usize>`, clamped to the sequence length), so the same trait
/// covers whole-sequence, prefix, suffix, and window traversals:
///
/// ```
/// use quad_seq::{Cursor, Seq};
///
/// let v = vec![10, 20, 30, 40];
/// let mut cur = v.cursor(1..3);
/// assert_eq!(*cur.get(&v), 20);
/// cur.advance(&v);
/// assert_eq!(*cur.get(&v), 30);
/// cur.advance(&v);
/// assert!(cur.is_done(&v));
///
/// // reverse cursors take the same ranges and yield the range backwards
/// let rev = v.cursor_rev(..);
/// assert_eq!(*rev.get(&v), 40);
/// ```
pub trait Seq: Sized {
    /// The element type
    type Item;
    /// The forward cursor type
    type Cursor: Cursor<Seq = Self, Item = Self::Item>;
    /// The reverse cursor type
    type CursorRev: Cursor<Seq = Self, Item = Self::Item>;

    /// Returns the number of elements
    fn len(&self) -> usize;

    /// Returns if the sequence has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a cursor over `range`, front to back. Out-of-range bounds are
    /// clamped to the sequence, an inverted range gives an already done
    /// cursor.
    fn cursor<R: RangeBounds<usize>>(&self, range: R) -> Self::Cursor;

    /// Returns a cursor over `range`, back to front. For linked lists this
    /// costs one forward pass up front to stack the node references.
    fn cursor_rev<R: RangeBounds<usize>>(&self, range: R) -> Self::CursorRev;
}

/// Resolves `range` against a sequence of length `len` into a clamped
/// `start` and an optional exclusive `end` (`None` for an unbounded end, so
/// that linked cursors do not have to count their sequence up front).
pub(crate) fn decode_range<R: RangeBounds<usize>>(range: R, len: usize) -> (usize, Option<usize>) {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => Some(e.saturating_add(1).min(len)),
        Bound::Excluded(&e) => Some(e.min(len)),
        Bound::Unbounded => None,
    };
    let start = match end {
        Some(end) => start.min(end),
        None => start.min(len),
    };
    (start, end)
}
