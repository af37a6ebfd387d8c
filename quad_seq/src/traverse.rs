//! Whole-range traversal loops over cursors
//!
//! These wrap the standard cursor loop shape (`is_done`/`get`/`advance`)
//! for the common cases: visiting every remaining element, visiting with
//! early exit through [ControlFlow], visiting mutably, and running several
//! cursors in lock step. The lock step forms stop as soon as any one cursor
//! ends, so ranges of unequal length need no pre-trimming, and sequences of
//! different shapes can be zipped freely since the loop needs nothing from a
//! cursor beyond the [Cursor] trait.
//!
//! ```
//! use quad_seq::{traverse, List, Seq};
//!
//! let prices: Vec<u64> = vec![3, 9, 27, 81];
//! let names: List<&str> = ["a", "b", "c"].into_iter().collect();
//!
//! let mut pairs = Vec::new();
//! traverse::for_each_zip(
//!     &names,
//!     names.cursor(..),
//!     &prices,
//!     prices.cursor(1..),
//!     |name, price| pairs.push((*name, *price)),
//! );
//! assert_eq!(pairs, [("a", 9), ("b", 27), ("c", 81)]);
//! ```

use core::ops::ControlFlow;

use crate::Cursor;

/// Calls `f` on every element the cursor has left, front of the range first
pub fn for_each<C: Cursor, F: FnMut(&C::Item)>(seq: &C::Seq, mut cur: C, mut f: F) {
    while !cur.is_done(seq) {
        f(cur.get(seq));
        cur.advance(seq);
    }
}

/// Calls `f` on every element the cursor has left, stopping at the first
/// `ControlFlow::Break` and returning its value, or `None` if the range was
/// exhausted
pub fn try_for_each<C: Cursor, B, F: FnMut(&C::Item) -> ControlFlow<B>>(
    seq: &C::Seq,
    mut cur: C,
    mut f: F,
) -> Option<B> {
    while !cur.is_done(seq) {
        if let ControlFlow::Break(b) = f(cur.get(seq)) {
            return Some(b)
        }
        cur.advance(seq);
    }
    None
}

/// Calls `f` on a mutable reference to every element the cursor has left.
/// The cursor never borrows the sequence across steps, which is what allows
/// handing out `&mut` element access one step at a time.
pub fn for_each_mut<C: Cursor, F: FnMut(&mut C::Item)>(seq: &mut C::Seq, mut cur: C, mut f: F) {
    while !cur.is_done(seq) {
        f(cur.get_mut(seq));
        cur.advance(seq);
    }
}

/// Mutable form of [try_for_each]
pub fn try_for_each_mut<C: Cursor, B, F: FnMut(&mut C::Item) -> ControlFlow<B>>(
    seq: &mut C::Seq,
    mut cur: C,
    mut f: F,
) -> Option<B> {
    while !cur.is_done(seq) {
        if let ControlFlow::Break(b) = f(cur.get_mut(seq)) {
            return Some(b)
        }
        cur.advance(seq);
    }
    None
}

/// Runs two cursors in lock step, calling `f` on each pair of elements and
/// stopping when either cursor ends. The sequences can be of different
/// shapes. For three or more cursors use [for_zip!](crate::for_zip).
pub fn for_each_zip<C0: Cursor, C1: Cursor, F: FnMut(&C0::Item, &C1::Item)>(
    seq0: &C0::Seq,
    mut cur0: C0,
    seq1: &C1::Seq,
    mut cur1: C1,
    mut f: F,
) {
    while !(cur0.is_done(seq0) || cur1.is_done(seq1)) {
        f(cur0.get(seq0), cur1.get(seq1));
        cur0.advance(seq0);
        cur1.advance(seq1);
    }
}

/// Lock step form of [try_for_each]: stops at the first
/// `ControlFlow::Break` or when either cursor ends
pub fn try_for_each_zip<C0: Cursor, C1: Cursor, B, F>(
    seq0: &C0::Seq,
    mut cur0: C0,
    seq1: &C1::Seq,
    mut cur1: C1,
    mut f: F,
) -> Option<B>
where
    F: FnMut(&C0::Item, &C1::Item) -> ControlFlow<B>,
{
    while !(cur0.is_done(seq0) || cur1.is_done(seq1)) {
        if let ControlFlow::Break(b) = f(cur0.get(seq0), cur1.get(seq1)) {
            return Some(b)
        }
        cur0.advance(seq0);
        cur1.advance(seq1);
    }
    None
}

/// Runs any number of cursors in lock step, stopping when any one of them
/// ends.
///
/// Each `(item, state) in (seq, cursor)` arm binds `item` to a reference to
/// the current element of that cursor for the body. `seq` must be a `&`
/// reference to the sequence and is evaluated once, `state` names the loop
/// state for the arm (useful mostly to keep the arms hygienic, but `break`
/// and `continue` work in the body like in any loop).
///
/// ```
/// use quad_seq::{for_zip, Grid, List, Seq};
///
/// let xs: List<u64> = [1, 2, 3, 4].into_iter().collect();
/// let ys: Vec<u64> = vec![10, 20, 30];
/// let zs: Grid<u64> = Grid::from_fn(&[2, 2], |i| i as u64);
///
/// let mut out = Vec::new();
/// for_zip!(
///     (x, a) in (&xs, xs.cursor(..)),
///     (y, b) in (&ys, ys.cursor(..)),
///     (z, c) in (&zs, zs.cursor_rev(..)),
///     => {
///         out.push(x + y + z);
///     }
/// );
/// assert_eq!(out, [14, 24, 34]);
/// ```
#[macro_export]
macro_rules! for_zip {
    ($(($item:ident, $state:ident) in ($seq:expr, $cur:expr)),+ $(,)? => $body:block) => {{
        $(let mut $state = ($seq, $cur);)+
        loop {
            if $($crate::Cursor::is_done(&$state.1, $state.0))||+ {
                break
            }
            $(let $item = $crate::Cursor::get(&$state.1, $state.0);)+
            // advancing before the body keeps `continue` sound, the element
            // references only borrow the sequences
            $($crate::Cursor::advance(&mut $state.1, $state.0);)+
            $body
        }
    }};
}
