//! Uniform traversal and construction over four unlike sequence shapes:
//! singly linked [List]s, contiguous `Vec`s, dense row-major [Grid]s of any
//! rank, and hash maps.
//!
//! The traversal side is the [Cursor] trait: a cursor is a plain value
//! marking a position in an explicit element range, and every operation
//! takes the sequence as an argument instead of borrowing it for the whole
//! loop. The construction side is the [Collector] trait plus the
//! [Collectable] trait for getting collectors (and empty same-shape clones)
//! out of a sequence. Generic code written against these traits runs
//! unchanged over all four shapes, and mixed-shape lock step loops come
//! from [traverse] and [for_zip].
//!
//! ```
//! use std::collections::HashMap;
//!
//! use quad_seq::{for_zip, traverse, Collectable, Collector, Cursor, CursorIter, Grid, List, Seq};
//!
//! // build a list through its back collector, which caches the tail node
//! // so that every append is O(1) despite the list being singly linked
//! let mut c = List::new().into_collector();
//! for i in 0..5 {
//!     c.collect(i as u64);
//! }
//! let mut list = c.finish();
//!
//! // cursors take explicit ranges and are detached from the sequence
//! let mut cur = list.cursor(1..4);
//! assert_eq!(*cur.get(&list), 1);
//! cur.advance(&list);
//!
//! // writing back through a cursor
//! cur.set(&mut list, 20);
//!
//! // clones are independent positions
//! let saved = cur.clone();
//! cur.advance(&list);
//! assert_eq!(*cur.get(&list), 3);
//! assert_eq!(*saved.get(&list), 20);
//! cur.advance(&list);
//! assert!(cur.is_done(&list));
//!
//! // reverse traversal of a singly linked list stacks the node references
//! // in one forward pass, then pops them
//! let rev: Vec<u64> = CursorIter::new(&list, list.cursor_rev(..)).copied().collect();
//! assert_eq!(rev, [4, 3, 20, 1, 0]);
//!
//! // a grid traverses in flat row-major order whatever its rank, so
//! // shape-generic code does not care
//! let grid = Grid::from_fn(&[2, 3], |i| (i as u64) * 10);
//! assert_eq!(grid[&[1, 2]], 50);
//!
//! // unlike shapes in lock step, stopping at the shortest
//! let mut sums = Vec::new();
//! for_zip!(
//!     (x, a) in (&list, list.cursor(..)),
//!     (g, b) in (&grid, grid.cursor(..)),
//!     => {
//!         sums.push(x + g);
//!     }
//! );
//! assert_eq!(sums, [0, 11, 40, 33, 44]);
//!
//! // early exit traversal over any cursor
//! use core::ops::ControlFlow;
//! let found = traverse::try_for_each(&list, list.cursor(..), |x| {
//!     if *x >= 20 {
//!         ControlFlow::Break(*x)
//!     } else {
//!         ControlFlow::Continue(())
//!     }
//! });
//! assert_eq!(found, Some(20));
//!
//! // maps are their own collectors over `(key, value)` pairs, and the
//! // front/back distinction collapses for unordered sequences
//! let m: HashMap<&str, u64> = HashMap::new();
//! let mut c = m.into_collector();
//! c.collect(("list", 5));
//! c.collect_many([("grid", 6), ("list", 7)]);
//! let m = c.finish();
//! assert_eq!(m["list"], 7);
//! ```

// the cursors are all plain indexes and reference stacks over `Vec` backed
// storage, so no unsafe code is needed anywhere
#![deny(unsafe_code)]

mod array_collectors;
mod array_iterators;
mod collect;
mod cursor;
mod grid;
mod grid_iterators;
mod list;
mod list_collectors;
mod list_iterators;
mod map;
mod seq;
#[cfg(feature = "serde_support")]
pub mod serde_support;
pub mod traverse;

pub use array_collectors::ArrayFront;
pub use array_iterators::{ArrayCursor, ArrayCursorRev};
pub use collect::{Collectable, Collector};
pub use cursor::{Bounded, Cursor, CursorIter};
pub use grid::Grid;
pub use grid_iterators::{GridCursor, GridCursorRev};
pub use list::{List, NodeRef};
pub use list_collectors::{ListBack, ListFront};
pub use list_iterators::{BoundedListCursor, ListCursor, ListCursorRev, ListIntoIter};
pub use seq::Seq;
