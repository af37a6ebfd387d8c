//! Cursors and iterators for `Grid`
//!
//! Grid traversal is over the flat row-major order, rank plays no part in
//! it. The cursors are the same index pairs as the `Vec` ones, against
//! `Grid` storage.

use core::{marker::PhantomData, ops::RangeBounds};

use crate::{cursor::CursorIter, seq::decode_range, Cursor, Grid, Seq};

/// A forward cursor over the flat row-major order of a [Grid]
pub struct GridCursor<T> {
    inx: usize,
    end: usize,
    _boo: PhantomData<fn() -> T>,
}

impl<T> GridCursor<T> {
    pub(crate) fn new(inx: usize, end: usize) -> Self {
        Self {
            inx,
            end,
            _boo: PhantomData,
        }
    }

    /// Returns the flat index under the cursor. Only meaningful while the
    /// cursor is not done.
    pub fn flat_index(&self) -> usize {
        self.inx
    }
}

impl<T> Cursor for GridCursor<T> {
    type Item = T;
    type Seq = Grid<T>;
    type Subseq = GridCursor<T>;

    fn get<'s>(&self, seq: &'s Grid<T>) -> &'s T {
        if self.inx >= self.end {
            panic!("`GridCursor` is past the end of its range")
        }
        &seq.data[self.inx]
    }

    fn get_mut<'s>(&self, seq: &'s mut Grid<T>) -> &'s mut T {
        if self.inx >= self.end {
            panic!("`GridCursor` is past the end of its range")
        }
        &mut seq.data[self.inx]
    }

    fn is_done(&self, _seq: &Grid<T>) -> bool {
        self.inx >= self.end
    }

    fn advance(&mut self, _seq: &Grid<T>) {
        if self.inx < self.end {
            self.inx += 1;
        }
    }

    fn remaining(&self, _seq: &Grid<T>) -> usize {
        self.end - self.inx
    }

    fn subseq(&self, _seq: &Grid<T>, start: usize, end: Option<usize>) -> Self {
        let inx = self.inx.saturating_add(start).min(self.end);
        let end = match end {
            Some(end) => self.inx.saturating_add(end).min(self.end),
            None => self.end,
        };
        Self::new(inx, end.max(inx))
    }

    fn advance_by(&mut self, _seq: &Grid<T>, n: usize) {
        self.inx = self.inx.saturating_add(n).min(self.end);
    }
}

impl<T> Clone for GridCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GridCursor<T> {}

/// A reverse cursor over the flat row-major order of a [Grid]. `pos` is one
/// past the flat index under the cursor.
pub struct GridCursorRev<T> {
    pos: usize,
    stop: usize,
    _boo: PhantomData<fn() -> T>,
}

impl<T> GridCursorRev<T> {
    pub(crate) fn new(pos: usize, stop: usize) -> Self {
        Self {
            pos,
            stop,
            _boo: PhantomData,
        }
    }

    /// Returns the flat index under the cursor. Only meaningful while the
    /// cursor is not done.
    pub fn flat_index(&self) -> usize {
        self.pos.wrapping_sub(1)
    }
}

impl<T> Cursor for GridCursorRev<T> {
    type Item = T;
    type Seq = Grid<T>;
    type Subseq = GridCursorRev<T>;

    fn get<'s>(&self, seq: &'s Grid<T>) -> &'s T {
        if self.pos <= self.stop {
            panic!("`GridCursorRev` is past the end of its range")
        }
        &seq.data[self.pos - 1]
    }

    fn get_mut<'s>(&self, seq: &'s mut Grid<T>) -> &'s mut T {
        if self.pos <= self.stop {
            panic!("`GridCursorRev` is past the end of its range")
        }
        &mut seq.data[self.pos - 1]
    }

    fn is_done(&self, _seq: &Grid<T>) -> bool {
        self.pos <= self.stop
    }

    fn advance(&mut self, _seq: &Grid<T>) {
        if self.pos > self.stop {
            self.pos -= 1;
        }
    }

    fn remaining(&self, _seq: &Grid<T>) -> usize {
        self.pos - self.stop
    }

    fn subseq(&self, _seq: &Grid<T>, start: usize, end: Option<usize>) -> Self {
        let pos = self.pos.saturating_sub(start).max(self.stop);
        let stop = match end {
            Some(end) => self.pos.saturating_sub(end).max(self.stop),
            None => self.stop,
        };
        Self::new(pos, stop.min(pos))
    }

    fn advance_by(&mut self, _seq: &Grid<T>, n: usize) {
        self.pos = self.pos.saturating_sub(n).max(self.stop);
    }
}

impl<T> Clone for GridCursorRev<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GridCursorRev<T> {}

impl<T> Seq for Grid<T> {
    type Cursor = GridCursor<T>;
    type CursorRev = GridCursorRev<T>;
    type Item = T;

    fn len(&self) -> usize {
        self.total_len()
    }

    fn cursor<R: RangeBounds<usize>>(&self, range: R) -> GridCursor<T> {
        let (start, end) = decode_range(range, self.total_len());
        GridCursor::new(start, end.unwrap_or(self.total_len()))
    }

    fn cursor_rev<R: RangeBounds<usize>>(&self, range: R) -> GridCursorRev<T> {
        let (start, end) = decode_range(range, self.total_len());
        GridCursorRev::new(end.unwrap_or(self.total_len()), start)
    }
}

impl<T> Grid<T> {
    /// Iteration over `&T` in flat row-major order
    pub fn iter(&self) -> CursorIter<'_, GridCursor<T>> {
        CursorIter::new(self, self.cursor(..))
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type IntoIter = CursorIter<'a, GridCursor<T>>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Grid<T> {
    type IntoIter = std::vec::IntoIter<T>;
    type Item = T;

    /// By-value iteration in flat row-major order, discarding the shape
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
