//! Cursors for `Vec`

use core::{marker::PhantomData, ops::RangeBounds};

use crate::{seq::decode_range, Cursor, Seq};

/// A forward cursor over a `Vec`, a plain index plus an exclusive end
pub struct ArrayCursor<T> {
    inx: usize,
    end: usize,
    _boo: PhantomData<fn() -> T>,
}

impl<T> ArrayCursor<T> {
    pub(crate) fn new(inx: usize, end: usize) -> Self {
        Self {
            inx,
            end,
            _boo: PhantomData,
        }
    }

    /// Returns the index under the cursor. Only meaningful while the cursor
    /// is not done.
    pub fn index(&self) -> usize {
        self.inx
    }
}

impl<T> Cursor for ArrayCursor<T> {
    type Item = T;
    type Seq = Vec<T>;
    type Subseq = ArrayCursor<T>;

    fn get<'s>(&self, seq: &'s Vec<T>) -> &'s T {
        if self.inx >= self.end {
            panic!("`ArrayCursor` is past the end of its range")
        }
        &seq[self.inx]
    }

    fn get_mut<'s>(&self, seq: &'s mut Vec<T>) -> &'s mut T {
        if self.inx >= self.end {
            panic!("`ArrayCursor` is past the end of its range")
        }
        &mut seq[self.inx]
    }

    fn is_done(&self, _seq: &Vec<T>) -> bool {
        self.inx >= self.end
    }

    fn advance(&mut self, _seq: &Vec<T>) {
        if self.inx < self.end {
            self.inx += 1;
        }
    }

    fn remaining(&self, _seq: &Vec<T>) -> usize {
        self.end - self.inx
    }

    fn subseq(&self, _seq: &Vec<T>, start: usize, end: Option<usize>) -> Self {
        let inx = self.inx.saturating_add(start).min(self.end);
        let end = match end {
            Some(end) => self.inx.saturating_add(end).min(self.end),
            None => self.end,
        };
        Self::new(inx, end.max(inx))
    }

    fn advance_by(&mut self, _seq: &Vec<T>, n: usize) {
        self.inx = self.inx.saturating_add(n).min(self.end);
    }
}

impl<T> Clone for ArrayCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayCursor<T> {}

/// A reverse cursor over a `Vec`. `pos` is one past the index under the
/// cursor, so the whole range `[stop, pos)` is representable without
/// underflow at the front.
pub struct ArrayCursorRev<T> {
    pos: usize,
    stop: usize,
    _boo: PhantomData<fn() -> T>,
}

impl<T> ArrayCursorRev<T> {
    pub(crate) fn new(pos: usize, stop: usize) -> Self {
        Self {
            pos,
            stop,
            _boo: PhantomData,
        }
    }

    /// Returns the index under the cursor. Only meaningful while the cursor
    /// is not done.
    pub fn index(&self) -> usize {
        self.pos.wrapping_sub(1)
    }
}

impl<T> Cursor for ArrayCursorRev<T> {
    type Item = T;
    type Seq = Vec<T>;
    type Subseq = ArrayCursorRev<T>;

    fn get<'s>(&self, seq: &'s Vec<T>) -> &'s T {
        if self.pos <= self.stop {
            panic!("`ArrayCursorRev` is past the end of its range")
        }
        &seq[self.pos - 1]
    }

    fn get_mut<'s>(&self, seq: &'s mut Vec<T>) -> &'s mut T {
        if self.pos <= self.stop {
            panic!("`ArrayCursorRev` is past the end of its range")
        }
        &mut seq[self.pos - 1]
    }

    fn is_done(&self, _seq: &Vec<T>) -> bool {
        self.pos <= self.stop
    }

    fn advance(&mut self, _seq: &Vec<T>) {
        if self.pos > self.stop {
            self.pos -= 1;
        }
    }

    fn remaining(&self, _seq: &Vec<T>) -> usize {
        self.pos - self.stop
    }

    fn subseq(&self, _seq: &Vec<T>, start: usize, end: Option<usize>) -> Self {
        let pos = self.pos.saturating_sub(start).max(self.stop);
        let stop = match end {
            Some(end) => self.pos.saturating_sub(end).max(self.stop),
            None => self.stop,
        };
        Self::new(pos, stop.min(pos))
    }

    fn advance_by(&mut self, _seq: &Vec<T>, n: usize) {
        self.pos = self.pos.saturating_sub(n).max(self.stop);
    }
}

impl<T> Clone for ArrayCursorRev<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayCursorRev<T> {}

impl<T> Seq for Vec<T> {
    type Cursor = ArrayCursor<T>;
    type CursorRev = ArrayCursorRev<T>;
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn cursor<R: RangeBounds<usize>>(&self, range: R) -> ArrayCursor<T> {
        let (start, end) = decode_range(range, Vec::len(self));
        ArrayCursor::new(start, end.unwrap_or(Vec::len(self)))
    }

    fn cursor_rev<R: RangeBounds<usize>>(&self, range: R) -> ArrayCursorRev<T> {
        let (start, end) = decode_range(range, Vec::len(self));
        ArrayCursorRev::new(end.unwrap_or(Vec::len(self)), start)
    }
}
