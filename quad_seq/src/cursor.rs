/// A traversal position that does not borrow the sequence.
///
/// Rust's external iterators borrow the collection for the whole loop, which
/// makes the common "read here, write there" patterns impossible without
/// collecting into a side allocation first. With a sequence such as a `Vec`,
/// the usual escape hatch is manual index management:
///
/// ```text
/// let mut i = 0;
/// loop {
///     if i >= vec.len() {
///         break
///     }
///     ... vec.get(i) ...
///     ... vec.get_mut(i) ...
///     ... vec.get_mut(any_i) ...
///
///     i += 1;
/// }
/// ```
///
/// A `Cursor` generalizes that strategy across unlike sequence shapes. The
/// cursor itself is a small plain value (an index, a node reference, or a
/// pending stack), and every operation takes the sequence as an explicit
/// argument:
///
/// ```text
/// let mut cur = seq.cursor(..);
/// loop {
///     if cur.is_done(&seq) {
///         break
///     }
///     ... cur.get(&seq) ...
///     ... cur.set(&mut seq, x) ...
///
///     cur.advance(&seq);
/// }
/// ```
///
/// Because no borrow is held between steps, cursors can be freely cloned,
/// stored, and run in lock step over several sequences at once (see
/// [crate::traverse]).
///
/// # Note
///
/// A cursor is only meaningful for the sequence value it was created from.
/// Structural mutation of the sequence (pushing, clearing, splicing) while a
/// cursor is outstanding never causes memory unsafety, but the cursor may
/// afterwards report ending early, panic on `get`, or traverse elements it
/// already visited. Element mutation through [Cursor::get_mut] or
/// [Cursor::set] is always fine.
///
/// Once `is_done` returns `true` it keeps returning `true` for that sequence,
/// and `advance` becomes a no-op.
pub trait Cursor: Clone {
    /// The sequence type this cursor traverses
    type Seq;
    /// The element type yielded by the traversal
    type Item;
    /// The cursor type produced by [Cursor::subseq]. For index based cursors
    /// this is `Self`, for plain list cursors it is a [Bounded] wrapper.
    type Subseq: Cursor<Seq = Self::Seq, Item = Self::Item>;

    /// Returns the element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end of its range.
    fn get<'s>(&self, seq: &'s Self::Seq) -> &'s Self::Item;

    /// Returns a mutable reference to the element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end of its range.
    fn get_mut<'s>(&self, seq: &'s mut Self::Seq) -> &'s mut Self::Item;

    /// Returns `true` if the cursor has moved past its last element
    fn is_done(&self, seq: &Self::Seq) -> bool;

    /// Moves the cursor to the next element. No-op if the cursor is already
    /// done.
    fn advance(&mut self, seq: &Self::Seq);

    /// Returns the number of elements left to traverse, counting the current
    /// one. This can cost a full walk for linked cursors, see the
    /// implementors.
    fn remaining(&self, seq: &Self::Seq) -> usize;

    /// Returns a cursor over a sub-range of the remaining elements, `start`
    /// elements ahead of the current position and ending before the
    /// `end`th (`None` for no new end bound). The sub-range is clamped to
    /// what remains, and `self` is unaffected.
    fn subseq(&self, seq: &Self::Seq, start: usize, end: Option<usize>) -> Self::Subseq;

    /// Returns the element under the cursor, or `None` if the cursor is done
    fn peek<'s>(&self, seq: &'s Self::Seq) -> Option<&'s Self::Item> {
        if self.is_done(seq) {
            None
        } else {
            Some(self.get(seq))
        }
    }

    /// Replaces the element under the cursor, dropping the old value.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end of its range.
    fn set(&self, seq: &mut Self::Seq, item: Self::Item) {
        *self.get_mut(seq) = item;
    }

    /// Advances `n` times, stopping early if the cursor becomes done.
    /// Index based cursors override this to O(1).
    fn advance_by(&mut self, seq: &Self::Seq, n: usize) {
        for _ in 0..n {
            if self.is_done(seq) {
                break
            }
            self.advance(seq)
        }
    }
}

/// Caps another cursor at a fixed number of elements.
///
/// `Bounded` counts down a budget of its own and otherwise defers to the
/// inner cursor, so the traversal ends at whichever limit is hit first. A
/// budget of `None` is no extra limit at all, which lets one type serve both
/// the bounded and unbounded cases.
#[derive(Clone, Copy)]
pub struct Bounded<C> {
    inner: C,
    left: Option<usize>,
}

impl<C> Bounded<C> {
    /// Caps `inner` at `left` more elements, or leaves it unchanged if
    /// `left` is `None`
    pub fn new(inner: C, left: Option<usize>) -> Self {
        Self { inner, left }
    }

    /// Returns the inner cursor, discarding the bound
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Returns how many elements the bound itself still permits
    pub fn bound(&self) -> Option<usize> {
        self.left
    }
}

impl<C: Cursor> Cursor for Bounded<C> {
    type Item = C::Item;
    type Seq = C::Seq;
    type Subseq = Bounded<C>;

    fn get<'s>(&self, seq: &'s Self::Seq) -> &'s Self::Item {
        if self.left == Some(0) {
            panic!("`Bounded` cursor is past the end of its range")
        }
        self.inner.get(seq)
    }

    fn get_mut<'s>(&self, seq: &'s mut Self::Seq) -> &'s mut Self::Item {
        if self.left == Some(0) {
            panic!("`Bounded` cursor is past the end of its range")
        }
        self.inner.get_mut(seq)
    }

    fn is_done(&self, seq: &Self::Seq) -> bool {
        (self.left == Some(0)) || self.inner.is_done(seq)
    }

    fn advance(&mut self, seq: &Self::Seq) {
        if self.is_done(seq) {
            return
        }
        self.inner.advance(seq);
        if let Some(left) = self.left.as_mut() {
            // nonzero because `is_done` was false
            *left -= 1;
        }
    }

    fn remaining(&self, seq: &Self::Seq) -> usize {
        let inner = self.inner.remaining(seq);
        match self.left {
            Some(left) => left.min(inner),
            None => inner,
        }
    }

    fn subseq(&self, seq: &Self::Seq, start: usize, end: Option<usize>) -> Self {
        let mut res = self.clone();
        res.advance_by(seq, start);
        if let Some(end) = end {
            let want = end.saturating_sub(start);
            res.left = Some(match res.left {
                Some(left) => left.min(want),
                None => want,
            });
        }
        res
    }

    fn advance_by(&mut self, seq: &Self::Seq, n: usize) {
        match self.left {
            Some(left) => {
                let n = n.min(left);
                self.inner.advance_by(seq, n);
                self.left = Some(left - n);
            }
            None => self.inner.advance_by(seq, n),
        }
    }
}

/// A plain `Iterator` borrowing the sequence for the lifetime of a cursor
/// traversal. Use this when no mutation is needed during the loop.
pub struct CursorIter<'a, C: Cursor> {
    seq: &'a C::Seq,
    cur: C,
}

impl<'a, C: Cursor> CursorIter<'a, C> {
    /// Iterates over the elements `cur` has left in `seq`
    pub fn new(seq: &'a C::Seq, cur: C) -> Self {
        Self { seq, cur }
    }
}

impl<'a, C: Cursor> Iterator for CursorIter<'a, C>
where
    C::Item: 'a,
{
    type Item = &'a C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur.is_done(self.seq) {
            None
        } else {
            let res = self.cur.get(self.seq);
            self.cur.advance(self.seq);
            Some(res)
        }
    }
}

impl<'a, C: Cursor> Clone for CursorIter<'a, C> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            cur: self.cur.clone(),
        }
    }
}
