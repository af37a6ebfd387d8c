//! Cursors and iterators for `List`

use core::{marker::PhantomData, mem};

use crate::{
    cursor::{Bounded, CursorIter},
    list::{List, Node, NodeRef},
    seq::decode_range,
    Collectable, Collector, Cursor, Seq,
};

/// The cursor type of [Seq] for `List`
pub type BoundedListCursor<T> = Bounded<ListCursor<T>>;

/// A forward cursor over a [List], following `next` references until the
/// natural end. [Seq::cursor] wraps this in a [Bounded] to get an end bound,
/// the raw cursor comes from [List::head_cursor] or [Bounded::into_inner].
pub struct ListCursor<T> {
    at: Option<NodeRef>,
    _boo: PhantomData<fn() -> T>,
}

impl<T> ListCursor<T> {
    /// Returns the node under the cursor, or `None` if the cursor is done
    pub fn node(&self) -> Option<NodeRef> {
        self.at
    }
}

impl<T> Cursor for ListCursor<T> {
    type Item = T;
    type Seq = List<T>;
    type Subseq = Bounded<ListCursor<T>>;

    fn get<'s>(&self, seq: &'s List<T>) -> &'s T {
        let r = self
            .at
            .expect("`ListCursor` is past the end of its range");
        seq.get(r)
            .expect("`ListCursor` used on a list that was structurally mutated")
    }

    fn get_mut<'s>(&self, seq: &'s mut List<T>) -> &'s mut T {
        let r = self
            .at
            .expect("`ListCursor` is past the end of its range");
        seq.get_mut(r)
            .expect("`ListCursor` used on a list that was structurally mutated")
    }

    fn is_done(&self, _seq: &List<T>) -> bool {
        self.at.is_none()
    }

    fn advance(&mut self, seq: &List<T>) {
        if let Some(r) = self.at {
            self.at = seq.next(r);
        }
    }

    /// Costs a walk of the remaining chain
    fn remaining(&self, seq: &List<T>) -> usize {
        let mut n = 0;
        let mut at = self.at;
        while let Some(r) = at {
            n += 1;
            at = seq.next(r);
        }
        n
    }

    fn subseq(&self, seq: &List<T>, start: usize, end: Option<usize>) -> Bounded<ListCursor<T>> {
        let mut inner = *self;
        inner.advance_by(seq, start);
        Bounded::new(inner, end.map(|e| e.saturating_sub(start)))
    }
}

impl<T> Clone for ListCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListCursor<T> {}

/// A reverse cursor over a [List].
///
/// Singly linked nodes cannot be walked backwards, so construction runs one
/// forward pass and stacks the node references of the range, then the
/// traversal pops them. The stack also makes `remaining` O(1) and
/// `advance_by` a truncation.
pub struct ListCursorRev<T> {
    stack: Vec<NodeRef>,
    _boo: PhantomData<fn() -> T>,
}

impl<T> Cursor for ListCursorRev<T> {
    type Item = T;
    type Seq = List<T>;
    type Subseq = ListCursorRev<T>;

    fn get<'s>(&self, seq: &'s List<T>) -> &'s T {
        let r = *self
            .stack
            .last()
            .expect("`ListCursorRev` is past the end of its range");
        seq.get(r)
            .expect("`ListCursorRev` used on a list that was structurally mutated")
    }

    fn get_mut<'s>(&self, seq: &'s mut List<T>) -> &'s mut T {
        let r = *self
            .stack
            .last()
            .expect("`ListCursorRev` is past the end of its range");
        seq.get_mut(r)
            .expect("`ListCursorRev` used on a list that was structurally mutated")
    }

    fn is_done(&self, _seq: &List<T>) -> bool {
        self.stack.is_empty()
    }

    fn advance(&mut self, _seq: &List<T>) {
        self.stack.pop();
    }

    fn remaining(&self, _seq: &List<T>) -> usize {
        self.stack.len()
    }

    fn subseq(&self, _seq: &List<T>, start: usize, end: Option<usize>) -> Self {
        let mut stack = self.stack.clone();
        let skip = start.min(stack.len());
        stack.truncate(stack.len() - skip);
        if let Some(end) = end {
            let keep = end.saturating_sub(start).min(stack.len());
            stack = stack.split_off(stack.len() - keep);
        }
        Self {
            stack,
            _boo: PhantomData,
        }
    }

    fn advance_by(&mut self, _seq: &List<T>, n: usize) {
        let n = n.min(self.stack.len());
        self.stack.truncate(self.stack.len() - n);
    }
}

impl<T> Clone for ListCursorRev<T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            _boo: PhantomData,
        }
    }
}

impl<T> Seq for List<T> {
    type Cursor = BoundedListCursor<T>;
    type CursorRev = ListCursorRev<T>;
    type Item = T;

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn cursor<R: core::ops::RangeBounds<usize>>(&self, range: R) -> BoundedListCursor<T> {
        let (start, end) = decode_range(range, self.len());
        let mut inner = self.head_cursor();
        inner.advance_by(self, start);
        Bounded::new(inner, end.map(|e| e - start))
    }

    fn cursor_rev<R: core::ops::RangeBounds<usize>>(&self, range: R) -> ListCursorRev<T> {
        let (start, end) = decode_range(range, self.len());
        let end = end.unwrap_or(self.len());
        let mut stack = Vec::with_capacity(end.saturating_sub(start));
        let mut at = self.head;
        let mut i = 0;
        while let Some(r) = at {
            if i >= end {
                break
            }
            if i >= start {
                stack.push(r);
            }
            at = self.next(r);
            i += 1;
        }
        ListCursorRev {
            stack,
            _boo: PhantomData,
        }
    }
}

impl<T> List<T> {
    /// Returns an unbounded [ListCursor] at the head of the list
    pub fn head_cursor(&self) -> ListCursor<T> {
        ListCursor {
            at: self.head,
            _boo: PhantomData,
        }
    }

    /// Returns an unbounded [ListCursor] at node `r` of the list
    pub fn cursor_at(&self, r: NodeRef) -> ListCursor<T> {
        ListCursor {
            at: Some(r),
            _boo: PhantomData,
        }
    }

    /// Iteration over `&T` in traversal order
    pub fn iter(&self) -> CursorIter<'_, ListCursor<T>> {
        CursorIter::new(self, self.head_cursor())
    }
}

/// A by-value iterator over the elements of a [List] in traversal order
pub struct ListIntoIter<T> {
    slots: Vec<Option<Node<T>>>,
    at: Option<NodeRef>,
}

impl<T> Iterator for ListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let r = self.at?;
        let node = self.slots.get_mut(r.index())?.take()?;
        self.at = node.next;
        Some(node.t)
    }
}

impl<T> IntoIterator for List<T> {
    type IntoIter = ListIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> ListIntoIter<T> {
        ListIntoIter {
            at: self.head,
            slots: self.nodes.into_iter().map(Some).collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type IntoIter = CursorIter<'a, ListCursor<T>>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut c = List::new().into_collector();
        c.collect_many(iter);
        c.finish()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut c = mem::take(self).into_collector();
        c.collect_many(iter);
        *self = c.finish();
    }
}
