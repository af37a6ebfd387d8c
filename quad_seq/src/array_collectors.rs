//! Collectors for `Vec`

use crate::{Collectable, Collector};

/// `Vec` appends cheaply in place, so it is its own back collector
impl<T> Collector for Vec<T> {
    type Item = T;
    type Seq = Vec<T>;

    fn collect(&mut self, item: T) {
        self.push(item);
    }

    fn collect_many<I: IntoIterator<Item = T>>(&mut self, items: I) {
        // gets the `size_hint` reservation
        Extend::extend(self, items);
    }

    fn finish(self) -> Vec<T> {
        self
    }
}

/// A [Collector] that places elements before the existing front of a `Vec`.
///
/// Inserting at index 0 per element would be quadratic, so the collected run
/// is pushed onto a pending buffer instead and the relocation is deferred to
/// [Collector::finish], which reverses the pending buffer once and appends
/// the original elements after it. Total cost is O(collected + original),
/// paid once.
pub struct ArrayFront<T> {
    pending: Vec<T>,
    seq: Vec<T>,
}

impl<T> ArrayFront<T> {
    /// Starts collecting in front of `seq`
    pub fn new(seq: Vec<T>) -> Self {
        Self {
            pending: Vec::new(),
            seq,
        }
    }
}

impl<T> Collector for ArrayFront<T> {
    type Item = T;
    type Seq = Vec<T>;

    fn collect(&mut self, item: T) {
        self.pending.push(item);
    }

    fn collect_many<I: IntoIterator<Item = T>>(&mut self, items: I) {
        Extend::extend(&mut self.pending, items);
    }

    fn finish(self) -> Vec<T> {
        let ArrayFront { mut pending, mut seq } = self;
        // pushed order is the reverse of final front-to-back order
        pending.reverse();
        pending.append(&mut seq);
        pending
    }
}

impl<T> Collectable for Vec<T> {
    type Back = Vec<T>;
    type Front = ArrayFront<T>;
    type Item = T;

    fn empty_clone(&self) -> Self {
        Vec::new()
    }

    fn into_collector(self) -> Vec<T> {
        self
    }

    fn into_front_collector(self) -> ArrayFront<T> {
        ArrayFront::new(self)
    }
}
