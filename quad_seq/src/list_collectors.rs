//! Collectors for `List`

use core::mem;

use crate::{
    list::{List, NodeRef},
    Collectable, Collector,
};

/// A [Collector] that appends to the back of a [List].
///
/// [List::push_back] has to walk to the tail every call, so this caches the
/// tail node once at construction and keeps it current across `collect`s,
/// making repeated appending O(1) per element.
pub struct ListBack<T> {
    list: List<T>,
    tail: Option<NodeRef>,
}

impl<T> ListBack<T> {
    /// Starts collecting onto the back of `list`. Costs one walk to the
    /// current tail.
    pub fn new(list: List<T>) -> Self {
        let tail = list.tail();
        Self { list, tail }
    }

    /// Splices an entire `List` onto the back in O(len(`other`)), keeping
    /// the cached tail current
    pub fn append_list(&mut self, other: List<T>) {
        let spliced_tail = self.list.append_after(self.tail, other);
        if spliced_tail.is_some() {
            self.tail = spliced_tail;
        }
    }
}

impl<T> Collector for ListBack<T> {
    type Item = T;
    type Seq = List<T>;

    fn collect(&mut self, item: T) {
        let r = self.list.link_back(self.tail, item);
        self.tail = Some(r);
    }

    fn finish(self) -> List<T> {
        self.list
    }
}

/// A [Collector] that places elements before the existing front of a [List].
///
/// Each `collect` is an O(1) [List::push_front], so the collected run ends up
/// in reverse collection order. To prepend a run in order, build it
/// separately and use [ListFront::prepend_list].
pub struct ListFront<T> {
    list: List<T>,
}

impl<T> ListFront<T> {
    /// Starts collecting onto the front of `list` in O(1)
    pub fn new(list: List<T>) -> Self {
        Self { list }
    }

    /// Splices an entire `List` before the front in
    /// O(len(`self`) + len(`other`))
    pub fn prepend_list(&mut self, other: List<T>) {
        let mut combined = other;
        combined.append(mem::take(&mut self.list));
        self.list = combined;
    }
}

impl<T> Collector for ListFront<T> {
    type Item = T;
    type Seq = List<T>;

    fn collect(&mut self, item: T) {
        self.list.push_front(item);
    }

    fn finish(self) -> List<T> {
        self.list
    }
}

impl<T> Collectable for List<T> {
    type Back = ListBack<T>;
    type Front = ListFront<T>;
    type Item = T;

    fn empty_clone(&self) -> Self {
        List::new()
    }

    fn into_collector(self) -> ListBack<T> {
        ListBack::new(self)
    }

    fn into_front_collector(self) -> ListFront<T> {
        ListFront::new(self)
    }
}
