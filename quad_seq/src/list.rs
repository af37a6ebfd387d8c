//! A singly linked list over plain `Vec` storage

use core::{fmt, num::NonZeroUsize};

/// A reference to a node in a [List]. Stored 1-based so that
/// `Option<NodeRef>` is niche optimized to one `usize`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeRef(NonZeroUsize);

impl NodeRef {
    pub(crate) fn from_index(inx: usize) -> Self {
        // `inx` is a `Vec` index and cannot be `usize::MAX`
        NodeRef(NonZeroUsize::new(inx.wrapping_add(1)).unwrap())
    }

    pub(crate) fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeRef[{}]", self.index())
    }
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) t: T,
    pub(crate) next: Option<NodeRef>,
}

/// A singly linked list with all nodes owned by one backing `Vec`.
///
/// Node order in the backing storage is unrelated to traversal order, the
/// chain structure lives entirely in the `next` references. This keeps the
/// list a single allocation and keeps [NodeRef]s plain indexes, at the cost
/// that removal of single nodes is not supported: a `List` only grows (from
/// either end, or by [List::append]) until it is [List::clear]ed or rebuilt
/// through a collector.
///
/// ```
/// use quad_seq::List;
///
/// let mut list = List::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(0);
/// assert_eq!(list.iter().copied().collect::<Vec<u64>>(), [0, 1, 2]);
/// ```
pub struct List<T> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) head: Option<NodeRef>,
}

impl<T> List<T> {
    /// Creates a new empty `List`
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// [List::new] but with the initial capacity set to at least `capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        let mut res = Self::new();
        res.reserve(capacity);
        res
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the capacity of the backing storage
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves capacity for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional)
    }

    /// Returns the first node of the list, or `None` if it is empty
    pub fn head(&self) -> Option<NodeRef> {
        self.head
    }

    /// Returns the last node of the list, or `None` if it is empty. Costs a
    /// walk of the whole list, [ListBack](crate::ListBack) caches this.
    pub fn tail(&self) -> Option<NodeRef> {
        let mut tail = None;
        let mut at = self.head;
        while let Some(r) = at {
            tail = Some(r);
            at = self.next(r);
        }
        tail
    }

    /// Returns the node after `r`, or `None` if `r` is the last node or is
    /// not a node of this list
    pub fn next(&self, r: NodeRef) -> Option<NodeRef> {
        self.nodes.get(r.index()).and_then(|node| node.next)
    }

    /// Returns a reference to the element of node `r`, or `None` if `r` is
    /// not a node of this list
    pub fn get(&self, r: NodeRef) -> Option<&T> {
        self.nodes.get(r.index()).map(|node| &node.t)
    }

    /// Returns a mutable reference to the element of node `r`, or `None` if
    /// `r` is not a node of this list
    pub fn get_mut(&mut self, r: NodeRef) -> Option<&mut T> {
        self.nodes.get_mut(r.index()).map(|node| &mut node.t)
    }

    /// Returns a reference to the first element, or `None` if the list is
    /// empty
    pub fn first(&self) -> Option<&T> {
        self.head.and_then(|r| self.get(r))
    }

    /// Returns a mutable reference to the first element, or `None` if the
    /// list is empty
    pub fn first_mut(&mut self) -> Option<&mut T> {
        match self.head {
            Some(r) => self.get_mut(r),
            None => None,
        }
    }

    /// Inserts `t` as the new first element in O(1) and returns its node
    pub fn push_front(&mut self, t: T) -> NodeRef {
        let r = NodeRef::from_index(self.nodes.len());
        self.nodes.push(Node {
            t,
            next: self.head,
        });
        self.head = Some(r);
        r
    }

    /// Inserts `t` as the new last element and returns its node. Costs a
    /// walk to the current tail, use a [ListBack](crate::ListBack) collector
    /// for repeated appending.
    pub fn push_back(&mut self, t: T) -> NodeRef {
        let tail = self.tail();
        self.link_back(tail, t)
    }

    /// Inserts `t` after `tail` in O(1). `tail` must be the current tail of
    /// `self` (`None` iff `self` is empty), anything else corrupts the chain.
    pub(crate) fn link_back(&mut self, tail: Option<NodeRef>, t: T) -> NodeRef {
        let r = NodeRef::from_index(self.nodes.len());
        self.nodes.push(Node { t, next: None });
        match tail {
            Some(prev) => self.nodes[prev.index()].next = Some(r),
            None => {
                debug_assert!(self.head.is_none());
                self.head = Some(r);
            }
        }
        r
    }

    /// Moves all elements of `other` to the end of `self` in
    /// O(len(`self`) + len(`other`)). [ListBack::append_list](crate::ListBack::append_list)
    /// avoids the len(`self`) part.
    pub fn append(&mut self, other: List<T>) {
        let tail = self.tail();
        self.append_after(tail, other);
    }

    /// Splices `other` after `tail`, which must be the current tail of
    /// `self`. Node references of `other` are rebased into `self`'s storage
    /// in one O(len(`other`)) pass. Returns the rebased tail of `other`, or
    /// `None` if `other` was empty.
    pub(crate) fn append_after(&mut self, tail: Option<NodeRef>, other: List<T>) -> Option<NodeRef> {
        let offset = self.nodes.len();
        let rebase = |r: NodeRef| NodeRef::from_index(r.index() + offset);
        let other_head = other.head.map(rebase);
        let mut other_tail = None;
        for node in other.nodes {
            let next = node.next.map(rebase);
            if next.is_none() {
                other_tail = Some(NodeRef::from_index(self.nodes.len()));
            }
            self.nodes.push(Node { t: node.t, next });
        }
        if other_head.is_some() {
            match tail {
                Some(prev) => self.nodes[prev.index()].next = other_head,
                None => {
                    debug_assert!(self.head.is_none());
                    self.head = other_head;
                }
            }
        }
        other_tail
    }

    /// Drops all elements, keeping the capacity of the backing storage
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }

    /// Used by tests and doctests
    #[doc(hidden)]
    pub fn _check_invariants(this: &Self) -> Result<(), &'static str> {
        let mut walked = 0;
        let mut at = this.head;
        while let Some(r) = at {
            if r.index() >= this.nodes.len() {
                return Err("dangling next reference")
            }
            walked += 1;
            if walked > this.nodes.len() {
                return Err("cycle in next references")
            }
            at = this.nodes[r.index()].next;
        }
        if walked != this.nodes.len() {
            return Err("node not reachable from the head")
        }
        Ok(())
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            head: self.head,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.len() == other.len()) && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}
