/// An accumulator that a sequence is grown through.
///
/// A `Collector` is the write-side counterpart of [Cursor](crate::Cursor):
/// it accepts elements one at a time and at the end hands back the finished
/// sequence. Collectors own the sequence they build into, so a sequence that
/// is cheap to push into directly (a `Vec`, a map) simply is its own
/// collector, while shapes that need bookkeeping to append efficiently (a
/// singly linked list caching its tail, an array building a reversed prefix)
/// get a dedicated struct.
///
/// ```
/// use quad_seq::{Collectable, Collector, List};
///
/// let mut c = List::new().into_collector();
/// c.collect(1);
/// c.collect_many([2, 3, 4]);
/// let list: List<u64> = c.finish();
/// assert_eq!(list.iter().copied().collect::<Vec<u64>>(), [1, 2, 3, 4]);
/// ```
pub trait Collector {
    /// The element type accepted by [Collector::collect]
    type Item;
    /// The sequence type returned by [Collector::finish]
    type Seq;

    /// Accepts one more element
    fn collect(&mut self, item: Self::Item);

    /// Accepts every element of `items` in order. The default is repeated
    /// [Collector::collect], implementors override this where a batch form
    /// is cheaper.
    fn collect_many<I: IntoIterator<Item = Self::Item>>(&mut self, items: I) {
        for item in items {
            self.collect(item)
        }
    }

    /// Consumes the collector and returns the finished sequence. After
    /// binding a sequence to a collector, this is the only way to get it
    /// back, which keeps stale handles to the half-built sequence from
    /// existing in the first place.
    fn finish(self) -> Self::Seq;
}

/// A sequence that knows how to produce collectors for itself.
///
/// `empty_clone` answers "a new sequence shaped like this one", which is what
/// generic transformation loops start from:
///
/// ```
/// use quad_seq::{Collectable, Collector, Cursor, Seq};
///
/// fn doubled<S: Seq<Item = u64> + Collectable<Item = u64>>(seq: &S) -> S {
///     let mut c = seq.empty_clone().into_collector();
///     let mut cur = seq.cursor(..);
///     while !cur.is_done(seq) {
///         c.collect(cur.get(seq) * 2);
///         cur.advance(seq);
///     }
///     c.finish()
/// }
///
/// assert_eq!(doubled(&vec![1, 2, 3]), [2, 4, 6]);
/// ```
pub trait Collectable: Sized {
    /// The element type the collectors accept
    type Item;
    /// The collector returned by [Collectable::into_collector]
    type Back: Collector<Item = Self::Item, Seq = Self>;
    /// The collector returned by [Collectable::into_front_collector]
    type Front: Collector<Item = Self::Item, Seq = Self>;

    /// Returns a new empty sequence of the same representation as `self`,
    /// independent of the number of elements `self` has
    fn empty_clone(&self) -> Self;

    /// Consumes `self` into a collector that appends after the existing
    /// elements
    fn into_collector(self) -> Self::Back;

    /// Consumes `self` into a collector where every collected element becomes
    /// the new first element. Collecting `a, b, c` therefore reads back as
    /// `c, b, a` followed by the existing elements. For unordered sequences
    /// such as maps this is the same as [Collectable::into_collector].
    fn into_front_collector(self) -> Self::Front;
}
