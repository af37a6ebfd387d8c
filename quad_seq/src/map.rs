//! Collectors for `HashMap`
//!
//! Maps have no element order, so the front/back distinction collapses: both
//! collectors are the map itself, ingesting `(key, value)` pairs by
//! `insert`. A pair whose key is already present replaces the old value,
//! which keeps "collect the same run twice" idempotent.
//!
//! The standard hasher state and any other `BuildHasher + Default`, such as
//! the `rustc-hash` one, work:
//!
//! ```
//! use quad_seq::{Collectable, Collector};
//! use rustc_hash::FxHashMap;
//!
//! let template: FxHashMap<&str, u64> = FxHashMap::default();
//! let mut c = template.empty_clone().into_collector();
//! c.collect(("a", 1));
//! c.collect_many([("b", 2), ("a", 3)]);
//! let m = c.finish();
//! assert_eq!(m.len(), 2);
//! assert_eq!(m["a"], 3);
//! ```

use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::{Collectable, Collector};

impl<K: Eq + Hash, V, S: BuildHasher> Collector for HashMap<K, V, S> {
    type Item = (K, V);
    type Seq = HashMap<K, V, S>;

    fn collect(&mut self, (k, v): (K, V)) {
        self.insert(k, v);
    }

    fn collect_many<I: IntoIterator<Item = (K, V)>>(&mut self, items: I) {
        // gets the `size_hint` reservation
        Extend::extend(self, items);
    }

    fn finish(self) -> HashMap<K, V, S> {
        self
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Default> Collectable for HashMap<K, V, S> {
    type Back = HashMap<K, V, S>;
    type Front = HashMap<K, V, S>;
    type Item = (K, V);

    fn empty_clone(&self) -> Self {
        HashMap::with_hasher(S::default())
    }

    fn into_collector(self) -> Self {
        self
    }

    fn into_front_collector(self) -> Self {
        self
    }
}
