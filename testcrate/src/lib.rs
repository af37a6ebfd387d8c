//! Standard fixtures shared by the integration tests

use quad_seq::{Collectable, Collector, Grid, List};
use rustc_hash::FxHashMap;

/// Returns a list with traversal order `0..10`, constructed through front
/// pushes, a back collector, and a splice so that the backing storage order
/// is thoroughly different from the traversal order
pub fn std_list() -> List<u64> {
    let mut list = List::with_capacity(10);
    for i in (3..6).rev() {
        list.push_front(i);
    }
    let mut c = list.into_collector();
    c.collect_many(6..8);
    c.append_list((8..10).collect());
    let list = c.finish();
    let mut c = list.into_front_collector();
    for i in (0..3).rev() {
        c.collect(i);
    }
    c.finish()
}

/// Returns a rank 2 grid of shape `[3, 4]` with element values
/// `100 + flat index`
pub fn std_grid() -> Grid<u64> {
    Grid::from_fn(&[3, 4], |i| 100 + (i as u64))
}

/// Returns a map of `i -> i * i` for `i` in `0..10`, built through its
/// collector
pub fn std_map() -> FxHashMap<u64, u64> {
    let m: FxHashMap<u64, u64> = FxHashMap::default();
    let mut c = m.into_collector();
    c.collect_many((0..10).map(|i| (i, i * i)));
    c.finish()
}
