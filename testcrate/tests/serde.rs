#![cfg(feature = "serde_support")]

use quad_seq::{Collectable, Grid, List};
use serde::de::DeserializeOwned;
use serde_derive::{Deserialize, Serialize};
use testcrate::{std_grid, std_list, std_map};

// RON version for debug
/*
fn round_trip<T: Serialize + DeserializeOwned>(t: &T) -> T {
    let s = ron::to_string(t).unwrap();
    let res: T = ron::from_str(&s).unwrap();
    res
}
*/

fn round_trip<T: serde::Serialize + DeserializeOwned>(t: &T) -> T {
    let v = postcard::to_allocvec(t).unwrap();
    let res: T = postcard::from_bytes(&v).unwrap();
    res
}

// a compound of all the shapes, for checking that the derives compose
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Snapshot {
    tags: List<String>,
    cells: Grid<i32>,
}

#[test]
fn serde() {
    // the fixture list has scrambled storage, the wire form is traversal
    // order and the rebuilt list compares equal
    let a = std_list();
    let b = round_trip(&a);
    List::_check_invariants(&b).unwrap();
    assert_eq!(a, b);
    assert!(b.iter().copied().eq(0..10));

    let a = round_trip(&List::<u64>::new());
    assert!(a.is_empty());
    List::_check_invariants(&a).unwrap();

    let a = std_grid();
    let b = round_trip(&a);
    Grid::_check_invariants(&b).unwrap();
    assert_eq!(a, b);

    let a = round_trip(&Grid::new(&[], 7u64));
    assert_eq!(a[&[]], 7);
    Grid::_check_invariants(&a).unwrap();

    let a = std_map();
    let b = round_trip(&a);
    assert_eq!(a, b);

    let a = Snapshot {
        tags: ["x", "y"].iter().map(|s| s.to_string()).collect(),
        cells: Grid::from_fn(&[2, 2], |i| -(i as i32)),
    };
    let b = round_trip(&a);
    assert_eq!(a, b);
    assert_eq!(b.tags.empty_clone().len(), 0);
}

#[test]
fn grid_shape_mismatch() {
    // a grid whose data length disagrees with its shape product must be
    // rejected at deserialization
    let bad = postcard::to_allocvec(&(vec![2usize, 2], vec![1u64, 2, 3])).unwrap();
    assert!(postcard::from_bytes::<Grid<u64>>(&bad).is_err());

    let good = postcard::to_allocvec(&(vec![2usize, 2], vec![1u64, 2, 3, 4])).unwrap();
    let g: Grid<u64> = postcard::from_bytes(&good).unwrap();
    assert_eq!(g[&[1, 1]], 4);
    Grid::_check_invariants(&g).unwrap();
}

#[test]
fn grid_shape_overflow() {
    // a wire shape whose product overflows `usize` cannot match any data
    // length, the decoder must return an error rather than panic
    let bad = postcard::to_allocvec(&(vec![usize::MAX, 2], Vec::<u64>::new())).unwrap();
    assert!(postcard::from_bytes::<Grid<u64>>(&bad).is_err());

    let bad = postcard::to_allocvec(&(vec![usize::MAX, usize::MAX], vec![1u64, 2])).unwrap();
    assert!(postcard::from_bytes::<Grid<u64>>(&bad).is_err());
}
