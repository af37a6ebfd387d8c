use std::mem;

use quad_seq::{Collectable, Collector, Cursor, CursorIter, List, ListBack, Seq};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

macro_rules! next_inx {
    ($rng:ident, $len:expr) => {
        $rng.next_u32() as usize % $len
    };
}

#[test]
fn fuzz_list() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);

    // unique id for checking that the correct elements are returned
    let mut counter = 0u64;
    let mut new_t = || {
        counter += 1;
        counter
    };

    // the reference model, in traversal order
    let mut v: Vec<u64> = vec![];

    let mut list: List<u64> = List::new();
    let mut op_inx;
    let mut max_len = 0;

    for _ in 0..1_000_000 {
        assert_eq!(list.len(), v.len());
        assert_eq!(list.is_empty(), v.is_empty());
        assert_eq!(list.first().copied(), v.first().copied());
        if let Err(e) = List::_check_invariants(&list) {
            panic!("{e}");
        }
        let len = v.len();
        // for generating indexes that go out of bounds and inverted ranges
        let len2 = len + 2;
        op_inx = rng.next_u32() % 1000;
        match op_inx {
            0..=99 => {
                // push_front
                let t = new_t();
                v.insert(0, t);
                list.push_front(t);
            }
            100..=199 => {
                // push_back
                let t = new_t();
                v.push(t);
                list.push_back(t);
            }
            200..=269 => {
                // back collector batches, single and bulk
                let mut c = mem::take(&mut list).into_collector();
                for _ in 0..next_inx!(rng, 4) {
                    let t = new_t();
                    v.push(t);
                    c.collect(t);
                }
                let items: Vec<u64> = (0..next_inx!(rng, 4)).map(|_| new_t()).collect();
                v.extend(items.iter().copied());
                c.collect_many(items);
                list = c.finish();
            }
            270..=339 => {
                // front collector batch, each item lands before the previous
                let mut c = mem::take(&mut list).into_front_collector();
                for _ in 0..next_inx!(rng, 4) {
                    let t = new_t();
                    v.insert(0, t);
                    c.collect(t);
                }
                list = c.finish();
            }
            340..=399 => {
                // splicing another list onto the back
                let items: Vec<u64> = (0..next_inx!(rng, 4)).map(|_| new_t()).collect();
                let other: List<u64> = items.iter().copied().collect();
                v.extend(items);
                if (op_inx % 2) == 0 {
                    let mut c = ListBack::new(mem::take(&mut list));
                    c.append_list(other);
                    list = c.finish();
                } else {
                    list.append(other);
                }
            }
            400..=449 => {
                // splicing another list onto the front
                let items: Vec<u64> = (0..next_inx!(rng, 4)).map(|_| new_t()).collect();
                let other: List<u64> = items.iter().copied().collect();
                for (i, t) in items.iter().enumerate() {
                    v.insert(i, *t);
                }
                let mut c = mem::take(&mut list).into_front_collector();
                c.prepend_list(other);
                list = c.finish();
            }
            450..=549 => {
                // writing through a cursor
                if len != 0 {
                    let i = next_inx!(rng, len);
                    let t = new_t();
                    let cur = list.cursor(i..);
                    cur.set(&mut list, t);
                    v[i] = t;
                } else {
                    assert!(list.cursor(..).is_done(&list));
                }
            }
            550..=649 => {
                // range reads in both directions, including out of bounds
                // and inverted ranges which clamp to empty
                let i = next_inx!(rng, len2);
                let j = next_inx!(rng, len2);
                let hi = j.min(len);
                let lo = i.min(hi);
                let fwd: Vec<u64> = CursorIter::new(&list, list.cursor(i..j)).copied().collect();
                assert_eq!(fwd, &v[lo..hi]);
                let mut rev: Vec<u64> =
                    CursorIter::new(&list, list.cursor_rev(i..j)).copied().collect();
                rev.reverse();
                assert_eq!(rev, &v[lo..hi]);
            }
            650..=699 => {
                // remaining and advance_by agree with the model length
                let i = next_inx!(rng, len2);
                let mut cur = list.cursor(i..);
                assert_eq!(cur.remaining(&list), len.saturating_sub(i));
                let n = next_inx!(rng, len2);
                cur.advance_by(&list, n);
                assert_eq!(
                    cur.remaining(&list),
                    len.saturating_sub(i).saturating_sub(n)
                );
            }
            700..=749 => {
                // subranges taken from a whole-list cursor
                let i = next_inx!(rng, len2);
                let j = next_inx!(rng, len2);
                let hi = j.min(len);
                let lo = i.min(hi);
                let sub = list.cursor(..).subseq(&list, i, Some(j));
                let got: Vec<u64> = CursorIter::new(&list, sub).copied().collect();
                assert_eq!(got, &v[lo..hi]);
            }
            750..=799 => {
                // head, tail, and the raw node walk
                assert_eq!(
                    list.tail().map(|r| *list.get(r).unwrap()),
                    v.last().copied()
                );
                let mut at = list.head();
                for expected in &v {
                    let r = at.unwrap();
                    assert_eq!(list.get(r).unwrap(), expected);
                    at = list.next(r);
                }
                assert!(at.is_none());
            }
            800..=849 => {
                // round trip through owned iteration, and rebuilding from
                // the model compares equal
                list = mem::take(&mut list).into_iter().collect();
                assert_eq!(list, v.iter().copied().collect::<List<u64>>());
            }
            850..=899 => {
                // clones are equal, empty clones are empty
                let c = list.clone();
                assert_eq!(c, list);
                assert_eq!(c.len(), len);
                assert!(list.empty_clone().is_empty());
            }
            900..=979 => {
                // std `Extend` goes through the back collector
                let items: Vec<u64> = (0..next_inx!(rng, 4)).map(|_| new_t()).collect();
                v.extend(items.iter().copied());
                list.extend(items);
            }
            980..=999 => {
                // clear
                list.clear();
                v.clear();
            }
            _ => unreachable!(),
        }
        max_len = std::cmp::max(max_len, list.len());
    }
    // the exact maximum depends on the seed, this just catches the list
    // never actually growing
    assert!(max_len > 32);
    let fwd: Vec<u64> = list.iter().copied().collect();
    assert_eq!(fwd, v);
}
