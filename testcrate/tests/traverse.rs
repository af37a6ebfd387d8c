use core::ops::ControlFlow;

use quad_seq::{for_zip, traverse, Collectable, Collector, List, Seq};
use testcrate::{std_grid, std_list};

#[test]
fn for_each() {
    let list = std_list();
    let mut seen = Vec::new();
    traverse::for_each(&list, list.cursor(..), |x| seen.push(*x));
    assert_eq!(seen, (0..10).collect::<Vec<u64>>());

    // ranges and reverse cursors feed the same loop
    seen.clear();
    traverse::for_each(&list, list.cursor_rev(3..6), |x| seen.push(*x));
    assert_eq!(seen, [5, 4, 3]);

    // an already done cursor runs the body zero times
    traverse::for_each(&list, list.cursor(10..), |_| unreachable!());
}

#[test]
fn try_for_each() {
    let v: Vec<u64> = vec![1, 3, 5, 8, 9, 11];

    // early exit returns the break value and stops visiting
    let mut visited = 0;
    let first_even = traverse::try_for_each(&v, v.cursor(..), |x| {
        visited += 1;
        if *x % 2 == 0 {
            ControlFlow::Break(*x)
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(first_even, Some(8));
    assert_eq!(visited, 4);

    // exhaustion without a break returns `None`
    let none = traverse::try_for_each(&v, v.cursor(..4), |x| {
        if *x > 100 {
            ControlFlow::Break(*x)
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(none, None);
}

#[test]
fn for_each_mut() {
    let mut list = std_list();
    let cur = list.cursor(2..5);
    traverse::for_each_mut(&mut list, cur, |x| *x += 100);
    let v: Vec<u64> = list.iter().copied().collect();
    assert_eq!(v, [0, 1, 102, 103, 104, 5, 6, 7, 8, 9]);
    List::_check_invariants(&list).unwrap();

    let mut grid = std_grid();
    let cur = grid.cursor_rev(..2);
    traverse::for_each_mut(&mut grid, cur, |x| *x = 0);
    assert_eq!(grid.flat()[..3], [0, 0, 102]);

    // early exit while mutating
    let mut v: Vec<u64> = (0..10).collect();
    let cur = v.cursor(..);
    let stopped_at = traverse::try_for_each_mut(&mut v, cur, |x| {
        if *x == 4 {
            ControlFlow::Break(*x)
        } else {
            *x = 0;
            ControlFlow::Continue(())
        }
    });
    assert_eq!(stopped_at, Some(4));
    assert_eq!(v, [0, 0, 0, 0, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn zip_unequal_lengths() {
    // the loop ends when either cursor does, no pre-trimming needed
    let short: Vec<u64> = vec![1, 2];
    let long = std_list();
    let mut pairs = Vec::new();
    traverse::for_each_zip(&short, short.cursor(..), &long, long.cursor(..), |a, b| {
        pairs.push((*a, *b))
    });
    assert_eq!(pairs, [(1, 0), (2, 1)]);

    // both empty and one empty
    let empty: Vec<u64> = Vec::new();
    traverse::for_each_zip(&empty, empty.cursor(..), &long, long.cursor(..), |_, _| {
        unreachable!()
    });
}

#[test]
fn zip_across_shapes() {
    // dot product of a list range against a reversed grid range
    let list = std_list();
    let grid = std_grid();
    let mut dot = 0;
    traverse::for_each_zip(
        &list,
        list.cursor(1..4),
        &grid,
        grid.cursor_rev(..),
        |a, b| dot += a * b,
    );
    assert_eq!(dot, 111 + (2 * 110) + (3 * 109));
}

#[test]
fn try_zip() {
    let a: Vec<u64> = vec![1, 2, 3, 4];
    let b: Vec<u64> = vec![1, 2, 9, 4];

    // first mismatch of two sequences
    let mismatch = traverse::try_for_each_zip(&a, a.cursor(..), &b, b.cursor(..), |x, y| {
        if x == y {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break((*x, *y))
        }
    });
    assert_eq!(mismatch, Some((3, 9)));

    let equal_prefix =
        traverse::try_for_each_zip(&a, a.cursor(..2), &b, b.cursor(..2), |x, y| {
            if x == y {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break((*x, *y))
            }
        });
    assert_eq!(equal_prefix, None);
}

#[test]
fn for_zip_macro() {
    let list = std_list();
    let grid = std_grid();
    let v: Vec<u64> = vec![1000, 2000, 3000, 4000];

    // three unlike shapes in lock step, ending at the shortest
    let mut sums = Vec::new();
    for_zip!(
        (a, s0) in (&list, list.cursor(..)),
        (b, s1) in (&grid, grid.cursor(..)),
        (c, s2) in (&v, v.cursor(..)),
        => {
            sums.push(a + b + c);
        }
    );
    assert_eq!(sums, [1100, 2102, 3104, 4106]);

    // `break` works in the body
    let mut count = 0;
    for_zip!(
        (a, s0) in (&list, list.cursor(..)),
        (b, s1) in (&list, list.cursor_rev(..)),
        => {
            if *a > *b {
                break
            }
            count += 1;
        }
    );
    assert_eq!(count, 5);

    // a single arm is the plain element loop
    let mut total = 0;
    for_zip!((x, s) in (&grid, grid.cursor(4..)), => {
        total += *x;
    });
    assert_eq!(total, (104..112).sum::<u64>());
}

#[test]
fn rebuild_through_zip() {
    // a zip loop feeding a collector, the read side never borrowing in a
    // way that blocks the write side
    let xs = std_list();
    let ys: Vec<u64> = (0..6).map(|i| i * 10).collect();
    let mut c = xs.empty_clone().into_collector();
    for_zip!(
        (x, s0) in (&xs, xs.cursor(..)),
        (y, s1) in (&ys, ys.cursor(..)),
        => {
            c.collect(x + y);
        }
    );
    let sums = c.finish();
    let v: Vec<u64> = sums.iter().copied().collect();
    assert_eq!(v, [0, 11, 22, 33, 44, 55]);
    List::_check_invariants(&sums).unwrap();
}
