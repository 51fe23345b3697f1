//! Find the min & max of a slice at the same time.
//!
//! Elements are taken 2 at a time. The 2 are compared with each other, then only the smaller is
//! compared to the current min, and only the larger to the current max. That's 3 comparisons for
//! every 2 elements, rather than 4 when doing a separate scan for the min & the max.
//!
//! When elements are equal, the earlier one is kept.
use itertools::Itertools;
use log::trace;
use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::pair::Pair;

/// Upper bound on the number of comparisons `min_max*` does for `n` items: ⌈3n/2⌉ - 2.
///
/// The bound is exact for `n >= 2`.
pub fn max_comparisons(n: usize) -> usize {
    if n < 2 { 0 } else { (3 * n).div_ceil(2) - 2 }
}

/// Order 2 values (smaller first) with one comparison. Equal values return `a` twice.
fn order_two<'a, T>(
    a: &'a T,
    b: &'a T,
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> (&'a T, &'a T) {
    match cmp(a, b) {
        Ordering::Less => (a, b),
        Ordering::Equal => (a, a),
        Ordering::Greater => (b, a),
    }
}

/// The (min, max) of `items` by their natural order.
pub fn min_max<T: Ord>(items: &[T]) -> Result<Pair<&T, &T>> {
    min_max_by(items, T::cmp)
}

/// The (min, max) of `items`, where `cmp` is the only ordering used.
///
/// Returns [`Error::EmptyInput`] for an empty slice. The results borrow from `items`.
pub fn min_max_by<T>(
    items: &[T],
    mut cmp: impl FnMut(&T, &T) -> Ordering,
) -> Result<Pair<&T, &T>> {
    // Odd length: start with the first element, & then pair up the rest.
    // Even length: start with the first pair ordered.
    let (mut min, mut max, rest) = if items.len() % 2 == 1 {
        (&items[0], &items[0], &items[1..])
    } else if let [a, b, rest @ ..] = items {
        let (lo, hi) = order_two(a, b, &mut cmp);
        (lo, hi, rest)
    } else {
        return Err(Error::EmptyInput);
    };

    for (a, b) in rest.iter().tuples() {
        let (lo, hi) = order_two(a, b, &mut cmp);
        if cmp(lo, min) == Ordering::Less {
            min = lo;
        }
        if cmp(hi, max) == Ordering::Greater {
            max = hi;
        }
    }

    trace!(
        "min_max of {} items used {} comparisons",
        items.len(),
        max_comparisons(items.len())
    );
    Ok(Pair::new(min, max))
}

/// The (min, max) of `items`, ordered by the key `f` returns.
pub fn min_max_by_key<T, K: Ord>(items: &[T], mut f: impl FnMut(&T) -> K) -> Result<Pair<&T, &T>> {
    min_max_by(items, |a, b| f(a).cmp(&f(b)))
}
