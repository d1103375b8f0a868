//! Quickselect on top of the shared partition step.

use crate::quicksort::partition_range;
use crate::{InvalidRange, PivotSelection, SortConfig};

/// Reorders the slice such that the element at `n` is at its final sorted position, without
/// fully sorting. Afterwards every element in `v[..n]` compares `<=` to `v[n]` and every element
/// in `v[(n + 1)..]` compares `>=`.
///
/// Average *O*(*n*). Pivots are chosen as median of three, and the narrowing loop only ever
/// descends into the side that still contains `n`.
///
/// Returns [`InvalidRange`] (with both range ends set to `n`) unless `n < v.len()`, which
/// includes every `n` on an empty slice.
pub fn select_nth<T>(v: &mut [T], n: usize) -> Result<(), InvalidRange>
where
    T: Ord,
{
    if n >= v.len() {
        return Err(InvalidRange {
            p: n,
            r: n,
            len: v.len(),
        });
    }

    let config = SortConfig {
        pivot: PivotSelection::MedianOfThree,
        ..SortConfig::default()
    };
    let mut is_less = |a: &T, b: &T| a.lt(b);

    let mut p = 0;
    let mut r = v.len() - 1;

    // `p <= n <= r` holds on every pass, so a range of a single element is the found rank.
    loop {
        if p == r {
            return Ok(());
        }

        let q = partition_range(v, p, r, config, &mut is_less);

        if q == n {
            return Ok(());
        } else if n < q {
            r = q - 1;
        } else {
            p = q + 1;
        }
    }
}
