//! Pivot selection strategies for the partition step.

use rand::Rng;

use crate::PivotSelection;

/// Returns the index in `[p, r]` whose element should serve as the pivot. The caller swaps the
/// choice to index `r` before partitioning.
///
/// The caller must guarantee `p < r < v.len()`.
pub(crate) fn choose_pivot<T, F>(
    v: &[T],
    p: usize,
    r: usize,
    selection: PivotSelection,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    match selection {
        PivotSelection::Last => r,
        PivotSelection::MedianOfThree => median3_idx(v, is_less, p, p + (r - p) / 2, r),
        PivotSelection::Random => rand::thread_rng().gen_range(p..=r),
    }
}

/// Returns the index pointing to the median of the 3 elements `v[a]`, `v[b]` and `v[c]`.
pub(crate) fn median3_idx<T, F>(
    v: &[T],
    is_less: &mut F,
    mut a: usize,
    b: usize,
    mut c: usize,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[c], &v[a]) {
        std::mem::swap(&mut a, &mut c);
    }
    if is_less(&v[c], &v[b]) {
        return c;
    }
    if is_less(&v[b], &v[a]) {
        return a;
    }
    b
}

#[test]
fn median3_picks_middle_value() {
    let mut is_less = |a: &i32, b: &i32| a.lt(b);

    for v in [[1, 2, 3], [1, 3, 2], [2, 1, 3], [2, 3, 1], [3, 1, 2], [3, 2, 1]] {
        let idx = median3_idx(&v, &mut is_less, 0, 1, 2);
        assert_eq!(v[idx], 2);
    }

    // Ties are allowed to resolve to any of the tied positions.
    let v = [7, 7, 1];
    let idx = median3_idx(&v, &mut is_less, 0, 1, 2);
    assert_eq!(v[idx], 7);
}
