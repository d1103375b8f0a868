//! Work-list driven quicksort and the two partition schemes.

use std::mem::{ManuallyDrop, MaybeUninit};
use std::ptr;

use crate::{PartitionScheme, SortConfig};

/// Sorts `v[p..=r]` in place.
///
/// The caller must guarantee `p <= r < v.len()`. Instead of recursing, pending ranges are kept
/// in an explicit list. The range that comes out of a split second is always the smaller one, so
/// the list never holds more than `O(log(n))` entries, no matter how unbalanced the pivots are.
pub(crate) fn quicksort<T, F>(v: &mut [T], p: usize, r: usize, config: SortConfig, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut pending: Vec<(usize, usize)> =
        Vec::with_capacity(((r - p + 1) | 1).ilog2() as usize + 1);
    pending.push((p, r));

    while let Some((lo, hi)) = pending.pop() {
        let q = partition_range(v, lo, hi, config, is_less);

        // `[lo, q - 1]` and `[q + 1, hi]`. A side with fewer than two elements is already
        // sorted and gets dropped. The larger side goes in first so the smaller side is popped
        // and split next.
        let left_len = q - lo;
        let right_len = hi - q;

        if left_len >= right_len {
            if left_len > 1 {
                pending.push((lo, q - 1));
            }
            if right_len > 1 {
                pending.push((q + 1, hi));
            }
        } else {
            if right_len > 1 {
                pending.push((q + 1, hi));
            }
            if left_len > 1 {
                pending.push((lo, q - 1));
            }
        }
    }
}

/// Partitions the closed range `v[p..=r]` and returns the pivot's final index.
///
/// The caller must guarantee `p <= r < v.len()`. The partition contract takes its pivot value
/// from index `r`, so non-default selection strategies first swap their choice there.
pub(crate) fn partition_range<T, F>(
    v: &mut [T],
    p: usize,
    r: usize,
    config: SortConfig,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if p == r {
        // A single element range is trivially partitioned.
        return r;
    }

    let pivot_pos = crate::pivot::choose_pivot(v, p, r, config.pivot, is_less);
    v.swap(pivot_pos, r);

    match config.scheme {
        PartitionScheme::InPlace => partition_in_place(v, p, r, is_less),
        PartitionScheme::Buffered => partition_buffered(v, p, r, is_less),
    }
}

/// Single scan swap based partition of `v[p..=r]` with the pivot value at index `r`. Elements
/// that compare `<=` to the pivot are moved to the front of the range, then the pivot is placed
/// between the two blocks. Returns the pivot's final index.
///
/// If `is_less` does not implement a total order the resulting order and return value are
/// unspecified. All original elements will remain in `v` and any possible modifications via
/// interior mutability will be observable. Same is true if `is_less` panics.
pub(crate) fn partition_in_place<T, F>(v: &mut [T], p: usize, r: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // The pivot is compared in place at `v[r]`, never through a detached copy. A detached copy
    // would hide interior mutability updates done by `is_less`, which for a type like
    // `Mutex<Option<Box<str>>>` can end in a double free.
    let mut store = p;

    for i in p..r {
        // `v[i] <= pivot`, ties go to the small block.
        if !is_less(&v[r], &v[i]) {
            v.swap(store, i);
            store += 1;
        }
    }

    // Place the pivot between the two blocks.
    v.swap(store, r);

    store
}

/// Partition of `v[p..=r]` with the pivot value at index `r` that keeps the encounter order of
/// both blocks, at the cost of a scratch buffer of the range's length. The scratch is filled
/// from both ends, the small block growing from the front and the large block from the back,
/// then copied back around the pivot in one pass. Returns the pivot's final index.
///
/// Same total order, element retention and interior mutability guarantees as
/// [`partition_in_place`].
pub(crate) fn partition_buffered<T, F>(v: &mut [T], p: usize, r: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let scan_len = r - p;

    let mut scratch: Vec<MaybeUninit<T>> = Vec::with_capacity(scan_len);

    // SAFETY: `scratch` is allocated for `scan_len` elements and its length stays zero, so the
    // bitwise copies written into it are never dropped there. Nothing in `v` is overwritten
    // until the scan has finished, which means a panicking `is_less` leaves `v` exactly as it
    // was. The pivot at `r` is read only after the last comparison, so interior mutability
    // updates made through `is_less` are all observable in the written back values.
    unsafe {
        let arr_ptr = v.as_mut_ptr();
        let scratch_ptr = scratch.as_mut_ptr() as *mut T;

        let mut small_count = 0;
        let mut large_out_ptr = scratch_ptr.add(scan_len);

        for i in 0..scan_len {
            let elem_ptr = arr_ptr.add(p + i);
            large_out_ptr = large_out_ptr.sub(1);

            // `v[p + i] <= pivot`, ties go to the small block.
            let is_small = !is_less(&*arr_ptr.add(r), &*elem_ptr);

            let dst_ptr = if is_small {
                scratch_ptr.add(small_count)
            } else {
                large_out_ptr.add(small_count)
            };
            ptr::copy_nonoverlapping(elem_ptr, dst_ptr, 1);

            small_count += is_small as usize;
        }

        // Lift the pivot out before writing back, its slot at `r` doubles as the last large
        // block slot.
        let pivot = ManuallyDrop::new(ptr::read(arr_ptr.add(r)));

        ptr::copy_nonoverlapping(scratch_ptr, arr_ptr.add(p), small_count);
        ptr::copy_nonoverlapping(&*pivot as *const T, arr_ptr.add(p + small_count), 1);

        // The large block was filled back to front, reading it in reverse restores the
        // encounter order.
        let rev_ptr = scratch_ptr.add(scan_len - 1);
        for i in 0..(scan_len - small_count) {
            ptr::copy_nonoverlapping(rev_ptr.sub(i), arr_ptr.add(p + small_count + 1 + i), 1);
        }

        p + small_count
    }
}
