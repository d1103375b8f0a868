use std::cmp::Ordering;

use quickpart::{PivotSelection, SortConfig};

sort_impl!("rust_quickpart_median3_unstable");

fn config() -> SortConfig {
    SortConfig {
        pivot: PivotSelection::MedianOfThree,
        ..SortConfig::default()
    }
}

pub fn sort<T: Ord>(data: &mut [T]) {
    quickpart::sort_with(data, config());
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    quickpart::sort_by_with(data, config(), compare);
}
