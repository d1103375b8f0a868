use std::cmp::Ordering;

sort_impl!("rust_quickpart_unstable");

pub fn sort<T: Ord>(data: &mut [T]) {
    quickpart::sort(data);
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    quickpart::sort_by(data, compare);
}
