pub mod rust_quickpart;
pub mod rust_quickpart_buffered;
pub mod rust_quickpart_median3;
pub mod rust_quickpart_random;
pub mod rust_std;
