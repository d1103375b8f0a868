//! Runs the shared property suite against every variant exposed by the testbed.

mod rust_quickpart {
    sort_test_tools::instantiate_sort_tests!(quicksort_comp::unstable::rust_quickpart::SortImpl);
}

mod rust_quickpart_buffered {
    sort_test_tools::instantiate_sort_tests!(
        quicksort_comp::unstable::rust_quickpart_buffered::SortImpl
    );
}

mod rust_quickpart_median3 {
    sort_test_tools::instantiate_sort_tests!(
        quicksort_comp::unstable::rust_quickpart_median3::SortImpl
    );
}

mod rust_quickpart_random {
    sort_test_tools::instantiate_sort_tests!(
        quicksort_comp::unstable::rust_quickpart_random::SortImpl
    );
}

mod rust_std {
    sort_test_tools::instantiate_sort_tests!(quicksort_comp::unstable::rust_std::SortImpl);
}
