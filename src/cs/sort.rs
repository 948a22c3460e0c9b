//! Selection over unsorted slices.

pub mod randomized_quickselect;

pub use randomized_quickselect::{
    select_kth_largest, select_kth_largest_by, select_kth_largest_seeded,
    select_kth_largest_with_rng, select_kth_smallest, select_kth_smallest_with_rng,
};
