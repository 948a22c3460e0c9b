//! Integer arithmetic routines.

pub mod digits;

pub use digits::{count_digit, count_digit_one};
