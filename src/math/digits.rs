//! Counting decimal digit occurrences over `1..=n`.
//!
//! Rather than walking every integer, each decimal place is handled once: for place
//! value `p` the number splits into `high` (digits above), `cur` (the digit at `p`) and
//! `low` (digits below), and the occurrences at that place follow from those three.

use log::trace;

use crate::cs::error::{Error, Result};

/// Returns how many times the decimal `digit` is written across `1, 2, ..., n`.
///
/// Leading zeros are never counted, so `digit = 0` only counts interior and trailing
/// zeros.
///
/// # Errors
/// `Error::InvalidInput` if `digit > 9`.
///
/// # Examples
/// ```
/// use kselect::math::digits::count_digit;
///
/// assert_eq!(count_digit(13, 1).unwrap(), 6); // 1, 10, 11 (twice), 12, 13
/// assert_eq!(count_digit(100, 0).unwrap(), 11);
/// ```
///
/// # Complexity
/// * Time: O(log10 n)
/// * Space: O(1)
pub fn count_digit(n: u64, digit: u8) -> Result<u128> {
    if digit > 9 {
        return Err(Error::invalid_input(format!(
            "digit must be in [0, 9], got {}",
            digit
        )));
    }

    let n = u128::from(n);
    let d = u128::from(digit);
    let mut count = 0u128;
    let mut place = 1u128;

    while place <= n {
        let high = n / (place * 10);
        let cur = (n / place) % 10;
        let low = n % place;

        let at_place = if d == 0 {
            // A zero here needs a nonzero digit somewhere above it.
            if high == 0 {
                0
            } else {
                let full = (high - 1) * place;
                full + if cur == 0 { low + 1 } else { place }
            }
        } else {
            let full = high * place;
            full + match cur.cmp(&d) {
                std::cmp::Ordering::Greater => place,
                std::cmp::Ordering::Equal => low + 1,
                std::cmp::Ordering::Less => 0,
            }
        };
        trace!("place {}: high {} cur {} low {} -> {}", place, high, cur, low, at_place);

        count += at_place;
        place *= 10;
    }

    Ok(count)
}

/// Returns how many times the digit `1` is written across `1, 2, ..., n`.
pub fn count_digit_one(n: u64) -> u128 {
    match count_digit(n, 1) {
        Ok(count) => count,
        Err(_) => unreachable!("1 is a valid decimal digit"),
    }
}
