//! # Randomized Quickselect
//!
//! Finds the k-th largest (or smallest) element of a slice in expected `O(n)` time
//! without sorting it. Each round partitions the current range around a uniformly
//! random pivot, which lands at its final sorted position; the search then narrows to
//! the side that still holds the requested rank.
//!
//! The slice is reordered in place. Afterwards it is partitioned around the answer
//! but otherwise unsorted; the multiset of values is unchanged.
//!
//! ```rust
//! use kselect::cs::sort::randomized_quickselect::select_kth_largest;
//!
//! let mut data = vec![1, 6, 7, 2, 8, 5];
//! assert_eq!(select_kth_largest(&mut data, 2).unwrap(), 7);
//! ```
//!
//! Pass your own generator to make pivot choice reproducible:
//!
//! ```rust
//! use kselect::cs::sort::randomized_quickselect::select_kth_largest_with_rng;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let mut data = vec![3, 3, 3];
//! assert_eq!(select_kth_largest_with_rng(&mut data, 2, &mut rng).unwrap(), 3);
//! ```

use std::cmp::Ordering;

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cs::error::{Error, Result};

/// Returns the k-th largest element of `arr` (`k = 1` is the maximum).
///
/// Pivots are drawn from the thread-local generator.
///
/// # Errors
/// `Error::InvalidInput` if `arr` is empty or `k` is outside `[1, arr.len()]`.
///
/// # Complexity
/// * Time: expected O(n), worst case O(n^2)
/// * Space: O(1)
pub fn select_kth_largest<T: Ord + Clone>(arr: &mut [T], k: usize) -> Result<T> {
    select_kth_largest_with_rng(arr, k, &mut rand::thread_rng())
}

/// Same as [`select_kth_largest`], with pivots drawn from a ChaCha generator seeded
/// with `seed`. Equal inputs and seeds leave `arr` in the same arrangement.
pub fn select_kth_largest_seeded<T: Ord + Clone>(
    arr: &mut [T],
    k: usize,
    seed: u64,
) -> Result<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    select_kth_largest_with_rng(arr, k, &mut rng)
}

/// Same as [`select_kth_largest`], with pivots drawn from `rng`.
pub fn select_kth_largest_with_rng<T, R>(arr: &mut [T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng,
{
    select_kth_largest_by(arr, k, rng, |a, b| a.cmp(b))
}

/// Returns the k-th largest element of `arr` under the ordering `compare`.
///
/// `compare` must be a total order; "largest" means greatest under it.
pub fn select_kth_largest_by<T, R, F>(
    arr: &mut [T],
    k: usize,
    rng: &mut R,
    mut compare: F,
) -> Result<T>
where
    T: Clone,
    R: Rng,
    F: FnMut(&T, &T) -> Ordering,
{
    validate_rank(arr.len(), k)?;
    let idx = select_rank(arr, k, rng, &mut compare);
    Ok(arr[idx].clone())
}

/// Returns the k-th smallest element of `arr` (`k = 1` is the minimum).
///
/// # Errors
/// `Error::InvalidInput` if `arr` is empty or `k` is outside `[1, arr.len()]`.
pub fn select_kth_smallest<T: Ord + Clone>(arr: &mut [T], k: usize) -> Result<T> {
    select_kth_smallest_with_rng(arr, k, &mut rand::thread_rng())
}

/// Same as [`select_kth_smallest`], with pivots drawn from `rng`.
pub fn select_kth_smallest_with_rng<T, R>(arr: &mut [T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng,
{
    validate_rank(arr.len(), k)?;
    // k-th smallest of n is the (n - k + 1)-th largest
    let rank = arr.len() - k + 1;
    let idx = select_rank(arr, rank, rng, &mut |a: &T, b: &T| a.cmp(b));
    Ok(arr[idx].clone())
}

fn validate_rank(len: usize, k: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::invalid_input("cannot select from an empty sequence"));
    }
    if k == 0 || k > len {
        return Err(Error::invalid_input(format!(
            "k = {} is out of range [1, {}]",
            k, len
        )));
    }
    Ok(())
}

/// Narrows `[lo, hi]` until a partition lands on descending rank `k`, and returns
/// that index. Requires `1 <= k <= arr.len()`.
fn select_rank<T, R, F>(arr: &mut [T], k: usize, rng: &mut R, compare: &mut F) -> usize
where
    R: Rng,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = arr.len();
    let (mut lo, mut hi) = (0, len - 1);

    // Every round fixes one pivot and shrinks the range, so len rounds always suffice.
    for round in 1..=len {
        let idx = partition(arr, lo, hi, rng, compare);
        let rank = len - idx;
        trace!(
            "round {}: range [{}, {}] pivot settled at {} (rank {})",
            round, lo, hi, idx, rank
        );

        match k.cmp(&rank) {
            Ordering::Equal => {
                debug!(
                    "rank {} of {} found at index {} after {} rounds",
                    k, len, idx, round
                );
                return idx;
            }
            Ordering::Less => lo = idx + 1,
            Ordering::Greater => hi = idx - 1,
        }
    }

    unreachable!("rank {} of {} not settled within {} partition rounds", k, len, len)
}

/// Partitions `arr[lo..=hi]` around a random pivot and returns the pivot's final index.
///
/// Afterwards everything in `[lo, idx)` compares less than `arr[idx]` and everything
/// in `(idx, hi]` compares greater or equal.
pub(crate) fn partition<T, R, F>(
    arr: &mut [T],
    lo: usize,
    hi: usize,
    rng: &mut R,
    compare: &mut F,
) -> usize
where
    R: Rng,
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(lo <= hi && hi < arr.len());

    let pivot_index = rng.gen_range(lo..=hi);
    arr.swap(pivot_index, hi);

    // The pivot stays parked at hi for the whole scan.
    let mut idx = lo;
    for i in lo..hi {
        if compare(&arr[i], &arr[hi]) == Ordering::Less {
            arr.swap(idx, i);
            idx += 1;
        }
    }
    arr.swap(idx, hi);
    idx
}
