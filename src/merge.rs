//! Top-down merge sort with a single auxiliary run buffer.

use tracing::warn;

use crate::error::AllocError;
use crate::scratch::ScratchAlloc;

/// Sorts `v` by recursively sorting both halves and merging them.
///
/// The split point is `len / 2`, the floor midpoint, so recursion depth is `ceil(log2(len))` and
/// can never exceed the pointer width. The first failed scratch allocation aborts the whole sort.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn merge_sort<T, F, S>(
    v: &mut [T],
    is_less: &mut F,
    scratch: &mut S,
) -> Result<(), AllocError>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    S: ScratchAlloc<T> + ?Sized,
{
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return Ok(());
    }

    let mid = len / 2;
    {
        let (left, right) = v.split_at_mut(mid);
        merge_sort(left, is_less, scratch)?;
        merge_sort(right, is_less, scratch)?;
    }

    merge(v, mid, is_less, scratch)
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` and stores the result into `v[..]`.
///
/// The left run is copied into scratch, then merged back front to back. On ties the left element
/// is written first, which keeps the sort stable. Once the left run is drained the rest of the
/// right run is already where it belongs.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge<T, F, S>(
    v: &mut [T],
    mid: usize,
    is_less: &mut F,
    scratch: &mut S,
) -> Result<(), AllocError>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    S: ScratchAlloc<T> + ?Sized,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    if !is_less(&v[mid], &v[mid - 1]) {
        // The runs are already in order.
        return Ok(());
    }

    let left = scratch.acquire(mid).map_err(|err| {
        warn!(len, mid, "scratch allocation failed, aborting sort");
        err
    })?;
    left.extend_from_slice(&v[..mid]);

    let mut left_idx = 0;
    let mut right_idx = mid;
    let mut out = 0;

    while left_idx < left.len() && right_idx < len {
        if is_less(&v[right_idx], &left[left_idx]) {
            v[out] = v[right_idx];
            right_idx += 1;
        } else {
            v[out] = left[left_idx];
            left_idx += 1;
        }
        out += 1;
    }

    let rest = &left[left_idx..];
    v[out..out + rest.len()].copy_from_slice(rest);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scratch::{PerMerge, Reusable};

    /// Hands out `successes` buffers, then fails every request.
    struct FailAfter<T> {
        successes: usize,
        requests: usize,
        inner: PerMerge<T>,
    }

    impl<T> FailAfter<T> {
        fn new(successes: usize) -> Self {
            Self {
                successes,
                requests: 0,
                inner: PerMerge::new(),
            }
        }
    }

    impl<T> ScratchAlloc<T> for FailAfter<T> {
        fn acquire(&mut self, len: usize) -> Result<&mut Vec<T>, AllocError> {
            self.requests += 1;
            if self.requests > self.successes {
                return Err(AllocError { len });
            }

            self.inner.acquire(len)
        }
    }

    fn sort_i64(v: &mut [i64], scratch: &mut impl ScratchAlloc<i64>) -> Result<(), AllocError> {
        merge_sort(v, &mut |a, b| a < b, scratch)
    }

    fn is_sorted(v: &[i64]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn merge_takes_left_on_ties() {
        let mut v = [(1, 'a'), (3, 'b'), (3, 'c'), (1, 'd'), (3, 'e')];
        let mut scratch = PerMerge::new();

        let mut is_less = |a: &(i32, char), b: &(i32, char)| a.0 < b.0;
        merge(&mut v, 3, &mut is_less, &mut scratch).unwrap();

        assert_eq!(v, [(1, 'a'), (1, 'd'), (3, 'b'), (3, 'c'), (3, 'e')]);
    }

    #[test]
    fn merge_drains_left_remainder() {
        let mut v = [5, 6, 7, 1, 2];
        let mut scratch = PerMerge::new();

        merge(&mut v, 3, &mut |a: &i64, b: &i64| a < b, &mut scratch).unwrap();

        assert_eq!(v, [1, 2, 5, 6, 7]);
    }

    #[test]
    fn merge_leaves_right_remainder_in_place() {
        let mut v = [2, 4, 1, 8, 9];
        let mut scratch = PerMerge::new();

        merge(&mut v, 2, &mut |a: &i64, b: &i64| a < b, &mut scratch).unwrap();

        assert_eq!(v, [1, 2, 4, 8, 9]);
    }

    #[test]
    fn ordered_runs_need_no_scratch() {
        let mut v: Vec<i64> = (0..64).collect();
        let mut scratch = FailAfter::new(0);

        sort_i64(&mut v, &mut scratch).unwrap();

        assert_eq!(v, (0..64).collect::<Vec<_>>());
        assert_eq!(scratch.requests, 0);
    }

    #[test]
    fn reusable_scratch_sorts() {
        let mut v = vec![3, -1, 3, 0, -1];
        let mut scratch = Reusable::with_capacity(v.len()).unwrap();

        sort_i64(&mut v, &mut scratch).unwrap();

        assert_eq!(v, [-1, -1, 0, 3, 3]);
    }

    #[test]
    fn first_merge_failure_aborts() {
        let mut v: Vec<i64> = (0..16).rev().collect();
        let mut scratch = FailAfter::new(0);

        assert_eq!(sort_i64(&mut v, &mut scratch), Err(AllocError { len: 1 }));
        assert_eq!(scratch.requests, 1);
        assert_eq!(v, (0..16).rev().collect::<Vec<_>>());
    }

    #[test]
    fn failure_propagates_from_every_depth() {
        // Descending input of 16 elements needs all 15 merges.
        for successes in 0..15 {
            let mut v: Vec<i64> = (0..16).rev().collect();
            let mut scratch = FailAfter::new(successes);

            let result = sort_i64(&mut v, &mut scratch);

            assert!(result.is_err(), "successes: {successes}");
            // Nothing is attempted after the failure.
            assert_eq!(scratch.requests, successes + 1);

            // Aborted, but still a permutation of the input.
            let mut check = v.clone();
            check.sort();
            assert_eq!(check, (0..16).collect::<Vec<_>>());
        }

        let mut v: Vec<i64> = (0..16).rev().collect();
        let mut scratch = FailAfter::new(14);
        assert_eq!(sort_i64(&mut v, &mut scratch), Err(AllocError { len: 8 }));
        assert!(!is_sorted(&v));

        let mut v: Vec<i64> = (0..16).rev().collect();
        let mut scratch = FailAfter::new(15);
        sort_i64(&mut v, &mut scratch).unwrap();
        assert!(is_sorted(&v));
    }
}
