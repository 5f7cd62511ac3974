//! Stable merge sort for 64-bit integers.
//!
//! The sort recursively halves the slice and merges the sorted halves back together, copying the
//! left run into a scratch buffer for each merge. Equal elements keep their relative order.
//! Scratch memory is requested fallibly: if it cannot be obtained the sort stops and reports
//! [`AllocError`] instead of handing back a half merged slice.
//!
//! [`wikisort`] wraps the sort for list values coming from outside the program, validating that
//! the value is a list of integers before touching it.
//!
//! ```
//! let mut v = [3, -1, 3, 0, -1];
//! wikisort::sort(&mut v).unwrap();
//! assert_eq!(v, [-1, -1, 0, 3, 3]);
//! ```

use std::cmp::Ordering;

use tracing::debug;

pub mod adapter;
pub mod error;
mod merge;
pub mod scratch;

pub use adapter::wikisort;
pub use error::{AllocError, Error, ValidationError};
pub use scratch::{PerMerge, Reusable, ScratchAlloc};

/// Sorts the slice in non-decreasing order.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
/// It allocates one scratch buffer of `v.len() / 2` elements before moving anything, so on
/// [`AllocError`] the slice is unchanged. Recursion depth is `ceil(log2(v.len()))`.
#[inline]
pub fn sort(v: &mut [i64]) -> Result<(), AllocError> {
    stable_sort(v, |a, b| a.cmp(b))
}

/// Sorts the slice with a comparator function, preserving the order of equal elements.
///
/// The comparator must define a total order, otherwise the resulting order is unspecified (but
/// still a permutation of the input).
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F) -> Result<(), AllocError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, compare)
}

/// Sorts the slice using `scratch` for the merge buffers.
///
/// Unlike [`sort`] nothing is reserved up front, so with an allocator like [`PerMerge`] a failed
/// allocation can leave the slice partially sorted. It is still a permutation of the input.
pub fn sort_with<T, S>(v: &mut [T], scratch: &mut S) -> Result<(), AllocError>
where
    T: Copy + Ord,
    S: ScratchAlloc<T> + ?Sized,
{
    sort_by_with(v, |a, b| a.cmp(b), scratch)
}

/// [`sort_by`] with caller supplied scratch, see [`sort_with`].
pub fn sort_by_with<T, F, S>(
    v: &mut [T],
    mut compare: F,
    scratch: &mut S,
) -> Result<(), AllocError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
    S: ScratchAlloc<T> + ?Sized,
{
    debug!(len = v.len(), "sorting with caller supplied scratch");
    merge::merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less, scratch)
}

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut compare: F) -> Result<(), AllocError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return Ok(());
    }

    debug!(len = v.len(), "sorting");
    let mut scratch = Reusable::with_capacity(v.len())?;
    merge::merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less, &mut scratch)
}
