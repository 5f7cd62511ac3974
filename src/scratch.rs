//! Scratch memory used by the merge step.
//!
//! Every merge copies its left run into a buffer obtained from a [`ScratchAlloc`]. Allocation goes
//! through [`Vec::try_reserve_exact`], so running out of memory is reported as [`AllocError`]
//! instead of aborting the process.

use crate::error::AllocError;

pub trait ScratchAlloc<T> {
    /// Returns an empty buffer with room for at least `len` elements.
    fn acquire(&mut self, len: usize) -> Result<&mut Vec<T>, AllocError>;
}

/// Allocates a fresh buffer for every merge and frees the previous one.
#[derive(Debug)]
pub struct PerMerge<T> {
    buf: Vec<T>,
}

impl<T> PerMerge<T> {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }
}

impl<T> Default for PerMerge<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScratchAlloc<T> for PerMerge<T> {
    fn acquire(&mut self, len: usize) -> Result<&mut Vec<T>, AllocError> {
        // Drop the last merge's buffer before asking for the next one.
        self.buf = Vec::new();
        self.buf
            .try_reserve_exact(len)
            .map_err(|_| AllocError { len })?;

        Ok(&mut self.buf)
    }
}

/// One buffer shared by all merges of a sort.
///
/// A merge never copies more than `len / 2` elements, so [`Reusable::with_capacity`] sized for the
/// whole slice means no merge allocates again.
#[derive(Debug)]
pub struct Reusable<T> {
    buf: Vec<T>,
}

impl<T> Reusable<T> {
    /// Reserves enough scratch to sort a slice of `len` elements.
    pub fn with_capacity(len: usize) -> Result<Self, AllocError> {
        let scratch_len = len / 2;
        let mut buf = Vec::new();
        buf.try_reserve_exact(scratch_len)
            .map_err(|_| AllocError { len: scratch_len })?;

        Ok(Self { buf })
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}

impl<T> ScratchAlloc<T> for Reusable<T> {
    fn acquire(&mut self, len: usize) -> Result<&mut Vec<T>, AllocError> {
        self.buf.clear();
        // No-op as long as the initial reservation covers `len`.
        self.buf
            .try_reserve_exact(len)
            .map_err(|_| AllocError { len })?;

        Ok(&mut self.buf)
    }
}
