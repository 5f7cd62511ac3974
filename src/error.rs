use thiserror::Error;

/// Scratch memory for a merge could not be obtained.
///
/// The sort that hit this aborts as a whole. With [`crate::scratch::Reusable`] the buffer is
/// reserved before any element moves, so the input is left as it was. With
/// [`crate::scratch::PerMerge`] the slice may have been reordered but still holds exactly the
/// original elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to allocate scratch buffer of {len} elements")]
pub struct AllocError {
    pub len: usize,
}

/// The external value handed to [`crate::wikisort`] is not a list of 64-bit integers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Expected a list")]
    NotAList,
    #[error("List must contain integers (element {index} is not an integer)")]
    NotAnInteger { index: usize },
    #[error("List must contain integers (element {index} does not fit into 64 bits)")]
    OutOfRange { index: usize },
    #[error("sorted buffer holds {got} elements, but the list has {expected}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Everything [`crate::wikisort`] can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Alloc(#[from] AllocError),
}
