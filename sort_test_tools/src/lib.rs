use std::fmt::Debug;

/// A sort under test. The battery in [`tests`] only ever goes through this trait.
pub trait Sort {
    type Error: Debug;

    fn name() -> String;

    fn sort(arr: &mut [i64]) -> Result<(), Self::Error>;

    fn sort_by<T, F>(arr: &mut [T], compare: F) -> Result<(), Self::Error>
    where
        T: Copy,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
