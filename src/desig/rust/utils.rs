//! General purpose utility functions.

use pyo3::prelude::*;
use rayon::prelude::*;

/// Polymorphic support for a single value or a vector of values.
#[derive(Debug, FromPyObject, IntoPyObject)]
pub enum MaybeVec<T> {
    /// A single value of type T.
    Single(T),

    /// A vector of values of type T.
    Multiple(Vec<T>),
}

impl<T: Send> MaybeVec<T> {
    /// Apply a fallible function to every value, keeping the shape of the input.
    ///
    /// Lists are evaluated in parallel, the first error encountered is returned.
    pub fn par_try_map<U, F>(self, func: F) -> PyResult<MaybeVec<U>>
    where
        U: Send,
        F: Fn(T) -> PyResult<U> + Send + Sync,
    {
        match self {
            Self::Single(value) => Ok(MaybeVec::Single(func(value)?)),
            Self::Multiple(values) => Ok(MaybeVec::Multiple(
                values.into_par_iter().map(func).collect::<PyResult<Vec<_>>>()?,
            )),
        }
    }
}
