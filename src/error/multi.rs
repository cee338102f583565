//! The composite error type.
//!
//! A `MultiError` holds two or more constituent errors in insertion order.
//! It is never built directly by callers: the combination functions in
//! [`crate::error::append`] produce it only when more than one error has
//! actually been seen.

use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
    slice::Iter,
    vec::IntoIter,
};

use anyhow::Error;

use crate::{config::format::formatter, error::matching};

/// Aggregate of two or more errors.
///
/// Always holds at least two elements and never holds another `MultiError`
/// as a direct element.
#[derive(Debug)]
pub struct MultiError {
    /// Constituent errors in insertion order.
    errors: Vec<Error>,
}

impl MultiError {
    /// Creates a composite from two errors that are not composites.
    pub(crate) fn pair(first: Error, second: Error) -> Self {
        Self {
            errors: vec![first, second],
        }
    }

    /// Creates a composite from `first` followed by the elements of `rest`.
    pub(crate) fn prepend(first: Error, rest: MultiError) -> Self {
        let mut errors = Vec::with_capacity(rest.errors.len() + 1);
        errors.push(first);
        errors.extend(rest.errors);
        Self { errors }
    }

    /// Appends a single non-composite error.
    pub(crate) fn push(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Appends every element of another composite.
    pub(crate) fn extend(&mut self, other: MultiError) {
        self.errors.extend(other.errors);
    }

    /// Returns the number of constituent errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false` for a composite obtained through combination.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the constituent errors in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Error] {
        &self.errors
    }

    /// Iterates over the constituent errors in insertion order.
    pub fn iter(&self) -> Iter<'_, Error> {
        self.errors.iter()
    }

    /// Consumes the composite, returning its constituent errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Checks whether any constituent is, or wraps, an error equal to `target`.
    ///
    /// # Arguments
    ///
    /// * `target` - Sentinel value to compare against.
    ///
    /// # Returns
    ///
    /// `true` on the first constituent whose chain contains a match.
    pub fn is<E>(&self, target: &E) -> bool
    where
        E: StdError + PartialEq + Send + Sync + 'static,
    {
        self.errors.iter().any(|error| matching::is(error, target))
    }

    /// Finds the first error of type `E` inside any constituent.
    ///
    /// Constituents are searched in insertion order and the search stops at
    /// the first one that contains an `E`.
    pub fn find<E>(&self) -> Option<&E>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.errors.iter().find_map(|error| matching::find::<E>(error))
    }

    /// Checks whether any constituent contains an error of type `E`.
    pub fn contains<E>(&self) -> bool
    where
        E: StdError + Send + Sync + 'static,
    {
        self.find::<E>().is_some()
    }
}

impl Display for MultiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.errors.as_slice() {
            [] => panic!("MultiError does not support zero errors"),
            [only] => write!(f, "{only:#}"),
            errors => {
                let format = formatter();
                f.write_str(&format(errors))
            }
        }
    }
}

impl StdError for MultiError {}

impl IntoIterator for MultiError {
    type Item = Error;
    type IntoIter = IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a Error;
    type IntoIter = Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
