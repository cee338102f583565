//! Sequential error accumulation.

use anyhow::{Error, Result as AnyhowResult};

use crate::error::append::{append, len};

/// Collects errors from a sequence of fallible steps.
///
/// Starts out empty and combines every reported error into a single value,
/// so running every step and then failing with all of their errors reads as
/// straight-line code.
///
/// # Examples
///
/// ```
/// use multierr::Accumulator;
///
/// let mut errors = Accumulator::new();
/// let port: Option<u16> = errors.check("80".parse::<u16>());
/// let timeout: Option<u64> = errors.check("soon".parse::<u64>());
///
/// assert_eq!(port, Some(80));
/// assert_eq!(timeout, None);
/// assert_eq!(errors.len(), 1);
/// assert!(errors.into_result().is_err());
/// ```
#[derive(Debug, Default)]
pub struct Accumulator {
    /// Everything recorded so far.
    error: Option<Error>,
}

impl Accumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error.
    pub fn push(&mut self, error: impl Into<Error>) {
        self.error = append(self.error.take(), Some(error.into()));
    }

    /// Records the error of a failed `result` and passes a success through.
    ///
    /// # Returns
    ///
    /// The success value, or `None` if `result` held an error.
    pub fn check<T, E>(&mut self, result: Result<T, E>) -> Option<T>
    where
        E: Into<Error>,
    {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(error);
                None
            }
        }
    }

    /// Returns the number of errors recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        len(self.error.as_ref())
    }

    /// Checks whether no error has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.error.is_none()
    }

    /// Consumes the accumulator, returning the combined error if any.
    #[must_use]
    pub fn into_error(self) -> Option<Error> {
        self.error
    }

    /// Consumes the accumulator, failing with the combined error if any.
    ///
    /// # Errors
    ///
    /// Returns the combined error when at least one error was recorded.
    pub fn into_result(self) -> AnyhowResult<()> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Extend<Error> for Accumulator {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, errors: I) {
        for error in errors {
            self.push(error);
        }
    }
}
