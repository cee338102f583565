//! Result combinators and per-constituent error reporting.
//!
//! This module provides the `Result`-side entry point for combination and
//! centralized logging of composite errors with `tracing`.

use {
    anyhow::{Error, Result as AnyhowResult},
    tracing::{debug, error, warn},
};

use crate::error::append::{combine, iter, len};

/// Extension trait for folding follow-up results into a primary result.
pub trait ResultExt<T> {
    /// Combines this result with the outcome of a follow-up operation.
    ///
    /// Typically used for cleanup that must run whether or not the primary
    /// operation failed, without losing either failure.
    ///
    /// # Arguments
    ///
    /// * `other` - Result of the follow-up operation.
    ///
    /// # Returns
    ///
    /// The primary value if both succeeded, otherwise every error that
    /// occurred, primary first.
    ///
    /// # Errors
    ///
    /// Returns the single error, or a composite of both errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::{anyhow, Result};
    /// use multierr::ResultExt;
    ///
    /// fn do_some_magic() -> Result<u32> {
    ///     Err(anyhow!("magic not available"))
    /// }
    ///
    /// fn close() -> Result<()> {
    ///     Err(anyhow!("close: whoopsie"))
    /// }
    ///
    /// let err = do_some_magic().also(close()).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "2 errors occurred:\n(1) magic not available\n(2) close: whoopsie"
    /// );
    /// ```
    fn also<F>(self, other: Result<(), F>) -> AnyhowResult<T>
    where
        F: Into<Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    fn also<F>(self, other: Result<(), F>) -> AnyhowResult<T>
    where
        F: Into<Error>,
    {
        match (self, other) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(error)) => Err(error.into()),
            (Err(error), Ok(())) => Err(error.into()),
            (Err(primary), Err(secondary)) => Err(combine(primary.into(), secondary.into())),
        }
    }
}

/// Centralized error reporting and logging.
///
/// Each constituent of a composite is emitted as its own event carrying its
/// 1-based `index` and the `total`, so individual failures stay searchable
/// in structured logs.
pub struct ErrorReporter;

impl ErrorReporter {
    /// Reports every constituent at debug level.
    pub fn debug(error: &Error, context: &str) {
        Self::each(error, |index, total, constituent| {
            let message = format!("{constituent:#}");
            debug!(context = context, index, total, error = %message, "Reported error");
        });
    }

    /// Reports every constituent at warn level (recoverable issues).
    pub fn warn(error: &Error, context: &str) {
        Self::each(error, |index, total, constituent| {
            let message = format!("{constituent:#}");
            warn!(context = context, index, total, error = %message, "Reported error");
        });
    }

    /// Reports every constituent at error level (non-recoverable issues).
    pub fn error(error: &Error, context: &str) {
        Self::each(error, |index, total, constituent| {
            let message = format!("{constituent:#}");
            error!(context = context, index, total, error = %message, "Reported error");
        });
    }

    fn each<F>(error: &Error, mut emit: F)
    where
        F: FnMut(usize, usize, &Error),
    {
        let total = len(Some(error));
        for (i, constituent) in iter(Some(error)).enumerate() {
            emit(i + 1, total, constituent);
        }
    }
}
