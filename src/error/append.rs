//! Combination and traversal of possibly-composite errors.
//!
//! "No error" is `None`. Combining with `None` hands back the other operand
//! untouched, so a `MultiError` only appears once two real errors have been
//! seen:
//!
//! ```text
//! append(None, None)       == None
//! append(None, Some(a))    == Some(a)
//! append(Some(a), None)    == Some(a)
//! append(Some(a), Some(b)) == Some([a, b])
//! ```
//!
//! Operands are taken by value. When the left operand is already a
//! composite its storage is grown in place.

use std::{error::Error as StdError, ops::ControlFlow, slice};

use anyhow::Error;

use crate::error::multi::MultiError;

/// Joins two optional errors into one.
///
/// # Arguments
///
/// * `dest` - Error accumulated so far, if any.
/// * `error` - Newly observed error, if any.
///
/// # Returns
///
/// `None` if both are absent, the present one if only one is, and a
/// composite holding the flattened elements of both otherwise.
///
/// # Examples
///
/// ```
/// use anyhow::anyhow;
/// use multierr::append;
///
/// let mut err = None;
/// err = append(err, Some(anyhow!("oops")));
/// err = append(err, None);
/// err = append(err, Some(anyhow!("whoops")));
///
/// assert_eq!(
///     err.unwrap().to_string(),
///     "2 errors occurred:\n(1) oops\n(2) whoops"
/// );
/// ```
#[must_use]
pub fn append(dest: Option<Error>, error: Option<Error>) -> Option<Error> {
    match (dest, error) {
        (dest, None) => dest,
        (None, error) => error,
        (Some(dest), Some(error)) => Some(combine(dest, error)),
    }
}

/// Joins two present errors into a composite.
///
/// Composite operands are flattened, so the result never holds a
/// `MultiError` as a direct element.
///
/// The composite is boxed into a fresh `anyhow::Error` on every call, so the
/// backtrace attached to the returned error (when `RUST_BACKTRACE` is set)
/// is captured here, and the wrapper of a composite operand is discarded
/// along with its backtrace. Each constituent is moved as-is and keeps its
/// own backtrace.
#[must_use]
pub fn combine(dest: Error, error: Error) -> Error {
    let combined = match (into_multi(dest), into_multi(error)) {
        (Ok(mut dest), Ok(other)) => {
            dest.extend(other);
            dest
        }
        (Ok(mut dest), Err(error)) => {
            dest.push(error);
            dest
        }
        (Err(dest), Ok(other)) => MultiError::prepend(dest, other),
        (Err(dest), Err(error)) => MultiError::pair(dest, error),
    };
    Error::new(combined)
}

/// Folds every error produced by `errors` into one, left to right.
///
/// # Returns
///
/// `None` for an empty iterator.
pub fn append_all<I>(errors: I) -> Option<Error>
where
    I: IntoIterator<Item = Error>,
{
    errors
        .into_iter()
        .fold(None, |dest, error| append(dest, Some(error)))
}

/// Calls `visit` with each constituent of `error`.
///
/// Absent errors produce no calls and non-composite errors produce exactly
/// one.
pub fn for_each<F>(error: Option<&Error>, visit: F)
where
    F: FnMut(&Error),
{
    iter(error).for_each(visit);
}

/// Like [`for_each`] but stops at the first `ControlFlow::Break`.
///
/// # Returns
///
/// The break value, or `ControlFlow::Continue(())` once every constituent
/// has been visited.
pub fn try_for_each<B, F>(error: Option<&Error>, mut visit: F) -> ControlFlow<B>
where
    F: FnMut(&Error) -> ControlFlow<B>,
{
    for error in iter(error) {
        visit(error)?;
    }
    ControlFlow::Continue(())
}

/// Returns the number of constituents of `error`.
///
/// 0 for `None`, the element count for a composite and 1 otherwise.
#[must_use]
pub fn len(error: Option<&Error>) -> usize {
    as_slice(error).len()
}

/// Splits `error` into its constituents, in insertion order.
#[must_use]
pub fn flatten(error: Option<Error>) -> Vec<Error> {
    match error.map(into_multi) {
        None => Vec::new(),
        Some(Ok(multi)) => multi.into_errors(),
        Some(Err(single)) => vec![single],
    }
}

/// Borrows the constituents of `error` as a slice.
#[must_use]
pub fn as_slice(error: Option<&Error>) -> &[Error] {
    match error {
        None => &[],
        Some(error) => match as_multi(error) {
            Some(multi) => multi.as_slice(),
            None => slice::from_ref(error),
        },
    }
}

/// Iterates over the constituents of `error`.
pub fn iter(error: Option<&Error>) -> slice::Iter<'_, Error> {
    as_slice(error).iter()
}

/// Returns the composite behind `error` when it is one at the outermost level.
///
/// A composite wrapped in `context` is deliberately not matched: unwrapping
/// it would drop the context message.
pub(crate) fn as_multi(error: &Error) -> Option<&MultiError> {
    let outer: &(dyn StdError + 'static) = error.as_ref();
    outer.downcast_ref::<MultiError>()
}

fn into_multi(error: Error) -> Result<MultiError, Error> {
    if as_multi(&error).is_some() {
        error.downcast::<MultiError>()
    } else {
        Err(error)
    }
}
