//! Type and sentinel matching that sees through composites.
//!
//! These functions extend `anyhow`'s own downcasting with one rule: whenever
//! a [`MultiError`] is met, either at the top level or somewhere along a
//! `source()` chain, each of its constituents is searched in turn.

use std::error::Error as StdError;

use anyhow::Error;

use crate::error::multi::MultiError;

/// Checks whether `error`, or anything it wraps, equals `target`.
///
/// # Arguments
///
/// * `error` - Error to search, possibly a composite.
/// * `target` - Sentinel value to compare against.
///
/// # Returns
///
/// `true` as soon as one matching value is found.
///
/// # Examples
///
/// ```
/// use multierr::{append, is};
///
/// #[derive(Debug, PartialEq, thiserror::Error)]
/// enum StoreError {
///     #[error("not found")]
///     NotFound,
///     #[error("locked")]
///     Locked,
/// }
///
/// let err = append(Some(anyhow::anyhow!("oops")), Some(StoreError::NotFound.into())).unwrap();
/// assert!(is(&err, &StoreError::NotFound));
/// assert!(!is(&err, &StoreError::Locked));
/// ```
pub fn is<E>(error: &Error, target: &E) -> bool
where
    E: StdError + PartialEq + Send + Sync + 'static,
{
    if error.downcast_ref::<E>().is_some_and(|found| found == target) {
        return true;
    }
    error.chain().any(|link| link_is(link, target))
}

/// Finds the first error of type `E` in `error` or anything it wraps.
///
/// When a composite is searched, the result comes from the first constituent
/// (in insertion order) that contains an `E`.
pub fn find<E>(error: &Error) -> Option<&E>
where
    E: StdError + Send + Sync + 'static,
{
    if let Some(found) = error.downcast_ref::<E>() {
        return Some(found);
    }
    error.chain().find_map(|link| link_find::<E>(link))
}

/// Checks whether `error` or anything it wraps is of type `E`.
pub fn contains<E>(error: &Error) -> bool
where
    E: StdError + Send + Sync + 'static,
{
    find::<E>(error).is_some()
}

fn link_is<E>(link: &(dyn StdError + 'static), target: &E) -> bool
where
    E: StdError + PartialEq + Send + Sync + 'static,
{
    if link.downcast_ref::<E>().is_some_and(|found| found == target) {
        return true;
    }
    link.downcast_ref::<MultiError>().is_some_and(|multi| multi.is(target))
}

fn link_find<'a, E>(link: &'a (dyn StdError + 'static)) -> Option<&'a E>
where
    E: StdError + Send + Sync + 'static,
{
    if let Some(found) = link.downcast_ref::<E>() {
        return Some(found);
    }
    link.downcast_ref::<MultiError>().and_then(|multi| multi.find::<E>())
}

#[cfg(test)]
mod tests {
    use std::io::{Error as IoError, ErrorKind};

    use {anyhow::anyhow, thiserror::Error};

    use crate::error::{
        append::append,
        matching::{contains, find, is},
    };

    #[derive(Error, Debug, PartialEq)]
    enum StoreError {
        #[error("not found")]
        NotFound,
        #[error("locked: {0}")]
        Locked(String),
    }

    #[test]
    fn test_is_on_single_error() {
        let error = anyhow::Error::new(StoreError::NotFound);
        assert!(is(&error, &StoreError::NotFound));
        assert!(!is(&error, &StoreError::Locked("db".to_string())));
    }

    #[test]
    fn test_is_on_composite() {
        let error = append(
            Some(anyhow!("oops")),
            Some(StoreError::Locked("db".to_string()).into()),
        )
        .unwrap();

        assert!(is(&error, &StoreError::Locked("db".to_string())));
        assert!(!is(&error, &StoreError::Locked("cache".to_string())));
        assert!(!is(&error, &StoreError::NotFound));
    }

    #[test]
    fn test_is_through_context() {
        let wrapped = anyhow::Error::new(StoreError::NotFound).context("loading user");
        let error = append(Some(anyhow!("oops")), Some(wrapped)).unwrap();
        assert!(is(&error, &StoreError::NotFound));
    }

    #[test]
    fn test_is_through_context_wrapped_composite() {
        let inner = append(Some(anyhow!("oops")), Some(StoreError::NotFound.into()))
            .unwrap()
            .context("closing");
        let error = append(Some(inner), Some(anyhow!("whoops"))).unwrap();

        assert!(is(&error, &StoreError::NotFound));
    }

    #[test]
    fn test_find_through_context_wrapped_composite() {
        let inner = append(
            Some(anyhow!("oops")),
            Some(StoreError::Locked("db".to_string()).into()),
        )
        .unwrap()
        .context("closing");
        let error = append(Some(anyhow!("whoops")), Some(inner)).unwrap();

        assert_eq!(
            find::<StoreError>(&error),
            Some(&StoreError::Locked("db".to_string()))
        );
        assert!(contains::<StoreError>(&error));
        assert!(!contains::<IoError>(&error));
    }

    #[test]
    fn test_find_returns_first_match() {
        let error = append(
            Some(StoreError::Locked("first".to_string()).into()),
            Some(StoreError::Locked("second".to_string()).into()),
        )
        .unwrap();

        assert_eq!(
            find::<StoreError>(&error),
            Some(&StoreError::Locked("first".to_string()))
        );
    }

    #[test]
    fn test_find_io_error_kind() {
        let io_error = IoError::new(ErrorKind::PermissionDenied, "denied");
        let error = append(Some(anyhow!("oops")), Some(io_error.into())).unwrap();

        let found = find::<IoError>(&error).unwrap();
        assert_eq!(found.kind(), ErrorKind::PermissionDenied);
        assert!(contains::<IoError>(&error));
        assert!(!contains::<StoreError>(&error));
    }
}
