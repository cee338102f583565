//! Multierr - combine several errors into one
//!
//! Joins independent failures, such as a primary operation and the cleanup
//! that follows it, into a single `anyhow::Error` without dropping any of
//! them. A composite only exists once two errors have actually occurred:
//!
//! ```
//! use anyhow::{anyhow, Error};
//! use multierr::append;
//!
//! fn sprinkle_magic_dust() -> Option<Error> {
//!     let err = Some(anyhow!("magic not available"));
//!     append(err, Some(anyhow!("close: whoopsie")))
//! }
//!
//! assert_eq!(
//!     sprinkle_magic_dust().unwrap().to_string(),
//!     "2 errors occurred:\n(1) magic not available\n(2) close: whoopsie"
//! );
//! ```
//!
//! Matching with [`is`], [`find`] and [`contains`] searches every
//! constituent, and the message layout can be replaced process-wide through
//! [`set_formatter`] or a [`FormatConfig`].

pub mod config;
pub mod error;

// Re-export key types for convenience
pub use {
    config::{
        ConfigError, FormatConfig, FormatMessage, MessageStyle, default_format, formatter,
        reset_formatter, set_formatter,
    },
    error::{
        Accumulator, ErrorReporter, MultiError, ResultExt, append, append_all, as_slice, combine,
        contains, find, flatten, for_each, is, iter, len, try_for_each,
    },
};
