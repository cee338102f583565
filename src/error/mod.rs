//! Composite errors and the operations that build and inspect them.
//!
//! Combination and traversal live in `append`, matching through composites
//! in `matching`, and the `Result`/logging conveniences in `operational` and
//! `accumulator`.

pub mod accumulator;
pub mod append;
pub mod matching;
pub mod multi;
pub mod operational;

pub use {
    accumulator::Accumulator,
    append::{append, append_all, as_slice, combine, flatten, for_each, iter, len, try_for_each},
    matching::{contains, find, is},
    multi::MultiError,
    operational::{ErrorReporter, ResultExt},
};
