//! Process-wide formatting configuration.
//!
//! This module holds the replaceable formatter used to render composite
//! errors, along with serializable presets for it.

pub mod format;

pub use format::{
    ConfigError, FormatConfig, FormatMessage, MessageStyle, default_format, formatter,
    reset_formatter, set_formatter,
};
