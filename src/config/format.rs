//! Process-wide message formatting for composite errors.
//!
//! Every `MultiError` renders through the formatter installed here, read at
//! the time it is displayed. Install a replacement once during startup,
//! before spawning threads that may render errors; swapping it while other
//! threads render is safe but leaves which format they observe unspecified.

use std::{fs::read_to_string, io::Error as StdError, path::Path};

use {
    anyhow::Error,
    parking_lot::{RwLock, const_rwlock},
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str},
    thiserror::Error,
    tracing::debug,
};

/// Signature of a composite error formatter.
///
/// Receives the constituents (always at least two) in insertion order.
pub type FormatMessage = fn(&[Error]) -> String;

static FORMATTER: RwLock<FormatMessage> = const_rwlock(default_format as FormatMessage);

/// Error type for formatter configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to deserialize the configuration.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
}

/// Built-in layouts for composite error messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStyle {
    /// Header line, then `(i) message` per error.
    #[default]
    Numbered,
    /// Header line, then `* message` per error.
    Bulleted,
    /// Everything on one line, errors separated by `; `.
    Inline,
}

impl MessageStyle {
    /// Returns the formatter implementing this style.
    #[must_use]
    pub fn formatter(self) -> FormatMessage {
        match self {
            MessageStyle::Numbered => default_format,
            MessageStyle::Bulleted => bulleted_format,
            MessageStyle::Inline => inline_format,
        }
    }
}

/// Serializable formatter configuration.
///
/// Meant to be embedded in, or loaded next to, an application's own
/// settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Layout used for composite error messages.
    pub style: MessageStyle,
}

impl FormatConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SerializationError` if the text is not a valid
    /// configuration.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(from_str(contents)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `FormatConfig` or a `ConfigError`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading error format config from {:?}", path);
        let contents = read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Installs the configured style as the process-wide formatter.
    pub fn install(&self) {
        debug!(style = ?self.style, "Installing error message style");
        set_formatter(self.style.formatter());
    }
}

/// Replaces the process-wide formatter.
pub fn set_formatter(format: FormatMessage) {
    *FORMATTER.write() = format;
}

/// Returns the formatter currently installed.
#[must_use]
pub fn formatter() -> FormatMessage {
    *FORMATTER.read()
}

/// Restores [`default_format`] as the process-wide formatter.
pub fn reset_formatter() {
    set_formatter(default_format);
}

/// Default formatting of multiple error messages.
///
/// ```text
/// 3 errors occurred:
/// (1) oops
/// (2) whoops
/// (3) whoopsie
/// ```
///
/// Line breaks inside a message are followed by a tab so continuation lines
/// stay indented under their number.
#[must_use]
pub fn default_format(errors: &[Error]) -> String {
    let mut buf = String::new();
    buf.push_str(&format!("{} errors occurred:\n", errors.len()));
    for (i, error) in errors.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        buf.push_str(&format!("({}) {}", i + 1, indent(error)));
    }
    buf
}

/// Same as [`default_format`] with `* ` in place of the numbers.
#[must_use]
pub fn bulleted_format(errors: &[Error]) -> String {
    let mut buf = String::new();
    buf.push_str(&format!("{} errors occurred:\n", errors.len()));
    for (i, error) in errors.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        buf.push_str(&format!("* {}", indent(error)));
    }
    buf
}

/// Single-line formatting, for log sinks that split records on newlines.
#[must_use]
pub fn inline_format(errors: &[Error]) -> String {
    let mut buf = String::new();
    buf.push_str(&format!("{} errors occurred: ", errors.len()));
    for (i, error) in errors.iter().enumerate() {
        if i > 0 {
            buf.push_str("; ");
        }
        let message = format!("{error:#}");
        buf.push_str(&format!("({}) {}", i + 1, message.replace('\n', " ")));
    }
    buf
}

fn indent(error: &Error) -> String {
    format!("{error:#}").replace('\n', "\n\t")
}
