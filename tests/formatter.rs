//! Replacing the process-wide formatter.
//!
//! Kept in its own test binary since the formatter is global state; the
//! guard serializes the tests in this file.

use {
    anyhow::{Error, anyhow},
    multierr::{
        FormatConfig, MessageStyle, append, default_format, formatter, reset_formatter,
        set_formatter,
    },
    parking_lot::{Mutex, MutexGuard, const_mutex},
};

static GUARD: Mutex<()> = const_mutex(());

fn lock() -> MutexGuard<'static, ()> {
    let guard = GUARD.lock();
    reset_formatter();
    guard
}

fn composite() -> Error {
    append(Some(anyhow!("oops")), Some(anyhow!("whoops"))).unwrap()
}

fn count_only(errors: &[Error]) -> String {
    format!("{} things went wrong", errors.len())
}

#[test]
fn test_custom_formatter_applies_at_render_time() {
    let _guard = lock();
    let error = composite();
    assert_eq!(error.to_string(), "2 errors occurred:\n(1) oops\n(2) whoops");

    set_formatter(count_only);
    assert_eq!(error.to_string(), "2 things went wrong");

    reset_formatter();
    assert_eq!(error.to_string(), "2 errors occurred:\n(1) oops\n(2) whoops");
}

#[test]
fn test_formatter_returns_installed_hook() {
    let _guard = lock();
    let errors = vec![anyhow!("a"), anyhow!("b"), anyhow!("c")];
    assert_eq!(formatter()(&errors), default_format(&errors));

    set_formatter(count_only);
    assert_eq!(formatter()(&errors), "3 things went wrong");
    reset_formatter();
}

#[test]
fn test_single_error_ignores_formatter() {
    let _guard = lock();
    set_formatter(count_only);

    let error = append(None, Some(anyhow!("oops"))).unwrap();
    assert_eq!(error.to_string(), "oops");
    reset_formatter();
}

#[test]
fn test_format_config_install() {
    let _guard = lock();
    let error = composite();

    FormatConfig::from_json(r#"{"style": "inline"}"#)
        .unwrap()
        .install();
    assert_eq!(error.to_string(), "2 errors occurred: (1) oops; (2) whoops");

    FormatConfig {
        style: MessageStyle::Bulleted,
    }
    .install();
    assert_eq!(error.to_string(), "2 errors occurred:\n* oops\n* whoops");
    reset_formatter();
}
