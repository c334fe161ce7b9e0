//! Handler-or-terminate failure contract.
//!
//! Store operations return `Result`, and callers that can recover handle
//! the error with `?`, `match`, or [`catch`]. A caller with nowhere to
//! send a failure uses [`OrFatal::or_fatal`], which reports it and ends
//! the process rather than continuing on corrupted state.

use std::fmt;

/// Exit status used when a failure reaches [`fatal`] (`EX_SOFTWARE`).
pub const FATAL_EXIT_CODE: i32 = 70;

/// Run `body`; if it fails, hand the error to `handler` and return its
/// result instead.
pub fn catch<T, E>(body: impl FnOnce() -> Result<T, E>, handler: impl FnOnce(E) -> T) -> T {
    match body() {
        Ok(value) => value,
        Err(err) => handler(err),
    }
}

/// Run `body`, then `cleanup` whether or not `body` failed, then return
/// `body`'s result.
pub fn finally<T, E>(body: impl FnOnce() -> Result<T, E>, cleanup: impl FnOnce()) -> Result<T, E> {
    let result = body();
    cleanup();
    result
}

/// Report an unhandled failure and terminate the process.
pub fn fatal(err: &dyn fmt::Display) -> ! {
    log::error!("terminated with unhandled failure: {err}");
    eprintln!("multiarray: terminated with unhandled failure: {err}");
    std::process::exit(FATAL_EXIT_CODE)
}

/// Unwrap a result or terminate the process via [`fatal`].
pub trait OrFatal<T> {
    /// The success value, or process termination with the error reported
    /// to stderr.
    fn or_fatal(self) -> T;
}

impl<T, E: fmt::Display> OrFatal<T> for Result<T, E> {
    fn or_fatal(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fatal(&err),
        }
    }
}
