//! Diagnostics for convgen.
//!
//! - [`Pos`]: where a directive or method declaration sits in its source file
//! - [`ErrorCode`]: stable identifiers for every configuration error
//! - [`Diagnostic`]: a positioned, coded message with notes
//! - [`ConfigError`]: the errors that abort generation of one method
//!
//! Resolution misses inside the matching engine are not diagnostics; they
//! degrade to "no match" markers and are only logged.

mod diagnostic;
mod error_code;
mod errors;

pub use diagnostic::{Diagnostic, Pos, Severity};
pub use error_code::ErrorCode;
pub use errors::ConfigError;
