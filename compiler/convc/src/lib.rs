//! The `convc` driver.
//!
//! Reads a JSON manifest describing Go types, functions and the copy
//! functions to generate, runs the matching engine for every method and
//! renders one Go source file.
//!
//! - [`manifest`]: serde model of the input document
//! - [`typeref`]: Go type expressions to pool handles
//! - [`loader`]: two-pass manifest loading into a [`conv_types::Pool`]
//! - [`config`]: option overlay and resolution
//! - [`generate`]: per-method builds, run in parallel
//! - [`commands`]: CLI command handlers

pub mod commands;
pub mod config;
pub mod generate;
pub mod loader;
pub mod manifest;
mod tracing_setup;
pub mod typeref;

pub use generate::{generate, Generation, MethodFailure};
pub use manifest::Manifest;
pub use tracing_setup::init_tracing;
