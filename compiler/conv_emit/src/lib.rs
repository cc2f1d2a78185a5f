//! Go source rendering for convgen.
//!
//! Turns [`conv_assign::Assignment`] trees into Go function bodies and
//! whole files. Rendering is a pure function of its input: identical specs
//! produce byte-identical output.
//!
//! # Modules
//!
//! - [`emitter`]: output sink abstraction
//! - [`method`]: signatures, hooks and assignment bodies
//! - [`file`]: package clause, imports and function list

pub mod emitter;
pub mod file;
pub mod method;

pub use emitter::{Emitter, StringEmitter};
pub use file::{render_file, FileSpec, GENERATED_HEADER};
pub use method::{
    render_assignments, render_method, HookCall, MethodSpec, Param, BODY_NAMES,
};
