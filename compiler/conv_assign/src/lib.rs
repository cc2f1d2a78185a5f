//! Field resolution and assignment matching for convgen.
//!
//! Given a destination and a source root type plus the resolved
//! [`Options`] of one generated method, [`build_assignments`] produces the
//! ordered [`Assignment`] descriptors that fill the destination.
//!
//! # Architecture
//!
//! - [`node`]: arena of source/destination expressions ([`NodeTree`])
//! - `builder`: walks the destination struct shape, recursion guard
//! - `matcher`: per-field policy chain (skip, converter, mapping, literal,
//!   getter, field)
//! - `lookup`, `cast`, `slice`: candidate lookup, castability and slice
//!   strategies used by the matcher
//! - [`assignment`]: the descriptors handed to the emitter
//!
//! Matching misses never fail the build; they become `NoMatch` entries and
//! a `tracing` warning. Only configuration problems return [`ConfigError`].

pub mod assignment;
mod builder;
mod cast;
pub mod copier;
mod lookup;
mod matcher;
pub mod node;
mod slice;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use std::collections::BTreeSet;

use conv_diagnostic::{ConfigError, Pos};
use conv_options::Options;
use conv_types::{package_name, Idx, TypeOracle};
use rustc_hash::FxHashMap;
use tracing::debug;

pub use assignment::{Assignment, NestedAssignment, SliceAssignment};
pub use copier::{Copier, CopierSet};
pub use node::{ConverterFn, Node, NodeId, NodeTree};

use builder::AssignmentBuilder;

/// A top-level variable of the generated function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootVar {
    pub name: String,
    pub ty: Idx,
}

impl RootVar {
    pub fn new(name: impl Into<String>, ty: Idx) -> Self {
        RootVar {
            name: name.into(),
            ty,
        }
    }
}

/// Inputs for building one method.
#[derive(Clone, Debug)]
pub struct BuildRequest<'a> {
    /// Method name, for diagnostics.
    pub method: &'a str,
    /// Import path of the package the code is generated into.
    pub package: &'a str,
    pub dst: RootVar,
    pub src: RootVar,
    /// Position of the method declaration.
    pub pos: Pos,
}

/// Result of a successful build.
#[derive(Clone, Debug, Default)]
pub struct BuildOutput {
    pub assignments: Vec<Assignment>,
    pub copiers: CopierSet,
    /// Import paths referenced by the generated expressions.
    pub packages: BTreeSet<String>,
}

impl BuildOutput {
    /// Whether any generated assignment can fail.
    pub fn returns_error(&self) -> bool {
        self.assignments.iter().any(Assignment::returns_error)
    }

    /// Destination expressions that were left unassigned.
    pub fn unmatched(&self) -> Vec<&str> {
        self.assignments.iter().flat_map(Assignment::unmatched).collect()
    }
}

/// Build the assignment descriptors for one method.
///
/// # Errors
///
/// Returns a [`ConfigError`] if a root type is not known to the oracle, or
/// if a converter directive names an unknown function or one whose
/// signature is not `func(T) U` / `func(T) (U, error)`.
pub fn build_assignments(
    oracle: &dyn TypeOracle,
    options: &Options,
    request: &BuildRequest<'_>,
) -> Result<BuildOutput, ConfigError> {
    check_root(oracle, request, "destination", request.dst.ty)?;
    check_root(oracle, request, "source", request.src.ty)?;
    let converters = resolve_converters(oracle, options, request.package)?;

    debug!(
        method = request.method,
        dst = %oracle.display(request.dst.ty),
        src = %oracle.display(request.src.ty),
        "building assignments"
    );

    let mut builder = AssignmentBuilder::new(
        oracle,
        options,
        request.package,
        converters,
        &request.src.name,
        request.src.ty,
    );
    let assignments = builder.build_root(&request.dst.name, request.dst.ty);
    Ok(BuildOutput {
        assignments,
        copiers: builder.copiers,
        packages: builder.packages,
    })
}

fn check_root(
    oracle: &dyn TypeOracle,
    request: &BuildRequest<'_>,
    side: &'static str,
    ty: Idx,
) -> Result<(), ConfigError> {
    if ty.is_none() || !oracle.contains(ty) {
        return Err(ConfigError::UnresolvedRootType {
            method: request.method.to_string(),
            side,
            pos: request.pos,
        });
    }
    Ok(())
}

/// Resolve every converter directive up front, so a bad signature fails
/// the method even if the directive never matches a field.
fn resolve_converters(
    oracle: &dyn TypeOracle,
    options: &Options,
    package: &str,
) -> Result<FxHashMap<String, ConverterFn>, ConfigError> {
    let mut resolved = FxHashMap::default();
    for conv in options.converters() {
        if resolved.contains_key(&conv.func) {
            continue;
        }
        let Some(def) = oracle.function(&conv.func, package) else {
            return Err(ConfigError::UnknownFunction {
                name: conv.func.clone(),
                pos: conv.pos,
            });
        };
        let bad = |reason: &str| ConfigError::BadConverterSignature {
            name: conv.func.clone(),
            reason: reason.to_string(),
            pos: conv.pos,
        };
        let [arg] = def.params.as_slice() else {
            return Err(bad("must take exactly one argument"));
        };
        let Some((ret, returns_error)) = def.value_result() else {
            return Err(bad("must return a value, optionally followed by an error"));
        };
        resolved.insert(
            conv.func.clone(),
            ConverterFn {
                name: spelled_function(&def.package, &def.name, package),
                package: def.package.clone(),
                arg: *arg,
                ret,
                returns_error,
            },
        );
    }
    Ok(resolved)
}

fn spelled_function(func_package: &str, name: &str, package: &str) -> String {
    if func_package == package {
        name.to_string()
    } else {
        format!("{}.{name}", package_name(func_package))
    }
}
