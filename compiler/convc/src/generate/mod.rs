//! Per-method generation and the parallel driver.
//!
//! Generation runs in three phases:
//!
//! 1. Load the manifest into a type pool (fatal on error).
//! 2. Prepare each method sequentially: overlay options and resolve the
//!    root types. Type resolution may intern new composite types, so this
//!    is the last phase that mutates the pool.
//! 3. Build every prepared method against the now frozen pool, in
//!    parallel, then collect the results in declaration order.
//!
//! A [`ConfigError`] in phase 2 or 3 fails only its own method.

use std::collections::BTreeSet;

use conv_assign::{build_assignments, BuildRequest, RootVar};
use conv_diagnostic::{ConfigError, Pos};
use conv_emit::{FileSpec, HookCall, MethodSpec, Param, BODY_NAMES};
use conv_options::{HookDecl, Options, Style};
use conv_types::{package_name, Idx, TypeOracle};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::resolve_options;
use crate::loader::{load, Loaded};
use crate::manifest::{Manifest, MethodDecl};

/// Name of the destination variable when no receiver name is given.
const DST_NAME: &str = "dst";
const SRC_NAME: &str = "src";

/// A method that could not be generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodFailure {
    pub method: String,
    pub error: ConfigError,
}

/// Outcome of one generation run.
#[derive(Clone, Debug, Default)]
pub struct Generation {
    /// The generated methods, in declaration order. Failed methods are
    /// omitted.
    pub file: FileSpec,
    pub failures: Vec<MethodFailure>,
}

impl Generation {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A method whose options and root types are resolved.
#[derive(Clone, Debug)]
struct Prepared {
    name: String,
    pos: Pos,
    options: Options,
    dst: Idx,
    src: Idx,
}

/// Generate every method declared in `manifest`.
///
/// # Errors
///
/// Returns a [`ConfigError`] only when the manifest itself cannot be
/// loaded. Per-method errors are collected in [`Generation::failures`].
#[tracing::instrument(level = "debug", skip_all, fields(count = manifest.methods.len()))]
pub fn generate(manifest: &Manifest, parallel: bool) -> Result<Generation, ConfigError> {
    let mut loaded = load(manifest)?;
    let prepared: Vec<(&str, Result<Prepared, ConfigError>)> = manifest
        .methods
        .iter()
        .map(|decl| (decl.name.as_str(), prepare(&mut loaded, manifest, decl)))
        .collect();

    let pool = &loaded.pool;
    let package = manifest.package.as_str();
    let build = |(name, prepared): &(&str, Result<Prepared, ConfigError>)| {
        let built = match prepared {
            Ok(prepared) => build_method(pool, package, prepared),
            Err(err) => Err(err.clone()),
        };
        (name.to_string(), built)
    };

    let results: Vec<_> = if parallel {
        rayon::ThreadPoolBuilder::new()
            .build_scoped(rayon::ThreadBuilder::run, |threads| {
                threads.install(|| prepared.par_iter().map(build).collect::<Vec<_>>())
            })
            .unwrap_or_else(|e| {
                warn!("failed to create thread pool ({e}), running sequentially");
                prepared.iter().map(build).collect()
            })
    } else {
        prepared.iter().map(build).collect()
    };

    let mut generation = Generation {
        file: FileSpec::new(package),
        failures: Vec::new(),
    };
    for (method, built) in results {
        match built {
            Ok((spec, imports)) => {
                generation.file.imports.extend(imports);
                generation.file.methods.push(spec);
            }
            Err(error) => {
                warn!(method = %method, code = %error.code(), "{error}");
                generation.failures.push(MethodFailure { method, error });
            }
        }
    }
    debug!(
        generated = generation.file.methods.len(),
        failed = generation.failures.len(),
        "generation finished"
    );
    Ok(generation)
}

fn prepare(
    loaded: &mut Loaded,
    manifest: &Manifest,
    decl: &MethodDecl,
) -> Result<Prepared, ConfigError> {
    let pos = Pos::from(decl.pos);
    let merged = manifest.defaults.overlay(&decl.options);
    let mut options = resolve_options(&merged, pos)?;
    if let Some(style) = decl.style {
        options.style = style.into();
    }
    options.receiver.clone_from(&decl.receiver);

    let dst = loaded.resolve(&decl.dst, &manifest.package, pos)?;
    let src = loaded.resolve(&decl.src, &manifest.package, pos)?;
    Ok(Prepared {
        name: decl.name.clone(),
        pos,
        options,
        dst,
        src,
    })
}

/// Build one method: assignments, hooks and the rendered signature parts.
///
/// Returns the method and the import paths it references.
#[tracing::instrument(level = "debug", skip_all, fields(method = %prepared.name))]
fn build_method(
    oracle: &dyn TypeOracle,
    package: &str,
    prepared: &Prepared,
) -> Result<(MethodSpec, BTreeSet<String>), ConfigError> {
    let Prepared {
        name,
        pos,
        options,
        dst,
        src,
    } = prepared;
    let (dst, src, pos) = (*dst, *src, *pos);
    let unresolved = |side| ConfigError::UnresolvedRootType {
        method: name.clone(),
        side,
        pos,
    };

    if let Some(receiver) = options.receiver.as_deref() {
        check_receiver_name(receiver, pos)?;
        check_receiver(oracle, package, dst, pos)?;
    }
    let dst_name = options.receiver.as_deref().unwrap_or(DST_NAME);
    let request = BuildRequest {
        method: name,
        package,
        dst: RootVar::new(dst_name, dst),
        src: RootVar::new(SRC_NAME, src),
        pos,
    };
    let output = build_assignments(oracle, options, &request)?;

    let mut imports = output.packages.clone();
    oracle.collect_packages(dst, &mut imports);
    oracle.collect_packages(src, &mut imports);
    let preprocess = resolve_hook(oracle, package, options.preprocess.as_ref(), dst, src)?;
    let postprocess = resolve_hook(oracle, package, options.postprocess.as_ref(), dst, src)?;
    for (hook, func_package) in preprocess.iter().chain(&postprocess) {
        debug!(method = %name, hook = %hook.func, "hook resolved");
        imports.insert(func_package.clone());
    }

    let returns_dst = options.receiver.is_none() && options.style == Style::Return;
    let dst_init = if returns_dst && oracle.is_pointer(dst) {
        let elem = oracle
            .type_expr(oracle.deref(dst), package)
            .ok_or_else(|| unresolved("destination"))?;
        Some(format!("&{elem}{{}}"))
    } else {
        None
    };
    let dst_ty = oracle
        .type_expr(dst, package)
        .ok_or_else(|| unresolved("destination"))?;
    let src_ty = oracle
        .type_expr(src, package)
        .ok_or_else(|| unresolved("source"))?;

    let unmatched = output.unmatched();
    if !unmatched.is_empty() {
        warn!(
            method = %name,
            fields = %unmatched.join(", "),
            "destination fields left unassigned"
        );
    }
    debug!(method = %name, copiers = output.copiers.len(), "method built");

    let spec = MethodSpec {
        name: name.clone(),
        style: options.style,
        receiver: options.receiver.is_some(),
        dst: Param::new(dst_name, dst_ty),
        src: Param::new(SRC_NAME, src_ty),
        dst_init,
        preprocess: preprocess.map(|(call, _)| call),
        postprocess: postprocess.map(|(call, _)| call),
        assignments: output.assignments,
    };
    Ok((spec, imports))
}

/// The receiver must not shadow the source parameter or a body variable.
fn check_receiver_name(name: &str, pos: Pos) -> Result<(), ConfigError> {
    if name == SRC_NAME || BODY_NAMES.contains(&name) {
        return Err(ConfigError::ReservedReceiver {
            name: name.to_string(),
            pos,
        });
    }
    Ok(())
}

/// The receiver's base type must be a named type of the target package.
fn check_receiver(
    oracle: &dyn TypeOracle,
    package: &str,
    dst: Idx,
    pos: Pos,
) -> Result<(), ConfigError> {
    let base = oracle.deref(dst);
    match oracle.package_of(base) {
        Some(owner) if owner == package => Ok(()),
        owner => Err(ConfigError::ForeignReceiver {
            ty: oracle.display(base),
            package: owner.unwrap_or("no package").to_string(),
            pos,
        }),
    }
}

/// Resolve a hook to its call spelling and declaring package.
///
/// A hook is `func(dst D, src S)` or `func(dst D, src S) error`, where the
/// method's roots are assignable to `D` and `S`.
fn resolve_hook(
    oracle: &dyn TypeOracle,
    package: &str,
    hook: Option<&HookDecl>,
    dst: Idx,
    src: Idx,
) -> Result<Option<(HookCall, String)>, ConfigError> {
    let Some(hook) = hook else {
        return Ok(None);
    };
    let Some(def) = oracle.function(&hook.func, package) else {
        return Err(ConfigError::UnknownFunction {
            name: hook.func.clone(),
            pos: hook.pos,
        });
    };
    let bad = |reason: &str| ConfigError::BadHookSignature {
        name: hook.func.clone(),
        reason: reason.to_string(),
        pos: hook.pos,
    };
    match def.params.as_slice() {
        [dst_param, src_param]
            if oracle.is_assignable(dst, *dst_param) && oracle.is_assignable(src, *src_param) => {}
        _ => return Err(bad("must take the destination and the source")),
    }
    let Some(returns_error) = def.error_only_result() else {
        return Err(bad("must return nothing or a single error"));
    };

    let func = if def.package == package {
        def.name.clone()
    } else {
        format!("{}.{}", package_name(&def.package), def.name)
    };
    Ok(Some((
        HookCall {
            func,
            returns_error,
        },
        def.package.clone(),
    )))
}
