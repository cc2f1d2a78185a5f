//! Loading manifest declarations into a type pool.
//!
//! Loading runs in two passes: every named type is declared first, then
//! underlying types, methods and functions are resolved. A struct may
//! therefore mention itself or a type declared further down.

use conv_diagnostic::{ConfigError, Pos};
use conv_types::{FieldDef, FuncDef, Idx, MethodDef, Pool};
use tracing::debug;

use crate::manifest::{Manifest, SignatureDecl, TypeDecl};
use crate::typeref::{PackageIndex, TypeResolver};

/// A loaded manifest: the pool plus the package name index used to resolve
/// further type references.
#[derive(Clone, Debug)]
pub struct Loaded {
    pub pool: Pool,
    pub packages: PackageIndex,
}

impl Loaded {
    /// Resolve a type reference from the perspective of `context`.
    pub fn resolve(&mut self, text: &str, context: &str, pos: Pos) -> Result<Idx, ConfigError> {
        TypeResolver {
            pool: &mut self.pool,
            packages: &self.packages,
        }
        .resolve(text, context, pos)
    }
}

pub fn load(manifest: &Manifest) -> Result<Loaded, ConfigError> {
    let mut pool = Pool::new();
    let mut packages = PackageIndex::new();
    packages.add(&manifest.package);

    // Pass 1: names.
    let mut declared = Vec::with_capacity(manifest.types.len());
    for decl in &manifest.types {
        let package = decl.package.as_deref().unwrap_or(&manifest.package);
        packages.add(package);
        declared.push((pool.declare_named(package, &decl.name), package));
    }
    for func in &manifest.functions {
        if let Some(package) = &func.package {
            packages.add(package);
        }
    }

    // Pass 2: bodies.
    let mut resolver = TypeResolver {
        pool: &mut pool,
        packages: &packages,
    };
    for (decl, (named, package)) in manifest.types.iter().zip(declared) {
        let pos = Pos::from(decl.pos);
        let underlying = underlying_of(&mut resolver, decl, package, pos)?;
        resolver.pool.define_named(named, underlying);
        for method in &decl.methods {
            let method = signature(&mut resolver, method, package, pos)?;
            resolver.pool.add_method(named, method);
        }
    }
    for func in &manifest.functions {
        let package = func.package.as_deref().unwrap_or(&manifest.package);
        let pos = Pos::from(func.pos);
        let params = resolve_all(&mut resolver, &func.params, package, pos)?;
        let results = resolve_all(&mut resolver, &func.results, package, pos)?;
        resolver.pool.add_function(FuncDef {
            package: package.to_string(),
            name: func.name.clone(),
            params,
            results,
        });
    }

    debug!(
        types = manifest.types.len(),
        functions = manifest.functions.len(),
        "manifest loaded"
    );
    Ok(Loaded { pool, packages })
}

fn underlying_of(
    resolver: &mut TypeResolver<'_>,
    decl: &TypeDecl,
    package: &str,
    pos: Pos,
) -> Result<Idx, ConfigError> {
    match (&decl.fields, &decl.underlying) {
        (Some(fields), None) => {
            let mut defs = Vec::with_capacity(fields.len());
            for field in fields {
                let ty = resolver.resolve(&field.ty, package, pos)?;
                defs.push(FieldDef::new(field.name.as_str(), ty));
            }
            Ok(resolver.pool.struct_of(defs))
        }
        (None, Some(text)) => resolver.resolve(text, package, pos),
        _ => Err(ConfigError::InvalidManifest {
            reason: format!(
                "type `{}` must set exactly one of `struct` and `underlying`",
                decl.name
            ),
        }),
    }
}

fn signature(
    resolver: &mut TypeResolver<'_>,
    decl: &SignatureDecl,
    package: &str,
    pos: Pos,
) -> Result<MethodDef, ConfigError> {
    Ok(MethodDef::new(
        decl.name.as_str(),
        resolve_all(resolver, &decl.params, package, pos)?,
        resolve_all(resolver, &decl.results, package, pos)?,
    ))
}

fn resolve_all(
    resolver: &mut TypeResolver<'_>,
    refs: &[String],
    package: &str,
    pos: Pos,
) -> Result<Vec<Idx>, ConfigError> {
    refs.iter()
        .map(|text| resolver.resolve(text, package, pos))
        .collect()
}

#[cfg(test)]
mod tests;
