//! Parsing of Go type expressions written in the manifest.
//!
//! Supported forms: basic type names, `error`, `Name` (declared in the
//! context package), `pkg.Name` (qualified by package name), `*T`, `[]T`
//! and `map[K]V`. Anything else is an unknown type.

use conv_diagnostic::{ConfigError, Pos};
use conv_types::{package_name, BasicKind, Idx, Pool};
use rustc_hash::FxHashMap;

/// Maps package names (`storage`) to import paths
/// (`example.com/app/storage`).
#[derive(Clone, Debug, Default)]
pub struct PackageIndex {
    by_name: FxHashMap<String, String>,
}

impl PackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an import path. The first path registered for a package
    /// name wins.
    pub fn add(&mut self, path: &str) {
        self.by_name
            .entry(package_name(path).to_string())
            .or_insert_with(|| path.to_string());
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }
}

/// Resolves type expressions against a pool.
pub struct TypeResolver<'a> {
    pub pool: &'a mut Pool,
    pub packages: &'a PackageIndex,
}

impl TypeResolver<'_> {
    /// Resolve `text` as seen from `context` (an import path).
    pub fn resolve(&mut self, text: &str, context: &str, pos: Pos) -> Result<Idx, ConfigError> {
        let unknown = || ConfigError::UnknownType {
            reference: text.to_string(),
            pos,
        };
        self.parse(text.trim(), context).ok_or_else(unknown)
    }

    fn parse(&mut self, text: &str, context: &str) -> Option<Idx> {
        if let Some(elem) = text.strip_prefix('*') {
            let elem = self.parse(elem.trim_start(), context)?;
            return Some(self.pool.pointer_to(elem));
        }
        if let Some(elem) = text.strip_prefix("[]") {
            let elem = self.parse(elem.trim_start(), context)?;
            return Some(self.pool.slice_of(elem));
        }
        if let Some(rest) = text.strip_prefix("map[") {
            let close = matching_bracket(rest)?;
            let key = self.parse(rest[..close].trim(), context)?;
            let value = self.parse(rest[close + 1..].trim(), context)?;
            return Some(self.pool.map_of(key, value));
        }
        if text == "error" {
            return Some(Idx::ERROR);
        }
        if let Some(kind) = BasicKind::from_name(text) {
            return Some(kind.idx());
        }
        match text.split_once('.') {
            Some((pkg, name)) if is_ident(pkg) && is_ident(name) => {
                let path = self.packages.resolve(pkg)?;
                self.pool.named(path, name)
            }
            None if is_ident(text) => self.pool.named(context, text),
            _ => None,
        }
    }
}

/// Index of the `]` closing a `map[` whose opening bracket was consumed.
fn matching_bracket(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '[' => depth += 1,
            ']' if depth == 0 => return Some(i),
            ']' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn is_ident(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}
