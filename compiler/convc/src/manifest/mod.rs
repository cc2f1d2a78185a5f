//! Manifest: the JSON description of one generation unit.
//!
//! A manifest stands in for the host front end. It declares the types and
//! functions the generator may reference, the unit-wide option defaults,
//! and the methods to generate:
//!
//! ```json
//! {
//!   "package": "example.com/app/model",
//!   "types": [
//!     { "package": "example.com/app/storage", "name": "User",
//!       "struct": [{ "name": "Name", "type": "string" }] },
//!     { "name": "User", "struct": [{ "name": "Name", "type": "string" }] }
//!   ],
//!   "defaults": { "getter": true },
//!   "methods": [
//!     { "name": "FromStorage", "src": "*storage.User", "dst": "*User" }
//!   ]
//! }
//! ```
//!
//! Type references are written as Go type expressions and resolved after
//! every named type has been declared, so types may refer to each other in
//! any order.

use conv_diagnostic::{ConfigError, Pos};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Import path of the package the code is generated into.
    pub package: String,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
    #[serde(default)]
    pub functions: Vec<FuncDecl>,
    #[serde(default)]
    pub defaults: OptionsDecl,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

impl Manifest {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|err| ConfigError::InvalidManifest {
            reason: err.to_string(),
        })
    }
}

/// A named type. Exactly one of `struct` and `underlying` is set.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    /// Declaring package; defaults to the manifest package.
    pub package: Option<String>,
    pub name: String,
    #[serde(rename = "struct")]
    pub fields: Option<Vec<FieldDecl>>,
    pub underlying: Option<String>,
    #[serde(default)]
    pub methods: Vec<SignatureDecl>,
    #[serde(default)]
    pub pos: PosDecl,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// A method on a declared type.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignatureDecl {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
}

/// A package-level function usable as converter or hook.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FuncDecl {
    pub package: Option<String>,
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub pos: PosDecl,
}

/// One function to generate.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDecl {
    pub name: String,
    pub src: String,
    pub dst: String,
    /// Generate as a method of the destination type, using this receiver
    /// name.
    pub receiver: Option<String>,
    pub style: Option<StyleDecl>,
    #[serde(default)]
    pub options: OptionsDecl,
    #[serde(default)]
    pub pos: PosDecl,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleDecl {
    Return,
    Arg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleDecl {
    Name,
    None,
}

/// Option directives. Used both for unit defaults and per method.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsDecl {
    pub rule: Option<RuleDecl>,
    pub style: Option<StyleDecl>,
    pub exact_case: Option<bool>,
    pub getter: Option<bool>,
    pub stringer: Option<bool>,
    pub typecast: Option<bool>,
    #[serde(default)]
    pub skip: Vec<String>,
    #[serde(default)]
    pub map: Vec<MapDecl>,
    #[serde(default)]
    pub conv: Vec<ConvDecl>,
    #[serde(default)]
    pub literal: Vec<LiteralDecl>,
    #[serde(default)]
    pub scopes: Vec<ScopeDecl>,
    pub preprocess: Option<String>,
    pub postprocess: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapDecl {
    pub src: String,
    pub dst: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvDecl {
    pub func: String,
    pub src: String,
    pub dst: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiteralDecl {
    pub dst: String,
    pub value: String,
}

/// Flag overrides for a destination subtree.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeDecl {
    pub pattern: String,
    pub exact_case: Option<bool>,
    pub getter: Option<bool>,
    pub stringer: Option<bool>,
    pub typecast: Option<bool>,
}

/// `{"line": 12, "column": 4}`; both default to 0 (unknown).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PosDecl {
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

impl From<PosDecl> for Pos {
    fn from(pos: PosDecl) -> Self {
        Pos::new(pos.line, pos.column)
    }
}

#[cfg(test)]
mod tests;
