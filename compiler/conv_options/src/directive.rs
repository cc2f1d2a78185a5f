//! Explicit directives: skips, field mappings, converters, literals, hooks.
//!
//! Mapping-like directives form the closed [`Matcher`] set. They are kept
//! in a single ordered list because the first registered matcher for a
//! destination wins.

use conv_diagnostic::Pos;

use crate::NamePattern;

/// `:skip <pattern>`
#[derive(Clone, Debug)]
pub struct SkipRule {
    pub pattern: NamePattern,
    pub pos: Pos,
}

/// `:map <src> <dst>`
#[derive(Clone, Debug)]
pub struct FieldMapping {
    /// Source path relative to the source root, e.g. `Profile.Name()`.
    pub src: String,
    pub dst: NamePattern,
    pub pos: Pos,
}

/// `:conv <func> <src> [dst]`
#[derive(Clone, Debug)]
pub struct ConverterDecl {
    /// Function reference as written: `toStatus` or `pkg.ToStatus`.
    pub func: String,
    pub src: String,
    pub dst: NamePattern,
    pub pos: Pos,
}

/// `:literal <dst> <expr>`
#[derive(Clone, Debug)]
pub struct LiteralDecl {
    pub dst: NamePattern,
    /// Expression text copied verbatim into the assignment.
    pub value: String,
    pub pos: Pos,
}

/// An explicit source for a destination field.
#[derive(Clone, Debug)]
pub enum Matcher {
    Field(FieldMapping),
    Converter(ConverterDecl),
    Literal(LiteralDecl),
}

/// `:preprocess <func>` / `:postprocess <func>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HookDecl {
    pub func: String,
    pub pos: Pos,
}
