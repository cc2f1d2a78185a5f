//! The resolved option set for one generated method.

use conv_diagnostic::{ConfigError, Pos};

use crate::{
    ConverterDecl, FieldMapping, FlagOverrides, HookDecl, LiteralDecl, MatchFlags, Matcher,
    NamePattern, ScopedFlags, SkipRule,
};

/// Whether fields are matched structurally by name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum MatchRule {
    /// Same-named fields and getters are candidates.
    #[default]
    Name,
    /// Only explicit directives produce assignments.
    None,
}

/// Shape of the generated function signature.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Style {
    /// `func F(src *S) (dst *D)`
    #[default]
    Return,
    /// `func F(dst *D, src *S)`
    Arg,
}

#[derive(Clone, Debug, Default)]
pub struct Options {
    pub rule: MatchRule,
    /// Unit-wide defaults, refined per field by scopes.
    pub flags: MatchFlags,
    pub style: Style,
    /// Receiver variable name when the function is generated as a method
    /// of the destination type.
    pub receiver: Option<String>,
    pub preprocess: Option<HookDecl>,
    pub postprocess: Option<HookDecl>,
    scopes: Vec<ScopedFlags>,
    skips: Vec<SkipRule>,
    matchers: Vec<Matcher>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registration ────────────────────────────────────────────────

    /// `:skip <pattern>`
    pub fn add_skip(&mut self, pattern: &str, pos: Pos) -> Result<(), ConfigError> {
        let pattern = NamePattern::parse(pattern, pos)?;
        self.skips.push(SkipRule { pattern, pos });
        Ok(())
    }

    /// `:map <src> <dst>`
    pub fn add_mapping(&mut self, src: &str, dst: &str, pos: Pos) -> Result<(), ConfigError> {
        let src = non_empty(src, "map", "source", pos)?;
        let dst = NamePattern::parse(non_empty(dst, "map", "destination", pos)?, pos)?;
        self.matchers.push(Matcher::Field(FieldMapping {
            src: src.to_string(),
            dst,
            pos,
        }));
        Ok(())
    }

    /// `:conv <func> <src> [dst]`; the destination defaults to the source path.
    pub fn add_converter(
        &mut self,
        func: &str,
        src: &str,
        dst: Option<&str>,
        pos: Pos,
    ) -> Result<(), ConfigError> {
        let func = func.trim();
        if func.is_empty() {
            return Err(ConfigError::UnknownFunction {
                name: String::new(),
                pos,
            });
        }
        let src = non_empty(src, "conv", "source", pos)?;
        let dst = match dst {
            Some(dst) => NamePattern::parse(non_empty(dst, "conv", "destination", pos)?, pos)?,
            None => NamePattern::exact(src),
        };
        self.matchers.push(Matcher::Converter(ConverterDecl {
            func: func.to_string(),
            src: src.to_string(),
            dst,
            pos,
        }));
        Ok(())
    }

    /// `:literal <dst> <expr>`
    pub fn add_literal(&mut self, dst: &str, value: &str, pos: Pos) -> Result<(), ConfigError> {
        let dst = NamePattern::parse(non_empty(dst, "literal", "destination", pos)?, pos)?;
        let value = non_empty(value, "literal", "value", pos)?;
        self.matchers.push(Matcher::Literal(LiteralDecl {
            dst,
            value: value.to_string(),
            pos,
        }));
        Ok(())
    }

    /// Flag overrides for destination paths matching `pattern`.
    pub fn add_scope(
        &mut self,
        pattern: &str,
        overrides: FlagOverrides,
        pos: Pos,
    ) -> Result<(), ConfigError> {
        let pattern = NamePattern::parse(pattern, pos)?;
        self.scopes.push(ScopedFlags { pattern, overrides });
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Effective flags for a destination path.
    ///
    /// The first scope matching the path, or any dotted prefix of it,
    /// applies; otherwise the unit defaults hold.
    pub fn flags_for(&self, path: &str) -> MatchFlags {
        let exact_case = self.flags.exact_case();
        self.scopes
            .iter()
            .find(|scope| path_or_prefix(path).any(|p| scope.pattern.matches(p, exact_case)))
            .map_or(self.flags, |scope| scope.overrides.apply(self.flags))
    }

    pub fn skip_for(&self, path: &str, exact_case: bool) -> Option<&SkipRule> {
        self.skips
            .iter()
            .find(|skip| skip.pattern.matches(path, exact_case))
    }

    /// First converter whose destination pattern matches `path`.
    pub fn converter_for(&self, path: &str, exact_case: bool) -> Option<&ConverterDecl> {
        self.matchers.iter().find_map(|m| match m {
            Matcher::Converter(conv) if conv.dst.matches(path, exact_case) => Some(conv),
            _ => None,
        })
    }

    /// First field mapping whose destination pattern matches `path`.
    pub fn mapping_for(&self, path: &str, exact_case: bool) -> Option<&FieldMapping> {
        self.matchers.iter().find_map(|m| match m {
            Matcher::Field(map) if map.dst.matches(path, exact_case) => Some(map),
            _ => None,
        })
    }

    /// First literal whose destination pattern matches `path`.
    pub fn literal_for(&self, path: &str, exact_case: bool) -> Option<&LiteralDecl> {
        self.matchers.iter().find_map(|m| match m {
            Matcher::Literal(lit) if lit.dst.matches(path, exact_case) => Some(lit),
            _ => None,
        })
    }

    pub fn skips(&self) -> &[SkipRule] {
        &self.skips
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    pub fn converters(&self) -> impl Iterator<Item = &ConverterDecl> {
        self.matchers.iter().filter_map(|m| match m {
            Matcher::Converter(conv) => Some(conv),
            _ => None,
        })
    }
}

fn non_empty<'a>(
    raw: &'a str,
    directive: &'static str,
    what: &'static str,
    pos: Pos,
) -> Result<&'a str, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ConfigError::EmptyPath {
            directive,
            what,
            pos,
        })
    } else {
        Ok(trimmed)
    }
}

/// `a.b.c`, `a.b`, `a`
fn path_or_prefix(path: &str) -> impl Iterator<Item = &str> {
    std::iter::once(path).chain(
        path.char_indices()
            .rev()
            .filter(|&(_, c)| c == '.')
            .map(move |(i, _)| &path[..i]),
    )
}

#[cfg(test)]
mod tests;
