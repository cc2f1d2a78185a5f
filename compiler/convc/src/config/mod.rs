//! Resolving option declarations into [`Options`].
//!
//! Method declarations overlay the unit defaults: scalar settings given on
//! the method replace the defaults, list directives are appended after the
//! defaults. Because matchers are first-registered-wins, a default mapping
//! takes precedence over a method mapping for the same destination.

use conv_diagnostic::{ConfigError, Pos};
use conv_options::{FlagOverrides, HookDecl, MatchFlags, MatchRule, Options, Style};

use crate::manifest::{OptionsDecl, RuleDecl, ScopeDecl, StyleDecl};

impl OptionsDecl {
    /// `self` with `over` laid on top.
    #[must_use]
    pub fn overlay(&self, over: &OptionsDecl) -> OptionsDecl {
        fn join<T: Clone>(base: &[T], over: &[T]) -> Vec<T> {
            base.iter().chain(over).cloned().collect()
        }
        OptionsDecl {
            rule: over.rule.or(self.rule),
            style: over.style.or(self.style),
            exact_case: over.exact_case.or(self.exact_case),
            getter: over.getter.or(self.getter),
            stringer: over.stringer.or(self.stringer),
            typecast: over.typecast.or(self.typecast),
            skip: join(&self.skip, &over.skip),
            map: join(&self.map, &over.map),
            conv: join(&self.conv, &over.conv),
            literal: join(&self.literal, &over.literal),
            scopes: join(&self.scopes, &over.scopes),
            preprocess: over.preprocess.clone().or_else(|| self.preprocess.clone()),
            postprocess: over.postprocess.clone().or_else(|| self.postprocess.clone()),
        }
    }
}

impl From<StyleDecl> for Style {
    fn from(style: StyleDecl) -> Self {
        match style {
            StyleDecl::Return => Style::Return,
            StyleDecl::Arg => Style::Arg,
        }
    }
}

impl From<RuleDecl> for MatchRule {
    fn from(rule: RuleDecl) -> Self {
        match rule {
            RuleDecl::Name => MatchRule::Name,
            RuleDecl::None => MatchRule::None,
        }
    }
}

/// Build validated options. All directives share the method position.
pub fn resolve_options(decl: &OptionsDecl, pos: Pos) -> Result<Options, ConfigError> {
    let mut options = Options::new();
    options.rule = decl.rule.map(MatchRule::from).unwrap_or_default();
    options.style = decl.style.map(Style::from).unwrap_or_default();
    options.flags = overrides(
        decl.exact_case,
        decl.getter,
        decl.stringer,
        decl.typecast,
    )
    .apply(MatchFlags::default());

    for pattern in &decl.skip {
        options.add_skip(pattern, pos)?;
    }
    for map in &decl.map {
        options.add_mapping(&map.src, &map.dst, pos)?;
    }
    for conv in &decl.conv {
        options.add_converter(&conv.func, &conv.src, conv.dst.as_deref(), pos)?;
    }
    for literal in &decl.literal {
        options.add_literal(&literal.dst, &literal.value, pos)?;
    }
    for scope in &decl.scopes {
        options.add_scope(&scope.pattern, scope_overrides(scope), pos)?;
    }
    options.preprocess = hook(decl.preprocess.as_deref(), pos)?;
    options.postprocess = hook(decl.postprocess.as_deref(), pos)?;
    Ok(options)
}

fn scope_overrides(scope: &ScopeDecl) -> FlagOverrides {
    overrides(scope.exact_case, scope.getter, scope.stringer, scope.typecast)
}

fn overrides(
    exact_case: Option<bool>,
    getter: Option<bool>,
    stringer: Option<bool>,
    typecast: Option<bool>,
) -> FlagOverrides {
    [
        (MatchFlags::EXACT_CASE, exact_case),
        (MatchFlags::GETTER, getter),
        (MatchFlags::STRINGER, stringer),
        (MatchFlags::TYPECAST, typecast),
    ]
    .into_iter()
    .fold(FlagOverrides::default(), |acc, (flag, setting)| match setting {
        Some(on) => acc.set(flag, on),
        None => acc,
    })
}

fn hook(func: Option<&str>, pos: Pos) -> Result<Option<HookDecl>, ConfigError> {
    let Some(func) = func else {
        return Ok(None);
    };
    let func = func.trim();
    if func.is_empty() {
        return Err(ConfigError::UnknownFunction {
            name: String::new(),
            pos,
        });
    }
    Ok(Some(HookDecl {
        func: func.to_string(),
        pos,
    }))
}

#[cfg(test)]
mod tests;
