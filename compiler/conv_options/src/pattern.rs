//! Name patterns used by skip, mapping and scope directives.
//!
//! A pattern is either a plain dotted path (`Category.ID`) compared for
//! equality, or a regular expression delimited by slashes (`/^Internal/`).
//! Whether letter case matters is decided per lookup, so each regex is
//! compiled in both flavours up front.

use conv_diagnostic::{ConfigError, Pos};
use regex::{Regex, RegexBuilder};

#[derive(Clone, Debug)]
pub enum NamePattern {
    Exact(String),
    Regex {
        source: String,
        sensitive: Regex,
        insensitive: Regex,
    },
}

impl NamePattern {
    /// Parse a raw directive argument.
    pub fn parse(raw: &str, pos: Pos) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::BadPattern {
                pattern: String::new(),
                reason: "pattern is empty".to_string(),
                pos,
            });
        }

        let Some(body) = raw
            .strip_prefix('/')
            .and_then(|rest| rest.strip_suffix('/'))
        else {
            return Ok(NamePattern::Exact(raw.to_string()));
        };
        if body.is_empty() {
            return Err(ConfigError::BadPattern {
                pattern: raw.to_string(),
                reason: "regular expression is empty".to_string(),
                pos,
            });
        }

        let compile = |case_insensitive: bool| {
            RegexBuilder::new(body)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(|err| ConfigError::BadPattern {
                    pattern: raw.to_string(),
                    reason: err.to_string(),
                    pos,
                })
        };
        Ok(NamePattern::Regex {
            source: raw.to_string(),
            sensitive: compile(false)?,
            insensitive: compile(true)?,
        })
    }

    /// Plain pattern without parsing (never a regex).
    pub fn exact(path: impl Into<String>) -> Self {
        NamePattern::Exact(path.into())
    }

    pub fn matches(&self, path: &str, exact_case: bool) -> bool {
        match self {
            NamePattern::Exact(expected) => names_match(expected, path, exact_case),
            NamePattern::Regex {
                sensitive,
                insensitive,
                ..
            } => {
                if exact_case {
                    sensitive.is_match(path)
                } else {
                    insensitive.is_match(path)
                }
            }
        }
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        match self {
            NamePattern::Exact(path) => path,
            NamePattern::Regex { source, .. } => source,
        }
    }
}

/// Compare two identifiers or paths under the case rule.
pub fn names_match(a: &str, b: &str, exact_case: bool) -> bool {
    if exact_case {
        a == b
    } else {
        a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
    }
}
