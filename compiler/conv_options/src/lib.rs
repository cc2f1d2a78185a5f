//! Generation options for convgen.
//!
//! [`Options`] is the resolved form of the directives attached to one
//! interface method: the matching rule, per-field flags, skip patterns and
//! the ordered list of explicit matchers. Parsing directive comments is the
//! front end's job; this crate only validates and stores the result.
//!
//! Ordering matters: matchers are looked up first-registered-wins, so they
//! are kept in a `Vec`, never in a map or set.

mod directive;
mod flags;
mod options;
mod pattern;

pub use directive::{ConverterDecl, FieldMapping, HookDecl, LiteralDecl, Matcher, SkipRule};
pub use flags::{FlagOverrides, MatchFlags, ScopedFlags};
pub use options::{MatchRule, Options, Style};
pub use pattern::{names_match, NamePattern};
