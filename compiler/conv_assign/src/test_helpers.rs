//! Shared fixtures for matcher tests.

use conv_diagnostic::{ConfigError, Pos};
use conv_options::{MatchFlags, Options};
use conv_types::{FieldDef, FuncDef, Idx, Pool};

use crate::{build_assignments, Assignment, BuildOutput, BuildRequest, RootVar};

/// Package the code is generated into.
pub(crate) const MODEL: &str = "example.com/app/model";
/// A foreign package holding source types.
pub(crate) const STORAGE: &str = "example.com/app/storage";

pub(crate) fn field(name: &str, ty: Idx) -> FieldDef {
    FieldDef::new(name, ty)
}

pub(crate) fn func(package: &str, name: &str, params: Vec<Idx>, results: Vec<Idx>) -> FuncDef {
    FuncDef {
        package: package.to_string(),
        name: name.to_string(),
        params,
        results,
    }
}

pub(crate) fn options_with(flags: MatchFlags) -> Options {
    let mut options = Options::new();
    options.flags = flags;
    options
}

/// Build `dst` from `src` in the model package, both as pointer roots.
pub(crate) fn try_build(
    pool: &mut Pool,
    options: &Options,
    dst: Idx,
    src: Idx,
) -> Result<BuildOutput, ConfigError> {
    let dst = pool.pointer_to(dst);
    let src = pool.pointer_to(src);
    let request = BuildRequest {
        method: "Convert",
        package: MODEL,
        dst: RootVar::new("dst", dst),
        src: RootVar::new("src", src),
        pos: Pos::new(3, 2),
    };
    build_assignments(&*pool, options, &request)
}

/// Like [`try_build`] but only the descriptors; configuration errors panic.
pub(crate) fn build(pool: &mut Pool, options: &Options, dst: Idx, src: Idx) -> Vec<Assignment> {
    match try_build(pool, options, dst, src) {
        Ok(output) => output.assignments,
        Err(err) => panic!("unexpected configuration error: {err}"),
    }
}

pub(crate) fn simple(lhs: &str, rhs: &str) -> Assignment {
    Assignment::Simple {
        lhs: lhs.to_string(),
        rhs: rhs.to_string(),
        returns_error: false,
    }
}

pub(crate) fn no_match(lhs: &str) -> Assignment {
    Assignment::NoMatch {
        lhs: lhs.to_string(),
    }
}

/// `Name string` / `Age int` on both sides.
pub(crate) fn person_pair(pool: &mut Pool) -> (Idx, Idx) {
    let dst = pool.named_struct(
        MODEL,
        "Person",
        vec![field("Name", Idx::STRING), field("Age", Idx::INT)],
    );
    let src = pool.named_struct(
        STORAGE,
        "Person",
        vec![field("Name", Idx::STRING), field("Age", Idx::INT)],
    );
    (dst, src)
}
