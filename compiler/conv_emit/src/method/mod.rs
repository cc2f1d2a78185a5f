//! Rendering of one generated function.
//!
//! A [`MethodSpec`] carries already-spelled type expressions; nothing here
//! consults the type oracle. The same spec always renders to the same text.

use conv_assign::{Assignment, NestedAssignment, SliceAssignment};
use conv_options::Style;

use crate::Emitter;

/// Names the rendered body declares itself: the slice loop variables and
/// the error result.
pub const BODY_NAMES: [&str; 3] = ["i", "e", "err"];

/// A function parameter or named result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    /// Type as spelled in the target package, e.g. `*storage.User`.
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Param {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A pre- or post-process hook call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HookCall {
    /// Call spelling, e.g. `validate` or `hooks.Validate`.
    pub func: String,
    pub returns_error: bool,
}

/// Everything needed to render one function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSpec {
    pub name: String,
    pub style: Style,
    /// Render as a method with the destination as receiver.
    pub receiver: bool,
    pub dst: Param,
    pub src: Param,
    /// Allocation of the destination for the `return` style, e.g. `&User{}`.
    pub dst_init: Option<String>,
    pub preprocess: Option<HookCall>,
    pub postprocess: Option<HookCall>,
    pub assignments: Vec<Assignment>,
}

impl MethodSpec {
    /// Whether the function needs an `err error` result.
    pub fn returns_error(&self) -> bool {
        self.assignments.iter().any(Assignment::returns_error)
            || self.preprocess.as_ref().is_some_and(|h| h.returns_error)
            || self.postprocess.as_ref().is_some_and(|h| h.returns_error)
    }

    /// Whether the destination is produced as a result.
    fn returns_dst(&self) -> bool {
        !self.receiver && self.style == Style::Return
    }

    /// `func ...(...) ... {`
    pub fn signature(&self) -> String {
        let err = self.returns_error();
        let dst = format!("{} {}", self.dst.name, self.dst.ty);
        let src = format!("{} {}", self.src.name, self.src.ty);
        let results = match (self.returns_dst(), err) {
            (true, true) => format!(" ({dst}, err error)"),
            (true, false) => format!(" ({dst})"),
            (false, true) => " (err error)".to_string(),
            (false, false) => String::new(),
        };
        if self.receiver {
            format!("func ({dst}) {}({src}){results} {{", self.name)
        } else if self.returns_dst() {
            format!("func {}({src}){results} {{", self.name)
        } else {
            format!("func {}({dst}, {src}){results} {{", self.name)
        }
    }
}

/// Render a whole function, signature to closing brace.
pub fn render_method<E: Emitter>(spec: &MethodSpec, out: &mut E) {
    let has_results = spec.returns_dst() || spec.returns_error();

    out.emit_line(0, &spec.signature());
    if spec.returns_dst() {
        if let Some(init) = &spec.dst_init {
            out.emit_line(1, &format!("{} = {init}", spec.dst.name));
        }
    }
    if let Some(hook) = &spec.preprocess {
        render_hook(hook, spec, out);
    }
    render_assignments(&spec.assignments, 1, out);
    if let Some(hook) = &spec.postprocess {
        render_hook(hook, spec, out);
    }
    if has_results {
        out.emit_line(1, "return");
    }
    out.emit_line(0, "}");
}

fn render_hook<E: Emitter>(hook: &HookCall, spec: &MethodSpec, out: &mut E) {
    let call = format!("{}({}, {})", hook.func, spec.dst.name, spec.src.name);
    if hook.returns_error {
        out.emit_line(1, &format!("err = {call}"));
        render_error_check(1, out);
    } else {
        out.emit_line(1, &call);
    }
}

fn render_error_check<E: Emitter>(depth: usize, out: &mut E) {
    out.emit_line(depth, "if err != nil {");
    out.emit_line(depth + 1, "return");
    out.emit_line(depth, "}");
}

/// Render descriptors at the given indentation depth.
pub fn render_assignments<E: Emitter>(assignments: &[Assignment], depth: usize, out: &mut E) {
    for assignment in assignments {
        render_assignment(assignment, depth, out);
    }
}

fn render_assignment<E: Emitter>(assignment: &Assignment, depth: usize, out: &mut E) {
    match assignment {
        Assignment::Skip { lhs } => out.emit_line(depth, &format!("// skip: {lhs}")),
        Assignment::NoMatch { lhs } => out.emit_line(depth, &format!("// no match: {lhs}")),
        Assignment::Simple {
            lhs,
            rhs,
            returns_error: false,
        } => out.emit_line(depth, &format!("{lhs} = {rhs}")),
        Assignment::Simple {
            lhs,
            rhs,
            returns_error: true,
        } => {
            out.emit_line(depth, &format!("{lhs}, err = {rhs}"));
            render_error_check(depth, out);
        }
        Assignment::Nested(nested) => render_nested(nested, depth, out),
        Assignment::SliceCopy(slice) => render_slice(slice, depth, out, |depth, out| {
            out.emit_line(depth, &format!("copy({}, {})", slice.lhs, slice.rhs));
        }),
        Assignment::SliceLoopCopy(slice) | Assignment::SliceCastLoopCopy(slice) => {
            render_slice(slice, depth, out, |depth, out| {
                let value = match &slice.elem_cast {
                    Some(cast) => format!("{}(e)", cast_callee(cast)),
                    None => "e".to_string(),
                };
                out.emit_line(depth, &format!("for i, e := range {} {{", slice.rhs));
                out.emit_line(depth + 1, &format!("{}[i] = {value}", slice.lhs));
                out.emit_line(depth, "}");
            });
        }
    }
}

fn render_nested<E: Emitter>(nested: &NestedAssignment, depth: usize, out: &mut E) {
    let inner = match &nested.guard {
        Some(guard) => {
            out.emit_line(depth, &format!("if {guard} != nil {{"));
            depth + 1
        }
        None => depth,
    };
    if let Some(init) = &nested.init {
        out.emit_line(inner, &format!("{} = {init}", nested.lhs));
    }
    render_assignments(&nested.children, inner, out);
    if nested.guard.is_some() {
        out.emit_line(depth, "}");
    }
}

/// Shared shell of the slice strategies: a nil source leaves the
/// destination nil.
fn render_slice<E: Emitter>(
    slice: &SliceAssignment,
    depth: usize,
    out: &mut E,
    body: impl FnOnce(usize, &mut E),
) {
    out.emit_line(depth, &format!("if {} != nil {{", slice.rhs));
    out.emit_line(
        depth + 1,
        &format!("{} = make({}, len({}))", slice.lhs, slice.slice_type, slice.rhs),
    );
    body(depth + 1, out);
    out.emit_line(depth, "}");
}

/// `*T(e)` would parse as a dereference.
fn cast_callee(ty: &str) -> String {
    if ty.starts_with('*') {
        format!("({ty})")
    } else {
        ty.to_string()
    }
}
