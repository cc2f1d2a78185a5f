//! Assignment descriptors produced by the builder.
//!
//! Descriptors are plain data: every expression they carry is already
//! rendered source text, so the emitter never needs the type oracle or
//! the node tree.

/// Slice copy parameters shared by the three slice strategies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliceAssignment {
    pub lhs: String,
    pub rhs: String,
    /// Destination slice type used for `make`.
    pub slice_type: String,
    /// Element conversion, only set for the cast loop.
    pub elem_cast: Option<String>,
}

/// A destination struct filled field by field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NestedAssignment {
    pub lhs: String,
    /// Allocation for pointer destinations, e.g. `&Category{}`.
    pub init: Option<String>,
    /// Source expression that must be non-nil before the children run.
    pub guard: Option<String>,
    pub children: Vec<Assignment>,
}

/// One destination field and how it is filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Assignment {
    /// Excluded by a skip pattern.
    Skip { lhs: String },
    /// No source could be found; rendered as a comment.
    NoMatch { lhs: String },
    /// `lhs = rhs`, or `lhs, err = rhs` when the value expression can fail.
    Simple {
        lhs: String,
        rhs: String,
        returns_error: bool,
    },
    Nested(NestedAssignment),
    /// `make` + `copy`
    SliceCopy(SliceAssignment),
    /// `make` + element-wise assignment
    SliceLoopCopy(SliceAssignment),
    /// `make` + element-wise conversion
    SliceCastLoopCopy(SliceAssignment),
}

impl Assignment {
    pub fn lhs(&self) -> &str {
        match self {
            Assignment::Skip { lhs }
            | Assignment::NoMatch { lhs }
            | Assignment::Simple { lhs, .. } => lhs,
            Assignment::Nested(nested) => &nested.lhs,
            Assignment::SliceCopy(slice)
            | Assignment::SliceLoopCopy(slice)
            | Assignment::SliceCastLoopCopy(slice) => &slice.lhs,
        }
    }

    /// Whether the descriptor produces code that writes the destination.
    pub fn is_effective(&self) -> bool {
        !matches!(self, Assignment::Skip { .. } | Assignment::NoMatch { .. })
    }

    /// Whether the descriptor, or any descriptor nested in it, can fail.
    pub fn returns_error(&self) -> bool {
        match self {
            Assignment::Simple { returns_error, .. } => *returns_error,
            Assignment::Nested(nested) => nested.children.iter().any(Assignment::returns_error),
            Assignment::Skip { .. }
            | Assignment::NoMatch { .. }
            | Assignment::SliceCopy(_)
            | Assignment::SliceLoopCopy(_)
            | Assignment::SliceCastLoopCopy(_) => false,
        }
    }

    /// Destination paths that ended without a match, depth first.
    pub fn unmatched(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_unmatched(&mut out);
        out
    }

    fn collect_unmatched<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Assignment::NoMatch { lhs } => out.push(lhs),
            Assignment::Nested(nested) => {
                for child in &nested.children {
                    child.collect_unmatched(out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests;
