//! Slice matching.
//!
//! Strategy by element relationship:
//!
//! | elements                               | strategy            |
//! |----------------------------------------|---------------------|
//! | assignable, basic                      | `SliceCopy`         |
//! | assignable, not basic                  | `SliceLoopCopy`     |
//! | convertible, typecast enabled          | `SliceCastLoopCopy` |
//!
//! All three leave the destination nil when the source is nil.

use conv_options::MatchFlags;

use crate::builder::AssignmentBuilder;
use crate::{Assignment, NodeId, SliceAssignment};

impl AssignmentBuilder<'_> {
    /// Pick a slice strategy, or `None` when neither side is a slice or no
    /// strategy applies.
    pub(crate) fn match_slice(
        &mut self,
        dst: NodeId,
        src: NodeId,
        flags: MatchFlags,
    ) -> Option<Assignment> {
        let oracle = self.oracle;
        let dst_ty = self.tree.expr_type(dst);
        let src_ty = self.tree.expr_type(src);
        let dst_elem = oracle.slice_elem(dst_ty)?;
        let src_elem = oracle.slice_elem(src_ty)?;
        if self.tree.returns_error(src) {
            return None;
        }

        let assignable = oracle.is_assignable(src_elem, dst_elem);
        let castable = !assignable && flags.typecast() && oracle.is_convertible(src_elem, dst_elem);
        if !assignable && !castable {
            return None;
        }

        let slice_type = self.type_expr(dst_ty)?;
        let elem_cast = if castable {
            Some(self.type_expr(dst_elem)?)
        } else {
            None
        };
        let slice = SliceAssignment {
            lhs: self.tree.assign_expr(dst),
            rhs: self.tree.assign_expr(src),
            slice_type,
            elem_cast,
        };

        Some(if castable {
            Assignment::SliceCastLoopCopy(slice)
        } else if oracle.is_basic(dst_elem) {
            Assignment::SliceCopy(slice)
        } else {
            Assignment::SliceLoopCopy(slice)
        })
    }
}
