//! Castability: fitting a source value to a destination type.
//!
//! Tried in order: plain assignment, `String()` conversion, explicit
//! typecast. Values that also return an error are never wrapped, so only
//! plain assignment applies to them.

use conv_options::MatchFlags;
use conv_types::Idx;
use tracing::warn;

use crate::builder::AssignmentBuilder;
use crate::NodeId;

impl AssignmentBuilder<'_> {
    /// A node whose value can be assigned to `dst_ty`, if one exists.
    pub(crate) fn try_cast(
        &mut self,
        src: NodeId,
        dst_ty: Idx,
        flags: MatchFlags,
    ) -> Option<NodeId> {
        let oracle = self.oracle;
        let src_ty = self.tree.expr_type(src);

        if oracle.is_assignable(src_ty, dst_ty) {
            return Some(src);
        }
        if self.tree.returns_error(src) {
            return None;
        }

        if flags.stringer() && oracle.implements_stringer(src_ty) {
            if oracle.is_assignable(Idx::STRING, dst_ty) {
                return Some(self.tree.stringer(src));
            }
            if flags.typecast() && oracle.is_convertible(Idx::STRING, dst_ty) {
                if let Some(spelled) = self.type_expr(dst_ty) {
                    let text = self.tree.stringer(src);
                    return Some(self.tree.typecast(text, dst_ty, spelled));
                }
            }
        }

        if flags.typecast() && oracle.is_convertible(src_ty, dst_ty) {
            match self.type_expr(dst_ty) {
                Some(spelled) => return Some(self.tree.typecast(src, dst_ty, spelled)),
                None => warn!(
                    src = %self.tree.matcher_expr(src),
                    ty = %oracle.display(dst_ty),
                    "typecast unavailable: destination type has no spelling"
                ),
            }
        }
        None
    }
}
