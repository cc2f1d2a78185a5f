//! Field matching engine.
//!
//! Produces exactly one descriptor for a destination field. Policies run in
//! a fixed order and the first one that commits wins:
//!
//! 1. skip pattern
//! 2. explicit converter
//! 3. explicit field mapping, then explicit literal
//! 4. getter with a matching name (if enabled)
//! 5. field with a matching name
//! 6. `NoMatch`
//!
//! Structural candidates (4 and 5) only consider the first matching name
//! and try slice copy, then castability, then nested recursion.

use conv_options::{ConverterDecl, FieldMapping, MatchFlags, MatchRule};
use tracing::{debug, info, warn};

use crate::builder::AssignmentBuilder;
use crate::{Assignment, NodeId};

impl AssignmentBuilder<'_> {
    pub(crate) fn match_field(&mut self, dst: NodeId, src: NodeId) -> Assignment {
        let options = self.options;
        let path = self.tree.matcher_expr(dst);
        let flags = options.flags_for(&path);
        let exact_case = flags.exact_case();

        if let Some(skip) = options.skip_for(&path, exact_case) {
            info!(dst = %path, pattern = skip.pattern.as_str(), pos = %skip.pos, "skipped");
            return Assignment::Skip {
                lhs: self.tree.assign_expr(dst),
            };
        }
        if let Some(conv) = options.converter_for(&path, exact_case) {
            return self.match_converter(dst, conv, flags);
        }
        if let Some(mapping) = options.mapping_for(&path, exact_case) {
            return self.match_mapping(dst, mapping, flags);
        }
        if let Some(literal) = options.literal_for(&path, exact_case) {
            debug!(dst = %path, value = %literal.value, "literal");
            return Assignment::Simple {
                lhs: self.tree.assign_expr(dst),
                rhs: literal.value.clone(),
                returns_error: false,
            };
        }

        if options.rule == MatchRule::Name {
            let name = self.tree.name(dst).to_string();
            if flags.getter() {
                if let Some(getter) = self.getter_candidate(src, &name, exact_case) {
                    if let Some(found) = self.match_candidate(dst, getter, flags) {
                        return found;
                    }
                }
            }
            if let Some(field) = self.field_candidate(src, &name, exact_case) {
                if let Some(found) = self.match_candidate(dst, field, flags) {
                    return found;
                }
            }
        }

        self.no_match(dst, "no source candidate")
    }

    /// Slice copy, castability, then nested recursion for one candidate.
    fn match_candidate(
        &mut self,
        dst: NodeId,
        src: NodeId,
        flags: MatchFlags,
    ) -> Option<Assignment> {
        if let Some(slice) = self.match_slice(dst, src, flags) {
            debug!(dst = %self.tree.matcher_expr(dst), src = %self.tree.matcher_expr(src), "slice");
            return Some(slice);
        }

        let dst_ty = self.tree.expr_type(dst);
        if let Some(value) = self.try_cast(src, dst_ty, flags) {
            return Some(self.simple(dst, value));
        }

        let oracle = self.oracle;
        let src_ty = self.tree.expr_type(src);
        if oracle.is_struct(oracle.deref(dst_ty))
            && oracle.is_struct(oracle.deref(src_ty))
            && !self.tree.returns_error(src)
        {
            return self.build_nested(dst, src);
        }
        None
    }

    fn match_converter(
        &mut self,
        dst: NodeId,
        conv: &ConverterDecl,
        flags: MatchFlags,
    ) -> Assignment {
        let Some(func) = self.converters.get(&conv.func).cloned() else {
            return self.no_match(dst, "converter was not resolved");
        };
        let Some(arg) = self.resolve_path(&conv.src, flags.exact_case()) else {
            warn!(src = %conv.src, pos = %conv.pos, "converter source not found");
            return self.no_match(dst, "converter source not found");
        };
        if self.tree.returns_error(arg) {
            return self.no_match(dst, "converter argument returns an error");
        }

        let oracle = self.oracle;
        let arg_ty = self.tree.expr_type(arg);
        let by_ref = if oracle.is_assignable(arg_ty, func.arg) {
            false
        } else if oracle.is_pointer(func.arg)
            && !self.tree.is_call(arg)
            && oracle.is_assignable(arg_ty, oracle.deref(func.arg))
        {
            true
        } else {
            warn!(
                src = %conv.src,
                func = %func.name,
                arg = %oracle.display(arg_ty),
                param = %oracle.display(func.arg),
                pos = %conv.pos,
                "converter argument type mismatch"
            );
            return self.no_match(dst, "converter argument type mismatch");
        };

        let package = func.package.clone();
        let wrapped = self.tree.converter(arg, func, by_ref);
        let dst_ty = self.tree.expr_type(dst);
        match self.try_cast(wrapped, dst_ty, flags) {
            Some(value) => {
                self.packages.insert(package);
                self.simple(dst, value)
            }
            None => self.no_match(dst, "converter result does not fit"),
        }
    }

    fn match_mapping(
        &mut self,
        dst: NodeId,
        mapping: &FieldMapping,
        flags: MatchFlags,
    ) -> Assignment {
        let Some(src) = self.resolve_path(&mapping.src, flags.exact_case()) else {
            warn!(src = %mapping.src, pos = %mapping.pos, "mapped source not found");
            return self.no_match(dst, "mapped source not found");
        };
        let dst_ty = self.tree.expr_type(dst);
        match self.try_cast(src, dst_ty, flags) {
            Some(value) => self.simple(dst, value),
            None => self.no_match(dst, "mapped source does not fit"),
        }
    }

    fn simple(&self, dst: NodeId, value: NodeId) -> Assignment {
        debug!(dst = %self.tree.matcher_expr(dst), rhs = %self.tree.assign_expr(value), "matched");
        Assignment::Simple {
            lhs: self.tree.assign_expr(dst),
            rhs: self.tree.assign_expr(value),
            returns_error: self.tree.returns_error(value),
        }
    }

    fn no_match(&self, dst: NodeId, reason: &str) -> Assignment {
        warn!(dst = %self.tree.matcher_expr(dst), reason, "no match");
        Assignment::NoMatch {
            lhs: self.tree.assign_expr(dst),
        }
    }
}
