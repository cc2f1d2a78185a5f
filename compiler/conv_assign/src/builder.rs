//! Assignment tree builder.
//!
//! Walks the destination struct shape field by field and asks the matcher
//! for one descriptor per accessible field. Nested structs recurse back
//! into [`AssignmentBuilder::build_struct`], guarded against struct types
//! that already appear among their own ancestors.

use std::collections::BTreeSet;

use conv_types::{Idx, TypeOracle};
use conv_options::Options;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::{Assignment, ConverterFn, CopierSet, NestedAssignment, NodeId, NodeTree};

/// State for one `build_assignments` call.
pub(crate) struct AssignmentBuilder<'a> {
    pub(crate) oracle: &'a dyn TypeOracle,
    pub(crate) options: &'a Options,
    /// Import path of the package the code is generated into.
    pub(crate) package: &'a str,
    /// Converters resolved up front, keyed by the reference as written.
    pub(crate) converters: FxHashMap<String, ConverterFn>,
    pub(crate) tree: NodeTree,
    /// Top-level source root; explicit paths resolve from here.
    pub(crate) src_root: NodeId,
    /// Struct types currently being filled, outermost first.
    dst_chain: Vec<Idx>,
    src_chain: Vec<Idx>,
    pub(crate) copiers: CopierSet,
    pub(crate) packages: BTreeSet<String>,
}

impl<'a> AssignmentBuilder<'a> {
    pub(crate) fn new(
        oracle: &'a dyn TypeOracle,
        options: &'a Options,
        package: &'a str,
        converters: FxHashMap<String, ConverterFn>,
        src_name: &str,
        src_ty: Idx,
    ) -> Self {
        let mut tree = NodeTree::new();
        let src_root = tree.root(src_name, src_ty);
        AssignmentBuilder {
            oracle,
            options,
            package,
            converters,
            tree,
            src_root,
            dst_chain: Vec::new(),
            src_chain: Vec::new(),
            copiers: CopierSet::new(),
            packages: BTreeSet::new(),
        }
    }

    /// Build the descriptors for a root pair.
    ///
    /// Roots whose dereferenced types are not structs produce a single
    /// `NoMatch` for the destination root.
    pub(crate) fn build_root(&mut self, dst_name: &str, dst_ty: Idx) -> Vec<Assignment> {
        let dst_root = self.tree.root(dst_name, dst_ty);
        let src_root = self.src_root;
        let dst_struct = self.oracle.deref(dst_ty);
        let src_struct = self.oracle.deref(self.tree.expr_type(src_root));

        if !self.oracle.is_struct(dst_struct) || !self.oracle.is_struct(src_struct) {
            warn!(
                dst = %self.oracle.display(dst_ty),
                src = %self.oracle.display(self.tree.expr_type(src_root)),
                "root types are not structs"
            );
            return vec![Assignment::NoMatch {
                lhs: dst_name.to_string(),
            }];
        }

        self.enter(dst_struct, src_struct);
        let out = self.build_struct(dst_root, src_root);
        self.leave();
        out
    }

    /// One descriptor per accessible destination field, in declaration order.
    pub(crate) fn build_struct(&mut self, dst: NodeId, src: NodeId) -> Vec<Assignment> {
        let oracle = self.oracle;
        let dst_struct = oracle.deref(self.tree.expr_type(dst));
        let mut out = Vec::new();
        for field in oracle.fields(dst_struct) {
            if !self.is_accessible(&field.name, dst) {
                continue;
            }
            let leaf = self.tree.field(dst, field.name.as_str(), field.ty);
            out.push(self.match_field(leaf, src));
        }
        out
    }

    /// Recurse into a struct-shaped destination from a struct-shaped source.
    ///
    /// Returns `None` when recursion is refused or yields nothing effective,
    /// so the caller can fall through.
    #[tracing::instrument(level = "trace", skip(self))]
    pub(crate) fn build_nested(&mut self, dst: NodeId, src: NodeId) -> Option<Assignment> {
        let oracle = self.oracle;
        let dst_ty = self.tree.expr_type(dst);
        let src_ty = self.tree.expr_type(src);
        let dst_struct = oracle.deref(dst_ty);
        let src_struct = oracle.deref(src_ty);

        if self.dst_chain.contains(&dst_struct) || self.src_chain.contains(&src_struct) {
            debug!(
                dst = %self.tree.matcher_expr(dst),
                ty = %oracle.display(dst_struct),
                "recursive struct, not descending"
            );
            return None;
        }

        let init = if oracle.is_pointer(dst_ty) {
            let Some(spelled) = self.type_expr(dst_struct) else {
                warn!(
                    dst = %self.tree.matcher_expr(dst),
                    ty = %oracle.display(dst_struct),
                    "cannot allocate anonymous struct"
                );
                return None;
            };
            Some(format!("&{spelled}{{}}"))
        } else {
            None
        };

        self.enter(dst_struct, src_struct);
        let children = self.build_struct(dst, src);
        self.leave();

        if !children.iter().any(Assignment::is_effective) {
            return None;
        }

        let guard = self
            .tree
            .obj_nullable(src, oracle)
            .then(|| self.tree.assign_expr(src));
        Some(Assignment::Nested(NestedAssignment {
            lhs: self.tree.assign_expr(dst),
            init,
            guard,
            children,
        }))
    }

    fn enter(&mut self, dst_struct: Idx, src_struct: Idx) {
        self.copiers.register(dst_struct, src_struct);
        self.dst_chain.push(dst_struct);
        self.src_chain.push(src_struct);
    }

    fn leave(&mut self) {
        self.dst_chain.pop();
        self.src_chain.pop();
    }

    /// Spell `ty` in the target package, noting any imports it needs.
    pub(crate) fn type_expr(&mut self, ty: Idx) -> Option<String> {
        let spelled = self.oracle.type_expr(ty, self.package)?;
        self.oracle.collect_packages(ty, &mut self.packages);
        Some(spelled)
    }
}
