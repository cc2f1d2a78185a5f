//! Source-side lookups: structural candidates and explicit paths.

use conv_options::names_match;
use conv_types::is_exported;

use crate::builder::AssignmentBuilder;
use crate::NodeId;

impl AssignmentBuilder<'_> {
    /// A member of the struct behind `node` is visible if it is exported or
    /// the struct belongs to the package being generated into.
    pub(crate) fn is_accessible(&self, name: &str, node: NodeId) -> bool {
        is_exported(name) || self.is_local(node)
    }

    /// Whether the struct behind `node` belongs to the target package.
    ///
    /// Anonymous structs have no package of their own and belong to the
    /// struct whose member they are.
    fn is_local(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            let ty = self.oracle.deref(self.tree.expr_type(id));
            if let Some(owner) = self.oracle.package_of(ty) {
                return owner == self.package;
            }
            current = self.tree.parent(id);
        }
        false
    }

    /// First getter on `src` whose name matches `name`.
    pub(crate) fn getter_candidate(
        &mut self,
        src: NodeId,
        name: &str,
        exact_case: bool,
    ) -> Option<NodeId> {
        let oracle = self.oracle;
        let src_ty = self.tree.expr_type(src);
        let (method, ty, returns_error) = oracle.methods(src_ty).iter().find_map(|method| {
            if !names_match(&method.name, name, exact_case)
                || !self.is_accessible(&method.name, src)
            {
                return None;
            }
            let (ty, returns_error) = method.getter_result()?;
            Some((method.name.as_str(), ty, returns_error))
        })?;
        Some(self.tree.method(src, method, ty, returns_error))
    }

    /// First field of `src` whose name matches `name`.
    pub(crate) fn field_candidate(
        &mut self,
        src: NodeId,
        name: &str,
        exact_case: bool,
    ) -> Option<NodeId> {
        let oracle = self.oracle;
        let owner = oracle.deref(self.tree.expr_type(src));
        let field = oracle.fields(owner).iter().find(|field| {
            names_match(&field.name, name, exact_case) && self.is_accessible(&field.name, src)
        })?;
        Some(self.tree.field(src, field.name.as_str(), field.ty))
    }

    /// Resolve a dotted path such as `Profile.Name()` from the source root.
    ///
    /// Segments ending in `()` name getters, others name fields. A getter
    /// that also returns an error may only be the last segment.
    pub(crate) fn resolve_path(&mut self, path: &str, exact_case: bool) -> Option<NodeId> {
        let mut node = self.src_root;
        for segment in path.split('.') {
            if segment.is_empty() || self.tree.returns_error(node) {
                return None;
            }
            node = match segment.strip_suffix("()") {
                Some(method) => self.getter_candidate(node, method, exact_case)?,
                None => self.field_candidate(node, segment, exact_case)?,
            };
        }
        Some(node)
    }
}
