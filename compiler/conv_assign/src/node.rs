//! Expression node tree.
//!
//! Every addressable value the engine talks about (`src`, `src.Profile`,
//! `src.Profile.Name()`, `toStatus(src.Status)`, ...) is a [`Node`] in a
//! build-scoped [`NodeTree`]. Nodes point backwards at their parent (or at
//! the node they wrap), so a deep access path is stored once and shared by
//! every leaf below it.
//!
//! # Invariants
//!
//! - A parent is always pushed before its children, so every `NodeId` a
//!   node refers to is smaller than its own. Chains are finite and acyclic
//!   by construction.
//! - Nodes are never mutated after being pushed.
//! - Wrapping nodes (converter, typecast, stringer) share the matcher
//!   expression of the node they wrap.

use conv_types::Idx;

/// Index of a node inside its [`NodeTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A resolved converter function.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConverterFn {
    /// Call spelling inside the target package, e.g. `toStatus` or `conv.ToStatus`.
    pub name: String,
    /// Import path of the declaring package.
    pub package: String,
    pub arg: Idx,
    pub ret: Idx,
    pub returns_error: bool,
}

/// One addressable sub-expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// A top-level variable (`src`, `dst`).
    Root { name: String, ty: Idx },
    /// `parent.name`
    Field {
        parent: NodeId,
        name: String,
        ty: Idx,
    },
    /// `parent.name()`, optionally also returning an error.
    Method {
        parent: NodeId,
        name: String,
        ty: Idx,
        returns_error: bool,
    },
    /// `func(inner)` or `func(&inner)`.
    Converter {
        inner: NodeId,
        func: ConverterFn,
        by_ref: bool,
    },
    /// `T(inner)`
    Typecast {
        inner: NodeId,
        target: Idx,
        type_expr: String,
    },
    /// `inner.String()`
    Stringer { inner: NodeId },
}

/// Arena of nodes for one build.
#[derive(Clone, Debug, Default)]
pub struct NodeTree {
    nodes: Vec<Node>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: Node) -> NodeId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a single build never creates u32::MAX nodes"
        )]
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // ── Construction ────────────────────────────────────────────────

    pub fn root(&mut self, name: impl Into<String>, ty: Idx) -> NodeId {
        self.push(Node::Root {
            name: name.into(),
            ty,
        })
    }

    pub fn field(&mut self, parent: NodeId, name: impl Into<String>, ty: Idx) -> NodeId {
        self.push(Node::Field {
            parent,
            name: name.into(),
            ty,
        })
    }

    pub fn method(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        ty: Idx,
        returns_error: bool,
    ) -> NodeId {
        self.push(Node::Method {
            parent,
            name: name.into(),
            ty,
            returns_error,
        })
    }

    pub fn converter(&mut self, inner: NodeId, func: ConverterFn, by_ref: bool) -> NodeId {
        self.push(Node::Converter {
            inner,
            func,
            by_ref,
        })
    }

    pub fn typecast(&mut self, inner: NodeId, target: Idx, type_expr: String) -> NodeId {
        self.push(Node::Typecast {
            inner,
            target,
            type_expr,
        })
    }

    pub fn stringer(&mut self, inner: NodeId) -> NodeId {
        self.push(Node::Stringer { inner })
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// # Panics
    /// Panics if `id` was not created by this tree.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The structural parent of a field or method node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        match self.get(id) {
            Node::Field { parent, .. } | Node::Method { parent, .. } => Some(*parent),
            Node::Root { .. }
            | Node::Converter { .. }
            | Node::Typecast { .. }
            | Node::Stringer { .. } => None,
        }
    }

    /// The field or method name of a node, looking through wrappers.
    pub fn name(&self, id: NodeId) -> &str {
        match self.get(id) {
            Node::Root { name, .. } | Node::Field { name, .. } | Node::Method { name, .. } => name,
            Node::Converter { inner, .. }
            | Node::Typecast { inner, .. }
            | Node::Stringer { inner } => self.name(*inner),
        }
    }

    /// Type of the value the expression evaluates to.
    pub fn expr_type(&self, id: NodeId) -> Idx {
        match self.get(id) {
            Node::Root { ty, .. } | Node::Field { ty, .. } | Node::Method { ty, .. } => *ty,
            Node::Converter { func, .. } => func.ret,
            Node::Typecast { target, .. } => *target,
            Node::Stringer { .. } => Idx::STRING,
        }
    }

    /// Whether evaluating the expression also yields an error value.
    pub fn returns_error(&self, id: NodeId) -> bool {
        match self.get(id) {
            Node::Method { returns_error, .. } => *returns_error,
            Node::Converter { func, .. } => func.returns_error,
            Node::Root { .. }
            | Node::Field { .. }
            | Node::Typecast { .. }
            | Node::Stringer { .. } => false,
        }
    }

    /// Whether the expression is a call whose result is not addressable.
    pub fn is_call(&self, id: NodeId) -> bool {
        matches!(
            self.get(id),
            Node::Method { .. } | Node::Converter { .. } | Node::Stringer { .. }
        )
    }

    /// Whether the value may be nil and needs a guard before member access.
    pub fn obj_nullable(&self, id: NodeId, oracle: &dyn conv_types::TypeOracle) -> bool {
        oracle.is_pointer(self.expr_type(id))
    }

    /// Full source expression, starting at the root variable.
    pub fn assign_expr(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_assign_expr(id, &mut out);
        out
    }

    fn write_assign_expr(&self, id: NodeId, out: &mut String) {
        match self.get(id) {
            Node::Root { name, .. } => out.push_str(name),
            Node::Field { parent, name, .. } => {
                self.write_assign_expr(*parent, out);
                out.push('.');
                out.push_str(name);
            }
            Node::Method { parent, name, .. } => {
                self.write_assign_expr(*parent, out);
                out.push('.');
                out.push_str(name);
                out.push_str("()");
            }
            Node::Converter {
                inner,
                func,
                by_ref,
            } => {
                out.push_str(&func.name);
                out.push('(');
                if *by_ref {
                    out.push('&');
                }
                self.write_assign_expr(*inner, out);
                out.push(')');
            }
            Node::Typecast {
                inner, type_expr, ..
            } => {
                // `*T(x)` would parse as a dereference.
                if type_expr.starts_with('*') {
                    out.push('(');
                    out.push_str(type_expr);
                    out.push(')');
                } else {
                    out.push_str(type_expr);
                }
                out.push('(');
                self.write_assign_expr(*inner, out);
                out.push(')');
            }
            Node::Stringer { inner } => {
                self.write_assign_expr(*inner, out);
                out.push_str(".String()");
            }
        }
    }

    /// Path used to match directives: the access chain without the root
    /// variable. The root itself has an empty matcher expression.
    pub fn matcher_expr(&self, id: NodeId) -> String {
        match self.get(id) {
            Node::Root { .. } => String::new(),
            Node::Field { parent, name, .. } => join_path(self.matcher_expr(*parent), name),
            Node::Method { parent, name, .. } => {
                join_path(self.matcher_expr(*parent), &format!("{name}()"))
            }
            Node::Converter { inner, .. }
            | Node::Typecast { inner, .. }
            | Node::Stringer { inner } => self.matcher_expr(*inner),
        }
    }
}

fn join_path(mut prefix: String, segment: &str) -> String {
    if !prefix.is_empty() {
        prefix.push('.');
    }
    prefix.push_str(segment);
    prefix
}
