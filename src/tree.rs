use std::ops::{Deref, DerefMut};

use crate::{iterator::Values, node::Node};

/// A tree handle owning exactly one root [`Node`].
///
/// Every node operation is reachable through the tree via `Deref`; the
/// inherent methods below add the value-centric tree semantics. The root
/// node is created at construction and is never removed — only its value
/// can be cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<Data> {
    root: Node<Data>,
}

impl<Data> Default for Tree<Data> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Data> Tree<Data> {
    /// Create a tree whose root holds no value.
    pub fn new() -> Self {
        Self {
            root: Node::default(),
        }
    }

    /// Create a tree with a root value.
    pub fn with_root(value: Data) -> Self {
        Self {
            root: Node::new(value),
        }
    }

    /// Adopt an existing node as the root.
    pub fn from_node(root: Node<Data>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node<Data> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node<Data> {
        &mut self.root
    }

    /// The root's payload, if set.
    pub fn root_value(&self) -> Option<&Data> {
        self.root.value()
    }

    /// True iff the root holds no value and has no children. Emptiness is a
    /// value-level property: the root node itself always exists.
    pub fn is_empty(&self) -> bool {
        self.root.value().is_none() && self.root.is_leaf()
    }

    /// Iterate the tree's values in breadth-first order. Always yields
    /// exactly [`size`](Node::size) items.
    pub fn iter(&self) -> Values<'_, Data> {
        Values::new(&self.root)
    }
}

impl<Data> Tree<Data>
where
    Data: PartialEq,
{
    /// Append `value` as a new child directly under the root, under the
    /// duplicate rule of [`Node::add_child`]. Returns whether the tree
    /// changed.
    pub fn add(&mut self, value: Data) -> bool {
        self.root.add_value(value)
    }

    /// Remove `element` from the tree. A match on the root's value clears
    /// that value and reports success — the root node itself stays in
    /// place. Otherwise the first matching descendant is unlinked together
    /// with its subtree.
    pub fn remove(&mut self, element: &Data) -> bool {
        if self.root.value() == Some(element) {
            self.root.take_value();
            return true;
        }
        self.root.remove_value(element)
    }
}

impl<Data> Deref for Tree<Data> {
    type Target = Node<Data>;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl<Data> DerefMut for Tree<Data> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.root
    }
}
