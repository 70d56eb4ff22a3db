//! A module providing builders for constructing trees and nodes.
//!
//! The `NodeBuilder` and `TreeBuilder` types enable building tree structures in a composable way.
//!

use std::marker::PhantomData;

use tracing::{debug, debug_span};

use crate::{node::Node, tree::Tree};

/// A builder for constructing children from a parent node.
///
/// The `NodeBuilder` type provides methods for adding child nodes to the current parent node.
/// It is designed to be used with the `TreeBuilder` type.
///
pub struct NodeBuilder<'a, Data, E> {
    node: &'a mut Node<Data>,
    _phantom: PhantomData<E>,
}

impl<'a, Data, E> NodeBuilder<'a, Data, E>
where
    Data: PartialEq,
{
    fn new(node: &'a mut Node<Data>) -> Self {
        Self {
            node,
            _phantom: PhantomData,
        }
    }

    /// Adds a child to the current node.
    ///
    /// # Arguments
    ///
    /// * `data`: The data to associate with the child node.
    /// * `f`: A closure that takes the child builder and adds its own children.
    pub fn child<F>(&mut self, data: Data, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, Data, E>) -> Result<(), E>,
    {
        let mut child = Node::new(data);

        let mut builder = NodeBuilder::new(&mut child);
        f(&mut builder)?;

        // Push the child to the parent node, subject to the duplicate rule
        self.node.add_child(child);

        Ok(())
    }

    pub fn node(&self) -> &Node<Data> {
        self.node
    }

    pub fn node_mut(&mut self) -> &mut Node<Data> {
        self.node
    }
}

/// A builder for constructing trees.
///
/// There is a `root` method on the builder to add the root node, which calls
/// the provided closure with a NodeBuilder that can be used to recursively build children of
/// the node. The closures expect a Result<(), E> to be returned, where E is your defined error
/// type. This allows errors within your closures to propagate.
///
/// # Examples
///
/// ```
/// type MyData = String;
/// type MyError = String;
///
/// use salix::TreeBuilder;
/// let builder = TreeBuilder::<MyData, MyError>::new();
/// let tree = builder
///     .root("Root".to_string(), |root| {
///         root.child("Leaf".to_string(), |_| Ok(()))
///     })
///     .unwrap()
///     .done();
/// assert!(tree.is_some());
/// ```
#[derive(Debug)]
pub struct TreeBuilder<Data, E> {
    root: Option<Node<Data>>,
    debug_span: tracing::Span,
    _phantom: PhantomData<E>,
}

impl<Data, E> TreeBuilder<Data, E>
where
    Data: PartialEq,
{
    /// Creates a new `TreeBuilder` instance.
    pub fn new() -> Self {
        let debug_span = debug_span!("TreeBuilder");
        debug_span.in_scope(|| debug!("Created new TreeBuilder"));

        Self {
            root: None,
            debug_span,
            _phantom: PhantomData,
        }
    }

    /// Adds the root node to the tree and returns the updated builder.
    ///
    /// # Arguments
    ///
    /// * `data`: The data to associate with the root node.
    /// * `f`: A closure that takes the root builder and adds its own children.
    ///
    /// # Panics
    ///
    /// Panics if a root node was already added.
    pub fn root<F>(mut self, data: Data, f: F) -> Result<Self, E>
    where
        F: FnOnce(&mut NodeBuilder<'_, Data, E>) -> Result<(), E>,
    {
        self.debug_span.in_scope(|| {
            if self.root.is_some() {
                panic!("Root node already exists");
            }

            let mut node = Node::new(data);
            let mut builder = NodeBuilder::new(&mut node);

            // Call the supplied closure with the NodeBuilder to add this node's children
            f(&mut builder)?;

            debug!("Added root");
            self.root = Some(node);
            Ok(())
        })?;
        Ok(self)
    }

    /// Returns the constructed tree when finished building it, or `None`
    /// when no root was added.
    pub fn done(self) -> Option<Tree<Data>> {
        self.debug_span.in_scope(|| {
            debug!("Finished building tree");
            self.root.map(Tree::from_node)
        })
    }
}

impl<Data, E> Default for TreeBuilder<Data, E>
where
    Data: PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[derive(Debug, PartialEq)]
    #[allow(unused)]
    enum MyError {
        Fail(String),
    }

    #[traced_test]
    #[test]
    fn test_builder() {
        let tree = TreeBuilder::<&str, MyError>::new()
            .root("foo", |foo| {
                foo.child("bar", |bar| bar.child("baz", |_| Ok(())))?;
                foo.child("hello", |_| Ok(()))?;

                Ok(())
            })
            .unwrap()
            .done()
            .unwrap();

        assert_eq!(tree.size(), 4);
        assert_eq!(tree.height(), 3);
        assert_eq!(
            tree.breadth_first(),
            vec![Some(&"foo"), Some(&"bar"), Some(&"hello"), Some(&"baz")]
        );
    }

    #[test]
    fn errors_propagate_out_of_closures() {
        let result = TreeBuilder::<&str, MyError>::new().root("foo", |foo| {
            foo.child("bar", |_| Err(MyError::Fail("nope".into())))?;
            foo.child("unreached", |_| Ok(()))
        });

        assert_eq!(result.unwrap_err(), MyError::Fail("nope".into()));
    }

    #[traced_test]
    #[test]
    fn duplicate_children_are_rejected_while_building() {
        let tree = TreeBuilder::<&str, MyError>::new()
            .root("foo", |foo| {
                foo.child("bar", |_| Ok(()))?;
                foo.child("bar", |_| Ok(()))?;
                Ok(())
            })
            .unwrap()
            .done()
            .unwrap();

        assert_eq!(tree.num_children(), 1);
    }

    #[test]
    fn done_without_root_is_none() {
        assert!(TreeBuilder::<&str, MyError>::new().done().is_none());
    }
}
