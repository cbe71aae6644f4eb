//! Declarative builder API for constructing visual trees.

use crate::tree::{NodeId, NodeRole, VisualTree};

impl VisualTree {
    /// Replace the tree contents with a new root and build beneath it.
    ///
    /// ```
    /// use dropkit_ui::tree::VisualTree;
    ///
    /// let mut tree = VisualTree::new();
    /// tree.build("board", |root| {
    ///     root.zone("todo", |zone| {
    ///         zone.item("write tests");
    ///         zone.item("ship");
    ///     });
    ///     root.zone("done", |_| {});
    /// });
    ///
    /// let todo = tree.find("todo").unwrap();
    /// assert_eq!(tree.children(todo).len(), 2);
    /// ```
    pub fn build<F>(&mut self, root_label: impl Into<String>, build: F) -> NodeId
    where
        F: FnOnce(&mut TreeBuilder<'_>),
    {
        self.clear();
        let root = self.add_node(root_label, NodeRole::empty());
        self.set_root(root);
        build(&mut TreeBuilder { tree: self, parent: root });
        root
    }
}

/// Adds children to one parent node.
pub struct TreeBuilder<'a> {
    tree: &'a mut VisualTree,
    parent: NodeId,
}

impl TreeBuilder<'_> {
    /// Add a drop zone and build its children.
    pub fn zone<F>(&mut self, label: impl Into<String>, build: F) -> NodeId
    where
        F: FnOnce(&mut TreeBuilder<'_>),
    {
        self.nested(label, NodeRole::DROP_ZONE, build)
    }

    /// Add a draggable item.
    pub fn item(&mut self, label: impl Into<String>) -> NodeId {
        self.add(label, NodeRole::DRAG_ITEM)
    }

    /// Add a draggable item with nested content.
    pub fn item_with<F>(&mut self, label: impl Into<String>, build: F) -> NodeId
    where
        F: FnOnce(&mut TreeBuilder<'_>),
    {
        self.nested(label, NodeRole::DRAG_ITEM, build)
    }

    /// Add a plain container and build its children.
    pub fn container<F>(&mut self, label: impl Into<String>, build: F) -> NodeId
    where
        F: FnOnce(&mut TreeBuilder<'_>),
    {
        self.nested(label, NodeRole::empty(), build)
    }

    /// Add a plain leaf node.
    pub fn node(&mut self, label: impl Into<String>) -> NodeId {
        self.add(label, NodeRole::empty())
    }

    fn nested<F>(&mut self, label: impl Into<String>, role: NodeRole, build: F) -> NodeId
    where
        F: FnOnce(&mut TreeBuilder<'_>),
    {
        let node_id = self.add(label, role);
        build(&mut TreeBuilder {
            tree: &mut *self.tree,
            parent: node_id,
        });
        node_id
    }

    fn add(&mut self, label: impl Into<String>, role: NodeRole) -> NodeId {
        let node_id = self.tree.add_node(label, role);
        if let Err(err) = self.tree.append(self.parent, node_id) {
            tracing::error!(%err, "failed to attach built node");
        }
        node_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_board() {
        let mut tree = VisualTree::new();
        let root = tree.build("board", |root| {
            root.zone("todo", |zone| {
                zone.item("A");
                zone.item_with("B", |b| {
                    b.node("B title");
                });
            });
            root.container("sidebar", |side| {
                side.zone("done", |_| {});
            });
        });

        assert_eq!(tree.root(), Some(root));
        let todo = tree.find("todo").unwrap();
        let done = tree.find("done").unwrap();
        let b = tree.find("B").unwrap();

        assert_eq!(tree.role(todo), NodeRole::DROP_ZONE);
        assert_eq!(tree.role(b), NodeRole::DRAG_ITEM);
        assert_eq!(tree.children(todo).len(), 2);
        assert_eq!(tree.children(b).len(), 1);
        assert_eq!(tree.parent(done), tree.find("sidebar"));
    }

    #[test]
    fn test_build_replaces_contents() {
        let mut tree = VisualTree::new();
        tree.build("first", |root| {
            root.item("old");
        });
        tree.build("second", |root| {
            root.item("new");
        });

        assert_eq!(tree.find("old"), None);
        assert!(tree.find("new").is_some());
        assert_eq!(tree.len(), 2);
    }
}
