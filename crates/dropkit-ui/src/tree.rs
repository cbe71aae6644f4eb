//! Visual tree holding draggable items and drop zones.
//!
//! Nodes are addressed by stable [`NodeId`]s. Every node keeps a link to its
//! parent, so finding an item's container never requires a tree scan.

use bitflags::bitflags;
use dropkit_core::alloc::HashSet;
use dropkit_core::profiling::profile_function;
use indexmap::IndexMap;

use crate::dirty::DirtyFlags;
use crate::style::{ClassNames, VisualState};

/// Node identifier in the visual tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

bitflags! {
    /// Which drag-and-drop class a node belongs to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeRole: u8 {
        /// Can be picked up and relocated.
        const DRAG_ITEM = 1 << 0;
        /// Accepts items as children.
        const DROP_ZONE = 1 << 1;
    }
}

/// Errors raised by tree mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Node not found in tree.
    NodeNotFound(NodeId),
    /// The reference node is not a child of the given parent.
    NotAChild { parent: NodeId, child: NodeId },
    /// Moving the node would make it its own ancestor.
    WouldCycle { node: NodeId, new_parent: NodeId },
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::NodeNotFound(id) => write!(f, "Node {:?} not found", id),
            TreeError::NotAChild { parent, child } => {
                write!(f, "Node {:?} is not a child of {:?}", child, parent)
            }
            TreeError::WouldCycle { node, new_parent } => write!(
                f,
                "Cannot move {:?} under {:?}: it would become its own ancestor",
                node, new_parent
            ),
        }
    }
}

impl std::error::Error for TreeError {}

/// Result type for tree mutations.
pub type TreeResult<T> = Result<T, TreeError>;

/// A node in the visual tree.
#[derive(Debug, Clone)]
pub struct VisualNode {
    pub label: String,
    pub role: NodeRole,
    pub visual: VisualState,
    pub dirty_flags: DirtyFlags,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Arena of visual nodes with ordered children.
#[derive(Debug, Default)]
pub struct VisualTree {
    nodes: IndexMap<NodeId, VisualNode>,
    root: Option<NodeId>,
    next_id: usize,
    /// Nodes with pending dirty flags
    dirty_nodes: HashSet<NodeId>,
}

impl VisualTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached node and return its id.
    pub fn add_node(&mut self, label: impl Into<String>, role: NodeRole) -> NodeId {
        let node_id = NodeId(self.next_id);
        self.next_id += 1;

        self.nodes.insert(
            node_id,
            VisualNode {
                label: label.into(),
                role,
                visual: VisualState::empty(),
                dirty_flags: DirtyFlags::NONE,
                parent: None,
                children: Vec::new(),
            },
        );

        node_id
    }

    /// Set the root node.
    pub fn set_root(&mut self, node_id: NodeId) {
        self.root = Some(node_id);
    }

    /// Get the root node.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.dirty_nodes.clear();
        self.root = None;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Get a node by id.
    pub fn get(&self, node_id: NodeId) -> Option<&VisualNode> {
        self.nodes.get(&node_id)
    }

    /// Iterate over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &VisualNode)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    pub fn label(&self, node_id: NodeId) -> Option<&str> {
        self.nodes.get(&node_id).map(|n| n.label.as_str())
    }

    /// Find the first node carrying `label`.
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.label == label)
            .map(|(id, _)| *id)
    }

    pub fn role(&self, node_id: NodeId) -> NodeRole {
        self.nodes
            .get(&node_id)
            .map(|n| n.role)
            .unwrap_or_default()
    }

    /// All nodes with the given role, in creation order.
    pub fn nodes_with_role(&self, role: NodeRole) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .filter(move |(_, node)| node.role.contains(role))
            .map(|(id, _)| *id)
    }

    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes.get(&node_id).and_then(|n| n.parent)
    }

    /// Ordered children of a node. Empty for unknown nodes.
    pub fn children(&self, node_id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node_id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Position of a node among its parent's children.
    pub fn index_in_parent(&self, node_id: NodeId) -> Option<usize> {
        let parent = self.parent(node_id)?;
        self.children(parent).iter().position(|&c| c == node_id)
    }

    /// The sibling following `node_id`, if any.
    pub fn next_sibling(&self, node_id: NodeId) -> Option<NodeId> {
        let parent = self.parent(node_id)?;
        let index = self.index_in_parent(node_id)?;
        self.children(parent).get(index + 1).copied()
    }

    /// Returns true if `ancestor` is `node_id` or one of its ancestors.
    pub fn is_ancestor_of(&self, ancestor: NodeId, node_id: NodeId) -> bool {
        let mut current = Some(node_id);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Path from `node_id` up to the topmost ancestor, inclusive.
    pub fn ancestors_inclusive(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.contains(node_id).then_some(node_id);
        while let Some(id) = current {
            path.push(id);
            current = self.parent(id);
        }
        path
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` into `parent` before `reference`, or at the end when
    /// `reference` is `None`.
    ///
    /// The child is detached from its current parent first, so this both
    /// reorders within a container and moves across containers.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> TreeResult<()> {
        profile_function!();

        if !self.contains(parent) {
            return Err(TreeError::NodeNotFound(parent));
        }
        if !self.contains(child) {
            return Err(TreeError::NodeNotFound(child));
        }
        if self.is_ancestor_of(child, parent) {
            return Err(TreeError::WouldCycle {
                node: child,
                new_parent: parent,
            });
        }

        // Inserting a node before itself keeps it where it is.
        let reference = match reference {
            Some(r) if r == child => self.next_sibling(child),
            other => other,
        };

        if let Some(r) = reference {
            if !self.contains(r) {
                return Err(TreeError::NodeNotFound(r));
            }
            if self.parent(r) != Some(parent) {
                return Err(TreeError::NotAChild { parent, child: r });
            }
        }

        if let Some(old_index) = self
            .index_in_parent(child)
            .filter(|_| self.parent(child) == Some(parent))
        {
            let target = match reference {
                Some(r) => self.index_in_parent(r).unwrap_or(old_index),
                None => self.children(parent).len(),
            };
            if target == old_index || target == old_index + 1 {
                return Ok(());
            }
        }

        self.detach(child)?;

        let index = match reference {
            Some(r) => self
                .index_in_parent(r)
                .ok_or(TreeError::NotAChild { parent, child: r })?,
            None => self.children(parent).len(),
        };

        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.insert(index, child);
        }
        if let Some(child_node) = self.nodes.get_mut(&child) {
            child_node.parent = Some(parent);
        }
        self.mark_dirty_flags(parent, DirtyFlags::CHILDREN_ORDER);

        Ok(())
    }

    /// Remove `child` from its parent and return the former parent.
    pub fn detach(&mut self, child: NodeId) -> TreeResult<Option<NodeId>> {
        let old_parent = self
            .nodes
            .get_mut(&child)
            .ok_or(TreeError::NodeNotFound(child))?
            .parent
            .take();

        if let Some(parent) = old_parent {
            if let Some(parent_node) = self.nodes.get_mut(&parent) {
                parent_node.children.retain(|&c| c != child);
            }
            self.mark_dirty_flags(parent, DirtyFlags::CHILDREN_ORDER);
        }

        Ok(old_parent)
    }

    pub fn visual(&self, node_id: NodeId) -> VisualState {
        self.nodes
            .get(&node_id)
            .map(|n| n.visual)
            .unwrap_or_default()
    }

    /// Toggle visual state bits on a node.
    ///
    /// Returns true if the node's state changed.
    pub fn set_visual(&mut self, node_id: NodeId, state: VisualState, enabled: bool) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return false;
        };

        let before = node.visual;
        node.visual.set(state, enabled);
        if node.visual == before {
            return false;
        }

        self.mark_dirty_flags(node_id, DirtyFlags::STYLE);
        true
    }

    /// Style classes of a node for the presentation layer.
    pub fn class_names<'a>(&self, node_id: NodeId, names: &'a ClassNames) -> Vec<&'a str> {
        names.class_list(self.role(node_id), self.visual(node_id))
    }

    /// Mark a node with dirty flags.
    pub fn mark_dirty_flags(&mut self, node_id: NodeId, flags: DirtyFlags) {
        if flags.is_empty() {
            return;
        }
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.dirty_flags |= flags;
            self.dirty_nodes.insert(node_id);
        }
    }

    /// Check if any node has pending dirty flags.
    pub fn is_dirty(&self) -> bool {
        !self.dirty_nodes.is_empty()
    }

    /// Drain the pending dirty flags, ordered by node id.
    pub fn take_dirty(&mut self) -> Vec<(NodeId, DirtyFlags)> {
        let mut drained: Vec<(NodeId, DirtyFlags)> = self
            .dirty_nodes
            .drain()
            .filter_map(|id| {
                self.nodes
                    .get_mut(&id)
                    .map(|node| (id, std::mem::take(&mut node.dirty_flags)))
            })
            .collect();
        drained.sort_by_key(|(id, _)| *id);
        drained
    }
}
