//! Handler table keyed by `(node, event kind)`.

use dropkit_core::alloc::HashMap;

use crate::event::DragEventKind;
use crate::tree::{NodeId, NodeRole, VisualTree};

/// A controller operation bound to a node event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragHandler {
    DragStart,
    DragEnd,
    Drag,
    ItemEnter,
    ItemLeave,
    ZoneEnter,
    ZoneLeave,
    ZoneOver,
    Drop,
}

const ITEM_HANDLERS: [(DragEventKind, DragHandler); 5] = [
    (DragEventKind::DragStart, DragHandler::DragStart),
    (DragEventKind::DragEnd, DragHandler::DragEnd),
    (DragEventKind::Drag, DragHandler::Drag),
    (DragEventKind::DragEnter, DragHandler::ItemEnter),
    (DragEventKind::DragLeave, DragHandler::ItemLeave),
];

const ZONE_HANDLERS: [(DragEventKind, DragHandler); 4] = [
    (DragEventKind::DragEnter, DragHandler::ZoneEnter),
    (DragEventKind::DragLeave, DragHandler::ZoneLeave),
    (DragEventKind::DragOver, DragHandler::ZoneOver),
    (DragEventKind::Drop, DragHandler::Drop),
];

/// Registered handlers per node and event kind.
///
/// A node that is both an item and a zone gets both sets; item handlers run
/// first.
#[derive(Debug, Default)]
pub struct EventBindings {
    table: HashMap<(NodeId, DragEventKind), Vec<DragHandler>>,
}

impl EventBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every item and zone currently in the tree.
    ///
    /// Nodes added afterwards stay unbound until they are bound explicitly
    /// or the table is rebuilt.
    pub fn bind(tree: &VisualTree) -> Self {
        let mut bindings = Self::new();
        for item in tree.nodes_with_role(NodeRole::DRAG_ITEM) {
            bindings.bind_item(item);
        }
        for zone in tree.nodes_with_role(NodeRole::DROP_ZONE) {
            bindings.bind_zone(zone);
        }
        tracing::debug!(entries = bindings.len(), "bound drag handlers");
        bindings
    }

    pub fn bind_item(&mut self, node: NodeId) {
        self.insert_all(node, &ITEM_HANDLERS);
    }

    pub fn bind_zone(&mut self, node: NodeId) {
        self.insert_all(node, &ZONE_HANDLERS);
    }

    fn insert_all(&mut self, node: NodeId, handlers: &[(DragEventKind, DragHandler)]) {
        for &(kind, handler) in handlers {
            let slot = self.table.entry((node, kind)).or_default();
            if !slot.contains(&handler) {
                slot.push(handler);
            }
        }
    }

    /// Handlers for an event on a node, in registration order.
    pub fn handlers(&self, node: NodeId, kind: DragEventKind) -> &[DragHandler] {
        self.table
            .get(&(node, kind))
            .map(|h| h.as_slice())
            .unwrap_or(&[])
    }

    /// Number of bound `(node, kind)` pairs.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_from_tree() {
        let mut tree = VisualTree::new();
        let zone = tree.add_node("zone", NodeRole::DROP_ZONE);
        let item = tree.add_node("item", NodeRole::DRAG_ITEM);
        let plain = tree.add_node("plain", NodeRole::empty());

        let bindings = EventBindings::bind(&tree);

        assert_eq!(bindings.len(), 9);
        assert_eq!(
            bindings.handlers(item, DragEventKind::DragEnter),
            &[DragHandler::ItemEnter]
        );
        assert_eq!(
            bindings.handlers(zone, DragEventKind::Drop),
            &[DragHandler::Drop]
        );
        assert!(bindings.handlers(item, DragEventKind::Drop).is_empty());
        assert!(bindings.handlers(plain, DragEventKind::DragEnter).is_empty());
    }

    #[test]
    fn test_dual_role_runs_item_first() {
        let mut tree = VisualTree::new();
        let node = tree.add_node("both", NodeRole::DRAG_ITEM | NodeRole::DROP_ZONE);

        let bindings = EventBindings::bind(&tree);

        assert_eq!(
            bindings.handlers(node, DragEventKind::DragEnter),
            &[DragHandler::ItemEnter, DragHandler::ZoneEnter]
        );
    }

    #[test]
    fn test_bind_twice_does_not_duplicate() {
        let mut bindings = EventBindings::new();
        bindings.bind_zone(NodeId(1));
        bindings.bind_zone(NodeId(1));
        assert_eq!(
            bindings.handlers(NodeId(1), DragEventKind::DragOver),
            &[DragHandler::ZoneOver]
        );
    }
}
