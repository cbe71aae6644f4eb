//! Owns the tree, the controller and the handler table, and routes host
//! events through them.

use dropkit_core::profiling::profile_function;

use crate::bindings::EventBindings;
use crate::config::DragDropConfig;
use crate::event::{DragEvent, EventResponse};
use crate::tree::{NodeId, VisualTree};

use super::controller::{DragDropController, DragPhase};

/// A view's drag-and-drop surface.
#[derive(Debug)]
pub struct DragDropSystem {
    tree: VisualTree,
    controller: DragDropController,
    bindings: EventBindings,
}

impl DragDropSystem {
    /// Take ownership of `tree` and bind every item and zone in it.
    pub fn new(tree: VisualTree, config: DragDropConfig) -> Self {
        let bindings = EventBindings::bind(&tree);
        Self {
            tree,
            controller: DragDropController::new(config),
            bindings,
        }
    }

    pub fn tree(&self) -> &VisualTree {
        &self.tree
    }

    /// Mutable tree access for the presentation layer.
    ///
    /// Items or zones added here need [`DragDropSystem::rebind`] before they
    /// react to events.
    pub fn tree_mut(&mut self) -> &mut VisualTree {
        &mut self.tree
    }

    pub fn controller(&self) -> &DragDropController {
        &self.controller
    }

    pub fn phase(&self) -> DragPhase {
        self.controller.phase()
    }

    /// Style classes of `node`, rendered with the configured class names.
    pub fn class_names(&self, node: NodeId) -> Vec<&str> {
        self.tree.class_names(node, &self.controller.config().classes)
    }

    /// Rebuild the handler table from the current tree.
    pub fn rebind(&mut self) {
        self.bindings = EventBindings::bind(&self.tree);
    }

    /// Deliver an event to its target and bubble it through the ancestors.
    ///
    /// The bubbling path is fixed before any handler runs, so a drop that
    /// moves the target still reaches the zones it was released over.
    pub fn dispatch(&mut self, event: DragEvent) -> EventResponse {
        profile_function!();

        let Self {
            tree,
            controller,
            bindings,
        } = self;

        let path = tree.ancestors_inclusive(event.target);
        if path.is_empty() {
            tracing::debug!(node = ?event.target, kind = ?event.kind, "event on unknown node");
            return EventResponse::ignored();
        }

        let mut outcome = EventResponse::ignored();
        for current in path {
            for &handler in bindings.handlers(current, event.kind) {
                outcome |= controller.handle(tree, handler, current, event.target);
            }
            if outcome.is_propagation_stopped() {
                break;
            }
        }

        tracing::trace!(kind = ?event.kind, node = ?event.target, ?outcome, "dispatched");
        outcome
    }

    /// Find a node by label.
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.tree.find(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::VisualState;
    use crate::tree::NodeRole;

    fn system() -> (DragDropSystem, NodeId, NodeId, NodeId) {
        let mut tree = VisualTree::new();
        let root = tree.add_node("root", NodeRole::empty());
        tree.set_root(root);
        let zone = tree.add_node("zone", NodeRole::DROP_ZONE);
        tree.append(root, zone).unwrap();
        let a = tree.add_node("A", NodeRole::DRAG_ITEM);
        let b = tree.add_node("B", NodeRole::DRAG_ITEM);
        tree.append(zone, a).unwrap();
        tree.append(zone, b).unwrap();
        (DragDropSystem::new(tree, DragDropConfig::default()), zone, a, b)
    }

    #[test]
    fn test_item_enter_bubbles_to_zone() {
        let (mut system, zone, a, b) = system();
        system.dispatch(DragEvent::drag_start(a));

        let outcome = system.dispatch(DragEvent::enter(b));

        assert!(outcome.is_default_prevented());
        assert_eq!(system.controller().hover_target(), Some(b));
        assert!(system.tree().visual(zone).contains(VisualState::DROP_TARGET));
    }

    #[test]
    fn test_zone_leave_stops_at_first_zone() {
        let (mut system, _, a, b) = system();
        system.dispatch(DragEvent::drag_start(a));

        let outcome = system.dispatch(DragEvent::leave(b));

        assert!(outcome.is_propagation_stopped());
    }

    #[test]
    fn test_drop_on_item_reaches_zone() {
        let (mut system, zone, a, b) = system();
        system.dispatch(DragEvent::drag_start(a));
        system.dispatch(DragEvent::enter(b));

        system.dispatch(DragEvent::drop(b));
        system.dispatch(DragEvent::drag_end(a));

        assert_eq!(system.tree().children(zone), &[b, a]);
        assert_eq!(system.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_unknown_target_is_ignored() {
        let (mut system, _, _, _) = system();

        let outcome = system.dispatch(DragEvent::drop(NodeId(1000)));

        assert!(!outcome.is_handled());
    }

    #[test]
    fn test_unbound_node_needs_rebind() {
        let (mut system, zone, a, _) = system();
        let c = system.tree_mut().add_node("C", NodeRole::DRAG_ITEM);
        system.tree_mut().append(zone, c).unwrap();
        system.dispatch(DragEvent::drag_start(a));

        system.dispatch(DragEvent::enter(c));
        assert_eq!(system.controller().hover_target(), None);

        system.rebind();
        system.dispatch(DragEvent::enter(c));
        assert_eq!(system.controller().hover_target(), Some(c));
    }
}
