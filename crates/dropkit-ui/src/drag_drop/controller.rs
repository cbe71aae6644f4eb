//! Drag gesture state machine.

use crate::bindings::DragHandler;
use crate::config::{DragDropConfig, HoverLeavePolicy};
use crate::event::EventResponse;
use crate::style::VisualState;
use crate::tree::{NodeId, NodeRole, VisualTree};

use super::placement::Placement;

/// Coarse gesture phase derived from the controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// No gesture in progress.
    Idle,
    /// An item is being dragged over empty zone space or outside any item.
    Dragging { item: NodeId },
    /// An item is being dragged over another item.
    HoveringItem { item: NodeId, target: NodeId },
}

/// Tracks the dragged item and hover target and performs the drop.
#[derive(Debug, Default)]
pub struct DragDropController {
    config: DragDropConfig,
    dragged_item: Option<NodeId>,
    hover_target: Option<NodeId>,
}

impl DragDropController {
    pub fn new(config: DragDropConfig) -> Self {
        Self {
            config,
            dragged_item: None,
            hover_target: None,
        }
    }

    pub fn config(&self) -> &DragDropConfig {
        &self.config
    }

    /// The item currently being dragged.
    pub fn dragged_item(&self) -> Option<NodeId> {
        self.dragged_item
    }

    /// The item currently used as insertion reference.
    pub fn hover_target(&self) -> Option<NodeId> {
        self.hover_target
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged_item.is_some()
    }

    pub fn phase(&self) -> DragPhase {
        match (self.dragged_item, self.hover_target) {
            (None, _) => DragPhase::Idle,
            (Some(item), None) => DragPhase::Dragging { item },
            (Some(item), Some(target)) => DragPhase::HoveringItem { item, target },
        }
    }

    /// Run a bound handler. `current` is the node the handler is bound on,
    /// `target` the node the event was raised on.
    pub fn handle(
        &mut self,
        tree: &mut VisualTree,
        handler: DragHandler,
        current: NodeId,
        target: NodeId,
    ) -> EventResponse {
        match handler {
            DragHandler::DragStart => self.on_drag_start(tree, current),
            DragHandler::DragEnd => self.on_drag_end(tree, current),
            DragHandler::Drag => self.on_drag(current),
            DragHandler::ItemEnter => self.on_item_enter(current),
            DragHandler::ItemLeave => self.on_item_leave(current),
            DragHandler::ZoneEnter => self.on_zone_enter(tree, current),
            DragHandler::ZoneLeave => self.on_zone_leave(tree, current, target),
            DragHandler::ZoneOver => self.on_zone_over(current),
            DragHandler::Drop => self.on_drop(tree, current),
        }
    }

    /// Pick up `item`.
    ///
    /// Ignored while another gesture is still in progress.
    pub fn on_drag_start(&mut self, tree: &mut VisualTree, item: NodeId) -> EventResponse {
        if let Some(current) = self.dragged_item {
            tracing::warn!(?item, ?current, "drag start while a drag is in progress");
            return EventResponse::ignored();
        }

        self.dragged_item = Some(item);
        self.hover_target = None;
        tree.set_visual(item, VisualState::DRAGGING, true);
        tracing::debug!(?item, "drag started");

        EventResponse::handled()
    }

    /// End the gesture, whether or not a drop happened.
    pub fn on_drag_end(&mut self, tree: &mut VisualTree, item: NodeId) -> EventResponse {
        tree.set_visual(item, VisualState::DRAGGING, false);

        if let Some(dragged) = self.dragged_item.take() {
            if dragged != item {
                tree.set_visual(dragged, VisualState::DRAGGING, false);
            }
        }
        self.hover_target = None;

        if self.config.clear_zones_on_drag_end {
            self.clear_zone_highlights(tree);
        }
        tracing::debug!(?item, "drag ended");

        EventResponse::handled()
    }

    /// Continuous-move hook. Nothing tracks pointer motion yet.
    pub fn on_drag(&mut self, item: NodeId) -> EventResponse {
        tracing::trace!(?item, "drag");
        EventResponse::handled()
    }

    pub fn on_item_enter(&mut self, item: NodeId) -> EventResponse {
        match self.dragged_item {
            Some(dragged) if dragged != item => {
                self.hover_target = Some(item);
                tracing::trace!(?item, "hover target set");
                EventResponse::handled()
            }
            _ => EventResponse::ignored(),
        }
    }

    pub fn on_item_leave(&mut self, item: NodeId) -> EventResponse {
        let clear = match self.config.hover_leave {
            HoverLeavePolicy::Unconditional => true,
            HoverLeavePolicy::MatchTarget => self.hover_target == Some(item),
        };

        if clear && self.hover_target.take().is_some() {
            tracing::trace!(?item, "hover target cleared");
        }

        EventResponse::handled()
    }

    pub fn on_zone_enter(&mut self, tree: &mut VisualTree, zone: NodeId) -> EventResponse {
        tree.set_visual(zone, VisualState::DROP_TARGET, true);
        EventResponse::prevent_default()
    }

    /// Un-highlight `zone` only when the pointer leaves the zone itself and
    /// no item is hovered. Leaves never reach enclosing zones.
    pub fn on_zone_leave(
        &mut self,
        tree: &mut VisualTree,
        zone: NodeId,
        target: NodeId,
    ) -> EventResponse {
        if target == zone && self.hover_target.is_none() {
            tree.set_visual(zone, VisualState::DROP_TARGET, false);
        }
        EventResponse::stop_propagation()
    }

    pub fn on_zone_over(&mut self, _zone: NodeId) -> EventResponse {
        EventResponse::prevent_default()
    }

    /// Place the dragged item and clear every zone highlight.
    ///
    /// The innermost zone owns the drop, so enclosing zones never see it. A
    /// drop without a dragged item does nothing.
    pub fn on_drop(&mut self, tree: &mut VisualTree, zone: NodeId) -> EventResponse {
        let Some(dragged) = self.dragged_item else {
            tracing::debug!(?zone, "drop without a dragged item");
            return EventResponse::ignored();
        };

        let placement = Placement::resolve(tree, dragged, self.hover_target.take(), zone);
        match placement.apply(tree, dragged) {
            Ok(()) => tracing::debug!(
                item = ?dragged,
                container = ?placement.container(),
                ?placement,
                "dropped"
            ),
            Err(err) => tracing::warn!(item = ?dragged, ?placement, %err, "drop rejected"),
        }

        self.clear_zone_highlights(tree);

        EventResponse::prevent_default() | EventResponse::stop_propagation()
    }

    fn clear_zone_highlights(&self, tree: &mut VisualTree) {
        let zones: Vec<NodeId> = tree.nodes_with_role(NodeRole::DROP_ZONE).collect();
        for zone in zones {
            tree.set_visual(zone, VisualState::DROP_TARGET, false);
        }
    }
}
