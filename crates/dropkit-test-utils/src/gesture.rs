//! Simulated pointer-drag gestures.

use dropkit_ui::{DragDropSystem, DragEvent, EventResponse, NodeId};

/// Raises drag events the way a toolkit does while the pointer moves.
///
/// Moving onto a node raises `DragEnter` on the new node before
/// `DragLeave` on the old one, then a `DragOver`. Releasing delivers `Drop`
/// only if the last `DragOver` had its default prevented, and always ends
/// with `DragEnd` on the source.
#[derive(Debug, Default)]
pub struct GestureDriver {
    source: Option<NodeId>,
    pointer: Option<NodeId>,
    drop_allowed: bool,
}

impl GestureDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The node under the pointer.
    pub fn pointer(&self) -> Option<NodeId> {
        self.pointer
    }

    /// Whether releasing now would deliver a drop.
    pub fn drop_allowed(&self) -> bool {
        self.drop_allowed
    }

    /// Start dragging `item`. The pointer starts over the item itself.
    pub fn pick_up(&mut self, system: &mut DragDropSystem, item: NodeId) -> EventResponse {
        self.source = Some(item);
        self.pointer = None;
        self.drop_allowed = false;
        let response = system.dispatch(DragEvent::drag_start(item));
        self.move_to(system, item);
        response
    }

    /// Move the pointer onto `node`.
    pub fn move_to(&mut self, system: &mut DragDropSystem, node: NodeId) {
        if self.pointer != Some(node) {
            system.dispatch(DragEvent::enter(node));
            if let Some(previous) = self.pointer {
                system.dispatch(DragEvent::leave(previous));
            }
            self.pointer = Some(node);
        }
        self.over(system);
    }

    /// Move the pointer out of every node.
    pub fn move_outside(&mut self, system: &mut DragDropSystem) {
        if let Some(previous) = self.pointer.take() {
            system.dispatch(DragEvent::leave(previous));
        }
        self.drop_allowed = false;
    }

    /// Keep the pointer where it is and raise `Drag` + `DragOver`.
    pub fn over(&mut self, system: &mut DragDropSystem) {
        if let Some(source) = self.source {
            system.dispatch(DragEvent::drag(source));
        }
        self.drop_allowed = match self.pointer {
            Some(node) => system.dispatch(DragEvent::over(node)).is_default_prevented(),
            None => false,
        };
    }

    /// Release the pointer. Returns true if a drop was delivered.
    pub fn release(&mut self, system: &mut DragDropSystem) -> bool {
        let dropped = match (self.pointer, self.drop_allowed) {
            (Some(node), true) => {
                system.dispatch(DragEvent::drop(node));
                true
            }
            _ => false,
        };
        self.finish(system);
        dropped
    }

    /// Abort the gesture (Escape, focus loss).
    pub fn cancel(&mut self, system: &mut DragDropSystem) {
        if let Some(node) = self.pointer {
            system.dispatch(DragEvent::leave(node));
        }
        self.finish(system);
    }

    fn finish(&mut self, system: &mut DragDropSystem) {
        if let Some(source) = self.source.take() {
            system.dispatch(DragEvent::drag_end(source));
        }
        self.pointer = None;
        self.drop_allowed = false;
        tracing::trace!("gesture finished");
    }
}
