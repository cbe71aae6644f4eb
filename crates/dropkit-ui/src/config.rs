//! Configuration for the drag-and-drop controller.

use crate::style::ClassNames;

/// How leaving an item affects the current hover target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverLeavePolicy {
    /// Any item leave clears the hover target, including leaves that bubble
    /// up from nested content of an unrelated item.
    #[default]
    Unconditional,
    /// Only leaving the current hover target clears it.
    MatchTarget,
}

/// Drag-and-drop configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragDropConfig {
    pub hover_leave: HoverLeavePolicy,
    /// Clear every zone highlight when a gesture ends without a drop.
    pub clear_zones_on_drag_end: bool,
    pub classes: ClassNames,
}

impl Default for DragDropConfig {
    fn default() -> Self {
        Self {
            hover_leave: HoverLeavePolicy::default(),
            clear_zones_on_drag_end: true,
            classes: ClassNames::default(),
        }
    }
}

impl DragDropConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hover-leave policy.
    pub fn with_hover_leave(mut self, policy: HoverLeavePolicy) -> Self {
        self.hover_leave = policy;
        self
    }

    pub fn with_clear_zones_on_drag_end(mut self, enabled: bool) -> Self {
        self.clear_zones_on_drag_end = enabled;
        self
    }

    pub fn with_classes(mut self, classes: ClassNames) -> Self {
        self.classes = classes;
        self
    }
}
