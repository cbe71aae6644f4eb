//! Visual state toggles and the class names they map to.

use bitflags::bitflags;

use crate::tree::NodeRole;

bitflags! {
    /// Transient visual annotations applied during a drag gesture.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VisualState: u8 {
        /// The item is the one being dragged.
        const DRAGGING    = 1 << 0;
        /// The zone is highlighted as a valid drop target.
        const DROP_TARGET = 1 << 1;
    }
}

/// Style class names handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    pub item: String,
    pub item_active: String,
    pub zone: String,
    pub zone_active: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            item: "dragItem".to_string(),
            item_active: "dragItem--active".to_string(),
            zone: "dropZone".to_string(),
            zone_active: "dropZone--active".to_string(),
        }
    }
}

impl ClassNames {
    /// Class list for a node with the given role and visual state.
    ///
    /// Base classes come first, followed by active modifiers.
    pub fn class_list(&self, role: NodeRole, visual: VisualState) -> Vec<&str> {
        let mut classes = Vec::with_capacity(4);
        if role.contains(NodeRole::DRAG_ITEM) {
            classes.push(self.item.as_str());
        }
        if role.contains(NodeRole::DROP_ZONE) {
            classes.push(self.zone.as_str());
        }
        if visual.contains(VisualState::DRAGGING) {
            classes.push(self.item_active.as_str());
        }
        if visual.contains(VisualState::DROP_TARGET) {
            classes.push(self.zone_active.as_str());
        }
        classes
    }
}
