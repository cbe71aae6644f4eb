//! Drag lifecycle events delivered by the host toolkit.

use bitflags::bitflags;

use crate::tree::NodeId;

/// Pointer-drag event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    /// A drag gesture started on an item.
    DragStart,
    /// The dragged item moved.
    Drag,
    /// The gesture ended, with or without a drop.
    DragEnd,
    /// The pointer entered a node.
    DragEnter,
    /// The pointer moved within a node.
    DragOver,
    /// The pointer left a node.
    DragLeave,
    /// The item was released over a node.
    Drop,
}

/// A drag event aimed at a node.
///
/// `target` is the node the toolkit raised the event on. While bubbling,
/// handlers on its ancestors see the same target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEvent {
    pub kind: DragEventKind,
    pub target: NodeId,
}

impl DragEvent {
    pub fn new(kind: DragEventKind, target: NodeId) -> Self {
        Self { kind, target }
    }

    pub fn drag_start(target: NodeId) -> Self {
        Self::new(DragEventKind::DragStart, target)
    }

    pub fn drag(target: NodeId) -> Self {
        Self::new(DragEventKind::Drag, target)
    }

    pub fn drag_end(target: NodeId) -> Self {
        Self::new(DragEventKind::DragEnd, target)
    }

    pub fn enter(target: NodeId) -> Self {
        Self::new(DragEventKind::DragEnter, target)
    }

    pub fn over(target: NodeId) -> Self {
        Self::new(DragEventKind::DragOver, target)
    }

    pub fn leave(target: NodeId) -> Self {
        Self::new(DragEventKind::DragLeave, target)
    }

    pub fn drop(target: NodeId) -> Self {
        Self::new(DragEventKind::Drop, target)
    }
}

bitflags! {
    /// What a handler (or a whole dispatch) did with an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EventResponse: u8 {
        const HANDLED             = 0b0000_0001;
        /// The toolkit's default action was suppressed. For enter/over this
        /// is what permits a drop.
        const DEFAULT_PREVENTED   = 0b0000_0010;
        /// Ancestors must not see the event.
        const PROPAGATION_STOPPED = 0b0000_0100;
    }
}

impl EventResponse {
    pub const fn ignored() -> Self {
        Self::empty()
    }

    pub const fn handled() -> Self {
        Self::HANDLED
    }

    pub const fn prevent_default() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::DEFAULT_PREVENTED.bits())
    }

    pub const fn stop_propagation() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::PROPAGATION_STOPPED.bits())
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn is_default_prevented(&self) -> bool {
        self.contains(Self::DEFAULT_PREVENTED)
    }

    pub const fn is_propagation_stopped(&self) -> bool {
        self.contains(Self::PROPAGATION_STOPPED)
    }
}
