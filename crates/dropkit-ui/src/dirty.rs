//! Dirty flag tracking for nodes touched by a drag gesture.
//!
//! The presentation layer drains these after each dispatch to learn which
//! containers need re-layout and which nodes only need restyling.

use bitflags::bitflags;

bitflags! {
    /// What changed on a node since the presentation layer last looked.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE           = 0;

        /// Children were added, removed, or reordered.
        const CHILDREN_ORDER = 1 << 0;

        /// A visual state class was toggled.
        const STYLE          = 1 << 1;
    }
}

impl DirtyFlags {
    /// Returns true if the node's children must be laid out again.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.contains(Self::CHILDREN_ORDER)
    }

    /// Returns true if only styling changed.
    #[inline]
    pub fn is_style_only(&self) -> bool {
        *self == Self::STYLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_empty() {
        assert!(DirtyFlags::NONE.is_empty());
        assert!(!DirtyFlags::NONE.needs_layout());
        assert!(!DirtyFlags::NONE.is_style_only());
    }

    #[test]
    fn test_style_only() {
        assert!(DirtyFlags::STYLE.is_style_only());
        assert!(!(DirtyFlags::STYLE | DirtyFlags::CHILDREN_ORDER).is_style_only());
    }

    #[test]
    fn test_children_order_needs_layout() {
        let flags = DirtyFlags::CHILDREN_ORDER | DirtyFlags::STYLE;
        assert!(flags.needs_layout());
    }
}
