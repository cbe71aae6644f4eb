//! Drag-and-drop reordering of items across zones.
//!
//! [`DragDropController`] holds the gesture state and reacts to the events
//! bound in [`crate::bindings`]. [`Placement`] decides where a released item
//! lands. [`DragDropSystem`] ties both to a [`crate::tree::VisualTree`] and
//! bubbles host events through it.

mod controller;
mod placement;
mod system;

pub use controller::{DragDropController, DragPhase};
pub use placement::Placement;
pub use system::DragDropSystem;
