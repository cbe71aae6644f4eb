//! Dropkit UI - drag-and-drop reordering for visual trees
//!
//! This crate moves draggable items between drop zones in response to the
//! pointer-drag events a host toolkit raises:
//! - Arena [`VisualTree`] with stable node ids
//! - Gesture state machine ([`DragDropController`])
//! - Same-zone reordering and cross-zone moves ([`Placement`])
//! - Handler table keyed by node and event kind ([`EventBindings`])
//! - Bubbling dispatch ([`DragDropSystem`])
//!
//! ## Quick Start
//!
//! ```rust
//! use dropkit_ui::{DragDropConfig, DragDropSystem, DragEvent, VisualTree};
//!
//! let mut tree = VisualTree::new();
//! tree.build("board", |root| {
//!     root.zone("todo", |zone| {
//!         zone.item("A");
//!         zone.item("B");
//!     });
//! });
//!
//! let mut system = DragDropSystem::new(tree, DragDropConfig::default());
//! let a = system.find("A").unwrap();
//! let b = system.find("B").unwrap();
//!
//! system.dispatch(DragEvent::drag_start(a));
//! system.dispatch(DragEvent::enter(b));
//! system.dispatch(DragEvent::over(b));
//! system.dispatch(DragEvent::drop(b));
//! system.dispatch(DragEvent::drag_end(a));
//!
//! let todo = system.find("todo").unwrap();
//! assert_eq!(system.tree().children(todo), &[b, a]);
//! ```

pub mod bindings;
pub mod builder;
pub mod config;
pub mod dirty;
pub mod drag_drop;
pub mod event;
pub mod style;
pub mod tree;

pub use bindings::{DragHandler, EventBindings};
pub use builder::TreeBuilder;
pub use config::{DragDropConfig, HoverLeavePolicy};
pub use dirty::DirtyFlags;
pub use drag_drop::{DragDropController, DragDropSystem, DragPhase, Placement};
pub use event::{DragEvent, DragEventKind, EventResponse};
pub use style::{ClassNames, VisualState};
pub use tree::{NodeId, NodeRole, TreeError, TreeResult, VisualNode, VisualTree};
