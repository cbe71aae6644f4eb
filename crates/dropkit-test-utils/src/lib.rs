//! Test utilities for dropkit.
//!
//! - [`board`] builds a root with labelled zones and items.
//! - [`GestureDriver`] stands in for the host toolkit, raising the same
//!   event sequence a pointer drag produces.

mod gesture;

pub use gesture::GestureDriver;

use dropkit_ui::{DragDropConfig, DragDropSystem, NodeId, VisualTree};

/// Build a system whose root holds one zone per `(label, items)` column.
pub fn board(columns: &[(&str, &[&str])]) -> DragDropSystem {
    board_with_config(columns, DragDropConfig::default())
}

/// Like [`board`] with a custom configuration.
pub fn board_with_config(columns: &[(&str, &[&str])], config: DragDropConfig) -> DragDropSystem {
    let mut tree = VisualTree::new();
    tree.build("board", |root| {
        for (zone_label, items) in columns {
            root.zone(*zone_label, |zone| {
                for item in items.iter() {
                    zone.item(*item);
                }
            });
        }
    });
    DragDropSystem::new(tree, config)
}

/// Look up a node by label, panicking with the label if it is missing.
pub fn node(system: &DragDropSystem, label: &str) -> NodeId {
    system
        .find(label)
        .unwrap_or_else(|| panic!("no node labelled {label:?}"))
}

/// Child labels of the node labelled `parent`, in order.
pub fn labels(system: &DragDropSystem, parent: &str) -> Vec<String> {
    let tree = system.tree();
    tree.children(node(system, parent))
        .iter()
        .filter_map(|&child| tree.label(child).map(str::to_string))
        .collect()
}

/// Snapshot of every zone's child labels, in zone order.
pub fn snapshot(system: &DragDropSystem) -> Vec<(String, Vec<String>)> {
    let tree = system.tree();
    tree.nodes_with_role(dropkit_ui::NodeRole::DROP_ZONE)
        .map(|zone| {
            let label = tree.label(zone).unwrap_or_default().to_string();
            let children = tree
                .children(zone)
                .iter()
                .filter_map(|&c| tree.label(c).map(str::to_string))
                .collect();
            (label, children)
        })
        .collect()
}
