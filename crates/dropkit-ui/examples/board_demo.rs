//! Kanban-style board demo.
//!
//! Replays a few scripted drag gestures against a three-column board and
//! prints the board after each one. Run with `RUST_LOG=dropkit_ui=trace` to
//! see every dispatched event.

use dropkit_core::{logging, profiling};
use dropkit_ui::{DragDropConfig, DragDropSystem, DragEvent, NodeId, NodeRole, VisualTree};

fn main() {
    logging::init();
    profiling::init_profiling();

    let mut tree = VisualTree::new();
    tree.build("board", |root| {
        root.zone("todo", |zone| {
            zone.item("design");
            zone.item("implement");
            zone.item("test");
        });
        root.zone("doing", |zone| {
            zone.item("review");
        });
        root.zone("done", |_| {});
    });

    let mut system = DragDropSystem::new(tree, DragDropConfig::default());
    print_board(&system, "initial");

    // Reorder within "todo": drag "test" over "design".
    let (todo, test, design) = (id(&system, "todo"), id(&system, "test"), id(&system, "design"));
    gesture(&mut system, test, &[todo, design]);
    print_board(&system, "test moved above design");

    // Move "review" into "done" (empty column).
    let (doing, review, done) = (id(&system, "doing"), id(&system, "review"), id(&system, "done"));
    gesture(&mut system, review, &[doing, done]);
    print_board(&system, "review moved to done");

    // Move "design" in front of "review".
    let design = id(&system, "design");
    gesture(&mut system, design, &[todo, done, review]);
    print_board(&system, "design moved before review");
}

/// Pick up `item`, move over each node of `path` and release on the last.
fn gesture(system: &mut DragDropSystem, item: NodeId, path: &[NodeId]) {
    profiling::new_frame();
    system.dispatch(DragEvent::drag_start(item));
    let mut previous = item;
    for &node in path {
        system.dispatch(DragEvent::enter(node));
        system.dispatch(DragEvent::leave(previous));
        system.dispatch(DragEvent::over(node));
        previous = node;
    }
    system.dispatch(DragEvent::drop(previous));
    system.dispatch(DragEvent::drag_end(item));
}

fn id(system: &DragDropSystem, label: &str) -> NodeId {
    system
        .find(label)
        .unwrap_or_else(|| panic!("missing node {label}"))
}

fn print_board(system: &DragDropSystem, title: &str) {
    let tree = system.tree();
    println!("== {title}");
    for zone in tree.nodes_with_role(NodeRole::DROP_ZONE) {
        let items: Vec<&str> = tree
            .children(zone)
            .iter()
            .filter_map(|&c| tree.label(c))
            .collect();
        println!("  {:<6} {:?}", tree.label(zone).unwrap_or("?"), items);
    }
}
