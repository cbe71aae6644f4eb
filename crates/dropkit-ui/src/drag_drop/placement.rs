//! Insertion point resolution for a drop.

use crate::tree::{NodeId, TreeResult, VisualTree};

/// Where a dropped item ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Immediately before `reference` inside `parent`.
    Before { parent: NodeId, reference: NodeId },
    /// Immediately after `reference` inside `parent`.
    After { parent: NodeId, reference: NodeId },
    /// Last child of `zone`.
    Append { zone: NodeId },
}

impl Placement {
    /// Work out where `dragged` goes when released over `zone`.
    ///
    /// With a hover target in the dragged item's own container the pre-move
    /// sibling indices decide the side: an item coming from below lands
    /// before the target, one coming from above lands after it. A hover
    /// target in another container always takes the item in front of it.
    /// A hover target that is gone or detached counts as no target.
    pub fn resolve(
        tree: &VisualTree,
        dragged: NodeId,
        hover_target: Option<NodeId>,
        zone: NodeId,
    ) -> Self {
        let Some((hover, hover_parent)) = hover_target
            .filter(|&h| h != dragged)
            .and_then(|h| tree.parent(h).map(|p| (h, p)))
        else {
            if let Some(h) = hover_target {
                tracing::warn!(hover = ?h, "hover target is not attached, appending to zone");
            }
            return Placement::Append { zone };
        };

        if tree.parent(dragged) == Some(hover_parent) {
            let dragged_index = tree.index_in_parent(dragged);
            let hover_index = tree.index_in_parent(hover);
            if dragged_index > hover_index {
                Placement::Before {
                    parent: hover_parent,
                    reference: hover,
                }
            } else {
                Placement::After {
                    parent: hover_parent,
                    reference: hover,
                }
            }
        } else {
            Placement::Before {
                parent: hover_parent,
                reference: hover,
            }
        }
    }

    /// Move `dragged` into place.
    pub fn apply(self, tree: &mut VisualTree, dragged: NodeId) -> TreeResult<()> {
        match self {
            Placement::Before { parent, reference } => {
                tree.insert_before(parent, dragged, Some(reference))
            }
            Placement::After { parent, reference } => {
                let next = tree.next_sibling(reference);
                tree.insert_before(parent, dragged, next)
            }
            Placement::Append { zone } => tree.append(zone, dragged),
        }
    }

    /// The container the item lands in.
    pub fn container(&self) -> NodeId {
        match *self {
            Placement::Before { parent, .. } | Placement::After { parent, .. } => parent,
            Placement::Append { zone } => zone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeRole;

    struct Board {
        tree: VisualTree,
        zones: Vec<NodeId>,
    }

    impl Board {
        fn new(columns: &[&[&str]]) -> Self {
            let mut tree = VisualTree::new();
            let zones = columns
                .iter()
                .enumerate()
                .map(|(i, labels)| {
                    let zone = tree.add_node(format!("zone{}", i), NodeRole::DROP_ZONE);
                    for label in labels.iter() {
                        let item = tree.add_node(*label, NodeRole::DRAG_ITEM);
                        tree.append(zone, item).unwrap();
                    }
                    zone
                })
                .collect();
            Self { tree, zones }
        }

        fn id(&self, label: &str) -> NodeId {
            self.tree.find(label).unwrap()
        }

        fn labels(&self, zone: usize) -> Vec<&str> {
            self.tree
                .children(self.zones[zone])
                .iter()
                .map(|&c| self.tree.label(c).unwrap())
                .collect()
        }

        fn drop_onto(&mut self, dragged: &str, hover: Option<&str>, zone: usize) -> Placement {
            let dragged = self.id(dragged);
            let hover = hover.map(|h| self.id(h));
            let placement = Placement::resolve(&self.tree, dragged, hover, self.zones[zone]);
            placement.apply(&mut self.tree, dragged).unwrap();
            placement
        }
    }

    #[test]
    fn test_from_below_lands_before() {
        let mut board = Board::new(&[&["A", "B", "C"]]);
        let b = board.id("B");

        let placement = board.drop_onto("C", Some("B"), 0);

        assert_eq!(
            placement,
            Placement::Before {
                parent: board.zones[0],
                reference: b
            }
        );
        assert_eq!(board.labels(0), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_from_above_lands_after() {
        let mut board = Board::new(&[&["A", "B", "C"]]);

        board.drop_onto("A", Some("C"), 0);

        assert_eq!(board.labels(0), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_from_above_onto_neighbour_swaps() {
        let mut board = Board::new(&[&["A", "B", "C"]]);

        board.drop_onto("A", Some("B"), 0);

        assert_eq!(board.labels(0), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_other_container_lands_before_target() {
        let mut board = Board::new(&[&["A", "B", "C"], &["X", "Y"]]);

        // The zone passed in is irrelevant once a hover target exists.
        let placement = board.drop_onto("B", Some("Y"), 0);

        assert_eq!(placement.container(), board.zones[1]);
        assert_eq!(board.labels(0), vec!["A", "C"]);
        assert_eq!(board.labels(1), vec!["X", "B", "Y"]);
    }

    #[test]
    fn test_no_hover_appends() {
        let mut board = Board::new(&[&["A", "B"], &["X"]]);

        board.drop_onto("A", None, 1);

        assert_eq!(board.labels(0), vec!["B"]);
        assert_eq!(board.labels(1), vec!["X", "A"]);
    }

    #[test]
    fn test_detached_hover_appends() {
        let mut board = Board::new(&[&["A", "B"], &[]]);
        let b = board.id("B");
        board.tree.detach(b).unwrap();
        let a = board.id("A");

        let placement = Placement::resolve(&board.tree, a, Some(b), board.zones[1]);

        assert_eq!(placement, Placement::Append { zone: board.zones[1] });
    }

    #[test]
    fn test_missing_hover_appends() {
        let board = Board::new(&[&["A"]]);
        let a = board.id("A");

        let placement = Placement::resolve(&board.tree, a, Some(NodeId(500)), board.zones[0]);

        assert_eq!(placement, Placement::Append { zone: board.zones[0] });
    }

    #[test]
    fn test_hover_on_self_appends() {
        let board = Board::new(&[&["A", "B"]]);
        let a = board.id("A");

        let placement = Placement::resolve(&board.tree, a, Some(a), board.zones[0]);

        assert_eq!(placement, Placement::Append { zone: board.zones[0] });
    }
}
