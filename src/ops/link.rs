//! Link operation — attaches a node at a located leaf slot.

use super::rotate_up;
use crate::arena::Arena;
use crate::node::{NodeId, Side};
use crate::point::Point;

/// Links a new node for `point` at the vacant slot `(parent, side)` and
/// restores heap order by rotating it up while its priority exceeds its
/// parent's.
///
/// The slot must come from a [`locate`](super::search::locate) against the
/// current tree with no structural change in between. Purely structural —
/// runs no comparisons, cannot fail.
pub(crate) fn link_at<A, V>(
    arena: &mut Arena<A, V>,
    root: &mut Option<NodeId>,
    parent: Option<NodeId>,
    side: Side,
    point: Point<A, V>,
) -> NodeId {
    let id = arena.alloc(point);
    match parent {
        None => {
            debug_assert!(root.is_none());
            *root = Some(id);
        }
        Some(p) => {
            arena.node_mut(id).parent = Some(p);
            match side {
                Side::Left => {
                    debug_assert!(arena.node(p).left.is_none());
                    arena.node_mut(p).left = Some(id);
                }
                Side::Right => {
                    debug_assert!(arena.node(p).right.is_none());
                    arena.node_mut(p).right = Some(id);
                }
            }
        }
    }

    while let Some(p) = arena.node(id).parent {
        if arena.node(id).priority > arena.node(p).priority {
            rotate_up(arena, root, id);
        } else {
            break;
        }
    }
    id
}
