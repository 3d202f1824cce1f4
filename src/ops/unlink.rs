//! Unlink operation — removes a node by id.

use super::rotate_up;
use crate::arena::Arena;
use crate::node::NodeId;
use crate::point::Point;

/// Unlinks the node `id` and releases its slot, returning its point.
///
/// Rotates the higher-priority child above `id` until `id` is a leaf, then
/// detaches it. Only links move — no payload ever changes slots, so every
/// other outstanding `NodeId` stays valid. Purely structural — runs no
/// comparisons, cannot fail. Deferred erases depend on both properties.
pub(crate) fn unlink<A, V>(
    arena: &mut Arena<A, V>,
    root: &mut Option<NodeId>,
    id: NodeId,
) -> Point<A, V> {
    loop {
        let (left, right) = {
            let node = arena.node(id);
            (node.left, node.right)
        };
        let child = match (left, right) {
            (None, None) => break,
            (Some(child), None) | (None, Some(child)) => child,
            (Some(left), Some(right)) => {
                if arena.node(left).priority >= arena.node(right).priority {
                    left
                } else {
                    right
                }
            }
        };
        rotate_up(arena, root, child);
    }

    match arena.node(id).parent {
        Some(p) => {
            if arena.node(p).left == Some(id) {
                arena.node_mut(p).left = None;
            } else {
                arena.node_mut(p).right = None;
            }
        }
        None => *root = None,
    }
    arena.release(id).point
}
