//! Structural operations on the treap.
//!
//! Split per operation: `search` is the only module that runs user
//! comparisons; `link` and `unlink` are purely structural and cannot fail,
//! which is what lets staged edits commit and abort without touching a
//! comparator.

pub(crate) mod link;
pub(crate) mod search;
pub(crate) mod unlink;

use crate::arena::Arena;
use crate::node::NodeId;

/// Rotates `x` above its parent, preserving symmetric order.
///
/// Fixes all parent/child links including the grandparent (or the tree
/// root). `x` must have a parent.
pub(crate) fn rotate_up<A, V>(arena: &mut Arena<A, V>, root: &mut Option<NodeId>, x: NodeId) {
    let p = arena.node(x).parent.expect("rotate_up needs a parent");
    let g = arena.node(p).parent;

    if arena.node(p).left == Some(x) {
        // Right rotation: x's right subtree becomes p's left.
        let b = arena.node(x).right;
        arena.node_mut(p).left = b;
        if let Some(b) = b {
            arena.node_mut(b).parent = Some(p);
        }
        arena.node_mut(x).right = Some(p);
    } else {
        // Left rotation: x's left subtree becomes p's right.
        let b = arena.node(x).left;
        arena.node_mut(p).right = b;
        if let Some(b) = b {
            arena.node_mut(b).parent = Some(p);
        }
        arena.node_mut(x).left = Some(p);
    }
    arena.node_mut(p).parent = Some(x);
    arena.node_mut(x).parent = g;

    match g {
        Some(g) => {
            if arena.node(g).left == Some(p) {
                arena.node_mut(g).left = Some(x);
            } else {
                arena.node_mut(g).right = Some(x);
            }
        }
        None => *root = Some(x),
    }
}
