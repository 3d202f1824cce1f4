//! Lookup operations — fallible descent plus comparator-free walks.

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::node::{NodeId, Side};
use crate::order::OrderError;
use crate::point::Point;

/// Where a probe landed in the tree.
pub(crate) enum Place {
    /// A node compared `Equal` to the probe.
    Found(NodeId),
    /// No match; a new node would link here.
    Vacant {
        /// Parent of the vacant leaf slot; `None` in an empty tree.
        parent: Option<NodeId>,
        side: Side,
    },
}

/// Descends from `root` directed by `cmp`.
///
/// `cmp(point)` orders the probe against `point`: `Less` descends left,
/// `Greater` right. The first `Err` aborts the search with the tree
/// untouched — a search makes no structural changes.
pub(crate) fn locate<A, V>(
    arena: &Arena<A, V>,
    root: Option<NodeId>,
    mut cmp: impl FnMut(&Point<A, V>) -> Result<Ordering, OrderError>,
) -> Result<Place, OrderError> {
    let Some(mut cur) = root else {
        return Ok(Place::Vacant {
            parent: None,
            side: Side::Left,
        });
    };
    loop {
        let node = arena.node(cur);
        match cmp(&node.point)? {
            Ordering::Equal => return Ok(Place::Found(cur)),
            Ordering::Less => match node.left {
                Some(left) => cur = left,
                None => {
                    return Ok(Place::Vacant {
                        parent: Some(cur),
                        side: Side::Left,
                    });
                }
            },
            Ordering::Greater => match node.right {
                Some(right) => cur = right,
                None => {
                    return Ok(Place::Vacant {
                        parent: Some(cur),
                        side: Side::Right,
                    });
                }
            },
        }
    }
}

/// Returns the leftmost node of the tree, if any.
pub(crate) fn first<A, V>(arena: &Arena<A, V>, root: Option<NodeId>) -> Option<NodeId> {
    let mut cur = root?;
    while let Some(left) = arena.node(cur).left {
        cur = left;
    }
    Some(cur)
}

/// Returns the in-order successor of `id`, if any.
pub(crate) fn next<A, V>(arena: &Arena<A, V>, id: NodeId) -> Option<NodeId> {
    if let Some(mut cur) = arena.node(id).right {
        while let Some(left) = arena.node(cur).left {
            cur = left;
        }
        return Some(cur);
    }
    let mut cur = id;
    loop {
        let parent = arena.node(cur).parent?;
        if arena.node(parent).left == Some(cur) {
            return Some(parent);
        }
        cur = parent;
    }
}

/// Returns the in-order predecessor of `id`, if any.
pub(crate) fn prev<A, V>(arena: &Arena<A, V>, id: NodeId) -> Option<NodeId> {
    if let Some(mut cur) = arena.node(id).left {
        while let Some(right) = arena.node(cur).right {
            cur = right;
        }
        return Some(cur);
    }
    let mut cur = id;
    loop {
        let parent = arena.node(cur).parent?;
        if arena.node(parent).right == Some(cur) {
            return Some(parent);
        }
        cur = parent;
    }
}
