//! Slot arena for treap nodes.

use std::fmt;

use crate::node::{self, Node, NodeId};
use crate::point::Point;

/// Arena storage addressed by [`NodeId`].
///
/// Released slots go on a free list and are reused by later allocations, so
/// a long-lived map does not grow with its erase history. A slot id is
/// recycled only after its element was unlinked — node data never moves
/// between slots, which keeps every outstanding `NodeId` stable.
pub(crate) struct Arena<A, V> {
    slots: Vec<Option<Node<A, V>>>,
    free: Vec<NodeId>,
    counter: u64,
}

impl<A, V> Arena<A, V> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            counter: 0,
        }
    }

    /// Allocates a fresh unlinked node for `point`, assigning the next
    /// deterministic priority.
    pub(crate) fn alloc(&mut self, point: Point<A, V>) -> NodeId {
        let node = Node {
            point,
            priority: node::priority(self.counter),
            parent: None,
            left: None,
            right: None,
        };
        self.counter += 1;
        if let Some(id) = self.free.pop() {
            self.slots[id.index()] = Some(node);
            id
        } else {
            let id = NodeId(u32::try_from(self.slots.len()).expect("arena capacity exceeded"));
            self.slots.push(Some(node));
            id
        }
    }

    /// Returns the node at `id`.
    pub(crate) fn node(&self, id: NodeId) -> &Node<A, V> {
        self.slots[id.index()].as_ref().expect("occupied slot")
    }

    /// Returns the node at `id` mutably.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<A, V> {
        self.slots[id.index()].as_mut().expect("occupied slot")
    }

    /// Releases the slot at `id`, returning its node.
    ///
    /// The caller must already have unlinked the node from the tree.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<A, V> {
        let node = self.slots[id.index()].take().expect("occupied slot");
        self.free.push(id);
        node
    }
}

// Manual impls — slots clone as Arc handles plus links, no `A: Clone`.

impl<A, V> Clone for Arena<A, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            free: self.free.clone(),
            counter: self.counter,
        }
    }
}

impl<A, V> fmt::Debug for Arena<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("slots", &self.slots.len())
            .field("free", &self.free.len())
            .finish_non_exhaustive()
    }
}
