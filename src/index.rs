//! One ordered set of points.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::arena::Arena;
use crate::node::{NodeId, Side};
use crate::ops::{link, search, unlink};
use crate::order::OrderError;
use crate::point::Point;

pub(crate) use crate::ops::search::Place;

/// An ordered set of [`Point`]s backed by a treap.
///
/// The index itself is order-agnostic: callers direct every search and link
/// with a fallible comparison closure, and the map layer uses a single
/// consistent ordering per index (by argument for the domain, by maxima
/// rank for the maxima set). All structural mutation beyond the initial
/// fallible descent is comparator-free.
pub(crate) struct OrderedIndex<A, V> {
    arena: Arena<A, V>,
    root: Option<NodeId>,
    len: usize,
}

impl<A, V> OrderedIndex<A, V> {
    pub(crate) const fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Descends directed by `cmp`; see [`search::locate`].
    pub(crate) fn locate(
        &self,
        cmp: impl FnMut(&Point<A, V>) -> Result<Ordering, OrderError>,
    ) -> Result<Place, OrderError> {
        search::locate(&self.arena, self.root, cmp)
    }

    /// Links `point` at a vacant slot returned by [`Self::locate`].
    pub(crate) fn link_at(
        &mut self,
        parent: Option<NodeId>,
        side: Side,
        point: Point<A, V>,
    ) -> NodeId {
        self.len += 1;
        link::link_at(&mut self.arena, &mut self.root, parent, side, point)
    }

    /// Unlinks `id`, returning its point. Comparator-free.
    pub(crate) fn unlink(&mut self, id: NodeId) -> Point<A, V> {
        self.len -= 1;
        unlink::unlink(&mut self.arena, &mut self.root, id)
    }

    pub(crate) fn point(&self, id: NodeId) -> &Point<A, V> {
        &self.arena.node(id).point
    }

    /// Swaps the value cell of the point at `id`, returning the old cell.
    pub(crate) fn swap_value(&mut self, id: NodeId, value: Arc<V>) -> Arc<V> {
        self.arena.node_mut(id).point.swap_value(value)
    }

    /// Reinstalls a value cell taken by [`Self::swap_value`].
    pub(crate) fn restore_value(&mut self, id: NodeId, value: Arc<V>) {
        self.arena.node_mut(id).point.restore_value(value);
    }

    pub(crate) fn first(&self) -> Option<NodeId> {
        search::first(&self.arena, self.root)
    }

    pub(crate) fn next(&self, id: NodeId) -> Option<NodeId> {
        search::next(&self.arena, id)
    }

    pub(crate) fn prev(&self, id: NodeId) -> Option<NodeId> {
        search::prev(&self.arena, id)
    }

    /// Collects references to all points in symmetric order.
    pub(crate) fn points(&self) -> Vec<&Point<A, V>> {
        let mut out = Vec::with_capacity(self.len);
        let mut cur = self.first();
        while let Some(id) = cur {
            out.push(self.point(id));
            cur = self.next(id);
        }
        out
    }
}

// Manual impls — cloning shares payload cells, no `A: Clone` bounds.

impl<A, V> Clone for OrderedIndex<A, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            root: self.root,
            len: self.len,
        }
    }
}

impl<A, V> fmt::Debug for OrderedIndex<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedIndex")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
