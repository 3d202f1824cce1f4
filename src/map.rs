//! Ordered function map tracking local maxima.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::index::{OrderedIndex, Place};
use crate::iter::Iter;
use crate::node::NodeId;
use crate::order::{self, OrderError, TryOrd};
use crate::point::Point;
use crate::txn::{EditLog, ValueSwap};

/// Staged domain operations per mutation: insert or erase of the edited
/// point.
const DOMAIN_OPS: usize = 1;

/// Staged maxima operations per mutation: edited point out and back in,
/// plus one re-evaluation per neighbor.
const MAXIMA_OPS: usize = 4;

/// A function on an ordered domain that tracks its local maxima.
///
/// Keeps two ordered indices over shared points: the **domain index**
/// (ascending argument — the function itself) and the **maxima index**
/// (value descending, ties by argument ascending — exactly the points not
/// less than either neighbor). Every mutation updates both indices through
/// staged edit logs, so a failed [`TryOrd`] comparison anywhere leaves the
/// map observably unchanged.
///
/// # Key properties
///
/// - **Incremental maxima**: an edit re-evaluates at most three points
///   — expected O(log n) per mutation
/// - **All-or-nothing edits**: staged inserts roll back, erases are
///   deferred to an infallible commit
/// - **Shared payloads**: `Arc` cells make dual-index membership and map
///   cloning cheap
/// - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
pub struct MaximaMap<A, V> {
    domain: OrderedIndex<A, V>,
    maxima: OrderedIndex<A, V>,
}

// ---------------------------------------------------------------------------
// Construction & accessors — no trait bounds
// ---------------------------------------------------------------------------

impl<A, V> MaximaMap<A, V> {
    /// Creates a function with an empty domain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            domain: OrderedIndex::new(),
            maxima: OrderedIndex::new(),
        }
    }

    /// Returns the number of points in the domain.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.domain.len()
    }

    /// Returns `true` if the domain is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all points in ascending argument order.
    ///
    /// The sequence is snapshot at creation; the borrow keeps the map
    /// immutable while the iterator lives.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, A, V> {
        Iter::new(&self.domain)
    }

    /// Returns an iterator over the local maxima, ordered by value
    /// descending with ties in ascending argument order.
    #[must_use]
    pub fn maxima(&self) -> Iter<'_, A, V> {
        Iter::new(&self.maxima)
    }
}

// ---------------------------------------------------------------------------
// Read operations — A: TryOrd
// ---------------------------------------------------------------------------

impl<A: TryOrd, V> MaximaMap<A, V> {
    /// Returns the point with argument `a`, or `None` if `a` is not in the
    /// domain. Expected O(log n).
    ///
    /// # Errors
    ///
    /// [`Error::Comparator`] if an argument comparison fails; the map is
    /// never modified by a lookup.
    pub fn find(&self, a: &A) -> Result<Option<&Point<A, V>>, Error> {
        match self.domain.locate(|p| a.try_cmp(p.argument()))? {
            Place::Found(id) => Ok(Some(self.domain.point(id))),
            Place::Vacant { .. } => Ok(None),
        }
    }

    /// Returns the value of the function at `a`. Expected O(log n).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `a` is not in the domain;
    /// [`Error::Comparator`] if an argument comparison fails.
    pub fn value_at(&self, a: &A) -> Result<&V, Error> {
        self.find(a)?.map(Point::value).ok_or(Error::InvalidArgument)
    }
}

// ---------------------------------------------------------------------------
// Write operations — A: TryOrd, V: TryOrd
// ---------------------------------------------------------------------------

impl<A: TryOrd, V: TryOrd> MaximaMap<A, V> {
    /// Makes `f(a) = v`, adding `a` to the domain if absent. Expected
    /// O(log n).
    ///
    /// Setting a point to a value equivalent to its current one (under
    /// `V`'s ordering) is a no-op that touches neither index.
    ///
    /// # Errors
    ///
    /// [`Error::Comparator`] if any comparison fails; the domain, all
    /// values, and the maxima set are then exactly as before the call.
    pub fn set_value(&mut self, a: A, v: V) -> Result<(), Error> {
        let mut dom_log = EditLog::<DOMAIN_OPS>::new();
        let mut max_log = EditLog::<MAXIMA_OPS>::new();
        let mut swap = None;

        match self.stage_set_value(a, v, &mut dom_log, &mut max_log, &mut swap) {
            Ok(()) => {
                dom_log.commit(&mut self.domain);
                max_log.commit(&mut self.maxima);
                Ok(())
            }
            Err(err) => {
                if let Some(swap) = swap.take() {
                    swap.restore(&mut self.domain);
                }
                max_log.abort(&mut self.maxima);
                dom_log.abort(&mut self.domain);
                Err(err.into())
            }
        }
    }

    /// Removes `a` from the domain; does nothing if `a` is absent.
    /// Expected O(log n).
    ///
    /// # Errors
    ///
    /// [`Error::Comparator`] if any comparison fails; the map is then
    /// exactly as before the call.
    pub fn erase(&mut self, a: &A) -> Result<(), Error> {
        let mut dom_log = EditLog::<DOMAIN_OPS>::new();
        let mut max_log = EditLog::<MAXIMA_OPS>::new();

        match self.stage_erase(a, &mut dom_log, &mut max_log) {
            Ok(()) => {
                dom_log.commit(&mut self.domain);
                max_log.commit(&mut self.maxima);
                Ok(())
            }
            Err(err) => {
                max_log.abort(&mut self.maxima);
                dom_log.abort(&mut self.domain);
                Err(err.into())
            }
        }
    }

    /// Stages a `set_value` edit; on `Err` the caller rolls everything
    /// back.
    fn stage_set_value(
        &mut self,
        a: A,
        v: V,
        dom_log: &mut EditLog<DOMAIN_OPS>,
        max_log: &mut EditLog<MAXIMA_OPS>,
        swap: &mut Option<ValueSwap<V>>,
    ) -> Result<(), OrderError> {
        let target = match self.domain.locate(|p| a.try_cmp(p.argument()))? {
            Place::Vacant { parent, side } => {
                let id = self.domain.link_at(parent, side, Point::new(a, v));
                dom_log.record_insert(id);
                id
            }
            Place::Found(id) => {
                if v.try_cmp(self.domain.point(id).value())? == Ordering::Equal {
                    // Equivalent value: stop before touching the maxima
                    // index. Staging erase-then-insert of the unchanged
                    // element would let the deferred erase swallow it.
                    return Ok(());
                }
                // The old (argument, value) pair ceases to exist, so its
                // maxima element goes first; then the cell swap, under a
                // snapshot the caller restores on failure.
                self.stage_maxima_erase(id, max_log)?;
                let old = self.domain.swap_value(id, Arc::new(v));
                *swap = Some(ValueSwap::new(id, old));
                id
            }
        };

        if self.is_maximum(target, None)? {
            self.stage_maxima_insert(target, max_log)?;
        }
        if let Some(left) = self.domain.prev(target) {
            self.reevaluate_neighbor(left, None, max_log)?;
        }
        if let Some(right) = self.domain.next(target) {
            self.reevaluate_neighbor(right, None, max_log)?;
        }
        Ok(())
    }

    /// Stages an `erase` edit; on `Err` the caller rolls everything back.
    fn stage_erase(
        &mut self,
        a: &A,
        dom_log: &mut EditLog<DOMAIN_OPS>,
        max_log: &mut EditLog<MAXIMA_OPS>,
    ) -> Result<(), OrderError> {
        let Place::Found(id) = self.domain.locate(|p| a.try_cmp(p.argument()))? else {
            return Ok(());
        };

        self.stage_maxima_erase(id, max_log)?;
        dom_log.record_erase(id);

        // The point stays physically present until commit, so neighbor
        // walks must skip over it to see the post-erase adjacency.
        if let Some(left) = self.domain.prev(id) {
            self.reevaluate_neighbor(left, Some(id), max_log)?;
        }
        if let Some(right) = self.domain.next(id) {
            self.reevaluate_neighbor(right, Some(id), max_log)?;
        }
        Ok(())
    }

    /// Checks whether the domain point `id` is a local maximum, reading
    /// neighbors as if `skip` were already erased.
    fn is_maximum(&self, id: NodeId, skip: Option<NodeId>) -> Result<bool, OrderError> {
        let value = self.domain.point(id).value();

        let mut left = self.domain.prev(id);
        if skip.is_some() && left == skip {
            left = skip.and_then(|s| self.domain.prev(s));
        }
        if let Some(left) = left
            && value.try_cmp(self.domain.point(left).value())? == Ordering::Less
        {
            return Ok(false);
        }

        let mut right = self.domain.next(id);
        if skip.is_some() && right == skip {
            right = skip.and_then(|s| self.domain.next(s));
        }
        if let Some(right) = right
            && value.try_cmp(self.domain.point(right).value())? == Ordering::Less
        {
            return Ok(false);
        }
        Ok(true)
    }

    /// Stages insert or erase of a neighbor's maxima element according to
    /// its current status.
    fn reevaluate_neighbor(
        &mut self,
        id: NodeId,
        skip: Option<NodeId>,
        max_log: &mut EditLog<MAXIMA_OPS>,
    ) -> Result<(), OrderError> {
        if self.is_maximum(id, skip)? {
            self.stage_maxima_insert(id, max_log)
        } else {
            self.stage_maxima_erase(id, max_log)
        }
    }

    /// Stages insertion of the domain point `id` into the maxima index.
    /// No-op if an equal-ranked element is already present.
    fn stage_maxima_insert(
        &mut self,
        id: NodeId,
        max_log: &mut EditLog<MAXIMA_OPS>,
    ) -> Result<(), OrderError> {
        let point = self.domain.point(id);
        match self.maxima.locate(|q| order::max_rank(point, q))? {
            Place::Found(_) => Ok(()),
            Place::Vacant { parent, side } => {
                let point = point.clone();
                let mid = self.maxima.link_at(parent, side, point);
                max_log.record_insert(mid);
                Ok(())
            }
        }
    }

    /// Stages a deferred erase of the domain point `id`'s maxima element.
    /// No-op if the point is not currently recorded as a maximum — though
    /// the search itself may still fail.
    fn stage_maxima_erase(
        &mut self,
        id: NodeId,
        max_log: &mut EditLog<MAXIMA_OPS>,
    ) -> Result<(), OrderError> {
        let point = self.domain.point(id);
        if let Place::Found(mid) = self.maxima.locate(|q| order::max_rank(point, q))? {
            max_log.record_erase(mid);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<A, V> Default for MaximaMap<A, V> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Clone — payload cells are shared between clones, so this never
// clones an `A` or `V` and needs no bounds on either.
impl<A, V> Clone for MaximaMap<A, V> {
    fn clone(&self) -> Self {
        Self {
            domain: self.domain.clone(),
            maxima: self.maxima.clone(),
        }
    }
}

impl<A, V> fmt::Debug for MaximaMap<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaximaMap")
            .field("len", &self.len())
            .field("maxima", &self.maxima.len())
            .finish_non_exhaustive()
    }
}

impl<'a, A, V> IntoIterator for &'a MaximaMap<A, V> {
    type Item = &'a Point<A, V>;
    type IntoIter = Iter<'a, A, V>;

    fn into_iter(self) -> Iter<'a, A, V> {
        self.iter()
    }
}
