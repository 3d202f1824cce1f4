//! Staged edits with all-or-nothing outcome.
//!
//! A compound mutation touches one or both indices several times, and any
//! step may fail in a user comparison. Each index therefore gets an
//! [`EditLog`]: staged inserts are performed immediately (later steps must
//! observe them) but remain undoable, while staged erases are deferred —
//! the element stays physically present until commit. Commit and abort use
//! only comparator-free unlinks, so once staging has succeeded the outcome
//! can no longer fail halfway.

use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::index::OrderedIndex;
use crate::node::NodeId;

/// One staged operation against an index.
#[derive(Clone, Copy, Debug)]
enum StagedOp {
    /// Physically linked already; unlink again on abort.
    Insert(NodeId),
    /// Still physically present; unlink on commit.
    Erase(NodeId),
}

/// Bounded log of staged operations against a single index.
///
/// `CAP` bounds the operations one compound mutation can stage: 1 for the
/// domain index, 4 for the maxima index (edited point out + in, plus one
/// re-evaluation per neighbor).
#[derive(Debug)]
pub(crate) struct EditLog<const CAP: usize> {
    ops: ArrayVec<StagedOp, CAP>,
}

impl<const CAP: usize> EditLog<CAP> {
    pub(crate) fn new() -> Self {
        Self {
            ops: ArrayVec::new(),
        }
    }

    /// Records a physical insert of `id`, to be undone on abort.
    pub(crate) fn record_insert(&mut self, id: NodeId) {
        self.ops.push(StagedOp::Insert(id));
    }

    /// Records a deferred erase of `id`; the element stays in the index
    /// until [`Self::commit`].
    pub(crate) fn record_erase(&mut self, id: NodeId) {
        self.ops.push(StagedOp::Erase(id));
    }

    /// Makes every staged operation permanent, performing deferred erases
    /// in registration order. Comparator-free.
    pub(crate) fn commit<A, V>(self, index: &mut OrderedIndex<A, V>) {
        for op in self.ops {
            if let StagedOp::Erase(id) = op {
                index.unlink(id);
            }
        }
    }

    /// Abandons the edit: unlinks staged inserts in reverse registration
    /// order; deferred erases simply never happen. Comparator-free.
    pub(crate) fn abort<A, V>(self, index: &mut OrderedIndex<A, V>) {
        for op in self.ops.into_iter().rev() {
            if let StagedOp::Insert(id) = op {
                index.unlink(id);
            }
        }
    }
}

/// Rollback snapshot of an in-place value replacement.
///
/// Holds the value cell that [`swap_value`](OrderedIndex::swap_value)
/// displaced. Dropped on commit; reinstalled on abort.
#[derive(Debug)]
pub(crate) struct ValueSwap<V> {
    node: NodeId,
    old: Arc<V>,
}

impl<V> ValueSwap<V> {
    pub(crate) const fn new(node: NodeId, old: Arc<V>) -> Self {
        Self { node, old }
    }

    /// Reinstalls the displaced cell.
    pub(crate) fn restore<A>(self, index: &mut OrderedIndex<A, V>) {
        index.restore_value(self.node, self.old);
    }
}
