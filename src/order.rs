//! Fallible ordering.
//!
//! The map is generic over user types whose comparison logic is allowed to
//! fail: [`TryOrd::try_cmp`] returns `Result<Ordering, OrderError>` instead
//! of a bare `Ordering`. Every call site in the crate propagates the error
//! and rolls back any staged work, so a failed comparison never corrupts
//! the container.

use std::cmp::Ordering;

use thiserror::Error;

use crate::point::Point;

/// Error produced by a failed comparison.
///
/// User [`TryOrd`] implementations construct one with [`OrderError::new`]
/// when they cannot order a pair of values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("comparison failed: {message}")]
pub struct OrderError {
    message: String,
}

impl OrderError {
    /// Creates an error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A strict total order whose comparison may fail.
///
/// The mirror of [`Ord`] for types with untrusted comparison logic. The
/// contract is the usual one — antisymmetric, transitive, total — on every
/// call that returns `Ok`. A returned `Err` aborts the surrounding map
/// operation; it carries no ordering information.
pub trait TryOrd {
    /// Compares `self` against `other`.
    fn try_cmp(&self, other: &Self) -> Result<Ordering, OrderError>;
}

// No blanket `impl<T: Ord> TryOrd for T` — coherence would then reject every
// hand-written fallible impl. Std types get impls by macro instead.
macro_rules! infallible_ord {
    ($($t:ty),* $(,)?) => {$(
        impl TryOrd for $t {
            #[inline]
            fn try_cmp(&self, other: &Self) -> Result<Ordering, OrderError> {
                Ok(Ord::cmp(self, other))
            }
        }
    )*};
}

infallible_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String,
);

impl TryOrd for str {
    #[inline]
    fn try_cmp(&self, other: &Self) -> Result<Ordering, OrderError> {
        Ok(Ord::cmp(self, other))
    }
}

impl<T: TryOrd + ?Sized> TryOrd for &T {
    #[inline]
    fn try_cmp(&self, other: &Self) -> Result<Ordering, OrderError> {
        T::try_cmp(self, other)
    }
}

// ---------------------------------------------------------------------------
// Point orderings
// ---------------------------------------------------------------------------

/// Maxima ordering: value descending, ties broken by argument ascending.
///
/// `Equal` therefore requires equal value *and* equal argument — within one
/// map that pins down a single point.
pub(crate) fn max_rank<A: TryOrd, V: TryOrd>(
    p: &Point<A, V>,
    q: &Point<A, V>,
) -> Result<Ordering, OrderError> {
    match q.value().try_cmp(p.value())? {
        Ordering::Equal => p.argument().try_cmp(q.argument()),
        ord => Ok(ord),
    }
}
