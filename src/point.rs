//! Function points with shared payload cells.

use std::fmt;
use std::sync::Arc;

/// A single `(argument, value)` point of the function.
///
/// Both payloads live in separately replaceable [`Arc`] cells, so the same
/// logical point can sit in the domain index and the maxima index — and in
/// clones of the whole map — without duplicating `A` or `V`. Replacing a
/// value installs a fresh cell; an index still holding the old cell keeps
/// reading the old value until its own copy is retired.
pub struct Point<A, V> {
    argument: Arc<A>,
    value: Arc<V>,
}

impl<A, V> Point<A, V> {
    /// Creates a point, moving both payloads into fresh cells.
    pub(crate) fn new(argument: A, value: V) -> Self {
        Self {
            argument: Arc::new(argument),
            value: Arc::new(value),
        }
    }

    /// Returns the argument of the point.
    #[must_use]
    pub fn argument(&self) -> &A {
        &self.argument
    }

    /// Returns the value of the function at this point.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Replaces the value cell wholesale, returning the old cell.
    ///
    /// The caller keeps the returned cell as a rollback snapshot and
    /// reinstalls it via [`Point::restore_value`] if the surrounding edit
    /// aborts. Domain ordering depends only on the argument, so the swap
    /// never moves the point within the domain index.
    pub(crate) fn swap_value(&mut self, value: Arc<V>) -> Arc<V> {
        std::mem::replace(&mut self.value, value)
    }

    /// Reinstalls a value cell taken by [`Point::swap_value`].
    pub(crate) fn restore_value(&mut self, value: Arc<V>) {
        self.value = value;
    }
}

// ---------------------------------------------------------------------------
// Manual trait impls — avoid false `A: Trait, V: Trait` bounds.
// Cloning a Point clones two Arc handles, never the payloads.
// ---------------------------------------------------------------------------

impl<A, V> Clone for Point<A, V> {
    fn clone(&self) -> Self {
        Self {
            argument: Arc::clone(&self.argument),
            value: Arc::clone(&self.value),
        }
    }
}

impl<A: fmt::Debug, V: fmt::Debug> fmt::Debug for Point<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("argument", &self.argument)
            .field("value", &self.value)
            .finish()
    }
}
