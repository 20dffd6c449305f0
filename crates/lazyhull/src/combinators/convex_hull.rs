//! Convex hull of two or many lazy sets.
//!
//! `σ(d, CH(X, Y))` is whichever of `σ(d, X)`, `σ(d, Y)` scores higher; the
//! support function is the max of the operand support functions. Empty
//! operands contribute nothing.

use std::rc::Rc;

use crate::error::{check_dim, Result};
use crate::protocol::{LazySet, SetRef};
use crate::scalar::Real;

binary_combinator! {
    /// Convex hull of two sets of equal dimension.
    ConvexHull
}

array_combinator! {
    /// Convex hull of a list of sets; the empty list is the empty set.
    ConvexHullArray
}

/// `CH(X, Y)`, absorbing an empty operand.
///
/// Returns the other operand itself (the same `Rc`) when one side is empty,
/// otherwise a fresh `ConvexHull`.
pub fn convex_hull<N: Real>(x: SetRef<N>, y: SetRef<N>) -> Result<SetRef<N>> {
    check_dim(x.dim(), y.dim())?;
    if y.is_empty() {
        return Ok(x);
    }
    if x.is_empty() {
        return Ok(y);
    }
    Ok(Rc::new(ConvexHull::new(x, y)?))
}

impl<N: Real> From<ConvexHull<N>> for ConvexHullArray<N> {
    fn from(ch: ConvexHull<N>) -> Self {
        let dim = ch.dim();
        Self {
            dim,
            sets: vec![ch.x, ch.y],
        }
    }
}
