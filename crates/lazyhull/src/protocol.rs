//! Support-function protocol every convex set implements.
//!
//! A lazy set never lists vertices or constraints. It answers, for a direction
//! `d`, a point maximizing `d·x` (support vector) and the maximal value
//! (support function). Combinators and the overapproximation engine only ever
//! talk to sets through this trait.
//!
//! Conventions
//! - `d.len()` must equal `dim()`; otherwise `SetError::DimensionMismatch`.
//! - Support vectors need not be unique; any maximizer is valid.
//! - A zero direction may be answered with any point of the set. Only
//!   `SymmetricIntervalHull` promises the origin.

use std::rc::Rc;

use nalgebra::DVector;

use crate::error::{check_dim, Result};
use crate::scalar::Real;
use crate::shapes::{HPolygon, Hyperrectangle, Interval, Zonotope};

/// Shared, immutable handle to a lazy set.
///
/// `Rc` keeps the interval-hull cache single-threaded by construction; clone
/// the wrapper per thread instead of sharing it.
pub type SetRef<N> = Rc<dyn LazySet<N>>;

/// Convex set given by its support function.
pub trait LazySet<N: Real> {
    /// Ambient dimension.
    fn dim(&self) -> usize;

    /// A point of the set maximizing `d·x`.
    fn support_vector(&self, d: &DVector<N>) -> Result<DVector<N>>;

    /// `max { d·x : x ∈ S }`. Override when a closed form is cheaper.
    fn support_function(&self, d: &DVector<N>) -> Result<N> {
        let x = self.support_vector(d)?;
        Ok(d.dot(&x))
    }

    /// Upper bound on `support_function`, possibly cheaper and looser.
    fn support_function_upper_bound(&self, d: &DVector<N>) -> Result<N> {
        self.support_function(d)
    }

    fn is_bounded(&self) -> bool;

    fn is_empty(&self) -> bool {
        false
    }

    fn as_hyperrectangle(&self) -> Option<&Hyperrectangle<N>> {
        None
    }

    fn as_interval(&self) -> Option<&Interval<N>> {
        None
    }

    fn as_hpolygon(&self) -> Option<&HPolygon<N>> {
        None
    }

    fn as_zonotope(&self) -> Option<&Zonotope<N>> {
        None
    }
}

/// Check that direction `d` matches the dimension of `s`.
#[inline]
pub(crate) fn check_direction<N: Real, S: LazySet<N> + ?Sized>(
    s: &S,
    d: &DVector<N>,
) -> Result<()> {
    check_dim(s.dim(), d.len())
}

/// Point among `candidates` with the largest `d·x`; the earliest wins ties.
pub(crate) fn arg_max<N: Real>(
    d: &DVector<N>,
    candidates: impl IntoIterator<Item = DVector<N>>,
) -> Option<DVector<N>> {
    let mut best: Option<(DVector<N>, N)> = None;
    for x in candidates {
        let val = d.dot(&x);
        match &best {
            Some((_, bv)) if val <= *bv => {}
            _ => best = Some((x, val)),
        }
    }
    best.map(|(x, _)| x)
}
