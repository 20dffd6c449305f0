//! One-dimensional sets to intervals.

use nalgebra::dvector;

use crate::error::{check_dim, Result};
use crate::protocol::LazySet;
use crate::scalar::Real;
use crate::shapes::Interval;

/// `[σ(-1)_0, σ(1)_0]` for a set on the real line.
///
/// Fails with `DimensionMismatch` unless `dim(s) == 1`.
pub fn overapproximate_interval<N: Real, S: LazySet<N> + ?Sized>(s: &S) -> Result<Interval<N>> {
    check_dim(1, s.dim())?;
    if let Some(iv) = s.as_interval() {
        return Ok(iv.clone());
    }
    let lo = s.support_vector(&dvector![-N::one()])?;
    let hi = s.support_vector(&dvector![N::one()])?;
    Interval::new(lo[0].clone(), hi[0].clone())
}
