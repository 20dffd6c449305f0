//! Axis-aligned bounding box from `2n` support queries.

use nalgebra::DVector;
use tracing::debug;

use crate::cfg::Oracle;
use crate::error::{Result, SetError};
use crate::protocol::LazySet;
use crate::scalar::{basis, Real};
use crate::shapes::Hyperrectangle;

/// Tightest box around `s` (under `oracle`); `None` when `s` is empty.
///
/// Along axis `i` the box spans `[-ρ(-e_i), ρ(e_i)]`. A `Hyperrectangle`
/// input comes back unchanged.
pub fn overapproximate_box<N: Real, S: LazySet<N> + ?Sized>(
    s: &S,
    oracle: Oracle,
) -> Result<Option<Hyperrectangle<N>>> {
    if let Some(h) = s.as_hyperrectangle() {
        return Ok(Some(h.clone()));
    }
    if s.is_empty() {
        return Ok(None);
    }
    if !s.is_bounded() {
        return Err(SetError::Unbounded);
    }
    let n = s.dim();
    debug!(dim = n, ?oracle, "box overapproximation");
    let mut low = DVector::zeros(n);
    let mut high = DVector::zeros(n);
    for i in 0..n {
        high[i] = oracle.support(s, &basis(n, i, N::one()))?;
        low[i] = -oracle.support(s, &basis(n, i, -N::one()))?;
    }
    Hyperrectangle::from_bounds(&low, &high).map(Some)
}
