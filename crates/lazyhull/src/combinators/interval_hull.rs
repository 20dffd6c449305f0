//! Symmetric interval hull: the smallest origin-centred box containing a set.
//!
//! Purpose
//! - Cheap symmetric bound whose support vectors need one radius per axis
//!   touched by the direction.
//!
//! Caching
//! - Radius `i` is computed on first use from `σ(e_i)` and `σ(-e_i)` and kept
//!   for the lifetime of the wrapper. Axes never touched are never queried.
//! - The cache uses `OnceCell`, so the wrapper is `!Sync`; it lives behind the
//!   same single-threaded `Rc` as every other lazy set.

use std::cell::OnceCell;

use nalgebra::DVector;
use tracing::trace;

use crate::error::{Result, SetError};
use crate::protocol::{check_direction, LazySet, SetRef};
use crate::scalar::{basis, max_of, sign, Real};
use crate::shapes::Hyperrectangle;

/// `□(X)`: box centred at the origin with radii `r_i = max |x_i|` over `X`.
#[derive(Clone)]
pub struct SymmetricIntervalHull<N: Real> {
    set: SetRef<N>,
    cache: Vec<OnceCell<N>>,
}

impl<N: Real> SymmetricIntervalHull<N> {
    /// Wrap a bounded set. No support query happens here.
    pub fn new(set: SetRef<N>) -> Result<Self> {
        if !set.is_bounded() {
            return Err(SetError::Unbounded);
        }
        let cache = (0..set.dim()).map(|_| OnceCell::new()).collect();
        Ok(Self { set, cache })
    }

    #[inline]
    pub fn set(&self) -> &SetRef<N> {
        &self.set
    }

    /// Always the origin.
    pub fn center(&self) -> DVector<N> {
        DVector::zeros(self.cache.len())
    }

    /// Radius along axis `i` (0-based), computed once.
    pub fn radius(&self, i: usize) -> Result<N> {
        let dim = self.cache.len();
        let slot = self
            .cache
            .get(i)
            .ok_or(SetError::InvalidIndex { index: i, dim })?;
        if let Some(r) = slot.get() {
            return Ok(r.clone());
        }
        let r = self.compute_radius(i)?;
        trace!(axis = i, "interval hull radius computed");
        Ok(slot.get_or_init(|| r).clone())
    }

    /// All radii; queries every axis not yet cached.
    pub fn radius_hyperrectangle(&self) -> Result<DVector<N>> {
        let radii = (0..self.cache.len())
            .map(|i| self.radius(i))
            .collect::<Result<Vec<_>>>()?;
        Ok(DVector::from_vec(radii))
    }

    /// Concrete box `[-r, r]`.
    pub fn to_hyperrectangle(&self) -> Result<Hyperrectangle<N>> {
        Hyperrectangle::new(self.center(), self.radius_hyperrectangle()?)
    }

    fn compute_radius(&self, i: usize) -> Result<N> {
        let n = self.cache.len();
        let up = self.set.support_vector(&basis(n, i, N::one()))?;
        let down = self.set.support_vector(&basis(n, i, -N::one()))?;
        Ok(max_of(up[i].clone(), down[i].abs()))
    }
}

impl<N: Real> LazySet<N> for SymmetricIntervalHull<N> {
    fn dim(&self) -> usize {
        self.cache.len()
    }

    /// `sign(d_i) r_i` per axis; axes with `d_i = 0` map to 0 without a query.
    fn support_vector(&self, d: &DVector<N>) -> Result<DVector<N>> {
        check_direction(self, d)?;
        let mut out = DVector::zeros(d.len());
        for (i, di) in d.iter().enumerate() {
            if !di.is_zero() {
                out[i] = sign(di) * self.radius(i)?;
            }
        }
        Ok(out)
    }

    fn support_function(&self, d: &DVector<N>) -> Result<N> {
        check_direction(self, d)?;
        let mut acc = N::zero();
        for (i, di) in d.iter().enumerate() {
            if !di.is_zero() {
                acc += di.abs() * self.radius(i)?;
            }
        }
        Ok(acc)
    }

    fn is_bounded(&self) -> bool {
        true
    }

    fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
