use nalgebra::DVector;
use num_traits::Float;

use crate::error::{check_dim, Result};
use crate::protocol::{check_direction, LazySet};
use crate::scalar::Real;

/// Euclidean ball `{x : ||x - center|| <= radius}`.
///
/// Needs square roots, hence the `Float` bound on top of `Real`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ball2<N: Real> {
    pub center: DVector<N>,
    pub radius: N,
}

impl<N: Real + Float> Ball2<N> {
    #[inline]
    pub fn new(center: DVector<N>, radius: N) -> Self {
        debug_assert!(radius >= N::zero(), "negative ball radius");
        Self { center, radius }
    }

    /// Membership check for a point of matching dimension.
    pub fn contains(&self, x: &DVector<N>) -> Result<bool> {
        check_dim(self.center.len(), x.len())?;
        let diff = x - &self.center;
        Ok(diff.dot(&diff) <= self.radius * self.radius)
    }
}

impl<N: Real + Float> LazySet<N> for Ball2<N> {
    fn dim(&self) -> usize {
        self.center.len()
    }

    fn support_vector(&self, d: &DVector<N>) -> Result<DVector<N>> {
        check_direction(self, d)?;
        let norm = Float::sqrt(d.dot(d));
        if norm == N::zero() {
            return Ok(self.center.clone());
        }
        Ok(&self.center + d * (self.radius / norm))
    }

    fn support_function(&self, d: &DVector<N>) -> Result<N> {
        check_direction(self, d)?;
        Ok(d.dot(&self.center) + self.radius * Float::sqrt(d.dot(d)))
    }

    fn is_bounded(&self) -> bool {
        true
    }
}
