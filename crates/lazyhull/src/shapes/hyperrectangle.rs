//! Axis-aligned boxes in center/radius form.

use nalgebra::DVector;

use crate::error::{check_dim, Result};
use crate::protocol::{check_direction, LazySet};
use crate::scalar::{half, sign, Real};

/// Box `{x : |x_i - center_i| <= radius_i}`.
///
/// Invariants:
/// - `center.len() == radius.len()`.
/// - Every `radius_i >= 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Hyperrectangle<N: Real> {
    pub center: DVector<N>,
    pub radius: DVector<N>,
}

impl<N: Real> Hyperrectangle<N> {
    pub fn new(center: DVector<N>, radius: DVector<N>) -> Result<Self> {
        check_dim(center.len(), radius.len())?;
        debug_assert!(
            radius.iter().all(|r| *r >= N::zero()),
            "negative box radius"
        );
        Ok(Self { center, radius })
    }

    /// Box with corners `low` and `high` (componentwise `low <= high`).
    pub fn from_bounds(low: &DVector<N>, high: &DVector<N>) -> Result<Self> {
        check_dim(low.len(), high.len())?;
        let center = low.zip_map(high, |l, h| half(h + l));
        let radius = low.zip_map(high, |l, h| half(h - l));
        Self::new(center, radius)
    }

    #[inline]
    pub fn low(&self) -> DVector<N> {
        &self.center - &self.radius
    }

    #[inline]
    pub fn high(&self) -> DVector<N> {
        &self.center + &self.radius
    }

    pub fn contains(&self, x: &DVector<N>) -> Result<bool> {
        check_dim(self.center.len(), x.len())?;
        Ok(x.iter()
            .zip(self.center.iter().zip(self.radius.iter()))
            .all(|(xi, (ci, ri))| (xi.clone() - ci.clone()).abs() <= *ri))
    }
}

impl<N: Real> LazySet<N> for Hyperrectangle<N> {
    fn dim(&self) -> usize {
        self.center.len()
    }

    fn support_vector(&self, d: &DVector<N>) -> Result<DVector<N>> {
        check_direction(self, d)?;
        Ok(DVector::from_fn(self.dim(), |i, _| {
            self.center[i].clone() + sign(&d[i]) * self.radius[i].clone()
        }))
    }

    fn support_function(&self, d: &DVector<N>) -> Result<N> {
        check_direction(self, d)?;
        let mut acc = d.dot(&self.center);
        for (di, ri) in d.iter().zip(self.radius.iter()) {
            acc += di.abs() * ri.clone();
        }
        Ok(acc)
    }

    fn is_bounded(&self) -> bool {
        true
    }

    fn as_hyperrectangle(&self) -> Option<&Hyperrectangle<N>> {
        Some(self)
    }
}
