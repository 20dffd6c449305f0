//! Empty set, single points and 1-D intervals.

use std::marker::PhantomData;

use nalgebra::DVector;

use crate::error::{check_dim, Result, SetError};
use crate::protocol::{check_direction, LazySet};
use crate::scalar::Real;

/// The empty set in `R^n`. Identity element of convex hull and union.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptySet<N> {
    dim: usize,
    _scalar: PhantomData<N>,
}

impl<N> EmptySet<N> {
    #[inline]
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            _scalar: PhantomData,
        }
    }
}

impl<N: Real> LazySet<N> for EmptySet<N> {
    fn dim(&self) -> usize {
        self.dim
    }
    fn support_vector(&self, d: &DVector<N>) -> Result<DVector<N>> {
        check_direction(self, d)?;
        Err(SetError::EmptySet)
    }
    fn is_bounded(&self) -> bool {
        true
    }
    fn is_empty(&self) -> bool {
        true
    }
}

/// A single point.
#[derive(Clone, Debug, PartialEq)]
pub struct Singleton<N: Real> {
    pub element: DVector<N>,
}

impl<N: Real> Singleton<N> {
    #[inline]
    pub fn new(element: DVector<N>) -> Self {
        Self { element }
    }
}

impl<N: Real> LazySet<N> for Singleton<N> {
    fn dim(&self) -> usize {
        self.element.len()
    }
    fn support_vector(&self, d: &DVector<N>) -> Result<DVector<N>> {
        check_direction(self, d)?;
        Ok(self.element.clone())
    }
    fn is_bounded(&self) -> bool {
        true
    }
}

/// Closed interval `[lo, hi]` on the real line.
///
/// Invariant: `lo <= hi`, checked by [`Interval::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct Interval<N: Real> {
    pub lo: N,
    pub hi: N,
}

impl<N: Real> Interval<N> {
    /// Fails with `InvertedBounds` unless `lo <= hi`.
    #[inline]
    pub fn new(lo: N, hi: N) -> Result<Self> {
        if lo <= hi {
            Ok(Self { lo, hi })
        } else {
            Err(SetError::InvertedBounds)
        }
    }

    #[inline]
    pub fn contains(&self, x: &N) -> bool {
        self.lo <= *x && *x <= self.hi
    }

    /// `hi - lo`.
    #[inline]
    pub fn width(&self) -> N {
        self.hi.clone() - self.lo.clone()
    }
}

impl<N: Real> LazySet<N> for Interval<N> {
    fn dim(&self) -> usize {
        1
    }
    fn support_vector(&self, d: &DVector<N>) -> Result<DVector<N>> {
        check_dim(1, d.len())?;
        let x = if d[0] > N::zero() {
            self.hi.clone()
        } else {
            self.lo.clone()
        };
        Ok(DVector::from_element(1, x))
    }
    fn is_bounded(&self) -> bool {
        true
    }
    fn as_interval(&self) -> Option<&Interval<N>> {
        Some(self)
    }
}
