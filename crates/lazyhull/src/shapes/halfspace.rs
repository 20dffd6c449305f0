//! Half-spaces and H-represented polytopes in `R^n`.

use nalgebra::DVector;

use crate::error::{check_dim, Result, SetError};
use crate::protocol::{check_direction, LazySet};
use crate::scalar::Real;

/// Closed half-space `a · x <= b`.
///
/// Invariants:
/// - `a` is non-zero; it is not required to be unit length.
#[derive(Clone, Debug, PartialEq)]
pub struct HalfSpace<N: Real> {
    pub a: DVector<N>,
    pub b: N,
}

impl<N: Real> HalfSpace<N> {
    pub fn new(a: DVector<N>, b: N) -> Result<Self> {
        if a.iter().all(|ai| ai.is_zero()) {
            return Err(SetError::DegenerateConstraint);
        }
        Ok(Self { a, b })
    }

    #[inline]
    pub fn contains(&self, x: &DVector<N>) -> bool {
        self.a.dot(x) <= self.b
    }

    /// `t > 0` with `d = t a`, if `d` points exactly along the normal.
    pub fn positive_multiple(&self, d: &DVector<N>) -> Option<N> {
        if d.len() != self.a.len() {
            return None;
        }
        let da = d.dot(&self.a);
        if da <= N::zero() {
            return None;
        }
        let aa = self.a.dot(&self.a);
        // parallel iff every 2x2 minor of [d a] vanishes
        let n = d.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let m = d[i].clone() * self.a[j].clone() - d[j].clone() * self.a[i].clone();
                if !m.is_zero() {
                    return None;
                }
            }
        }
        Some(da / aa)
    }
}

impl<N: Real> LazySet<N> for HalfSpace<N> {
    fn dim(&self) -> usize {
        self.a.len()
    }

    /// Finite only for directions along `a`; the answer is the foot of the
    /// normal on the boundary hyperplane.
    fn support_vector(&self, d: &DVector<N>) -> Result<DVector<N>> {
        check_direction(self, d)?;
        if self.positive_multiple(d).is_none() {
            return Err(SetError::Unbounded);
        }
        let aa = self.a.dot(&self.a);
        Ok(&self.a * (self.b.clone() / aa))
    }

    fn support_function(&self, d: &DVector<N>) -> Result<N> {
        check_direction(self, d)?;
        self.positive_multiple(d)
            .map(|t| t * self.b.clone())
            .ok_or(SetError::Unbounded)
    }

    fn is_bounded(&self) -> bool {
        false
    }
}

/// Intersection of finitely many half-spaces in `R^dim`.
///
/// No constraint means the whole space. This is a container for engine output
/// and membership checks; it does not answer support queries.
#[derive(Clone, Debug, PartialEq)]
pub struct HPolytope<N: Real> {
    dim: usize,
    constraints: Vec<HalfSpace<N>>,
}

impl<N: Real> HPolytope<N> {
    #[inline]
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            constraints: Vec::new(),
        }
    }

    pub fn from_constraints(dim: usize, constraints: Vec<HalfSpace<N>>) -> Result<Self> {
        for h in &constraints {
            check_dim(dim, h.a.len())?;
        }
        Ok(Self { dim, constraints })
    }

    /// Append inequality (intersection).
    pub fn add_constraint(&mut self, h: HalfSpace<N>) -> Result<()> {
        check_dim(self.dim, h.a.len())?;
        self.constraints.push(h);
        Ok(())
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn constraints(&self) -> &[HalfSpace<N>] {
        &self.constraints
    }

    #[inline]
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn contains(&self, x: &DVector<N>) -> Result<bool> {
        check_dim(self.dim, x.len())?;
        Ok(self.constraints.iter().all(|h| h.contains(x)))
    }

    /// Offset of the constraint whose normal equals `d` exactly, if any.
    pub fn offset_along(&self, d: &DVector<N>) -> Option<&N> {
        self.constraints.iter().find(|h| h.a == *d).map(|h| &h.b)
    }
}
