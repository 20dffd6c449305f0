//! Lazy intersection of a compact set with one half-space.
//!
//! Purpose
//! - Support queries on `X ∩ H` without ever building `X ∩ H`.
//!
//! Method
//! - Lagrangian dual: `ρ(d, X ∩ H) = min_{λ≥0} ρ(d − λa, X) + λb` whenever the
//!   intersection is non-empty. The objective is convex in `λ`; every sampled
//!   `λ` yields an upper bound, so stopping early stays sound.
//! - Search: double the bracket `[0, h]` while the objective decreases, then a
//!   fixed number of ternary steps. Intended for floating point; with exact
//!   rationals the denominators grow with every step.
//!
//! References
//! - Frehse, Ray: "Flowpipe-guard intersection for reachability computations
//!   with support functions" (ADHS 2012), the line-search formulation.

use nalgebra::DVector;
use tracing::trace;

use crate::cfg::LineSearchCfg;
use crate::error::{check_dim, Result, SetError};
use crate::protocol::{check_direction, LazySet, SetRef};
use crate::scalar::{min_of, two, Real};
use crate::shapes::HalfSpace;

/// Result of the line search: best multiplier and objective value.
#[derive(Clone, Debug, PartialEq)]
pub struct LagrangianSupport<N: Real> {
    pub lambda: N,
    pub value: N,
}

/// `min_{λ≥0} ρ(d − λa, X) + λb` over the sampled multipliers.
///
/// The returned `value` is never below `ρ(d, X ∩ H)` (up to the arithmetic of
/// `N`), and reaches it when the search hits the minimizing `λ`.
pub fn lagrangian_support<N: Real>(
    x: &dyn LazySet<N>,
    h: &HalfSpace<N>,
    d: &DVector<N>,
    cfg: &LineSearchCfg,
) -> Result<LagrangianSupport<N>> {
    check_dim(x.dim(), d.len())?;
    check_dim(x.dim(), h.a.len())?;

    let eval = |lambda: &N| -> Result<N> {
        let shifted = d - &h.a * lambda.clone();
        Ok(x.support_function(&shifted)? + lambda.clone() * h.b.clone())
    };
    let f0 = eval(&N::zero())?;
    let mut best = LagrangianSupport {
        lambda: N::zero(),
        value: f0.clone(),
    };
    let keep = |lambda: &N, value: &N, best: &mut LagrangianSupport<N>| {
        if *value < best.value {
            best.lambda = lambda.clone();
            best.value = value.clone();
        }
    };

    // Grow [lo, hi] until the objective stops decreasing at hi.
    let mut lo = N::zero();
    let mut mid = N::one();
    let mut f_mid = eval(&mid)?;
    keep(&mid, &f_mid, &mut best);
    let mut hi = mid.clone();
    if f_mid < f0 {
        for _ in 0..cfg.max_doublings {
            let next = mid.clone() * two();
            let f_next = eval(&next)?;
            keep(&next, &f_next, &mut best);
            hi = next.clone();
            if f_next >= f_mid {
                break;
            }
            lo = mid;
            mid = next;
            f_mid = f_next;
        }
    }

    let three = two::<N>() + N::one();
    for _ in 0..cfg.iterations {
        let third = (hi.clone() - lo.clone()) / three.clone();
        let m1 = lo.clone() + third.clone();
        let m2 = hi.clone() - third;
        let f1 = eval(&m1)?;
        let f2 = eval(&m2)?;
        keep(&m1, &f1, &mut best);
        keep(&m2, &f2, &mut best);
        if f1 <= f2 {
            hi = m2;
        } else {
            lo = m1;
        }
    }
    trace!(iterations = cfg.iterations, "lagrangian line search finished");
    Ok(best)
}

/// `X ∩ H` for a compact `X` and a half-space `H`.
#[derive(Clone)]
pub struct HalfspaceCut<N: Real> {
    set: SetRef<N>,
    halfspace: HalfSpace<N>,
    cfg: LineSearchCfg,
}

impl<N: Real> HalfspaceCut<N> {
    pub fn new(set: SetRef<N>, halfspace: HalfSpace<N>) -> Result<Self> {
        Self::with_cfg(set, halfspace, LineSearchCfg::default())
    }

    /// Fails with `Unbounded` unless `set` is bounded.
    pub fn with_cfg(set: SetRef<N>, halfspace: HalfSpace<N>, cfg: LineSearchCfg) -> Result<Self> {
        check_dim(set.dim(), halfspace.a.len())?;
        if !set.is_bounded() {
            return Err(SetError::Unbounded);
        }
        Ok(Self {
            set,
            halfspace,
            cfg,
        })
    }

    #[inline]
    pub fn set(&self) -> &SetRef<N> {
        &self.set
    }

    #[inline]
    pub fn halfspace(&self) -> &HalfSpace<N> {
        &self.halfspace
    }
}

impl<N: Real> LazySet<N> for HalfspaceCut<N> {
    fn dim(&self) -> usize {
        self.set.dim()
    }

    /// Maximizer of `d − λ*a` over `X` at the best multiplier found.
    ///
    /// It lies in `H` only up to the accuracy of the line search.
    fn support_vector(&self, d: &DVector<N>) -> Result<DVector<N>> {
        check_direction(self, d)?;
        let best = lagrangian_support(self.set.as_ref(), &self.halfspace, d, &self.cfg)?;
        self.set
            .support_vector(&(d - &self.halfspace.a * best.lambda))
    }

    fn support_function(&self, d: &DVector<N>) -> Result<N> {
        check_direction(self, d)?;
        Ok(lagrangian_support(self.set.as_ref(), &self.halfspace, d, &self.cfg)?.value)
    }

    /// `min(ρ_ub(d, X), ρ(d, H))`; the half-space only helps along its normal.
    fn support_function_upper_bound(&self, d: &DVector<N>) -> Result<N> {
        check_direction(self, d)?;
        let outer = self.set.support_function_upper_bound(d)?;
        Ok(match self.halfspace.positive_multiple(d) {
            Some(t) => min_of(outer, t * self.halfspace.b.clone()),
            None => outer,
        })
    }

    fn is_bounded(&self) -> bool {
        true
    }

    fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
