//! Scalar bound for every set in the crate.
//!
//! `Real` collects what the kernel needs from a number type: an ordered field
//! with sign and absolute value. It holds for `f64`, `f32` and exact rationals
//! such as `num_rational::Rational64`. Nothing here carries a tolerance, so
//! exact scalars stay exact.

use nalgebra::{DVector, Scalar, Vector2};
use num_traits::{NumAssign, Signed};

/// Ordered field usable as the coordinate type of lazy sets.
pub trait Real: Scalar + Signed + NumAssign + PartialOrd {}

impl<T> Real for T where T: Scalar + Signed + NumAssign + PartialOrd {}

/// Sign as `-1`, `0` or `1`. Unlike `f64::signum`, zero maps to zero.
#[inline]
pub fn sign<N: Real>(x: &N) -> N {
    let zero = N::zero();
    if *x > zero {
        N::one()
    } else if *x < zero {
        -N::one()
    } else {
        N::zero()
    }
}

#[inline]
pub fn two<N: Real>() -> N {
    N::one() + N::one()
}

#[inline]
pub fn half<N: Real>(x: N) -> N {
    x / two()
}

/// Larger of two values; `a` wins ties and unordered pairs.
#[inline]
pub fn max_of<N: Real>(a: N, b: N) -> N {
    if b > a {
        b
    } else {
        a
    }
}

/// Smaller of two values; `a` wins ties and unordered pairs.
#[inline]
pub fn min_of<N: Real>(a: N, b: N) -> N {
    if b < a {
        b
    } else {
        a
    }
}

/// i-th standard basis vector scaled by `s`.
#[inline]
pub fn basis<N: Real>(n: usize, i: usize, s: N) -> DVector<N> {
    let mut e = DVector::zeros(n);
    e[i] = s;
    e
}

/// z-component of `(a - o) × (b - o)`; positive for a counter-clockwise turn.
#[inline]
pub fn cross2<N: Real>(o: &Vector2<N>, a: &Vector2<N>, b: &Vector2<N>) -> N {
    let (ax, ay) = (a.x.clone() - o.x.clone(), a.y.clone() - o.y.clone());
    let (bx, by) = (b.x.clone() - o.x.clone(), b.y.clone() - o.y.clone());
    ax * by - ay * bx
}

/// z-component of `a × b` for two planar vectors stored in `DVector`s.
#[inline]
pub(crate) fn wedge<N: Real>(a: &DVector<N>, b: &DVector<N>) -> N {
    a[0].clone() * b[1].clone() - a[1].clone() * b[0].clone()
}
