//! Zonotopes: center plus a Minkowski sum of generator segments.

use nalgebra::DVector;

use crate::error::{check_dim, Result, SetError};
use crate::protocol::{check_direction, LazySet};
use crate::scalar::{sign, Real};

/// Zonotope `{c + Σ ξ_k g_k : ξ_k ∈ [-1, 1]}`.
///
/// The *order* is the number of generators (not normalized by dimension).
#[derive(Clone, Debug, PartialEq)]
pub struct Zonotope<N: Real> {
    pub center: DVector<N>,
    pub generators: Vec<DVector<N>>,
}

impl<N: Real> Zonotope<N> {
    pub fn new(center: DVector<N>, generators: Vec<DVector<N>>) -> Result<Self> {
        for g in &generators {
            check_dim(center.len(), g.len())?;
        }
        Ok(Self { center, generators })
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.generators.len()
    }

    /// All `2^order` sign combinations `c + Σ ±g_k`.
    ///
    /// Contains every vertex (and possibly non-extreme points); meant for small
    /// orders in checks and plots. Fails with `EnumerationOverflow` once
    /// `2^order` does not fit in `usize`.
    pub fn vertices(&self) -> Result<Vec<DVector<N>>> {
        let p = self.generators.len();
        let count = sign_patterns(p)?;
        let mut out = Vec::with_capacity(count.min(1 << 20));
        for mask in 0..count {
            let mut v = self.center.clone();
            for (k, g) in self.generators.iter().enumerate() {
                if mask & (1 << k) != 0 {
                    v += g;
                } else {
                    v -= g;
                }
            }
            out.push(v);
        }
        Ok(out)
    }
}

/// `2^n`, or `EnumerationOverflow` when it exceeds `usize`.
pub(crate) fn sign_patterns(n: usize) -> Result<usize> {
    u32::try_from(n)
        .ok()
        .and_then(|s| 1usize.checked_shl(s))
        .ok_or(SetError::EnumerationOverflow { exponent: n })
}

impl<N: Real> LazySet<N> for Zonotope<N> {
    fn dim(&self) -> usize {
        self.center.len()
    }

    fn support_vector(&self, d: &DVector<N>) -> Result<DVector<N>> {
        check_direction(self, d)?;
        let mut x = self.center.clone();
        for g in &self.generators {
            x += g * sign(&d.dot(g));
        }
        Ok(x)
    }

    fn support_function(&self, d: &DVector<N>) -> Result<N> {
        check_direction(self, d)?;
        let mut acc = d.dot(&self.center);
        for g in &self.generators {
            acc += d.dot(g).abs();
        }
        Ok(acc)
    }

    fn is_bounded(&self) -> bool {
        true
    }

    fn as_zonotope(&self) -> Option<&Zonotope<N>> {
        Some(self)
    }
}
