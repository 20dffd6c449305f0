//! Template-direction polytopes and the usual direction families.
//!
//! A template polytope is `∩_d {x : d·x <= ρ(d, S)}` over a finite direction
//! set. Adding directions can only shrink it, so refining the template
//! tightens the bound monotonically.

use nalgebra::DVector;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::cfg::Oracle;
use crate::error::{check_dim, Result, SetError};
use crate::protocol::LazySet;
use crate::scalar::{basis, Real};
use crate::shapes::{sign_patterns, HPolytope, HalfSpace};

/// Outer polytope of `s` along `dirs`.
///
/// Every direction must be non-zero and of dimension `dim(s)`.
pub fn template_polytope<N: Real, S: LazySet<N> + ?Sized>(
    s: &S,
    dirs: &[DVector<N>],
    oracle: Oracle,
) -> Result<HPolytope<N>> {
    if s.is_empty() {
        return Err(SetError::EmptySet);
    }
    let n = s.dim();
    debug!(dim = n, directions = dirs.len(), ?oracle, "template overapproximation");
    let mut out = HPolytope::new(n);
    for d in dirs {
        check_dim(n, d.len())?;
        let b = oracle.support(s, d)?;
        out.add_constraint(HalfSpace::new(d.clone(), b)?)?;
    }
    Ok(out)
}

/// `±e_i` for every axis, in the order `e_0, -e_0, e_1, -e_1, ...`.
pub fn box_dirs<N: Real>(n: usize) -> Vec<DVector<N>> {
    (0..n)
        .flat_map(|i| [basis(n, i, N::one()), basis(n, i, -N::one())])
        .collect()
}

/// Box directions plus `±e_i ± e_j` for every pair `i < j`.
pub fn oct_dirs<N: Real>(n: usize) -> Vec<DVector<N>> {
    let mut out = box_dirs(n);
    for i in 0..n {
        for j in (i + 1)..n {
            for (si, sj) in [
                (N::one(), N::one()),
                (N::one(), -N::one()),
                (-N::one(), N::one()),
                (-N::one(), -N::one()),
            ] {
                let mut d = DVector::zeros(n);
                d[i] = si;
                d[j] = sj;
                out.push(d);
            }
        }
    }
    out
}

/// All `2^n` sign vectors `(±1, ..., ±1)`; meant for small `n`.
///
/// Fails with `EnumerationOverflow` once `2^n` does not fit in `usize`.
pub fn diag_dirs<N: Real>(n: usize) -> Result<Vec<DVector<N>>> {
    Ok((0..sign_patterns(n)?)
        .map(|mask| {
            DVector::from_fn(n, |i, _| {
                if (mask >> i) & 1 == 1 {
                    -N::one()
                } else {
                    N::one()
                }
            })
        })
        .collect())
}

/// Box and diagonal directions; in one dimension the two coincide.
pub fn box_diag_dirs<N: Real>(n: usize) -> Result<Vec<DVector<N>>> {
    let mut out = box_dirs(n);
    if n > 1 {
        out.extend(diag_dirs(n)?);
    }
    Ok(out)
}

/// `count` unit directions drawn uniformly from the sphere, reproducible from `seed`.
///
/// Rejection sampling from the cube; acceptance drops quickly beyond ten or so
/// dimensions.
pub fn spherical_dirs<N>(n: usize, count: usize, seed: u64) -> Vec<DVector<N>>
where
    N: Real + Float + SampleUniform,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);
    if n == 0 {
        return out;
    }
    while out.len() < count {
        // rejection from the cube keeps the distribution rotation invariant
        let v = DVector::from_fn(n, |_, _| rng.gen_range(-N::one()..=N::one()));
        let r2 = v.dot(&v);
        if r2 > N::zero() && r2 <= N::one() {
            out.push(v / Float::sqrt(r2));
        }
    }
    out
}
