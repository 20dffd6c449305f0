//! Outer polytope of `X ∩ P` for a compact `X` and an H-polytope `P`.
//!
//! For every template direction `d` the offset is `min_i ρ(d, X ∩ H_i)`, each
//! term a Lagrangian line search on one half-space (`HalfspaceCut`). The
//! minimum over single cuts bounds `ρ(d, X ∩ P)` from above, so the output
//! contains `X ∩ P`.
//!
//! Relaxation: no cut sees the others, so the output may be non-empty even
//! when `X ∩ P` is empty. That is expected; emptiness is not certified here.

use nalgebra::DVector;
use tracing::debug;

use crate::cfg::{LineSearchCfg, Oracle};
use crate::combinators::HalfspaceCut;
use crate::error::{check_dim, Result, SetError};
use crate::protocol::SetRef;
use crate::scalar::{min_of, Real};
use crate::shapes::{HPolytope, HalfSpace};

/// Template outer polytope of `x ∩ p` along `dirs`.
///
/// With `Oracle::UpperBound` each cut answers with
/// `min(ρ_ub(d, X), ρ(d, H_i))` instead of running the line search.
pub fn overapproximate_intersection<N: Real>(
    x: &SetRef<N>,
    p: &HPolytope<N>,
    dirs: &[DVector<N>],
    oracle: Oracle,
    cfg: LineSearchCfg,
) -> Result<HPolytope<N>> {
    let n = x.dim();
    check_dim(n, p.dim())?;
    if !x.is_bounded() {
        return Err(SetError::Unbounded);
    }
    if x.is_empty() {
        return Err(SetError::EmptySet);
    }
    debug!(
        dim = n,
        constraints = p.num_constraints(),
        directions = dirs.len(),
        ?oracle,
        "intersection overapproximation"
    );
    let cuts = p
        .constraints()
        .iter()
        .map(|h| HalfspaceCut::with_cfg(x.clone(), h.clone(), cfg))
        .collect::<Result<Vec<_>>>()?;

    let mut out = HPolytope::new(n);
    for d in dirs {
        check_dim(n, d.len())?;
        let mut bound = None;
        for cut in &cuts {
            let v = oracle.support(cut, d)?;
            bound = Some(match bound {
                Some(b) => min_of(b, v),
                None => v,
            });
        }
        let b = match bound {
            Some(b) => b,
            None => oracle.support(&**x, d)?,
        };
        out.add_constraint(HalfSpace::new(d.clone(), b)?)?;
    }
    Ok(out)
}
