//! Zonotope enclosure of the convex hull of two zonotopes.
//!
//! The minimal-volume enclosing zonotope is out of reach; the bound below is
//! cheap, sound, and has order `2p + 1` for inputs of order `p`.

use tracing::debug;

use crate::combinators::ConvexHull;
use crate::error::{check_dim, Result, SetError};
use crate::scalar::{half, Real};
use crate::shapes::Zonotope;

/// Zonotope containing `CH(Z1, Z2)`.
///
/// With `Z1 = (c1, g1)` and `Z2 = (c2, g2)` of equal order `p`, the result has
/// center `(c1 + c2) / 2` and generators `(g1_k + g2_k) / 2` for every `k`,
/// then `(c1 - c2) / 2`, then `(g1_k - g2_k) / 2` for every `k`.
pub fn merge_zonotopes<N: Real>(z1: &Zonotope<N>, z2: &Zonotope<N>) -> Result<Zonotope<N>> {
    check_dim(z1.center.len(), z2.center.len())?;
    if z1.order() != z2.order() {
        return Err(SetError::OrderMismatch {
            left: z1.order(),
            right: z2.order(),
        });
    }
    let p = z1.order();
    debug!(dim = z1.center.len(), order = p, "zonotope hull merge");
    let center = (&z1.center + &z2.center).map(half);
    let mut generators = Vec::with_capacity(2 * p + 1);
    generators.extend(
        z1.generators
            .iter()
            .zip(&z2.generators)
            .map(|(a, b)| (a + b).map(half)),
    );
    generators.push((&z1.center - &z2.center).map(half));
    generators.extend(
        z1.generators
            .iter()
            .zip(&z2.generators)
            .map(|(a, b)| (a - b).map(half)),
    );
    Zonotope::new(center, generators)
}

/// Zonotope enclosure of a hull whose operands are both zonotopes.
///
/// Fails with `Unsupported` when either operand is not a `Zonotope`.
pub fn overapproximate_hull_zonotope<N: Real>(ch: &ConvexHull<N>) -> Result<Zonotope<N>> {
    let unsupported = SetError::Unsupported { what: "zonotope" };
    let z1 = ch.first().as_zonotope().ok_or(unsupported.clone())?;
    let z2 = ch.second().as_zonotope().ok_or(unsupported)?;
    merge_zonotopes(z1, z2)
}
