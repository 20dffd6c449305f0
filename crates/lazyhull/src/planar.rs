//! Convex hull of a finite planar point set.
//!
//! Andrew's monotone chain: sort lexicographically by `(x, y)`, build the lower
//! and upper chains, drop the shared endpoints. The only numeric primitive is
//! the sign of a 2D cross product, compared with the scalar's own ordering, so
//! exact scalar types give exact hulls.
//!
//! Output order: counter-clockwise, starting at the lexicographically smallest
//! point. Duplicates and non-extreme points (including collinear boundary
//! points) are removed.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::scalar::{cross2, Real};

/// Hull vertices of `points` in counter-clockwise order.
///
/// Degenerate inputs return the deduplicated minimal set: nothing for no
/// points, one point, or the two extreme points of a collinear set.
pub fn convex_hull<N: Real>(points: &[Vector2<N>]) -> Vec<Vector2<N>> {
    let mut pts: Vec<Vector2<N>> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut lower: Vec<Vector2<N>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2
            && cross2(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= N::zero()
        {
            lower.pop();
        }
        lower.push(p.clone());
    }
    let mut upper: Vec<Vector2<N>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2
            && cross2(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= N::zero()
        {
            upper.pop();
        }
        upper.push(p.clone());
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

fn lex_cmp<N: Real>(a: &Vector2<N>, b: &Vector2<N>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}
