//! Planar polygon in constraint form with support queries.
//!
//! Invariants
//! - Constraints are sorted counter-clockwise by the angle of their normal,
//!   starting at direction `(1, 0)`.
//! - No two normals point the same way (parallels are coalesced, tighter kept).
//! - Every constraint touches the polygon: `new` and `insert` prune redundant
//!   ones before returning.
//!
//! Ordering uses half-plane classification plus the sign of a cross product,
//! never `atan2`, so it is exact for rational scalars.
//!
//! Support vectors are intersections of the two consecutive edge lines whose
//! normals bracket the query direction, which is only sound for bounded
//! polygons without redundant constraints. Infeasible constraint sets are not
//! detected.

use std::cmp::Ordering;

use nalgebra::{DVector, Vector2};

use crate::error::{check_dim, Result, SetError};
use crate::planar::convex_hull;
use crate::protocol::{check_direction, LazySet};
use crate::scalar::{wedge, Real};
use crate::shapes::HalfSpace;

/// Bounded convex polygon `∩ {a_k · x <= b_k}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HPolygon<N: Real> {
    constraints: Vec<HalfSpace<N>>,
}

impl<N: Real> HPolygon<N> {
    /// Sort, coalesce and prune `constraints`; each must live in `R^2`.
    pub fn new(constraints: Vec<HalfSpace<N>>) -> Result<Self> {
        let mut p = Self {
            constraints: Vec::with_capacity(constraints.len()),
        };
        for h in constraints {
            p.insert_sorted(h)?;
        }
        p.remove_redundant_constraints();
        Ok(p)
    }

    /// Polygon spanned by `points` (hull first, then outward edge normals).
    ///
    /// A single point or a segment yields a flat but bounded polygon.
    pub fn from_vertices(points: &[Vector2<N>]) -> Result<Self> {
        let hull = convex_hull(points);
        let mut hs = Vec::with_capacity(hull.len().max(4));
        match hull.len() {
            0 => return Err(SetError::EmptySet),
            1 => {
                let p = &hull[0];
                for (a, b) in [
                    (Vector2::new(N::one(), N::zero()), p.x.clone()),
                    (Vector2::new(N::zero(), N::one()), p.y.clone()),
                    (Vector2::new(-N::one(), N::zero()), -p.x.clone()),
                    (Vector2::new(N::zero(), -N::one()), -p.y.clone()),
                ] {
                    hs.push(HalfSpace::new(to_dvec(&a), b)?);
                }
            }
            2 => {
                let (p, q) = (&hull[0], &hull[1]);
                let e = q - p;
                // two sides of the segment's line, then the two end caps
                let n = Vector2::new(e.y.clone(), -e.x.clone());
                hs.push(HalfSpace::new(to_dvec(&n), n.dot(p))?);
                hs.push(HalfSpace::new(to_dvec(&-n.clone()), -n.dot(p))?);
                hs.push(HalfSpace::new(to_dvec(&e), e.dot(q))?);
                hs.push(HalfSpace::new(to_dvec(&-e.clone()), -e.dot(p))?);
            }
            m => {
                for k in 0..m {
                    let p = &hull[k];
                    let q = &hull[(k + 1) % m];
                    let edge = q - p;
                    // For CCW hull order, outward normal is 90° CW: (edge.y, -edge.x)
                    let n = Vector2::new(edge.y.clone(), -edge.x.clone());
                    let c = n.dot(p);
                    hs.push(HalfSpace::new(to_dvec(&n), c)?);
                }
            }
        }
        Self::new(hs)
    }

    #[inline]
    pub fn constraints(&self) -> &[HalfSpace<N>] {
        &self.constraints
    }

    /// Insert a half-space and preserve invariants.
    pub fn insert(&mut self, h: HalfSpace<N>) -> Result<()> {
        self.insert_sorted(h)?;
        self.remove_redundant_constraints();
        Ok(())
    }

    /// Binary search by angle, coalesce parallels.
    fn insert_sorted(&mut self, h: HalfSpace<N>) -> Result<()> {
        check_dim(2, h.a.len())?;
        let lo = self
            .constraints
            .partition_point(|g| ccw_cmp(&g.a, &h.a) == Ordering::Less);
        if let Some(same) = self.constraints.get_mut(lo) {
            if ccw_cmp(&same.a, &h.a) == Ordering::Equal {
                // h.a = t · same.a with t > 0; h is tighter iff h.b < t · same.b
                let t = same.a.dot(&h.a) / same.a.dot(&same.a);
                if h.b < t * same.b.clone() {
                    *same = h;
                }
                return Ok(());
            }
        }
        self.constraints.insert(lo, h);
        Ok(())
    }

    /// Bounded iff consecutive normals always turn by less than a half circle.
    pub fn is_bounded_polygon(&self) -> bool {
        let m = self.constraints.len();
        m >= 3
            && (0..m).all(|k| {
                wedge(&self.constraints[k].a, &self.constraints[(k + 1) % m].a) > N::zero()
            })
    }

    /// Drop constraints that do not cut the polygon spanned by their neighbours.
    ///
    /// A dropped constraint contains the cone of its two neighbours, so the set
    /// never changes.
    pub fn remove_redundant_constraints(&mut self) {
        'outer: loop {
            let m = self.constraints.len();
            if m <= 3 {
                return;
            }
            for k in 0..m {
                let prev = &self.constraints[(k + m - 1) % m];
                let next = &self.constraints[(k + 1) % m];
                if wedge(&prev.a, &next.a) <= N::zero() {
                    continue;
                }
                let Some(v) = line_intersection(prev, next) else {
                    continue;
                };
                if self.constraints[k].contains(&v) {
                    self.constraints.remove(k);
                    continue 'outer;
                }
            }
            return;
        }
    }

    /// Corners in counter-clockwise order (one per consecutive constraint pair).
    pub fn vertices(&self) -> Result<Vec<DVector<N>>> {
        if !self.is_bounded_polygon() {
            return Err(SetError::Unbounded);
        }
        let m = self.constraints.len();
        (0..m)
            .map(|k| {
                line_intersection(&self.constraints[k], &self.constraints[(k + 1) % m])
                    .ok_or(SetError::Unbounded)
            })
            .collect()
    }

    pub fn contains(&self, x: &DVector<N>) -> Result<bool> {
        check_dim(2, x.len())?;
        Ok(self.constraints.iter().all(|h| h.contains(x)))
    }
}

impl<N: Real> LazySet<N> for HPolygon<N> {
    fn dim(&self) -> usize {
        2
    }

    fn support_vector(&self, d: &DVector<N>) -> Result<DVector<N>> {
        check_direction(self, d)?;
        if !self.is_bounded_polygon() {
            return Err(SetError::Unbounded);
        }
        let m = self.constraints.len();
        let k = self
            .constraints
            .partition_point(|g| ccw_cmp(&g.a, d) == Ordering::Less)
            % m;
        let prev = (k + m - 1) % m;
        line_intersection(&self.constraints[prev], &self.constraints[k]).ok_or(SetError::Unbounded)
    }

    fn is_bounded(&self) -> bool {
        self.is_bounded_polygon()
    }

    fn as_hpolygon(&self) -> Option<&HPolygon<N>> {
        Some(self)
    }
}

/// Counter-clockwise angular order of planar directions, starting at `(1, 0)`.
pub(crate) fn ccw_cmp<N: Real>(a: &DVector<N>, b: &DVector<N>) -> Ordering {
    let (ha, hb) = (half_plane(a), half_plane(b));
    if ha != hb {
        return ha.cmp(&hb);
    }
    let w = wedge(a, b);
    if w > N::zero() {
        Ordering::Less
    } else if w < N::zero() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// 0 for angles in `[0, π)`, 1 for `[π, 2π)`.
fn half_plane<N: Real>(v: &DVector<N>) -> u8 {
    let zero = N::zero();
    if v[1] > zero || (v[1] == zero && v[0] > zero) {
        0
    } else {
        1
    }
}

/// Point on both boundary lines, `None` for parallel lines.
fn line_intersection<N: Real>(h1: &HalfSpace<N>, h2: &HalfSpace<N>) -> Option<DVector<N>> {
    let det = wedge(&h1.a, &h2.a);
    if det.is_zero() {
        return None;
    }
    let (a1, a2) = (&h1.a, &h2.a);
    let x = (h1.b.clone() * a2[1].clone() - h2.b.clone() * a1[1].clone()) / det.clone();
    let y = (a1[0].clone() * h2.b.clone() - a2[0].clone() * h1.b.clone()) / det;
    Some(DVector::from_vec(vec![x, y]))
}

#[inline]
pub(crate) fn to_dvec<N: Real>(v: &Vector2<N>) -> DVector<N> {
    DVector::from_vec(vec![v.x.clone(), v.y.clone()])
}
