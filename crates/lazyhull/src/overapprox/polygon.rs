//! Planar sets to `HPolygon`, coarse or ε-close.
//!
//! Modes
//! - ε infinite: bounding box written as the four constraints along east,
//!   north, west and south.
//! - ε finite: a `PolygonRefiner` produces the vertices of an outer polygon
//!   within Hausdorff distance ε; the engine converts them to constraints.
//!
//! `SandwichRefiner` is the default refiner. It keeps an outer polygon of
//! tangent lines and an inner polygon of support vectors, and adds the chord
//! normal wherever an outer corner is farther than ε from its chord.

use nalgebra::{DVector, Vector2};
use num_traits::Float;
use tracing::{debug, trace, warn};

use crate::cfg::RefineCfg;
use crate::error::{check_dim, Result, SetError};
use crate::protocol::LazySet;
use crate::scalar::{cross2, Real};
use crate::shapes::{to_dvec, HPolygon, HalfSpace};

/// Produces an outer polygon close to a planar set.
pub trait PolygonRefiner<N: Real> {
    /// Vertices of a polygon containing `s` within Hausdorff distance `eps` of it.
    fn refine<S: LazySet<N> + ?Sized>(&self, s: &S, eps: &N) -> Result<Vec<Vector2<N>>>;
}

/// Tangent/chord sandwich refinement in floating point.
///
/// `eps <= 0` never terminates on curved sets; it ends in `RefinementBudget`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SandwichRefiner {
    pub cfg: RefineCfg,
}

impl SandwichRefiner {
    #[inline]
    pub fn new(cfg: RefineCfg) -> Self {
        Self { cfg }
    }
}

/// Support direction with its support vector.
#[derive(Clone)]
struct Touch<N: Real> {
    dir: Vector2<N>,
    point: Vector2<N>,
}

impl<N: Real + Float> Touch<N> {
    fn new<S: LazySet<N> + ?Sized>(s: &S, dir: Vector2<N>) -> Result<Self> {
        let x = s.support_vector(&to_dvec(&dir))?;
        Ok(Self {
            dir,
            point: Vector2::new(x[0], x[1]),
        })
    }

    /// Intersection of the tangent lines of `self` and `next`.
    fn corner(&self, next: &Self) -> Vector2<N> {
        let (a, b) = (&self.dir, &next.dir);
        let (ca, cb) = (a.dot(&self.point), b.dot(&next.point));
        let det = a.x * b.y - a.y * b.x;
        Vector2::new((ca * b.y - cb * a.y) / det, (a.x * cb - b.x * ca) / det)
    }

    /// Distance from the outer corner to the chord `self.point -> next.point`.
    fn gap(&self, next: &Self) -> N {
        let chord = next.point - self.point;
        let len = Float::sqrt(chord.dot(&chord));
        if len > N::zero() {
            Float::abs(cross2(&self.point, &next.point, &self.corner(next))) / len
        } else {
            N::zero()
        }
    }

    /// Outward normal of the chord (counter-clockwise order, rotated clockwise).
    fn chord_normal(&self, next: &Self) -> Vector2<N> {
        let chord = next.point - self.point;
        Vector2::new(chord.y, -chord.x)
    }
}

impl<N: Real + Float> PolygonRefiner<N> for SandwichRefiner {
    fn refine<S: LazySet<N> + ?Sized>(&self, s: &S, eps: &N) -> Result<Vec<Vector2<N>>> {
        let (one, zero) = (N::one(), N::zero());
        let mut touches = Vec::with_capacity(16);
        for dir in [
            Vector2::new(one, zero),
            Vector2::new(zero, one),
            Vector2::new(-one, zero),
            Vector2::new(zero, -one),
        ] {
            touches.push(Touch::new(s, dir)?);
        }

        let mut rounds = 0usize;
        loop {
            let m = touches.len();
            let mut merged = Vec::with_capacity(2 * m);
            for k in 0..m {
                let (p, q) = (&touches[k], &touches[(k + 1) % m]);
                merged.push(p.clone());
                if p.gap(q) > *eps {
                    merged.push(Touch::new(s, p.chord_normal(q))?);
                }
            }
            if merged.len() == m {
                break;
            }
            touches = merged;
            rounds += 1;
            trace!(round = rounds, directions = touches.len(), "sandwich refinement");
            if touches.len() > self.cfg.max_directions {
                warn!(
                    directions = touches.len(),
                    budget = self.cfg.max_directions,
                    "polygon refinement budget exhausted"
                );
                return Err(SetError::RefinementBudget {
                    directions: self.cfg.max_directions,
                });
            }
        }

        let m = touches.len();
        Ok((0..m)
            .map(|k| touches[k].corner(&touches[(k + 1) % m]))
            .collect())
    }
}

/// Polygon spanned by a finite point set, in constraint form.
#[inline]
pub fn polygon_from_points<N: Real>(points: &[Vector2<N>]) -> Result<HPolygon<N>> {
    HPolygon::from_vertices(points)
}

/// ε = ∞: the bounding box of `s` as an `HPolygon`.
pub fn overapproximate_polygon<N: Real, S: LazySet<N> + ?Sized>(s: &S) -> Result<HPolygon<N>> {
    check_dim(2, s.dim())?;
    if let Some(p) = s.as_hpolygon() {
        return Ok(p.clone());
    }
    if !s.is_bounded() {
        return Err(SetError::Unbounded);
    }
    debug!("polygon overapproximation, box mode");
    let (one, zero) = (N::one(), N::zero());
    let mut constraints = Vec::with_capacity(4);
    for (dx, dy) in [
        (one.clone(), zero.clone()),
        (zero.clone(), one.clone()),
        (-one.clone(), zero.clone()),
        (zero, -one),
    ] {
        let d = DVector::from_vec(vec![dx, dy]);
        let b = d.dot(&s.support_vector(&d)?);
        constraints.push(HalfSpace::new(d, b)?);
    }
    HPolygon::new(constraints)
}

/// ε-close outer polygon with the default `SandwichRefiner`.
///
/// An infinite `eps` falls back to the bounding box.
pub fn overapproximate_polygon_eps<N: Real + Float, S: LazySet<N> + ?Sized>(
    s: &S,
    eps: N,
) -> Result<HPolygon<N>> {
    if eps.is_infinite() {
        return overapproximate_polygon(s);
    }
    overapproximate_polygon_with(s, eps, &SandwichRefiner::default())
}

/// ε-close outer polygon from a caller-supplied refiner.
pub fn overapproximate_polygon_with<N, S, R>(s: &S, eps: N, refiner: &R) -> Result<HPolygon<N>>
where
    N: Real,
    S: LazySet<N> + ?Sized,
    R: PolygonRefiner<N>,
{
    check_dim(2, s.dim())?;
    if let Some(p) = s.as_hpolygon() {
        return Ok(p.clone());
    }
    if !s.is_bounded() {
        return Err(SetError::Unbounded);
    }
    if s.is_empty() {
        return Err(SetError::EmptySet);
    }
    let vertices = refiner.refine(s, &eps)?;
    debug!(vertices = vertices.len(), "polygon overapproximation, refined");
    HPolygon::from_vertices(&vertices)
}
