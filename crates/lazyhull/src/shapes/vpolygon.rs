use nalgebra::{DVector, Vector2};

use crate::error::{Result, SetError};
use crate::planar::convex_hull;
use crate::protocol::{arg_max, check_direction, LazySet};
use crate::scalar::Real;
use crate::shapes::{to_dvec, HPolygon};

/// Planar polygon given by its vertices, kept in hull order.
#[derive(Clone, Debug, PartialEq)]
pub struct VPolygon<N: Real> {
    vertices: Vec<Vector2<N>>,
}

impl<N: Real> VPolygon<N> {
    /// Convex hull of `points`; duplicates and interior points are dropped.
    pub fn new(points: &[Vector2<N>]) -> Self {
        Self {
            vertices: convex_hull(points),
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<N>] {
        &self.vertices
    }

    pub fn to_hpolygon(&self) -> Result<HPolygon<N>> {
        HPolygon::from_vertices(&self.vertices)
    }
}

impl<N: Real> LazySet<N> for VPolygon<N> {
    fn dim(&self) -> usize {
        2
    }

    fn support_vector(&self, d: &DVector<N>) -> Result<DVector<N>> {
        check_direction(self, d)?;
        arg_max(d, self.vertices.iter().map(to_dvec)).ok_or(SetError::EmptySet)
    }

    fn is_bounded(&self) -> bool {
        true
    }

    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
