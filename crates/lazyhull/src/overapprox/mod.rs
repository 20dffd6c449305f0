//! Overapproximation engine: lazy set in, concrete bounded representation out.
//!
//! Purpose
//! - Turn any `LazySet` into a box, a polygon, a template polytope, a
//!   zonotope, an interval, or an outer polytope of an intersection, using
//!   only support queries.
//!
//! Guarantees
//! - Sound: the result contains the input (never underestimates).
//! - Identity: a set already in the target representation is returned as an
//!   equal value without any support query.
//! - `Oracle::UpperBound` swaps in `support_function_upper_bound` wherever a
//!   support value is needed; results stay sound and get looser.
//!
//! References
//! - Le Guernic, Girard: "Reachability analysis of linear systems using
//!   support functions" (NAHS 2010), template outer approximations.
//! - Girard: "Reachability of uncertain linear systems using zonotopes"
//!   (HSCC 2005), the zonotope hull bound.

use nalgebra::DVector;

use crate::cfg::Oracle;
use crate::error::Result;
use crate::protocol::LazySet;
use crate::scalar::Real;

mod boxes;
mod intersection;
mod interval;
mod polygon;
mod template;
mod zonotope;

pub use boxes::overapproximate_box;
pub use intersection::overapproximate_intersection;
pub use interval::overapproximate_interval;
pub use polygon::{
    overapproximate_polygon, overapproximate_polygon_eps, overapproximate_polygon_with,
    polygon_from_points, PolygonRefiner, SandwichRefiner,
};
pub use template::{
    box_diag_dirs, box_dirs, diag_dirs, oct_dirs, spherical_dirs, template_polytope,
};
pub use zonotope::{merge_zonotopes, overapproximate_hull_zonotope};

impl Oracle {
    /// Support value of `s` along `d` under this oracle.
    #[inline]
    pub fn support<N: Real, S: LazySet<N> + ?Sized>(self, s: &S, d: &DVector<N>) -> Result<N> {
        match self {
            Oracle::Exact => s.support_function(d),
            Oracle::UpperBound => s.support_function_upper_bound(d),
        }
    }
}
