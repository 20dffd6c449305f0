//! Flat re-export surface for pipelines that only convert sets.
//!
//! Groups the engine entry points with the types they take and return, so a
//! caller can `use lazyhull::api::*` and stay clear of the module layout.

// Protocol and combinators
pub use crate::combinators::{
    convex_hull, lagrangian_support, ConvexHull, ConvexHullArray, HalfspaceCut,
    LagrangianSupport, SymmetricIntervalHull, UnionSet, UnionSetArray,
};
pub use crate::protocol::{LazySet, SetRef};
// Overapproximation
pub use crate::overapprox::{
    box_diag_dirs, box_dirs, diag_dirs, merge_zonotopes, oct_dirs, overapproximate_box,
    overapproximate_hull_zonotope, overapproximate_intersection, overapproximate_interval,
    overapproximate_polygon, overapproximate_polygon_eps, overapproximate_polygon_with,
    polygon_from_points, spherical_dirs, template_polytope, PolygonRefiner, SandwichRefiner,
};
// Planar hull of points
pub use crate::planar::convex_hull as planar_hull;
