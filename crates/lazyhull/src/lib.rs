//! Lazy convex sets driven by support functions.
//!
//! A set is known only through `support_vector` / `support_function`. Hulls,
//! unions and interval hulls compose that capability without enumerating
//! points; the overapproximation engine turns any composition back into a
//! concrete bounded shape (box, polygon, template polytope, zonotope,
//! interval).
//!
//! Layout
//! - `protocol`: the `LazySet` trait and the shared `SetRef` handle.
//! - `shapes`: primitive sets (boxes, balls, zonotopes, half-spaces, polygons).
//! - `combinators`: `ConvexHull`, `UnionSet`, their arrays,
//!   `SymmetricIntervalHull`, `HalfspaceCut`.
//! - `planar`: monotone-chain hull of a 2D point cloud.
//! - `overapprox`: conversions to concrete representations.
//!
//! Numbers
//! - Every set is generic over `N: Real` (`f64`, `f32`, exact rationals).
//!   Comparisons carry no tolerance. Float-only pieces (balls, ε-refinement,
//!   random directions) add a `num_traits::Float` bound.
//!
//! Threads
//! - `SetRef` is an `Rc`; the interval-hull cache is not synchronized. Build
//!   one composition per thread.

pub mod api;
pub mod cfg;
pub mod combinators;
pub mod error;
pub mod overapprox;
pub mod planar;
pub mod protocol;
pub mod scalar;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{LineSearchCfg, Oracle, RefineCfg};
pub use error::{Result, SetError};
pub use protocol::{LazySet, SetRef};
pub use scalar::Real;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{LineSearchCfg, Oracle, RefineCfg};
    pub use crate::combinators::{
        convex_hull, ConvexHull, ConvexHullArray, HalfspaceCut, SymmetricIntervalHull, UnionSet,
        UnionSetArray,
    };
    pub use crate::error::{Result, SetError};
    pub use crate::protocol::{LazySet, SetRef};
    pub use crate::scalar::Real;
    pub use crate::shapes::{
        Ball2, EmptySet, HPolygon, HPolytope, HalfSpace, Hyperrectangle, Interval, Singleton,
        VPolygon, Zonotope,
    };
    pub use nalgebra::{DVector, Vector2 as Vec2};
}
