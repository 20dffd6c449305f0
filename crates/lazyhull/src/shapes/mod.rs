//! Primitive convex sets.
//!
//! Purpose
//! - Provide the leaves of combinator trees and the concrete targets of the
//!   overapproximation engine. Each shape implements only what the
//!   support-function protocol asks for, plus the accessors the engine reads.
//!
//! Notes
//! - `HPolytope` is a plain constraint container: n-D support queries on
//!   H-representations need linear programming, which this crate does not do.
//!   The planar `HPolygon` answers support queries directly.

mod ball;
mod basic;
mod halfspace;
mod hpolygon;
mod hyperrectangle;
mod vpolygon;
mod zonotope;

pub use ball::Ball2;
pub use basic::{EmptySet, Interval, Singleton};
pub use halfspace::{HPolytope, HalfSpace};
pub use hpolygon::HPolygon;
pub(crate) use hpolygon::to_dvec;
pub use hyperrectangle::Hyperrectangle;
pub use vpolygon::VPolygon;
pub(crate) use zonotope::sign_patterns;
pub use zonotope::Zonotope;
