//! Lazy combinators over the support-function protocol.
//!
//! Purpose
//! - Compose sets without enumerating points: every query on a combinator is
//!   answered by querying its operands.
//!
//! Layout
//! - `convex_hull`: `ConvexHull`, `ConvexHullArray`, the absorbing constructor.
//! - `union`: `UnionSet`, `UnionSetArray`.
//! - `interval_hull`: `SymmetricIntervalHull` with its per-axis radius cache.
//! - `cut`: `HalfspaceCut`, a compact set intersected with one half-space.
//!
//! Binary and array forms share one implementation each (`binary_combinator!`,
//! `array_combinator!`); the hull and union flavours differ in meaning, not
//! in how support queries are answered.

use nalgebra::DVector;

use crate::cfg::Oracle;
use crate::error::{Result, SetError};
use crate::protocol::{arg_max, SetRef};
use crate::scalar::Real;

macro_rules! binary_combinator {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name<N: $crate::scalar::Real> {
            x: $crate::protocol::SetRef<N>,
            y: $crate::protocol::SetRef<N>,
        }

        impl<N: $crate::scalar::Real> $name<N> {
            /// Fails with `DimensionMismatch` unless both operands share a dimension.
            pub fn new(
                x: $crate::protocol::SetRef<N>,
                y: $crate::protocol::SetRef<N>,
            ) -> $crate::error::Result<Self> {
                $crate::error::check_dim(x.dim(), y.dim())?;
                Ok(Self { x, y })
            }

            #[inline]
            pub fn first(&self) -> &$crate::protocol::SetRef<N> {
                &self.x
            }

            #[inline]
            pub fn second(&self) -> &$crate::protocol::SetRef<N> {
                &self.y
            }
        }

        impl<N: $crate::scalar::Real> $crate::protocol::LazySet<N> for $name<N> {
            fn dim(&self) -> usize {
                self.x.dim()
            }

            /// Larger `d·x` of the two operand answers; ties go to the first operand.
            fn support_vector(
                &self,
                d: &nalgebra::DVector<N>,
            ) -> $crate::error::Result<nalgebra::DVector<N>> {
                $crate::protocol::check_direction(self, d)?;
                $crate::combinators::max_support_vector(d, [&self.x, &self.y])
            }

            fn support_function(&self, d: &nalgebra::DVector<N>) -> $crate::error::Result<N> {
                $crate::protocol::check_direction(self, d)?;
                $crate::combinators::max_support_value(
                    d,
                    [&self.x, &self.y],
                    $crate::cfg::Oracle::Exact,
                )
            }

            fn support_function_upper_bound(
                &self,
                d: &nalgebra::DVector<N>,
            ) -> $crate::error::Result<N> {
                $crate::protocol::check_direction(self, d)?;
                $crate::combinators::max_support_value(
                    d,
                    [&self.x, &self.y],
                    $crate::cfg::Oracle::UpperBound,
                )
            }

            fn is_bounded(&self) -> bool {
                self.x.is_bounded() && self.y.is_bounded()
            }

            fn is_empty(&self) -> bool {
                self.x.is_empty() && self.y.is_empty()
            }
        }
    };
}

macro_rules! array_combinator {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name<N: $crate::scalar::Real> {
            dim: usize,
            sets: Vec<$crate::protocol::SetRef<N>>,
        }

        impl<N: $crate::scalar::Real> $name<N> {
            /// Every operand must live in `R^dim`; an empty list is allowed.
            pub fn new(
                dim: usize,
                sets: Vec<$crate::protocol::SetRef<N>>,
            ) -> $crate::error::Result<Self> {
                for s in &sets {
                    $crate::error::check_dim(dim, s.dim())?;
                }
                Ok(Self { dim, sets })
            }

            /// No operands: the empty set in `R^dim`.
            #[inline]
            pub fn empty(dim: usize) -> Self {
                Self {
                    dim,
                    sets: Vec::new(),
                }
            }

            #[inline]
            pub fn len(&self) -> usize {
                self.sets.len()
            }

            #[inline]
            pub fn get(&self, i: usize) -> Option<&$crate::protocol::SetRef<N>> {
                self.sets.get(i)
            }

            #[inline]
            pub fn array(&self) -> &[$crate::protocol::SetRef<N>] {
                &self.sets
            }

            pub fn push(&mut self, s: $crate::protocol::SetRef<N>) -> $crate::error::Result<()> {
                $crate::error::check_dim(self.dim, s.dim())?;
                self.sets.push(s);
                Ok(())
            }

            /// Flattened concatenation: operands of `self` followed by those of `other`.
            pub fn concat(mut self, other: Self) -> $crate::error::Result<Self> {
                $crate::error::check_dim(self.dim, other.dim)?;
                self.sets.extend(other.sets);
                Ok(self)
            }
        }

        impl<N: $crate::scalar::Real> $crate::protocol::LazySet<N> for $name<N> {
            fn dim(&self) -> usize {
                self.dim
            }

            /// Arg-max of `d·x` over the operand answers; the earliest operand wins ties.
            fn support_vector(
                &self,
                d: &nalgebra::DVector<N>,
            ) -> $crate::error::Result<nalgebra::DVector<N>> {
                $crate::protocol::check_direction(self, d)?;
                $crate::combinators::max_support_vector(d, &self.sets)
            }

            fn support_function(&self, d: &nalgebra::DVector<N>) -> $crate::error::Result<N> {
                $crate::protocol::check_direction(self, d)?;
                $crate::combinators::max_support_value(d, &self.sets, $crate::cfg::Oracle::Exact)
            }

            fn support_function_upper_bound(
                &self,
                d: &nalgebra::DVector<N>,
            ) -> $crate::error::Result<N> {
                $crate::protocol::check_direction(self, d)?;
                $crate::combinators::max_support_value(
                    d,
                    &self.sets,
                    $crate::cfg::Oracle::UpperBound,
                )
            }

            fn is_bounded(&self) -> bool {
                self.sets.iter().all(|s| s.is_bounded())
            }

            fn is_empty(&self) -> bool {
                self.sets.iter().all(|s| s.is_empty())
            }
        }
    };
}

mod convex_hull;
mod cut;
mod interval_hull;
mod union;

pub use convex_hull::{convex_hull, ConvexHull, ConvexHullArray};
pub use cut::{lagrangian_support, HalfspaceCut, LagrangianSupport};
pub use interval_hull::SymmetricIntervalHull;
pub use union::{UnionSet, UnionSetArray};

/// Support vector of the union of `sets`; empty operands are skipped.
pub(crate) fn max_support_vector<'a, N: Real>(
    d: &DVector<N>,
    sets: impl IntoIterator<Item = &'a SetRef<N>>,
) -> Result<DVector<N>> {
    let candidates = sets
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.support_vector(d))
        .collect::<Result<Vec<_>>>()?;
    arg_max(d, candidates).ok_or(SetError::EmptySet)
}

/// Support function of the union of `sets` under the chosen oracle.
pub(crate) fn max_support_value<'a, N: Real>(
    d: &DVector<N>,
    sets: impl IntoIterator<Item = &'a SetRef<N>>,
    oracle: Oracle,
) -> Result<N> {
    let mut best: Option<N> = None;
    for s in sets.into_iter().filter(|s| !s.is_empty()) {
        let v = oracle.support(&**s, d)?;
        best = match best {
            Some(b) if v <= b => Some(b),
            _ => Some(v),
        };
    }
    best.ok_or(SetError::EmptySet)
}

#[cfg(test)]
mod tests;
