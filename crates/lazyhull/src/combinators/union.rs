//! Set union, queried through the same support oracle as the hull.
//!
//! The union of convex sets is generally not convex. Its support function
//! still equals that of the convex hull, so every query here agrees with
//! `ConvexHull`; the type records that the caller meant a union. No
//! absorption of empty operands happens at construction.

binary_combinator! {
    /// Union of two sets; the dimension is taken from the first operand.
    UnionSet
}

array_combinator! {
    /// Union of a list of sets.
    UnionSetArray
}
