use super::*;
use crate::cfg::LineSearchCfg;
use crate::error::SetError;
use crate::protocol::{LazySet, SetRef};
use crate::shapes::{Ball2, EmptySet, HalfSpace, Hyperrectangle, Singleton};
use nalgebra::{dvector, DVector};
use num_rational::Rational64;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn ball(cx: f64, cy: f64, r: f64) -> SetRef<f64> {
    Rc::new(Ball2::new(dvector![cx, cy], r))
}

fn point(x: f64, y: f64) -> SetRef<f64> {
    Rc::new(Singleton::new(dvector![x, y]))
}

fn square() -> SetRef<f64> {
    Rc::new(Hyperrectangle::new(dvector![0.0, 0.0], dvector![1.0, 1.0]).unwrap())
}

/// Forwards to `inner` and counts support-vector queries.
struct CountingSet {
    inner: SetRef<f64>,
    queries: Cell<usize>,
}

impl CountingSet {
    fn new(inner: SetRef<f64>) -> Rc<Self> {
        Rc::new(Self {
            inner,
            queries: Cell::new(0),
        })
    }
}

impl LazySet<f64> for CountingSet {
    fn dim(&self) -> usize {
        self.inner.dim()
    }

    fn support_vector(&self, d: &DVector<f64>) -> crate::error::Result<DVector<f64>> {
        self.queries.set(self.queries.get() + 1);
        self.inner.support_vector(d)
    }

    fn is_bounded(&self) -> bool {
        self.inner.is_bounded()
    }
}

#[test]
fn hull_of_two_balls() {
    let ch = ConvexHull::new(ball(0.0, 0.0, 1.0), ball(1.0, 2.0, 1.0)).unwrap();
    assert_eq!(ch.dim(), 2);
    assert_eq!(ch.support_vector(&dvector![1.0, 0.0]).unwrap(), dvector![2.0, 2.0]);
    assert_eq!(ch.support_vector(&dvector![-1.0, 0.0]).unwrap(), dvector![-1.0, 0.0]);
    assert_eq!(ch.support_vector(&dvector![0.0, 1.0]).unwrap(), dvector![1.0, 3.0]);
    assert_eq!(ch.support_vector(&dvector![0.0, -1.0]).unwrap(), dvector![0.0, -1.0]);
    assert_eq!(ch.support_function(&dvector![1.0, 0.0]).unwrap(), 2.0);
    assert!(ch.is_bounded());
    assert!(!ch.is_empty());
}

#[test]
fn hull_ties_go_to_the_first_operand() {
    let ch = ConvexHull::new(point(1.0, 0.0), point(0.0, 1.0)).unwrap();
    assert_eq!(ch.support_vector(&dvector![1.0, 1.0]).unwrap(), dvector![1.0, 0.0]);
    let swapped = ConvexHull::new(point(0.0, 1.0), point(1.0, 0.0)).unwrap();
    assert_eq!(swapped.support_vector(&dvector![1.0, 1.0]).unwrap(), dvector![0.0, 1.0]);
}

#[test]
fn combinators_reject_mixed_dimensions() {
    let two = point(0.0, 0.0);
    let three: SetRef<f64> = Rc::new(Singleton::new(dvector![0.0, 0.0, 0.0]));
    let err = SetError::DimensionMismatch {
        expected: 2,
        found: 3,
    };
    assert_eq!(ConvexHull::new(two.clone(), three.clone()).err(), Some(err.clone()));
    assert_eq!(UnionSet::new(two.clone(), three.clone()).err(), Some(err.clone()));
    assert_eq!(convex_hull(two.clone(), three.clone()).err(), Some(err.clone()));
    assert_eq!(
        ConvexHullArray::new(2, vec![two.clone(), three.clone()]).err(),
        Some(err.clone())
    );
    let mut arr = UnionSetArray::new(2, vec![two.clone()]).unwrap();
    assert_eq!(arr.push(three), Err(err));
    assert_eq!(arr.len(), 1);

    let ch = ConvexHull::new(two.clone(), two).unwrap();
    assert!(ch.support_vector(&dvector![1.0]).is_err());
}

#[test]
fn convex_hull_absorbs_the_empty_set() {
    let x = ball(0.0, 0.0, 1.0);
    let e: SetRef<f64> = Rc::new(EmptySet::new(2));

    let right = convex_hull(x.clone(), e.clone()).unwrap();
    assert!(Rc::ptr_eq(&right, &x));
    let left = convex_hull(e.clone(), x.clone()).unwrap();
    assert!(Rc::ptr_eq(&left, &x));

    let both = convex_hull(e.clone(), e.clone()).unwrap();
    assert!(both.is_empty());

    let fresh = convex_hull(x.clone(), ball(3.0, 0.0, 1.0)).unwrap();
    assert!(!Rc::ptr_eq(&fresh, &x));
    assert_eq!(fresh.support_function(&dvector![1.0, 0.0]).unwrap(), 4.0);
}

#[test]
fn binary_hull_skips_an_empty_operand_at_query_time() {
    let e: SetRef<f64> = Rc::new(EmptySet::new(2));
    let ch = ConvexHull::new(e, point(2.0, -1.0)).unwrap();
    assert!(!ch.is_empty());
    assert_eq!(ch.support_vector(&dvector![0.0, 1.0]).unwrap(), dvector![2.0, -1.0]);
}

#[test]
fn array_concat_flattens() {
    let a = ConvexHullArray::new(2, vec![point(0.0, 0.0), point(1.0, 0.0)]).unwrap();
    let b = ConvexHullArray::new(2, vec![point(0.0, 1.0), point(5.0, 5.0), point(-3.0, 0.0)])
        .unwrap();
    let first = a.get(0).cloned().unwrap();
    let last = b.get(2).cloned().unwrap();

    let c = a.concat(b).unwrap();
    assert_eq!(c.len(), 5);
    assert!(c.array().iter().all(|s| s.dim() == 2));
    assert!(Rc::ptr_eq(c.get(0).unwrap(), &first));
    assert!(Rc::ptr_eq(c.get(4).unwrap(), &last));
    assert!(c.get(5).is_none());
    assert_eq!(c.support_vector(&dvector![1.0, 1.0]).unwrap(), dvector![5.0, 5.0]);
    assert_eq!(c.support_vector(&dvector![-1.0, 0.0]).unwrap(), dvector![-3.0, 0.0]);

    let other_dim = ConvexHullArray::<f64>::empty(3);
    assert!(c.concat(other_dim).is_err());
}

#[test]
fn empty_array_is_the_empty_set() {
    let arr = UnionSetArray::<f64>::empty(2);
    assert_eq!(arr.len(), 0);
    assert!(arr.is_empty());
    assert_eq!(arr.support_vector(&dvector![1.0, 0.0]), Err(SetError::EmptySet));
    assert_eq!(arr.support_function(&dvector![1.0, 0.0]), Err(SetError::EmptySet));

    // identity for a single set
    let x = ball(0.0, 0.0, 2.0);
    let mut grown = ConvexHullArray::empty(2);
    grown.push(x.clone()).unwrap();
    let d = dvector![0.6, -0.8];
    assert_eq!(grown.support_vector(&d).unwrap(), x.support_vector(&d).unwrap());
}

#[test]
fn array_from_binary_hull_keeps_operands() {
    let ch = ConvexHull::new(point(1.0, 2.0), point(3.0, -1.0)).unwrap();
    let arr = ConvexHullArray::from(ch.clone());
    assert_eq!(arr.len(), 2);
    assert!(Rc::ptr_eq(arr.get(0).unwrap(), ch.first()));
    assert!(Rc::ptr_eq(arr.get(1).unwrap(), ch.second()));
}

#[test]
fn union_answers_like_the_hull() {
    let x = ball(0.0, 0.0, 1.0);
    let y = ball(4.0, 0.0, 0.5);
    let u = UnionSet::new(x.clone(), y.clone()).unwrap();
    let ch = ConvexHull::new(x, y).unwrap();
    for d in [dvector![1.0, 0.0], dvector![-1.0, 0.3], dvector![0.2, 1.0]] {
        assert_eq!(u.support_vector(&d).unwrap(), ch.support_vector(&d).unwrap());
        assert_eq!(u.support_function(&d).unwrap(), ch.support_function(&d).unwrap());
    }

    // no absorption: the union stays a union
    let e: SetRef<f64> = Rc::new(EmptySet::new(2));
    let ue = UnionSet::new(e, point(1.0, 1.0)).unwrap();
    assert!(!ue.is_empty());
    assert_eq!(ue.support_function(&dvector![1.0, 0.0]).unwrap(), 1.0);
}

#[test]
fn unbounded_operand_makes_the_hull_unbounded() {
    let h: SetRef<f64> = Rc::new(HalfSpace::new(dvector![1.0, 0.0], 1.0).unwrap());
    let ch = ConvexHull::new(square(), h.clone()).unwrap();
    assert!(!ch.is_bounded());
    let arr = ConvexHullArray::new(2, vec![square(), h]).unwrap();
    assert!(!arr.is_bounded());
    assert!(arr.support_vector(&dvector![0.0, 1.0]).is_err());
}

#[test]
fn interval_hull_radius_is_cached() {
    let boxed: SetRef<f64> =
        Rc::new(Hyperrectangle::new(dvector![1.0, -2.0], dvector![0.5, 1.0]).unwrap());
    let counting = CountingSet::new(boxed);
    let sih = SymmetricIntervalHull::new(counting.clone() as SetRef<f64>).unwrap();
    assert_eq!(counting.queries.get(), 0);

    assert_eq!(sih.radius(0).unwrap(), 1.5);
    assert_eq!(counting.queries.get(), 2);
    assert_eq!(sih.radius(0).unwrap(), 1.5);
    assert_eq!(counting.queries.get(), 2);

    // only axis 0 is touched
    assert_eq!(sih.support_vector(&dvector![2.0, 0.0]).unwrap(), dvector![1.5, 0.0]);
    assert_eq!(counting.queries.get(), 2);

    assert_eq!(sih.support_vector(&dvector![0.0, -1.0]).unwrap(), dvector![0.0, -3.0]);
    assert_eq!(counting.queries.get(), 4);

    assert_eq!(sih.support_function(&dvector![-1.0, 3.0]).unwrap(), 10.5);
    assert_eq!(sih.radius_hyperrectangle().unwrap(), dvector![1.5, 3.0]);
    assert_eq!(counting.queries.get(), 4);
}

#[test]
fn interval_hull_zero_direction_is_the_origin() {
    let counting = CountingSet::new(ball(3.0, 3.0, 1.0));
    let sih = SymmetricIntervalHull::new(counting.clone() as SetRef<f64>).unwrap();
    assert_eq!(sih.support_vector(&dvector![0.0, 0.0]).unwrap(), dvector![0.0, 0.0]);
    assert_eq!(sih.support_function(&dvector![0.0, 0.0]).unwrap(), 0.0);
    assert_eq!(counting.queries.get(), 0);
    assert_eq!(sih.center(), dvector![0.0, 0.0]);
}

#[test]
fn interval_hull_contract_errors() {
    let sih = SymmetricIntervalHull::new(square()).unwrap();
    assert_eq!(
        sih.radius(2),
        Err(SetError::InvalidIndex { index: 2, dim: 2 })
    );
    assert!(sih.support_vector(&dvector![1.0]).is_err());

    let h: SetRef<f64> = Rc::new(HalfSpace::new(dvector![0.0, 1.0], 0.0).unwrap());
    assert!(matches!(
        SymmetricIntervalHull::new(h),
        Err(SetError::Unbounded)
    ));
}

#[test]
fn interval_hull_to_box() {
    let ch: SetRef<f64> = Rc::new(ConvexHull::new(point(-1.0, 0.5), point(2.0, -4.0)).unwrap());
    let sih = SymmetricIntervalHull::new(ch).unwrap();
    let b = sih.to_hyperrectangle().unwrap();
    assert_eq!(b.center, dvector![0.0, 0.0]);
    assert_eq!(b.radius, dvector![2.0, 4.0]);
}

#[test]
fn interval_hull_is_exact_for_rationals() {
    let p = DVector::from_vec(vec![Rational64::new(1, 3), Rational64::new(-2, 5)]);
    let s: SetRef<Rational64> = Rc::new(Singleton::new(p));
    let sih = SymmetricIntervalHull::new(s).unwrap();
    assert_eq!(sih.radius(0).unwrap(), Rational64::new(1, 3));
    assert_eq!(sih.radius(1).unwrap(), Rational64::new(2, 5));
}

#[test]
fn cut_of_square_by_vertical_line() {
    let h = HalfSpace::new(dvector![1.0, 0.0], 0.0).unwrap();
    let cut = HalfspaceCut::new(square(), h).unwrap();
    assert!(cut.support_function(&dvector![1.0, 0.0]).unwrap().abs() < 1e-12);
    assert_eq!(cut.support_function(&dvector![-1.0, 0.0]).unwrap(), 1.0);
    assert!((cut.support_function(&dvector![1.0, 1.0]).unwrap() - 1.0).abs() < 1e-12);
    let sv = cut.support_vector(&dvector![1.0, 1.0]).unwrap();
    assert!(sv[0] <= 1e-9);
    assert!((sv[1] - 1.0).abs() < 1e-12);

    // the upper bound uses H only along its normal
    assert_eq!(cut.support_function_upper_bound(&dvector![2.0, 0.0]).unwrap(), 0.0);
    assert_eq!(cut.support_function_upper_bound(&dvector![1.0, 1.0]).unwrap(), 2.0);
}

#[test]
fn cut_of_disk_matches_closed_form() {
    let h = HalfSpace::new(dvector![1.0, 0.0], 0.5).unwrap();
    let cut = HalfspaceCut::new(ball(0.0, 0.0, 1.0), h.clone()).unwrap();
    let truth = 0.5 + 0.75f64.sqrt();
    let got = cut.support_function(&dvector![1.0, 1.0]).unwrap();
    assert!(got >= truth - 1e-12);
    assert!(got - truth < 1e-8);

    let ls = lagrangian_support(
        ball(0.0, 0.0, 1.0).as_ref(),
        &h,
        &dvector![1.0, 0.0],
        &LineSearchCfg::default(),
    )
    .unwrap();
    assert_eq!(ls.lambda, 1.0);
    assert_eq!(ls.value, 0.5);
}

#[test]
fn cut_rejects_unbounded_sets() {
    let plane: SetRef<f64> = Rc::new(HalfSpace::new(dvector![0.0, 1.0], 0.0).unwrap());
    let h = HalfSpace::new(dvector![1.0, 0.0], 0.0).unwrap();
    assert!(matches!(
        HalfspaceCut::new(plane, h.clone()),
        Err(SetError::Unbounded)
    ));
    assert!(HalfspaceCut::new(Rc::new(Singleton::new(dvector![0.0])), h).is_err());
}

#[test]
fn short_line_search_stays_sound() {
    let h = HalfSpace::new(dvector![1.0, 1.0], 0.0).unwrap();
    let cfg = LineSearchCfg {
        max_doublings: 1,
        iterations: 2,
    };
    let cut = HalfspaceCut::with_cfg(ball(0.0, 0.0, 1.0), h, cfg).unwrap();
    // X ∩ H is the lower-left half disk; its support along (1, 1) is 0
    let got = cut.support_function(&dvector![1.0, 1.0]).unwrap();
    assert!(got >= -1e-12);
}

proptest! {
    #[test]
    fn interval_hull_radius_of_box(
        c0 in -5.0..5.0f64, c1 in -5.0..5.0f64,
        r0 in 0.0..3.0f64, r1 in 0.0..3.0f64,
    ) {
        let b: SetRef<f64> = Rc::new(Hyperrectangle::new(dvector![c0, c1], dvector![r0, r1]).unwrap());
        let sih = SymmetricIntervalHull::new(b.clone()).unwrap();
        for (i, (c, r)) in [(c0, r0), (c1, r1)].into_iter().enumerate() {
            let up = b.support_vector(&crate::scalar::basis(2, i, 1.0)).unwrap()[i];
            let down = b.support_vector(&crate::scalar::basis(2, i, -1.0)).unwrap()[i];
            let radius = sih.radius(i).unwrap();
            prop_assert_eq!(radius, up.max(down.abs()));
            prop_assert!((radius - (c.abs() + r)).abs() < 1e-12);
        }
    }

    #[test]
    fn cut_support_is_tight_and_never_below(d0 in -10.0..10.0f64, d1 in -10.0..10.0f64) {
        let h = HalfSpace::new(dvector![1.0, 0.0], 0.0).unwrap();
        let cut = HalfspaceCut::new(square(), h).unwrap();
        // X ∩ H = [-1, 0] x [-1, 1]
        let truth = (-d0).max(0.0) + d1.abs();
        let got = cut.support_function(&dvector![d0, d1]).unwrap();
        prop_assert!(got >= truth - 1e-12);
        prop_assert!(got <= truth + 1e-9);
    }

    #[test]
    fn hull_support_function_is_the_max(ux in -1.0..1.0f64, uy in -1.0..1.0f64) {
        let x = ball(0.0, 0.0, 1.0);
        let y = ball(1.0, 2.0, 0.5);
        let d = dvector![ux, uy];
        let ch = ConvexHull::new(x.clone(), y.clone()).unwrap();
        let expect = x.support_function(&d).unwrap().max(y.support_function(&d).unwrap());
        prop_assert_eq!(ch.support_function(&d).unwrap(), expect);
        let sv = ch.support_vector(&d).unwrap();
        prop_assert!((d.dot(&sv) - expect).abs() < 1e-12);
    }
}
