//! Compose a few lazy sets and print their concrete overapproximations.
//!
//! Usage:
//!   cargo run -p lazyhull --example overapprox_demo
//!   cargo run -p lazyhull --example overapprox_demo -- 1e-4
//!
//! The optional argument is the polygon tolerance ε (default 1e-2).
//! Debug logs from the engine go to stderr.

use std::rc::Rc;

use lazyhull::overapprox::{
    merge_zonotopes, oct_dirs, overapproximate_box, overapproximate_intersection,
    overapproximate_polygon_eps, template_polytope,
};
use lazyhull::prelude::*;
use nalgebra::dvector;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> lazyhull::Result<()> {
    SubscriberBuilder::default()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();
    let eps = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(1e-2);

    let a: SetRef<f64> = Rc::new(Ball2::new(dvector![0.0, 0.0], 1.0));
    let b: SetRef<f64> = Rc::new(Ball2::new(dvector![1.0, 2.0], 1.0));
    let hull = convex_hull(a, b)?;

    let bx = overapproximate_box(&*hull, Oracle::Exact)?;
    println!("box: {bx:?}");

    let poly = overapproximate_polygon_eps(&*hull, eps)?;
    println!("polygon (eps = {eps}): {} constraints", poly.constraints().len());

    let oct = template_polytope(&*hull, &oct_dirs(2), Oracle::Exact)?;
    for h in oct.constraints() {
        println!("  {:>5.2} x + {:>5.2} y <= {:.4}", h.a[0], h.a[1], h.b);
    }

    let sih = SymmetricIntervalHull::new(hull.clone())?;
    println!("interval hull radii: {}", sih.radius_hyperrectangle()?.transpose());

    let z1 = Zonotope::new(dvector![0.0, 0.0], vec![dvector![1.0, 0.0], dvector![0.0, 0.5]])?;
    let z2 = Zonotope::new(dvector![3.0, 1.0], vec![dvector![0.5, 0.5], dvector![-0.5, 0.5]])?;
    let merged = merge_zonotopes(&z1, &z2)?;
    println!("merged zonotope: order {}", merged.order());

    let p = HPolytope::from_constraints(2, vec![HalfSpace::new(dvector![1.0, 1.0], 1.5)?])?;
    let cut = overapproximate_intersection(
        &hull,
        &p,
        &oct_dirs(2),
        Oracle::Exact,
        LineSearchCfg::default(),
    )?;
    println!("hull ∩ {{x + y <= 1.5}}: {} constraints", cut.num_constraints());
    Ok(())
}
