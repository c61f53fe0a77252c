//! Volumes and surface areas of the classic DOPs around the unit sphere.
//!
//! Purpose
//! - Quick reference numbers for the 6/14/18/26-DOP families, next to the
//!   ball itself, plus the face diagnostics the kernel reports.
//!
//! Run with `cargo run -p kdop --example classic_dops`.

use kdop::dop::special::{dop_axes, DopFamily};
use kdop::dop::Kdop;

fn main() {
    let ball = 4.0 / 3.0 * std::f64::consts::PI;
    println!("ball volume={ball:.6} area={:.6}", 4.0 * std::f64::consts::PI);
    for family in [DopFamily::Dop6, DopFamily::Dop14, DopFamily::Dop18, DopFamily::Dop26] {
        let dop = Kdop::around_unit_sphere(dop_axes(family));
        let report = dop.volume_report();
        println!(
            "k={:<2} volume={:.6} ratio={:.4} area={:.6} faces={} degenerate={}",
            family.k(),
            report.volume,
            report.volume / ball,
            dop.surface_area(),
            report.faces,
            report.degenerate_faces
        );
    }
}
