//! Classic DOP families around the unit sphere.
//!
//! Adding slabs can only shrink the region, and every family circumscribes
//! the unit ball, so the volumes are ordered and bounded below by 4π/3.

use super::special::{dop_axes, DopFamily};
use super::{kdop_surface_area, Kdop};

fn sphere_volume(family: DopFamily) -> f64 {
    Kdop::around_unit_sphere(dop_axes(family)).volume()
}

#[test]
fn family_sizes() {
    assert_eq!(DopFamily::Dop6.k(), 6);
    assert_eq!(DopFamily::Dop14.k(), 14);
    assert_eq!(DopFamily::Dop18.k(), 18);
    assert_eq!(DopFamily::Dop26.k(), 26);
    for axis in DopFamily::Dop26.axes() {
        assert!((axis.norm() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn dop14_matches_closed_form() {
    let vol = sphere_volume(DopFamily::Dop14);
    let expected = 40.0 - 20.0 * 3f64.sqrt();
    assert!((vol - expected).abs() < 1e-6, "computed volume {}", vol);
}

#[test]
fn sphere_volumes_shrink_with_more_slabs() {
    let ball = 4.0 / 3.0 * std::f64::consts::PI;
    let v6 = sphere_volume(DopFamily::Dop6);
    let v14 = sphere_volume(DopFamily::Dop14);
    let v18 = sphere_volume(DopFamily::Dop18);
    let v26 = sphere_volume(DopFamily::Dop26);
    assert!((v6 - 8.0).abs() < 1e-9);
    assert!(v14 < v6 && v18 < v6);
    assert!(v26 < v14 && v26 < v18);
    assert!(v26 > ball, "26-DOP volume {} below ball volume", v26);
}

#[test]
fn dop26_has_all_faces() {
    let k = Kdop::around_unit_sphere(dop_axes(DopFamily::Dop26));
    let report = k.volume_report();
    assert_eq!(report.faces, 26);
    assert_eq!(report.degenerate_faces, 0);
    let area = kdop_surface_area(k.axes(), k.extents());
    // Surface of a region circumscribing the unit ball exceeds 4π.
    assert!(area > 4.0 * std::f64::consts::PI);
}
