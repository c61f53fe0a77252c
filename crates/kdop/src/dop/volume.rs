//! Volume and surface area via face fans anchored at a common apex.
//!
//! Each face polygon is split into a triangle fan from its first vertex; each
//! fan triangle plus the apex spans a tetrahedron. The apex lies on the
//! boundary of the convex k-DOP, so every tetrahedron sits inside it and the
//! unsigned volumes add up without cancellation.

use nalgebra::{Matrix4, Vector3, Vector4};

use super::faces::{kdop_faces, FaceStats, KdopFaces};
use super::types::Extent;

/// Volume plus counts of what the kernel skipped while computing it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VolumeReport {
    pub volume: f64,
    /// Faces that contributed to `volume`.
    pub faces: usize,
    pub degenerate_faces: usize,
    pub rejected_vertices: usize,
    pub skipped_pairs: usize,
    pub unbounded_edges: usize,
}

impl VolumeReport {
    fn from_faces(faces: &KdopFaces, volume: f64) -> Self {
        let FaceStats {
            degenerate_faces,
            rejected_vertices,
            skipped_pairs,
            unbounded_edges,
        } = faces.stats;
        Self {
            volume,
            faces: faces.faces.len(),
            degenerate_faces,
            rejected_vertices,
            skipped_pairs,
            unbounded_edges,
        }
    }
}

/// Volume of the k-DOP `{x : extents[i].min <= dot(x, axes[i]) <= extents[i].max}`.
///
/// Never fails: unbounded, empty, or degenerate inputs yield a (possibly
/// zero) best-effort volume. Complexity O(n^3) in the axis count.
pub fn kdop_volume(axes: &[Vector3<f64>], extents: &[Extent]) -> f64 {
    kdop_volume_report(axes, extents).volume
}

/// `kdop_volume` plus diagnostic counters.
pub fn kdop_volume_report(axes: &[Vector3<f64>], extents: &[Extent]) -> VolumeReport {
    let faces = kdop_faces(axes, extents);
    let volume = faces
        .faces
        .iter()
        .map(|f| fan_volume(&f.vertices, faces.apex))
        .sum();
    VolumeReport::from_faces(&faces, volume)
}

/// Total area of the k-DOP's faces.
pub fn kdop_surface_area(axes: &[Vector3<f64>], extents: &[Extent]) -> f64 {
    kdop_faces(axes, extents)
        .faces
        .iter()
        .map(|f| fan_area(&f.vertices))
        .sum()
}

fn fan_volume(polygon: &[Vector3<f64>], apex: Vector3<f64>) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let anchor = polygon[0];
    polygon[1..]
        .windows(2)
        .map(|w| tetra_volume(w[0], w[1], anchor, apex))
        .sum()
}

fn fan_area(polygon: &[Vector3<f64>]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let anchor = polygon[0];
    polygon[1..]
        .windows(2)
        .map(|w| 0.5 * (w[0] - anchor).cross(&(w[1] - anchor)).norm())
        .sum()
}

#[inline]
fn homogeneous(p: Vector3<f64>) -> Vector4<f64> {
    Vector4::new(p.x, p.y, p.z, 1.0)
}

/// `|det [a 1; b 1; c 1; d 1]| / 6`.
fn tetra_volume(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>, d: Vector3<f64>) -> f64 {
    let m = Matrix4::from_columns(&[
        homogeneous(a),
        homogeneous(b),
        homogeneous(c),
        homogeneous(d),
    ]);
    m.determinant().abs() / 6.0
}
