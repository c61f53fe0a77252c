//! Core k-DOP types: slab extents, sides, and the owned `Kdop`.

use std::fmt;

use nalgebra::Vector3;

use super::faces::{kdop_faces, KdopFaces};
use super::trace::kdop_distance;
use super::volume::{kdop_surface_area, kdop_volume, kdop_volume_report, VolumeReport};

/// Closed slab `min <= dot(x, axis) <= max` along one axis.
///
/// Invariants:
/// - `min <= max` for a non-empty slab; the kernel does not enforce it and an
///   inverted extent simply yields no faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `[-r, r]`: the support interval of a radius-`r` ball on any unit axis.
    #[inline]
    pub fn symmetric(r: f64) -> Self {
        Self { min: -r, max: r }
    }

    /// Support interval of `points` projected on `axis`.
    ///
    /// Starts from the inverted `(1e9, -1e9)` so an empty point set stays
    /// inverted and contributes no faces.
    pub fn from_projections(axis: &Vector3<f64>, points: &[Vector3<f64>]) -> Self {
        let mut out = Self::new(1e9, -1e9);
        for p in points {
            let d = p.dot(axis);
            out.min = out.min.min(d);
            out.max = out.max.max(d);
        }
        out
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Offset of the low (`high == false`) or high plane.
    #[inline]
    pub fn bound(&self, high: bool) -> f64 {
        if high {
            self.max
        } else {
            self.min
        }
    }

    /// How far `proj` lies outside `[min, max]`; zero inside.
    #[inline]
    pub fn violation(&self, proj: f64) -> f64 {
        if proj < self.min {
            self.min - proj
        } else if proj > self.max {
            proj - self.max
        } else {
            0.0
        }
    }

    /// Same slab expressed on the negated axis.
    #[inline]
    pub fn negated(&self) -> Self {
        Self {
            min: -self.max,
            max: -self.min,
        }
    }
}

/// Support extents of `points` for each axis (one entry per axis).
pub fn support_extents(axes: &[Vector3<f64>], points: &[Vector3<f64>]) -> Vec<Extent> {
    axes.iter()
        .map(|axis| Extent::from_projections(axis, points))
        .collect()
}

/// One bounding plane of a k-DOP: `axis` at its min (`high == false`) or max.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Side {
    pub axis: usize,
    pub high: bool,
}

impl Side {
    #[inline]
    pub fn new(axis: usize, high: bool) -> Self {
        Self { axis, high }
    }

    /// Dense index `axis * 2 + high`, matching the face storage order.
    #[inline]
    pub fn index(&self) -> usize {
        self.axis * 2 + usize::from(self.high)
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self {
            axis: index / 2,
            high: index % 2 == 1,
        }
    }
}

/// Errors surfaced when building an owned `Kdop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdopError {
    /// Axis and extent lists must pair up one-to-one.
    LengthMismatch { axes: usize, extents: usize },
}

impl fmt::Display for KdopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KdopError::LengthMismatch { axes, extents } => write!(
                f,
                "k-DOP needs one extent per axis (got {axes} axes, {extents} extents)"
            ),
        }
    }
}

impl std::error::Error for KdopError {}

/// Owned k-DOP: axes paired with their slab extents.
///
/// The free kernel functions accept unchecked slices; this type guarantees the
/// pairing and offers the same operations as methods.
#[derive(Clone, Debug, Default)]
pub struct Kdop {
    axes: Vec<Vector3<f64>>,
    extents: Vec<Extent>,
}

impl Kdop {
    pub fn new(axes: Vec<Vector3<f64>>, extents: Vec<Extent>) -> Result<Self, KdopError> {
        if axes.len() != extents.len() {
            return Err(KdopError::LengthMismatch {
                axes: axes.len(),
                extents: extents.len(),
            });
        }
        Ok(Self { axes, extents })
    }

    /// Tightest k-DOP over `axes` containing every point.
    pub fn from_points(axes: Vec<Vector3<f64>>, points: &[Vector3<f64>]) -> Self {
        let extents = support_extents(&axes, points);
        Self { axes, extents }
    }

    /// Every axis bounded by `[-1, 1]`: the k-DOP circumscribing the unit sphere.
    pub fn around_unit_sphere(axes: Vec<Vector3<f64>>) -> Self {
        let extents = vec![Extent::symmetric(1.0); axes.len()];
        Self { axes, extents }
    }

    #[inline]
    pub fn axes(&self) -> &[Vector3<f64>] {
        &self.axes
    }
    #[inline]
    pub fn extents(&self) -> &[Extent] {
        &self.extents
    }
    #[inline]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// Add a slab (intersection).
    #[inline]
    pub fn intersect_slab(&mut self, axis: Vector3<f64>, extent: Extent) {
        self.axes.push(axis);
        self.extents.push(extent);
    }

    pub fn volume(&self) -> f64 {
        kdop_volume(&self.axes, &self.extents)
    }

    pub fn volume_report(&self) -> VolumeReport {
        kdop_volume_report(&self.axes, &self.extents)
    }

    pub fn faces(&self) -> KdopFaces {
        kdop_faces(&self.axes, &self.extents)
    }

    pub fn surface_area(&self) -> f64 {
        kdop_surface_area(&self.axes, &self.extents)
    }

    pub fn distance(&self, p: &Vector3<f64>) -> f64 {
        kdop_distance(p, &self.axes, &self.extents)
    }

    /// Membership with an explicit tolerance on the worst slab violation.
    pub fn contains(&self, p: &Vector3<f64>, eps: f64) -> bool {
        self.distance(p) <= eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn extent_from_projections_spans_points() {
        let axis = vector![1.0, 0.0, 0.0];
        let pts = vec![
            vector![0.5, 2.0, 0.0],
            vector![-0.25, 0.0, 1.0],
            vector![0.1, 0.0, 0.0],
        ];
        let e = Extent::from_projections(&axis, &pts);
        assert_eq!(e, Extent::new(-0.25, 0.5));
        assert!((e.width() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn extent_from_no_points_stays_inverted() {
        let e = Extent::from_projections(&vector![0.0, 1.0, 0.0], &[]);
        assert!(e.min > e.max);
    }

    #[test]
    fn violation_measures_outside_distance() {
        let e = Extent::new(-1.0, 2.0);
        assert_eq!(e.violation(0.0), 0.0);
        assert!((e.violation(-1.5) - 0.5).abs() < 1e-12);
        assert!((e.violation(3.0) - 1.0).abs() < 1e-12);
        assert_eq!(e.negated(), Extent::new(-2.0, 1.0));
    }

    #[test]
    fn side_index_round_trips() {
        let s = Side::new(3, true);
        assert_eq!(s.index(), 7);
        assert_eq!(Side::from_index(7), s);
        assert_eq!(Side::from_index(6), Side::new(3, false));
    }

    #[test]
    fn kdop_rejects_mismatched_lengths() {
        let err = Kdop::new(vec![vector![1.0, 0.0, 0.0]], vec![]).unwrap_err();
        assert_eq!(err, KdopError::LengthMismatch { axes: 1, extents: 0 });
        assert!(err.to_string().contains("1 axes"));
    }

    #[test]
    fn kdop_from_points_contains_points() {
        let axes = vec![
            vector![1.0, 0.0, 0.0],
            vector![0.0, 1.0, 0.0],
            vector![0.0, 0.0, 1.0],
            vector![1.0, 1.0, 1.0].normalize(),
        ];
        let pts = vec![
            vector![0.0, 0.0, 0.0],
            vector![1.0, 0.2, 0.3],
            vector![0.4, 0.9, 0.1],
            vector![0.2, 0.3, 0.8],
        ];
        let k = Kdop::from_points(axes, &pts);
        for p in &pts {
            assert!(k.contains(p, 1e-12));
        }
        assert!(!k.contains(&vector![2.0, 0.0, 0.0], 1e-6));
    }

    #[test]
    fn intersect_slab_cuts_cube_corners() {
        let axes = vec![
            vector![1.0, 0.0, 0.0],
            vector![0.0, 1.0, 0.0],
            vector![0.0, 0.0, 1.0],
        ];
        let mut k = Kdop::around_unit_sphere(axes);
        assert_eq!(k.axis_count(), 3);
        k.intersect_slab(vector![1.0, 1.0, 1.0].normalize(), Extent::symmetric(1.0));
        assert_eq!(k.axis_count(), 4);
        assert_eq!(k.extents().len(), 4);
        // Two corner tetrahedra with legs 3 - sqrt(3) are removed.
        let leg = 3.0 - 3f64.sqrt();
        let expected = 8.0 - 2.0 * leg.powi(3) / 6.0;
        assert!((k.volume() - expected).abs() < 1e-9, "computed volume {}", k.volume());
        assert!(!k.contains(&vector![1.0, 1.0, 1.0], 1e-6));
    }
}
