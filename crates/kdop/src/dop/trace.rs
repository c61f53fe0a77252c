//! Ray-vs-slab tracing and the slab distance filter.
//!
//! The tracer can report ends that sit slightly outside the k-DOP (the error
//! grows with oblique axis pairs). The kernel therefore never trusts a traced
//! point on its own; it re-checks each one with `kdop_distance`.

use nalgebra::Vector3;

use super::cfg::{RAY_PARALLEL_EPS, TRACE_LIMIT};
use super::types::Extent;

/// Parametric interval `[near, far]` of a ray inside a set of slabs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceRange {
    pub near: f64,
    pub far: f64,
}

impl TraceRange {
    /// No part of the ray lies inside all slabs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.near > self.far
    }

    /// Some end was never constrained: every traced slab was parallel to the ray.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.near <= -TRACE_LIMIT || self.far >= TRACE_LIMIT
    }

    #[inline]
    pub fn point_at(&self, origin: Vector3<f64>, dir: Vector3<f64>, t: f64) -> Vector3<f64> {
        origin + dir * t
    }
}

/// Clip the ray `origin + t * dir` against every slab except `excluded`.
///
/// Slabs nearly parallel to the ray (`|dot(dir, axis)| < 1e-7`) are skipped.
/// Pairs beyond the shorter of `axes`/`extents` are ignored.
pub fn trace_range(
    origin: Vector3<f64>,
    dir: Vector3<f64>,
    axes: &[Vector3<f64>],
    extents: &[Extent],
    excluded: [usize; 2],
) -> TraceRange {
    let mut near = -TRACE_LIMIT;
    let mut far = TRACE_LIMIT;
    for (a, (axis, extent)) in axes.iter().zip(extents).enumerate() {
        if a == excluded[0] || a == excluded[1] {
            continue;
        }
        let d = dir.dot(axis);
        if d.abs() < RAY_PARALLEL_EPS {
            continue;
        }
        let proj = origin.dot(axis);
        let inv_dir = 1.0 / d;
        let t0 = (extent.min - proj) * inv_dir;
        let t1 = (extent.max - proj) * inv_dir;
        near = near.max(t0.min(t1));
        far = far.min(t0.max(t1));
    }
    TraceRange { near, far }
}

/// Worst slab violation of `p`: zero inside the k-DOP, else the largest
/// distance by which a projection leaves its extent.
pub fn kdop_distance(p: &Vector3<f64>, axes: &[Vector3<f64>], extents: &[Extent]) -> f64 {
    axes.iter()
        .zip(extents)
        .map(|(axis, extent)| extent.violation(p.dot(axis)))
        .fold(0.0, f64::max)
}
