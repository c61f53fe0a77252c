//! k-DOP geometry: slabs, face assembly, and the volume kernel.
//!
//! Purpose
//! - Compute the exact volume of `{x : min_i <= dot(x, axis_i) <= max_i}` from
//!   the slab planes alone, without a general half-space intersection step.
//!
//! Why this design (short)
//! - Vertices come from tracing every two-plane edge line through the other
//!   slabs; faces are the per-plane vertex sets ordered by angle. Convexity
//!   makes the ordering and the fan integration exact.
//! - The kernel is permissive: unbounded or degenerate input yields a smaller
//!   (often zero) volume plus counters in `VolumeReport`, never an error.
//!
//! Assumptions and conventions
//! - Axes are unit vectors. Extents are offsets along those unit axes.
//! - Side `axis * 2` is the min plane, `axis * 2 + 1` the max plane.
//! - Tolerances: vertex filter/dedup `1e-5`, ray-parallel `1e-7`.
//!
//! Known limitation
//! - `trace_range` can return ends slightly outside the k-DOP; the vertex
//!   filter `kdop_distance < 1e-5` removes them. The root cause is not pinned
//!   down, and the filter tolerance is tuned against it.

mod cfg;
mod faces;
pub mod special;
mod trace;
mod types;
mod volume;

pub use faces::{kdop_faces, FacePolygon, FaceStats, KdopFaces};
pub use trace::{kdop_distance, trace_range, TraceRange};
pub use types::{support_extents, Extent, Kdop, KdopError, Side};
pub use volume::{kdop_surface_area, kdop_volume, kdop_volume_report, VolumeReport};

#[cfg(test)]
mod tests_special;
