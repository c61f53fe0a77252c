//! Tolerance defaults for the k-DOP kernel (internal).
//!
//! Policy
//! - Fixed constants, matched to the tracer's known imprecision. The vertex
//!   filter in particular is tuned against it; tightening it drops real
//!   vertices on oblique axis sets.

/// Acceptance threshold for traced vertices and for vertex dedup on a face.
pub(crate) const VERTEX_EPS: f64 = 1e-5;
/// A slab whose normal is this close to perpendicular to a ray does not bound it.
pub(crate) const RAY_PARALLEL_EPS: f64 = 1e-7;
/// Lower bound on `1 - dot(a, b)^2` for solving the two-plane edge system.
pub(crate) const PARALLEL_PAIR_EPS: f64 = 1e-12;
/// Open ends of a trace before any slab constrains it.
pub(crate) const TRACE_LIMIT: f64 = f32::MAX as f64;
/// `1/sqrt(3)`: threshold for picking the helper axis of a tangent frame.
pub(crate) const FRAME_MAJOR_LIMIT: f64 = 0.577_350_269_189_625_764_51;
