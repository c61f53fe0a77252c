//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a stable public API. It is a convenience surface for the CLI
//!   and experiments. Breaking changes are allowed.

// Kernel
pub use crate::dop::{
    kdop_distance, kdop_faces, kdop_surface_area, kdop_volume, kdop_volume_report, trace_range,
    Extent, FacePolygon, KdopFaces, Kdop, KdopError, Side, TraceRange, VolumeReport,
};
// Classic axis families
pub use crate::dop::special::{basis_axes, corner_axes, dop_axes, edge_axes, DopFamily};
// Objectives
pub use crate::objective::{
    ColorImage, ExecMode, ImageObjective, ImageObjectiveCfg, Objective, ObjectiveError,
    SphereObjective,
};
// Search
pub use crate::search::{
    AxisSearch, SearchCfg, SearchError, SearchEvent, SearchResult, StepOutcome,
};
// Output helpers
pub use crate::export::{format_glsl_axes, snap_axes};
pub use crate::rng::Pcg;
