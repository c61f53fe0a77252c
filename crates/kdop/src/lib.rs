//! k-DOP volume kernel and axis-set optimization.
//!
//! A k-DOP here is the intersection of `axis_count` slabs, each bounded by the
//! two planes `dot(x, axis) = min` and `dot(x, axis) = max`. The crate computes
//! the exact volume of such a region from its planes alone and searches for
//! axis directions that keep that volume small around a unit sphere or around
//! sampled image color neighborhoods.
//!
//! Layout
//! - `dop`: slabs, tracer, face assembly, volume/area kernel, classic axis sets.
//! - `rng`: explicit-state PCG hash used for reproducible sampling.
//! - `objective`: sphere and image-neighborhood scores built on the kernel.
//! - `search`: perturb-and-shrink local search over free axes.
//! - `export`: shader-friendly formatting of axis lists.

pub mod api;
pub mod dop;
pub mod export;
pub mod objective;
pub mod rng;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector3 as Vec3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dop::{
        kdop_distance, kdop_faces, kdop_surface_area, kdop_volume, kdop_volume_report, Extent,
        Kdop, Side, VolumeReport,
    };
    pub use crate::objective::{ExecMode, ImageObjective, Objective, SphereObjective};
    pub use crate::rng::Pcg;
    pub use crate::search::{AxisSearch, SearchCfg, SearchResult};
    pub use nalgebra::Vector3 as Vec3;
}
