//! Scores for candidate axis sets (lower is better).
//!
//! - `SphereObjective`: volume of the k-DOP around the unit sphere.
//! - `ImageObjective`: mean k-DOP volume over sampled 3×3 color neighborhoods.
//!
//! Both reduce to building extents and calling `dop::kdop_volume`; the search
//! driver only sees the `Objective` trait.

use std::fmt;

use nalgebra::Vector3;

mod image;
mod sphere;

pub use image::{ColorImage, ImageObjective, ImageObjectiveCfg};
pub use sphere::SphereObjective;

/// Scores an axis set. Implementations must be pure in `axes`.
pub trait Objective {
    fn evaluate(&self, axes: &[Vector3<f64>]) -> f64;
}

impl<T: Objective + ?Sized> Objective for &T {
    fn evaluate(&self, axes: &[Vector3<f64>]) -> f64 {
        (**self).evaluate(axes)
    }
}

/// How sampled objectives spread their work.
///
/// `Parallel` reduces per-sample volumes with rayon; the summation order is
/// not fixed, so repeated runs can differ in the last bits. `Sequential`
/// sums in sample order and is bit-reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecMode {
    Sequential,
    #[default]
    Parallel,
}

/// Errors surfaced when building an objective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectiveError {
    /// Neighborhood sampling needs at least one interior pixel.
    ImageTooSmall { width: usize, height: usize },
    /// RGB8 buffer does not match `width * height * 3`.
    DataLength { expected: usize, actual: usize },
}

impl fmt::Display for ObjectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectiveError::ImageTooSmall { width, height } => write!(
                f,
                "image is {width}x{height}; neighborhood sampling needs at least 3x3"
            ),
            ObjectiveError::DataLength { expected, actual } => write!(
                f,
                "RGB8 buffer has {actual} bytes, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for ObjectiveError {}
