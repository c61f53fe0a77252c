use nalgebra::Vector3;

use super::Objective;
use crate::dop::{kdop_volume, Extent};

/// Volume of the k-DOP circumscribing the unit sphere.
///
/// A unit ball's support along any unit axis is exactly `[-1, 1]`, so the
/// extents do not depend on the axis directions.
#[derive(Clone, Copy, Debug, Default)]
pub struct SphereObjective;

impl Objective for SphereObjective {
    fn evaluate(&self, axes: &[Vector3<f64>]) -> f64 {
        let extents = vec![Extent::symmetric(1.0); axes.len()];
        kdop_volume(axes, &extents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dop::special::{dop_axes, DopFamily};

    #[test]
    fn cube_scores_eight() {
        let score = SphereObjective.evaluate(&dop_axes(DopFamily::Dop6));
        assert!((score - 8.0).abs() < 1e-4);
    }

    #[test]
    fn more_axes_score_lower() {
        let v6 = SphereObjective.evaluate(&dop_axes(DopFamily::Dop6));
        let v26 = SphereObjective.evaluate(&dop_axes(DopFamily::Dop26));
        assert!(v26 < v6);
        assert!(v26 >= 4.0 / 3.0 * std::f64::consts::PI);
    }
}
