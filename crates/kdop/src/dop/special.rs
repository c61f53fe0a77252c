//! Classic k-DOP axis families used in tests, benches, and as locked axes.
//!
//! References
//! - 6-DOP: coordinate axes (AABB).
//! - 14-DOP: + 4 cube-corner diagonals.
//! - 18-DOP: + 6 cube-edge diagonals.
//! - 26-DOP: all of the above.
//!
//! Volumes around the unit sphere (all extents `[-1, 1]`):
//! - 6-DOP: 8
//! - 14-DOP: 40 - 20 sqrt 3 (≈ 5.35898)
//! - 18-DOP: ≈ 5.08831
//! - 26-DOP: ≈ 4.77730

use nalgebra::Vector3;

/// Named axis family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DopFamily {
    Dop6,
    Dop14,
    Dop18,
    Dop26,
}

impl DopFamily {
    /// Number of planes (`2 * axis count`).
    pub fn k(&self) -> usize {
        2 * self.axes().len()
    }

    pub fn axes(&self) -> Vec<Vector3<f64>> {
        dop_axes(*self)
    }
}

/// x, y, z.
pub fn basis_axes() -> Vec<Vector3<f64>> {
    vec![Vector3::x(), Vector3::y(), Vector3::z()]
}

/// Normalized `(±1, ±1, ±1)` up to sign.
pub fn corner_axes() -> Vec<Vector3<f64>> {
    [
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0, 1.0, -1.0),
        Vector3::new(1.0, -1.0, 1.0),
        Vector3::new(-1.0, 1.0, 1.0),
    ]
    .into_iter()
    .map(|v| v.normalize())
    .collect()
}

/// Normalized `(±1, ±1, 0)` and permutations, up to sign.
pub fn edge_axes() -> Vec<Vector3<f64>> {
    [
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(1.0, -1.0, 0.0),
        Vector3::new(1.0, 0.0, 1.0),
        Vector3::new(1.0, 0.0, -1.0),
        Vector3::new(0.0, 1.0, 1.0),
        Vector3::new(0.0, 1.0, -1.0),
    ]
    .into_iter()
    .map(|v| v.normalize())
    .collect()
}

pub fn dop_axes(family: DopFamily) -> Vec<Vector3<f64>> {
    let mut axes = basis_axes();
    match family {
        DopFamily::Dop6 => {}
        DopFamily::Dop14 => axes.extend(corner_axes()),
        DopFamily::Dop18 => axes.extend(edge_axes()),
        DopFamily::Dop26 => {
            axes.extend(corner_axes());
            axes.extend(edge_axes());
        }
    }
    axes
}
