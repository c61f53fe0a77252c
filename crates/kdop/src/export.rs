//! Axis-list output for shader source.

use std::fmt::Write;

use nalgebra::Vector3;

/// One `    vec3(x, y, z),` line per axis, six decimals, newline-terminated.
pub fn format_glsl_axes(axes: &[Vector3<f64>]) -> String {
    let mut out = String::with_capacity(axes.len() * 40);
    for a in axes {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "    vec3({:.6}, {:.6}, {:.6}),", a.x, a.y, a.z);
    }
    out
}

/// Zero components with magnitude below `threshold`, then renormalize.
///
/// Axes that would vanish entirely are returned unchanged.
pub fn snap_axes(axes: &[Vector3<f64>], threshold: f64) -> Vec<Vector3<f64>> {
    axes.iter()
        .map(|a| {
            let snapped = a.map(|c| if c.abs() < threshold { 0.0 } else { c });
            snapped.try_normalize(0.0).unwrap_or(*a)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glsl_lines_use_six_decimals() {
        let axes = [Vector3::new(1.0, 0.0, 0.0), Vector3::new(-0.5, 0.25, 1.0 / 3.0)];
        assert_eq!(
            format_glsl_axes(&axes),
            "    vec3(1.000000, 0.000000, 0.000000),\n    vec3(-0.500000, 0.250000, 0.333333),\n"
        );
        assert_eq!(format_glsl_axes(&[]), "");
    }

    #[test]
    fn snapping_cleans_near_zero_components() {
        let raw = Vector3::new(0.7071, 0.002, -0.7071);
        let snapped = snap_axes(&[raw], 5e-3);
        assert_eq!(snapped[0].y, 0.0);
        assert!((snapped[0].norm() - 1.0).abs() < 1e-12);
        assert!((snapped[0].x + snapped[0].z).abs() < 1e-12);
    }

    #[test]
    fn snapping_keeps_tiny_axes() {
        let tiny = Vector3::new(1e-4, -1e-4, 0.0);
        assert_eq!(snap_axes(&[tiny], 5e-3), vec![tiny]);
    }
}
