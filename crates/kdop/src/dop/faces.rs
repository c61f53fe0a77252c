//! Face assembly from slab planes alone.
//!
//! Algorithm
//! - Every ordered axis pair `(a, b)` meets in up to four edge lines (each
//!   axis at its min or max plane). Each line is clipped against the other
//!   slabs; surviving ends that pass the distance filter become vertices of
//!   both sides that produced the line.
//! - Each side's vertices are then sorted by angle around their centroid in
//!   the side's tangent frame and deduplicated, which yields the convex face
//!   polygon in cyclic order.
//!
//! Ordered pairs visit every edge twice; the duplicates collapse in dedup.

use nalgebra::Vector3;

use super::cfg::{FRAME_MAJOR_LIMIT, PARALLEL_PAIR_EPS, VERTEX_EPS};
use super::trace::{kdop_distance, trace_range};
use super::types::{Extent, Side};

/// A face of the k-DOP: its plane and its vertices in cyclic order.
#[derive(Clone, Debug)]
pub struct FacePolygon {
    pub side: Side,
    pub vertices: Vec<Vector3<f64>>,
}

/// Counters for inputs the kernel skipped instead of failing on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceStats {
    /// Sides that received vertices but kept fewer than 3 after dedup.
    pub degenerate_faces: usize,
    /// Traced edge ends that failed the distance filter (or were non-finite).
    pub rejected_vertices: usize,
    /// Ordered axis pairs skipped as (anti)parallel.
    pub skipped_pairs: usize,
    /// Edge lines no other slab constrained (region unbounded along them).
    pub unbounded_edges: usize,
}

/// All non-degenerate faces plus the common apex used for volume fans.
#[derive(Clone, Debug)]
pub struct KdopFaces {
    pub faces: Vec<FacePolygon>,
    /// First raw vertex of the first side with more than two raw vertices;
    /// the origin if no side qualified.
    pub apex: Vector3<f64>,
    pub stats: FaceStats,
}

/// In-plane half of the orthonormal frame around a face normal.
#[derive(Clone, Copy, Debug)]
struct TangentFrame {
    pub tangent: Vector3<f64>,
    pub bitangent: Vector3<f64>,
}

impl TangentFrame {
    pub fn new(normal: Vector3<f64>) -> Self {
        let major = if normal.x.abs() < FRAME_MAJOR_LIMIT {
            Vector3::x()
        } else if normal.y.abs() < FRAME_MAJOR_LIMIT {
            Vector3::y()
        } else {
            Vector3::z()
        };
        let tangent = normal.cross(&major).normalize();
        let bitangent = normal.cross(&tangent);
        Self { tangent, bitangent }
    }

    /// Angle of `p` around `pivot`, in `(-pi, pi]`.
    #[inline]
    pub fn signed_angle(&self, p: Vector3<f64>, pivot: Vector3<f64>) -> f64 {
        let delta = p - pivot;
        self.tangent.dot(&delta).atan2(self.bitangent.dot(&delta))
    }
}

/// Enumerate the faces of the k-DOP given by `axes` and `extents`.
///
/// Pairs beyond the shorter of the two slices are ignored. Degenerate input
/// (parallel pairs, unbounded regions, empty slabs) produces fewer or no faces
/// and is counted in `stats`, never reported as an error.
pub fn kdop_faces(axes: &[Vector3<f64>], extents: &[Extent]) -> KdopFaces {
    let n = axes.len().min(extents.len());
    let (axes, extents) = (&axes[..n], &extents[..n]);

    let mut stats = FaceStats::default();
    let sides = collect_side_vertices(axes, extents, &mut stats);
    let apex = sides
        .iter()
        .find(|vs| vs.len() > 2)
        .map(|vs| vs[0])
        .unwrap_or_else(Vector3::zeros);

    let mut faces = Vec::new();
    for (index, mut vertices) in sides.into_iter().enumerate() {
        if vertices.is_empty() {
            continue;
        }
        let side = Side::from_index(index);
        if vertices.len() > 2 {
            order_face(&mut vertices, axes[side.axis]);
        }
        if vertices.len() < 3 {
            stats.degenerate_faces += 1;
            continue;
        }
        faces.push(FacePolygon { side, vertices });
    }
    KdopFaces {
        faces,
        apex,
        stats,
    }
}

/// Raw (unsorted, duplicated) vertex lists per side, indexed by `Side::index`.
fn collect_side_vertices(
    axes: &[Vector3<f64>],
    extents: &[Extent],
    stats: &mut FaceStats,
) -> Vec<Vec<Vector3<f64>>> {
    let n = axes.len();
    let mut sides: Vec<Vec<Vector3<f64>>> = vec![Vec::new(); n * 2];
    for a in 0..n {
        for b in 0..n {
            if a == b {
                continue;
            }
            let a_axis = axes[a];
            let b_axis = axes[b];
            let dir = a_axis.cross(&b_axis);
            let d = a_axis.dot(&b_axis);
            // 2x2 system for the line point in span(a, b); singular for parallel axes.
            let denom = 1.0 - d * d;
            if denom.abs() < PARALLEL_PAIR_EPS {
                stats.skipped_pairs += 1;
                continue;
            }
            let inv = 1.0 / denom;

            for combo in 0..4 {
                let a_side = Side::new(a, combo & 1 == 1);
                let b_side = Side::new(b, combo & 2 == 2);
                let h1 = extents[a].bound(a_side.high);
                let h2 = extents[b].bound(b_side.high);
                let c1 = (h1 - h2 * d) * inv;
                let c2 = (h2 - h1 * d) * inv;
                let point = a_axis * c1 + b_axis * c2;

                let range = trace_range(point, dir, axes, extents, [a, b]);
                if range.is_empty() {
                    continue;
                }
                if range.is_unbounded() {
                    stats.unbounded_edges += 1;
                    continue;
                }
                for t in [range.near, range.far] {
                    let v = range.point_at(point, dir, t);
                    let finite = v.iter().all(|c| c.is_finite());
                    if finite && kdop_distance(&v, axes, extents) < VERTEX_EPS {
                        sides[a_side.index()].push(v);
                        sides[b_side.index()].push(v);
                    } else {
                        stats.rejected_vertices += 1;
                    }
                }
            }
        }
    }
    sides
}

/// Sort `vertices` cyclically around their centroid and drop near-duplicates
/// (including the last/first wraparound).
fn order_face(vertices: &mut Vec<Vector3<f64>>, normal: Vector3<f64>) {
    if vertices.is_empty() {
        return;
    }
    let frame = TangentFrame::new(normal);
    let pivot = centroid(vertices);
    let mut items: Vec<(f64, Vector3<f64>)> = vertices
        .iter()
        .map(|&p| (frame.signed_angle(p, pivot), p))
        .collect();
    items.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    vertices.clear();
    vertices.extend(items.into_iter().map(|(_, p)| p));

    let eps2 = VERTEX_EPS * VERTEX_EPS;
    let mut prev = vertices[vertices.len() - 1];
    vertices.retain(|&cur| {
        if (prev - cur).norm_squared() < eps2 {
            return false;
        }
        prev = cur;
        true
    });
}

fn centroid(points: &[Vector3<f64>]) -> Vector3<f64> {
    let mut acc = Vector3::zeros();
    for &p in points {
        acc += p;
    }
    acc / (points.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn basis() -> Vec<Vector3<f64>> {
        vec![
            vector![1.0, 0.0, 0.0],
            vector![0.0, 1.0, 0.0],
            vector![0.0, 0.0, 1.0],
        ]
    }

    #[test]
    fn tangent_frame_is_orthonormal() {
        for n in [
            vector![1.0, 0.0, 0.0],
            vector![0.0, 0.0, 1.0],
            vector![1.0, 1.0, 1.0].normalize(),
            vector![-0.3, 0.9, 0.2].normalize(),
        ] {
            let f = TangentFrame::new(n);
            assert!((f.tangent.norm() - 1.0).abs() < 1e-12);
            assert!((f.bitangent.norm() - 1.0).abs() < 1e-12);
            assert!(f.tangent.dot(&f.bitangent).abs() < 1e-12);
            assert!(f.tangent.dot(&n).abs() < 1e-12);
            assert!(f.bitangent.dot(&n).abs() < 1e-12);
        }
    }

    #[test]
    fn order_face_sorts_and_dedups_square() {
        let mut vs = vec![
            vector![0.0, 1.0, 1.0],
            vector![0.0, -1.0, -1.0],
            vector![0.0, 1.0, -1.0],
            vector![0.0, 1.0, 1.0 + 1e-9],
            vector![0.0, -1.0, 1.0],
            vector![0.0, -1.0, -1.0],
        ];
        order_face(&mut vs, vector![1.0, 0.0, 0.0]);
        assert_eq!(vs.len(), 4);
        // Consecutive vertices of a cyclically ordered square share one coordinate.
        for i in 0..4 {
            let d = vs[(i + 1) % 4] - vs[i];
            assert!((d.norm() - 2.0).abs() < 1e-6, "non-adjacent step {:?}", d);
        }
    }

    #[test]
    fn order_face_collapses_single_point() {
        let p = vector![0.3, 0.3, 0.3];
        let mut vs = vec![p, p, p, p];
        order_face(&mut vs, vector![0.0, 0.0, 1.0]);
        assert!(vs.len() < 3);
    }

    #[test]
    fn cube_has_six_square_faces() {
        let faces = kdop_faces(&basis(), &[Extent::symmetric(1.0); 3]);
        assert_eq!(faces.faces.len(), 6);
        assert_eq!(faces.stats, FaceStats::default());
        for face in &faces.faces {
            assert_eq!(face.vertices.len(), 4);
            let axis = basis()[face.side.axis];
            let plane = if face.side.high { 1.0 } else { -1.0 };
            for v in &face.vertices {
                assert!((v.dot(&axis) - plane).abs() < 1e-12);
            }
        }
        // Apex is a raw vertex of side 0 (x = -1).
        assert!((faces.apex.x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn apex_defaults_to_origin_without_faces() {
        let faces = kdop_faces(&basis()[..1], &[Extent::symmetric(1.0)]);
        assert!(faces.faces.is_empty());
        assert_eq!(faces.apex, Vector3::zeros());
    }

    #[test]
    fn parallel_pairs_are_counted_and_skipped() {
        let mut axes = basis();
        axes.push(vector![-1.0, 0.0, 0.0]);
        let mut extents = vec![Extent::symmetric(1.0); 3];
        extents.push(Extent::symmetric(0.5));
        let faces = kdop_faces(&axes, &extents);
        assert_eq!(faces.stats.skipped_pairs, 2);
        assert!(faces.stats.rejected_vertices > 0);
    }

    #[test]
    fn short_extent_slice_truncates_axes() {
        let faces = kdop_faces(&basis(), &[Extent::symmetric(1.0); 2]);
        assert!(faces.faces.is_empty());
        assert!(faces.stats.unbounded_edges > 0);
    }
}
