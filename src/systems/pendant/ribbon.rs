//! Strap geometry: a thin band extruded along sampled curve points.
//!
//! Each sample contributes four vertices (front-left, front-right,
//! back-left, back-right). Buffers are flat `f32`/`u32` arrays ready to be
//! uploaded as buffer attributes by the host renderer.

use crate::core::math::{try_normalize, Vec3};

/// Used when no sample yields a direction at all.
const FALLBACK_DIRECTION: Vec3 = Vec3::NEG_Y;

#[derive(Clone, Debug, Default)]
pub struct RibbonMesh {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Vec<u32>,
}

impl RibbonMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.uvs.clear();
        self.indices.clear();
    }

    /// Rebuild the band through `points`.
    ///
    /// Returns `false` and leaves the previous mesh untouched when there are
    /// fewer than two points or a point is not finite.
    pub fn rebuild(&mut self, points: &[Vec3], width: f32, thickness: f32) -> bool {
        if points.len() < 2 || !points.iter().all(|p| p.is_finite()) {
            return false;
        }
        self.clear();
        self.positions.reserve(points.len() * 12);
        self.uvs.reserve(points.len() * 8);
        self.indices.reserve((points.len() - 1) * 24);

        let half = width * 0.5;
        let depth = Vec3::Z * thickness;
        let last = points.len() - 1;

        let mut side = side_of(leading_direction(points)).unwrap_or(Vec3::X);

        for (i, &point) in points.iter().enumerate() {
            let next = points[(i + 1).min(last)];
            // Degenerate spans (and the final sample) reuse the last good frame.
            if let Some(s) = try_normalize(next - point).and_then(side_of) {
                side = s;
            }

            let left = point + side * half;
            let right = point - side * half;
            for v in [left + depth, right + depth, left - depth, right - depth] {
                self.positions.extend_from_slice(&v.to_array());
            }

            let v = i as f32 / last as f32;
            self.uvs.extend_from_slice(&[0.0, v, 1.0, v, 0.0, v, 1.0, v]);

            if i < last {
                let b = (i * 4) as u32;
                self.indices.extend_from_slice(&[
                    b, b + 4, b + 1,
                    b + 1, b + 4, b + 5,
                    b + 2, b + 3, b + 6,
                    b + 3, b + 7, b + 6,
                    b, b + 2, b + 4,
                    b + 4, b + 2, b + 6,
                    b + 1, b + 5, b + 3,
                    b + 5, b + 7, b + 3,
                ]);
            }
        }

        self.compute_normals();
        true
    }

    /// Area-weighted vertex normals from the index buffer.
    fn compute_normals(&mut self) {
        let count = self.vertex_count();
        let mut acc = vec![Vec3::ZERO; count];
        let vertex = |i: u32, pos: &[f32]| {
            let k = i as usize * 3;
            Vec3::new(pos[k], pos[k + 1], pos[k + 2])
        };

        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (
                vertex(tri[0], &self.positions),
                vertex(tri[1], &self.positions),
                vertex(tri[2], &self.positions),
            );
            let n = (b - a).cross(c - a);
            for &i in tri {
                acc[i as usize] += n;
            }
        }

        self.normals.clear();
        self.normals.reserve(count * 3);
        for n in acc {
            let n = try_normalize(n).unwrap_or(Vec3::Z);
            self.normals.extend_from_slice(&n.to_array());
        }
    }
}

/// First usable tangent along the samples.
fn leading_direction(points: &[Vec3]) -> Vec3 {
    points
        .windows(2)
        .filter_map(|w| try_normalize(w[1] - w[0]))
        .find(|d| side_of(*d).is_some())
        .unwrap_or(FALLBACK_DIRECTION)
}

/// In-plane perpendicular of a tangent. `None` when the tangent points
/// along the view axis.
fn side_of(direction: Vec3) -> Option<Vec3> {
    try_normalize(Vec3::new(-direction.y, direction.x, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical(n: usize) -> Vec<Vec3> {
        (0..n).map(|i| Vec3::new(0.0, -(i as f32) * 0.1, 0.0)).collect()
    }

    #[test]
    fn buffer_sizes_follow_sample_count() {
        let mut mesh = RibbonMesh::new();
        assert!(mesh.rebuild(&vertical(51), 0.4, 0.008));
        assert_eq!(mesh.vertex_count(), 51 * 4);
        assert_eq!(mesh.uvs.len(), 51 * 8);
        assert_eq!(mesh.normals.len(), mesh.positions.len());
        assert_eq!(mesh.triangle_count(), 50 * 8);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn band_has_constant_width() {
        let mut mesh = RibbonMesh::new();
        mesh.rebuild(&vertical(5), 0.4, 0.008);
        for quad in mesh.positions.chunks_exact(12) {
            let left = Vec3::new(quad[0], quad[1], quad[2]);
            let right = Vec3::new(quad[3], quad[4], quad[5]);
            assert!((left.distance(right) - 0.4).abs() < 1e-5);
        }
    }

    #[test]
    fn degenerate_tangent_reuses_previous_direction() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, -2.0, 0.0),
        ];
        let mut mesh = RibbonMesh::new();
        assert!(mesh.rebuild(&points, 0.4, 0.0));
        assert!(mesh.positions.iter().all(|v| v.is_finite()));
        // Sample 2 sits on a zero-length span; its band must still be 0.4 wide.
        let q = &mesh.positions[2 * 12..3 * 12];
        let width = Vec3::new(q[0], q[1], q[2]).distance(Vec3::new(q[3], q[4], q[5]));
        assert!((width - 0.4).abs() < 1e-5);
    }

    #[test]
    fn all_points_coincident_still_builds() {
        let mut mesh = RibbonMesh::new();
        assert!(mesh.rebuild(&[Vec3::ONE; 3], 0.4, 0.01));
        assert!(mesh.positions.iter().all(|v| v.is_finite()));
        assert!(mesh.normals.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn too_few_or_bad_points_skip_rebuild() {
        let mut mesh = RibbonMesh::new();
        mesh.rebuild(&vertical(3), 0.4, 0.008);
        let before = mesh.positions.clone();
        assert!(!mesh.rebuild(&[Vec3::ZERO], 0.4, 0.008));
        assert!(!mesh.rebuild(&[Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)], 0.4, 0.008));
        assert_eq!(mesh.positions, before);
    }
}
