//! Small vector helpers on top of `glam`.

pub use glam::{Mat4, Vec2, Vec3};

/// Below this length a direction is treated as degenerate.
pub const DIRECTION_EPSILON: f32 = 1e-5;

/// Normalize `v`, or return `None` when it is too short to carry a direction.
#[inline]
pub fn try_normalize(v: Vec3) -> Option<Vec3> {
    let len = v.length();
    if len > DIRECTION_EPSILON && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}

#[inline]
pub fn is_finite(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

pub fn vec3(a: [f32; 3]) -> Vec3 {
    Vec3::from_array(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_normalize_rejects_tiny_vectors() {
        assert!(try_normalize(Vec3::new(1e-7, 0.0, 0.0)).is_none());
        assert!(try_normalize(Vec3::new(f32::NAN, 1.0, 0.0)).is_none());
        let n = try_normalize(Vec3::new(0.0, 3.0, 4.0)).unwrap();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }
}
