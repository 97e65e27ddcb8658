use crate::core::math::{try_normalize, vec3, Mat4, Vec2, Vec3};
use crate::domain::CameraSettings;

/// A world-space ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

impl Ray {
    /// Hit point on the plane `z = const`, if the ray reaches it going forward.
    pub fn intersect_plane_z(&self, z: f32) -> Option<Vec3> {
        if self.dir.z.abs() < 1e-6 {
            return None;
        }
        let t = (z - self.origin.z) / self.dir.z;
        if t < 0.0 || !t.is_finite() {
            return None;
        }
        Some(self.origin + self.dir * t)
    }
}

/// Perspective camera used to turn pointer coordinates into world rays.
#[derive(Clone, Debug)]
pub struct Camera {
    settings: CameraSettings,
    inv_view_proj: Mat4,
}

impl Camera {
    pub fn new(settings: CameraSettings) -> Self {
        let mut camera = Self { settings, inv_view_proj: Mat4::IDENTITY };
        camera.rebuild();
        camera
    }

    fn rebuild(&mut self) {
        let s = &self.settings;
        let view = Mat4::look_at_rh(vec3(s.position), vec3(s.target), Vec3::Y);
        // OpenGL-style clip space, matching three.js NDC (z in -1..1).
        let proj = Mat4::perspective_rh_gl(s.fov_deg.to_radians(), s.aspect, s.near, s.far);
        self.inv_view_proj = (proj * view).inverse();
    }

    pub fn position(&self) -> Vec3 {
        vec3(self.settings.position)
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect > 0.0 && aspect.is_finite() {
            self.settings.aspect = aspect;
            self.rebuild();
        }
    }

    /// Unproject normalized device coordinates (-1..1, y up) at clip depth `z`.
    pub fn unproject(&self, ndc: Vec2, z: f32) -> Vec3 {
        self.inv_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, z))
    }

    /// Ray from the near plane through the pointer.
    pub fn ray(&self, ndc: Vec2) -> Option<Ray> {
        let near = self.unproject(ndc, -1.0);
        let far = self.unproject(ndc, 1.0);
        let dir = try_normalize(far - near)?;
        Some(Ray { origin: near, dir })
    }

    /// Pointer position on the plane `z`.
    pub fn pointer_on_plane(&self, ndc: Vec2, z: f32) -> Option<Vec3> {
        self.ray(ndc)?.intersect_plane_z(z)
    }
}
