//! Perspective camera for the background plane

use glam::{Mat4, Vec3};

use crate::utils::shader_constants::{CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            target: Vec3::ZERO,
            fov: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// wgpu-style projection (depth 0..1). Falls back to a square aspect
    /// for degenerate surfaces so the matrix never contains NaN.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        let aspect = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            aspect_ratio
        } else {
            1.0
        };
        Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection_matrix(aspect_ratio) * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        let view_space = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!((view_space.z + 3.0).abs() < 1e-5);
        assert_eq!(camera.fov, 75.0);
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let clip = Camera::default().view_projection(16.0 / 9.0) * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_wider_surface_shrinks_horizontal_extent() {
        let point = glam::Vec4::new(1.0, 0.0, 0.0, 1.0);
        let narrow = Camera::default().view_projection(1.0) * point;
        let wide = Camera::default().view_projection(2.0) * point;
        assert!((wide.x / wide.w) < (narrow.x / narrow.w));
    }

    #[test]
    fn test_degenerate_aspect_stays_finite() {
        let camera = Camera::default();
        for aspect in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(camera.view_projection(aspect).is_finite());
        }
    }
}
