//! Orbit camera for projecting the flight path
//!
//! The graph backend frames the trajectory inside a unit cube and looks at it
//! from a fixed yaw and pitch, so the view is stable from frame to frame.

use glam::{Mat4, Quat, Vec3, Vec4};

/// Camera orbiting a target point
pub struct Camera {
    /// Point the camera looks at
    pub target: Vec3,
    /// Distance from the target
    pub distance: f32,
    /// Horizontal rotation around the target
    pub yaw: f32,
    /// Elevation above the horizontal plane
    pub pitch: f32,
    /// Render target aspect ratio
    pub aspect: f32,
    /// Field of view in radians
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 3.0,
            yaw: (-35.0f32).to_radians(),
            pitch: 25.0f32.to_radians(),
            aspect: aspect(width, height),
            fovy: 45.0f32.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = aspect(width, height);
    }

    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let orientation =
            Quat::from_axis_angle(Vec3::Y, self.yaw) * Quat::from_axis_angle(Vec3::X, -self.pitch);
        self.target + orientation * Vec3::Z * self.distance
    }

    #[must_use]
    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    /// Projects a world point to pixel coordinates. Points behind the camera
    /// yield `None`.
    #[must_use]
    pub fn project(
        &self,
        view_proj: &Mat4,
        point: Vec3,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32)> {
        let clip = *view_proj * Vec4::new(point.x, point.y, point.z, 1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        #[allow(clippy::cast_precision_loss)]
        let (w, h) = (width as f32, height as f32);
        Some(((ndc.x + 1.0) * 0.5 * w, (1.0 - ndc.y) * 0.5 * h))
    }
}

#[allow(clippy::cast_precision_loss)]
fn aspect(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_projects_to_image_centre() {
        let cam = Camera::new(200, 100);
        let vp = cam.build_view_projection_matrix();
        let (x, y) = cam.project(&vp, cam.target, 200, 100).unwrap();
        assert!((x - 100.0).abs() < 1e-3, "x={x}");
        assert!((y - 50.0).abs() < 1e-3, "y={y}");
    }

    #[test]
    fn point_behind_camera_is_culled() {
        let cam = Camera::new(100, 100);
        let vp = cam.build_view_projection_matrix();
        let behind = cam.eye() + (cam.eye() - cam.target);
        assert!(cam.project(&vp, behind, 100, 100).is_none());
    }
}
