use glam::{Mat4, Vec3};

/// Default camera angular speed in degrees per frame. The slider's initial
/// value is this times 100.
pub const DEFAULT_CAMERA_SPEED: f32 = 0.2;

/// Perspective camera circling the cube field about the Y axis, looking at
/// the origin. Angle and speed are per-frame quantities, same as the cubes.
pub struct OrbitCamera {
    /// Orbit angle in degrees.
    pub angle: f32,
    /// Degrees per frame while orbiting.
    pub speed: f32,
    /// Distance from the origin.
    pub distance: f32,
    /// Static camera when false; `advance` is then a no-op.
    pub orbiting: bool,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            angle: 0.0,
            speed: DEFAULT_CAMERA_SPEED,
            distance: 30.0,
            orbiting: true,
            fov: 60.0_f32.to_radians(),
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 200.0,
        }
    }
}

impl OrbitCamera {
    /// Advance the orbit by one frame.
    pub fn advance(&mut self) {
        if self.orbiting {
            self.angle += self.speed;
        }
    }

    /// Map the slider's integer value (1..=100) to degrees per frame.
    pub fn set_speed_percent(&mut self, value: u32) {
        self.speed = value as f32 / 100.0;
    }

    /// Current speed as the slider's integer value.
    pub fn speed_percent(&self) -> u32 {
        (self.speed * 100.0).round() as u32
    }

    /// Recompute the aspect ratio for a resized viewport. A degenerate
    /// zero-height resize is clamped to 1.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// The camera transform, applied before any cube transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
            * Mat4::from_rotation_y(self.angle.to_radians())
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_produces_valid_matrices() {
        let cam = OrbitCamera::default();
        let vp = cam.view_projection();
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn static_camera_does_not_advance() {
        let mut cam = OrbitCamera {
            orbiting: false,
            ..OrbitCamera::default()
        };
        cam.advance();
        assert_eq!(cam.angle, 0.0);
    }

    #[test]
    fn orbiting_camera_advances_by_speed() {
        let mut cam = OrbitCamera::default();
        cam.advance();
        assert_eq!(cam.angle, DEFAULT_CAMERA_SPEED);
    }
}
