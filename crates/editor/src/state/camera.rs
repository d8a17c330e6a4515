use glam::{Mat4, Vec3};

/// Default eye position of a fresh session
pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, 5.0, 10.0);

/// Default vertical field of view in degrees
pub const DEFAULT_FOV_DEGREES: f32 = 75.0;

/// Orbit camera for the viewport
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Orbit center
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
    /// Field of view restored by `reset`
    default_fov: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(DEFAULT_FOV_DEGREES)
    }
}

impl CameraState {
    /// Camera at the default eye position looking at the origin
    pub fn new(fov_degrees: f32) -> Self {
        let fov = fov_degrees.to_radians();
        let mut camera = Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
            target: Vec3::ZERO,
            fov,
            default_fov: fov,
        };
        camera.reset();
        camera
    }

    /// Return to the default view
    pub fn reset(&mut self) {
        let offset = DEFAULT_EYE;
        self.target = Vec3::ZERO;
        self.distance = offset.length();
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = (offset.y / self.distance).asin();
        self.fov = self.default_fov;
    }

    /// Orbit by a pointer drag, in degrees
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx.to_radians();
        self.pitch = (self.pitch + dy.to_radians()).clamp(-1.5, 1.5);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(0.5, 100.0);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = (self.target - self.eye_position()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        self.target += right * dx + up * dy;
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(self.distance * cp * sy, self.distance * sp, self.distance * cp * cy)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, 0.1, 1000.0)
    }
}
