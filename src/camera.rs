use glam::{Mat4, Vec3, Vec4};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

/// A world point projected into canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// View-space distance along the camera's forward axis.
    pub depth: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// Camera-space right axis, used to orient billboards.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    /// Camera-space up axis (orthogonal to forward and right).
    #[inline]
    pub fn billboard_up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Compute a world-space ray from canvas pixel coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)`; the origin is the eye.
    pub fn screen_to_world_ray(&self, width: f32, height: f32, sx: f32, sy: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).normalize_or_zero();
        (self.eye, rd)
    }

    /// Project a world point to canvas pixels; `None` when behind the camera.
    pub fn project(&self, point: Vec3, width: f32, height: f32) -> Option<ScreenPoint> {
        let clip = self.view_proj() * point.extend(1.0);
        if clip.w <= self.znear {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * width,
            y: (1.0 - ndc.y) * 0.5 * height,
            depth: clip.w,
        })
    }

    /// On-screen pixels covered by one world unit at `depth`.
    #[inline]
    pub fn pixels_per_unit(&self, depth: f32, height: f32) -> f32 {
        height / (2.0 * depth.max(self.znear) * (self.fovy_radians * 0.5).tan())
    }
}
