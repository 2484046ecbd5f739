use crate::camera::Camera;
use crate::constants::*;
use glam::Vec3;

/// Movement keys currently held down.
#[derive(Default, Clone, Copy, Debug)]
pub struct MoveKeys {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl MoveKeys {
    /// Apply a key press/release; returns false for keys that do not move.
    pub fn set_key(&mut self, key: &str, pressed: bool) -> bool {
        let slot = match key {
            "w" | "W" | "ArrowUp" => &mut self.forward,
            "s" | "S" | "ArrowDown" => &mut self.back,
            "a" | "A" => &mut self.strafe_left,
            "d" | "D" => &mut self.strafe_right,
            "q" | "Q" | "ArrowLeft" => &mut self.turn_left,
            "e" | "E" | "ArrowRight" => &mut self.turn_right,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[inline]
fn axis(positive: bool, negative: bool) -> f32 {
    (positive as i32 - negative as i32) as f32
}

/// Walking eye point. Yaw 0 faces -Z; positive yaw turns left.
#[derive(Clone, Debug)]
pub struct Observer {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, OBSERVER_EYE_HEIGHT, 0.0),
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl Observer {
    /// Horizontal walking direction.
    #[inline]
    pub fn forward_flat(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    #[inline]
    pub fn right_flat(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Full view direction including pitch.
    pub fn look_dir(&self) -> Vec3 {
        self.forward_flat() * self.pitch.cos() + Vec3::Y * self.pitch.sin()
    }

    /// Integrate held keys over `dt_sec`.
    pub fn step(&mut self, keys: &MoveKeys, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        self.yaw += axis(keys.turn_left, keys.turn_right) * OBSERVER_TURN_SPEED * dt;
        let wish = self.forward_flat() * axis(keys.forward, keys.back)
            + self.right_flat() * axis(keys.strafe_right, keys.strafe_left);
        if wish.length_squared() > 0.0 {
            self.position += wish.normalize() * OBSERVER_WALK_SPEED * dt;
        }
        self.clamp_to_world();
    }

    /// Rotate the view by a pointer drag in pixels.
    pub fn look(&mut self, dx_px: f32, dy_px: f32) {
        self.yaw -= dx_px * LOOK_SENSITIVITY;
        self.pitch = (self.pitch - dy_px * LOOK_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Place the observer at a host-provided point.
    pub fn teleport(&mut self, position: Vec3) {
        self.position = position;
    }

    fn clamp_to_world(&mut self) {
        let flat = Vec3::new(self.position.x, 0.0, self.position.z);
        let len = flat.length();
        if len > OBSERVER_WORLD_RADIUS {
            let scale = OBSERVER_WORLD_RADIUS / len;
            self.position.x *= scale;
            self.position.z *= scale;
        }
        self.position.y = OBSERVER_EYE_HEIGHT;
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.position,
            target: self.position + self.look_dir(),
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}
