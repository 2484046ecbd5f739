use glam::Vec3;

#[derive(Default, Clone, Copy, Debug)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub inside: bool,
}

impl MouseState {
    /// Record the latest pointer position in canvas pixels.
    pub fn moved_to(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.x = x;
        self.y = y;
        self.inside = x >= 0.0 && y >= 0.0 && x < width && y < height;
    }

    /// Whether the stored position can be re-picked for hover.
    #[inline]
    pub fn can_hover(&self) -> bool {
        self.inside && !self.down
    }
}

/// Hover target shared by canvas picking and the DOM labels. A hovered label
/// wins over the marker picked under the pointer.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct HoverState {
    pub marker: Option<usize>,
    pub label: Option<usize>,
}

impl HoverState {
    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.label.or(self.marker)
    }

    /// Returns true when the pointer cursor has to flip.
    pub fn set_marker(&mut self, hit: Option<usize>) -> bool {
        let before = self.current().is_some();
        self.marker = hit;
        before != self.current().is_some()
    }

    pub fn set_label(&mut self, hit: Option<usize>) -> bool {
        let before = self.current().is_some();
        self.label = hit;
        before != self.current().is_some()
    }
}

/// Pointer press tracking that separates clicks from look-drags.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub dragging: bool,
    pub origin: [f32; 2],
    pub last: [f32; 2],
}

impl DragState {
    pub fn begin(&mut self, x: f32, y: f32) {
        self.active = true;
        self.dragging = false;
        self.origin = [x, y];
        self.last = [x, y];
    }

    /// Track pointer motion; yields the delta since the previous move once
    /// the press has travelled past `threshold` pixels.
    pub fn moved_to(&mut self, x: f32, y: f32, threshold: f32) -> Option<[f32; 2]> {
        if !self.active {
            return None;
        }
        if !self.dragging {
            let dx = x - self.origin[0];
            let dy = y - self.origin[1];
            if (dx * dx + dy * dy).sqrt() <= threshold {
                return None;
            }
            self.dragging = true;
        }
        let delta = [x - self.last[0], y - self.last[1]];
        self.last = [x, y];
        Some(delta)
    }

    /// Release the press; true when it never became a drag (a click).
    pub fn end(&mut self) -> bool {
        let was_click = self.active && !self.dragging;
        self.active = false;
        self.dragging = false;
        was_click
    }
}

/// Distance along the ray to the sphere surface. A ray starting inside the
/// sphere hits at 0 when it heads toward the centre.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    if c <= 0.0 {
        return (b <= 0.0).then_some(0.0);
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index and ray distance of the nearest sphere hit by the ray.
pub fn pick_nearest(
    ray_origin: Vec3,
    ray_dir: Vec3,
    spheres: impl IntoIterator<Item = (Vec3, f32)>,
) -> Option<(usize, f32)> {
    let mut best = None::<(usize, f32)>;
    for (i, (center, radius)) in spheres.into_iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best
}
