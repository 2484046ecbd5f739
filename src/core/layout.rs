use crate::core::constants::*;
use glam::Vec3;

/// Which ring of the layout a waypoint belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Inner,
    Outer,
    Hidden,
}

impl Category {
    /// Hidden waypoints never count toward visited tracking.
    #[inline]
    pub fn is_hidden(self) -> bool {
        matches!(self, Category::Hidden)
    }
}

/// Marker shape drawn for a waypoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Orb,
    Halo,
    Prism,
    Diamond,
    Beacon,
    Bloom,
    Gear,
    Compass,
    Palette,
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
}

impl Glyph {
    /// Number of polygon sides used by the marker shader; 0 draws a circle.
    pub fn sides(self) -> u32 {
        match self {
            Glyph::Orb | Glyph::Halo => 0,
            Glyph::Prism | Glyph::Tetrahedron => 3,
            Glyph::Diamond | Glyph::Cube | Glyph::Octahedron => 4,
            Glyph::Beacon | Glyph::Dodecahedron => 5,
            Glyph::Bloom | Glyph::Icosahedron => 6,
            Glyph::Gear => 8,
            Glyph::Compass | Glyph::Palette => 7,
        }
    }

    pub fn outlined(self) -> bool {
        matches!(
            self,
            Glyph::Halo | Glyph::Gear | Glyph::Compass | Glyph::Octahedron | Glyph::Icosahedron
        )
    }

    /// Rotation (radians) applied to the polygon so squares read as diamonds etc.
    pub fn rotation(self) -> f32 {
        match self {
            Glyph::Diamond | Glyph::Octahedron => std::f32::consts::FRAC_PI_4,
            _ => 0.0,
        }
    }
}

/// Immutable descriptor of one waypoint, computed once at load time.
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub index: usize,
    pub position: Vec3,
    pub label: &'static str,
    pub color: [f32; 3],
    pub glyph: Glyph,
    pub category: Category,
}

impl Waypoint {
    #[inline]
    pub fn hidden(&self) -> bool {
        self.category.is_hidden()
    }

    /// Lowercase label handed to click callbacks and the visited set.
    pub fn slug(&self) -> String {
        self.label.to_lowercase()
    }
}

/// Golden-spiral placement parameters.
#[derive(Clone, Debug)]
pub struct SpiralParams {
    pub base_radius: f32,
    pub growth: f32,
    pub max_radius: f32,
    pub angle_step_rad: f32,
    pub height: f32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            base_radius: SPIRAL_BASE_RADIUS,
            growth: PHI,
            max_radius: SPIRAL_MAX_RADIUS,
            angle_step_rad: GOLDEN_ANGLE_DEG.to_radians(),
            height: WAYPOINT_HEIGHT,
        }
    }
}

impl SpiralParams {
    #[inline]
    pub fn radius(&self, n: u32) -> f32 {
        (self.base_radius * self.growth.powf(n as f32 / 2.0)).min(self.max_radius)
    }

    #[inline]
    pub fn angle(&self, n: u32) -> f32 {
        n as f32 * self.angle_step_rad
    }

    /// Position of spiral point `n`; z is mirrored negative to keep markers
    /// in front of the spawn point.
    pub fn position(&self, n: u32) -> Vec3 {
        let radius = self.radius(n);
        let angle = self.angle(n);
        Vec3::new(
            radius * angle.cos(),
            self.height,
            -(radius * angle.sin()).abs(),
        )
    }
}

/// Fixed-radius arc spanning `-half_span..+half_span` around the +X axis.
#[derive(Clone, Debug)]
pub struct ArcParams {
    pub radius: f32,
    pub half_span_rad: f32,
    pub height: f32,
}

impl ArcParams {
    /// Arc at the horizontal distance of the hidden anchor spiral point.
    pub fn hidden(spiral: &SpiralParams) -> Self {
        Self {
            radius: hidden_radius(spiral),
            half_span_rad: ARC_HALF_SPAN_DEG.to_radians(),
            height: spiral.height,
        }
    }

    /// Angle of point `index` of `count`. A single point sits on the axis.
    pub fn angle(&self, index: u32, count: u32) -> f32 {
        if count <= 1 {
            return 0.0;
        }
        let start = -self.half_span_rad;
        let span = 2.0 * self.half_span_rad;
        start + index as f32 * span / (count - 1) as f32
    }

    pub fn position(&self, index: u32, count: u32) -> Vec3 {
        let angle = self.angle(index, count);
        Vec3::new(
            self.radius * angle.cos(),
            self.height,
            -self.radius * angle.sin(),
        )
    }
}

/// Horizontal distance from the origin to the hidden anchor spiral point.
pub fn hidden_radius(spiral: &SpiralParams) -> f32 {
    let p = spiral.position(HIDDEN_ANCHOR_INDEX);
    (p.x * p.x + p.z * p.z).sqrt()
}

#[derive(Clone, Copy)]
enum Slot {
    Spiral(u32),
    Arc(u32),
}

struct Entry {
    label: &'static str,
    hex: u32,
    glyph: Glyph,
    category: Category,
    slot: Slot,
}

#[rustfmt::skip]
const CATALOGUE: [Entry; 14] = [
    Entry { label: "OUR APPROACH", hex: 0x4A90E2, glyph: Glyph::Orb, category: Category::Inner, slot: Slot::Spiral(0) },
    Entry { label: "SERVICES", hex: 0x50E3C2, glyph: Glyph::Halo, category: Category::Inner, slot: Slot::Spiral(1) },
    Entry { label: "PROJECTS", hex: 0xF5A623, glyph: Glyph::Prism, category: Category::Inner, slot: Slot::Spiral(2) },
    Entry { label: "ABOUT US", hex: 0xB8E986, glyph: Glyph::Diamond, category: Category::Inner, slot: Slot::Spiral(3) },
    Entry { label: "CONTACT US", hex: 0x9013FE, glyph: Glyph::Beacon, category: Category::Inner, slot: Slot::Spiral(4) },
    Entry { label: "SCIENCE", hex: 0xFF4081, glyph: Glyph::Bloom, category: Category::Outer, slot: Slot::Spiral(5) },
    Entry { label: "ENGINEERING", hex: 0x00BCD4, glyph: Glyph::Gear, category: Category::Outer, slot: Slot::Spiral(6) },
    Entry { label: "DESIGN", hex: 0xFFC107, glyph: Glyph::Compass, category: Category::Outer, slot: Slot::Spiral(7) },
    Entry { label: "ART", hex: 0x8BC34A, glyph: Glyph::Palette, category: Category::Outer, slot: Slot::Spiral(8) },
    Entry { label: "FOUNDATION OF CONSCIOUSNESS", hex: 0xE91E63, glyph: Glyph::Tetrahedron, category: Category::Hidden, slot: Slot::Spiral(HIDDEN_ANCHOR_INDEX) },
    Entry { label: "STABILITY OF MIND", hex: 0x9C27B0, glyph: Glyph::Cube, category: Category::Hidden, slot: Slot::Arc(0) },
    Entry { label: "BALANCE OF THOUGHT", hex: 0xFF9800, glyph: Glyph::Octahedron, category: Category::Hidden, slot: Slot::Arc(1) },
    Entry { label: "HARMONY OF BEING", hex: 0x4CAF50, glyph: Glyph::Dodecahedron, category: Category::Hidden, slot: Slot::Arc(2) },
    Entry { label: "INFINITE POTENTIAL", hex: 0x2196F3, glyph: Glyph::Icosahedron, category: Category::Hidden, slot: Slot::Arc(3) },
];

#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

/// The fixed, ordered set of waypoints plus the derived hidden-arc radius.
#[derive(Clone, Debug)]
pub struct WaypointLayout {
    pub waypoints: Vec<Waypoint>,
    pub hidden_radius: f32,
}

impl WaypointLayout {
    pub fn new(spiral: &SpiralParams) -> Self {
        let arc = ArcParams::hidden(spiral);
        let waypoints = CATALOGUE
            .iter()
            .enumerate()
            .map(|(index, e)| Waypoint {
                index,
                position: match e.slot {
                    Slot::Spiral(n) => spiral.position(n),
                    Slot::Arc(i) => arc.position(i, HIDDEN_ARC_POINTS),
                },
                label: e.label,
                color: hex_to_rgb(e.hex),
                glyph: e.glyph,
                category: e.category,
            })
            .collect();
        Self {
            waypoints,
            hidden_radius: arc.radius,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Waypoint> {
        self.waypoints
            .iter()
            .filter(move |w| w.category == category)
    }

    /// Number of waypoints that can be marked visited.
    pub fn trackable_count(&self) -> usize {
        self.waypoints.iter().filter(|w| !w.hidden()).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.waypoints.iter().map(|w| w.position)
    }
}

impl Default for WaypointLayout {
    fn default() -> Self {
        Self::new(&SpiralParams::default())
    }
}
