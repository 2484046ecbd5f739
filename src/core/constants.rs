// Layout and proximity tuning shared by the core and the web frontend.

// Spiral layout
pub const PHI: f32 = 1.618_034; // golden ratio, radius growth per two steps
pub const GOLDEN_ANGLE_DEG: f32 = 137.5; // angular advance per spiral index
pub const SPIRAL_BASE_RADIUS: f32 = 15.0; // radius of spiral point 0
pub const SPIRAL_MAX_RADIUS: f32 = 90.0; // radius cap for far spiral points
pub const WAYPOINT_HEIGHT: f32 = 5.0; // every marker floats at this y

// Hidden arc
pub const ARC_HALF_SPAN_DEG: f32 = 40.0; // arc spans -40..+40 degrees
pub const HIDDEN_ANCHOR_INDEX: u32 = 9; // spiral point whose distance sets the arc radius
pub const HIDDEN_ARC_POINTS: u32 = 4;

// Proximity
pub const ACTIVATION_RADIUS: f32 = 10.0; // fade starts, cue fires on entry
pub const FULL_VISIBILITY_RADIUS: f32 = 5.0; // fully opaque inside this
pub const MIN_MARKER_SCALE: f32 = 0.5;
pub const MAX_MARKER_SCALE: f32 = 1.3;

// Glow (point-light stand-in) derived from marker scale
pub const GLOW_INTENSITY_PER_SCALE: f32 = 0.8;
pub const GLOW_DISTANCE_PER_SCALE: f32 = 5.0;

