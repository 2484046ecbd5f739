/// Camera, interaction, label and audio tuning for the web frontend.
///
/// Layout and proximity constants live in `core::constants`; these cover how
/// the scene is viewed, walked and heard.
// Camera
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 600.0;

// Observer walking
pub const OBSERVER_EYE_HEIGHT: f32 = 2.0;
pub const OBSERVER_WALK_SPEED: f32 = 14.0; // world units per second
pub const OBSERVER_TURN_SPEED: f32 = 1.6; // radians per second
pub const OBSERVER_WORLD_RADIUS: f32 = 140.0; // walking is clamped to this disc
pub const LOOK_SENSITIVITY: f32 = 0.005; // radians per dragged pixel
pub const PITCH_LIMIT: f32 = 1.2; // radians, up and down

// Markers
pub const MARKER_BASE_SIZE: f32 = 4.0; // glyph radius in world units at scale 1
pub const PICK_RADIUS_PER_SCALE: f32 = 4.0; // ray-sphere radius per unit of scale

// Labels
pub const LABEL_OFFSET_Y: f32 = 12.0; // world-space height above the marker
pub const LABEL_FONT_WORLD: f32 = 3.0;
pub const LABEL_MAX_WIDTH_WORLD: f32 = 20.0;
pub const LABEL_MIN_FONT_PX: f32 = 6.0;
pub const LABEL_MAX_FONT_PX: f32 = 96.0;

// Pointer
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 5.0; // movement beyond this turns a click into a drag

// Audio cue routing
pub const CUE_MASTER_GAIN: f32 = 0.4;
pub const CUE_REVERB_SEND: f32 = 0.35;
pub const CUE_REVERB_WET: f32 = 0.5;
pub const CUE_REVERB_SECONDS: f32 = 2.5;
pub const CUE_PANNER_REF_DISTANCE: f32 = 5.0;
pub const CUE_PANNER_MAX_DISTANCE: f32 = 250.0;

// Scene
pub const CLEAR_COLOR: [f32; 3] = [0.02, 0.03, 0.06];
pub const GROUND_EXTENT: f32 = 220.0;
pub const GRID_SPACING: f32 = 5.0;

// Cue RNG seed
pub const CUE_SEED: u64 = 42;
