use crate::camera::Camera;
use crate::constants::*;
use glam::Vec3;

/// Where and how a waypoint label is drawn, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub x: f32,
    pub y: f32,
    pub font_px: f32,
    pub max_width_px: f32,
    pub opacity: f32,
}

/// Project the label anchor above `marker` and size it by perspective.
///
/// `css_scale` is canvas backing pixels per CSS pixel. Returns `None` when the
/// label is fully transparent or its anchor is behind the camera.
pub fn label_placement(
    camera: &Camera,
    marker: Vec3,
    opacity: f32,
    width_px: f32,
    height_px: f32,
    css_scale: f32,
) -> Option<LabelPlacement> {
    if opacity <= 0.0 {
        return None;
    }
    let anchor = marker + Vec3::Y * LABEL_OFFSET_Y;
    let p = camera.project(anchor, width_px, height_px)?;
    let px_per_unit = camera.pixels_per_unit(p.depth, height_px) / css_scale.max(1e-3);
    let font_px = (LABEL_FONT_WORLD * px_per_unit).clamp(LABEL_MIN_FONT_PX, LABEL_MAX_FONT_PX);
    Some(LabelPlacement {
        x: p.x / css_scale.max(1e-3),
        y: p.y / css_scale.max(1e-3),
        font_px,
        max_width_px: font_px * (LABEL_MAX_WIDTH_WORLD / LABEL_FONT_WORLD),
        opacity: opacity.min(1.0),
    })
}
