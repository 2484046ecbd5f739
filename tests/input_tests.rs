// Host-side tests for picking rays and click/drag separation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn ray_hits_marker_ahead() {
    // eye at standing height, marker sphere straight down -Z
    let ro = glam::Vec3::new(0.0, 2.0, 0.0);
    let rd = glam::Vec3::new(0.0, 0.0, -1.0);
    let t = ray_sphere(ro, rd, glam::Vec3::new(0.0, 2.0, -15.0), 2.0).unwrap();
    assert!((t - 13.0).abs() < 1e-4);
}

#[test]
fn ray_misses_marker_to_the_side() {
    let ro = glam::Vec3::ZERO;
    let rd = glam::Vec3::new(1.0, 0.0, 0.0);
    assert!(ray_sphere(ro, rd, glam::Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_grazing_marker_edge_still_hits() {
    let ro = glam::Vec3::ZERO;
    let rd = glam::Vec3::new(0.0, 0.0, 1.0);
    let t = ray_sphere(ro, rd, glam::Vec3::new(2.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 5.0).abs() < 1e-3);
}

#[test]
fn ray_starting_inside_marker_hits_at_zero() {
    let center = glam::Vec3::new(0.0, 0.0, 5.0);
    let at_center = ray_sphere(center, glam::Vec3::X, center, 3.0);
    assert_eq!(at_center, Some(0.0));

    let off_center = glam::Vec3::new(1.0, 0.0, 5.0);
    assert_eq!(ray_sphere(off_center, -glam::Vec3::X, center, 3.0), Some(0.0));
}

#[test]
fn ray_leaving_marker_from_inside_misses() {
    let center = glam::Vec3::new(0.0, 0.0, 5.0);
    let ro = glam::Vec3::new(1.0, 0.0, 5.0);
    assert!(ray_sphere(ro, glam::Vec3::X, center, 3.0).is_none());
}

#[test]
fn marker_within_its_pick_radius_stays_pickable() {
    // full-scale pick radius is larger than the full-visibility distance
    let eye = glam::Vec3::new(3.0, 5.0, 3.0);
    let marker = glam::Vec3::new(0.0, 5.0, 0.0);
    let rd = (marker - eye).normalize();
    let spheres = [
        (glam::Vec3::new(40.0, 5.0, -20.0), 2.0),
        (marker, 5.2),
    ];
    assert_eq!(pick_nearest(eye, rd, spheres), Some((1, 0.0)));
}

#[test]
fn pick_nearest_prefers_closest_hit() {
    let ro = glam::Vec3::ZERO;
    let rd = glam::Vec3::new(0.0, 0.0, -1.0);
    let spheres = [
        (glam::Vec3::new(0.0, 0.0, -30.0), 2.0),
        (glam::Vec3::new(0.0, 0.0, -10.0), 2.0),
        (glam::Vec3::new(5.0, 0.0, -5.0), 1.0), // off the ray
    ];
    let (index, t) = pick_nearest(ro, rd, spheres).unwrap();
    assert_eq!(index, 1);
    assert!((t - 8.0).abs() < 1e-4);
}

#[test]
fn pick_nearest_misses_everything() {
    let ro = glam::Vec3::ZERO;
    let rd = glam::Vec3::new(0.0, 1.0, 0.0);
    let spheres = [(glam::Vec3::new(0.0, 0.0, -10.0), 2.0)];
    assert!(pick_nearest(ro, rd, spheres).is_none());
    assert!(pick_nearest(ro, rd, std::iter::empty()).is_none());
}

#[test]
fn pick_nearest_ignores_spheres_behind_the_ray() {
    let ro = glam::Vec3::ZERO;
    let rd = glam::Vec3::new(0.0, 0.0, -1.0);
    let spheres = [
        (glam::Vec3::new(0.0, 0.0, 10.0), 2.0),
        (glam::Vec3::new(0.0, 0.0, -20.0), 2.0),
    ];
    assert_eq!(pick_nearest(ro, rd, spheres).map(|(i, _)| i), Some(1));
}

#[test]
fn small_motion_stays_a_click() {
    let mut drag = DragState::default();
    drag.begin(100.0, 100.0);
    assert_eq!(drag.moved_to(102.0, 101.0, 5.0), None);
    assert_eq!(drag.moved_to(103.0, 103.0, 5.0), None);
    assert!(drag.end());
    assert!(!drag.active);
}

#[test]
fn motion_past_threshold_becomes_a_drag() {
    let mut drag = DragState::default();
    drag.begin(100.0, 100.0);
    assert_eq!(drag.moved_to(110.0, 100.0, 5.0), Some([10.0, 0.0]));
    // deltas are relative to the previous move once dragging
    assert_eq!(drag.moved_to(112.0, 97.0, 5.0), Some([2.0, -3.0]));
    // returning near the origin keeps dragging
    assert_eq!(drag.moved_to(100.0, 100.0, 5.0), Some([-12.0, 3.0]));
    assert!(!drag.end());
}

#[test]
fn moves_without_a_press_are_ignored() {
    let mut drag = DragState::default();
    assert_eq!(drag.moved_to(50.0, 50.0, 5.0), None);
    assert!(!drag.end());
}

#[test]
fn mouse_state_tracks_canvas_bounds() {
    let mut ms = MouseState::default();
    assert!(!ms.can_hover());
    ms.moved_to(10.0, 20.0, 800.0, 600.0);
    assert!(ms.can_hover());
    assert_eq!((ms.x, ms.y), (10.0, 20.0));
    ms.down = true;
    assert!(!ms.can_hover());
    ms.down = false;
    ms.moved_to(-1.0, 20.0, 800.0, 600.0);
    assert!(!ms.can_hover());
    ms.moved_to(10.0, 600.0, 800.0, 600.0);
    assert!(!ms.can_hover());
}

#[test]
fn hover_cursor_flips_only_on_transitions() {
    let mut hover = HoverState::default();
    assert!(hover.set_marker(Some(3)));
    assert!(!hover.set_marker(Some(4)));
    assert_eq!(hover.current(), Some(4));
    assert!(hover.set_marker(None));
    assert_eq!(hover.current(), None);
}

#[test]
fn leaving_a_label_keeps_the_marker_hover() {
    let mut hover = HoverState::default();
    assert!(hover.set_label(Some(2)));
    // the canvas pick under the label finds a marker
    assert!(!hover.set_marker(Some(5)));
    assert_eq!(hover.current(), Some(2));
    // pointerout from the label: still over a marker, cursor stays
    assert!(!hover.set_label(None));
    assert_eq!(hover.current(), Some(5));
}

#[test]
fn label_hover_survives_an_empty_canvas_pick() {
    let mut hover = HoverState::default();
    hover.set_label(Some(7));
    assert!(!hover.set_marker(None));
    assert_eq!(hover.current(), Some(7));
    assert!(hover.set_label(None));
}
