// Host-side tests for proximity fade/scale and edge-triggered activation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod proximity {
        include!("../src/core/proximity.rs");
    }
}

use crate::core::constants::*;
use crate::core::layout::*;
use crate::core::proximity::*;
use glam::Vec3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn inside_full_radius_is_opaque_and_large() {
    let params = ProximityParams::default();
    for d in [0.0, 1.0, 4.99] {
        let v = params.visibility_at(d);
        assert_eq!(v.opacity, 1.0);
        assert_eq!(v.scale, MAX_MARKER_SCALE);
    }
}

#[test]
fn outside_activation_radius_is_transparent_and_small() {
    let params = ProximityParams::default();
    for d in [10.01, 20.0, 1000.0] {
        let v = params.visibility_at(d);
        assert_eq!(v.opacity, 0.0);
        assert_eq!(v.scale, MIN_MARKER_SCALE);
        assert!(!v.is_visible());
    }
}

#[test]
fn fade_band_interpolates_linearly() {
    let params = ProximityParams::default();
    let mid = params.visibility_at(7.5);
    assert!(approx(mid.opacity, 0.5));
    assert!(approx(mid.scale, 0.9));

    let edge = params.visibility_at(ACTIVATION_RADIUS);
    assert!(approx(edge.opacity, 0.0));
    assert!(approx(edge.scale, MIN_MARKER_SCALE));

    let inner = params.visibility_at(FULL_VISIBILITY_RADIUS);
    assert!(approx(inner.opacity, 1.0));
    assert!(approx(inner.scale, MAX_MARKER_SCALE));
}

#[test]
fn opacity_and_scale_fall_monotonically_with_distance() {
    let params = ProximityParams::default();
    let mut prev = params.visibility_at(0.0);
    let mut d = 0.0_f32;
    while d < 15.0 {
        d += 0.05;
        let v = params.visibility_at(d);
        assert!(v.opacity <= prev.opacity, "opacity rose at d={d}");
        assert!(v.scale <= prev.scale, "scale rose at d={d}");
        assert!((0.0..=1.0).contains(&v.opacity));
        prev = v;
    }
}

#[test]
fn visibility_uses_euclidean_distance() {
    let params = ProximityParams::default();
    let marker = Vec3::new(3.0, 4.0, 0.0);
    let v = params.visibility(marker, Vec3::ZERO);
    assert_eq!(v.opacity, 1.0);
    let far = params.visibility(Vec3::new(6.0, 8.0, 0.0), Vec3::ZERO);
    assert!(approx(far.opacity, 0.0));
}

#[test]
fn glow_tracks_scale() {
    let params = ProximityParams::default();
    let near = params.near();
    assert!(approx(near.glow_intensity(), MAX_MARKER_SCALE * GLOW_INTENSITY_PER_SCALE));
    assert!(approx(near.glow_distance(), MAX_MARKER_SCALE * GLOW_DISTANCE_PER_SCALE));
    let far = params.far();
    assert!(far.glow_intensity() < near.glow_intensity());
}

#[test]
fn coinciding_radii_collapse_to_a_step() {
    let params = ProximityParams {
        activation_radius: 5.0,
        full_visibility_radius: 5.0,
        ..Default::default()
    };
    assert_eq!(params.visibility_at(5.0).opacity, 1.0);
    assert_eq!(params.visibility_at(5.01).opacity, 0.0);
}

#[test]
fn cue_fires_once_per_entry() {
    let params = ProximityParams::default();
    let marker = Vec3::ZERO;
    let mut tracker = ProximityTracker::new(&params);
    let path = [20.0, 15.0, 9.0, 8.0, 3.0, 0.5, 7.0, 12.0, 30.0, 9.5, 9.0, 11.0, 2.0];
    let fired: Vec<bool> = path
        .iter()
        .map(|&x| tracker.update(&params, marker, Vec3::new(x, 0.0, 0.0)))
        .collect();
    let expected = [
        false, false, true, false, false, false, false, false, false, true, false, false, true,
    ];
    assert_eq!(fired, expected);
}

#[test]
fn staying_inside_never_refires() {
    let params = ProximityParams::default();
    let mut tracker = ProximityTracker::new(&params);
    assert!(tracker.update(&params, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)));
    for _ in 0..600 {
        assert!(!tracker.update(&params, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)));
    }
    assert!(tracker.is_inside());
}

#[test]
fn activation_boundary_is_inclusive() {
    let params = ProximityParams::default();
    let mut tracker = ProximityTracker::new(&params);
    assert!(tracker.update(
        &params,
        Vec3::ZERO,
        Vec3::new(ACTIVATION_RADIUS, 0.0, 0.0)
    ));
    // fully transparent on the boundary even though it counts as inside
    assert_eq!(tracker.visibility().opacity, 0.0);
}

#[test]
fn new_tracker_starts_far() {
    let params = ProximityParams::default();
    let tracker = ProximityTracker::new(&params);
    assert_eq!(tracker.visibility(), params.far());
    assert!(!tracker.is_inside());
}

#[test]
fn field_reports_entered_indices_once() {
    let layout = WaypointLayout::default();
    let mut field = ProximityField::new(layout.len(), ProximityParams::default());
    assert_eq!(field.len(), layout.len());

    let spawn = Vec3::new(0.0, 2.0, 0.0);
    assert!(field.update(layout.positions(), spawn).is_empty());

    let at_first = layout.waypoints[0].position;
    let entered = field.update(layout.positions(), at_first);
    assert_eq!(entered.as_slice(), &[0]);
    assert_eq!(field.visibility(0).opacity, 1.0);
    assert_eq!(field.visibility(1).opacity, 0.0);

    assert!(field.update(layout.positions(), at_first).is_empty());

    field.update(layout.positions(), spawn);
    let again = field.update(layout.positions(), at_first);
    assert_eq!(again.as_slice(), &[0]);
}

#[test]
fn field_out_of_range_index_reads_as_far() {
    let field = ProximityField::new(2, ProximityParams::default());
    assert_eq!(field.visibility(99), field.params.far());
    assert_eq!(field.visibilities().count(), 2);
}

fn walk(field: &mut ProximityField, layout: &WaypointLayout, observer: Vec3, held: bool) -> Vec<usize> {
    field
        .update_cues(layout.positions(), observer, held)
        .into_iter()
        .collect()
}

#[test]
fn cues_sound_on_entry_whatever_the_group_visibility() {
    let layout = WaypointLayout::default();
    let mut field = ProximityField::new(layout.len(), ProximityParams::default());
    let spawn = Vec3::new(0.0, 2.0, 0.0);
    let first = layout.waypoints[0].position;
    let second = layout.waypoints[1].position;

    assert!(walk(&mut field, &layout, spawn, false).is_empty());
    // group hidden by the host: walking into a marker still chimes
    assert_eq!(walk(&mut field, &layout, first, false), vec![0]);
    assert!(walk(&mut field, &layout, first, false).is_empty());
    // group shown again while still in range: no replay
    assert!(walk(&mut field, &layout, first, false).is_empty());
    assert_eq!(walk(&mut field, &layout, second, false), vec![1]);
}

#[test]
fn held_cues_consume_entries_silently() {
    let layout = WaypointLayout::default();
    let mut field = ProximityField::new(layout.len(), ProximityParams::default());
    let first = layout.waypoints[0].position;

    // observer starts in range before the start gesture
    assert!(walk(&mut field, &layout, first, true).is_empty());
    assert_eq!(field.visibility(0).opacity, 1.0);
    // released while still inside: nothing to replay
    assert!(walk(&mut field, &layout, first, false).is_empty());

    walk(&mut field, &layout, Vec3::new(0.0, 2.0, 0.0), false);
    assert_eq!(walk(&mut field, &layout, first, false), vec![0]);
}
