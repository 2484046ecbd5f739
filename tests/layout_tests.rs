// Host-side tests for the waypoint layout, visited tracking and cue voicing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod visited {
        include!("../src/core/visited.rs");
    }
    pub mod cue {
        include!("../src/core/cue.rs");
    }
}

use crate::core::constants::*;
use crate::core::cue::*;
use crate::core::layout::*;
use crate::core::visited::*;

const EPS: f32 = 1e-3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn spiral_starts_at_base_radius_on_positive_x() {
    let p = SpiralParams::default().position(0);
    assert!(approx(p.x, SPIRAL_BASE_RADIUS));
    assert!(approx(p.y, WAYPOINT_HEIGHT));
    assert!(p.z.abs() < EPS);
}

#[test]
fn spiral_radius_never_exceeds_cap() {
    let spiral = SpiralParams::default();
    for n in 0..400 {
        let r = spiral.radius(n);
        assert!(r <= SPIRAL_MAX_RADIUS, "radius {r} above cap at n={n}");
        let p = spiral.position(n);
        let horizontal = (p.x * p.x + p.z * p.z).sqrt();
        assert!(horizontal <= SPIRAL_MAX_RADIUS + EPS);
    }
}

#[test]
fn spiral_grows_geometrically_until_capped() {
    let spiral = SpiralParams::default();
    // two steps multiply the radius by phi
    let r2 = spiral.radius(2);
    assert!(approx(r2, SPIRAL_BASE_RADIUS * PHI));
    assert!(spiral.radius(7) < SPIRAL_MAX_RADIUS);
    assert!(approx(spiral.radius(8), SPIRAL_MAX_RADIUS));
    for n in 0..7 {
        assert!(spiral.radius(n + 1) > spiral.radius(n));
    }
}

#[test]
fn spiral_z_is_always_mirrored_away_from_spawn() {
    let spiral = SpiralParams::default();
    for n in 0..64 {
        assert!(spiral.position(n).z <= 0.0, "positive z at n={n}");
    }
}

#[test]
fn spiral_angle_advances_by_golden_angle() {
    let spiral = SpiralParams::default();
    let step = GOLDEN_ANGLE_DEG.to_radians();
    for n in 0..10 {
        assert!(approx(spiral.angle(n + 1) - spiral.angle(n), step));
    }
}

#[test]
fn hidden_radius_matches_tenth_spiral_point() {
    let spiral = SpiralParams::default();
    let p = spiral.position(9);
    let expected = (p.x * p.x + p.z * p.z).sqrt();
    assert!(approx(hidden_radius(&spiral), expected));
    // point 9 lies beyond the cap, so the arc sits on the cap circle
    assert!(approx(hidden_radius(&spiral), SPIRAL_MAX_RADIUS));
}

#[test]
fn arc_endpoints_sit_at_extreme_angles() {
    let arc = ArcParams::hidden(&SpiralParams::default());
    let half = ARC_HALF_SPAN_DEG.to_radians();
    assert!(approx(arc.angle(0, 4), -half));
    assert!(approx(arc.angle(3, 4), half));

    let first = arc.position(0, 4);
    let last = arc.position(3, 4);
    assert!(approx(first.x, arc.radius * half.cos()));
    assert!(approx(first.z, arc.radius * half.sin()));
    assert!(approx(last.z, -arc.radius * half.sin()));
}

#[test]
fn arc_is_symmetric_about_central_axis() {
    let arc = ArcParams::hidden(&SpiralParams::default());
    for count in [2u32, 3, 4, 5, 8] {
        for i in 0..count {
            let a = arc.position(i, count);
            let b = arc.position(count - 1 - i, count);
            assert!(approx(a.x, b.x), "x mismatch count={count} i={i}");
            assert!(approx(a.z, -b.z), "z not mirrored count={count} i={i}");
            assert!(approx(a.y, WAYPOINT_HEIGHT));
            assert!(approx((a.x * a.x + a.z * a.z).sqrt(), arc.radius));
        }
    }
}

#[test]
fn arc_points_are_evenly_spaced() {
    let arc = ArcParams::hidden(&SpiralParams::default());
    let step = arc.angle(1, 4) - arc.angle(0, 4);
    for i in 1..3 {
        assert!(approx(arc.angle(i + 1, 4) - arc.angle(i, 4), step));
    }
}

#[test]
fn single_point_arc_sits_on_axis() {
    let arc = ArcParams::hidden(&SpiralParams::default());
    let p = arc.position(0, 1);
    assert!(approx(p.x, arc.radius));
    assert!(p.z.abs() < EPS);
}

#[test]
fn layout_has_expected_catalogue() {
    let layout = WaypointLayout::default();
    assert_eq!(layout.len(), 14);
    assert_eq!(layout.in_category(Category::Inner).count(), 5);
    assert_eq!(layout.in_category(Category::Outer).count(), 4);
    assert_eq!(layout.in_category(Category::Hidden).count(), 5);
    assert_eq!(layout.trackable_count(), 9);

    let labels: Vec<&str> = layout.waypoints.iter().map(|w| w.label).collect();
    assert_eq!(labels[0], "OUR APPROACH");
    assert_eq!(labels[4], "CONTACT US");
    assert_eq!(labels[8], "ART");
    assert_eq!(labels[9], "FOUNDATION OF CONSCIOUSNESS");
    assert_eq!(labels[13], "INFINITE POTENTIAL");

    for (i, w) in layout.waypoints.iter().enumerate() {
        assert_eq!(w.index, i);
    }
}

#[test]
fn layout_positions_follow_slots() {
    let spiral = SpiralParams::default();
    let layout = WaypointLayout::new(&spiral);
    for n in 0..=9 {
        assert_eq!(layout.waypoints[n].position, spiral.position(n as u32));
    }
    let arc = ArcParams::hidden(&spiral);
    for i in 0..4 {
        assert_eq!(layout.waypoints[10 + i].position, arc.position(i as u32, 4));
    }
    assert!(approx(layout.hidden_radius, arc.radius));
}

#[test]
fn layout_is_deterministic() {
    let a = WaypointLayout::default();
    let b = WaypointLayout::default();
    assert_eq!(a.waypoints, b.waypoints);
}

#[test]
fn hidden_waypoints_use_platonic_glyphs() {
    let layout = WaypointLayout::default();
    let glyphs: Vec<Glyph> = layout
        .in_category(Category::Hidden)
        .map(|w| w.glyph)
        .collect();
    assert_eq!(
        glyphs,
        vec![
            Glyph::Tetrahedron,
            Glyph::Cube,
            Glyph::Octahedron,
            Glyph::Dodecahedron,
            Glyph::Icosahedron
        ]
    );
    assert_eq!(Glyph::Tetrahedron.sides(), 3);
    assert_eq!(Glyph::Orb.sides(), 0);
}

#[test]
fn colors_decode_from_hex() {
    let layout = WaypointLayout::default();
    let c = layout.waypoints[0].color;
    assert!(approx(c[0], 0x4A as f32 / 255.0));
    assert!(approx(c[1], 0x90 as f32 / 255.0));
    assert!(approx(c[2], 0xE2 as f32 / 255.0));
    assert_eq!(hex_to_rgb(0xFFFFFF), [1.0, 1.0, 1.0]);
}

#[test]
fn click_records_only_visible_categories() {
    let layout = WaypointLayout::default();
    let mut visited = VisitedSet::new();

    let slug = visited.record_click(&layout.waypoints[1]);
    assert_eq!(slug, "services");
    assert!(visited.contains("services"));
    assert!(visited.contains("SERVICES"));

    let hidden = &layout.waypoints[12];
    let slug = visited.record_click(hidden);
    assert_eq!(slug, "harmony of being");
    assert!(!visited.contains("harmony of being"));
    assert_eq!(visited.len(), 1);
}

#[test]
fn visited_set_is_idempotent_and_sorted() {
    let layout = WaypointLayout::default();
    let mut visited = VisitedSet::new();
    for i in [7, 0, 7, 5, 0] {
        visited.record_click(&layout.waypoints[i]);
    }
    assert_eq!(visited.len(), 3);
    assert_eq!(visited.sorted(), vec!["design", "our approach", "science"]);
}

#[test]
fn midi_to_hz_matches_a4_and_octave() {
    let a4 = midi_to_hz(69.0);
    assert!((a4 - 440.0).abs() < 1e-4);
    let a5 = midi_to_hz(81.0);
    assert!((a5 / a4 - 2.0).abs() < 1e-4);
}

#[test]
fn cue_pitch_rises_by_category_band() {
    assert_eq!(cue_midi(0, Category::Inner), CUE_ROOT_MIDI);
    assert_eq!(cue_midi(5, Category::Outer), CUE_ROOT_MIDI + 12);
    assert_eq!(cue_midi(10, Category::Hidden), CUE_ROOT_MIDI + 24);
    for i in 0..64 {
        assert!(cue_midi(i, Category::Hidden) <= CUE_MAX_MIDI);
    }
}

#[test]
fn cue_notes_are_seeded_and_bounded() {
    let layout = WaypointLayout::default();
    let mut a = CueVoicing::new(7);
    let mut b = CueVoicing::new(7);
    for w in &layout.waypoints {
        let na = a.note_for(w);
        let nb = b.note_for(w);
        assert_eq!(na.velocity, nb.velocity);
        assert!(na.velocity >= CUE_VELOCITY_MIN);
        assert!(na.velocity <= CUE_VELOCITY_MIN + CUE_VELOCITY_SPAN);
        assert!(na.frequency_hz > 0.0);
        assert_eq!(na.position, w.position);
        let expected = if w.hidden() {
            Waveform::Triangle
        } else {
            Waveform::Sine
        };
        assert_eq!(na.waveform, expected);
    }
}
