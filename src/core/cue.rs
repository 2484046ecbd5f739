use crate::core::layout::{Category, Waypoint};
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// One spatialized chime, played when the observer reaches a waypoint.
#[derive(Clone, Debug)]
pub struct CueNote {
    pub waypoint_index: usize,
    pub frequency_hz: f32,
    pub velocity: f32,
    pub duration_sec: f32,
    pub waveform: Waveform,
    pub position: Vec3,
}

pub const CUE_PENTATONIC: &[i32] = &[0, 2, 4, 7, 9];
pub const CUE_ROOT_MIDI: i32 = 72; // C5
pub const CUE_MAX_MIDI: i32 = 108;
pub const CUE_VELOCITY_MIN: f32 = 0.45;
pub const CUE_VELOCITY_SPAN: f32 = 0.35;
pub const CUE_DURATION_SEC: f32 = 1.2;

/// Chooses pitch, timbre and a humanized velocity for each waypoint cue.
pub struct CueVoicing {
    rng: StdRng,
}

impl CueVoicing {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn note_for(&mut self, waypoint: &Waypoint) -> CueNote {
        CueNote {
            waypoint_index: waypoint.index,
            frequency_hz: midi_to_hz(cue_midi(waypoint.index, waypoint.category) as f32),
            velocity: CUE_VELOCITY_MIN + self.rng.gen::<f32>() * CUE_VELOCITY_SPAN,
            duration_sec: CUE_DURATION_SEC,
            waveform: if waypoint.hidden() {
                Waveform::Triangle
            } else {
                Waveform::Sine
            },
            position: waypoint.position,
        }
    }
}

/// Scale degree walks the pentatonic by index; each category sits an octave
/// above the previous one.
pub fn cue_midi(index: usize, category: Category) -> i32 {
    let degree = CUE_PENTATONIC[index % CUE_PENTATONIC.len()];
    let band = match category {
        Category::Inner => 0,
        Category::Outer => 1,
        Category::Hidden => 2,
    };
    (CUE_ROOT_MIDI + degree + band * 12).min(CUE_MAX_MIDI)
}

pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}
