use crate::camera::Camera;
use crate::constants::*;
use crate::core::{CueNote, Waveform};
use web_sys as web;

/// Shared output path for waypoint cues: master gain plus a reverb send.
pub struct CueBus {
    pub master_gain: web::GainNode,
    pub reverb_in: web::GainNode,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

// Short, bright stereo impulse response so chimes ring out around the scene
fn fill_impulse_response(audio_ctx: &web::AudioContext, reverb: &web::ConvolverNode) {
    let sr = audio_ctx.sample_rate();
    let len = (sr * CUE_REVERB_SECONDS) as u32;
    let Ok(ir) = audio_ctx.create_buffer(2, len, sr) else {
        log::error!("impulse response buffer allocation failed");
        return;
    };
    let mut seeds: [u32; 2] = [0x2545_F491, 0x9E37_79B9];
    let dt = 1.0_f32 / sr;
    for (ch, seed) in seeds.iter_mut().enumerate() {
        let mut buf: Vec<f32> = Vec::with_capacity(len as usize);
        for i in 0..len {
            // xorshift32 keeps the tail deterministic
            let mut x = *seed;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            *seed = x;
            let noise = (x as f32 / u32::MAX as f32) * 2.0 - 1.0;
            let t = i as f32 * dt;
            buf.push(noise * (-t / (CUE_REVERB_SECONDS * 0.3)).exp());
        }
        _ = ir.copy_to_channel(&mut buf, ch as i32);
    }
    reverb.set_buffer(Some(&ir));
}

pub fn build_cue_bus(audio_ctx: &web::AudioContext) -> Result<CueBus, ()> {
    let master_gain = create_gain(audio_ctx, CUE_MASTER_GAIN, "Master")?;
    _ = master_gain.connect_with_audio_node(&audio_ctx.destination());

    let reverb_in = create_gain(audio_ctx, 1.0, "Reverb in")?;
    let reverb = web::ConvolverNode::new(audio_ctx).map_err(|e| {
        log::error!("ConvolverNode error: {:?}", e);
    })?;
    reverb.set_normalize(true);
    fill_impulse_response(audio_ctx, &reverb);
    let reverb_wet = create_gain(audio_ctx, CUE_REVERB_WET, "Reverb wet")?;
    _ = reverb_in.connect_with_audio_node(&reverb);
    _ = reverb.connect_with_audio_node(&reverb_wet);
    _ = reverb_wet.connect_with_audio_node(&master_gain);

    Ok(CueBus {
        master_gain,
        reverb_in,
    })
}

fn create_cue_panner(audio_ctx: &web::AudioContext, note: &CueNote) -> Result<web::PannerNode, ()> {
    let panner = web::PannerNode::new(audio_ctx).map_err(|e| {
        log::error!("PannerNode error: {:?}", e);
    })?;
    panner.set_panning_model(web::PanningModelType::Hrtf);
    panner.set_distance_model(web::DistanceModelType::Inverse);
    panner.set_ref_distance(CUE_PANNER_REF_DISTANCE as f64);
    panner.set_max_distance(CUE_PANNER_MAX_DISTANCE as f64);
    panner.position_x().set_value(note.position.x);
    panner.position_y().set_value(note.position.y);
    panner.position_z().set_value(note.position.z);
    Ok(panner)
}

/// Fire a one-shot chime at the waypoint's position. The nodes are released
/// by the audio graph once the oscillator stops.
pub fn play_cue(audio_ctx: &web::AudioContext, bus: &CueBus, note: &CueNote) {
    let Ok(src) = web::OscillatorNode::new(audio_ctx) else {
        log::error!("[cue] OscillatorNode creation failed");
        return;
    };
    match note.waveform {
        Waveform::Sine => src.set_type(web::OscillatorType::Sine),
        Waveform::Triangle => src.set_type(web::OscillatorType::Triangle),
    }
    src.frequency().set_value(note.frequency_hz);
    let Ok(env) = create_gain(audio_ctx, 0.0, "Cue envelope") else {
        return;
    };
    let Ok(panner) = create_cue_panner(audio_ctx, note) else {
        return;
    };
    let Ok(send) = create_gain(audio_ctx, CUE_REVERB_SEND, "Cue reverb send") else {
        return;
    };

    let t0 = audio_ctx.current_time() + 0.005;
    let dur = note.duration_sec as f64;
    _ = env.gain().set_value_at_time(0.0, t0);
    _ = env.gain().linear_ramp_to_value_at_time(note.velocity, t0 + 0.01);
    _ = env.gain().exponential_ramp_to_value_at_time(0.001, t0 + dur);
    _ = src.connect_with_audio_node(&env);
    _ = env.connect_with_audio_node(&panner);
    _ = panner.connect_with_audio_node(&bus.master_gain);
    _ = panner.connect_with_audio_node(&send);
    _ = send.connect_with_audio_node(&bus.reverb_in);
    _ = src.start_with_when(t0);
    _ = src.stop_with_when(t0 + dur + 0.05);
}

/// Keep the WebAudio listener on the camera so cues pan with the view.
pub fn update_listener_to_camera(listener: &web::AudioListener, camera: &Camera) {
    let fwd = camera.forward();
    let up = camera.billboard_up();
    listener.set_position(camera.eye.x as f64, camera.eye.y as f64, camera.eye.z as f64);
    listener.set_orientation(
        fwd.x as f64,
        fwd.y as f64,
        fwd.z as f64,
        up.x as f64,
        up.y as f64,
        up.z as f64,
    );
}
