#![cfg(target_arch = "wasm32")]
use crate::core::{CueVoicing, ProximityField, ProximityParams, WaypointLayout};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod bridge;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod observer;
mod overlay;
mod placement;
mod render;

pub use bridge::{
    clear_observer_position, is_waypoint_visited, on_waypoint_click, set_observer_position,
    set_waypoints_visible, visited_waypoints,
};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

struct AudioParts {
    audio_ctx: web::AudioContext,
    listener: web::AudioListener,
    cue_bus: Option<audio::CueBus>,
}

fn build_audio() -> anyhow::Result<AudioParts> {
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let listener = audio_ctx.listener();
    // A broken cue bus silences cues but keeps the scene running
    let cue_bus = audio::build_cue_bus(&audio_ctx).ok();
    if cue_bus.is_none() {
        log::error!("[waypoints] cue bus unavailable; audio cues disabled");
    }
    Ok(AudioParts {
        audio_ctx,
        listener,
        cue_bus,
    })
}

// Audio may only start from a user gesture: the start overlay's buttons unpause
fn wire_overlay_buttons(audio_ctx: &web::AudioContext, paused: &Rc<RefCell<bool>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    for id in ["overlay-ok", "overlay-close"] {
        let paused = paused.clone();
        let audio_ctx = audio_ctx.clone();
        dom::add_click_listener(&document, id, move || {
            *paused.borrow_mut() = false;
            _ = audio_ctx.resume();
            if let Some(d) = dom::window_document() {
                overlay::set_hidden(&d, overlay::START_OVERLAY_ID, true);
            }
            log::info!("[waypoints] started");
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("waypoints-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let layout = Rc::new(WaypointLayout::default());
    log::info!(
        "[waypoints] layout: {} waypoints, hidden radius {:.2}",
        layout.len(),
        layout.hidden_radius
    );
    for wp in &layout.waypoints {
        log::debug!(
            "[waypoints] {:>2} {:<28} ({:.2},{:.2},{:.2}) {:?}",
            wp.index,
            wp.label,
            wp.position.x,
            wp.position.y,
            wp.position.z,
            wp.category
        );
    }
    let trackable = layout.trackable_count();

    let AudioParts {
        audio_ctx,
        listener,
        cue_bus,
    } = build_audio()?;
    let paused = Rc::new(RefCell::new(true));
    wire_overlay_buttons(&audio_ctx, &paused);

    let field = Rc::new(RefCell::new(ProximityField::new(
        layout.len(),
        ProximityParams::default(),
    )));
    let observer = Rc::new(RefCell::new(observer::Observer::default()));
    let keys = Rc::new(RefCell::new(observer::MoveKeys::default()));
    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    let hover = Rc::new(RefCell::new(input::HoverState::default()));

    events::wire_keyboard(keys.clone(), canvas.clone());
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        layout: layout.clone(),
        field: field.clone(),
        observer: observer.clone(),
        mouse_state: mouse_state.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
        hover: hover.clone(),
    });

    let layout_for_labels = layout.clone();
    let on_label_click: Rc<dyn Fn(usize)> = Rc::new(move |i| {
        if let Some(wp) = layout_for_labels.get(i) {
            events::activate_waypoint(wp, layout_for_labels.trackable_count());
        }
    });
    let hover_for_labels = hover.clone();
    let on_label_hover: Rc<dyn Fn(Option<usize>)> = Rc::new(move |hit| {
        events::update_hover(&hover_for_labels, |s| s.set_label(hit));
    });
    let labels = match labels::LabelLayer::mount(
        &document,
        &layout.waypoints,
        on_label_click,
        on_label_hover,
    ) {
        Ok(l) => Some(l),
        Err(e) => {
            log::error!("label layer error: {:?}", e);
            None
        }
    };
    events::refresh_hint(trackable);

    let gpu = frame::init_gpu(&canvas, layout.len()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        layout: layout.clone(),
        field,
        observer,
        keys,
        mouse_state,
        hover,
        paused,
        canvas,
        labels,
        audio_ctx,
        listener,
        cue_bus,
        voicing: CueVoicing::new(constants::CUE_SEED),
        gpu,
        instances: Vec::with_capacity(layout.len()),
        last_instant: Instant::now(),
        group_shown: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
