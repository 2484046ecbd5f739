use crate::audio::{self, CueBus};
use crate::bridge;
use crate::camera::Camera;
use crate::core::{CueVoicing, ProximityField, WaypointLayout};
use crate::dom;
use crate::events;
use crate::input::{HoverState, MouseState};
use crate::labels::LabelLayer;
use crate::observer::{MoveKeys, Observer};
use crate::placement::{label_placement, LabelPlacement};
use crate::render::{self, MarkerInstance};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub layout: Rc<WaypointLayout>,
    pub field: Rc<RefCell<ProximityField>>,
    pub observer: Rc<RefCell<Observer>>,
    pub keys: Rc<RefCell<MoveKeys>>,
    pub mouse_state: Rc<RefCell<MouseState>>,
    pub hover: Rc<RefCell<HoverState>>,
    pub paused: Rc<RefCell<bool>>,

    pub canvas: web::HtmlCanvasElement,
    pub labels: Option<LabelLayer>,

    pub audio_ctx: web::AudioContext,
    pub listener: web::AudioListener,
    pub cue_bus: Option<CueBus>,
    pub voicing: CueVoicing,

    pub gpu: Option<render::GpuState<'a>>,
    pub instances: Vec<MarkerInstance>,

    pub last_instant: Instant,
    pub group_shown: Option<bool>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        let (markers_visible, override_pos) =
            bridge::with_host(|h| (h.markers_visible, h.observer_override));
        let paused = *self.paused.borrow();

        let observer_pos = {
            let mut obs = self.observer.borrow_mut();
            match override_pos {
                Some(p) => obs.teleport(p),
                None if !paused => obs.step(&self.keys.borrow(), dt_sec),
                None => {}
            }
            obs.position
        };

        let cues = self
            .field
            .borrow_mut()
            .update_cues(self.layout.positions(), observer_pos, paused);
        for i in cues {
            self.fire_cue(i);
        }

        let w = self.canvas.width().max(1) as f32;
        let h = self.canvas.height().max(1) as f32;
        let camera = self.observer.borrow().camera(w / h);
        audio::update_listener_to_camera(&self.listener, &camera);

        if self.group_shown != Some(markers_visible) {
            if let Some(labels) = &self.labels {
                labels.set_visible(markers_visible);
            }
            self.group_shown = Some(markers_visible);
            events::refresh_hint(self.layout.trackable_count());
        }
        if markers_visible {
            self.update_labels(&camera, w, h);
        }
        // The view moves under a still pointer while walking
        self.refresh_hover(&camera, w, h);

        if let Some(g) = &mut self.gpu {
            self.instances.clear();
            if markers_visible {
                let field = self.field.borrow();
                let hovered = self.hover.borrow().current();
                self.instances.extend(self.layout.waypoints.iter().map(|wp| {
                    MarkerInstance::new(wp, field.visibility(wp.index), hovered == Some(wp.index))
                }));
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(dt_sec, &camera, &mut self.instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn fire_cue(&mut self, index: usize) {
        let Some(wp) = self.layout.get(index) else {
            return;
        };
        let note = self.voicing.note_for(wp);
        log::info!(
            "[cue] entered '{}' freq={:.1}Hz vel={:.2}",
            wp.label,
            note.frequency_hz,
            note.velocity
        );
        if let Some(bus) = &self.cue_bus {
            audio::play_cue(&self.audio_ctx, bus, &note);
        }
    }

    fn refresh_hover(&self, camera: &Camera, w: f32, h: f32) {
        let ms = *self.mouse_state.borrow();
        if !ms.can_hover() {
            return;
        }
        let field = self.field.borrow();
        let hit = events::pick_marker(&self.layout, &field, camera, w, h, Vec2::new(ms.x, ms.y));
        events::update_hover(&self.hover, |s| s.set_marker(hit));
    }

    fn update_labels(&self, camera: &Camera, w: f32, h: f32) {
        let Some(labels) = &self.labels else {
            return;
        };
        let css_scale = dom::canvas_css_scale(&self.canvas);
        let rect = self.canvas.get_bounding_client_rect();
        let field = self.field.borrow();
        for wp in &self.layout.waypoints {
            let opacity = field.visibility(wp.index).opacity;
            let placement = label_placement(camera, wp.position, opacity, w, h, css_scale).map(
                |p| LabelPlacement {
                    x: p.x + rect.left() as f32,
                    y: p.y + rect.top() as f32,
                    ..p
                },
            );
            labels.place(wp.index, placement);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    marker_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, marker_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
