use crate::bridge;
use crate::camera::Camera;
use crate::constants::{CLICK_DRAG_THRESHOLD_PX, PICK_RADIUS_PER_SCALE};
use crate::core::{ProximityField, WaypointLayout};
use crate::dom;
use crate::input::{self, DragState, HoverState, MouseState};
use crate::observer::Observer;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub layout: Rc<WaypointLayout>,
    pub field: Rc<RefCell<ProximityField>>,
    pub observer: Rc<RefCell<Observer>>,
    pub mouse_state: Rc<RefCell<MouseState>>,
    pub drag_state: Rc<RefCell<DragState>>,
    pub hover: Rc<RefCell<HoverState>>,
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Nearest marker under canvas pixel `pos`, sized by its current scale.
/// Nothing is pickable while the group is hidden.
pub fn pick_marker(
    layout: &WaypointLayout,
    field: &ProximityField,
    camera: &Camera,
    width: f32,
    height: f32,
    pos: Vec2,
) -> Option<usize> {
    if !bridge::with_host(|h| h.markers_visible) {
        return None;
    }
    let (ro, rd) = camera.screen_to_world_ray(width, height, pos.x, pos.y);
    let spheres = layout
        .waypoints
        .iter()
        .map(|wp| (wp.position, PICK_RADIUS_PER_SCALE * field.visibility(wp.index).scale));
    input::pick_nearest(ro, rd, spheres).map(|(i, _t)| i)
}

/// Apply a hover change and flip the page cursor when needed.
pub fn update_hover(hover: &RefCell<HoverState>, change: impl FnOnce(&mut HoverState) -> bool) {
    let flipped = change(&mut hover.borrow_mut());
    if flipped {
        dom::set_pointer_cursor(hover.borrow().current().is_some());
    }
}

impl PointerWiring {
    fn pick(&self, pos: Vec2) -> Option<usize> {
        let w = self.canvas.width().max(1) as f32;
        let h = self.canvas.height().max(1) as f32;
        let camera = self.observer.borrow().camera(w / h);
        pick_marker(&self.layout, &self.field.borrow(), &camera, w, h, pos)
    }
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        w.drag_state.borrow_mut().begin(pos.x, pos.y);
        {
            let mut ms = w.mouse_state.borrow_mut();
            ms.moved_to(pos.x, pos.y, w.canvas.width() as f32, w.canvas.height() as f32);
            ms.down = true;
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.canvas.is_connected() {
            return;
        }
        let pos = pointer_canvas_px(&ev, &w.canvas);
        w.mouse_state.borrow_mut().moved_to(
            pos.x,
            pos.y,
            w.canvas.width() as f32,
            w.canvas.height() as f32,
        );

        let threshold = CLICK_DRAG_THRESHOLD_PX * dom::canvas_css_scale(&w.canvas);
        let look = w.drag_state.borrow_mut().moved_to(pos.x, pos.y, threshold);
        if let Some([dx, dy]) = look {
            let css = dom::canvas_css_scale(&w.canvas).max(1e-3);
            w.observer.borrow_mut().look(dx / css, dy / css);
            return;
        }
        if !w.drag_state.borrow().active {
            let hit = w.pick(pos);
            update_hover(&w.hover, |s| s.set_marker(hit));
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_click = w.drag_state.borrow_mut().end();
        let was_down = std::mem::replace(&mut w.mouse_state.borrow_mut().down, false);
        if was_click && was_down {
            let pos = pointer_canvas_px(&ev, &w.canvas);
            if let Some(i) = w.pick(pos) {
                if let Some(wp) = w.layout.get(i) {
                    super::activate_waypoint(wp, w.layout.trackable_count());
                }
            }
        }
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
