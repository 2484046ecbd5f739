use crate::core::VisitedSet;
use glam::Vec3;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

/// State the host page can read or steer through the exported functions.
#[derive(Default)]
pub struct HostState {
    pub click_callback: Option<js_sys::Function>,
    pub markers_visible: bool,
    pub observer_override: Option<Vec3>,
    pub visited: VisitedSet,
}

thread_local! {
    static HOST: RefCell<HostState> = RefCell::new(HostState {
        markers_visible: true,
        ..Default::default()
    });
}

pub fn with_host<R>(f: impl FnOnce(&mut HostState) -> R) -> R {
    HOST.with(|h| f(&mut h.borrow_mut()))
}

/// Invoke the registered click callback with a waypoint's lowercase label.
pub fn notify_click(slug: &str) {
    let callback = with_host(|h| h.click_callback.clone());
    if let Some(cb) = callback {
        if let Err(e) = cb.call1(&JsValue::NULL, &JsValue::from_str(slug)) {
            log::error!("[click] callback error: {:?}", e);
        }
    }
}

/// Register a callback receiving the lowercase label of clicked waypoints.
#[wasm_bindgen]
pub fn on_waypoint_click(callback: js_sys::Function) {
    with_host(|h| h.click_callback = Some(callback));
}

#[wasm_bindgen]
pub fn set_waypoints_visible(visible: bool) {
    with_host(|h| h.markers_visible = visible);
    log::info!("[waypoints] visible={}", visible);
}

/// Drive the observer from the host; overrides keyboard walking.
#[wasm_bindgen]
pub fn set_observer_position(x: f32, y: f32, z: f32) {
    with_host(|h| h.observer_override = Some(Vec3::new(x, y, z)));
}

#[wasm_bindgen]
pub fn clear_observer_position() {
    with_host(|h| h.observer_override = None);
}

/// Sorted lowercase labels of visited waypoints.
#[wasm_bindgen]
pub fn visited_waypoints() -> js_sys::Array {
    with_host(|h| {
        h.visited
            .sorted()
            .into_iter()
            .map(|s| JsValue::from_str(&s))
            .collect()
    })
}

/// Case-insensitive check against the visited set.
#[wasm_bindgen]
pub fn is_waypoint_visited(label: &str) -> bool {
    with_host(|h| h.visited.contains(label))
}
