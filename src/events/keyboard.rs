use crate::bridge;
use crate::observer::MoveKeys;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys the browser would otherwise use to scroll the page.
#[inline]
pub fn is_scroll_key(key: &str) -> bool {
    matches!(
        key,
        "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" | " "
    )
}

pub fn handle_keydown(
    ev: &web::KeyboardEvent,
    keys: &Rc<RefCell<MoveKeys>>,
    canvas: &web::HtmlCanvasElement,
) {
    let key = ev.key();
    if keys.borrow_mut().set_key(&key, true) {
        if is_scroll_key(&key) {
            ev.prevent_default();
        }
        return;
    }
    match key.as_str() {
        "h" | "H" => {
            if let Some(doc) = crate::dom::window_document() {
                overlay::toggle(&doc, overlay::START_OVERLAY_ID);
            }
            ev.prevent_default();
        }
        "v" | "V" => {
            let visible = bridge::with_host(|h| {
                h.markers_visible = !h.markers_visible;
                h.markers_visible
            });
            log::info!("[keys] waypoints visible={}", visible);
        }
        "Enter" => {
            if let Some(doc) = crate::dom::window_document() {
                if doc.fullscreen_element().is_some() {
                    doc.exit_fullscreen();
                } else {
                    _ = canvas.request_fullscreen();
                }
            }
            ev.prevent_default();
        }
        "Escape" => {
            if let Some(doc) = crate::dom::window_document() {
                doc.exit_fullscreen();
            }
        }
        _ => {}
    }
}

pub fn wire_keyboard(keys: Rc<RefCell<MoveKeys>>, canvas: web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };

    let keys_down = keys.clone();
    let keydown = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &keys_down, &canvas);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let keys_up = keys.clone();
    let keyup = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        keys_up.borrow_mut().set_key(&ev.key(), false);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    // Releasing keys while the tab is unfocused never reaches keyup
    let blur = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        keys.borrow_mut().clear();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}
