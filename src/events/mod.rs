pub mod keyboard;
pub mod pointer;

pub use keyboard::*;
pub use pointer::*;

use crate::bridge;
use crate::core::Waypoint;
use crate::dom;
use crate::overlay;

/// Click on a marker or its label: record the visit, notify the host and
/// refresh the progress hint.
pub fn activate_waypoint(waypoint: &Waypoint, trackable: usize) {
    let (slug, visited, shown) = bridge::with_host(|h| {
        let slug = h.visited.record_click(waypoint);
        (slug, h.visited.len(), h.markers_visible)
    });
    log::info!(
        "[click] waypoint {} '{}' hidden={} visited={}/{}",
        waypoint.index,
        slug,
        waypoint.hidden(),
        visited,
        trackable
    );
    bridge::notify_click(&slug);
    if let Some(document) = dom::window_document() {
        overlay::update_hint(&document, visited, trackable, shown);
    }
}

/// Re-render the progress hint from the current host state.
pub fn refresh_hint(trackable: usize) {
    let (visited, shown) = bridge::with_host(|h| (h.visited.len(), h.markers_visible));
    if let Some(document) = dom::window_document() {
        overlay::update_hint(&document, visited, trackable, shown);
    }
}
