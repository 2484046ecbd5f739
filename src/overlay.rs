use web_sys as web;

pub const START_OVERLAY_ID: &str = "start-overlay";
pub const HINT_OVERLAY_ID: &str = "hint-overlay";

/// Show or hide a page element by id via the `hidden` class, with an inline
/// style for pages that do not define it.
pub fn set_hidden(document: &web::Document, element_id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        if hidden {
            _ = cl.add_1("hidden");
            _ = el.set_attribute("style", "display:none");
        } else {
            _ = cl.remove_1("hidden");
            _ = el.set_attribute("style", "");
        }
    }
}

pub fn is_hidden(document: &web::Document, element_id: &str) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            el.class_list().contains("hidden")
                || el
                    .get_attribute("style")
                    .map(|s| s.contains("display:none"))
                    .unwrap_or(false)
        }
        None => false,
    }
}

#[inline]
pub fn toggle(document: &web::Document, element_id: &str) {
    let hidden = is_hidden(document, element_id);
    set_hidden(document, element_id, !hidden);
}

/// Update the hint overlay with visited progress and group visibility.
pub fn update_hint(document: &web::Document, visited: usize, total: usize, markers_shown: bool) {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        let progress_text = format!("Visited: {}/{}", visited, total);
        let shown_text = if markers_shown {
            "Waypoints: shown"
        } else {
            "Waypoints: hidden (V)"
        };
        let hint_html = format!(
            "<div style='color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>{} • {} • WASD move • Q/E turn • drag to look</div>",
            progress_text, shown_text
        );
        el.set_inner_html(&hint_html);
        set_hidden(document, HINT_OVERLAY_ID, false);
    }
}
