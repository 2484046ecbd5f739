use crate::core::Waypoint;
use crate::placement::LabelPlacement;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const LABEL_CONTAINER_ID: &str = "waypoint-labels";

const LABEL_BASE_STYLE: &str = "position:absolute; left:0; top:0; color:#ffffff; font-family:system-ui, sans-serif; font-weight:800; text-align:center; white-space:normal; user-select:none; pointer-events:auto; cursor:pointer; -webkit-text-stroke:2px #000000; paint-order:stroke fill; text-shadow:0 0 3px #000000; display:none;";

/// DOM text labels floating above each marker.
pub struct LabelLayer {
    container: web::HtmlElement,
    labels: Vec<web::HtmlElement>,
}

fn html_element(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create_element({}) error: {:?}", tag, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("not an HtmlElement: {:?}", e))
}

fn ensure_container(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    if let Some(el) = document.get_element_by_id(LABEL_CONTAINER_ID) {
        return el
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", LABEL_CONTAINER_ID, e));
    }
    let container = html_element(document, "div")?;
    container.set_id(LABEL_CONTAINER_ID);
    _ = container.set_attribute(
        "style",
        "position:fixed; inset:0; pointer-events:none; overflow:hidden;",
    );
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    body.append_child(&container)
        .map_err(|e| anyhow::anyhow!("append label container: {:?}", e))?;
    Ok(container)
}

fn listen(el: &web::HtmlElement, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

impl LabelLayer {
    /// Create one label per waypoint. `on_click` receives the waypoint index;
    /// `on_hover` receives it on pointerover and `None` on pointerout.
    pub fn mount(
        document: &web::Document,
        waypoints: &[Waypoint],
        on_click: Rc<dyn Fn(usize)>,
        on_hover: Rc<dyn Fn(Option<usize>)>,
    ) -> anyhow::Result<Self> {
        let container = ensure_container(document)?;
        let mut labels = Vec::with_capacity(waypoints.len());
        for wp in waypoints {
            let el = html_element(document, "div")?;
            el.set_class_name("waypoint-label");
            el.set_text_content(Some(wp.label));
            _ = el.set_attribute("style", LABEL_BASE_STYLE);
            container
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!("append label: {:?}", e))?;

            let index = wp.index;
            let click = on_click.clone();
            listen(&el, "click", move || click(index));
            let over = on_hover.clone();
            listen(&el, "pointerover", move || over(Some(index)));
            let out = on_hover.clone();
            listen(&el, "pointerout", move || out(None));
            labels.push(el);
        }
        log::info!("[waypoints] mounted {} labels", labels.len());
        Ok(Self { container, labels })
    }

    pub fn place(&self, index: usize, placement: Option<LabelPlacement>) {
        let Some(el) = self.labels.get(index) else {
            return;
        };
        let style = el.style();
        match placement {
            Some(p) => {
                _ = style.set_property("display", "block");
                _ = style.set_property("opacity", &format!("{:.3}", p.opacity));
                _ = style.set_property("font-size", &format!("{:.1}px", p.font_px));
                _ = style.set_property("max-width", &format!("{:.0}px", p.max_width_px));
                _ = style.set_property(
                    "transform",
                    &format!("translate({:.1}px, {:.1}px) translate(-50%, -50%)", p.x, p.y),
                );
            }
            None => {
                _ = style.set_property("display", "none");
            }
        }
    }

    pub fn set_visible(&self, visible: bool) {
        _ = self
            .container
            .style()
            .set_property("display", if visible { "block" } else { "none" });
    }
}
