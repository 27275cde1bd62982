use crate::constants::REDUCED_MOTION_QUERY;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Platform reduced-motion preference; false when media queries are unavailable.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Viewport (width, height) in CSS pixels.
pub fn viewport_size() -> Option<(f64, f64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Container (top, height) relative to the viewport.
pub fn container_rect(el: &web::Element) -> (f64, f64) {
    let rect = el.get_bounding_client_rect();
    (rect.top(), rect.height())
}

/// All descendants of `root` matching `selector` that are HTML elements.
pub fn query_html_elements(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        if canvas.width() != w_px.max(1) {
            canvas.set_width(w_px.max(1));
        }
        if canvas.height() != h_px.max(1) {
            canvas.set_height(h_px.max(1));
        }
    }
}
