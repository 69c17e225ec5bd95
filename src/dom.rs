use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn set_style_by_id(document: &web::Document, id: &str, property: &str, value: &str) {
    match html_element_by_id(document, id) {
        Some(el) => set_style(&el, property, value),
        None => log::warn!("[dom] missing #{}", id),
    }
}

/// First `n` elements carrying `class`, in document order.
pub fn elements_by_class(document: &web::Document, class: &str, n: u32) -> Vec<web::HtmlElement> {
    let list = document.get_elements_by_class_name(class);
    (0..n.min(list.length()))
        .filter_map(|i| list.item(i))
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Whether `target` is `container` or one of its descendants.
pub fn contains_target(container: &web::Element, target: Option<&web::EventTarget>) -> bool {
    let node = target.and_then(|t| t.dyn_ref::<web::Node>());
    container.contains(node)
}

#[inline]
pub fn page_offset(window: &web::Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

#[inline]
pub fn inner_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Size the canvas to the window: CSS size in window pixels, backing store
/// scaled by the device pixel ratio. Returns the CSS size.
pub fn size_canvas_to_window(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let Some(window) = web::window() else {
        return (0.0, 0.0);
    };
    let (w, h) = inner_size(&window);
    let dpr = window.device_pixel_ratio();
    canvas.set_width(((w * dpr) as u32).max(1));
    canvas.set_height(((h * dpr) as u32).max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", w));
    _ = style.set_property("height", &format!("{}px", h));
    (w, h)
}

/// Resolves once the window `load` event has fired (immediately if the
/// document already finished loading).
pub fn page_loaded(window: &web::Window) -> JsFuture {
    let window = window.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let complete = window
            .document()
            .map(|d| d.ready_state() == "complete")
            .unwrap_or(false);
        if complete {
            _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
            return;
        }
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise)
}

pub async fn fetch_text(path: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", path, e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {}: not a Response: {:?}", path, e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", path, resp.status());
    }
    let text_promise = resp
        .text()
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", path, e))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", path, e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("fetch {}: body is not text", path))
}
