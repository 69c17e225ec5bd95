use crate::core::{
    check_origin, decode_body, PlaybackError, PlayerMessage, UpdateBehavior, PLAYER_ORIGIN,
    POLL_INTERVAL_MS, STATE_QUERY,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Shared slot written by the bridge and read once per frame by the renderer.
pub type BehaviorCell = Rc<Cell<UpdateBehavior>>;

fn read_message(ev: &web::MessageEvent) -> Result<PlayerMessage, PlaybackError> {
    check_origin(&ev.origin(), PLAYER_ORIGIN)?;
    let data = ev.data();
    let body = match data.as_string() {
        Some(s) => s,
        None => js_sys::JSON::stringify(&data)
            .ok()
            .and_then(|s| s.as_string())
            .ok_or(PlaybackError::Unreadable)?,
    };
    decode_body(&body)
}

fn poll_player(iframe: &web::HtmlIFrameElement) {
    match iframe.content_window() {
        Some(target) => {
            _ = target.post_message(&JsValue::from_str(STATE_QUERY), PLAYER_ORIGIN);
        }
        None => log::debug!("[player] iframe has no content window yet"),
    }
}

/// Start polling the player and listen for its state replies.
pub fn wire_player_bridge(window: &web::Window, document: &web::Document, behavior: BehaviorCell) {
    match document
        .get_element_by_id(crate::constants::PLAYER_IFRAME_ID)
        .and_then(|el| el.dyn_into::<web::HtmlIFrameElement>().ok())
    {
        Some(iframe) => {
            let closure = Closure::wrap(Box::new(move || {
                poll_player(&iframe);
            }) as Box<dyn FnMut()>);
            _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                POLL_INTERVAL_MS,
            );
            closure.forget();
        }
        None => log::warn!("[player] missing player iframe; polling disabled"),
    }

    let closure = Closure::wrap(Box::new(move |ev: web::MessageEvent| {
        let decoded = read_message(&ev);
        let prev = behavior.get();
        let next = prev.after(&decoded);
        match &decoded {
            Ok(msg) => {
                log::debug!("[player] {}", msg.kind.as_deref().unwrap_or("untyped message"));
                if next != prev {
                    log::info!("[player] behavior {:?} -> {:?}", prev, next);
                }
                behavior.set(next);
            }
            Err(e @ PlaybackError::UntrustedOrigin(_)) => log::debug!("[player] ignored: {}", e),
            Err(e) => log::warn!("[player] {}", e),
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref());
    closure.forget();
}
