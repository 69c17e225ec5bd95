use crate::core::{ParallaxDriver, ParallaxScales, ViewportSample, PARALLAX_TICK_MS};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements the parallax effect writes to.
#[derive(Clone)]
pub struct ParallaxTargets {
    pub text_front: Option<web::HtmlElement>,
    pub text_back: Option<web::HtmlElement>,
    pub canvas: web::HtmlElement,
}

impl ParallaxTargets {
    fn apply(&self, scales: ParallaxScales) {
        if let Some(el) = &self.text_front {
            dom::set_style(el, "transform", &scales.front_css());
        }
        let back = scales.back_css();
        if let Some(el) = &self.text_back {
            dom::set_style(el, "transform", &back);
        }
        dom::set_style(&self.canvas, "transform", &back);
    }

    fn sample(&self, window: &web::Window) -> ViewportSample {
        let rect = self.canvas.get_bounding_client_rect();
        let (_, viewport_height) = dom::inner_size(window);
        ViewportSample::from_client_rect(
            dom::page_offset(window),
            viewport_height,
            rect.top(),
            rect.bottom(),
        )
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Queue the next tick. `false` means nothing was queued and the driver must
/// be stopped.
fn schedule(window: &web::Window, tick: &TickSlot) -> bool {
    let slot = tick.borrow();
    let Some(cb) = slot.as_ref() else {
        return false;
    };
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        PARALLAX_TICK_MS,
    ) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("[parallax] could not schedule tick: {:?}", e);
            false
        }
    }
}

fn schedule_or_stop(window: &web::Window, tick: &TickSlot, driver: &RefCell<ParallaxDriver>) {
    if !schedule(window, tick) {
        driver.borrow_mut().stop();
    }
}

/// Wire the scroll listener and kick off the first tick.
pub fn wire_parallax(window: &web::Window, targets: ParallaxTargets) {
    let driver = Rc::new(RefCell::new(ParallaxDriver::new()));
    let tick: TickSlot = Rc::new(RefCell::new(None));

    {
        let driver = driver.clone();
        let tick_self = tick.clone();
        let window = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let sample = targets.sample(&window);
            let scales = driver.borrow_mut().tick(sample);
            match scales {
                Some(s) => {
                    targets.apply(s);
                    schedule_or_stop(&window, &tick_self, &driver);
                }
                None => log::debug!("[parallax] canvas out of view; paused"),
            }
        }) as Box<dyn FnMut()>));
    }

    {
        let driver = driver.clone();
        let tick = tick.clone();
        let window_cb = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            let offset = dom::page_offset(&window_cb);
            let needs_tick = driver.borrow_mut().on_scroll(offset);
            if needs_tick {
                schedule_or_stop(&window_cb, &tick, &driver);
            }
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let needs_tick = driver.borrow_mut().start();
    if needs_tick {
        schedule_or_stop(window, &tick, &driver);
    }
}
