#![cfg(target_arch = "wasm32")]
use crate::core::{
    GateState, LoadGate, LoadSignal, OrbitControls, SceneGraph, UpdateBehavior, MODEL_SCALE,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod parallax;
mod player;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scene: &Rc<RefCell<SceneGraph>>) {
    let canvas_resize = canvas.clone();
    let scene_resize = scene.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::size_canvas_to_window(&canvas_resize);
        scene_resize.borrow_mut().camera.set_viewport(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn parallax_targets(document: &web::Document, canvas: &web::HtmlCanvasElement) -> parallax::ParallaxTargets {
    let mut layers = dom::elements_by_class(document, constants::TEXT_LAYER_CLASS, 2).into_iter();
    let text_front = layers.next();
    let text_back = layers.next();
    if text_back.is_none() {
        log::warn!("[parallax] expected two .{} layers", constants::TEXT_LAYER_CLASS);
    }
    parallax::ParallaxTargets {
        text_front,
        text_back,
        canvas: canvas.clone().unchecked_into::<web::HtmlElement>(),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Page-load signal must be armed before anything awaits
    let page_loaded = dom::page_loaded(&window);

    // UI pieces that work without the 3D scene
    events::wire_menu(&document);
    parallax::wire_parallax(&window, parallax_targets(&document, &canvas));

    let behavior = Rc::new(Cell::new(UpdateBehavior::Idle));
    player::wire_player_bridge(&window, &document, behavior.clone());

    // Scene, sized to the window and kept in sync on resize
    let (w, h) = dom::size_canvas_to_window(&canvas);
    let scene = Rc::new(RefCell::new(SceneGraph::new(1.0)));
    scene.borrow_mut().camera.set_viewport(w, h);
    wire_canvas_resize(&canvas, &scene);

    let controls = Rc::new(RefCell::new(OrbitControls::default()));
    events::wire_orbit_handlers(events::OrbitWiring {
        canvas: canvas.clone(),
        controls: controls.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    overlay::show_loading(&document);
    let mut gate = LoadGate::new();

    // No renderer means no model fetch; the loading screen stays up
    let Some(mut gpu) = frame::init_gpu(&canvas).await else {
        log::error!("[gpu] no usable WebGPU adapter; model not loaded, loading screen stays up");
        return Ok(());
    };

    // A failed load leaves the loading screen up and the loop unstarted
    let mesh = match assets::load_model().await {
        Ok(m) => m,
        Err(e) => {
            log::error!("[assets] {:#}", e);
            return Ok(());
        }
    };
    {
        let mut sc = scene.borrow_mut();
        let model = sc.attach_model(mesh, MODEL_SCALE)?;
        gpu.upload_model(model);
    }
    gate.mark(LoadSignal::Asset);

    if let Err(e) = page_loaded.await {
        log::warn!("page load wait failed: {:?}", e);
    }
    if gate.mark(LoadSignal::PageLoad) != GateState::Released {
        return Ok(());
    }

    overlay::hide_loading(&document);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        controls,
        behavior,
        canvas,
        gpu,
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
