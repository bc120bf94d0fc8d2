#![cfg(target_arch = "wasm32")]
use spectrum_core::EditorConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod input;
mod menu;
mod render;

use app::App;
use constants::{
    CONTEXT_MENU_ID, DELETE_ITEM_ID, FREQ_CANVAS_ID, SAMPLES_ATTR, TIME_CANVAS_ID, WINDOW_ATTR,
};

fn wire_resize(app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        app.borrow_mut().relayout();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Config from the time canvas's data attributes, falling back to defaults.
fn read_config(time_canvas: &web::HtmlCanvasElement) -> EditorConfig {
    let samples = time_canvas.get_attribute(SAMPLES_ATTR);
    let window = time_canvas.get_attribute(WINDOW_ATTR);
    match EditorConfig::with_overrides(samples.as_deref(), window.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            EditorConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spectrum-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let freq_canvas: web::HtmlCanvasElement = dom::element_by_id(&document, FREQ_CANVAS_ID)?;
    let time_canvas: web::HtmlCanvasElement = dom::element_by_id(&document, TIME_CANVAS_ID)?;
    let menu_el: web::HtmlElement = dom::element_by_id(&document, CONTEXT_MENU_ID)?;
    let delete_item: web::Element = dom::element_by_id(&document, DELETE_ITEM_ID)?;

    let config = read_config(&time_canvas);
    log::info!(
        "[config] samples={} window={:.2}s",
        config.sample_count,
        config.window_sec
    );

    let app = Rc::new(RefCell::new(App::new(
        config,
        freq_canvas,
        time_canvas,
        menu_el,
    )?));

    events::wire_pointer_handlers(&app);
    events::wire_context_menu(&app, &delete_item);
    events::wire_global_keydown(&app);
    wire_resize(&app);

    {
        let a = app.borrow();
        log::info!(
            "[editor] {} bins, {} active",
            a.editor.bins().count,
            a.editor.spectrum().active_count()
        );
        a.redraw();
    }

    Ok(())
}
