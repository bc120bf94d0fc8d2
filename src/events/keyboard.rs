use crate::app::App;
use spectrum_core::EditorCommand;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &Rc<RefCell<App>>) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(command) = EditorCommand::from_key(&ev.key()) else {
        return;
    };
    let mut a = app.borrow_mut();
    a.editor.apply_command(command);
    a.sync_menu();
    a.redraw();
}

pub fn wire_global_keydown(app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &app);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
