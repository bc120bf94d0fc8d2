use crate::app::App;
use crate::input;
use spectrum_core::PointerButton;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Press/move/leave/click on the frequency canvas; release anywhere on the page.
pub fn wire_pointer_handlers(app: &Rc<RefCell<App>>) {
    wire_pointerdown(app);
    wire_pointermove(app);
    wire_pointerleave(app);
    wire_pointerup(app);
    wire_click(app);
}

fn wire_pointerdown(app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let canvas = app.borrow().freq.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut a = app.borrow_mut();
        let button = PointerButton::from_dom(ev.button());
        if button != PointerButton::Primary {
            return;
        }
        let pos = input::event_canvas_px(&ev, &a.freq.canvas);
        let geometry = a.freq.geometry;
        if a.editor.pointer_down(button, pos, &geometry).is_some() {
            a.redraw();
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let canvas = app.borrow().freq.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut a = app.borrow_mut();
        let pos = input::event_canvas_px(&ev, &a.freq.canvas);
        let geometry = a.freq.geometry;
        if a.editor.pointer_move(pos, &geometry).is_some() {
            a.redraw();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let canvas = app.borrow().freq.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        app.borrow_mut().editor.pointer_leave();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(app: &Rc<RefCell<App>>) {
    let app = app.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        app.borrow_mut().editor.pointer_up();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let canvas = app.borrow().freq.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut a = app.borrow_mut();
        let pos = input::event_canvas_px(&ev, &a.freq.canvas);
        let geometry = a.freq.geometry;
        if a.editor.click(pos, &geometry).is_some() {
            a.redraw();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
