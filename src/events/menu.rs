use crate::app::App;
use crate::dom;
use crate::input;
use crate::menu;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Secondary click opens the delete menu over a non-empty bin; the menu item
/// confirms, any other click on the page dismisses.
pub fn wire_context_menu(app: &Rc<RefCell<App>>, delete_item: &web::Element) {
    wire_contextmenu(app);
    wire_delete_item(app, delete_item);
    wire_click_outside(app);
}

fn wire_contextmenu(app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let canvas = app.borrow().freq.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
        let mut a = app.borrow_mut();
        let pos = input::event_canvas_px(&ev, &a.freq.canvas);
        let geometry = a.freq.geometry;
        match a.editor.open_context_menu(pos, &geometry) {
            Some(i) => {
                menu::show_at(&a.menu, input::event_page_px(&ev));
                log::info!(
                    "[menu] open for {:.1} Hz",
                    a.editor.bins().frequency(i)
                );
            }
            None => menu::hide(&a.menu),
        }
        a.redraw();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_delete_item(app: &Rc<RefCell<App>>, delete_item: &web::Element) {
    let app = app.clone();
    dom::add_click_listener(delete_item, move |_ev| {
        let mut a = app.borrow_mut();
        a.editor.confirm_delete();
        menu::hide(&a.menu);
        a.redraw();
    });
}

fn wire_click_outside(app: &Rc<RefCell<App>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let app = app.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        let mut a = app.borrow_mut();
        if a.editor.dismiss_menu() {
            a.redraw();
        }
        a.sync_menu();
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
