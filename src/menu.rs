use glam::Vec2;
use web_sys as web;

/// Place the context menu at page coordinates and show it.
#[inline]
pub fn show_at(menu: &web::HtmlElement, page: Vec2) {
    let cl = menu.class_list();
    _ = cl.remove_1("hidden");
    _ = menu.set_attribute(
        "style",
        &format!("display:block;left:{:.0}px;top:{:.0}px", page.x, page.y),
    );
}

#[inline]
pub fn hide(menu: &web::HtmlElement) {
    let cl = menu.class_list();
    _ = cl.add_1("hidden");
    // fallback for pages without the .hidden rule
    _ = menu.set_attribute("style", "display:none");
}

#[inline]
pub fn is_hidden(menu: &web::HtmlElement) -> bool {
    if menu.class_list().contains("hidden") {
        return true;
    }
    menu.get_attribute("style")
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}
