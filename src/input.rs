use glam::Vec2;
use web_sys as web;

/// Event position in the canvas's backing-store pixels.
///
/// Pointer events deref to `MouseEvent`, so this serves pointer, click and
/// contextmenu handlers alike.
#[inline]
pub fn event_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        let sx = (x_css / w) * canvas.width() as f32;
        let sy = (y_css / h) * canvas.height() as f32;
        Vec2::new(sx, sy)
    } else {
        // no layout yet; lands outside every plot rect
        Vec2::splat(f32::NAN)
    }
}

/// Event position in page coordinates, for placing the context menu.
#[inline]
pub fn event_page_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.page_x() as f32, ev.page_y() as f32)
}
