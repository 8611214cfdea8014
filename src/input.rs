use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
// Mouse and touch both end up as a canvas-relative position in CSS pixels.

#[inline]
pub fn client_to_canvas(client: Vec2, canvas_origin: Vec2) -> Vec2 {
    client - canvas_origin
}

#[inline]
fn canvas_origin(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}

#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    client_to_canvas(client, canvas_origin(canvas))
}

/// First active touch, falling back to the first changed touch (touchend
/// reports the lifted finger only there).
pub fn touch_canvas_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let touch = ev.touches().get(0).or_else(|| ev.changed_touches().get(0))?;
    let client = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
    Some(client_to_canvas(client, canvas_origin(canvas)))
}

// ---------------- Backing store sizing ----------------

#[inline]
pub fn capped_pixel_ratio(device_ratio: f64, cap: f64) -> f64 {
    if device_ratio.is_finite() && device_ratio > 0.0 {
        device_ratio.min(cap)
    } else {
        1.0
    }
}

/// Backing store size in device pixels for a CSS size, never zero.
#[inline]
pub fn backing_size(css: Vec2, pixel_ratio: f64) -> (u32, u32) {
    let w = (css.x as f64 * pixel_ratio).floor().max(1.0) as u32;
    let h = (css.y as f64 * pixel_ratio).floor().max(1.0) as u32;
    (w, h)
}
