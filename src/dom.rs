use crate::constants::CANVAS_ID;
use crate::input;
use anyhow::{anyhow, Context};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn heart_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .context("2d context unavailable")?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected context type: {:?}", e))
}

/// Match the canvas backing store to its CSS box and return the CSS size
/// together with the pixel ratio used.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, max_ratio: f64) -> (Vec2, f64) {
    let rect = canvas.get_bounding_client_rect();
    let css = Vec2::new(rect.width() as f32, rect.height() as f32).max(Vec2::ONE);
    let device_ratio = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let ratio = input::capped_pixel_ratio(device_ratio, max_ratio);
    let (w_px, h_px) = input::backing_size(css, ratio);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (css, ratio)
}
