#![cfg(target_arch = "wasm32")]
use heartfield_core::{HeartField, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod settings;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heartfield starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::heart_canvas(&document)?;
    let ctx = dom::context_2d(&canvas)?;

    let config = settings::config_from_attributes(|name| canvas.get_attribute(name));
    let max_ratio = config.max_device_pixel_ratio;
    let (css, ratio) = dom::sync_canvas_backing_size(&canvas, max_ratio);

    let mut surface = canvas::CanvasSurface::new(ctx, css, ratio);
    let mut rng = StdRng::from_entropy();
    let field = HeartField::new(config, css, &mut rng)?;
    surface.set_heart_outline(field.outline());

    let field = Rc::new(RefCell::new(field));
    let rng = Rc::new(RefCell::new(rng));
    let surface = Rc::new(RefCell::new(surface));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        field: field.clone(),
        rng: rng.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        rng,
        surface,
    }));
    frame::wire_canvas_resize(&canvas, &frame_ctx, max_ratio);
    frame::start_loop(frame_ctx);
    Ok(())
}
