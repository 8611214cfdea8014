use crate::canvas::CanvasSurface;
use crate::dom;
use heartfield_core::{HeartField, Surface};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<HeartField>>,
    pub rng: Rc<RefCell<StdRng>>,
    pub surface: Rc<RefCell<CanvasSurface>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = instant::now();
        self.field.borrow_mut().tick(
            now,
            &mut *self.rng.borrow_mut(),
            &mut *self.surface.borrow_mut(),
        );
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Resizing rebuilds the heart set for the new surface size.
pub fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    frame_ctx: &Rc<RefCell<FrameContext>>,
    max_ratio: f64,
) {
    let canvas_resize = canvas.clone();
    let ctx = frame_ctx.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (css, ratio) = dom::sync_canvas_backing_size(&canvas_resize, max_ratio);
        let frame = ctx.borrow();
        frame.surface.borrow_mut().resize(css, ratio);
        let size = frame.surface.borrow().size();
        frame
            .field
            .borrow_mut()
            .resize(size, &mut *frame.rng.borrow_mut());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
