use crate::input;
use glam::Vec2;
use heartfield_core::{HeartField, PointerOutcome};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub field: Rc<RefCell<HeartField>>,
    pub rng: Rc<RefCell<StdRng>>,
}

/// Presses start on the canvas; moves and releases are tracked on the window
/// so a drag keeps working when the pointer leaves the canvas.
pub fn wire_input_handlers(w: InputWiring) {
    wire_mousedown(&w);
    wire_mousemove(&w);
    wire_mouseup(&w);
    wire_touchstart(&w);
    wire_touchmove(&w);
    wire_touchend(&w);
}

fn press(w: &InputWiring, pos: Vec2) -> PointerOutcome {
    let now = instant::now();
    let outcome = w
        .field
        .borrow_mut()
        .pointer_down(pos, now, &mut *w.rng.borrow_mut());
    match outcome {
        PointerOutcome::Popped(burst) => {
            log::debug!("[input] pop burst of {}", burst.particles)
        }
        PointerOutcome::Grabbed { index } => log::debug!("[input] grabbed heart #{}", index),
        PointerOutcome::Missed => {}
    }
    outcome
}

/// Returns whether a drag is in progress after the move.
fn track(w: &InputWiring, pos: Vec2) -> bool {
    let mut field = w.field.borrow_mut();
    field.pointer_move(pos, instant::now());
    field.dragged_index().is_some()
}

fn release(w: &InputWiring) {
    w.field.borrow_mut().pointer_up();
}

fn listen(target: &web::EventTarget, event: &str, passive: bool, callback: &js_sys::Function) {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    if let Err(e) =
        target.add_event_listener_with_callback_and_add_event_listener_options(event, callback, &opts)
    {
        log::error!("[input] failed to listen for {}: {:?}", event, e);
    }
}

fn window_target() -> Option<web::EventTarget> {
    web::window().map(web::EventTarget::from)
}

fn wire_mousedown(w: &InputWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::mouse_canvas_px(&ev, &w2.canvas);
        if press(&w2, pos) != PointerOutcome::Missed {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    listen(&w.canvas, "mousedown", false, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousemove(w: &InputWiring) {
    let Some(target) = window_target() else {
        return;
    };
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::mouse_canvas_px(&ev, &w2.canvas);
        if track(&w2, pos) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    listen(&target, "mousemove", false, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseup(w: &InputWiring) {
    let Some(target) = window_target() else {
        return;
    };
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        release(&w2);
    }) as Box<dyn FnMut(_)>);
    listen(&target, "mouseup", true, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchstart(w: &InputWiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(pos) = input::touch_canvas_px(&ev, &w2.canvas) else {
            return;
        };
        if press(&w2, pos) != PointerOutcome::Missed {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    listen(&w.canvas, "touchstart", false, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let Some(target) = window_target() else {
        return;
    };
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(pos) = input::touch_canvas_px(&ev, &w2.canvas) else {
            return;
        };
        if track(&w2, pos) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    listen(&target, "touchmove", false, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchend(w: &InputWiring) {
    let Some(target) = window_target() else {
        return;
    };
    for event in ["touchend", "touchcancel"] {
        let w2 = w.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            release(&w2);
        }) as Box<dyn FnMut(_)>);
        listen(&target, event, true, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
