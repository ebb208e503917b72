//! DOM event wiring: pointer tracking, debounced resize, visibility pause.

use crate::dom;
use crate::frame::{CircuitFrame, ParticleFrame, ParticleLoop};
use fx_core::RESIZE_DEBOUNCE_MS;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the raw pointer over the page; the circuit field only ever reads the
/// smoothed position its own tick derives from this target.
pub fn wire_pointer(document: &web::Document, circuit: Rc<RefCell<CircuitFrame>>) {
    {
        let circuit_move = circuit.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let target = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            circuit_move.borrow_mut().field.pointer.set_target(target);
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let circuit_leave = circuit;
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            circuit_leave.borrow_mut().field.pointer.clear_target();
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Debounced resize: wait out a burst of resize events, then resync canvas
/// backing sizes and rebuild both populations for the new viewport.
pub fn wire_resize(
    circuit: Option<Rc<RefCell<CircuitFrame>>>,
    particles: Option<Rc<RefCell<ParticleFrame>>>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let pending_apply = pending.clone();
    let apply = Rc::new(Closure::wrap(Box::new(move || {
        pending_apply.set(None);
        if let Some(cf) = &circuit {
            let mut cf = cf.borrow_mut();
            let (w, h) = dom::sync_canvas_to_viewport(&cf.canvas, &cf.ctx);
            cf.width = w;
            cf.height = h;
            if let Err(e) = cf.field.resize(w, h) {
                log::error!("circuit resize failed: {e}");
            }
        }
        if let Some(pf) = &particles {
            let mut pf = pf.borrow_mut();
            let (w, h) = dom::sync_canvas_to_viewport(&pf.canvas, &pf.ctx);
            pf.width = w;
            pf.height = h;
            pf.field.resize(w, h);
        }
    }) as Box<dyn FnMut()>));

    let window_resize = window.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        if let Some(id) = pending.take() {
            window_resize.clear_timeout_with_handle(id);
        }
        if let Ok(id) = window_resize.set_timeout_with_callback_and_timeout_and_arguments_0(
            apply.as_ref().as_ref().unchecked_ref(),
            RESIZE_DEBOUNCE_MS,
        ) {
            pending.set(Some(id));
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

/// Pause the particle loop while the tab is hidden, resume when it returns.
pub fn wire_visibility(document: &web::Document, particle_loop: ParticleLoop) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if doc.hidden() {
            particle_loop.pause();
        } else {
            particle_loop.resume();
        }
    }) as Box<dyn FnMut()>);
    let _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
