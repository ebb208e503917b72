use crate::constants::PARTICLE_FRAME_INTERVAL_SEC;
use crate::render;
use fx_core::{CircuitField, ParticleField, MAX_FRAME_DT};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CircuitFrame {
    pub field: CircuitField,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub width: f32,
    pub height: f32,
    pub last_instant: Instant,
}

impl CircuitFrame {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT);
        self.last_instant = now;

        self.field.tick(dt);
        render::draw_circuit(&self.ctx, &self.field, self.width, self.height);
    }
}

pub struct ParticleFrame {
    pub field: ParticleField,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub width: f32,
    pub height: f32,
    pub last_instant: Instant,
    pub last_draw: Instant,
}

impl ParticleFrame {
    pub fn frame(&mut self) {
        let now = Instant::now();
        // The particle canvas runs on a 30 fps budget; skipped frames still
        // accumulate into the next tick's dt.
        if (now - self.last_draw).as_secs_f32() < PARTICLE_FRAME_INTERVAL_SEC {
            return;
        }
        self.last_draw = now;

        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT);
        self.last_instant = now;

        self.field.tick(dt);
        render::draw_particles(&self.ctx, &self.field, self.width, self.height);
    }
}

/// Self-rescheduling requestAnimationFrame loop for the circuit canvas. Runs
/// until page teardown.
pub fn start_circuit_loop(frame: Rc<RefCell<CircuitFrame>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// The particle loop pauses while the page is hidden, so its callback handle
/// is tracked for cancellation and the loop can be restarted.
pub struct ParticleLoop {
    frame: Rc<RefCell<ParticleFrame>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Clone for ParticleLoop {
    fn clone(&self) -> Self {
        Self {
            frame: self.frame.clone(),
            raf_id: self.raf_id.clone(),
            tick: self.tick.clone(),
        }
    }
}

impl ParticleLoop {
    pub fn start(frame: Rc<RefCell<ParticleFrame>>) -> Self {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let frame_tick = frame.clone();
        let raf_id_tick = raf_id.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_tick.borrow_mut().frame();
            if let Some(w) = web::window() {
                if let Ok(id) = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    raf_id_tick.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));

        let this = Self { frame, raf_id, tick };
        this.resume();
        this
    }

    pub fn pause(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }

    pub fn resume(&self) {
        if self.raf_id.get().is_some() {
            return;
        }
        // Restart timing from now so the hidden interval is not integrated.
        {
            let mut f = self.frame.borrow_mut();
            f.last_instant = Instant::now();
            f.last_draw = Instant::now();
        }
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                self.tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                self.raf_id.set(Some(id));
            }
        }
    }
}
