#![cfg(target_arch = "wasm32")]
//! Browser entry point: finds whichever background canvases the current page
//! carries, builds the core animation state for each, and starts the frame
//! loops. Pages may have either canvas or both.

use crate::constants::{CIRCUIT_CANVAS_ID, TEAM_CANVAS_ID};
use fx_core::{CircuitConfig, CircuitField, ParticleField};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let circuit = match dom::canvas_by_id(&document, CIRCUIT_CANVAS_ID) {
        Some(canvas) => Some(init_circuit(&document, canvas)?),
        None => None,
    };
    let particles = match dom::canvas_by_id(&document, TEAM_CANVAS_ID) {
        Some(canvas) => Some(init_particles(&document, canvas)?),
        None => None,
    };
    if circuit.is_none() && particles.is_none() {
        log::warn!("no background canvas found on this page");
    }
    events::wire_resize(circuit, particles);
    Ok(())
}

fn init_circuit(
    document: &web::Document,
    canvas: web::HtmlCanvasElement,
) -> anyhow::Result<Rc<RefCell<frame::CircuitFrame>>> {
    let ctx = dom::context_2d(&canvas)
        .ok_or_else(|| anyhow::anyhow!("no 2d context on #{CIRCUIT_CANVAS_ID}"))?;
    let (width, height) = dom::sync_canvas_to_viewport(&canvas, &ctx);
    let field = CircuitField::new(width, height, CircuitConfig::default(), rand::random())?;
    log::info!(
        "[circuit] {}x{} grid, {} signals",
        field.dims.cols,
        field.dims.rows,
        field.signals.len()
    );

    let circuit = Rc::new(RefCell::new(frame::CircuitFrame {
        field,
        canvas,
        ctx,
        width,
        height,
        last_instant: Instant::now(),
    }));
    events::wire_pointer(document, circuit.clone());
    frame::start_circuit_loop(circuit.clone());
    Ok(circuit)
}

fn init_particles(
    document: &web::Document,
    canvas: web::HtmlCanvasElement,
) -> anyhow::Result<Rc<RefCell<frame::ParticleFrame>>> {
    let ctx = dom::context_2d(&canvas)
        .ok_or_else(|| anyhow::anyhow!("no 2d context on #{TEAM_CANVAS_ID}"))?;
    let (width, height) = dom::sync_canvas_to_viewport(&canvas, &ctx);
    let field = ParticleField::new(width, height, rand::random());
    log::info!("[particles] {} particles", field.particles.len());

    let particles = Rc::new(RefCell::new(frame::ParticleFrame {
        field,
        canvas,
        ctx,
        width,
        height,
        last_instant: Instant::now(),
        last_draw: Instant::now(),
    }));
    let particle_loop = frame::ParticleLoop::start(particles.clone());
    events::wire_visibility(document, particle_loop);
    Ok(particles)
}
