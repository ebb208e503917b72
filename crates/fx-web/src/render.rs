//! 2d-canvas drawing of fx-core state. Pure side effects: all geometry and
//! styling decisions are made by the core types.

use crate::constants::*;
use fx_core::{dot_grey_alpha, CircuitField, ParticleField, DOT_BASE_RADIUS};
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub fn draw_circuit(ctx: &CanvasRenderingContext2d, field: &CircuitField, width: f32, height: f32) {
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    draw_grid_lines(ctx, field, width, height);
    draw_grid_dots(ctx, field);
    for signal in &field.signals {
        draw_signal(ctx, field, signal);
    }
}

fn draw_grid_lines(ctx: &CanvasRenderingContext2d, field: &CircuitField, width: f32, height: f32) {
    ctx.set_stroke_style(&JsValue::from_str(GRID_LINE_COLOR));
    ctx.set_line_width(GRID_LINE_WIDTH);
    ctx.begin_path();
    let spacing = field.dims.spacing as f64;
    let (w, h) = (width as f64, height as f64);
    let mut x = 0.0;
    while x <= w {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        x += spacing;
    }
    let mut y = 0.0;
    while y <= h {
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        y += spacing;
    }
    ctx.stroke();
}

fn draw_grid_dots(ctx: &CanvasRenderingContext2d, field: &CircuitField) {
    let pointer = field.pointer.smoothed;
    for col in 0..field.dims.cols {
        for row in 0..field.dims.rows {
            let pos = field.dims.to_px(fx_core::GridPoint::new(col, row));
            let style = field.config.dot_style(pos.distance(pointer));
            let (grey, alpha) = dot_grey_alpha(style.brighten);
            ctx.set_fill_style(&JsValue::from_str(&format!(
                "rgba({grey}, {grey}, {grey}, {alpha:.3})"
            )));
            ctx.begin_path();
            let _ = ctx.arc(
                pos.x as f64,
                pos.y as f64,
                (DOT_BASE_RADIUS * style.scale) as f64,
                0.0,
                PI * 2.0,
            );
            ctx.fill();
        }
    }
}

fn draw_signal(ctx: &CanvasRenderingContext2d, field: &CircuitField, signal: &fx_core::Signal) {
    let trail = signal.trail(field.config.trail_length);
    if trail.len() < 2 {
        return;
    }
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    // Glow pass under a sharp core pass.
    ctx.set_stroke_style(&JsValue::from_str(SIGNAL_GLOW_COLOR));
    ctx.set_line_width(SIGNAL_GLOW_WIDTH);
    ctx.set_shadow_color(SIGNAL_SHADOW_COLOR);
    ctx.set_shadow_blur(SIGNAL_SHADOW_BLUR);
    stroke_polyline(ctx, &trail);

    ctx.set_stroke_style(&JsValue::from_str(SIGNAL_CORE_COLOR));
    ctx.set_line_width(SIGNAL_CORE_WIDTH);
    ctx.set_shadow_blur(0.0);
    stroke_polyline(ctx, &trail);

    ctx.set_shadow_color("transparent");
}

fn stroke_polyline(ctx: &CanvasRenderingContext2d, points: &[glam::Vec2]) {
    ctx.begin_path();
    ctx.move_to(points[0].x as f64, points[0].y as f64);
    for p in &points[1..] {
        ctx.line_to(p.x as f64, p.y as f64);
    }
    ctx.stroke();
}

pub fn draw_particles(
    ctx: &CanvasRenderingContext2d,
    field: &ParticleField,
    width: f32,
    height: f32,
) {
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);

    ctx.set_line_width(CONNECTION_WIDTH);
    ctx.set_line_cap("round");
    for c in field.connections() {
        ctx.set_stroke_style(&JsValue::from_str(&format!(
            "rgba({CONNECTION_RGB}, {:.3})",
            c.alpha
        )));
        ctx.begin_path();
        ctx.move_to(c.a.x as f64, c.a.y as f64);
        ctx.line_to(c.b.x as f64, c.b.y as f64);
        ctx.stroke();
    }

    for p in &field.particles {
        let radius = (p.radius * p.pulse_scale()) as f64;
        let (x, y) = (p.pos.x as f64, p.pos.y as f64);

        ctx.set_fill_style(&JsValue::from_str(&format!(
            "hsla({:.0}, 70%, {:.0}%, {PARTICLE_ALPHA})",
            p.hue, p.lightness
        )));
        ctx.begin_path();
        let _ = ctx.arc(x, y, radius, 0.0, PI * 2.0);
        ctx.fill();

        ctx.set_fill_style(&JsValue::from_str(PARTICLE_HIGHLIGHT_COLOR));
        ctx.begin_path();
        let _ = ctx.arc(x - radius * 0.2, y - radius * 0.2, radius * 0.3, 0.0, PI * 2.0);
        ctx.fill();
    }
}
