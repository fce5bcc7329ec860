//! Canvas drawing for the backdrop.
//!
//! One frame is: clear the surface, draw every particle, then draw the
//! connection lines. Order matters: lines paint over the particles.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::linker::Connection;
use super::particle::{Particle, Shape, Tint};
use super::theme;

/// Repaints the whole frame. A drawing fault aborts the frame and is
/// reported to the caller, which stops the loop.
pub fn render_frame(
	ctx: &CanvasRenderingContext2d,
	particles: &[Particle],
	connections: &[Connection],
	width: f64,
	height: f64,
) -> Result<(), JsValue> {
	ctx.clear_rect(0.0, 0.0, width, height);

	for particle in particles {
		draw_particle(ctx, particle)?;
	}
	draw_connections(ctx, connections);

	Ok(())
}

fn draw_particle(ctx: &CanvasRenderingContext2d, particle: &Particle) -> Result<(), JsValue> {
	ctx.set_fill_style_str(match particle.tint {
		Tint::Base => theme::PARTICLE_BASE,
		Tint::Accent => theme::PARTICLE_ACCENT,
	});

	match particle.shape {
		Shape::Glyph(ch) => {
			ctx.set_font(theme::GLYPH_FONT);
			ctx.fill_text(&ch.to_string(), particle.x, particle.y)?;
		}
		Shape::Disc => {
			ctx.begin_path();
			ctx.arc(particle.x, particle.y, particle.radius, 0.0, PI * 2.0)?;
			ctx.fill();
		}
	}

	Ok(())
}

fn draw_connections(ctx: &CanvasRenderingContext2d, connections: &[Connection]) {
	ctx.set_line_width(theme::LINE_WIDTH);
	for connection in connections {
		ctx.set_stroke_style_str(&theme::line_color(connection.opacity));
		ctx.begin_path();
		ctx.move_to(connection.from.0, connection.from.1);
		ctx.line_to(connection.to.0, connection.to.1);
		ctx.stroke();
	}
}
