//! Leptos component wrapping the backdrop canvas.
//!
//! The component renders the hero canvas and wires up the animation loop,
//! the window resize handler, and the pause toggle. Frames run via
//! `requestAnimationFrame`; pausing cancels the pending request and resuming
//! arms a fresh one. Every DOM lookup degrades to a no-op when the page is
//! missing the expected element, so the backdrop never takes the page down.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, Window};

use super::linker;
use super::render;
use super::scheduler::{FrameScheduler, Motion};
use super::state::SimState;

/// Simulation plus the random source used to respawn it on resize.
struct BackdropContext {
	sim: SimState,
	rng: Pcg32,
}

/// `requestAnimationFrame` wrapper behind the [`FrameScheduler`] seam.
///
/// Holds the frame closure and the id of the pending request; all fields are
/// shared handles, so clones captured by different closures observe the same
/// loop.
#[derive(Clone)]
struct RafScheduler {
	window: Window,
	frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	handle: Rc<Cell<Option<i32>>>,
}

impl RafScheduler {
	// The pending id is spent the moment the browser invokes the callback.
	fn note_fired(&self) {
		self.handle.set(None);
	}
}

impl FrameScheduler for RafScheduler {
	fn start(&mut self) {
		if self.is_running() {
			return;
		}
		if let Some(ref cb) = *self.frame.borrow() {
			let requested = self
				.window
				.request_animation_frame(cb.as_ref().unchecked_ref());
			self.handle.set(requested.ok());
		}
	}

	fn stop(&mut self) {
		if let Some(handle) = self.handle.take() {
			let _ = self.window.cancel_animation_frame(handle);
		}
	}

	fn is_running(&self) -> bool {
		self.handle.get().is_some()
	}
}

/// Reflects the paused state on the toggle control.
fn sync_toggle(button: &Element, paused: bool) {
	let _ = button.set_attribute("aria-pressed", if paused { "true" } else { "false" });
	if let Some(icon) = button.query_selector("span").ok().flatten() {
		icon.set_text_content(Some(if paused { "▶" } else { "⏸" }));
	}
}

/// Measures the canvas parent and sizes the drawing buffer to it.
fn fit_canvas_to_parent(canvas: &HtmlCanvasElement) -> Option<(f64, f64)> {
	let parent: HtmlElement = canvas.parent_element()?.dyn_into().ok()?;
	let (w, h) = (parent.offset_width() as f64, parent.offset_height() as f64);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	Some((w, h))
}

/// Renders the animated particle backdrop on a canvas that fills its parent.
///
/// The pause control is looked up by id (`animation-toggle`) so it can live
/// anywhere in the page markup; when absent, the animation simply runs
/// without a manual control. A reduced-motion preference at mount time
/// leaves the backdrop on its blank first frame until toggled.
#[component]
pub fn HeroBackdrop() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<BackdropContext>>> = Rc::new(RefCell::new(None));
	let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let toggle_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(document) = window.document() else {
			return;
		};
		let Some((w, h)) = fit_canvas_to_parent(&canvas) else {
			return;
		};
		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(object)) => match object.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => return,
		};

		// Read once at startup; the toggle is the only way to change state
		// afterwards.
		let reduced_motion = window
			.match_media("(prefers-reduced-motion: reduce)")
			.ok()
			.flatten()
			.map(|query| query.matches())
			.unwrap_or(false);

		let mut rng = Pcg32::seed_from_u64(js_sys::Date::now() as u64);
		let sim = SimState::new(w, h, reduced_motion, &mut rng);
		debug!(
			"landingpro: backdrop ready, {} particles in {}x{}",
			sim.target_count, w, h
		);
		*context.borrow_mut() = Some(BackdropContext { sim, rng });

		let mut scheduler = RafScheduler {
			window: window.clone(),
			frame: frame_cb.clone(),
			handle: frame_handle.clone(),
		};

		let (context_frame, mut scheduler_frame, ctx_frame) =
			(context.clone(), scheduler.clone(), ctx.clone());
		*frame_cb.borrow_mut() = Some(Closure::new(move || {
			scheduler_frame.note_fired();
			if let Some(ref mut c) = *context_frame.borrow_mut() {
				if c.sim.motion.is_paused() {
					return;
				}
				c.sim.step_all();
				let connections =
					linker::link_all(&c.sim.particles, linker::CONNECTION_DISTANCE);
				if let Err(err) = render::render_frame(
					&ctx_frame,
					&c.sim.particles,
					&connections,
					c.sim.width,
					c.sim.height,
				) {
					warn!("landingpro: backdrop draw failed, stopping: {:?}", err);
					return;
				}
				scheduler_frame.start();
			}
		}));

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			if let Some((w, h)) = fit_canvas_to_parent(&canvas_resize) {
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.sim.resize(w, h, &mut c.rng);
				}
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		if let Some(button) = document.get_element_by_id("animation-toggle") {
			sync_toggle(&button, reduced_motion);
			let (context_toggle, mut scheduler_toggle, button_toggle) =
				(context.clone(), scheduler.clone(), button.clone());
			*toggle_cb.borrow_mut() = Some(Closure::new(move || {
				if let Some(ref mut c) = *context_toggle.borrow_mut() {
					let motion = c.sim.motion.toggle(&mut scheduler_toggle);
					sync_toggle(&button_toggle, motion == Motion::Paused);
				}
			}));
			if let Some(ref cb) = *toggle_cb.borrow() {
				let _ =
					button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
			}
		}

		if let Some(ref c) = *context.borrow() {
			c.sim.motion.arm(&mut scheduler);
		}
	});

	view! {
		<canvas
			id="hero-canvas"
			node_ref=canvas_ref
			class="hero-canvas"
			aria-hidden="true"
			style="display: block; position: absolute; inset: 0; width: 100%; height: 100%;"
		/>
	}
}
