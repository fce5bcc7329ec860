//! landingpro-web: Client-side interactivity for the LandingPro landing page.
//!
//! This crate provides the WASM-driven pieces of the page: an animated
//! particle backdrop behind the hero, dark/light color-scheme switching,
//! contact form validation, and analytics event dispatch.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod color_scheme;
pub mod components;
pub mod tracking;

pub use components::backdrop::HeroBackdrop;
pub use components::contact::ContactForm;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("landingpro: logging initialized");
}

/// Main application component.
/// Renders the landing page and wires the page-level behaviors.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// DOM-global wiring runs once the page content is mounted.
	Effect::new(move |_| {
		color_scheme::init();
		tracking::init();
	});

	let hero_style = format!(
		"background-color: {};",
		components::backdrop::theme::BACKGROUND
	);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="LandingPro" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<header class="site-header">
			<span class="brand">"LandingPro"</span>
			<nav>
				<button id="theme-toggle" type="button" aria-label="Switch to dark theme">"◐"</button>
				<a
					class="cta"
					href="#contact"
					data-track="cta_click"
					data-track-location="header"
					data-track-type="primary"
					data-track-label="Get started"
				>
					"Get started"
				</a>
			</nav>
		</header>

		<section class="hero" style=hero_style>
			<HeroBackdrop />
			<div class="hero-overlay">
				<h1>"Ship your landing page in hours"</h1>
				<p class="subtitle">
					"One fast page, ready for your product. No builders, no bloat."
				</p>
				<a
					class="cta"
					href="#contact"
					data-track="cta_click"
					data-track-location="hero"
					data-track-type="primary"
					data-track-label="Start free"
					data-track-plan="free"
				>
					"Start free"
				</a>
				<button
					id="animation-toggle"
					type="button"
					aria-pressed="false"
					aria-label="Toggle background animation"
				>
					<span aria-hidden="true">"⏸"</span>
				</button>
			</div>
		</section>

		<section id="contact" class="contact">
			<h2>"Contact"</h2>
			<ContactForm />
		</section>

		<footer class="site-footer">
			<small>"LandingPro"</small>
		</footer>
	}
}
