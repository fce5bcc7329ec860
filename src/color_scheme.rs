//! Dark/light color-scheme switching with a stored preference.
//!
//! The active scheme reaches CSS as a `data-theme` attribute on the root
//! element: `"dark"` when dark, absent when light. A preference stored in
//! `localStorage` wins over the system preference; while nothing is stored,
//! system changes are followed live.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MediaQueryListEvent, Storage};

use crate::tracking;

/// `localStorage` key holding the persisted scheme.
const STORAGE_KEY: &str = "landingpro-theme";

/// Page-wide presentation mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
	Dark,
	Light,
}

impl ColorScheme {
	/// Storage and attribute form of the scheme.
	pub fn as_str(self) -> &'static str {
		match self {
			ColorScheme::Dark => "dark",
			ColorScheme::Light => "light",
		}
	}

	/// Parses the storage form back into a scheme.
	pub fn parse(value: &str) -> Option<ColorScheme> {
		match value {
			"dark" => Some(ColorScheme::Dark),
			"light" => Some(ColorScheme::Light),
			_ => None,
		}
	}

	/// The other scheme.
	pub fn flipped(self) -> ColorScheme {
		match self {
			ColorScheme::Dark => ColorScheme::Light,
			ColorScheme::Light => ColorScheme::Dark,
		}
	}
}

fn apply(document: &Document, scheme: ColorScheme) {
	if let Some(root) = document.document_element() {
		match scheme {
			ColorScheme::Dark => {
				let _ = root.set_attribute("data-theme", "dark");
			}
			ColorScheme::Light => {
				let _ = root.remove_attribute("data-theme");
			}
		}
	}
}

fn stored_scheme(storage: &Storage) -> Option<ColorScheme> {
	storage
		.get_item(STORAGE_KEY)
		.ok()
		.flatten()
		.as_deref()
		.and_then(ColorScheme::parse)
}

fn persist(storage: Option<&Storage>, scheme: ColorScheme) {
	let Some(storage) = storage else {
		return;
	};
	if storage.set_item(STORAGE_KEY, scheme.as_str()).is_err() {
		warn!("landingpro: could not persist color scheme");
	}
}

fn sync_toggle(button: &Element, scheme: ColorScheme) {
	let label = match scheme {
		ColorScheme::Dark => "Switch to light theme",
		ColorScheme::Light => "Switch to dark theme",
	};
	let _ = button.set_attribute("aria-label", label);
}

/// Applies the initial scheme and wires the system listener and the toggle.
///
/// Runs once at startup. Without `localStorage` (private browsing) the
/// scheme still applies and toggles, it just resets next visit. Without a
/// `theme-toggle` element only the manual control is missing.
pub fn init() {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};

	let storage = window.local_storage().unwrap_or_else(|_| {
		warn!("landingpro: localStorage unavailable");
		None
	});
	let media = window
		.match_media("(prefers-color-scheme: dark)")
		.ok()
		.flatten();

	let stored = storage.as_ref().and_then(stored_scheme);
	let initial = stored.unwrap_or_else(|| {
		if media.as_ref().is_some_and(|query| query.matches()) {
			ColorScheme::Dark
		} else {
			ColorScheme::Light
		}
	});
	apply(&document, initial);
	debug!(
		"landingpro: color scheme {} ({})",
		initial.as_str(),
		if stored.is_some() { "stored" } else { "system" }
	);

	let current = Rc::new(Cell::new(initial));

	// System changes apply only while the user has not stated a preference.
	if stored.is_none() {
		if let Some(media) = media {
			let (document_media, storage_media, current_media) =
				(document.clone(), storage.clone(), current.clone());
			let on_change: Closure<dyn FnMut(MediaQueryListEvent)> =
				Closure::new(move |ev: MediaQueryListEvent| {
					if storage_media.as_ref().and_then(stored_scheme).is_some() {
						return;
					}
					let scheme = if ev.matches() {
						ColorScheme::Dark
					} else {
						ColorScheme::Light
					};
					apply(&document_media, scheme);
					current_media.set(scheme);
				});
			let _ = media
				.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
			// Listener lives for the page lifetime.
			on_change.forget();
		}
	}

	if let Some(button) = document.get_element_by_id("theme-toggle") {
		sync_toggle(&button, initial);
		let (document_click, button_click) = (document.clone(), button.clone());
		let on_click: Closure<dyn FnMut()> = Closure::new(move || {
			let previous = current.get();
			let scheme = previous.flipped();
			current.set(scheme);
			apply(&document_click, scheme);
			persist(storage.as_ref(), scheme);
			sync_toggle(&button_click, scheme);
			tracking::dispatch(
				"theme_toggle",
				&tracking::ThemeEvent::new(previous.as_str(), scheme.as_str()),
			);
		});
		let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
		on_click.forget();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scheme_round_trips_through_storage_form() {
		for scheme in [ColorScheme::Dark, ColorScheme::Light] {
			assert_eq!(ColorScheme::parse(scheme.as_str()), Some(scheme));
		}
	}

	#[test]
	fn test_unknown_storage_value_is_ignored() {
		assert_eq!(ColorScheme::parse("solarized"), None);
		assert_eq!(ColorScheme::parse(""), None);
		assert_eq!(ColorScheme::parse("DARK"), None);
	}

	#[test]
	fn test_flipped_alternates() {
		assert_eq!(ColorScheme::Dark.flipped(), ColorScheme::Light);
		assert_eq!(ColorScheme::Light.flipped(), ColorScheme::Dark);
		assert_eq!(ColorScheme::Dark.flipped().flipped(), ColorScheme::Dark);
	}
}
