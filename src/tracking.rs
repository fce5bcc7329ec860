//! Analytics event dispatch.
//!
//! Events are plain structs serialized through `serde_json`, then bridged to
//! whatever consumer the page provides: a `dataLayer` array, a `gtag`
//! function, or neither (the event is logged and dropped). No network I/O
//! happens here.

use js_sys::{Array, Date, Function, JSON, Reflect};
use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Payload for a `cta_click` event, read off the clicked element's
/// `data-track-*` attributes.
#[derive(Clone, Debug, Serialize)]
pub struct CtaEvent {
	/// Where on the page the CTA sits ("header", "hero", ...).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location: Option<String>,
	/// CTA kind ("primary", "secondary", ...).
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
	/// Visible label of the control.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Plan the CTA advertises, if any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub plan: Option<String>,
	/// Link target for anchor CTAs.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	/// ISO-8601 click time.
	pub timestamp: String,
}

/// Payload for a `theme_toggle` event.
#[derive(Clone, Debug, Serialize)]
pub struct ThemeEvent {
	from: &'static str,
	to: &'static str,
	timestamp: String,
}

impl ThemeEvent {
	/// Event for a switch between the named schemes.
	pub fn new(from: &'static str, to: &'static str) -> ThemeEvent {
		ThemeEvent {
			from,
			to,
			timestamp: now_iso(),
		}
	}
}

/// Payload for a `form_submit` event.
#[derive(Clone, Debug, Serialize)]
pub struct FormEvent {
	form: &'static str,
	status: &'static str,
	timestamp: String,
}

impl FormEvent {
	/// Event for a successful submission of the named form.
	pub fn submitted(form: &'static str) -> FormEvent {
		FormEvent {
			form,
			status: "submitted",
			timestamp: now_iso(),
		}
	}
}

fn now_iso() -> String {
	Date::new_0().to_iso_string().into()
}

/// Hands an event to the page's analytics consumers.
///
/// The payload is serialized once and parsed into a JS object; the event
/// name is attached as an `event` field so `dataLayer` consumers can route
/// on it. Missing consumers are not an error.
pub fn dispatch(name: &str, payload: &impl Serialize) {
	let json = match serde_json::to_string(payload) {
		Ok(json) => json,
		Err(err) => {
			warn!("landingpro: could not serialize analytics event {}: {}", name, err);
			return;
		}
	};
	let Ok(object) = JSON::parse(&json) else {
		return;
	};
	let _ = Reflect::set(&object, &"event".into(), &name.into());

	let Some(window) = web_sys::window() else {
		return;
	};
	let mut delivered = false;
	if let Ok(layer) = Reflect::get(&window, &"dataLayer".into()) {
		if let Some(array) = layer.dyn_ref::<Array>() {
			array.push(&object);
			delivered = true;
		}
	}
	if let Ok(gtag) = Reflect::get(&window, &"gtag".into()) {
		if let Some(function) = gtag.dyn_ref::<Function>() {
			let _ = function.call3(&JsValue::NULL, &"event".into(), &name.into(), &object);
			delivered = true;
		}
	}
	if !delivered {
		debug!("landingpro: analytics event {} ({})", name, json);
	}
}

/// Wires a click handler onto every `[data-track="cta_click"]` element.
pub fn init() {
	let Some(document) = web_sys::window().and_then(|window| window.document()) else {
		return;
	};
	let Ok(nodes) = document.query_selector_all(r#"[data-track="cta_click"]"#) else {
		return;
	};
	for index in 0..nodes.length() {
		let Some(node) = nodes.item(index) else {
			continue;
		};
		let Ok(element) = node.dyn_into::<Element>() else {
			continue;
		};
		wire_cta(element);
	}
}

fn wire_cta(element: Element) {
	let clicked = element.clone();
	let on_click: Closure<dyn FnMut()> = Closure::new(move || {
		let event = CtaEvent {
			location: clicked.get_attribute("data-track-location"),
			kind: clicked.get_attribute("data-track-type"),
			label: cta_label(
				clicked.get_attribute("data-track-label"),
				clicked.text_content(),
			),
			plan: clicked.get_attribute("data-track-plan"),
			url: clicked.get_attribute("href"),
			timestamp: now_iso(),
		};
		dispatch("cta_click", &event);
	});
	let _ = element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
	// Listener lives for the page lifetime.
	on_click.forget();
}

/// Label for a CTA: the explicit attribute, else the element's trimmed text.
fn cta_label(attribute: Option<String>, text: Option<String>) -> Option<String> {
	attribute.or_else(|| text.map(|text| text.trim().to_string()))
}
