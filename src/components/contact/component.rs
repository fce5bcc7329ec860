//! Leptos component for the contact form.
//!
//! Values live in signals; each field validates on every input event and on
//! blur, so errors surface while typing and clear as soon as the value is
//! fixed. Submission never hits the network: a valid form opens the
//! visitor's mail client through a `mailto:` URL.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};

use super::rules::{self, Invalid};
use crate::tracking;

/// Recipient of the composed message.
const CONTACT_ADDRESS: &str = "hello@landingpro.dev";

fn mailto_url(name: &str, email: &str, message: &str) -> String {
	let subject = format!("LandingPro inquiry from {}", name);
	let body = format!("Name: {}\nEmail: {}\n\n{}", name, email, message);
	format!(
		"mailto:{}?subject={}&body={}",
		CONTACT_ADDRESS,
		js_sys::encode_uri_component(&subject),
		js_sys::encode_uri_component(&body),
	)
}

/// Contact form with live field validation and `mailto:` submission.
///
/// Validation outcomes surface twice: inline next to the field, and in the
/// polite live region below the form for screen readers.
#[component]
pub fn ContactForm() -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let name_error: RwSignal<Option<Invalid>> = RwSignal::new(None);
	let email_error: RwSignal<Option<Invalid>> = RwSignal::new(None);
	let message_error: RwSignal<Option<Invalid>> = RwSignal::new(None);
	let status = RwSignal::new(String::new());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();

		let (n, e, m) = (name.get(), email.get(), message.get());
		let name_check = rules::check_name(&n);
		let email_check = rules::check_email(&e);
		let message_check = rules::check_message(&m);
		name_error.set(name_check.err());
		email_error.set(email_check.err());
		message_error.set(message_check.err());

		if name_check.is_err() || email_check.is_err() || message_check.is_err() {
			status.set("Please fix the highlighted fields.".to_string());
			return;
		}

		tracking::dispatch("form_submit", &tracking::FormEvent::submitted("contact"));
		let url = mailto_url(n.trim(), e.trim(), m.trim());
		if let Some(window) = web_sys::window() {
			let _ = window.location().set_href(&url);
		}

		status.set("Opening your email client...".to_string());
		name.set(String::new());
		email.set(String::new());
		message.set(String::new());
	};

	view! {
		<form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
			<div class="form-field">
				<label for="contact-name">"Name"</label>
				<input
					id="contact-name"
					name="name"
					type="text"
					autocomplete="name"
					prop:value=move || name.get()
					aria-invalid=move || if name_error.get().is_some() { "true" } else { "false" }
					on:input=move |ev| {
						if let Some(input) = ev
							.target()
							.and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
						{
							let value = input.value();
							name_error.set(rules::check_name(&value).err());
							name.set(value);
						}
					}
					on:blur=move |_| name_error.set(rules::check_name(&name.get()).err())
				/>
				<p class="field-error">{move || name_error.get().map(Invalid::message)}</p>
			</div>

			<div class="form-field">
				<label for="contact-email">"Email"</label>
				<input
					id="contact-email"
					name="email"
					type="email"
					autocomplete="email"
					prop:value=move || email.get()
					aria-invalid=move || if email_error.get().is_some() { "true" } else { "false" }
					on:input=move |ev| {
						if let Some(input) = ev
							.target()
							.and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
						{
							let value = input.value();
							email_error.set(rules::check_email(&value).err());
							email.set(value);
						}
					}
					on:blur=move |_| email_error.set(rules::check_email(&email.get()).err())
				/>
				<p class="field-error">{move || email_error.get().map(Invalid::message)}</p>
			</div>

			<div class="form-field">
				<label for="contact-message">"Message"</label>
				<textarea
					id="contact-message"
					name="message"
					rows="6"
					prop:value=move || message.get()
					aria-invalid=move || if message_error.get().is_some() { "true" } else { "false" }
					on:input=move |ev| {
						if let Some(area) = ev
							.target()
							.and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
						{
							let value = area.value();
							message_error.set(rules::check_message(&value).err());
							message.set(value);
						}
					}
					on:blur=move |_| message_error.set(rules::check_message(&message.get()).err())
				></textarea>
				<p class="field-error">{move || message_error.get().map(Invalid::message)}</p>
			</div>

			<button type="submit" class="cta">"Send message"</button>
			<p id="form-status" class="form-status" role="status" aria-live="polite">
				{move || status.get()}
			</p>
		</form>
	}
}
