//! Leptos components for the landing page.

pub mod backdrop;
pub mod contact;
