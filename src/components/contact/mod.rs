//! Contact form with inline validation and `mailto:` submission.

mod component;
mod rules;

pub use component::ContactForm;
