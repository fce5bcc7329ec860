//! Animated particle backdrop for the hero section.
//!
//! Renders a field of drifting particles on an HTML canvas, with:
//! - Population density derived from the container area
//! - Per-frame physics with edge reflection
//! - Proximity lines between nearby particles, fading with distance
//! - A pause control honoring the reduced-motion preference
//!
//! The simulation itself (`particle`, `density`, `linker`, `scheduler`,
//! `state`) is plain Rust with no DOM types, so it is unit-tested natively;
//! `render` and `component` hold the canvas and event wiring.

mod component;
mod density;
mod linker;
mod particle;
mod render;
mod scheduler;
mod state;
pub mod theme;

pub use component::HeroBackdrop;
