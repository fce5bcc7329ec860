//! Owned simulation state for the backdrop.

use rand::Rng;

use super::density;
use super::particle::{self, Particle};
use super::scheduler::MotionController;

/// The whole simulation: viewport bounds, population, and motion state.
///
/// Created once when the component mounts, then mutated in place by the
/// frame loop and the resize handler. The caller supplies the random source
/// so native tests can seed it.
pub struct SimState {
	pub width: f64,
	pub height: f64,
	/// Population size the current bounds call for; `particles` holds
	/// exactly this many after construction or resize.
	pub target_count: usize,
	pub particles: Vec<Particle>,
	pub motion: MotionController,
}

impl SimState {
	pub fn new(width: f64, height: f64, reduced_motion: bool, rng: &mut impl Rng) -> Self {
		let target_count = density::target_count(width, height);
		Self {
			width,
			height,
			target_count,
			particles: particle::spawn_population(rng, target_count, width, height),
			motion: MotionController::new(reduced_motion),
		}
	}

	/// Adopts new bounds and regenerates the whole population for them.
	///
	/// Old particles are discarded rather than rescaled, so a resize never
	/// leaves stale positions outside the new bounds. Motion state carries
	/// over untouched.
	pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
		self.width = width;
		self.height = height;
		self.target_count = density::target_count(width, height);
		self.particles = particle::spawn_population(rng, self.target_count, width, height);
	}

	/// Advances every particle by one frame.
	pub fn step_all(&mut self) {
		for p in &mut self.particles {
			particle::step(p, self.width, self.height);
		}
	}
}
