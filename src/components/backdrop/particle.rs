//! Particle entities and their per-tick physics.

use rand::Rng;

/// Velocity scale: each component is drawn uniformly from
/// `[-BASE_SPEED / 2, BASE_SPEED / 2)` pixels per frame.
pub const BASE_SPEED: f64 = 0.5;

/// Share of particles rendered as a binary digit instead of a disc.
pub const GLYPH_PROBABILITY: f64 = 0.2;

/// Share of particles tinted with the accent color.
pub const ACCENT_PROBABILITY: f64 = 0.1;

/// How a particle is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	/// Filled circle of the particle's radius.
	Disc,
	/// A single monospace character (`'0'` or `'1'`).
	Glyph(char),
}

/// Which theme color a particle uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
	Base,
	Accent,
}

/// A single drifting point in the backdrop.
///
/// `shape` and `tint` are fixed at spawn time; position and velocity are
/// mutated every tick by [`step`].
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub shape: Shape,
	pub tint: Tint,
}

/// Creates one particle at a uniformly random position within the bounds.
pub fn spawn(rng: &mut impl Rng, width: f64, height: f64) -> Particle {
	let shape = if rng.random_bool(GLYPH_PROBABILITY) {
		Shape::Glyph(if rng.random_bool(0.5) { '1' } else { '0' })
	} else {
		Shape::Disc
	};
	let tint = if rng.random_bool(ACCENT_PROBABILITY) {
		Tint::Accent
	} else {
		Tint::Base
	};

	Particle {
		x: rng.random::<f64>() * width,
		y: rng.random::<f64>() * height,
		vx: (rng.random::<f64>() - 0.5) * BASE_SPEED,
		vy: (rng.random::<f64>() - 0.5) * BASE_SPEED,
		radius: rng.random::<f64>() * 2.0 + 1.0,
		shape,
		tint,
	}
}

/// Creates a whole population of `count` particles.
pub fn spawn_population(rng: &mut impl Rng, count: usize, width: f64, height: f64) -> Vec<Particle> {
	(0..count).map(|_| spawn(rng, width, height)).collect()
}

/// Advances one particle by one frame.
///
/// Adds velocity to position, then reflects the velocity of any axis whose
/// position left the bounds. The position itself is not pulled back, so a
/// particle sits past the edge for exactly one frame after crossing; the next
/// tick carries it inward again.
pub fn step(particle: &mut Particle, width: f64, height: f64) {
	particle.x += particle.vx;
	particle.y += particle.vy;

	if particle.x < 0.0 || particle.x > width {
		particle.vx = -particle.vx;
	}
	if particle.y < 0.0 || particle.y > height {
		particle.vy = -particle.vy;
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand_pcg::Pcg32;

	use super::*;

	fn rng() -> Pcg32 {
		Pcg32::seed_from_u64(7)
	}

	fn disc_at(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			radius: 1.5,
			shape: Shape::Disc,
			tint: Tint::Base,
		}
	}

	#[test]
	fn test_spawn_within_bounds() {
		let mut rng = rng();
		for _ in 0..500 {
			let p = spawn(&mut rng, 800.0, 600.0);
			assert!(p.x >= 0.0 && p.x <= 800.0);
			assert!(p.y >= 0.0 && p.y <= 600.0);
			assert!(p.radius >= 1.0 && p.radius < 3.0);
			assert!(p.vx >= -0.25 && p.vx <= 0.25);
			assert!(p.vy >= -0.25 && p.vy <= 0.25);
		}
	}

	#[test]
	fn test_spawn_variant_mix() {
		let mut rng = rng();
		let population = spawn_population(&mut rng, 10_000, 100.0, 100.0);
		assert_eq!(population.len(), 10_000);

		let glyphs = population
			.iter()
			.filter(|p| matches!(p.shape, Shape::Glyph(_)))
			.count();
		let accents = population.iter().filter(|p| p.tint == Tint::Accent).count();

		let glyph_share = glyphs as f64 / 10_000.0;
		let accent_share = accents as f64 / 10_000.0;
		assert!(
			(glyph_share - GLYPH_PROBABILITY).abs() < 0.02,
			"glyph share {}",
			glyph_share
		);
		assert!(
			(accent_share - ACCENT_PROBABILITY).abs() < 0.02,
			"accent share {}",
			accent_share
		);
	}

	#[test]
	fn test_glyph_characters_are_binary() {
		let mut rng = rng();
		let mut seen_zero = false;
		let mut seen_one = false;
		for p in spawn_population(&mut rng, 2_000, 50.0, 50.0) {
			if let Shape::Glyph(ch) = p.shape {
				assert!(ch == '0' || ch == '1', "unexpected glyph {:?}", ch);
				seen_zero |= ch == '0';
				seen_one |= ch == '1';
			}
		}
		assert!(seen_zero && seen_one);
	}

	#[test]
	fn test_step_adds_velocity() {
		let mut p = disc_at(10.0, 20.0, 0.25, -0.125);
		step(&mut p, 100.0, 100.0);
		assert_eq!(p.x, 10.25);
		assert_eq!(p.y, 19.875);
		assert_eq!(p.vx, 0.25);
		assert_eq!(p.vy, -0.125);
	}

	#[test]
	fn test_step_reflects_velocity_at_high_edge() {
		let mut p = disc_at(99.9, 50.0, 0.25, 0.0);
		step(&mut p, 100.0, 100.0);
		// Overshoot is kept for one frame; only the velocity flips.
		assert!(p.x > 100.0);
		assert_eq!(p.vx, -0.25);

		step(&mut p, 100.0, 100.0);
		assert!(p.x < 100.0);
		assert_eq!(p.vx, -0.25);
	}

	#[test]
	fn test_step_reflects_velocity_at_low_edge() {
		let mut p = disc_at(0.1, 50.0, -0.25, 0.0);
		step(&mut p, 100.0, 100.0);
		assert!(p.x < 0.0);
		assert_eq!(p.vx, 0.25);
	}

	#[test]
	fn test_landing_exactly_on_edge_does_not_reflect() {
		let mut p = disc_at(99.75, 50.0, 0.25, 0.0);
		step(&mut p, 100.0, 100.0);
		assert_eq!(p.x, 100.0);
		assert_eq!(p.vx, 0.25);
	}

	#[test]
	fn test_axes_reflect_independently() {
		let mut p = disc_at(99.9, 0.05, 0.25, -0.25);
		step(&mut p, 100.0, 100.0);
		assert_eq!(p.vx, -0.25);
		assert_eq!(p.vy, 0.25);
	}
}
