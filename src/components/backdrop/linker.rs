//! Proximity connections between particle pairs.
//!
//! Every unordered pair is examined once per frame, so this is O(n^2) in the
//! population. The density divisor keeps n in the low hundreds at realistic
//! container sizes, cheap enough per frame that a spatial index would only
//! pay off far beyond that.

use super::particle::Particle;

/// Maximum distance, in pixels, at which two particles are linked.
pub const CONNECTION_DISTANCE: f64 = 150.0;

/// Scale applied to the distance falloff, capping line opacity.
pub const LINE_OPACITY_SCALE: f64 = 0.2;

/// A line-draw instruction between two particle positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub from: (f64, f64),
	pub to: (f64, f64),
	/// Stroke opacity, falling linearly from [`LINE_OPACITY_SCALE`] at zero
	/// distance to 0 at the threshold.
	pub opacity: f64,
}

/// Collects a connection for every pair closer than `threshold`.
pub fn link_all(particles: &[Particle], threshold: f64) -> Vec<Connection> {
	let mut connections = Vec::new();
	for i in 0..particles.len() {
		for j in (i + 1)..particles.len() {
			let (a, b) = (&particles[i], &particles[j]);
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance < threshold {
				connections.push(Connection {
					from: (a.x, a.y),
					to: (b.x, b.y),
					opacity: (1.0 - distance / threshold) * LINE_OPACITY_SCALE,
				});
			}
		}
	}
	connections
}

#[cfg(test)]
mod tests {
	use super::super::particle::{Shape, Tint};
	use super::*;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
			shape: Shape::Disc,
			tint: Tint::Base,
		}
	}

	#[test]
	fn test_pair_within_threshold_connects() {
		let connections = link_all(&[at(0.0, 0.0), at(75.0, 0.0)], CONNECTION_DISTANCE);
		assert_eq!(connections.len(), 1);
		assert_eq!(connections[0].from, (0.0, 0.0));
		assert_eq!(connections[0].to, (75.0, 0.0));
		assert!((connections[0].opacity - 0.1).abs() < 1e-12);
	}

	#[test]
	fn test_pair_at_threshold_is_excluded() {
		let exact = link_all(&[at(0.0, 0.0), at(150.0, 0.0)], CONNECTION_DISTANCE);
		assert!(exact.is_empty());

		let beyond = link_all(&[at(0.0, 0.0), at(151.0, 0.0)], CONNECTION_DISTANCE);
		assert!(beyond.is_empty());
	}

	#[test]
	fn test_every_unordered_pair_considered_once() {
		let cluster = [at(0.0, 0.0), at(10.0, 0.0), at(0.0, 10.0), at(10.0, 10.0)];
		// 4 particles in range of each other: 4 * 3 / 2 pairs.
		assert_eq!(link_all(&cluster, CONNECTION_DISTANCE).len(), 6);
	}

	#[test]
	fn test_opacity_falls_with_distance() {
		let near = link_all(&[at(0.0, 0.0), at(30.0, 0.0)], CONNECTION_DISTANCE);
		let far = link_all(&[at(0.0, 0.0), at(120.0, 0.0)], CONNECTION_DISTANCE);
		assert!((near[0].opacity - 0.16).abs() < 1e-12);
		assert!((far[0].opacity - 0.04).abs() < 1e-12);
		assert!(near[0].opacity > far[0].opacity);
	}

	#[test]
	fn test_coincident_particles_hit_the_opacity_cap() {
		let connections = link_all(&[at(40.0, 40.0), at(40.0, 40.0)], CONNECTION_DISTANCE);
		assert_eq!(connections.len(), 1);
		assert!((connections[0].opacity - LINE_OPACITY_SCALE).abs() < 1e-12);
	}

	#[test]
	fn test_isolated_particles_produce_no_connections() {
		let sparse = [at(0.0, 0.0), at(400.0, 0.0), at(0.0, 400.0)];
		assert!(link_all(&sparse, CONNECTION_DISTANCE).is_empty());
		assert!(link_all(&[], CONNECTION_DISTANCE).is_empty());
	}
}
