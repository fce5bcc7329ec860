//! Population sizing from container area.

/// Surface area, in square pixels, allotted to each particle.
pub const DENSITY_DIVISOR: f64 = 15000.0;

/// Number of particles a container of the given size should hold.
///
/// Scales linearly with area and rounds down, so a 1920x1080 container gets
/// 138 particles and a very small container legitimately gets none. No lower
/// or upper clamp is applied.
pub fn target_count(width: f64, height: f64) -> usize {
	((width * height) / DENSITY_DIVISOR).floor() as usize
}
