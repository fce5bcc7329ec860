//! Fixed visual constants for the backdrop.
//!
//! Values are part of the page's visual identity and are kept verbatim,
//! including the exact CSS string forms the canvas receives.

/// Hero background, a dark deep blue. Painted by the page behind the canvas.
pub const BACKGROUND: &str = "#0B1120";

/// Base particle color, a translucent cyan.
pub const PARTICLE_BASE: &str = "rgba(6, 182, 212, 0.7)";

/// Accent particle color, a green highlight.
pub const PARTICLE_ACCENT: &str = "#10b981";

/// Font for glyph particles.
pub const GLYPH_FONT: &str = "12px monospace";

/// Stroke width for connection lines.
pub const LINE_WIDTH: f64 = 1.0;

/// Connection line color at the given opacity.
pub fn line_color(opacity: f64) -> String {
	format!("rgba(6, 182, 212, {})", opacity)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_line_color_embeds_opacity() {
		assert_eq!(line_color(0.1), "rgba(6, 182, 212, 0.1)");
		assert_eq!(line_color(0.2), "rgba(6, 182, 212, 0.2)");
	}
}
