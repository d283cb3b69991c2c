//! Colors and visual style for the particle field.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Style of the lines joining nearby particles.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkStyle {
	/// Line color; alpha is replaced per line by the distance fade.
	pub color: Color,
	/// Opacity of a line between two coincident particles.
	pub max_opacity: f64,
	/// Stroke width in pixels.
	pub width: f64,
}

impl Default for LinkStyle {
	fn default() -> Self {
		Self {
			color: Color::rgb(0, 212, 255),
			max_opacity: 0.3,
			width: 0.5,
		}
	}
}

/// Complete visual theme for the field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
	/// Particle colors, each picked with equal probability.
	pub palette: Vec<Color>,
	pub link: LinkStyle,
}

impl Theme {
	/// Translucent cyan, purple, pink and white.
	pub fn driftworks() -> Self {
		Self {
			palette: vec![
				Color::rgba(0, 212, 255, 0.6),   // Cyan
				Color::rgba(168, 85, 247, 0.6),  // Purple
				Color::rgba(236, 72, 153, 0.4),  // Pink
				Color::rgba(255, 255, 255, 0.3), // White
			],
			link: LinkStyle::default(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::driftworks()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_uses_hex_when_opaque() {
		assert_eq!(Color::rgb(0, 212, 255).to_css(), "#00d4ff");
	}

	#[test]
	fn css_uses_rgba_when_translucent() {
		let c = Color::rgb(0, 212, 255).with_alpha(0.25);
		assert_eq!(c.to_css(), "rgba(0, 212, 255, 0.25)");
	}

	#[test]
	fn default_palette_has_four_translucent_colors() {
		let theme = Theme::default();
		assert_eq!(theme.palette.len(), 4);
		assert!(theme.palette.iter().all(|c| c.a < 1.0));
	}
}
