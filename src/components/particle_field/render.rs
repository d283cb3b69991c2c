//! Drawing the particle field onto a 2D surface.
//!
//! Rendering is split into two passes:
//! 1. Particle discs, in pool order
//! 2. Connection lines for every pair closer than the link distance
//!
//! The [`Surface`] trait keeps the draw calls independent of the browser so
//! frames can be recorded and inspected natively.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::Color;

/// The subset of a 2D canvas API the field draws with.
pub trait Surface {
	/// Erase a rectangle back to transparent.
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	fn set_fill_color(&mut self, color: Color);
	fn set_stroke_color(&mut self, color: Color);
	fn set_line_width(&mut self, width: f64);
	/// Fill a circle with the current fill color.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
	/// Stroke a straight segment with the current stroke color and width.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64));
}

impl Surface for CanvasRenderingContext2d {
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
	}

	fn set_fill_color(&mut self, color: Color) {
		self.set_fill_style_str(&color.to_css());
	}

	fn set_stroke_color(&mut self, color: Color) {
		self.set_stroke_style_str(&color.to_css());
	}

	fn set_line_width(&mut self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64)) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Opacity of the line joining two particles `distance` apart, if one is drawn.
pub fn link_opacity(distance: f64, link_distance: f64, max_opacity: f64) -> Option<f64> {
	(distance < link_distance).then(|| (1.0 - distance / link_distance) * max_opacity)
}

/// Renders a full frame of the field.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	surface.clear_rect(0.0, 0.0, field.width(), field.height());
	draw_particles(field, surface);
	draw_links(field, surface);
}

fn draw_particles<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	for p in field.particles() {
		surface.set_fill_color(p.color);
		surface.fill_circle(p.x, p.y, p.size);
	}
}

fn draw_links<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	let config = field.config();
	let link = &config.theme.link;
	let particles = field.particles();

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let distance = a.distance_to(b);
			let Some(opacity) = link_opacity(distance, config.link_distance, link.max_opacity)
			else {
				continue;
			};
			surface.set_stroke_color(link.color.with_alpha(opacity));
			surface.set_line_width(link.width);
			surface.stroke_line((a.x, a.y), (b.x, b.y));
		}
	}
}


#[cfg(test)]
mod tests {
	use super::recording::{DrawCall, RecordingSurface};
	use super::*;
	use crate::components::particle_field::FieldConfig;

	fn pair_at(distance: f64) -> ParticleField {
		let mut field = ParticleField::new(FieldConfig::default(), 400.0, 400.0, 1);
		field.place(&[(100.0, 100.0), (100.0 + distance, 100.0)]);
		field
	}

	#[test]
	fn link_opacity_fades_with_distance() {
		assert_eq!(link_opacity(0.0, 120.0, 0.3), Some(0.3));
		assert_eq!(link_opacity(120.0, 120.0, 0.3), None);
		let near_edge = link_opacity(119.0, 120.0, 0.3).unwrap();
		assert!((near_edge - 0.0025).abs() < 1e-9);
	}

	#[test]
	fn frame_starts_with_full_clear() {
		let field = pair_at(50.0);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface);
		assert_eq!(
			surface.calls.first(),
			Some(&DrawCall::Clear {
				width: 400.0,
				height: 400.0
			})
		);
		assert_eq!(surface.circles().len(), 2);
	}

	#[test]
	fn close_pair_is_linked_with_faded_cyan() {
		let field = pair_at(119.0);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface);

		let lines = surface.lines();
		assert_eq!(lines.len(), 1);
		let DrawCall::Line { from, to, color, width } = lines[0] else {
			unreachable!();
		};
		assert_eq!((*from, *to), ((100.0, 100.0), (219.0, 100.0)));
		assert_eq!((color.r, color.g, color.b), (0, 212, 255));
		assert!((color.a - 0.0025).abs() < 1e-9);
		assert_eq!(*width, 0.5);
	}

	#[test]
	fn distant_pair_is_not_linked() {
		let field = pair_at(121.0);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface);
		assert!(surface.lines().is_empty());
	}

	#[test]
	fn every_close_pair_is_linked_once() {
		let mut field = ParticleField::new(FieldConfig::default(), 400.0, 400.0, 1);
		field.place(&[(10.0, 10.0), (20.0, 10.0), (30.0, 10.0), (390.0, 390.0)]);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface);
		assert_eq!(surface.lines().len(), 3);
	}
}
