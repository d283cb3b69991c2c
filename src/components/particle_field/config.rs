//! Tunable constants for the particle field.
//!
//! Every field has a default matching the shipped site, so a page may supply
//! a partial JSON object and only override what it needs.

use serde::Deserialize;

use super::theme::Theme;

/// Physics, population and theme settings for a [`ParticleField`](super::ParticleField).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Canvas area (px²) allotted to each particle.
	pub area_per_particle: f64,
	/// Upper bound on the pool size regardless of viewport area.
	pub max_particles: usize,
	/// Pointer influence radius in pixels.
	pub repulsion_radius: f64,
	/// Scale applied to `force * density` when displacing from the pointer.
	pub repulsion_strength: f64,
	/// Fraction of the offset to the base position recovered per frame.
	pub drift_back: f64,
	/// Pair distance below which a connecting line is drawn.
	pub link_distance: f64,
	/// Particle radius range `[min, max)`.
	pub size: (f64, f64),
	/// Repulsion multiplier range `[min, max)`.
	pub density: (f64, f64),
	/// Per-axis base velocity is drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	/// Fixed RNG seed; a fresh one is drawn at mount when absent.
	pub seed: Option<u64>,
	pub theme: Theme,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			area_per_particle: 15_000.0,
			max_particles: 150,
			repulsion_radius: 150.0,
			repulsion_strength: 0.5,
			drift_back: 0.02,
			link_distance: 120.0,
			size: (0.5, 2.5),
			density: (1.0, 31.0),
			max_speed: 0.25,
			seed: None,
			theme: Theme::default(),
		}
	}
}

impl FieldConfig {
	/// Number of particles for a surface of the given size.
	///
	/// Fractional counts round up: a 16 000 px² viewport gets two particles.
	pub fn particle_count(&self, width: f64, height: f64) -> usize {
		let area = (width * height).max(0.0);
		let cap = self.max_particles as f64;
		(area / self.area_per_particle).min(cap).ceil() as usize
	}
}
