//! The particle field: pool ownership, pointer state and the per-frame tick.

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::FieldConfig;
use super::particles::Particle;
use super::render::{self, Surface};
use super::state::PointerState;

/// A pool of ambient particles sized to a drawing surface.
///
/// Created once when the canvas mounts. The browser loop calls [`run`](Self::run)
/// every display frame; resize and pointer handlers mutate the field between
/// frames.
pub struct ParticleField {
	particles: Vec<Particle>,
	pointer: PointerState,
	config: FieldConfig,
	rng: SmallRng,
	width: f64,
	height: f64,
	next_id: u64,
}

impl ParticleField {
	/// Build a field for a `width` x `height` surface, drawing randomness from `seed`.
	pub fn new(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			pointer: PointerState::new(config.repulsion_radius),
			rng: SmallRng::seed_from_u64(seed),
			config,
			width,
			height,
			next_id: 0,
		};
		field.populate();
		field
	}

	/// Replace the whole pool with fresh particles for the current size.
	fn populate(&mut self) {
		let count = self.config.particle_count(self.width, self.height);
		self.particles.clear();
		self.particles.reserve(count);

		for _ in 0..count {
			let particle = Particle::random(
				self.next_id,
				&mut self.rng,
				self.width,
				self.height,
				&self.config,
			);
			self.next_id += 1;
			self.particles.push(particle);
		}
	}

	/// Resize the surface and regenerate every particle from scratch.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.populate();
		debug!(
			"driftworks-effects: particle field resized to {}x{}, {} particles",
			width,
			height,
			self.particles.len()
		);
	}

	/// Record the latest pointer position in surface coordinates.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer.move_to(x, y);
	}

	/// Advance every particle by one frame.
	pub fn update(&mut self) {
		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			p.update(&self.pointer, width, height, &self.config);
		}
	}

	/// Draw the current frame onto `surface`.
	pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
		render::render(self, surface);
	}

	/// One display tick: update, then render.
	pub fn run<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		self.update();
		self.render(surface);
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn pointer(&self) -> &PointerState {
		&self.pointer
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Replace the pool with motionless particles at fixed positions.
	#[cfg(test)]
	pub(crate) fn place(&mut self, positions: &[(f64, f64)]) {
		self.particles = positions
			.iter()
			.map(|&(x, y)| {
				let mut p = Particle::random(self.next_id, &mut self.rng, 1.0, 1.0, &self.config);
				self.next_id += 1;
				(p.x, p.y, p.base_x, p.base_y) = (x, y, x, y);
				(p.vx, p.vy) = (0.0, 0.0);
				p
			})
			.collect();
	}
}
