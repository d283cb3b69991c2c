//! Ambient particles that drift around a wandering anchor and flee the pointer.

use rand::Rng;
use rand::distributions::Standard;

use super::config::FieldConfig;
use super::state::PointerState;
use super::theme::Color;

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Identity within the owning field; never reused.
	pub id: u64,
	pub x: f64,
	pub y: f64,
	/// Anchor the particle is pulled back toward.
	pub base_x: f64,
	pub base_y: f64,
	/// Anchor velocity per frame.
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	/// Repulsion multiplier; denser particles are pushed further.
	pub density: f64,
	pub color: Color,
}

/// Uniform sample from `[lo, hi)`; degenerate ranges collapse to `lo`.
fn sample_range<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
	let t: f64 = rng.sample(Standard);
	lo + t * (hi - lo)
}

impl Particle {
	/// Spawn a particle at a random spot of a `width` x `height` surface.
	pub fn random<R: Rng>(
		id: u64,
		rng: &mut R,
		width: f64,
		height: f64,
		config: &FieldConfig,
	) -> Self {
		let x = sample_range(rng, (0.0, width));
		let y = sample_range(rng, (0.0, height));
		let size = sample_range(rng, config.size);
		let density = sample_range(rng, config.density);
		let speed = (-config.max_speed, config.max_speed);
		let vx = sample_range(rng, speed);
		let vy = sample_range(rng, speed);
		let palette = &config.theme.palette;
		let color = if palette.is_empty() {
			Color::rgba(255, 255, 255, 0.3)
		} else {
			palette[rng.gen_range(0..palette.len())]
		};

		Self {
			id,
			x,
			y,
			base_x: x,
			base_y: y,
			vx,
			vy,
			size,
			density,
			color,
		}
	}

	/// Advance one frame: pointer repulsion, drift back, anchor motion, edge bounce.
	pub fn update(
		&mut self,
		pointer: &PointerState,
		width: f64,
		height: f64,
		config: &FieldConfig,
	) {
		if let Some((mx, my)) = pointer.position {
			let (dx, dy) = (mx - self.x, my - self.y);
			let distance = (dx * dx + dy * dy).sqrt();

			// Zero distance has no direction to push along.
			if distance > 0.0 && distance < pointer.radius {
				let force = (pointer.radius - distance) / pointer.radius;
				let push = force * self.density * config.repulsion_strength;
				self.x -= dx / distance * push;
				self.y -= dy / distance * push;
			}
		}

		self.x += (self.base_x - self.x) * config.drift_back;
		self.y += (self.base_y - self.y) * config.drift_back;

		self.base_x += self.vx;
		self.base_y += self.vy;

		if self.base_x < 0.0 || self.base_x > width {
			self.vx = -self.vx;
		}
		if self.base_y < 0.0 || self.base_y > height {
			self.vy = -self.vy;
		}
	}

	/// Euclidean distance between the rendered positions of two particles.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}
