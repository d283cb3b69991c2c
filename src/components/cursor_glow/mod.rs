//! Soft glow that trails the pointer.
//!
//! The glow eases toward the last pointer position by a fixed fraction of the
//! remaining distance every frame, so it lags behind fast movements and
//! settles smoothly when the pointer stops.

mod component;

pub use component::CursorGlow;

/// Fraction of the remaining distance covered per frame.
pub const DEFAULT_FOLLOW: f64 = 0.1;

/// Exponentially smoothed follower of a moving target.
#[derive(Clone, Debug)]
pub struct GlowFollower {
	pub target: (f64, f64),
	pub current: (f64, f64),
	follow: f64,
}

impl GlowFollower {
	/// Start at the origin, aimed at the origin.
	pub fn new(follow: f64) -> Self {
		Self {
			target: (0.0, 0.0),
			current: (0.0, 0.0),
			follow,
		}
	}

	pub fn aim(&mut self, x: f64, y: f64) {
		self.target = (x, y);
	}

	/// Move one frame closer to the target and return the new position.
	pub fn tick(&mut self) -> (f64, f64) {
		self.current.0 += (self.target.0 - self.current.0) * self.follow;
		self.current.1 += (self.target.1 - self.current.1) * self.follow;
		self.current
	}
}

impl Default for GlowFollower {
	fn default() -> Self {
		Self::new(DEFAULT_FOLLOW)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_frame_covers_a_tenth() {
		let mut glow = GlowFollower::default();
		glow.aim(200.0, -100.0);
		assert_eq!(glow.tick(), (20.0, -10.0));
	}

	#[test]
	fn converges_on_a_still_target() {
		let mut glow = GlowFollower::default();
		glow.aim(640.0, 360.0);
		let mut last_gap = f64::INFINITY;
		for _ in 0..200 {
			let (x, y) = glow.tick();
			let gap = ((640.0 - x).powi(2) + (360.0 - y).powi(2)).sqrt();
			assert!(gap < last_gap);
			last_gap = gap;
		}
		assert!(last_gap < 1e-6);
	}

	#[test]
	fn retargeting_mid_flight_changes_direction() {
		let mut glow = GlowFollower::default();
		glow.aim(100.0, 0.0);
		glow.tick();
		glow.aim(0.0, 0.0);
		let (x, _) = glow.tick();
		assert!((x - 9.0).abs() < 1e-12);
	}
}
