//! Pointer tracking for the particle field.

/// Last known pointer position and the radius it influences.
///
/// Written only by the pointer-move handler; the update pass reads it.
#[derive(Clone, Debug)]
pub struct PointerState {
	/// `None` until the first pointer movement.
	pub position: Option<(f64, f64)>,
	/// Distance within which particles are pushed away.
	pub radius: f64,
}

impl PointerState {
	pub fn new(radius: f64) -> Self {
		Self {
			position: None,
			radius,
		}
	}

	/// Record a pointer move. Later moves overwrite earlier ones.
	pub fn move_to(&mut self, x: f64, y: f64) {
		self.position = Some((x, y));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn absent_until_first_move() {
		let mut pointer = PointerState::new(150.0);
		assert!(pointer.position.is_none());
		pointer.move_to(10.0, 20.0);
		pointer.move_to(30.0, 40.0);
		assert_eq!(pointer.position, Some((30.0, 40.0)));
	}
}
