//! Display-sync frame scheduling shared by every effect.
//!
//! Effects never call `requestAnimationFrame` themselves. They hand a frame
//! callback to a [`FrameScheduler`], which decides when (and how often) it
//! runs. The browser uses [`AnimationFrames`]; headless code and tests use
//! [`SteppedFrames`] to drive a fixed number of frames synchronously.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use anyhow::{Context, anyhow};
use wasm_bindgen::prelude::*;

/// Drives a frame callback until it returns [`ControlFlow::Break`].
pub trait FrameScheduler {
	/// Start calling `frame` once per frame.
	///
	/// Errors only if the host refuses to schedule the first frame.
	fn run<F>(self, frame: F) -> anyhow::Result<()>
	where
		F: FnMut() -> ControlFlow<()> + 'static;
}

/// Schedules frames with `window.requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
	fn run<F>(self, mut frame: F) -> anyhow::Result<()>
	where
		F: FnMut() -> ControlFlow<()> + 'static,
	{
		let window = web_sys::window().context("no global window")?;
		let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let callback_inner = callback.clone();

		*callback.borrow_mut() = Some(Closure::new(move || {
			if frame().is_break() {
				// wasm-bindgen defers freeing a closure dropped mid-call.
				callback_inner.borrow_mut().take();
				return;
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), callback_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			window
				.request_animation_frame(cb.as_ref().unchecked_ref())
				.map_err(|e| anyhow!("requestAnimationFrame failed: {:?}", e))?;
		}
		Ok(())
	}
}

/// Runs up to a fixed number of frames immediately, on the calling thread.
#[derive(Clone, Copy, Debug)]
pub struct SteppedFrames {
	frames: u32,
}

impl SteppedFrames {
	pub fn new(frames: u32) -> Self {
		Self { frames }
	}
}

impl FrameScheduler for SteppedFrames {
	fn run<F>(self, mut frame: F) -> anyhow::Result<()>
	where
		F: FnMut() -> ControlFlow<()> + 'static,
	{
		for _ in 0..self.frames {
			if frame().is_break() {
				break;
			}
		}
		Ok(())
	}
}

/// A fresh 64-bit seed from the host's `Math.random`.
pub fn host_seed() -> u64 {
	let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
	(hi << 32) | lo
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	#[test]
	fn stepped_frames_run_exactly_n_times() {
		let count = Rc::new(Cell::new(0));
		let counter = count.clone();
		SteppedFrames::new(7)
			.run(move || {
				counter.set(counter.get() + 1);
				ControlFlow::Continue(())
			})
			.unwrap();
		assert_eq!(count.get(), 7);
	}

	#[test]
	fn stepped_frames_stop_on_break() {
		let count = Rc::new(Cell::new(0));
		let counter = count.clone();
		SteppedFrames::new(100)
			.run(move || {
				counter.set(counter.get() + 1);
				if counter.get() == 3 {
					ControlFlow::Break(())
				} else {
					ControlFlow::Continue(())
				}
			})
			.unwrap();
		assert_eq!(count.get(), 3);
	}
}
