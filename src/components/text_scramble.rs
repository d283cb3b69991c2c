//! Text that decodes itself through a flurry of random glyphs.
//!
//! Each character position gets a random start and end frame. Before its start
//! it shows the old character, between start and end it flickers through
//! random glyphs, and after its end it shows the new character. The animation
//! is complete once every position has reached its end frame.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use rand::distributions::Standard;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::components::frame::{AnimationFrames, FrameScheduler, host_seed};

/// Glyphs shown while a character is scrambling.
pub const SCRAMBLE_GLYPHS: &str = "!<>-_\\/[]{}—=+*^?#________";

/// Start frames and durations are drawn from `0..MAX_DELAY`.
const MAX_DELAY: u32 = 40;

/// Probability that a scrambling glyph is replaced on a given frame.
const FLICKER: f64 = 0.28;

#[derive(Clone, Debug)]
struct QueueEntry {
	from: Option<char>,
	to: Option<char>,
	start: u32,
	end: u32,
	glyph: Option<char>,
}

/// One character slot of a rendered frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
	/// Plain text: an old character not yet started, or a settled new one.
	Plain(char),
	/// A random glyph standing in for a character mid-transition.
	Scrambling(char),
}

/// Output of a single [`TextScramble::update`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrambleFrame {
	pub glyphs: Vec<Glyph>,
	/// Every position has settled on its new character.
	pub complete: bool,
}

fn escape_into(out: &mut String, c: char) {
	match c {
		'<' => out.push_str("&lt;"),
		'>' => out.push_str("&gt;"),
		'&' => out.push_str("&amp;"),
		'"' => out.push_str("&quot;"),
		_ => out.push(c),
	}
}

impl ScrambleFrame {
	/// Markup for the frame; scrambling glyphs are wrapped in `span.scramble-char`.
	pub fn to_html(&self) -> String {
		let mut out = String::with_capacity(self.glyphs.len());
		for glyph in &self.glyphs {
			match *glyph {
				Glyph::Plain(c) => escape_into(&mut out, c),
				Glyph::Scrambling(c) => {
					out.push_str("<span class=\"scramble-char\">");
					escape_into(&mut out, c);
					out.push_str("</span>");
				}
			}
		}
		out
	}

	/// The visible characters without markup.
	pub fn text(&self) -> String {
		self.glyphs
			.iter()
			.map(|g| match *g {
				Glyph::Plain(c) | Glyph::Scrambling(c) => c,
			})
			.collect()
	}
}

/// Frame-stepped scramble transition between two strings.
pub struct TextScramble {
	queue: Vec<QueueEntry>,
	frame: u32,
	glyphs: Vec<char>,
	rng: SmallRng,
}

impl TextScramble {
	pub fn new(seed: u64) -> Self {
		Self {
			queue: Vec::new(),
			frame: 0,
			glyphs: SCRAMBLE_GLYPHS.chars().collect(),
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	/// Begin a transition from `old` to `new`, discarding any in-flight one.
	pub fn set_text(&mut self, old: &str, new: &str) {
		let old: Vec<char> = old.chars().collect();
		let new: Vec<char> = new.chars().collect();
		let length = old.len().max(new.len());

		self.queue.clear();
		for i in 0..length {
			let start = self.rng.gen_range(0..MAX_DELAY);
			let end = start + self.rng.gen_range(0..MAX_DELAY);
			self.queue.push(QueueEntry {
				from: old.get(i).copied(),
				to: new.get(i).copied(),
				start,
				end,
				glyph: None,
			});
		}
		self.frame = 0;
	}

	fn random_glyph(&mut self) -> char {
		self.glyphs[self.rng.gen_range(0..self.glyphs.len())]
	}

	/// Render the current frame, then advance unless the transition is complete.
	pub fn update(&mut self) -> ScrambleFrame {
		let mut glyphs = Vec::with_capacity(self.queue.len());
		let mut complete = 0;

		for i in 0..self.queue.len() {
			let entry = &self.queue[i];
			if self.frame >= entry.end {
				complete += 1;
				glyphs.extend(entry.to.map(Glyph::Plain));
			} else if self.frame >= entry.start {
				let cached = self.queue[i].glyph;
				let glyph = match cached {
					Some(g) if self.rng.sample::<f64, _>(Standard) >= FLICKER => g,
					_ => self.random_glyph(),
				};
				self.queue[i].glyph = Some(glyph);
				glyphs.push(Glyph::Scrambling(glyph));
			} else {
				glyphs.extend(entry.from.map(Glyph::Plain));
			}
		}

		let complete = complete == self.queue.len();
		if !complete {
			self.frame += 1;
		}
		ScrambleFrame { glyphs, complete }
	}
}

/// Inline text that scrambles from `from` into `text` when mounted.
#[component]
pub fn ScrambleText(
	#[prop(into)] text: String,
	#[prop(into, optional)] from: String,
) -> impl IntoView {
	let html = RwSignal::new(ScrambleFrame {
		glyphs: from.chars().map(Glyph::Plain).collect(),
		complete: false,
	}
	.to_html());

	let scramble = Rc::new(RefCell::new(TextScramble::new(host_seed())));
	scramble.borrow_mut().set_text(&from, &text);

	let result = AnimationFrames.run(move || {
		let frame = scramble.borrow_mut().update();
		html.set(frame.to_html());
		if frame.complete {
			debug!("driftworks-effects: scramble settled on {:?}", frame.text());
			ControlFlow::Break(())
		} else {
			ControlFlow::Continue(())
		}
	});
	if let Err(e) = result {
		error!("driftworks-effects: scramble not started: {:#}", e);
		html.set(ScrambleFrame {
			glyphs: text.chars().map(Glyph::Plain).collect(),
			complete: true,
		}
		.to_html());
	}

	view! { <span class="scramble-text" inner_html=move || html.get() /> }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::frame::SteppedFrames;

	fn run_to_end(scramble: &mut TextScramble) -> (Vec<ScrambleFrame>, ScrambleFrame) {
		let mut frames = Vec::new();
		for _ in 0..(2 * MAX_DELAY + 1) {
			let frame = scramble.update();
			if frame.complete {
				return (frames, frame);
			}
			frames.push(frame);
		}
		panic!("scramble did not settle");
	}

	#[test]
	fn settles_on_the_new_text() {
		let mut scramble = TextScramble::new(17);
		scramble.set_text("Driftworks", "We build intuitive tools");
		let (_, last) = run_to_end(&mut scramble);
		assert_eq!(last.text(), "We build intuitive tools");
		assert!(last.glyphs.iter().all(|g| matches!(g, Glyph::Plain(_))));
	}

	#[test]
	fn shrinking_text_drops_trailing_characters() {
		let mut scramble = TextScramble::new(4);
		scramble.set_text("a longer headline", "short");
		let (_, last) = run_to_end(&mut scramble);
		assert_eq!(last.to_html(), "short");
	}

	#[test]
	fn scrambling_glyphs_come_from_the_glyph_set() {
		let mut scramble = TextScramble::new(99);
		scramble.set_text("", "accessible technology");
		let (frames, _) = run_to_end(&mut scramble);
		let scrambled: Vec<char> = frames
			.iter()
			.flat_map(|f| f.glyphs.iter())
			.filter_map(|g| match *g {
				Glyph::Scrambling(c) => Some(c),
				Glyph::Plain(_) => None,
			})
			.collect();
		assert!(!scrambled.is_empty());
		assert!(scrambled.iter().all(|c| SCRAMBLE_GLYPHS.contains(*c)));
	}

	#[test]
	fn empty_transition_is_immediately_complete() {
		let mut scramble = TextScramble::new(1);
		scramble.set_text("", "");
		let frame = scramble.update();
		assert!(frame.complete);
		assert!(frame.glyphs.is_empty());
	}

	#[test]
	fn set_text_restarts_the_transition() {
		let mut scramble = TextScramble::new(8);
		scramble.set_text("one", "two");
		scramble.update();
		scramble.update();
		scramble.set_text("two", "three");
		let (_, last) = run_to_end(&mut scramble);
		assert_eq!(last.text(), "three");
	}

	#[test]
	fn html_escapes_markup_characters() {
		let frame = ScrambleFrame {
			glyphs: vec![Glyph::Plain('a'), Glyph::Scrambling('<'), Glyph::Plain('&')],
			complete: false,
		};
		assert_eq!(
			frame.to_html(),
			"a<span class=\"scramble-char\">&lt;</span>&amp;"
		);
	}

	#[test]
	fn stepped_scheduler_drives_scramble_to_completion() {
		let scramble = Rc::new(RefCell::new(TextScramble::new(23)));
		scramble.borrow_mut().set_text("old", "new");
		let last = Rc::new(RefCell::new(None));
		let (driver, sink) = (scramble.clone(), last.clone());

		SteppedFrames::new(1_000)
			.run(move || {
				let frame = driver.borrow_mut().update();
				let done = frame.complete;
				*sink.borrow_mut() = Some(frame);
				if done {
					ControlFlow::Break(())
				} else {
					ControlFlow::Continue(())
				}
			})
			.unwrap();

		let last = last.borrow();
		let frame = last.as_ref().unwrap();
		assert!(frame.complete);
		assert_eq!(frame.text(), "new");
	}
}
