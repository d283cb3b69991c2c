//! driftworks-effects: client-side visual effects for the Driftworks site.
//!
//! This crate provides WASM components for the site's ambient particle field,
//! a pointer-trailing cursor glow, and a text scramble transition.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::cursor_glow::CursorGlow;
pub use components::frame::{AnimationFrames, FrameScheduler, SteppedFrames};
pub use components::particle_field::{FieldConfig, ParticleField, ParticleFieldCanvas, Surface};
pub use components::text_scramble::{ScrambleText, TextScramble};

/// Styles the effects rely on that are not part of the site stylesheet.
const EFFECTS_CSS: &str = "
.scramble-char { color: var(--accent-cyan); }
.cursor-glow { position: fixed; pointer-events: none; transform: translate(-50%, -50%); }
";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("driftworks-effects: logging initialized");
}

/// Load field overrides from a script element with id="effects-config".
/// Expected format: a JSON object with any subset of [`FieldConfig`] fields.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("effects-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!(
				"driftworks-effects: loaded config (max {} particles)",
				config.max_particles
			);
			Some(config)
		}
		Err(e) => {
			warn!("driftworks-effects: failed to parse effects config: {}", e);
			None
		}
	}
}

/// Root component: the particle background and the cursor glow.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Style>{EFFECTS_CSS}</Style>
		<ParticleFieldCanvas config=config />
		<CursorGlow />
	}
}
