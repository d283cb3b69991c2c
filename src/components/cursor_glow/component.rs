//! Leptos component for the pointer-trailing glow.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use anyhow::{Context, anyhow};
use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use super::{DEFAULT_FOLLOW, GlowFollower};
use crate::components::frame::{AnimationFrames, FrameScheduler};

/// Touch-first devices have no hovering pointer to follow.
fn is_touch_device() -> bool {
	web_sys::window()
		.map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("ontouchstart")).unwrap_or(false))
		.unwrap_or(false)
}

/// Fixed-position glow element that eases toward the pointer each frame.
///
/// Hidden, with no animation loop, on touch devices.
#[component]
pub fn CursorGlow(#[prop(default = DEFAULT_FOLLOW)] follow: f64) -> impl IntoView {
	let position = RwSignal::new((0.0_f64, 0.0_f64));
	let hidden = is_touch_device();

	if hidden {
		debug!("driftworks-effects: touch device, cursor glow disabled");
	} else if let Err(e) = start(follow, position) {
		error!("driftworks-effects: cursor glow disabled: {:#}", e);
	}

	view! {
		<div
			class="cursor-glow"
			style:display=if hidden { "none" } else { "block" }
			style:left=move || format!("{}px", position.get().0)
			style:top=move || format!("{}px", position.get().1)
		/>
	}
}

fn start(follow: f64, position: RwSignal<(f64, f64)>) -> anyhow::Result<()> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.context("no document")?;
	let follower = Rc::new(RefCell::new(GlowFollower::new(follow)));

	let follower_move = follower.clone();
	let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
		follower_move
			.borrow_mut()
			.aim(ev.client_x() as f64, ev.client_y() as f64);
	});
	document
		.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
		.map_err(|e| anyhow!("mousemove listener: {:?}", e))?;
	// Lives as long as the page.
	on_move.forget();

	AnimationFrames.run(move || {
		position.set(follower.borrow_mut().tick());
		ControlFlow::Continue(())
	})
}
