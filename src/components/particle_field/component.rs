//! Leptos component wrapping the particle field canvas.
//!
//! The component sizes its canvas to the viewport, builds a [`ParticleField`],
//! and wires `resize` and `mousemove` listeners on the window. Frames are driven
//! by [`AnimationFrames`] for the lifetime of the page.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use anyhow::{Context, anyhow};
use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::FieldConfig;
use super::field::ParticleField;
use crate::components::frame::{AnimationFrames, FrameScheduler, host_seed};

type Listener<E> = Rc<RefCell<Option<Closure<dyn FnMut(E)>>>>;

/// Listeners kept alive for as long as the component's effect.
#[derive(Clone, Default)]
struct Listeners {
	resize: Listener<web_sys::Event>,
	pointer: Listener<MouseEvent>,
}

/// Full-viewport canvas of drifting particles that shy away from the pointer.
///
/// The canvas is fixed behind page content and ignores pointer events; movement
/// is tracked on the window instead.
#[component]
pub fn ParticleFieldCanvas(#[prop(optional)] config: FieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let listeners = Listeners::default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(e) = mount(canvas, config.clone(), &listeners) {
			error!("driftworks-effects: particle field disabled: {:#}", e);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 0;"
		/>
	}
}

fn viewport_size(window: &Window) -> anyhow::Result<(f64, f64)> {
	let width = window
		.inner_width()
		.map_err(|e| anyhow!("{:?}", e))?
		.as_f64()
		.context("innerWidth is not a number")?;
	let height = window
		.inner_height()
		.map_err(|e| anyhow!("{:?}", e))?
		.as_f64()
		.context("innerHeight is not a number")?;
	Ok((width, height))
}

fn context_2d(canvas: &HtmlCanvasElement) -> anyhow::Result<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.map_err(|e| anyhow!("getContext failed: {:?}", e))?
		.context("canvas has no 2d context")?
		.dyn_into()
		.map_err(|_| anyhow!("2d context has an unexpected type"))
}

fn mount(
	canvas: HtmlCanvasElement,
	config: FieldConfig,
	listeners: &Listeners,
) -> anyhow::Result<()> {
	let window = web_sys::window().context("no global window")?;
	let (w, h) = viewport_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let mut ctx = context_2d(&canvas)?;

	let seed = config.seed.unwrap_or_else(host_seed);
	let field = Rc::new(RefCell::new(ParticleField::new(config, w, h, seed)));
	info!(
		"driftworks-effects: particle field seeded with {} particles for {}x{}",
		field.borrow().particles().len(),
		w,
		h
	);

	let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
	*listeners.resize.borrow_mut() = Some(Closure::new(move |_: web_sys::Event| {
		let Some(win) = web_sys::window() else {
			return;
		};
		match viewport_size(&win) {
			Ok((nw, nh)) => {
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				field_resize.borrow_mut().resize(nw, nh);
			}
			Err(e) => error!("driftworks-effects: resize ignored: {:#}", e),
		}
	}));
	if let Some(ref cb) = *listeners.resize.borrow() {
		window
			.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
			.map_err(|e| anyhow!("resize listener: {:?}", e))?;
	}

	let (field_pointer, canvas_pointer) = (field.clone(), canvas);
	*listeners.pointer.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
		let rect = canvas_pointer.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		field_pointer.borrow_mut().pointer_moved(x, y);
	}));
	if let Some(ref cb) = *listeners.pointer.borrow() {
		window
			.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref())
			.map_err(|e| anyhow!("mousemove listener: {:?}", e))?;
	}

	AnimationFrames.run(move || {
		field.borrow_mut().run(&mut ctx);
		ControlFlow::Continue(())
	})
}
