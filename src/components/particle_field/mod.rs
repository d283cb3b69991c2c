//! Ambient particle field drawn behind the page.
//!
//! Renders a pool of drifting particles on a full-viewport canvas with:
//! - Anchors that wander slowly and bounce off the viewport edges
//! - Pointer repulsion scaled by per-particle density
//! - Translucent links between particles closer than a threshold
//! - Full pool regeneration whenever the viewport is resized
//!
//! The simulation ([`ParticleField`]) is independent of the browser: it draws
//! through the [`Surface`] trait and is stepped by whatever calls
//! [`ParticleField::run`], so it can be exercised frame by frame natively.
//!
//! # Example
//!
//! ```ignore
//! use driftworks_effects::{FieldConfig, ParticleFieldCanvas};
//!
//! view! { <ParticleFieldCanvas config=FieldConfig::default() /> }
//! ```

mod component;
pub mod config;
mod field;
mod particles;
pub mod render;
mod state;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use config::FieldConfig;
pub use field::ParticleField;
pub use particles::Particle;
pub use render::Surface;
pub use state::PointerState;
pub use theme::{Color, Theme};
