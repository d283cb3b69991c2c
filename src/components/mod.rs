//! Visual effects mounted on the site.

pub mod cursor_glow;
pub mod frame;
pub mod particle_field;
pub mod text_scramble;
