//! LISON engine crate.
//!
//! Turns a decoded [`lison_format::Image`] into an ordered stream of calls
//! on a drawing [`render::Surface`].

pub mod coords;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;

pub use render::{render, RenderConfig, Surface};
