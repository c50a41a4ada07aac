//! Rendering walk from a decoded image to drawing-surface calls.
//!
//! - [`Surface`] is the capability set a drawing backend exposes
//! - [`render`] walks the shape tree and issues calls in tree order
//! - [`path`] holds the curve-to-path construction shared by curves and regions

pub mod config;
pub mod path;
pub mod renderer;
pub mod surface;

pub use config::RenderConfig;
pub use renderer::render;
pub use surface::{CompositeOp, FillRule, Surface};
