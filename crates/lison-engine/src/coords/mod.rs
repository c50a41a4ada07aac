//! Device-space geometry.
//!
//! Canonical device space:
//! - pixels of the target surface
//! - origin top-left, +X right, +Y down (same orientation as image units)
//!
//! Image units are mapped to device pixels by a single uniform [`Scaler`].

mod scale;
mod vec2;
mod viewport;

pub use scale::Scaler;
pub use vec2::Vec2;
pub use viewport::Viewport;
