//! Recorded surface calls.
//!
//! [`CallList`] implements [`Surface`](crate::render::Surface) by appending
//! every call to a list instead of drawing. Renderer tests assert on it, and
//! the CLI dumps it when tracing.

pub mod cmd;
pub mod list;

pub use cmd::SurfaceCall;
pub use list::CallList;
