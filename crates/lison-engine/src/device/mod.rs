//! Raster drawing surface.
//!
//! This module is responsible for:
//! - owning the target pixmap
//! - turning buffered path operations into tiny-skia paths
//! - mapping paint sources and stroke parameters onto tiny-skia
//! - encoding the finished raster as PNG

mod pixmap;

pub use pixmap::PixmapSurface;
