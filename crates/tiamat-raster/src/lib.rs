//! Tiamat software rasterizer.
//!
//! A CPU-only 2D renderer: drawing calls (rects, convex polygons, paths with
//! quadratic/cubic curves, meshes, patch subdivisions) are scan-converted into
//! premultiplied ARGB pixels in a caller-owned [`Bitmap`].
//!
//! Pipeline per draw:
//! - geometry is mapped by the canvas transform
//! - curves flatten into chords, segments clip to the device and become edges
//! - edges sort and scan into horizontal spans
//! - spans fill from a constant paint color or a [`Shader`], then blend
//!
//! There is no GPU, no windowing, and no file I/O here.

pub mod bitmap;
pub mod canvas;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod pixel;
mod raster;
pub mod shade;

pub use bitmap::Bitmap;
pub use canvas::Canvas;
pub use coords::{Matrix, Rect, Vec2};
pub use paint::{BlendMode, Color, Paint};
pub use path::{Path, PathDirection, Verb};
pub use pixel::Pixel;
pub use shade::{Shader, ShaderSession, TileMode};
