//! Coordinate and geometry types shared across the rasterizer.
//!
//! Canonical space:
//! - Device pixels
//! - Origin top-left
//! - +X right, +Y down

mod matrix;
mod rect;
mod vec2;

pub use matrix::Matrix;
pub use rect::Rect;
pub use vec2::Vec2;
