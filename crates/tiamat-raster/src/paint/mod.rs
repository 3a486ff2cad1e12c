//! Paint model: color representation, blend modes, and the per-draw paint.
//!
//! Scope:
//! - straight-alpha float color and its premultiplied pixel conversion
//! - Porter-Duff blend modes over premultiplied pixels
//! - the paint value a draw call carries
//!
//! Geometry types remain in `coords`; shaders in `shade`.

mod blend;
mod color;
#[allow(clippy::module_inception)]
mod paint;

pub use blend::BlendMode;
pub use color::Color;
pub use paint::Paint;
