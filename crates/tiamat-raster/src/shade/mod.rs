//! Per-pixel color sources for draw calls.
//!
//! The variant set is closed (bitmap, linear gradient, radial gradient,
//! triangle color, proxy, combined), so dispatch is an enum match rather
//! than a trait object.
//!
//! Shader values are immutable descriptors. Per-draw state (the cached
//! inverse of the composite transform) lives in the [`ShaderSession`] that
//! [`Shader::set_context`] returns, so one shader can serve concurrent draws
//! on different canvases.

mod bitmap;
mod combined;
mod gradient;
mod proxy;
mod triangle;

pub use bitmap::{BitmapSession, BitmapShader};
pub use combined::{CombinedSession, CombinedShader};
pub use gradient::{LinearGradientShader, LinearSession, RadialGradientShader, RadialSession};
pub use proxy::ProxyShader;
pub use triangle::{TriangleSession, TriangleShader};

use crate::bitmap::Bitmap;
use crate::coords::{Matrix, Vec2};
use crate::paint::Color;
use crate::pixel::Pixel;

/// Sampling policy outside the nominal domain, applied per axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TileMode {
    /// Pin to the domain edge.
    Clamp,
    /// Wrap the fractional part.
    Repeat,
    /// Alternate direction every period.
    Mirror,
}

/// A paint source. Construct through the factory methods; attach to a
/// [`crate::Paint`] by reference.
#[derive(Debug, Clone)]
pub enum Shader<'a> {
    Bitmap(BitmapShader<'a>),
    LinearGradient(LinearGradientShader),
    RadialGradient(RadialGradientShader),
    TriangleColor(TriangleShader),
    Proxy(ProxyShader<'a>),
    Combined(CombinedShader<'a>),
}

impl<'a> Shader<'a> {
    /// Samples `bitmap` through `local_inverse` composed with the inverted
    /// CTM. `None` when the bitmap has no pixel storage.
    pub fn bitmap(bitmap: &'a Bitmap, local_inverse: Matrix, tile: TileMode) -> Option<Self> {
        BitmapShader::new(bitmap, local_inverse, tile).map(Shader::Bitmap)
    }

    /// Gradient along `p0..p1`. `None` when `colors` is empty.
    pub fn linear_gradient(
        p0: Vec2,
        p1: Vec2,
        colors: &[Color],
        tile: TileMode,
    ) -> Option<Self> {
        LinearGradientShader::new(p0, p1, colors, tile).map(Shader::LinearGradient)
    }

    /// Gradient by distance from `center`, scaled by `radius`. `None` when
    /// `colors` is empty.
    pub fn radial_gradient(
        center: Vec2,
        radius: f32,
        colors: &[Color],
        tile: TileMode,
    ) -> Option<Self> {
        RadialGradientShader::new(center, radius, colors, tile).map(Shader::RadialGradient)
    }

    /// Interpolates three vertex colors over the triangle `pts`.
    pub fn triangle_color(pts: [Vec2; 3], colors: [Color; 3]) -> Self {
        Shader::TriangleColor(TriangleShader::new(pts, colors))
    }

    /// Post-multiplies `extra` onto whatever CTM `inner` is set with.
    pub fn proxy(inner: &'a Shader<'a>, extra: Matrix) -> Self {
        Shader::Proxy(ProxyShader::new(inner, extra))
    }

    /// Channel-wise product of two shaders set with the same CTM.
    pub fn combined(first: &'a Shader<'a>, second: &'a Shader<'a>) -> Self {
        Shader::Combined(CombinedShader::new(first, second))
    }

    /// Hint that every shaded pixel will have alpha 255, letting the blitter
    /// skip blending.
    pub fn is_opaque(&self) -> bool {
        match self {
            Shader::Bitmap(s) => s.is_opaque(),
            Shader::LinearGradient(s) => s.is_opaque(),
            Shader::RadialGradient(s) => s.is_opaque(),
            Shader::TriangleColor(s) => s.is_opaque(),
            Shader::Proxy(s) => s.is_opaque(),
            Shader::Combined(s) => s.is_opaque(),
        }
    }

    /// Prepares a per-draw evaluator under `ctm`; `None` when the composite
    /// transform is singular, which skips the draw.
    pub fn set_context(&self, ctm: &Matrix) -> Option<ShaderSession<'_>> {
        match self {
            Shader::Bitmap(s) => s.set_context(ctm).map(ShaderSession::Bitmap),
            Shader::LinearGradient(s) => s.set_context(ctm).map(ShaderSession::Linear),
            Shader::RadialGradient(s) => s.set_context(ctm).map(ShaderSession::Radial),
            Shader::TriangleColor(s) => s.set_context(ctm).map(ShaderSession::Triangle),
            // the proxy's session is the inner shader's session
            Shader::Proxy(s) => s.set_context(ctm),
            Shader::Combined(s) => s.set_context(ctm).map(ShaderSession::Combined),
        }
    }
}

/// Draw-scoped shader evaluator holding the cached inverse transform.
///
/// `shade_row` fills premultiplied pixels starting at device sample
/// `(x + 0.5, y + 0.5)`, stepping +1 in device x per pixel.
#[derive(Debug)]
pub enum ShaderSession<'a> {
    Bitmap(BitmapSession<'a>),
    Linear(LinearSession<'a>),
    Radial(RadialSession<'a>),
    Triangle(TriangleSession),
    Combined(CombinedSession<'a>),
}

impl ShaderSession<'_> {
    pub fn shade_row(&mut self, x: i32, y: i32, row: &mut [Pixel]) {
        match self {
            ShaderSession::Bitmap(s) => s.shade_row(x, y, row),
            ShaderSession::Linear(s) => s.shade_row(x, y, row),
            ShaderSession::Radial(s) => s.shade_row(x, y, row),
            ShaderSession::Triangle(s) => s.shade_row(x, y, row),
            ShaderSession::Combined(s) => s.shade_row(x, y, row),
        }
    }
}

/// Fraction wrap used by repeat tiling: maps onto [0, 1).
#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Mirror wrap onto [0, 1]: forward on even periods of |x|, reversed on odd.
///
/// The parity comes from |x|, so negative coordinates reflect half a period
/// out of phase with a symmetric mirror.
#[inline]
fn mirror_unit(x: f32) -> f32 {
    if (x.abs().floor() as i64) % 2 == 0 {
        x - x.floor()
    } else {
        x.ceil() - x
    }
}

/// Pin to [0, 1].
#[inline]
fn pin_unit(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}
