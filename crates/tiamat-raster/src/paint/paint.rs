use crate::paint::{BlendMode, Color};
use crate::shade::Shader;

/// Per-draw paint: a color, an optional shader, and a blend mode.
///
/// The shader is borrowed; it must outlive the draw call that references it.
/// When a shader is present the color still supplies the draw's alpha for
/// blend-mode resolution.
#[derive(Debug, Clone, Copy)]
pub struct Paint<'a> {
    pub color: Color,
    pub shader: Option<&'a Shader<'a>>,
    pub blend: BlendMode,
}

impl<'a> Paint<'a> {
    #[inline]
    pub fn new(color: Color) -> Self {
        Self { color, shader: None, blend: BlendMode::SrcOver }
    }

    /// Shader paint with the default opaque-black color and src-over blend.
    #[inline]
    pub fn with_shader(shader: &'a Shader<'a>) -> Self {
        Self { color: Color::black(), shader: Some(shader), blend: BlendMode::SrcOver }
    }

    #[inline]
    pub fn blend(mut self, mode: BlendMode) -> Self {
        self.blend = mode;
        self
    }
}

impl Default for Paint<'_> {
    #[inline]
    fn default() -> Self {
        Self::new(Color::black())
    }
}
