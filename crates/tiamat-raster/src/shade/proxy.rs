use crate::coords::Matrix;
use crate::shade::{Shader, ShaderSession};

/// Wraps another shader, post-multiplying `extra` onto the CTM it sees.
///
/// This is how a shader authored in a triangle's texture basis gets sampled
/// at the triangle's device position: the extra matrix carries the
/// device-basis-times-inverse-texture-basis product.
#[derive(Debug, Clone)]
pub struct ProxyShader<'a> {
    inner: &'a Shader<'a>,
    extra: Matrix,
}

impl<'a> ProxyShader<'a> {
    pub(super) fn new(inner: &'a Shader<'a>, extra: Matrix) -> Self {
        Self { inner, extra }
    }

    pub(super) fn is_opaque(&self) -> bool {
        self.inner.is_opaque()
    }

    /// The session is the inner shader's session under the adjusted CTM.
    pub(super) fn set_context(&self, ctm: &Matrix) -> Option<ShaderSession<'a>> {
        self.inner.set_context(&(*ctm * self.extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::pixel::Pixel;
    use crate::shade::TileMode;

    #[test]
    fn proxy_transform_composes_with_the_ctm() {
        let colors = [Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 1.0, 0.0)];
        let gradient = Shader::linear_gradient(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            &colors,
            TileMode::Clamp,
        )
        .unwrap();

        // The extra translate is applied before the gradient's own basis, so
        // the proxied shader at device x matches the bare shader at x-5.
        let proxy = Shader::proxy(&gradient, Matrix::translate(5.0, 0.0));

        let shade = |shader: &Shader<'_>, x: i32| {
            let mut session = shader.set_context(&Matrix::identity()).unwrap();
            let mut px = [Pixel::TRANSPARENT];
            session.shade_row(x, 0, &mut px);
            px[0]
        };

        for x in 5..10 {
            assert_eq!(shade(&proxy, x), shade(&gradient, x - 5));
        }
    }

    #[test]
    fn proxy_forwards_opacity_and_context_failure() {
        let colors = [Color::rgb(1.0, 0.0, 0.0)];
        let gradient = Shader::linear_gradient(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            &colors,
            TileMode::Clamp,
        )
        .unwrap();

        let proxy = Shader::proxy(&gradient, Matrix::scale(0.0, 1.0));
        assert_eq!(proxy.is_opaque(), gradient.is_opaque());
        // singular extra transform surfaces through set_context
        assert!(proxy.set_context(&Matrix::identity()).is_none());
    }
}
