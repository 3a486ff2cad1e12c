use crate::coords::Matrix;
use crate::pixel::Pixel;
use crate::shade::{Shader, ShaderSession};

/// Channel-wise product of two shaders.
///
/// Both inner shaders receive the same CTM; a singular transform in either
/// fails the whole context. The session owns scratch rows so composition
/// costs no per-span allocation.
#[derive(Debug, Clone)]
pub struct CombinedShader<'a> {
    first: &'a Shader<'a>,
    second: &'a Shader<'a>,
}

impl<'a> CombinedShader<'a> {
    pub(super) fn new(first: &'a Shader<'a>, second: &'a Shader<'a>) -> Self {
        Self { first, second }
    }

    pub(super) fn is_opaque(&self) -> bool {
        self.first.is_opaque() && self.second.is_opaque()
    }

    pub(super) fn set_context(&self, ctm: &Matrix) -> Option<CombinedSession<'a>> {
        Some(CombinedSession {
            first: Box::new(self.first.set_context(ctm)?),
            second: Box::new(self.second.set_context(ctm)?),
            row_a: Vec::new(),
            row_b: Vec::new(),
        })
    }
}

#[derive(Debug)]
pub struct CombinedSession<'a> {
    first: Box<ShaderSession<'a>>,
    second: Box<ShaderSession<'a>>,
    row_a: Vec<Pixel>,
    row_b: Vec<Pixel>,
}

impl CombinedSession<'_> {
    pub(super) fn shade_row(&mut self, x: i32, y: i32, row: &mut [Pixel]) {
        let n = row.len();
        self.row_a.resize(n, Pixel::TRANSPARENT);
        self.row_b.resize(n, Pixel::TRANSPARENT);

        self.first.shade_row(x, y, &mut self.row_a);
        self.second.shade_row(x, y, &mut self.row_b);

        for (out, (&a, &b)) in row.iter_mut().zip(self.row_a.iter().zip(&self.row_b)) {
            *out = multiply_pixels(a, b);
        }
    }
}

/// `round(a*b/255)` on all four channels.
fn multiply_pixels(p0: Pixel, p1: Pixel) -> Pixel {
    let mul = |a: u32, b: u32| ((a * b) as f32 / 255.0 + 0.5).floor() as u32;
    Pixel::pack(
        mul(p0.alpha(), p1.alpha()),
        mul(p0.red(), p1.red()),
        mul(p0.green(), p1.green()),
        mul(p0.blue(), p1.blue()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::shade::TileMode;

    fn solid(color: Color) -> Shader<'static> {
        // a single-stop gradient shades a constant color
        Shader::linear_gradient(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), &[color], TileMode::Clamp)
            .unwrap()
    }

    #[test]
    fn multiply_is_channelwise_with_rounding() {
        let a = Pixel::pack(255, 128, 64, 255);
        let b = Pixel::pack(255, 255, 128, 0);
        let out = multiply_pixels(a, b);

        assert_eq!(out.alpha(), 255);
        assert_eq!(out.red(), 128);
        assert_eq!(out.green(), 32); // 64*128/255 = 32.1 -> 32
        assert_eq!(out.blue(), 0);
    }

    #[test]
    fn combined_rows_multiply_both_sources() {
        let white = solid(Color::rgb(1.0, 1.0, 1.0));
        let tint = solid(Color::rgb(0.5, 1.0, 0.0));
        let combined = Shader::combined(&white, &tint);

        let mut session = combined.set_context(&Matrix::identity()).unwrap();
        let mut row = [Pixel::TRANSPARENT; 4];
        session.shade_row(0, 0, &mut row);

        let expected = multiply_pixels(
            Color::rgb(1.0, 1.0, 1.0).to_pixel(),
            Color::rgb(0.5, 1.0, 0.0).to_pixel(),
        );
        assert!(row.iter().all(|&p| p == expected));
    }

    #[test]
    fn opacity_is_the_conjunction() {
        let opaque = solid(Color::rgb(1.0, 1.0, 1.0));
        let translucent = solid(Color::rgba(1.0, 1.0, 1.0, 0.5));

        assert!(Shader::combined(&opaque, &opaque).is_opaque());
        assert!(!Shader::combined(&opaque, &translucent).is_opaque());
    }

    #[test]
    fn context_failure_in_either_inner_fails_the_pair() {
        let ok = solid(Color::rgb(1.0, 1.0, 1.0));
        let colors = [Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 1.0, 0.0)];
        // degenerate segment -> singular unit matrix
        let bad = Shader::linear_gradient(
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 2.0),
            &colors,
            TileMode::Clamp,
        )
        .unwrap();

        let combined = Shader::combined(&ok, &bad);
        assert!(combined.set_context(&Matrix::identity()).is_none());
    }
}
