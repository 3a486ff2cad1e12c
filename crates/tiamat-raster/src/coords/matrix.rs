use core::ops::Mul;

use super::Vec2;

/// 2x3 affine transform, row-major:
///
/// ```text
/// | a  b  c |
/// | d  e  f |
/// | 0  0  1 |
/// ```
///
/// `m1 * m2` produces the transform that applies `m2` first, then `m1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Matrix {
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, tx, 0.0, 1.0, ty)
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }

    #[inline]
    pub fn rotate(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, -sin, 0.0, sin, cos, 0.0)
    }

    /// Returns the inverse, or `None` when the 2x2 part is singular.
    pub fn invert(&self) -> Option<Matrix> {
        let det = self.a * self.e - self.b * self.d;
        if det == 0.0 {
            return None;
        }

        let inv = 1.0 / det;
        Some(Matrix::new(
            self.e * inv,
            -self.b * inv,
            (self.b * self.f - self.c * self.e) * inv,
            -self.d * inv,
            self.a * inv,
            (self.c * self.d - self.a * self.f) * inv,
        ))
    }

    #[inline]
    pub fn map_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.b * p.y + self.c,
            self.d * p.x + self.e * p.y + self.f,
        )
    }

    /// Maps every point in place.
    pub fn map_points(&self, pts: &mut [Vec2]) {
        for p in pts {
            *p = self.map_point(*p);
        }
    }
}

impl Default for Matrix {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix::new(
            self.a * rhs.a + self.b * rhs.d,
            self.a * rhs.b + self.b * rhs.e,
            self.a * rhs.c + self.b * rhs.f + self.c,
            self.d * rhs.a + self.e * rhs.d,
            self.d * rhs.b + self.e * rhs.e,
            self.d * rhs.c + self.e * rhs.f + self.f,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} vs {b}");
    }

    fn assert_matrix_close(m: Matrix, n: Matrix) {
        assert_close(m.a, n.a);
        assert_close(m.b, n.b);
        assert_close(m.c, n.c);
        assert_close(m.d, n.d);
        assert_close(m.e, n.e);
        assert_close(m.f, n.f);
    }

    #[test]
    fn identity_maps_points_unchanged() {
        let p = Vec2::new(3.5, -2.0);
        assert_eq!(Matrix::identity().map_point(p), p);
    }

    #[test]
    fn translate_then_scale_order() {
        // scale * translate applies the translate first.
        let m = Matrix::scale(2.0, 2.0) * Matrix::translate(1.0, 0.0);
        let p = m.map_point(Vec2::new(1.0, 1.0));
        assert_close(p.x, 4.0);
        assert_close(p.y, 2.0);
    }

    #[test]
    fn rotate_quarter_turn() {
        let m = Matrix::rotate(core::f32::consts::FRAC_PI_2);
        let p = m.map_point(Vec2::new(1.0, 0.0));
        assert_close(p.x, 0.0);
        assert_close(p.y, 1.0);
    }

    #[test]
    fn invert_round_trips() {
        let m = Matrix::translate(3.0, -7.0) * Matrix::rotate(0.6) * Matrix::scale(2.0, 0.5);
        let inv = m.invert().unwrap();

        assert_matrix_close(m * inv, Matrix::identity());
        assert_matrix_close(inv.invert().unwrap(), m);

        let p = Vec2::new(5.0, 9.0);
        let q = inv.map_point(m.map_point(p));
        assert_close(q.x, p.x);
        assert_close(q.y, p.y);
    }

    #[test]
    fn singular_matrix_does_not_invert() {
        assert!(Matrix::scale(0.0, 1.0).invert().is_none());
        assert!(Matrix::new(1.0, 2.0, 0.0, 2.0, 4.0, 0.0).invert().is_none());
    }
}
