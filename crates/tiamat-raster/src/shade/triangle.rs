use crate::coords::{Matrix, Vec2};
use crate::paint::Color;
use crate::pixel::Pixel;

/// Interpolates three vertex colors across a triangle in barycentric
/// coordinates.
///
/// The unit matrix is the triangle basis `[U V p0]` (U = p1-p0, V = p2-p0),
/// so gradient-space (x, y) are the barycentric weights of vertices 1 and 2.
/// The per-pixel color increment is constant across a row, so shading is one
/// add per pixel instead of a matrix multiply.
#[derive(Debug, Clone)]
pub struct TriangleShader {
    colors: [Color; 3],
    unit: Matrix,
    diff1: Color,
    diff2: Color,
}

impl TriangleShader {
    pub(super) fn new(pts: [Vec2; 3], colors: [Color; 3]) -> Self {
        let u = pts[1] - pts[0];
        let v = pts[2] - pts[0];
        let unit = Matrix::new(u.x, v.x, pts[0].x, u.y, v.y, pts[0].y);

        Self {
            colors,
            unit,
            diff1: colors[1] - colors[0],
            diff2: colors[2] - colors[0],
        }
    }

    pub(super) fn is_opaque(&self) -> bool {
        self.colors.iter().all(|c| c.a == 1.0)
    }

    pub(super) fn set_context(&self, ctm: &Matrix) -> Option<TriangleSession> {
        let inverse = (*ctm * self.unit).invert()?;
        Some(TriangleSession {
            base: self.colors[0],
            diff1: self.diff1,
            diff2: self.diff2,
            inverse,
        })
    }
}

#[derive(Debug)]
pub struct TriangleSession {
    base: Color,
    diff1: Color,
    diff2: Color,
    inverse: Matrix,
}

impl TriangleSession {
    pub(super) fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        let p = self.inverse.map_point(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));

        let mut color = self.diff1 * p.x + self.diff2 * p.y + self.base;
        let step = self.diff1 * self.inverse.a + self.diff2 * self.inverse.d;

        for out in row {
            *out = color.to_pixel();
            color = color + step;
        }
    }
}
