use crate::coords::{Matrix, Vec2};
use crate::paint::Color;
use crate::pixel::Pixel;
use crate::shade::{TileMode, fract, mirror_unit, pin_unit};

/// Linear color ramp along the segment `p0..p1`.
///
/// The unit matrix maps unit-x onto the segment and unit-y onto its
/// perpendicular, so gradient-space x is the ramp parameter. Forward color
/// deltas are precomputed once.
#[derive(Debug, Clone)]
pub struct LinearGradientShader {
    colors: Vec<Color>,
    diffs: Vec<Color>,
    unit: Matrix,
    tile: TileMode,
}

impl LinearGradientShader {
    pub(super) fn new(p0: Vec2, p1: Vec2, colors: &[Color], tile: TileMode) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }

        let diffs = colors.windows(2).map(|pair| pair[1] - pair[0]).collect();

        let d = p1 - p0;
        let unit = Matrix::new(d.x, -d.y, p0.x, d.y, d.x, p0.y);

        Some(Self { colors: colors.to_vec(), diffs, unit, tile })
    }

    pub(super) fn is_opaque(&self) -> bool {
        self.colors.iter().all(|c| c.a == 1.0)
    }

    pub(super) fn set_context(&self, ctm: &Matrix) -> Option<LinearSession<'_>> {
        let inverse = (*ctm * self.unit).invert()?;
        Some(LinearSession { colors: &self.colors, diffs: &self.diffs, inverse, tile: self.tile })
    }
}

#[derive(Debug)]
pub struct LinearSession<'a> {
    colors: &'a [Color],
    diffs: &'a [Color],
    inverse: Matrix,
    tile: TileMode,
}

impl LinearSession<'_> {
    pub(super) fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        if self.colors.len() == 1 {
            row.fill(self.colors[0].to_pixel());
            return;
        }

        let mut p = self.inverse.map_point(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
        let scale = (self.colors.len() - 1) as f32;

        for out in row {
            let gx = match self.tile {
                TileMode::Clamp => pin_unit(p.x) * scale,
                TileMode::Repeat => fract(p.x) * scale,
                TileMode::Mirror => mirror_unit(p.x) * scale,
            };

            let j = gx.floor() as usize;
            let t = gx - j as f32;

            // t == 0 keeps the top stop addressable without a delta entry
            let c = if t == 0.0 { self.colors[j] } else { self.colors[j] + self.diffs[j] * t };
            *out = c.to_pixel();

            p.x += self.inverse.a;
        }
    }
}

/// Radial color ramp: parameterized by distance from `center` over `radius`.
///
/// Conservatively never reported opaque.
#[derive(Debug, Clone)]
pub struct RadialGradientShader {
    colors: Vec<Color>,
    radius: f32,
    unit: Matrix,
    tile: TileMode,
}

impl RadialGradientShader {
    pub(super) fn new(
        center: Vec2,
        radius: f32,
        colors: &[Color],
        tile: TileMode,
    ) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self {
            colors: colors.to_vec(),
            radius,
            unit: Matrix::translate(center.x, center.y),
            tile,
        })
    }

    pub(super) fn is_opaque(&self) -> bool {
        false
    }

    pub(super) fn set_context(&self, ctm: &Matrix) -> Option<RadialSession<'_>> {
        let inverse = (*ctm * self.unit).invert()?;
        Some(RadialSession {
            colors: &self.colors,
            radius: self.radius,
            inverse,
            tile: self.tile,
        })
    }
}

#[derive(Debug)]
pub struct RadialSession<'a> {
    colors: &'a [Color],
    radius: f32,
    inverse: Matrix,
    tile: TileMode,
}

impl RadialSession<'_> {
    pub(super) fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        let n = self.colors.len();
        if n == 1 {
            row.fill(self.colors[0].to_pixel());
            return;
        }

        let mut p = self.inverse.map_point(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
        let scale = (n - 1) as f32;

        for out in row {
            let raw = (p.x * p.x + p.y * p.y).sqrt() / self.radius;
            let t = match self.tile {
                TileMode::Clamp => pin_unit(raw),
                TileMode::Repeat => raw - raw.floor(),
                TileMode::Mirror => {
                    let f = raw.floor();
                    if (f as i64) % 2 == 0 { raw - f } else { 1.0 - (raw - f) }
                }
            };

            let idx = ((scale * t).floor() as usize).min(n - 1);
            let stop_width = 1.0 / scale;
            let local = pin_unit((t - idx as f32 * stop_width) / stop_width);
            let next = if idx + 1 >= n { idx } else { idx + 1 };

            let c = self.colors[idx] * (1.0 - local) + self.colors[next] * local;
            *out = c.to_pixel();

            p.x += self.inverse.a;
            p.y += self.inverse.d;
        }
    }
}
