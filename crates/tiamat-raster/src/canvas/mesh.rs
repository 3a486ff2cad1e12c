//! Mesh and patch rendering: triangles with per-vertex colors and/or texture
//! coordinates, and bilinear quad subdivision feeding the mesh path.

use log::trace;

use crate::canvas::Canvas;
use crate::coords::{Matrix, Vec2};
use crate::paint::{Color, Paint};
use crate::shade::Shader;

impl Canvas<'_> {
    /// Draws `indices.len() / 3` triangles from `verts`.
    ///
    /// Per triangle, the shading source depends on what is supplied:
    /// - colors and texs (and a paint shader): triangle-color shader
    ///   multiplied with the proxy-mapped paint shader
    /// - colors only: triangle-color shader
    /// - texs only (and a paint shader): proxy-mapped paint shader
    /// - neither: the triangle is skipped
    ///
    /// # Panics
    /// Panics (debug only) when `indices` is not a multiple of three.
    pub fn draw_mesh(
        &mut self,
        verts: &[Vec2],
        colors: Option<&[Color]>,
        texs: Option<&[Vec2]>,
        indices: &[usize],
        paint: &Paint<'_>,
    ) {
        debug_assert_eq!(indices.len() % 3, 0);

        for tri in indices.chunks_exact(3) {
            let pts = [verts[tri[0]], verts[tri[1]], verts[tri[2]]];

            match (colors, texs, paint.shader) {
                (Some(cols), Some(txs), Some(shader)) => {
                    let tri_cols = [cols[tri[0]], cols[tri[1]], cols[tri[2]]];
                    let tri_txs = [txs[tri[0]], txs[tri[1]], txs[tri[2]]];
                    self.draw_combined_triangle(pts, tri_cols, tri_txs, shader);
                }
                (Some(cols), _, _) => {
                    let tri_cols = [cols[tri[0]], cols[tri[1]], cols[tri[2]]];
                    let shader = Shader::triangle_color(pts, tri_cols);
                    self.draw_convex_polygon(&pts, &Paint::with_shader(&shader));
                }
                (None, Some(txs), Some(shader)) => {
                    let tri_txs = [txs[tri[0]], txs[tri[1]], txs[tri[2]]];
                    self.draw_textured_triangle(pts, tri_txs, shader);
                }
                _ => {}
            }
        }
    }

    /// Bilinearly subdivides a quad into `(level + 1)^2` cells, two triangles
    /// each, and renders the cells through [`Canvas::draw_mesh`]. Vertex
    /// positions, colors, and texture coordinates all interpolate in (u, v).
    pub fn draw_quad(
        &mut self,
        verts: &[Vec2; 4],
        colors: Option<&[Color; 4]>,
        texs: Option<&[Vec2; 4]>,
        level: usize,
        paint: &Paint<'_>,
    ) {
        const CELL_INDICES: [usize; 6] = [0, 1, 3, 1, 2, 3];

        let cells = (level + 1) as f32;

        for u in 0..=level {
            let u0 = u as f32 / cells;
            let u1 = (u + 1) as f32 / cells;

            for v in 0..=level {
                let v0 = v as f32 / cells;
                let v1 = (v + 1) as f32 / cells;

                let cell_verts = [
                    bilerp_point(verts, u0, v0),
                    bilerp_point(verts, u1, v0),
                    bilerp_point(verts, u1, v1),
                    bilerp_point(verts, u0, v1),
                ];
                let cell_colors = colors.map(|c| {
                    [
                        bilerp_color(c, u0, v0),
                        bilerp_color(c, u1, v0),
                        bilerp_color(c, u1, v1),
                        bilerp_color(c, u0, v1),
                    ]
                });
                let cell_texs = texs.map(|t| {
                    [
                        bilerp_point(t, u0, v0),
                        bilerp_point(t, u1, v0),
                        bilerp_point(t, u1, v1),
                        bilerp_point(t, u0, v1),
                    ]
                });

                self.draw_mesh(
                    &cell_verts,
                    cell_colors.as_ref().map(|c| c.as_slice()),
                    cell_texs.as_ref().map(|t| t.as_slice()),
                    &CELL_INDICES,
                    paint,
                );
            }
        }
    }

    /// Fills `pts` with the paint's shader re-based from texture space onto
    /// the triangle's device position via `P * T^-1`.
    fn draw_textured_triangle(&mut self, pts: [Vec2; 3], texs: [Vec2; 3], shader: &Shader<'_>) {
        let p = triangle_basis(&pts);
        let t = triangle_basis(&texs);
        let Some(t_inv) = t.invert() else {
            trace!("textured triangle skipped: degenerate texture basis");
            return;
        };

        let proxy = Shader::proxy(shader, p * t_inv);
        self.draw_convex_polygon(&pts, &Paint::with_shader(&proxy));
    }

    fn draw_combined_triangle(
        &mut self,
        pts: [Vec2; 3],
        colors: [Color; 3],
        texs: [Vec2; 3],
        shader: &Shader<'_>,
    ) {
        let p = triangle_basis(&pts);
        let t = triangle_basis(&texs);
        let Some(t_inv) = t.invert() else {
            trace!("combined triangle skipped: degenerate texture basis");
            return;
        };

        let tri = Shader::triangle_color(pts, colors);
        let proxy = Shader::proxy(shader, p * t_inv);
        let combined = Shader::combined(&tri, &proxy);
        self.draw_convex_polygon(&pts, &Paint::with_shader(&combined));
    }
}

/// Basis `[p1-p0, p2-p0, p0]` mapping the unit triangle onto `pts`.
fn triangle_basis(pts: &[Vec2; 3]) -> Matrix {
    Matrix::new(
        pts[1].x - pts[0].x,
        pts[2].x - pts[0].x,
        pts[0].x,
        pts[1].y - pts[0].y,
        pts[2].y - pts[0].y,
        pts[0].y,
    )
}

fn bilerp_point(pts: &[Vec2; 4], u: f32, v: f32) -> Vec2 {
    (pts[0] * (1.0 - u) + pts[1] * u) * (1.0 - v) + (pts[3] * (1.0 - u) + pts[2] * u) * v
}

fn bilerp_color(colors: &[Color; 4], u: f32, v: f32) -> Color {
    (colors[0] * (1.0 - u) + colors[1] * u) * (1.0 - v)
        + (colors[3] * (1.0 - u) + colors[2] * u) * v
}
