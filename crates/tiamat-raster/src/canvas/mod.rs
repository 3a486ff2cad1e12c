//! Public drawing surface.
//!
//! A canvas borrows its target bitmap, owns the transform stack, and routes
//! each draw through: map geometry by the CTM -> build clipped edges -> sort
//! -> scan into spans -> shade/blend (see `scan`).

mod mesh;
mod scan;

use log::trace;

use crate::bitmap::Bitmap;
use crate::coords::{Matrix, Rect, Vec2};
use crate::paint::{BlendMode, Color, Paint};
use crate::path::Path;
use crate::raster::{build_path_edges, build_polygon_edges, order_by_top};
use scan::SpanSource;

pub struct Canvas<'a> {
    device: &'a mut Bitmap,
    ctm: Matrix,
    saved: Vec<Matrix>,
}

impl<'a> Canvas<'a> {
    pub fn new(device: &'a mut Bitmap) -> Self {
        Self {
            device,
            ctm: Matrix::identity(),
            saved: vec![Matrix::identity()],
        }
    }

    // ── transform stack ───────────────────────────────────────────────────

    /// Pushes a copy of the current transform.
    pub fn save(&mut self) {
        self.saved.push(self.ctm);
    }

    /// Pops the most recent save into the current transform.
    ///
    /// # Panics
    /// Panics (debug only) when there is nothing left to restore.
    pub fn restore(&mut self) {
        debug_assert!(!self.saved.is_empty(), "restore without matching save");
        if let Some(m) = self.saved.pop() {
            self.ctm = m;
        }
    }

    /// Appends `matrix` to the current transform; it applies to geometry
    /// before everything already concatenated.
    pub fn concat(&mut self, matrix: Matrix) {
        self.ctm = self.ctm * matrix;
    }

    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.concat(Matrix::translate(tx, ty));
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.concat(Matrix::scale(sx, sy));
    }

    pub fn rotate(&mut self, radians: f32) {
        self.concat(Matrix::rotate(radians));
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Writes every pixel of the target to the premultiplied `color`,
    /// ignoring the transform and any clip-like state.
    pub fn clear(&mut self, color: Color) {
        self.device.fill(color.to_pixel());
    }

    /// Fills `rect` with a plain color through the default src-over paint.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_rect(rect, &Paint::new(color));
    }

    pub fn draw_rect(&mut self, rect: Rect, paint: &Paint<'_>) {
        let corners = [
            Vec2::new(rect.left, rect.bottom),
            Vec2::new(rect.left, rect.top),
            Vec2::new(rect.right, rect.top),
            Vec2::new(rect.right, rect.bottom),
        ];
        self.draw_convex_polygon(&corners, paint);
    }

    /// Fills a convex polygon. The two-edge scan this uses is only valid for
    /// convex input; concave polygons belong in [`Canvas::draw_path`].
    pub fn draw_convex_polygon(&mut self, points: &[Vec2], paint: &Paint<'_>) {
        let mut mapped = points.to_vec();
        self.ctm.map_points(&mut mapped);

        let mut edges = build_polygon_edges(
            self.device.width() as i32,
            self.device.height() as i32,
            &mapped,
        );
        if edges.len() < 2 {
            trace!("convex polygon culled: {} edges survive clipping", edges.len());
            return;
        }
        edges.sort_by(order_by_top);

        self.fill_sorted_edges(edges, paint, false);
    }

    /// Fills a path under the non-zero winding rule.
    pub fn draw_path(&mut self, path: &Path, paint: &Paint<'_>) {
        let mut mapped = path.clone();
        mapped.transform(&self.ctm);

        let mut edges = build_path_edges(
            self.device.width() as i32,
            self.device.height() as i32,
            &mapped,
        );
        if edges.len() < 2 {
            trace!("path culled: {} edges survive clipping", edges.len());
            return;
        }
        edges.sort_by(order_by_top);

        self.fill_sorted_edges(edges, paint, true);
    }

    /// Common tail of every fill: resolve the blend mode, prepare the span
    /// source, and run the requested scanner.
    fn fill_sorted_edges(
        &mut self,
        edges: Vec<crate::raster::Edge>,
        paint: &Paint<'_>,
        winding: bool,
    ) {
        let mode = paint.blend.resolve(paint.color.a);
        if mode == BlendMode::Dst {
            return;
        }

        let mut source = match paint.shader {
            None => SpanSource::Solid(paint.color.to_pixel()),
            Some(shader) => {
                let Some(session) = shader.set_context(&self.ctm) else {
                    trace!("draw skipped: singular shader transform");
                    return;
                };
                SpanSource::Shaded {
                    session,
                    opaque: shader.is_opaque(),
                    buf: Vec::new(),
                }
            }
        };

        if winding {
            scan::complex_scan(self.device, edges, &mut source, mode);
        } else {
            scan::simple_scan(self.device, &edges, &mut source, mode);
        }
    }
}
