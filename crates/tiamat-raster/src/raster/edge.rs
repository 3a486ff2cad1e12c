use core::cmp::Ordering;
use core::mem;

use crate::coords::Vec2;
use crate::path::curve::{
    cubic_point, cubic_segment_count, quad_point, quad_segment_count,
};
use crate::path::{Path, Segment};
use crate::raster::round_clamped;

/// One scan edge derived from a clipped segment.
///
/// With the segment's line written `x(y) = m*y + b`, `curr_x` is pre-stepped
/// to row `top + 0.5` so it is the x used on row `top`; scanners then advance
/// it by `m` per row. Rows covered are `top..bottom` (bottom exclusive).
/// `wind` is +1 for segments oriented downward in device y, -1 upward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Edge {
    pub m: f32,
    pub top: i32,
    pub bottom: i32,
    pub curr_x: f32,
    pub wind: i32,
}

impl Edge {
    /// Valid while the sweep row is inside `top..bottom`.
    #[inline]
    pub fn valid_at(&self, y: i32) -> bool {
        self.top <= y && y < self.bottom
    }
}

/// Builds the edge for segment `p0..p1`, or `None` when it rounds to zero
/// rows. `wind_down` is the pre-swap orientation (true = downward).
fn make_edge(mut p0: Vec2, mut p1: Vec2, wind_down: bool) -> Option<Edge> {
    if p0.y > p1.y {
        mem::swap(&mut p0, &mut p1);
    }

    let top = round_clamped(p0.y);
    let bottom = round_clamped(p1.y);
    if top == bottom {
        return None;
    }

    let m = (p1.x - p0.x) / (p1.y - p0.y);
    let b = p0.x - p0.y * m;

    Some(Edge {
        m,
        top,
        bottom,
        curr_x: m * (top as f32 + 0.5) + b,
        wind: if wind_down { 1 } else { -1 },
    })
}

/// Clips segment `p0..p1` against the `[0, width] x [0, height]` device and
/// appends the surviving edges.
///
/// Vertical exits are truncated with the line equation. Horizontal exits are
/// replaced (fully outside) or augmented (straddling) with vertical edges
/// projected onto the device boundary, so winding counts at every row stay
/// correct.
fn clip_segment(edges: &mut Vec<Edge>, width: i32, height: i32, mut p0: Vec2, mut p1: Vec2) {
    if p0.y == p1.y {
        return;
    }

    let wind_down = if p0.y > p1.y {
        mem::swap(&mut p0, &mut p1);
        false
    } else {
        true
    };

    let bottom = height as f32;
    let right = width as f32;

    // wholly above or below
    if p1.y <= 0.0 || p0.y >= bottom {
        return;
    }

    let m = (p1.x - p0.x) / (p1.y - p0.y);
    let b = p0.x - p0.y * m;

    if p0.y < 0.0 {
        p0 = Vec2::new(b, 0.0);
    }
    if p1.y > bottom {
        p1 = Vec2::new(m * bottom + b, bottom);
    }

    if p0.x > p1.x {
        mem::swap(&mut p0, &mut p1);
    }

    // fully off one side: project onto the boundary
    if p1.x <= 0.0 {
        edges.extend(make_edge(Vec2::new(0.0, p0.y), Vec2::new(0.0, p1.y), wind_down));
        return;
    }
    if p0.x >= right {
        edges.extend(make_edge(Vec2::new(right, p0.y), Vec2::new(right, p1.y), wind_down));
        return;
    }

    // straddling: an auxiliary vertical edge covers the off-device y-range
    if p0.x < 0.0 {
        let cross_y = -b / m;
        edges.extend(make_edge(Vec2::new(0.0, p0.y), Vec2::new(0.0, cross_y), wind_down));
        p0 = Vec2::new(0.0, cross_y);
    }
    if p1.x > right {
        let cross_y = (right - b) / m;
        edges.extend(make_edge(Vec2::new(right, p1.y), Vec2::new(right, cross_y), wind_down));
        p1 = Vec2::new(right, cross_y);
    }

    edges.extend(make_edge(p0, p1, wind_down));
}

/// Edges for a closed polygon (consecutive points, last wrapping to first),
/// clipped to a `width` x `height` device.
pub(crate) fn build_polygon_edges(width: i32, height: i32, pts: &[Vec2]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..pts.len() {
        let p0 = pts[i];
        let p1 = pts[(i + 1) % pts.len()];
        clip_segment(&mut edges, width, height, p0, p1);
    }
    edges
}

/// Edges for an already-transformed path: lines clip directly, curves
/// flatten into chords first.
pub(crate) fn build_path_edges(width: i32, height: i32, path: &Path) -> Vec<Edge> {
    let mut edges = Vec::new();

    for seg in path.segments() {
        match seg {
            Segment::Line([p0, p1]) => clip_segment(&mut edges, width, height, p0, p1),
            Segment::Quad(pts) => {
                let count = quad_segment_count(&pts);
                let mut p0 = pts[0];
                for i in 1..count {
                    let p1 = quad_point(&pts, i as f32 / count as f32);
                    clip_segment(&mut edges, width, height, p0, p1);
                    p0 = p1;
                }
                clip_segment(&mut edges, width, height, p0, pts[2]);
            }
            Segment::Cubic(pts) => {
                let count = cubic_segment_count(&pts);
                let mut p0 = pts[0];
                for i in 1..count {
                    let p1 = cubic_point(&pts, i as f32 / count as f32);
                    clip_segment(&mut edges, width, height, p0, p1);
                    p0 = p1;
                }
                clip_segment(&mut edges, width, height, p0, pts[3]);
            }
        }
    }

    edges
}

/// Scanner ordering: (top, then curr_x, then slope), all ascending.
pub(crate) fn order_by_top(a: &Edge, b: &Edge) -> Ordering {
    a.top
        .cmp(&b.top)
        .then_with(|| a.curr_x.total_cmp(&b.curr_x))
        .then_with(|| a.m.total_cmp(&b.m))
}

/// Active-list ordering within one row.
pub(crate) fn order_by_x(a: &Edge, b: &Edge) -> Ordering {
    a.curr_x.total_cmp(&b.curr_x)
}
