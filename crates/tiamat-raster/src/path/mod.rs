//! Path container and construction surface.
//!
//! A path stores parallel verb and point sequences. Verb point consumption:
//! Move 1, Line 1, Quad 2, Cubic 3, each relative to the current point the
//! previous verb established. Iteration happens through [`Path::segments`],
//! which yields concrete point tuples and closes each contour.

pub mod curve;
mod iter;
mod stroke;

pub use iter::{Segment, Segments};
pub use stroke::{stroke_line, stroke_polygon};

use crate::coords::{Matrix, Rect, Vec2};

/// Tangent-control offset (times radius) for a 4-cubic circle approximation.
const CIRCLE_CONTROL: f32 = 0.551_915_024_493_510_570_743_562_7;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Verb {
    Move,
    Line,
    Quad,
    Cubic,
}

/// Winding direction for closed shape constructors.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PathDirection {
    Clockwise,
    CounterClockwise,
}

/// Ordered verb + point sequence describing contours of lines and curves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Vec2>,
    verbs: Vec<Verb>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// Starts a new contour at `p`.
    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.verbs.push(Verb::Move);
        self.points.push(p);
        self
    }

    /// # Panics
    /// Panics (debug only) when no contour has been started.
    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        debug_assert!(!self.verbs.is_empty(), "line_to before move_to");
        self.verbs.push(Verb::Line);
        self.points.push(p);
        self
    }

    pub fn quad_to(&mut self, ctrl: Vec2, end: Vec2) -> &mut Self {
        debug_assert!(!self.verbs.is_empty(), "quad_to before move_to");
        self.verbs.push(Verb::Quad);
        self.points.push(ctrl);
        self.points.push(end);
        self
    }

    pub fn cubic_to(&mut self, ctrl0: Vec2, ctrl1: Vec2, end: Vec2) -> &mut Self {
        debug_assert!(!self.verbs.is_empty(), "cubic_to before move_to");
        self.verbs.push(Verb::Cubic);
        self.points.push(ctrl0);
        self.points.push(ctrl1);
        self.points.push(end);
        self
    }

    /// Appends `rect` as a four-line contour wound in `direction`.
    pub fn add_rect(&mut self, rect: Rect, direction: PathDirection) -> &mut Self {
        self.move_to(Vec2::new(rect.left, rect.top));
        match direction {
            PathDirection::Clockwise => {
                self.line_to(Vec2::new(rect.right, rect.top));
                self.line_to(Vec2::new(rect.right, rect.bottom));
                self.line_to(Vec2::new(rect.left, rect.bottom));
            }
            PathDirection::CounterClockwise => {
                self.line_to(Vec2::new(rect.left, rect.bottom));
                self.line_to(Vec2::new(rect.right, rect.bottom));
                self.line_to(Vec2::new(rect.right, rect.top));
            }
        }
        self
    }

    /// Appends the points as one polygonal contour.
    ///
    /// # Panics
    /// Panics (debug only) with fewer than two points.
    pub fn add_polygon(&mut self, pts: &[Vec2]) -> &mut Self {
        debug_assert!(pts.len() >= 2);
        self.move_to(pts[0]);
        for &p in &pts[1..] {
            self.line_to(p);
        }
        self
    }

    /// Appends a circle contour approximated by four cubics, starting at the
    /// rightmost point.
    pub fn add_circle(&mut self, center: Vec2, radius: f32, direction: PathDirection) -> &mut Self {
        let (x, y) = (center.x, center.y);
        let d = radius * CIRCLE_CONTROL;

        self.move_to(Vec2::new(x + radius, y));
        match direction {
            PathDirection::Clockwise => {
                self.cubic_to(
                    Vec2::new(x + radius, y + d),
                    Vec2::new(x + d, y + radius),
                    Vec2::new(x, y + radius),
                );
                self.cubic_to(
                    Vec2::new(x - d, y + radius),
                    Vec2::new(x - radius, y + d),
                    Vec2::new(x - radius, y),
                );
                self.cubic_to(
                    Vec2::new(x - radius, y - d),
                    Vec2::new(x - d, y - radius),
                    Vec2::new(x, y - radius),
                );
                self.cubic_to(
                    Vec2::new(x + d, y - radius),
                    Vec2::new(x + radius, y - d),
                    Vec2::new(x + radius, y),
                );
            }
            PathDirection::CounterClockwise => {
                self.cubic_to(
                    Vec2::new(x + radius, y - d),
                    Vec2::new(x + d, y - radius),
                    Vec2::new(x, y - radius),
                );
                self.cubic_to(
                    Vec2::new(x - d, y - radius),
                    Vec2::new(x - radius, y - d),
                    Vec2::new(x - radius, y),
                );
                self.cubic_to(
                    Vec2::new(x - radius, y + d),
                    Vec2::new(x - d, y + radius),
                    Vec2::new(x, y + radius),
                );
                self.cubic_to(
                    Vec2::new(x + d, y + radius),
                    Vec2::new(x + radius, y + d),
                    Vec2::new(x + radius, y),
                );
            }
        }
        self
    }

    /// Maps every stored point through `matrix`.
    pub fn transform(&mut self, matrix: &Matrix) {
        matrix.map_points(&mut self.points);
    }

    pub fn reset(&mut self) {
        self.points.clear();
        self.verbs.clear();
    }

    /// Iterates concrete segments, one closing line per contour included.
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.points, &self.verbs)
    }

    /// Tight bounds over all segments, including curve extrema.
    ///
    /// An empty path reports a zero rect at the origin; a single move reports
    /// a zero-sized rect at that point.
    pub fn bounds(&self) -> Rect {
        match self.points.len() {
            0 => return Rect::ltrb(0.0, 0.0, 0.0, 0.0),
            1 => {
                let p = self.points[0];
                return Rect::xywh(p.x, p.y, 0.0, 0.0);
            }
            _ => {}
        }

        let mut bounds = BoundsAccum::new(self.points[0]);

        for seg in self.segments() {
            match seg {
                Segment::Line(pts) => {
                    bounds.add(pts[0]);
                    bounds.add(pts[1]);
                }
                Segment::Quad(pts) => {
                    bounds.add(pts[0]);
                    bounds.add(pts[2]);
                    // One candidate extremum per axis: t = (A-B) / (A-2B+C).
                    let tx = (pts[0].x - pts[1].x) / (pts[0].x - 2.0 * pts[1].x + pts[2].x);
                    let ty = (pts[0].y - pts[1].y) / (pts[0].y - 2.0 * pts[1].y + pts[2].y);
                    for t in [tx, ty] {
                        if (0.0..=1.0).contains(&t) {
                            bounds.add(curve::quad_point(&pts, t));
                        }
                    }
                }
                Segment::Cubic(pts) => {
                    bounds.add(pts[0]);
                    bounds.add(pts[3]);
                    for t in cubic_extrema(pts[0].x, pts[1].x, pts[2].x, pts[3].x)
                        .into_iter()
                        .chain(cubic_extrema(pts[0].y, pts[1].y, pts[2].y, pts[3].y))
                    {
                        if (0.0..=1.0).contains(&t) {
                            bounds.add(curve::cubic_point(&pts, t));
                        }
                    }
                }
            }
        }

        bounds.rect()
    }
}

/// Roots of one axis's cubic derivative, f'(t) = 3at^2 + 2bt + c with
/// a = -A+3B-3C+D, b = 2A-4B+2C, c = -A+B.
///
/// Out-of-range and NaN roots (negative discriminant, degenerate divisions)
/// fall out of the caller's [0, 1] filter.
fn cubic_extrema(a: f32, b: f32, c: f32, d: f32) -> [f32; 2] {
    let qa = -a + 3.0 * b - 3.0 * c + d;
    let qb = 2.0 * a - 4.0 * b + 2.0 * c;
    let qc = -a + b;

    if qa == 0.0 {
        return [-qc / qb, -1.0];
    }

    let root = (qb * qb - 4.0 * qa * qc).sqrt();
    [(-qb + root) / (2.0 * qa), (-qb - root) / (2.0 * qa)]
}

struct BoundsAccum {
    min: Vec2,
    max: Vec2,
}

impl BoundsAccum {
    fn new(p: Vec2) -> Self {
        Self { min: p, max: p }
    }

    fn add(&mut self, p: Vec2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    fn rect(&self) -> Rect {
        Rect::ltrb(self.min.x, self.min.y, self.max.x, self.max.y)
    }
}
