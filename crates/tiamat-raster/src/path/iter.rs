use crate::coords::Vec2;
use crate::path::Verb;

/// A concrete path segment including its implicit starting point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    Line([Vec2; 2]),
    Quad([Vec2; 3]),
    Cubic([Vec2; 4]),
}

/// Segment iterator over a path's verb/point streams.
///
/// Move verbs produce no segment; they re-anchor the current point. Each
/// contour that produced at least one segment is closed with a final line
/// back to its starting point (skipped when already coincident).
pub struct Segments<'a> {
    points: &'a [Vec2],
    verbs: &'a [Verb],
    verb_index: usize,
    point_index: usize,
    contour_start: Vec2,
    current: Vec2,
    contour_open: bool,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(points: &'a [Vec2], verbs: &'a [Verb]) -> Self {
        Self {
            points,
            verbs,
            verb_index: 0,
            point_index: 0,
            contour_start: Vec2::default(),
            current: Vec2::default(),
            contour_open: false,
        }
    }

    /// Emits the closing line for the contour in progress, if any.
    fn take_close(&mut self) -> Option<Segment> {
        if !self.contour_open {
            return None;
        }
        self.contour_open = false;

        if self.current == self.contour_start {
            return None;
        }
        Some(Segment::Line([self.current, self.contour_start]))
    }

    #[inline]
    fn take_point(&mut self) -> Vec2 {
        let p = self.points[self.point_index];
        self.point_index += 1;
        p
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            let Some(&verb) = self.verbs.get(self.verb_index) else {
                return self.take_close();
            };

            match verb {
                Verb::Move => {
                    // Close the previous contour before consuming the move.
                    if let Some(close) = self.take_close() {
                        return Some(close);
                    }
                    self.verb_index += 1;
                    let p = self.take_point();
                    self.contour_start = p;
                    self.current = p;
                }
                Verb::Line => {
                    self.verb_index += 1;
                    let p0 = self.current;
                    let p1 = self.take_point();
                    self.current = p1;
                    self.contour_open = true;
                    return Some(Segment::Line([p0, p1]));
                }
                Verb::Quad => {
                    self.verb_index += 1;
                    let p0 = self.current;
                    let ctrl = self.take_point();
                    let end = self.take_point();
                    self.current = end;
                    self.contour_open = true;
                    return Some(Segment::Quad([p0, ctrl, end]));
                }
                Verb::Cubic => {
                    self.verb_index += 1;
                    let p0 = self.current;
                    let ctrl0 = self.take_point();
                    let ctrl1 = self.take_point();
                    let end = self.take_point();
                    self.current = end;
                    self.contour_open = true;
                    return Some(Segment::Cubic([p0, ctrl0, ctrl1, end]));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::path::{Path, PathDirection};

    #[test]
    fn open_polygon_gains_a_closing_line() {
        let mut path = Path::new();
        path.add_polygon(&[Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(4.0, 4.0)]);

        let segs: Vec<_> = path.segments().collect();
        assert_eq!(
            segs,
            vec![
                Segment::Line([Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0)]),
                Segment::Line([Vec2::new(4.0, 0.0), Vec2::new(4.0, 4.0)]),
                Segment::Line([Vec2::new(4.0, 4.0), Vec2::new(0.0, 0.0)]),
            ]
        );
    }

    #[test]
    fn coincident_endpoint_skips_the_closer() {
        let mut path = Path::new();
        path.add_circle(Vec2::new(0.0, 0.0), 1.0, PathDirection::Clockwise);

        // Four cubics return to the start; no extra closing line appears.
        let segs: Vec<_> = path.segments().collect();
        assert_eq!(segs.len(), 4);
        assert!(segs.iter().all(|s| matches!(s, Segment::Cubic(_))));
    }

    #[test]
    fn multiple_contours_close_independently() {
        let mut path = Path::new();
        path.add_rect(Rect::ltrb(0.0, 0.0, 2.0, 2.0), PathDirection::Clockwise);
        path.add_polygon(&[Vec2::new(5.0, 5.0), Vec2::new(7.0, 5.0), Vec2::new(6.0, 7.0)]);

        let segs: Vec<_> = path.segments().collect();
        // rect: 3 explicit + close; triangle: 2 explicit + close
        assert_eq!(segs.len(), 7);
        assert_eq!(
            segs[3],
            Segment::Line([Vec2::new(0.0, 2.0), Vec2::new(0.0, 0.0)]),
        );
        assert_eq!(
            segs[6],
            Segment::Line([Vec2::new(6.0, 7.0), Vec2::new(5.0, 5.0)]),
        );
    }

    #[test]
    fn bare_moves_produce_nothing() {
        let mut path = Path::new();
        path.move_to(Vec2::new(1.0, 1.0));
        path.move_to(Vec2::new(2.0, 2.0));
        assert_eq!(path.segments().count(), 0);
    }
}
