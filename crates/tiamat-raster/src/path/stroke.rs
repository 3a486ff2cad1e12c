use crate::coords::Vec2;
use crate::path::{Path, PathDirection};

/// Appends the filled footprint of segment `p0..p1` stroked `width` wide:
/// the offset rectangle plus a round cap (full circle) at each endpoint.
///
/// The result is ordinary geometry; fill it with non-zero winding via
/// `draw_path`. Coverage is geometric, not subpixel-accurate.
pub fn stroke_line(path: &mut Path, p0: Vec2, p1: Vec2, width: f32) {
    let (p0, p1) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };

    let d = p1 - p0;
    let half = width / 2.0;

    // unit normal
    let normal = Vec2::new(-d.y, d.x);
    let normal = normal * (1.0 / normal.length());

    path.move_to(p0 + normal * half);
    path.line_to(p0 - normal * half);
    path.line_to(p1 - normal * half);
    path.line_to(p1 + normal * half);

    path.add_circle(p0, half, PathDirection::Clockwise);
    path.add_circle(p1, half, PathDirection::Clockwise);
}

/// Builds a path covering the polyline through `points` stroked `width`
/// wide; `closed` also strokes the segment joining the last point back to
/// the first.
pub fn stroke_polygon(points: &[Vec2], width: f32, closed: bool) -> Path {
    let mut path = Path::new();

    for pair in points.windows(2) {
        stroke_line(&mut path, pair[0], pair[1], width);
    }

    if closed && points.len() >= 2 {
        stroke_line(&mut path, points[0], points[points.len() - 1], width);
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;

    #[test]
    fn horizontal_stroke_bounds_cover_rect_plus_caps() {
        let mut path = Path::new();
        stroke_line(&mut path, Vec2::new(2.0, 5.0), Vec2::new(8.0, 5.0), 2.0);

        // Body spans x [2, 8] at y [4, 6]; caps extend one unit past each end.
        let b = path.bounds();
        let expected = Rect::ltrb(1.0, 4.0, 9.0, 6.0);
        for (got, want) in [
            (b.left, expected.left),
            (b.top, expected.top),
            (b.right, expected.right),
            (b.bottom, expected.bottom),
        ] {
            assert!((got - want).abs() < 1e-3, "{b:?}");
        }
    }

    #[test]
    fn endpoints_are_x_ordered_before_offsetting() {
        let mut forward = Path::new();
        stroke_line(&mut forward, Vec2::new(0.0, 0.0), Vec2::new(4.0, 1.0), 1.0);

        let mut reversed = Path::new();
        stroke_line(&mut reversed, Vec2::new(4.0, 1.0), Vec2::new(0.0, 0.0), 1.0);

        assert_eq!(forward, reversed);
    }

    #[test]
    fn open_polyline_strokes_consecutive_segments() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(4.0, 4.0)];
        let path = stroke_polygon(&pts, 1.0, false);

        // Two stroked segments: each contributes one quad + two cap circles.
        let moves =
            path.verbs().iter().filter(|v| matches!(v, crate::path::Verb::Move)).count();
        assert_eq!(moves, 2 * 3);
    }

    #[test]
    fn closed_polyline_adds_the_joining_segment() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(2.0, 3.0)];
        let open = stroke_polygon(&pts, 1.0, false);
        let closed = stroke_polygon(&pts, 1.0, true);

        let count_moves = |p: &Path| {
            p.verbs().iter().filter(|v| matches!(v, crate::path::Verb::Move)).count()
        };
        assert_eq!(count_moves(&closed), count_moves(&open) + 3);
    }
}
