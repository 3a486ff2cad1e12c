//! Span generation and blitting.
//!
//! Two walks over sorted edges: a two-edge cursor for convex fills and a
//! winding-counter sweep for general paths. Both hand half-open spans to
//! [`blit`].

use crate::bitmap::Bitmap;
use crate::paint::BlendMode;
use crate::pixel::Pixel;
use crate::raster::{Edge, order_by_x, round_clamped, round_half_up};
use crate::shade::ShaderSession;

/// Where span pixels come from: the paint's constant premultiplied color, or
/// a shader session with its reusable row buffer.
pub(super) enum SpanSource<'s> {
    Solid(Pixel),
    Shaded {
        session: ShaderSession<'s>,
        opaque: bool,
        buf: Vec<Pixel>,
    },
}

/// Fills `[left, right)` on row `y`. Opaque shader output overwrites the
/// destination; everything else blends through `mode`.
fn blit(device: &mut Bitmap, left: i32, right: i32, y: i32, source: &mut SpanSource<'_>, mode: BlendMode) {
    if left >= right {
        return;
    }
    debug_assert!(y >= 0 && (y as usize) < device.height());
    debug_assert!(left >= 0 && (right as usize) <= device.width());

    let y = y as usize;

    match source {
        SpanSource::Solid(s) => {
            for x in left..right {
                let dst = device.pixel_mut(x as usize, y);
                *dst = mode.apply(*s, *dst);
            }
        }
        SpanSource::Shaded { session, opaque, buf } => {
            let n = (right - left) as usize;
            buf.resize(n, Pixel::TRANSPARENT);
            session.shade_row(left, y as i32, buf);

            if *opaque {
                for (i, &px) in buf.iter().enumerate() {
                    *device.pixel_mut(left as usize + i, y) = px;
                }
            } else {
                for (i, &px) in buf.iter().enumerate() {
                    let dst = device.pixel_mut(left as usize + i, y);
                    *dst = mode.apply(px, *dst);
                }
            }
        }
    }
}

/// Convex fill: the first two sorted edges are the active pair; each time an
/// active edge ends, the cursor supplies the next.
///
/// Valid only for convex input, where exactly two edges cross every row in
/// top-to-bottom order.
pub(super) fn simple_scan(
    device: &mut Bitmap,
    edges: &[Edge],
    source: &mut SpanSource<'_>,
    mode: BlendMode,
) {
    let mut e0 = edges[0];
    let mut e1 = edges[1];
    let mut next = 2;

    let mut x_left = e0.curr_x;
    let mut x_right = e1.curr_x;

    let y_min = edges[0].top;
    let y_max = edges[edges.len() - 1].bottom;

    for y in y_min..y_max {
        if e0.bottom == y {
            e0 = edges[next];
            next += 1;
            x_left = e0.curr_x;
        }
        if e1.bottom == y {
            e1 = edges[next];
            next += 1;
            x_right = e1.curr_x;
        }

        blit(device, round_clamped(x_left), round_clamped(x_right), y, source, mode);

        x_left += e0.m;
        x_right += e1.m;
    }
}

/// Non-zero winding sweep.
///
/// Per row: walk the edges valid at `y` in x order, accumulating winding; a
/// span opens when the counter leaves 0 and closes when it returns. Expired
/// edges drop out, survivors step their x, and the active prefix re-sorts so
/// crossings are ordered for the next row.
pub(super) fn complex_scan(
    device: &mut Bitmap,
    mut edges: Vec<Edge>,
    source: &mut SpanSource<'_>,
    mode: BlendMode,
) {
    let mut y = edges[0].top;
    let mut left = 0;

    while !edges.is_empty() {
        let mut i = 0;
        let mut w = 0;

        while i < edges.len() && edges[i].valid_at(y) {
            if w == 0 {
                left = round_half_up(edges[i].curr_x);
            }

            debug_assert!(edges[i].wind == 1 || edges[i].wind == -1);
            w += edges[i].wind;

            if w == 0 {
                let right = round_half_up(edges[i].curr_x);
                blit(device, left, right, y, source, mode);
            }

            if !edges[i].valid_at(y + 1) {
                edges.remove(i);
            } else {
                edges[i].curr_x += edges[i].m;
                i += 1;
            }
        }

        debug_assert!(w == 0, "winding must balance after a full row");

        y += 1;

        // fold edges that become active on the new row into the re-sort
        while i < edges.len() && edges[i].valid_at(y) {
            i += 1;
        }
        edges[..i].sort_by(order_by_x);
    }
}
