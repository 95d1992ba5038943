// SPDX-License-Identifier: LGPL-3.0-only

//! Flat-color shape stamping.
//!
//! Every primitive writes through [PixelCanvas::set_pixel] semantics: later
//! writes overwrite earlier ones, there is no blending and no anti-aliasing,
//! and anything outside the canvas is clipped. Degenerate shapes (non-positive
//! sizes or radii, zero-area triangles) paint nothing. None of these functions
//! can fail.
//!
//! Coordinates are widened to `i64` for squared distances and to `i128` for
//! edge functions and line stepping, so extreme `i32` inputs cannot overflow.
//! Every loop is bounded by the canvas, never by the extent of the shape.

use nalgebra::Point2;

use crate::canvas::PixelCanvas;
use crate::color::Color;

/// Clamp the half-open span `[start, start + len)` to `[0, limit)`.
fn clip_span(start: i64, len: i64, limit: i64) -> (i64, i64) {
    (start.clamp(0, limit), (start + len).clamp(0, limit))
}

/// Paint every cell in `[x, x + w) × [y, y + h)`.
///
/// Zero or negative `w`/`h` paints nothing.
pub fn filled_rect(canvas: &mut PixelCanvas, x: i32, y: i32, w: i32, h: i32, color: Color) {
    if w <= 0 || h <= 0 {
        return;
    }
    let n = canvas.size() as i64;
    let (x0, x1) = clip_span(x as i64, w as i64, n);
    let (y0, y1) = clip_span(y as i64, h as i64, n);
    for py in y0..y1 {
        for px in x0..x1 {
            canvas.set_pixel(px as i32, py as i32, color);
        }
    }
}

/// Paint a rectangular frame whose bands are `thickness` pixels wide, drawn
/// inside `[x, x + w) × [y, y + h)`.
pub fn rect_outline(
    canvas: &mut PixelCanvas,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    thickness: i32,
    color: Color,
) {
    if w <= 0 || h <= 0 || thickness <= 0 {
        return;
    }
    let tx = thickness.min(w);
    let ty = thickness.min(h);
    filled_rect(canvas, x, y, w, ty, color);
    filled_rect(canvas, x, y + h - ty, w, ty, color);
    filled_rect(canvas, x, y, tx, h, color);
    filled_rect(canvas, x + w - tx, y, tx, h, color);
}

/// Iterate the clipped bounding box of a disc and paint every cell
/// whose squared distance from the center satisfies `inside`.
fn for_each_in_disc(
    canvas: &mut PixelCanvas,
    cx: i32,
    cy: i32,
    r: i32,
    inside: impl Fn(i64) -> bool,
    color: Color,
) {
    let n = canvas.size() as i64;
    let (cx, cy, r) = (cx as i64, cy as i64, r as i64);
    let (x0, x1) = clip_span(cx - r, 2 * r + 1, n);
    let (y0, y1) = clip_span(cy - r, 2 * r + 1, n);
    for py in y0..y1 {
        let dy = py - cy;
        for px in x0..x1 {
            let dx = px - cx;
            if inside(dx * dx + dy * dy) {
                canvas.set_pixel(px as i32, py as i32, color);
            }
        }
    }
}

/// Paint every cell with `(x - cx)² + (y - cy)² ≤ r²`.
///
/// `r ≤ 0` paints nothing, not even the center.
pub fn filled_circle(canvas: &mut PixelCanvas, cx: i32, cy: i32, r: i32, color: Color) {
    if r <= 0 {
        return;
    }
    let outer = r as i64 * r as i64;
    for_each_in_disc(canvas, cx, cy, r, |d2| d2 <= outer, color);
}

/// Paint the annulus of cells whose squared distance lies in
/// `[(r - thickness)², r²]`.
///
/// The inner radius is floored at zero, so `thickness ≥ r` yields a filled
/// circle. `r ≤ 0` or `thickness ≤ 0` paints nothing.
pub fn circle_outline(
    canvas: &mut PixelCanvas,
    cx: i32,
    cy: i32,
    r: i32,
    thickness: i32,
    color: Color,
) {
    if r <= 0 || thickness <= 0 {
        return;
    }
    let outer = r as i64 * r as i64;
    let inner_r = (r as i64 - thickness as i64).max(0);
    let inner = inner_r * inner_r;
    for_each_in_disc(canvas, cx, cy, r, |d2| d2 >= inner && d2 <= outer, color);
}

/// Stamp a `thickness × thickness` square brush centered on `(x, y)`.
///
/// Odd sizes are centered exactly; even sizes extend one pixel further to the
/// right and bottom. `thickness ≤ 1` stamps a single pixel.
fn stamp_brush(canvas: &mut PixelCanvas, x: i32, y: i32, thickness: i32, color: Color) {
    if thickness <= 1 {
        canvas.set_pixel(x, y, color);
        return;
    }
    let back = (thickness - 1) / 2;
    filled_rect(
        canvas,
        x.saturating_sub(back),
        y.saturating_sub(back),
        thickness,
        thickness,
        color,
    );
}

/// Range of brush centers on one axis whose stamp can touch `[0, size)`.
fn brush_reach(size: u32, thickness: i32) -> (i64, i64) {
    let t = thickness.max(1) as i64;
    let back = (t - 1) / 2;
    (-(t - 1 - back), size as i64 - 1 + back)
}

/// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included,
/// stamping a square brush at every stepped point.
///
/// This is brush stamping, not a perpendicular-offset stroke: steep diagonals
/// come out visibly wider than axis-aligned runs.
///
/// Only the steps whose brush can reach the canvas are visited. Step `k`
/// along the major axis sits at minor offset
/// `floor((2 * minor * k + major) / (2 * major))`, which is the point the
/// incremental error walk reaches after `k` steps.
pub fn line(
    canvas: &mut PixelCanvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: i32,
    color: Color,
) {
    let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
    let (adx, ady) = ((x1 - x0).abs(), (y1 - y0).abs());
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let x_major = adx >= ady;
    let (major, minor) = if x_major { (adx, ady) } else { (ady, adx) };
    let (m0, ms, n0, ns) = if x_major {
        (x0, sx, y0, sy)
    } else {
        (y0, sy, x0, sx)
    };

    let (lo, hi) = brush_reach(canvas.size(), thickness);
    let (k0, k1) = if ms > 0 {
        (lo - m0, hi - m0)
    } else {
        (m0 - hi, m0 - lo)
    };
    let (k0, k1) = (k0.max(0), k1.min(major));

    for k in k0..=k1 {
        let offset = if major == 0 {
            0
        } else {
            ((2 * minor as i128 * k as i128 + major as i128) / (2 * major as i128)) as i64
        };
        let m = m0 + ms * k;
        let n = n0 + ns * offset;
        if n < lo || n > hi {
            continue;
        }
        let (x, y) = if x_major { (m, n) } else { (n, m) };
        stamp_brush(canvas, x as i32, y as i32, thickness, color);
    }
}

/// Connect consecutive points with [line] segments.
pub fn polyline(canvas: &mut PixelCanvas, points: &[Point2<i32>], thickness: i32, color: Color) {
    match points {
        [] => {},
        [only] => stamp_brush(canvas, only.x, only.y, thickness, color),
        _ => {
            for pair in points.windows(2) {
                line(canvas, pair[0].x, pair[0].y, pair[1].x, pair[1].y, thickness, color);
            }
        },
    }
}

/// Twice the signed area of the triangle `(a, b, p)`.
#[inline]
fn edge(a: Point2<i64>, b: Point2<i64>, p: Point2<i64>) -> i128 {
    (b.x - a.x) as i128 * (p.y - a.y) as i128 - (b.y - a.y) as i128 * (p.x - a.x) as i128
}

/// Fill a triangle given in either winding order.
///
/// Every integer point of the clipped bounding box is tested with a sign test
/// on the three edge functions. Points on an edge count as inside. Collinear
/// vertices have zero area and paint nothing.
pub fn filled_triangle(
    canvas: &mut PixelCanvas,
    p0: Point2<i32>,
    p1: Point2<i32>,
    p2: Point2<i32>,
    color: Color,
) {
    let widen = |p: Point2<i32>| Point2::new(p.x as i64, p.y as i64);
    let (a, b, c) = (widen(p0), widen(p1), widen(p2));

    let area = edge(a, b, c);
    if area == 0 {
        return;
    }

    let n = canvas.size() as i64;
    let min_x = a.x.min(b.x).min(c.x).clamp(0, n);
    let max_x = (a.x.max(b.x).max(c.x) + 1).clamp(0, n);
    let min_y = a.y.min(b.y).min(c.y).clamp(0, n);
    let max_y = (a.y.max(b.y).max(c.y) + 1).clamp(0, n);

    for py in min_y..max_y {
        for px in min_x..max_x {
            let p = Point2::new(px, py);
            let w0 = edge(b, c, p);
            let w1 = edge(c, a, p);
            let w2 = edge(a, b, p);
            let inside = if area > 0 {
                w0 >= 0 && w1 >= 0 && w2 >= 0
            } else {
                w0 <= 0 && w1 <= 0 && w2 <= 0
            };
            if inside {
                canvas.set_pixel(px as i32, py as i32, color);
            }
        }
    }
}
