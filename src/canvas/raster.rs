//!
//! Thin layer over `imageproc` drawing in mosaic coordinates.
//!

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point as PixelPoint;

use crate::graph::Point;

/// Fill the triangle `abc`, boundaries included, whatever its winding.
///
/// Degenerate triangles draw nothing, `draw_polygon_mut` can't deal with a polygon whose first
/// and last vertices coincide.
pub fn fill_triangle(img: &mut RgbImage, points: [Point; 3], color: Rgb<u8>) {
    if is_degenerate(&points) {
        return;
    }

    let poly = points.map(|p| PixelPoint::new(p.x, p.y));
    draw_polygon_mut(img, &poly, color);
}

/// Segment between `p` and `q`, pixels outside of the image are skipped.
pub fn draw_line(img: &mut RgbImage, p: Point, q: Point, color: Rgb<u8>) {
    draw_line_segment_mut(img, (p.x as f32, p.y as f32), (q.x as f32, q.y as f32), color);
}

/// Filled disc of radius `r` centered in `center`.
pub fn draw_disc(img: &mut RgbImage, center: Point, r: i32, color: Rgb<u8>) {
    draw_filled_circle_mut(img, center.as_tuple(), r, color);
}

fn is_degenerate([a, b, c]: &[Point; 3]) -> bool {
    if a == b || b == c || a == c {
        return true;
    }

    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));
    let (cx, cy) = (i64::from(c.x), i64::from(c.y));

    (bx - ax) * (cy - ay) - (cx - ax) * (by - ay) == 0
}
