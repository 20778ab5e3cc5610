use super::{Edge, Point};

/// A face of the triangulation, vertices kept in the order the triangulation returned them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Triangle([Point; 3]);

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Triangle([a, b, c])
    }

    pub fn points(&self) -> &[Point; 3] {
        &self.0
    }

    /// The three sides, each vertex paired with the next one and the last with the first.
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.0;
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }

    /// Average of the vertices after snapping each of them inside a `width` x `height` canvas.
    pub fn centroid(&self, width: u32, height: u32) -> Point {
        let (sx, sy) = self.0.iter().copied().fold((0i64, 0i64), |(sx, sy), p| {
            let p = p.clamp_to(width, height);
            (sx + i64::from(p.x), sy + i64::from(p.y))
        });

        // both sums are non negative and bounded by 3 * i32::MAX
        Point::new((sx.div_euclid(3)) as i32, (sy.div_euclid(3)) as i32)
    }
}
