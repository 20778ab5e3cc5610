//!
//! Point set, edges and triangles of a mosaic.
//!

mod edge;
mod generate;
mod point;
mod triangle;

use std::collections::HashSet;

pub use edge::Edge;
pub use point::Point;
pub use triangle::Triangle;

use crate::error::{Error, Result};

/// The points of a mosaic along with the edges and triangles derived from triangulating them.
///
/// A graph starts with points only and `triangulate` populates edges and triangles exactly once.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    points: Vec<Point>,
    edges: HashSet<Edge>,
    triangles: Vec<Triangle>,
    triangulated: bool,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut g = Graph::new();
        for p in points {
            g.add_point(p);
        }
        g
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn edges(&self) -> &HashSet<Edge> {
        &self.edges
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn is_triangulated(&self) -> bool {
        self.triangulated
    }

    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }

    fn add_triangle(&mut self, t: Triangle) {
        self.triangles.push(t);
        self.edges.extend(t.edges().iter().copied());
    }

    /// Delaunay triangulate the points, recording triangles in the order the triangulation
    /// returns them.
    pub fn triangulate(&mut self) -> Result<()> {
        if self.triangulated {
            return Err(Error::AlreadyTriangulated);
        }
        if self.points.len() < 3 {
            return Err(Error::NotEnoughPoints(self.points.len()));
        }

        let coords = self.points.iter().map(|p| p.as_tuple()).collect::<Vec<_>>();
        let faces = delaunay_mesh::triangulate(&coords)?;

        for [i, j, k] in faces {
            let t = Triangle::new(self.points[i], self.points[j], self.points[k]);
            self.add_triangle(t);
        }
        self.triangulated = true;

        log::debug!(
            "triangulated {} points into {} triangles and {} edges",
            self.points.len(),
            self.triangles.len(),
            self.edges.len()
        );

        Ok(())
    }
}
