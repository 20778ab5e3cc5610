//!
//! Incremental Delaunay triangulation over integer points.
//!
//! The triangulation is built with the Bowyer-Watson algorithm. The hull is closed by ghost
//! triangles sharing a vertex at infinity instead of a finite super triangle, so no valid
//! triangle is ever lost to a far away bounding vertex. Insertions locate the point by walking
//! the mesh from the last created triangle. All the geometric predicates are evaluated exactly
//! on `i128`, so cocircular and collinear inputs (very common on regular grids) never produce
//! inconsistent meshes.
//!

pub mod arena;
pub mod geo;
pub mod mesh;

use std::error::Error;
use std::fmt;

pub use mesh::DelaunayMesh;

/// Largest absolute value allowed for an input coordinate.
pub const MAX_COORD: i64 = 1 << 26;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriangulateError {
    CoordinateOutOfRange { x: i64, y: i64 },
}

impl fmt::Display for TriangulateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TriangulateError::CoordinateOutOfRange { x, y } => write!(
                f,
                "point ({}, {}) is outside the supported range [-{max}, {max}]",
                x,
                y,
                max = MAX_COORD
            ),
        }
    }
}

impl Error for TriangulateError {}

/// Triangulate the given points and return the triangles as triples of indices into `points`.
///
/// Triangles are returned in a deterministic order and always counter-clockwise (in a y-up
/// frame). Duplicated points are triangulated once, the later copies are never referenced.
/// Less than 3 distinct points or a fully collinear input produce no triangles.
pub fn triangulate(points: &[(i32, i32)]) -> Result<Vec<[usize; 3]>, TriangulateError> {
    let mut mesh = DelaunayMesh::new();

    let mut input_ix = vec![];
    for (i, &(x, y)) in points.iter().enumerate() {
        if let Some(vid) = mesh.insert(geo::Vec2::new(x.into(), y.into()))? {
            if input_ix.len() <= vid.index() {
                input_ix.resize(vid.index() + 1, None);
            }
            input_ix[vid.index()] = Some(i);
        }
    }

    let triangles = mesh
        .triangles()
        .filter_map(|tri| {
            let a = input_ix.get(tri[0].index()).copied().flatten()?;
            let b = input_ix.get(tri[1].index()).copied().flatten()?;
            let c = input_ix.get(tri[2].index()).copied().flatten()?;
            Some([a, b, c])
        })
        .collect();

    Ok(triangles)
}
