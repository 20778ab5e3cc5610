use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::io;
use std::io::Write;

use crate::arena::{Arena, ArenaId};
use crate::geo::{incircle, orient, strictly_between, Bbox, Vec2};
use crate::{TriangulateError, MAX_COORD};

pub type VertexId = ArenaId<Vertex>;
pub type TriangleId = ArenaId<Triangle>;

/// Delaunay triangulation closed by a vertex at infinity.
///
/// Every hull edge `ab` is paired with a ghost triangle `[b, a, infinite]`, so the mesh is
/// always a closed surface and every directed edge has a twin. Real triangles are counter
/// clockwise (in a y-up frame), ghost triangles keep the infinite vertex last.
#[derive(Debug)]
pub struct DelaunayMesh {
    pub triangles: Arena<Triangle>,
    pub vertices: Arena<Vertex>,
    infinite: VertexId,
    positions: HashMap<Vec2, VertexId>,
    edges: HashMap<(VertexId, VertexId), TriangleId>,
    // collinear vertices waiting for a point that spans a triangle
    pending: Vec<VertexId>,
    last: Option<TriangleId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [VertexId; 3],
}

#[derive(Debug)]
pub struct Vertex {
    pub position: Vec2,
}

/// The triangles touched by a single insertion.
#[derive(Debug, Default)]
pub struct Roi {
    pub old_triangles: Vec<Triangle>,
    pub new_triangles: Vec<TriangleId>,
}

impl DelaunayMesh {
    pub fn new() -> Self {
        let mut vertices = Arena::new();
        let infinite = vertices.push(Vertex {
            position: Vec2::zero(),
        });

        DelaunayMesh {
            triangles: Arena::new(),
            vertices,
            infinite,
            positions: HashMap::new(),
            edges: HashMap::new(),
            pending: vec![],
            last: None,
        }
    }

    /// Insert a point in the triangulation.
    ///
    /// Returns the id of the new vertex or `None` if a vertex already exists at `p`.
    pub fn insert(&mut self, p: Vec2) -> Result<Option<VertexId>, TriangulateError> {
        Ok(self.insert_with_roi(p)?.map(|(vid, _)| vid))
    }

    pub fn insert_with_roi(
        &mut self,
        p: Vec2,
    ) -> Result<Option<(VertexId, Roi)>, TriangulateError> {
        if p.x.abs() > MAX_COORD || p.y.abs() > MAX_COORD {
            return Err(TriangulateError::CoordinateOutOfRange { x: p.x, y: p.y });
        }

        if self.positions.contains_key(&p) {
            return Ok(None);
        }

        let vid = self.vertices.push(Vertex { position: p });
        self.positions.insert(p, vid);

        let roi = if self.triangles.is_empty() {
            self.seed(vid)
        } else {
            self.insert_vertex(vid)
        };

        Ok(Some((vid, roi)))
    }

    /// Iterate over the real triangles, ghost triangles are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = [VertexId; 3]> + '_ {
        self.triangles
            .iter()
            .map(|(_, tri)| tri.vertices)
            .filter(move |vs| !vs.contains(&self.infinite))
    }

    pub fn vertex_position(&self, vid: VertexId) -> Vec2 {
        self.position(vid)
    }

    pub fn triangle_vertices(&self, tri: Triangle) -> [Vec2; 3] {
        [
            self.position(tri.vertices[0]),
            self.position(tri.vertices[1]),
            self.position(tri.vertices[2]),
        ]
    }

    pub fn is_ghost(&self, tri: Triangle) -> bool {
        tri.vertices[2] == self.infinite
    }

    pub fn bbox(&self) -> Option<Bbox> {
        let mut it = self.positions.keys();
        let mut bbox = Bbox::new(*it.next()?);
        for &p in it {
            bbox.expand(p);
        }
        Some(bbox)
    }

    /// Wait until a vertex is not collinear with the first two, then build the first triangle
    /// and insert the collinear vertices seen so far.
    fn seed(&mut self, vid: VertexId) -> Roi {
        self.pending.push(vid);
        if self.pending.len() < 3 {
            return Roi::default();
        }

        let (a, b) = (self.pending[0], self.pending[1]);
        let o = orient(self.position(a), self.position(b), self.position(vid));
        if o == 0 {
            return Roi::default();
        }

        let (b, c) = if o > 0 { (b, vid) } else { (vid, b) };
        let inf = self.infinite;
        for &vertices in &[[a, b, c], [b, a, inf], [c, b, inf], [a, c, inf]] {
            self.add_triangle(vertices, None);
        }

        let collinear = self.pending[2..self.pending.len() - 1].to_vec();
        self.pending.clear();
        for v in collinear {
            self.insert_vertex(v);
        }

        Roi {
            old_triangles: vec![],
            new_triangles: self.triangles.iter().map(|(tid, _)| tid).collect(),
        }
    }

    fn insert_vertex(&mut self, vid: VertexId) -> Roi {
        let p = self.position(vid);

        let start = match self.locate(p) {
            Some(tid) => tid,
            None => return Roi::default(),
        };

        let mut cavity = vec![start];
        let mut in_cavity = HashSet::new();
        in_cavity.insert(start);

        let mut i = 0;
        while i < cavity.len() {
            let tid = cavity[i];
            i += 1;

            for &(a, b) in &edges(self.triangles[tid]) {
                let nid = self.edges[&(b, a)];
                if !in_cavity.contains(&nid) && self.in_conflict(self.triangles[nid], p) {
                    in_cavity.insert(nid);
                    cavity.push(nid);
                }
            }
        }

        // edges without a twin in the cavity bound it and already wind around `p`
        let boundary = cavity
            .iter()
            .flat_map(|&tid| edges(self.triangles[tid]))
            .filter(|&(a, b)| !in_cavity.contains(&self.edges[&(b, a)]))
            .collect::<Vec<_>>();

        debug_assert_eq!(boundary.len(), cavity.len() + 2);

        for &tid in &cavity {
            for e in &edges(self.triangles[tid]) {
                self.edges.remove(e);
            }
        }

        let mut roi = Roi {
            old_triangles: Vec::with_capacity(cavity.len()),
            new_triangles: Vec::with_capacity(boundary.len()),
        };

        let mut free_slots = cavity.into_iter();
        for (a, b) in boundary {
            let slot = free_slots.next();
            if let Some(tid) = slot {
                roi.old_triangles.push(self.triangles[tid]);
            }

            roi.new_triangles.push(self.add_triangle([a, b, vid], slot));
        }

        roi
    }

    /// Find a triangle in conflict with `p` walking from the last created one.
    fn locate(&self, p: Vec2) -> Option<TriangleId> {
        let mut tid = self.last?;

        for _ in 0..self.triangles.len() {
            let tri = self.triangles[tid];

            if self.is_ghost(tri) {
                if self.in_conflict(tri, p) {
                    return Some(tid);
                }

                let [a, b, _] = tri.vertices;
                tid = self.edges[&(b, a)];
                continue;
            }

            let next = edges(tri)
                .iter()
                .find(|&&(a, b)| orient(self.position(a), self.position(b), p) < 0)
                .map(|&(a, b)| self.edges[&(b, a)]);

            match next {
                Some(next) => tid = next,
                None => return Some(tid),
            }
        }

        log::warn!("walk towards {:?} did not converge, scanning every triangle", p);
        self.triangles
            .iter()
            .find(|(_, tri)| self.in_conflict(**tri, p))
            .map(|(tid, _)| tid)
    }

    /// Whether `p` lies inside the circumcircle of `tri`.
    ///
    /// The circumcircle of a ghost triangle is the open half plane beyond its hull edge plus the
    /// interior of the edge itself.
    fn in_conflict(&self, tri: Triangle, p: Vec2) -> bool {
        let [a, b, c] = tri.vertices;
        let (pa, pb) = (self.position(a), self.position(b));

        if c != self.infinite {
            return incircle(pa, pb, self.position(c), p) > 0;
        }

        match orient(pa, pb, p).cmp(&0) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => strictly_between(pa, pb, p),
        }
    }

    fn add_triangle(&mut self, vertices: [VertexId; 3], slot: Option<TriangleId>) -> TriangleId {
        let [a, b, c] = vertices;
        let vertices = if a == self.infinite {
            [b, c, a]
        } else if b == self.infinite {
            [c, a, b]
        } else {
            vertices
        };
        let tri = Triangle { vertices };

        debug_assert!(
            self.is_ghost(tri)
                || orient(self.position(a), self.position(b), self.position(c)) > 0
        );

        let tid = match slot {
            Some(tid) => {
                self.triangles.replace(tid, tri);
                tid
            }
            None => self.triangles.push(tri),
        };

        for &e in &edges(tri) {
            self.edges.insert(e, tid);
        }
        self.last = Some(tid);

        tid
    }

    fn position(&self, vid: VertexId) -> Vec2 {
        self.vertices[vid].position
    }
}

impl Default for DelaunayMesh {
    fn default() -> Self {
        DelaunayMesh::new()
    }
}

fn edges(tri: Triangle) -> [(VertexId, VertexId); 3] {
    let [a, b, c] = tri.vertices;
    [(a, b), (b, c), (c, a)]
}

pub fn dump_svg(w: &mut impl Write, mesh: &DelaunayMesh) -> io::Result<()> {
    let bbox = match mesh.bbox() {
        Some(bbox) => bbox,
        None => Bbox::new(Vec2::zero()),
    };
    let (min, max) = (bbox.min(), bbox.max());

    writeln!(
        w,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        min.x - 10,
        min.y - 10,
        max.x - min.x + 20,
        max.y - min.y + 20,
    )?;
    writeln!(
        w,
        r#"<rect x="{}" y="{}" width="100%" height="100%" fill="white" />"#,
        min.x - 10,
        min.y - 10,
    )?;

    for tri in mesh.triangles() {
        let [a, b, c] = [
            mesh.vertex_position(tri[0]),
            mesh.vertex_position(tri[1]),
            mesh.vertex_position(tri[2]),
        ];

        writeln!(
            w,
            r#"<polygon points="{},{} {},{} {},{}" fill="none" stroke="black" />"#,
            a.x, a.y, b.x, b.y, c.x, c.y
        )?;
    }

    for &p in mesh.positions.keys() {
        writeln!(w, r#"<circle cx="{}" cy="{}" r="2" fill="red" />"#, p.x, p.y)?;
    }

    writeln!(w, "</svg>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_closed(mesh: &DelaunayMesh) {
        for (tid, tri) in mesh.triangles.iter() {
            for &(a, b) in &edges(*tri) {
                assert_eq!(mesh.edges[&(a, b)], tid);
                assert!(mesh.edges.contains_key(&(b, a)));
            }
        }
        assert_eq!(mesh.edges.len(), 3 * mesh.triangles.len());
    }

    #[test]
    fn insertion_replaces_the_cavity() {
        let mut mesh = DelaunayMesh::new();

        mesh.insert(Vec2::new(0, 0)).unwrap();
        let (_, roi) = mesh.insert_with_roi(Vec2::new(10, 0)).unwrap().unwrap();
        assert!(roi.new_triangles.is_empty());
        assert!(mesh.triangles.is_empty());

        let (_, roi) = mesh.insert_with_roi(Vec2::new(0, 10)).unwrap().unwrap();
        assert_eq!(roi.new_triangles.len(), 4);
        assert_eq!(mesh.triangles().count(), 1);
        assert_closed(&mesh);

        let (_, roi) = mesh.insert_with_roi(Vec2::new(3, 3)).unwrap().unwrap();
        assert_eq!(roi.old_triangles.len(), 1);
        assert_eq!(roi.new_triangles.len(), 3);
        assert_eq!(mesh.triangles.len(), 6);
        assert_eq!(mesh.triangles().count(), 3);
        assert_closed(&mesh);

        assert!(mesh.insert(Vec2::new(10, 0)).unwrap().is_none());
        assert_eq!(mesh.triangles().count(), 3);
    }

    #[test]
    fn points_outside_the_hull() {
        let mut mesh = DelaunayMesh::new();
        for &(x, y) in &[(0, 0), (10, 0), (0, 10), (20, 20), (-5, -5), (30, 0), (0, 30)] {
            mesh.insert(Vec2::new(x, y)).unwrap();
            assert_closed(&mesh);
        }

        for tri in mesh.triangles() {
            let [a, b, c] = [
                mesh.vertex_position(tri[0]),
                mesh.vertex_position(tri[1]),
                mesh.vertex_position(tri[2]),
            ];
            assert!(orient(a, b, c) > 0);
        }

        // 7 vertices, 4 of them on the hull
        assert_eq!(mesh.triangles().count(), 2 * 7 - 4 - 2);
    }

    #[test]
    fn collinear_points_wait_for_a_triangle() {
        let mut mesh = DelaunayMesh::new();
        for &(x, y) in &[(0, 0), (1, 0), (2, 0), (3, 0)] {
            mesh.insert(Vec2::new(x, y)).unwrap();
        }
        assert_eq!(mesh.triangles().count(), 0);

        let (_, roi) = mesh.insert_with_roi(Vec2::new(1, 5)).unwrap().unwrap();
        assert_eq!(roi.new_triangles.len(), mesh.triangles.len());
        assert_eq!(mesh.triangles().count(), 3);
        assert_closed(&mesh);
    }

    #[test]
    fn svg() {
        let mut mesh = DelaunayMesh::new();
        for &(x, y) in &[(0, 0), (10, 0), (10, 10), (0, 10)] {
            mesh.insert(Vec2::new(x, y)).unwrap();
        }

        let mut out = vec![];
        dump_svg(&mut out, &mesh).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("<svg"));
        assert_eq!(out.matches("<polygon").count(), 2);
        assert_eq!(out.matches("<circle").count(), 4);
    }
}
