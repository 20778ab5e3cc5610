use std::fmt;
use std::hash::{Hash, Hasher};

use super::Point;

/// Undirected segment between two points, `Edge::new(p, q) == Edge::new(q, p)`.
#[derive(Debug, Copy, Clone)]
pub struct Edge {
    p: Point,
    q: Point,
}

impl Edge {
    pub fn new(p: Point, q: Point) -> Self {
        Edge { p, q }
    }

    pub fn points(&self) -> (Point, Point) {
        (self.p, self.q)
    }

    /// The endpoints ordered by ascending x, ties broken by y.
    pub fn canonical(&self) -> (Point, Point) {
        if self.p <= self.q {
            (self.p, self.q)
        } else {
            (self.q, self.p)
        }
    }

    pub fn coordinates(&self) -> (i32, i32, i32, i32) {
        (self.p.x, self.p.y, self.q.x, self.q.y)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.p == p || self.q == p
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Edge) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}, {}>", self.p, self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(e: &Edge) -> u64 {
        let mut h = DefaultHasher::new();
        e.hash(&mut h);
        h.finish()
    }

    #[test]
    fn orientation_independent() {
        let pairs = [
            (Point::new(0, 0), Point::new(5, 7)),
            (Point::new(3, 1), Point::new(3, 9)),
            (Point::new(-4, 2), Point::new(-8, 2)),
        ];

        for &(p, q) in &pairs {
            let a = Edge::new(p, q);
            let b = Edge::new(q, p);

            assert_eq!(a, b);
            assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn dedup_in_set() {
        let p = Point::new(1, 2);
        let q = Point::new(4, 0);
        let r = Point::new(4, 6);

        let edges = vec![Edge::new(p, q), Edge::new(q, p), Edge::new(q, r), Edge::new(r, q)]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(edges.len(), 2);
        assert_ne!(Edge::new(p, q), Edge::new(p, r));
    }
}
