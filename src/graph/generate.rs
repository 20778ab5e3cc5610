use std::collections::HashSet;

use rand::Rng;

use super::point::to_coord;
use super::{Graph, Point};

impl Graph {
    /// Randomly scatter `count` distinct points over the canvas grown by `margin` on every side.
    ///
    /// The four canvas corners are always part of the points so that the triangulation covers
    /// the whole canvas. The caller must make sure the grown canvas has room for `count`
    /// distinct points, otherwise this never returns.
    pub fn scatter(width: u32, height: u32, count: usize, margin: u32, rng: &mut impl Rng) -> Self {
        let (w, h, m) = (to_coord(width), to_coord(height), to_coord(margin));

        let mut g = Graph::new();
        let mut seen = HashSet::with_capacity(count.max(4));

        for &c in &corners(w, h) {
            seen.insert(c);
            g.add_point(c);
        }

        while g.points.len() < count {
            let x = rng.gen_range(-m..=w.saturating_add(m));
            let y = rng.gen_range(-m..=h.saturating_add(m));

            let p = Point::new(x, y);
            if seen.insert(p) {
                g.add_point(p);
            }
        }

        log::debug!("scattered {} points", g.points.len());
        g
    }

    /// Lay roughly `count` points on a staggered grid covering the canvas grown by `margin`,
    /// odd rows of every column shifted by half a cell.
    ///
    /// The four canvas corners are appended at the end, even if the grid already has them.
    pub fn poly(width: u32, height: u32, count: usize, margin: u32) -> Self {
        let (width, height, margin) = (to_coord(width), to_coord(height), to_coord(margin));
        let grow = |side: i32| side.saturating_add(margin.saturating_mul(2));
        let layout = GridLayout::new(grow(width), grow(height), count);

        let mut g = Graph::new();
        for x in (-margin..width.saturating_add(margin)).step_by(layout.dx as usize) {
            for (row, y) in (-margin..height.saturating_add(margin))
                .step_by(layout.dy as usize)
                .enumerate()
            {
                if row % 2 == 0 {
                    g.add_point(Point::new(x, y));
                } else {
                    g.add_point(Point::new(x.saturating_add(layout.dx / 2), y));
                }
            }
        }

        for &c in &corners(width, height) {
            g.add_point(c);
        }

        log::debug!(
            "laid {} points on a {}x{} grid with {}x{} cells",
            g.points.len(),
            layout.nx,
            layout.ny,
            layout.dx,
            layout.dy
        );
        g
    }
}

fn corners(width: i32, height: i32) -> [Point; 4] {
    [
        Point::new(0, 0),
        Point::new(0, height),
        Point::new(width, 0),
        Point::new(width, height),
    ]
}

/// Number of columns and rows and their spacing of a near square grid with about `count` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridLayout {
    nx: i32,
    ny: i32,
    dx: i32,
    dy: i32,
}

impl GridLayout {
    fn new(w: i32, h: i32, count: usize) -> Self {
        let (wf, hf, n) = (f64::from(w), f64::from(h), count as f64);

        let nx = ((wf * n) / hf + (wf - hf).powi(2) / (4.0 * hf.powi(2))).sqrt() - (wf - hf) / (2.0 * hf);
        // a degenerate count must not turn into a zero step
        let nx = (nx as i32).max(1);
        let ny = ((n / f64::from(nx)) as i32).max(1);

        GridLayout {
            nx,
            ny,
            dx: (w / nx).max(1),
            dy: (h / ny).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::rng::MosaicRng;

    fn has_corners(g: &Graph, w: i32, h: i32) -> bool {
        corners(w, h).iter().all(|c| g.points().contains(c))
    }

    #[test]
    fn scatter_counts_and_corners() {
        let mut rng = MosaicRng::with_seed(7);
        let g = Graph::scatter(300, 200, 50, 10, &mut rng);

        assert_eq!(g.points().len(), 50);
        assert_eq!(&g.points()[..4], &corners(300, 200));
        assert!(has_corners(&g, 300, 200));

        let unique = g.points().iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 50);

        for p in g.points() {
            assert!(p.x >= -10 && p.x <= 310);
            assert!(p.y >= -10 && p.y <= 210);
        }
    }

    #[test]
    fn scatter_small_count_keeps_corners() {
        let mut rng = MosaicRng::with_seed(7);
        let g = Graph::scatter(10, 10, 2, 0, &mut rng);

        assert_eq!(g.points(), &corners(10, 10));
    }

    #[test]
    fn scatter_is_reproducible() {
        let a = Graph::scatter(640, 480, 120, 20, &mut MosaicRng::with_seed(42));
        let b = Graph::scatter(640, 480, 120, 20, &mut MosaicRng::with_seed(42));
        let c = Graph::scatter(640, 480, 120, 20, &mut MosaicRng::with_seed(43));

        assert_eq!(a.points(), b.points());
        assert_ne!(a.points(), c.points());
    }

    #[test]
    fn grid_layout() {
        // a square area gives a square grid
        assert_eq!(
            GridLayout::new(100, 100, 100),
            GridLayout {
                nx: 10,
                ny: 10,
                dx: 10,
                dy: 10
            }
        );

        let l = GridLayout::new(1960, 1120, 200);
        assert_eq!((l.nx, l.ny), (18, 11));
        assert_eq!((l.dx, l.dy), (108, 101));
    }

    #[test]
    fn poly_grid() {
        let g = Graph::poly(100, 100, 100, 0);

        // 10 columns of 10 rows plus the corners
        assert_eq!(g.points().len(), 104);
        assert!(has_corners(&g, 100, 100));
        assert_eq!(&g.points()[100..], &corners(100, 100));

        assert_eq!(g.points()[0], Point::new(0, 0));
        assert_eq!(g.points()[1], Point::new(5, 10));
        assert_eq!(g.points()[2], Point::new(0, 20));
        assert_eq!(g.points()[10], Point::new(10, 0));
    }

    #[test]
    fn poly_with_margin() {
        let g = Graph::poly(200, 100, 60, 20);

        assert!(has_corners(&g, 200, 100));
        assert!(g.points().iter().any(|p| p.x == -20 && p.y == -20));
        assert!(g.points().iter().all(|p| p.x < 240 + 20 && p.y < 120 + 20));
    }

    #[test]
    fn poly_then_triangulate() {
        let mut g = Graph::poly(100, 100, 30, 10);
        g.triangulate().unwrap();

        assert!(!g.triangles().is_empty());
        for e in g.edges() {
            assert!(g.triangles().iter().any(|t| t.edges().contains(e)));
        }
    }
}
