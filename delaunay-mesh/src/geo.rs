use std::ops::{Add, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Copy, Clone)]
pub struct Bbox {
    min: Vec2,
    max: Vec2,
}

impl Vec2 {
    pub fn zero() -> Self {
        Vec2::new(0, 0)
    }

    pub fn new(x: i64, y: i64) -> Self {
        Vec2 { x, y }
    }

    pub fn norm2(&self) -> i128 {
        i128::from(self.x).pow(2) + i128::from(self.y).pow(2)
    }
}

impl Bbox {
    pub fn new(p: Vec2) -> Self {
        Bbox { min: p, max: p }
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    pub fn expand(&mut self, p: Vec2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);

        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.min.x <= p.x && self.min.y <= p.y && self.max.x >= p.x && self.max.y >= p.y
    }
}

/// Twice the signed area of `abc`, positive when the triangle is counter-clockwise.
pub fn orient(a: Vec2, b: Vec2, c: Vec2) -> i128 {
    let ab = b - a;
    let ac = c - a;

    i128::from(ab.x) * i128::from(ac.y) - i128::from(ab.y) * i128::from(ac.x)
}

/// Positive when `d` lies strictly inside the circumcircle of the counter-clockwise triangle
/// `abc`, zero when the four points are cocircular and negative otherwise.
pub fn incircle(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> i128 {
    let ad = a - d;
    let bd = b - d;
    let cd = c - d;

    let (adx, ady) = (i128::from(ad.x), i128::from(ad.y));
    let (bdx, bdy) = (i128::from(bd.x), i128::from(bd.y));
    let (cdx, cdy) = (i128::from(cd.x), i128::from(cd.y));

    ad.norm2() * (bdx * cdy - cdx * bdy)
        + bd.norm2() * (cdx * ady - adx * cdy)
        + cd.norm2() * (adx * bdy - bdx * ady)
}

/// Whether `p`, collinear with `a` and `b`, lies strictly inside the segment `ab`.
pub fn strictly_between(a: Vec2, b: Vec2, p: Vec2) -> bool {
    let pa = a - p;
    let pb = b - p;

    i128::from(pa.x) * i128::from(pb.x) + i128::from(pa.y) * i128::from(pb.y) < 0
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(mut self, rhs: Vec2) -> Self::Output {
        self.x += rhs.x;
        self.y += rhs.y;
        self
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(mut self, rhs: Vec2) -> Self::Output {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self
    }
}
