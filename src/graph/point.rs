use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Copy of this point with the given coordinates overridden.
    pub fn with_coordinates(self, x: Option<i32>, y: Option<i32>) -> Self {
        Point::new(x.unwrap_or(self.x), y.unwrap_or(self.y))
    }

    /// Snap the point inside `[0, width - 1] x [0, height - 1]`.
    pub fn clamp_to(self, width: u32, height: u32) -> Self {
        let max_x = to_coord(width) - 1;
        let max_y = to_coord(height) - 1;

        let mut p = self;
        if p.x < 0 {
            p = p.with_coordinates(Some(0), None);
        } else if p.x > max_x {
            p = p.with_coordinates(Some(max_x), None);
        }

        if p.y < 0 {
            p = p.with_coordinates(None, Some(0));
        } else if p.y > max_y {
            p = p.with_coordinates(None, Some(max_y));
        }

        p
    }

    pub fn as_tuple(self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub(crate) fn to_coord(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
