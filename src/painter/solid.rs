use rand::Rng;

use super::{Color, TrianglePainter};
use crate::error::Result;
use crate::graph::Triangle;

/// Paints every triangle with the same color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidPainter {
    color: Color,
}

impl SolidPainter {
    pub fn new(color: Color) -> Self {
        SolidPainter { color }
    }

    /// Parse `#RGB` or `#RRGGBB`, white when no color is given.
    pub fn from_hex(hex: Option<&str>) -> Result<Self> {
        let color = match hex {
            Some(hex) => hex.parse()?,
            None => Color::WHITE,
        };
        Ok(SolidPainter::new(color))
    }

    pub fn fill(&self) -> Color {
        self.color
    }
}

impl Default for SolidPainter {
    fn default() -> Self {
        SolidPainter::new(Color::WHITE)
    }
}

impl TrianglePainter for SolidPainter {
    fn color_components<R: Rng>(&self, _t: &Triangle, _rng: &mut R) -> Result<[i32; 3]> {
        Ok(self.color.components())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::graph::Point;
    use crate::rng::MosaicRng;

    #[test]
    fn ignores_the_triangle() {
        let painter = SolidPainter::from_hex(Some("#123")).unwrap();
        let mut rng = MosaicRng::with_seed(0);

        let a = Triangle::new(Point::new(0, 0), Point::new(1, 0), Point::new(0, 1));
        let b = Triangle::new(Point::new(-9, 4), Point::new(90, 40), Point::new(7, 700));

        assert_eq!(painter.color(&a, &mut rng).unwrap(), Color::new(0x11, 0x22, 0x33));
        assert_eq!(painter.color(&b, &mut rng).unwrap(), Color::new(0x11, 0x22, 0x33));
    }

    #[test]
    fn defaults_to_white() {
        assert_eq!(SolidPainter::from_hex(None).unwrap().fill(), Color::WHITE);
        assert_eq!(SolidPainter::default().fill(), Color::WHITE);
        assert!(SolidPainter::from_hex(Some("red")).is_err());
    }
}
