use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::{Painter, TrianglePainter};
use crate::error::{Error, Result};
use crate::graph::Triangle;

/// Adds the same uniformly drawn offset to the three components of the base color, a new offset
/// is drawn for every triangle.
#[derive(Debug)]
pub struct NoisyPainter {
    base: Box<Painter>,
    min: i32,
    max: i32,
}

impl NoisyPainter {
    /// The offset range comes from `tolerance`: no values means no noise, a single value `t`
    /// means `[-|t|, |t|]` and two values are the bounds in any order. Extra values are ignored.
    pub fn new(base: Painter, tolerance: &[i32]) -> Self {
        let (min, max) = match *tolerance {
            [] => (0, 0),
            [t] => (-t.saturating_abs(), t.saturating_abs()),
            [a, b, ..] => (a.min(b), a.max(b)),
        };

        NoisyPainter {
            base: Box::new(base),
            min,
            max,
        }
    }

    pub fn range(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    pub fn base(&self) -> &Painter {
        &self.base
    }
}

impl TrianglePainter for NoisyPainter {
    fn color_components<R: Rng>(&self, t: &Triangle, rng: &mut R) -> Result<[i32; 3]> {
        let [r, g, b] = self.base.color_components(t, rng)?;
        let offset = rng.gen_range(self.min..=self.max);

        Ok([
            r.saturating_add(offset),
            g.saturating_add(offset),
            b.saturating_add(offset),
        ])
    }
}

/// Moves every component of the base color independently following a normal distribution
/// centered on it.
#[derive(Debug)]
pub struct GaussyPainter {
    base: Box<Painter>,
    sigma: f64,
    noise: Normal<f64>,
}

impl GaussyPainter {
    pub fn new(base: Painter, sigma: f64) -> Result<Self> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(Error::InvalidSigma(sigma));
        }
        let noise = Normal::new(0.0, sigma).map_err(|_| Error::InvalidSigma(sigma))?;

        Ok(GaussyPainter {
            base: Box::new(base),
            sigma,
            noise,
        })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn base(&self) -> &Painter {
        &self.base
    }
}

impl TrianglePainter for GaussyPainter {
    fn color_components<R: Rng>(&self, t: &Triangle, rng: &mut R) -> Result<[i32; 3]> {
        let mut components = self.base.color_components(t, rng)?;
        for c in &mut components {
            // truncate towards zero
            *c = (f64::from(*c) + self.noise.sample(rng)) as i32;
        }

        Ok(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::graph::Point;
    use crate::painter::Color;
    use crate::rng::MosaicRng;

    fn triangle() -> Triangle {
        Triangle::new(Point::new(0, 0), Point::new(10, 0), Point::new(0, 10))
    }

    fn gray() -> Painter {
        Painter::solid(Color::new(128, 128, 128))
    }

    #[test]
    fn tolerance_normalization() {
        assert_eq!(NoisyPainter::new(gray(), &[]).range(), (0, 0));
        assert_eq!(NoisyPainter::new(gray(), &[15]).range(), (-15, 15));
        assert_eq!(NoisyPainter::new(gray(), &[-15]).range(), (-15, 15));
        assert_eq!(NoisyPainter::new(gray(), &[-10, 30]).range(), (-10, 30));
        assert_eq!(NoisyPainter::new(gray(), &[30, -10]).range(), (-10, 30));
        assert_eq!(NoisyPainter::new(gray(), &[5, 1, -100]).range(), (1, 5));
    }

    #[test]
    fn empty_tolerance_is_noiseless() {
        let painter = NoisyPainter::new(gray(), &[]);
        let mut rng = MosaicRng::with_seed(3);

        for _ in 0..100 {
            assert_eq!(
                painter.color_components(&triangle(), &mut rng).unwrap(),
                [128, 128, 128]
            );
        }
    }

    #[test]
    fn offsets_are_shared_and_bounded() {
        let painter = NoisyPainter::new(Painter::solid(Color::new(100, 50, 0)), &[-10, 30]);
        let mut rng = MosaicRng::with_seed(3);

        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let [r, g, b] = painter.color_components(&triangle(), &mut rng).unwrap();
            let offset = r - 100;

            assert!((-10..=30).contains(&offset));
            assert_eq!(g - 50, offset);
            assert_eq!(b, offset);

            seen_min |= offset == -10;
            seen_max |= offset == 30;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn extreme_tolerances_saturate() {
        let mut rng = MosaicRng::with_seed(5);

        let base = Painter::solid(Color::new(250, 1, 0));
        let painter = NoisyPainter::new(base, &[i32::MAX, i32::MAX]);
        assert_eq!(
            painter.color_components(&triangle(), &mut rng).unwrap(),
            [i32::MAX; 3]
        );
        assert_eq!(painter.color(&triangle(), &mut rng).unwrap(), Color::WHITE);

        let painter = NoisyPainter::new(gray(), &[i32::MIN, i32::MIN]);
        assert_eq!(
            painter.color_components(&triangle(), &mut rng).unwrap(),
            [i32::MIN; 3]
        );
        assert_eq!(painter.color(&triangle(), &mut rng).unwrap(), Color::BLACK);

        let painter = NoisyPainter::new(gray(), &[i32::MAX]);
        for _ in 0..100 {
            painter.color(&triangle(), &mut rng).unwrap();
        }
    }

    #[test]
    fn gaussian_channels_are_independent() {
        let painter = GaussyPainter::new(gray(), 15.0).unwrap();
        let mut rng = MosaicRng::with_seed(11);

        let samples = (0..1000)
            .map(|_| painter.color_components(&triangle(), &mut rng).unwrap())
            .collect::<Vec<_>>();

        assert!(samples.iter().any(|[r, g, b]| r != g || g != b));

        for ch in 0..3 {
            let mean = samples.iter().map(|s| f64::from(s[ch])).sum::<f64>() / 1000.0;
            assert!((mean - 128.0).abs() < 3.0, "channel {} mean {}", ch, mean);
        }
    }

    #[test]
    fn gaussian_needs_positive_sigma() {
        assert!(matches!(
            GaussyPainter::new(gray(), 0.0),
            Err(Error::InvalidSigma(_))
        ));
        assert!(GaussyPainter::new(gray(), -2.0).is_err());
        assert!(GaussyPainter::new(gray(), f64::NAN).is_err());
        assert_eq!(GaussyPainter::new(gray(), 2.5).unwrap().sigma(), 2.5);
    }
}
