//!
//! Triangle painters: where the color of every triangle comes from.
//!
//! Painters are composed by wrapping, every noise stage owns the painter it perturbs. The raw
//! components flowing between stages are not clamped, only the final `color` is.
//!

mod noise;
mod solid;
mod template;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

pub use noise::{GaussyPainter, NoisyPainter};
pub use solid::SolidPainter;
pub use template::{TemplatePainter, TemplateSource};

use crate::error::{Error, Result};
use crate::graph::Triangle;

/// An RGB color with 8 bit channels, formatted as `#RRGGBB`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const RED: Color = Color::new(0xff, 0, 0);
    pub const GREEN: Color = Color::new(0, 0x80, 0);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Build a color from raw components, clamping each of them into `[0, 255]`.
    pub fn from_components([r, g, b]: [i32; 3]) -> Self {
        let clamp = |c: i32| c.clamp(0, 0xff) as u8;
        Color::new(clamp(r), clamp(g), clamp(b))
    }

    pub fn components(self) -> [i32; 3] {
        [self.r.into(), self.g.into(), self.b.into()]
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse `#RGB` or `#RRGGBB`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let double = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Color::new(double(0)?, double(1)?, double(2)?))
            }
            6 => Ok(Color::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

pub trait TrianglePainter {
    /// The unclamped components of the color of `t`.
    fn color_components<R: Rng>(&self, t: &Triangle, rng: &mut R) -> Result<[i32; 3]>;

    fn color<R: Rng>(&self, t: &Triangle, rng: &mut R) -> Result<Color> {
        self.color_components(t, rng).map(Color::from_components)
    }
}

#[derive(Debug)]
pub enum Painter {
    Solid(SolidPainter),
    Template(TemplatePainter),
    Noisy(NoisyPainter),
    Gaussy(GaussyPainter),
}

impl Painter {
    pub fn solid(color: Color) -> Self {
        Painter::Solid(SolidPainter::new(color))
    }

    /// Wrap this painter with uniform noise, see `NoisyPainter::new` for `tolerance`.
    pub fn noisy(self, tolerance: &[i32]) -> Self {
        Painter::Noisy(NoisyPainter::new(self, tolerance))
    }

    /// Wrap this painter with per channel gaussian noise.
    pub fn gaussy(self, sigma: f64) -> Result<Self> {
        Ok(Painter::Gaussy(GaussyPainter::new(self, sigma)?))
    }

    /// Number of painters in the chain, this one included.
    pub fn depth(&self) -> usize {
        match self {
            Painter::Solid(_) | Painter::Template(_) => 1,
            Painter::Noisy(p) => 1 + p.base().depth(),
            Painter::Gaussy(p) => 1 + p.base().depth(),
        }
    }
}

impl TrianglePainter for Painter {
    fn color_components<R: Rng>(&self, t: &Triangle, rng: &mut R) -> Result<[i32; 3]> {
        match self {
            Painter::Solid(p) => p.color_components(t, rng),
            Painter::Template(p) => p.color_components(t, rng),
            Painter::Noisy(p) => p.color_components(t, rng),
            Painter::Gaussy(p) => p.color_components(t, rng),
        }
    }
}

impl From<SolidPainter> for Painter {
    fn from(p: SolidPainter) -> Self {
        Painter::Solid(p)
    }
}

impl From<TemplatePainter> for Painter {
    fn from(p: TemplatePainter) -> Self {
        Painter::Template(p)
    }
}
