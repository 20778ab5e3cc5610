//!
//! Everything a front end has to say about the mosaic it wants.
//!

use std::path::PathBuf;

use crate::canvas::Layer;
use crate::error::{Error, Result};
use crate::painter::{Painter, SolidPainter, TemplatePainter};

/// Largest image that can be requested, 4K worth of pixels.
pub const MAX_PIXELS: u64 = 3840 * 2160;

pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;
pub const DEFAULT_MARGIN: u32 = 20;
pub const DEFAULT_COUNT: usize = 200;

/// Largest distance of a generated point from the origin on either axis, staggered grid rows
/// can be shifted by half the grown canvas.
const MAX_EXTENT: u64 = delaunay_mesh::MAX_COORD as u64 / 2;

/// Noise tolerance used when noise is requested without an explicit tolerance.
pub const DEFAULT_NOISE: i32 = 20;

/// Gaussian sigma used when gaussian noise is requested without an explicit sigma.
pub const DEFAULT_SIGMA: f64 = 15.0;

const NAMED_SIZES: &[(&str, (u32, u32))] = &[
    ("1k", (1024, 768)),
    ("2k", (2560, 1440)),
    ("4k", (3840, 2160)),
];

/// Where the triangle colors come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSource {
    Hex(String),
    Path(PathBuf),
    Url(String),
}

impl ColorSource {
    /// Interpret a template argument: an url if asked to, a hex color if it starts with `#` and
    /// a local image otherwise.
    pub fn from_template(template: &str, is_url: bool) -> Self {
        if is_url {
            ColorSource::Url(template.to_string())
        } else if template.starts_with('#') {
            ColorSource::Hex(template.to_string())
        } else {
            ColorSource::Path(PathBuf::from(template))
        }
    }

    /// Short name of the source fit for a file name.
    pub fn stem(&self) -> String {
        match self {
            ColorSource::Hex(hex) => format!("rgb_{}", hex.trim_start_matches('#')),
            ColorSource::Path(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "mosaic".to_string()),
            ColorSource::Url(url) => {
                let last = url
                    .trim_end_matches('/')
                    .rsplit('/')
                    .next()
                    .unwrap_or_default();
                let stem = last.split(&['?', '#'][..]).next().unwrap_or_default();
                let stem = stem.rsplit_once('.').map_or(stem, |(stem, _)| stem);

                if stem.is_empty() {
                    "mosaic".to_string()
                } else {
                    stem.to_string()
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MosaicConfig {
    pub width: u32,
    pub height: u32,
    pub count: usize,
    pub margin: u32,
    pub poly: bool,
    pub source: ColorSource,
    pub noise: Option<Vec<i32>>,
    pub gauss: Option<f64>,
    pub seed: Option<u64>,
    pub layers: Vec<Layer>,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        MosaicConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            count: DEFAULT_COUNT,
            margin: DEFAULT_MARGIN,
            poly: false,
            source: ColorSource::Hex("#ffffff".to_string()),
            noise: None,
            gauss: None,
            seed: None,
            layers: vec![Layer::Colors],
        }
    }
}

impl MosaicConfig {
    /// Reject the configuration errors before any work is done.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidSize(format!(
                "{}x{} has no pixels",
                self.width, self.height
            )));
        }

        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels > MAX_PIXELS {
            return Err(Error::PixelBudgetExceeded {
                width: self.width,
                height: self.height,
                pixels,
                max: MAX_PIXELS,
            });
        }

        if self.count < 3 {
            return Err(Error::NotEnoughPoints(self.count));
        }

        let side = u64::from(self.width.max(self.height));
        if side + u64::from(self.margin) > MAX_EXTENT {
            return Err(Error::MarginOutOfRange {
                margin: self.margin,
                max: MAX_EXTENT.saturating_sub(side),
            });
        }

        // only scatter needs distinct points, the grid just gets coarser
        let grown = |side: u32| u64::from(side) + 2 * u64::from(self.margin) + 1;
        let available = grown(self.width).saturating_mul(grown(self.height));
        if !self.poly && self.count as u64 > available {
            return Err(Error::TooManyPoints {
                count: self.count,
                available,
            });
        }

        if let Some(sigma) = self.gauss {
            if !(sigma.is_finite() && sigma > 0.0) {
                return Err(Error::InvalidSigma(sigma));
            }
        }

        if let ColorSource::Hex(hex) = &self.source {
            SolidPainter::from_hex(Some(hex))?;
        }

        Ok(())
    }

    /// Build the painter chain: the color source, then gaussian noise, then uniform noise.
    ///
    /// Without the colors layer triangles are plain white whatever the source.
    pub fn painter(&self) -> Result<Painter> {
        let mut painter: Painter = if !self.layers.contains(&Layer::Colors) {
            SolidPainter::default().into()
        } else {
            match &self.source {
                ColorSource::Hex(hex) => SolidPainter::from_hex(Some(hex))?.into(),
                ColorSource::Path(path) => {
                    TemplatePainter::local(path.clone(), self.width, self.height).into()
                }
                ColorSource::Url(url) => {
                    TemplatePainter::url(url.clone(), self.width, self.height).into()
                }
            }
        };

        if let Some(sigma) = self.gauss {
            painter = painter.gaussy(sigma)?;
        }
        if let Some(tolerance) = &self.noise {
            painter = painter.noisy(tolerance);
        }

        Ok(painter)
    }
}

/// Parse a size given either as a named size (`1k`, `2k`, `4k`) or as width and height.
pub fn parse_size<S: AsRef<str>>(values: &[S]) -> Result<(u32, u32)> {
    let parse = |s: &str| {
        s.parse::<u32>()
            .map_err(|_| Error::InvalidSize(format!("'{}' is not a valid dimension", s)))
    };

    match values {
        [] => Ok((DEFAULT_WIDTH, DEFAULT_HEIGHT)),
        [named] => {
            let named = named.as_ref().to_lowercase();
            NAMED_SIZES
                .iter()
                .find(|(name, _)| *name == named)
                .map(|&(_, size)| size)
                .ok_or_else(|| {
                    Error::InvalidSize(format!(
                        "'{}' is not a named size, expected 1k, 2k, 4k or WIDTH HEIGHT",
                        named
                    ))
                })
        }
        [w, h] => Ok((parse(w.as_ref())?, parse(h.as_ref())?)),
        _ => Err(Error::InvalidSize(
            "expected a named size or WIDTH HEIGHT".to_string(),
        )),
    }
}
