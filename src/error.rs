use std::io;

use crate::canvas::Layer;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layer '{0}' is not a valid layer, valid options: {}", Layer::NAMES.join("|"))]
    InvalidLayer(String),

    #[error("'{0}' is not a valid hex color, expected #RGB or #RRGGBB")]
    InvalidColor(String),

    #[error("{width}x{height} is {pixels} pixels, more than the allowed {max}")]
    PixelBudgetExceeded {
        width: u32,
        height: u32,
        pixels: u64,
        max: u64,
    },

    #[error("at least 3 points are needed to triangulate, got {0}")]
    NotEnoughPoints(usize),

    #[error("cannot place {count} distinct points, the canvas and its margin only hold {available}")]
    TooManyPoints { count: usize, available: u64 },

    #[error("invalid size: {0}")]
    InvalidSize(String),

    #[error("a margin of {margin} is too large for this canvas, at most {max} is supported")]
    MarginOutOfRange { margin: u32, max: u64 },

    #[error("gaussian sigma must be a positive number, got {0}")]
    InvalidSigma(f64),

    #[error("the graph has already been triangulated")]
    AlreadyTriangulated,

    #[error("triangulation failed: {0}")]
    Triangulation(#[from] delaunay_mesh::TriangulateError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("cannot fetch template from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("cannot display the image: {0}")]
    DisplayUnavailable(String),
}

impl Error {
    /// Configuration errors are the caller's fault and are reported before any work is done.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidLayer(_)
                | Error::InvalidColor(_)
                | Error::PixelBudgetExceeded { .. }
                | Error::NotEnoughPoints(_)
                | Error::TooManyPoints { .. }
                | Error::InvalidSize(_)
                | Error::MarginOutOfRange { .. }
                | Error::InvalidSigma(_)
        )
    }
}
