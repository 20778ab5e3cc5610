//!
//! Triangulated mosaic wallpapers.
//!
//! Points are scattered over a canvas (or laid on a staggered grid), Delaunay triangulated and
//! every triangle is filled by a chain of painters: a solid color or a template image, optionally
//! perturbed by uniform or gaussian noise. All the randomness of a render comes from a single
//! seeded `MosaicRng`, the same seed always gives the same image.
//!

pub mod api;
pub mod canvas;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod painter;
pub mod render;
pub mod rng;

pub use canvas::{Canvas, Layer};
pub use config::{ColorSource, MosaicConfig};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Point, Triangle};
pub use painter::{Color, Painter, TrianglePainter};
pub use render::{render, render_with, save_path, Mosaic, Output};
pub use rng::MosaicRng;
