//!
//! Rendering of a triangulated graph to an image.
//!

pub mod raster;

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use image::{ImageFormat, RgbImage};
use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::painter::{Color, Painter, TrianglePainter};

const POINT_SIZE: i32 = 2;
const POINT_COLOR: Color = Color::RED;
const LINE_COLOR: Color = Color::WHITE;
const CENTROID_COLOR: Color = Color::GREEN;
const BACKGROUND_COLOR: Color = Color::BLACK;

/// A visual element of the mosaic that can be turned on and off.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Colors,
    Centers,
    Lines,
    Points,
}

impl Layer {
    pub const NAMES: &'static [&'static str] = &["colors", "centers", "lines", "points"];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Colors => "colors",
            Layer::Centers => "centers",
            Layer::Lines => "lines",
            Layer::Points => "points",
        }
    }
}

impl FromStr for Layer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "colors" => Ok(Layer::Colors),
            "centers" => Ok(Layer::Centers),
            "lines" => Ok(Layer::Lines),
            "points" => Ok(Layer::Points),
            _ => Err(Error::InvalidLayer(s.to_string())),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
pub struct Canvas {
    painter: Painter,
    image: RgbImage,
}

impl Canvas {
    pub fn new(painter: Painter, width: u32, height: u32) -> Self {
        Canvas {
            painter,
            image: RgbImage::from_pixel(width, height, BACKGROUND_COLOR.to_rgb()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn painter(&self) -> &Painter {
        &self.painter
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Draw `g` on top of what is already on the canvas.
    ///
    /// Triangles are always filled with the painter, in triangulation order, the other layers
    /// are stacked on top in this order: centroids, edges and points.
    pub fn draw_graph(&mut self, g: &Graph, layers: &[Layer], rng: &mut impl Rng) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        let show_centers = layers.contains(&Layer::Centers);

        for t in g.triangles() {
            let color = self.painter.color(t, rng)?;
            raster::fill_triangle(&mut self.image, *t.points(), color.to_rgb());

            if show_centers {
                let centroid = t.centroid(width, height);
                raster::draw_disc(&mut self.image, centroid, POINT_SIZE, CENTROID_COLOR.to_rgb());
            }
        }

        if layers.contains(&Layer::Lines) {
            for e in g.edges() {
                let (p, q) = e.points();
                raster::draw_line(&mut self.image, p, q, LINE_COLOR.to_rgb());
            }
        }

        if layers.contains(&Layer::Points) {
            for &p in g.points() {
                raster::draw_disc(&mut self.image, p, POINT_SIZE, POINT_COLOR.to_rgb());
            }
        }

        log::debug!(
            "drew {} triangles with layers {:?}",
            g.triangles().len(),
            layers
        );

        Ok(())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image.save_with_format(path, ImageFormat::Png)?;

        log::info!("image saved to {}", path.display());
        Ok(())
    }

    /// Show the canvas with the platform image viewer, blocking until the viewer exits.
    pub fn display(&self, title: &str) -> Result<()> {
        let path = display_path(title);
        self.save_to(&path)?;

        log::info!("displaying image in a window");
        let status = viewer_command(&path)
            .status()
            .map_err(|e| Error::DisplayUnavailable(e.to_string()))?;

        if !status.success() {
            return Err(Error::DisplayUnavailable(format!(
                "image viewer exited with {}",
                status
            )));
        }

        Ok(())
    }
}

fn display_path(title: &str) -> PathBuf {
    let name = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>();

    std::env::temp_dir().join(format!("{}.png", name))
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg("-W").arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "/WAIT", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
