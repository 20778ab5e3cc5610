use std::cell::OnceCell;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbImage};
use rand::Rng;

use super::TrianglePainter;
use crate::error::{Error, Result};
use crate::graph::Triangle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Path(PathBuf),
    Url(String),
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TemplateSource::Path(p) => write!(f, "{}", p.display()),
            TemplateSource::Url(u) => write!(f, "{}", u),
        }
    }
}

/// Samples every triangle color from a template image stretched over the canvas.
///
/// The template is fetched and decoded the first time a color is requested and kept around for
/// the following triangles.
pub struct TemplatePainter {
    source: TemplateSource,
    width: u32,
    height: u32,
    image: OnceCell<RgbImage>,
}

impl TemplatePainter {
    pub fn new(source: TemplateSource, width: u32, height: u32) -> Self {
        TemplatePainter {
            source,
            width,
            height,
            image: OnceCell::new(),
        }
    }

    pub fn local(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        TemplatePainter::new(TemplateSource::Path(path.into()), width, height)
    }

    pub fn url(url: impl Into<String>, width: u32, height: u32) -> Self {
        TemplatePainter::new(TemplateSource::Url(url.into()), width, height)
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.image.get().is_some()
    }

    /// The template resized to the canvas size, loading it if needed.
    pub fn image(&self) -> Result<&RgbImage> {
        if let Some(img) = self.image.get() {
            return Ok(img);
        }

        let img = self.load()?;
        Ok(self.image.get_or_init(|| img))
    }

    fn load(&self) -> Result<RgbImage> {
        let img = match &self.source {
            TemplateSource::Path(path) => image::open(path)?,
            TemplateSource::Url(url) => fetch(url)?,
        };

        let (w, h) = img.dimensions();
        log::debug!("loaded {}x{} template from {}", w, h, self.source);
        if (w, h) != (self.width, self.height) {
            log::warn!(
                "template is {}x{}, resizing it to {}x{}",
                w,
                h,
                self.width,
                self.height
            );
        }

        Ok(img
            .resize_exact(self.width, self.height, FilterType::Triangle)
            .to_rgb8())
    }
}

fn fetch(url: &str) -> Result<DynamicImage> {
    let response = ureq::get(url).call().map_err(|e| Error::Fetch {
        url: url.to_string(),
        source: Box::new(e),
    })?;

    let mut bytes = vec![];
    response.into_reader().read_to_end(&mut bytes)?;

    Ok(image::load_from_memory(&bytes)?)
}

impl fmt::Debug for TemplatePainter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TemplatePainter")
            .field("source", &self.source)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl TrianglePainter for TemplatePainter {
    fn color_components<R: Rng>(&self, t: &Triangle, _rng: &mut R) -> Result<[i32; 3]> {
        let img = self.image()?;
        let c = t.centroid(self.width, self.height);

        let px = img.get_pixel(c.x as u32, c.y as u32);
        Ok([px[0].into(), px[1].into(), px[2].into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::Rgb;

    use crate::graph::Point;
    use crate::rng::MosaicRng;

    fn template_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "mosaic-template-{}-{}.png",
            name,
            std::process::id()
        ));

        let img = RgbImage::from_fn(20, 20, |x, _| {
            if x < 10 {
                Rgb([200, 0, 0])
            } else {
                Rgb([0, 0, 200])
            }
        });
        img.save(&path).unwrap();

        path
    }

    #[test]
    fn samples_the_centroid() {
        let path = template_path("centroid");
        let painter = TemplatePainter::local(&path, 20, 20);
        let mut rng = MosaicRng::with_seed(0);
        assert!(!painter.is_loaded());

        let left = Triangle::new(Point::new(0, 0), Point::new(3, 10), Point::new(0, 19));
        let right = Triangle::new(Point::new(19, 0), Point::new(16, 10), Point::new(19, 19));

        assert_eq!(painter.color_components(&left, &mut rng).unwrap(), [200, 0, 0]);
        assert!(painter.is_loaded());
        assert_eq!(painter.color_components(&right, &mut rng).unwrap(), [0, 0, 200]);

        // vertices off the canvas are clamped before sampling
        let off = Triangle::new(Point::new(-500, -500), Point::new(-10, 15), Point::new(2, 40));
        assert_eq!(painter.color_components(&off, &mut rng).unwrap(), [200, 0, 0]);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn resizes_to_canvas() {
        let path = template_path("resize");
        let painter = TemplatePainter::local(&path, 100, 40);

        let img = painter.image().unwrap();
        assert_eq!(img.dimensions(), (100, 40));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_template() {
        let painter = TemplatePainter::local("/definitely/not/here.png", 10, 10);
        let t = Triangle::new(Point::new(0, 0), Point::new(3, 0), Point::new(0, 3));

        let err = painter.color(&t, &mut MosaicRng::with_seed(0)).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
        assert!(!painter.is_loaded());
    }

    #[test]
    fn unreachable_url() {
        let painter = TemplatePainter::url("http://127.0.0.1:1/template.png", 10, 10);
        let t = Triangle::new(Point::new(0, 0), Point::new(3, 0), Point::new(0, 3));

        let err = painter.color(&t, &mut MosaicRng::with_seed(0)).unwrap_err();
        assert!(matches!(err, Error::Fetch { ref url, .. } if url.ends_with("/template.png")));
        assert!(!err.is_config_error());
        assert!(!painter.is_loaded());
    }
}
