//!
//! Request handling shared by the web front end: solid color wallpapers with a bit of noise.
//!

use std::env;
use std::path::{Path, PathBuf};

use crate::canvas::Layer;
use crate::config::{ColorSource, MosaicConfig};
use crate::error::Result;
use crate::render::{render, Output};

/// Environment variable naming the directory wallpapers are stored in.
pub const IMAGE_STORE_VAR: &str = "IMAGE_STORE";

pub const WALLPAPER_FILE: &str = "triangles.png";

const WALLPAPER_COUNT: usize = 100;
const WALLPAPER_MARGIN: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperRequest {
    /// Hex color without the leading `#`.
    pub color: String,
    pub width: u32,
    pub height: u32,
    pub noise: i32,
    pub seed: Option<u64>,
}

impl WallpaperRequest {
    pub fn new(color: impl Into<String>) -> Self {
        WallpaperRequest {
            color: color.into(),
            width: 1920,
            height: 1080,
            noise: 15,
            seed: None,
        }
    }

    pub fn config(&self) -> MosaicConfig {
        MosaicConfig {
            width: self.width,
            height: self.height,
            count: WALLPAPER_COUNT,
            margin: WALLPAPER_MARGIN,
            poly: false,
            source: ColorSource::Hex(format!("#{}", self.color)),
            noise: Some(vec![self.noise]),
            gauss: None,
            seed: self.seed,
            layers: vec![Layer::Colors],
        }
    }
}

/// Directory wallpapers are written to, `$IMAGE_STORE` or the system temp directory.
pub fn image_store() -> PathBuf {
    env::var_os(IMAGE_STORE_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir)
}

/// Render the requested wallpaper into the image store and return its path.
pub fn wallpaper(req: &WallpaperRequest) -> Result<PathBuf> {
    wallpaper_in(&image_store(), req)
}

/// Like `wallpaper` but storing the image in `store`.
///
/// Every call renders with its own random source so concurrent requests do not interfere with
/// each other.
pub fn wallpaper_in(store: &Path, req: &WallpaperRequest) -> Result<PathBuf> {
    let mosaic = render(&req.config())?;

    let path = store.join(WALLPAPER_FILE);
    mosaic.output(&Output::Save(path.clone()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::Error;

    #[test]
    fn request_config() {
        let config = WallpaperRequest::new("0a0b0c").config();

        assert_eq!(config.source, ColorSource::Hex("#0a0b0c".to_string()));
        assert_eq!(config.noise, Some(vec![15]));
        assert_eq!((config.count, config.margin), (100, 200));
        assert_eq!((config.width, config.height), (1920, 1080));
        assert_eq!(config.layers, vec![Layer::Colors]);
    }

    #[test]
    fn writes_into_the_store() {
        let store = env::temp_dir().join(format!("mosaic-store-{}", std::process::id()));
        std::fs::create_dir_all(&store).unwrap();

        let req = WallpaperRequest {
            width: 64,
            height: 48,
            seed: Some(1),
            ..WallpaperRequest::new("336699")
        };
        let path = wallpaper_in(&store, &req).unwrap();

        assert_eq!(path, store.join(WALLPAPER_FILE));
        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (64, 48));

        std::fs::remove_dir_all(store).unwrap();
    }

    #[test]
    fn rejects_bad_requests() {
        let store = env::temp_dir();

        let req = WallpaperRequest {
            width: 10_000,
            height: 10_000,
            ..WallpaperRequest::new("336699")
        };
        assert!(matches!(
            wallpaper_in(&store, &req),
            Err(Error::PixelBudgetExceeded { .. })
        ));

        let req = WallpaperRequest::new("nope");
        assert!(matches!(
            wallpaper_in(&store, &req),
            Err(Error::InvalidColor(_))
        ));
    }
}
