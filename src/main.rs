use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::clap::AppSettings;
use structopt::StructOpt;

use mosaic::config::{parse_size, DEFAULT_NOISE, DEFAULT_SIGMA};
use mosaic::logging::{init_logging, LoggingConfig};
use mosaic::{render_with, save_path, ColorSource, Layer, MosaicConfig, MosaicRng, Output};

/// Generate triangulated mosaic wallpapers
#[derive(Debug, StructOpt)]
#[structopt(name = "mosaic", setting = AppSettings::AllowNegativeNumbers)]
struct Opt {
    /// Where to take colors from: a template image path, an url (with --url) or a #RRGGBB color
    template: String,

    /// Interpret the template as an url
    #[structopt(long)]
    url: bool,

    /// Size of the output image, either 1k, 2k, 4k or WIDTH HEIGHT [default: 1920 1080]
    #[structopt(long, min_values = 1, max_values = 2)]
    size: Vec<String>,

    /// Size of the margin (out of view) within which triangles may be drawn
    #[structopt(long, default_value = "20")]
    margin: u32,

    /// Number of points (triangle vertices) to generate
    #[structopt(long, default_value = "200")]
    count: usize,

    /// Number to seed the generator with
    #[structopt(long)]
    seed: Option<u64>,

    /// Layers to display, this overrides the default instead of adding to it
    #[structopt(long = "show", min_values = 1, default_value = "colors", possible_values = Layer::NAMES)]
    layers: Vec<Layer>,

    /// Save the image to a png file instead of displaying it, without a path (or with a
    /// directory) the file name is generated
    #[structopt(long)]
    save: Option<Option<PathBuf>>,

    /// Add the same random offset to the three channels of every triangle, optionally with a
    /// tolerance (T for [-T, T], or MIN MAX) [default tolerance: 20]
    #[structopt(long)]
    noise: Option<Vec<i32>>,

    /// Add gaussian noise to each channel independently, optionally with a sigma (0 disables
    /// it) [default sigma: 15]
    #[structopt(long)]
    gauss: Option<Option<f64>>,

    /// Lay the points on a regular grid instead of scattering them
    #[structopt(long)]
    poly: bool,

    /// Log every step of the generation
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    init_logging(&LoggingConfig::verbose(opt.verbose)).context("cannot initialize logging")?;

    let (width, height) = parse_size(&opt.size).context("invalid --size")?;

    let noise = opt.noise.clone().map(|tolerance| {
        if tolerance.is_empty() {
            vec![DEFAULT_NOISE]
        } else {
            tolerance
        }
    });

    let gauss = match opt.gauss {
        None => None,
        Some(None) => Some(DEFAULT_SIGMA),
        Some(Some(sigma)) if sigma == 0.0 => None,
        Some(Some(sigma)) => Some(sigma),
    };

    let config = MosaicConfig {
        width,
        height,
        count: opt.count,
        margin: opt.margin,
        poly: opt.poly,
        source: ColorSource::from_template(&opt.template, opt.url),
        noise,
        gauss,
        seed: opt.seed,
        layers: opt.layers.clone(),
    };

    let mut rng = MosaicRng::new();
    if let Some(seed) = opt.seed {
        rng.set_seed(seed);
    }
    println!("Seed {}", rng.seed());

    let mosaic = render_with(&config, &mut rng).context("cannot generate the mosaic")?;

    let output = match &opt.save {
        Some(save) => Output::Save(save_path(
            save.as_deref(),
            &config.source,
            width,
            height,
            mosaic.seed(),
        )),
        None => Output::Display {
            title: format!("Wallpaper ({}x{}) - {}", width, height, opt.template),
        },
    };

    mosaic.output(&output).context("cannot output the mosaic")?;

    Ok(())
}
