//!
//! The whole pipeline: points, triangulation, painting and output.
//!

use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::config::{ColorSource, MosaicConfig};
use crate::error::Result;
use crate::graph::Graph;
use crate::rng::MosaicRng;

/// Where a rendered mosaic ends up, either on disk or on screen but never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Save(PathBuf),
    Display { title: String },
}

#[derive(Debug)]
pub struct Mosaic {
    graph: Graph,
    canvas: Canvas,
    seed: u64,
}

/// Render a mosaic with its own random source, seeded from the configuration if it has a seed.
pub fn render(config: &MosaicConfig) -> Result<Mosaic> {
    let mut rng = match config.seed {
        Some(seed) => MosaicRng::with_seed(seed),
        None => MosaicRng::new(),
    };

    render_with(config, &mut rng)
}

/// Render a mosaic drawing every random number from `rng`.
pub fn render_with(config: &MosaicConfig, rng: &mut MosaicRng) -> Result<Mosaic> {
    config.validate()?;
    let painter = config.painter()?;

    let seed = rng.seed();
    log::info!("seed {}", seed);

    let mut graph = if config.poly {
        Graph::poly(config.width, config.height, config.count, config.margin)
    } else {
        Graph::scatter(config.width, config.height, config.count, config.margin, rng)
    };
    graph.triangulate()?;

    let mut canvas = Canvas::new(painter, config.width, config.height);
    canvas.draw_graph(&graph, &config.layers, rng)?;

    Ok(Mosaic {
        graph,
        canvas,
        seed,
    })
}

impl Mosaic {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn output(&self, output: &Output) -> Result<()> {
        match output {
            Output::Save(path) => self.canvas.save_to(path),
            Output::Display { title } => self.canvas.display(title),
        }
    }
}

/// Resolve where to save a mosaic: an automatic name when no path is given, an automatic name
/// inside `save` when it is a directory and `save` itself otherwise.
pub fn save_path(
    save: Option<&Path>,
    source: &ColorSource,
    width: u32,
    height: u32,
    seed: u64,
) -> PathBuf {
    let auto = || PathBuf::from(format!("{}_{}x{}_{}.png", source.stem(), width, height, seed));

    match save {
        None => auto(),
        Some(dir) if dir.is_dir() => dir.join(auto()),
        Some(path) => path.to_path_buf(),
    }
}
