//! Command-line interface for batch mosaicing of PNG files

use crate::aggregate::sampling::HexSampling;
use crate::io::configuration::{
    DATA_URL_EXTENSION, DEFAULT_BLOCK_SIZE, DEFAULT_HEX_RADIUS, OUTPUT_SUFFIX,
};
use crate::io::error::{MosaicError, Result, path_error};
use crate::io::image::{encode_data_url, save_raster};
use crate::io::progress::{ProgressManager, Stage};
use crate::io::session::Session;
use crate::render::mosaic::{MosaicParameters, MosaicRenderer};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Tiling used for the mosaic
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Jittered square blocks with median colors
    Square,
    /// Pointy-top hexagons
    Hex,
}

/// Color choice for hexagon cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sampling {
    /// Pixel under the cell center
    Center,
    /// Mean over the cell footprint
    Area,
}

impl From<Sampling> for HexSampling {
    fn from(value: Sampling) -> Self {
        match value {
            Sampling::Center => Self::Center,
            Sampling::Area => Self::AreaAverage,
        }
    }
}

#[derive(Parser)]
#[command(name = "pixmosaic")]
#[command(author, version, about = "Apply square-block or hexagonal mosaic filters")]
/// Command-line arguments for the mosaic tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Mosaic tiling
    #[arg(short, long, value_enum, default_value_t = Mode::Square)]
    pub mode: Mode,

    /// Nominal block size in pixels (square mode)
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,

    /// Hexagon radius in pixels (hex mode)
    #[arg(short = 'r', long, default_value_t = DEFAULT_HEX_RADIUS)]
    pub hex_radius: usize,

    /// Hexagon color sampling (hex mode)
    #[arg(long, value_enum, default_value_t = Sampling::Center)]
    pub sampling: Sampling,

    /// Random seed for reproducible block jitter
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Also write the result as a data URL text file
    #[arg(short, long)]
    pub data_url: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validated mosaic parameters for the selected mode
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the size for the selected mode is unusable
    pub fn parameters(&self) -> Result<MosaicParameters> {
        match self.mode {
            Mode::Square => MosaicParameters::square(self.block_size),
            Mode::Hex => MosaicParameters::hexagonal(self.hex_radius, self.sampling.into()),
        }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    renderer: MosaicRenderer,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let renderer = cli
            .seed
            .map_or_else(MosaicRenderer::new, MosaicRenderer::seeded);

        Self {
            cli,
            progress_manager,
            renderer,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, target validation or file
    /// processing fails
    pub fn process(&mut self) -> Result<()> {
        let params = self.cli.parameters()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("Nothing to process");
            return Ok(());
        }

        info!("Applying {params} mosaic to {} file(s)", files.len());

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, &params)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Input files selected by the target, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a PNG file nor a readable
    /// directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_png(target) {
                return Err(path_error(target, "Target file must be a PNG image"));
            }
            if is_output(target) {
                info!("Skipping: {} (mosaic output)", target.display());
                return Ok(vec![]);
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| MosaicError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_png(&path) && !is_output(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(path_error(target, "Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if output_path(input_path).exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        params: &MosaicParameters,
    ) -> Result<()> {
        let start_time = Instant::now();
        self.report_start(index, input_path);

        let mut session = Session::new();
        let (width, height) = session.open(input_path)?;
        if width == 0 || height == 0 {
            warn!("{} has no pixels", input_path.display());
        }

        self.report_stage(index, Stage::Rendering);
        let mosaic = session.render(&mut self.renderer, params)?;

        self.report_stage(index, Stage::Saving);
        if self.cli.data_url {
            let url_path = data_url_path(input_path);
            let data_url = encode_data_url(mosaic.clone())?;
            std::fs::write(&url_path, data_url).map_err(|e| MosaicError::FileSystem {
                path: url_path,
                operation: "write data URL",
                source: e,
            })?;
        }
        save_raster(mosaic, output_path(input_path))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }
        info!(
            "Wrote {} in {:.2}s",
            output_path(input_path).display(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(())
    }

    fn report_start(&mut self, index: usize, path: &Path) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, path);
        }
    }

    fn report_stage(&mut self, index: usize, stage: Stage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.set_stage(index, stage);
        }
    }
}

/// Path of the mosaic PNG written for an input file
pub fn output_path(input_path: &Path) -> PathBuf {
    sibling_path(input_path, "png")
}

/// Path of the data URL text file written for an input file
pub fn data_url_path(input_path: &Path) -> PathBuf {
    sibling_path(input_path, DATA_URL_EXTENSION)
}

fn sibling_path(input_path: &Path, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
