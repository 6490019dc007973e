use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pdf_pictures::{ImageEmbedding, LayoutOptions, RgbColor};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "picpdf", about = "Turn pictures into a PDF, one per page", version)]
pub struct Cli {
    /// Increase log output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose images into a PDF
    Compose {
        /// Input image file(s), one page each, in order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file (".pdf" is appended when missing)
        #[arg(short, long, default_value = "converted_images.pdf")]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Write the effective layout options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,
    },

    /// Show the page layout for the given images without writing a PDF
    Plan {
        /// Input image file(s)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Layout flags. Each flag overrides the value loaded from `--config`
/// (or the defaults) only when given.
#[derive(Args)]
pub struct LayoutArgs {
    /// Layout options JSON file to start from
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Page size
    #[arg(long, value_enum)]
    pub paper: Option<PaperArg>,

    /// Page orientation
    #[arg(long, value_enum)]
    pub orientation: Option<OrientationArg>,

    /// Margin in mm on all sides (individual sides override this)
    #[arg(long)]
    pub margin: Option<f32>,

    /// Top margin in mm
    #[arg(long)]
    pub margin_top: Option<f32>,

    /// Bottom margin in mm
    #[arg(long)]
    pub margin_bottom: Option<f32>,

    /// Left margin in mm
    #[arg(long)]
    pub margin_left: Option<f32>,

    /// Right margin in mm
    #[arg(long)]
    pub margin_right: Option<f32>,

    /// Margin color as #RRGGBB
    #[arg(long)]
    pub margin_color: Option<String>,

    /// Content area background color as #RRGGBB
    #[arg(long)]
    pub background_color: Option<String>,

    /// What to do with images taller than the content area
    #[arg(long, value_enum)]
    pub overflow: Option<OverflowArg>,

    /// Stage images through temporary PNG files instead of embedding from memory
    #[arg(long)]
    pub staged: bool,

    /// Parent directory for staged files (implies --staged)
    #[arg(long)]
    pub staging_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum PaperArg {
    A4,
    Letter,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OverflowArg {
    Spill,
    Clip,
    Fit,
}

impl From<PaperArg> for pdf_pictures::PageSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::Letter => Self::Letter,
        }
    }
}

impl From<OrientationArg> for pdf_pictures::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<OverflowArg> for pdf_pictures::OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Spill => Self::Spill,
            OverflowArg::Clip => Self::Clip,
            OverflowArg::Fit => Self::Fit,
        }
    }
}

impl LayoutArgs {
    /// Load `--config` (or the defaults) and apply the explicit flags.
    pub async fn resolve(&self) -> Result<LayoutOptions> {
        let base = match &self.config {
            Some(path) => LayoutOptions::load(path)
                .await
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => LayoutOptions::default(),
        };
        self.apply(base)
    }

    /// Apply the explicit flags on top of `options`.
    pub fn apply(&self, mut options: LayoutOptions) -> Result<LayoutOptions> {
        if let Some(paper) = self.paper {
            options.page_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            options.orientation = orientation.into();
        }

        if let Some(margin) = self.margin {
            options.margins = pdf_pictures::Margins::uniform(margin);
        }
        if let Some(top) = self.margin_top {
            options.margins.top_mm = top;
        }
        if let Some(bottom) = self.margin_bottom {
            options.margins.bottom_mm = bottom;
        }
        if let Some(left) = self.margin_left {
            options.margins.left_mm = left;
        }
        if let Some(right) = self.margin_right {
            options.margins.right_mm = right;
        }

        if let Some(color) = &self.margin_color {
            options.margin_color = parse_color(color)?;
        }
        if let Some(color) = &self.background_color {
            options.background_color = parse_color(color)?;
        }

        if let Some(overflow) = self.overflow {
            options.overflow = overflow.into();
        }
        if self.staged || self.staging_dir.is_some() {
            options.embedding = ImageEmbedding::Staged {
                staging_dir: self.staging_dir.clone(),
            };
        }

        Ok(options)
    }
}

fn parse_color(value: &str) -> Result<RgbColor> {
    value
        .parse()
        .with_context(|| format!("Invalid color argument '{}'", value))
}
