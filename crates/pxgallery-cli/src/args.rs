mod common;

pub use common::ViewModeArgs;

use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pxgallery")]
#[command(
    about = "Group timestamped photos into shooting sessions and publish them as a gallery page",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "pxgallery.toml", global = true)]
    pub config: PathBuf,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cluster the photos, generate thumbnails and write the gallery page
    Build {
        #[arg(long, help = "Photos directory (overrides source_dir)")]
        source: Option<PathBuf>,

        #[arg(long, help = "Gallery page to write (overrides output_file)")]
        output: Option<PathBuf>,

        #[arg(
            long,
            help = "Largest gap in minutes that keeps two photos in one session"
        )]
        threshold: Option<u32>,

        #[arg(long, help = "Link original images instead of generating thumbnails")]
        no_media: bool,
    },

    /// Show how the photos would be grouped without writing anything
    Sessions {
        #[arg(long, help = "Photos directory (overrides source_dir)")]
        source: Option<PathBuf>,

        #[arg(
            long,
            help = "Largest gap in minutes that keeps two photos in one session"
        )]
        threshold: Option<u32>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// List every file in the photos directory and whether it carries a timestamp
    Scan {
        #[arg(long, help = "Photos directory (overrides source_dir)")]
        source: Option<PathBuf>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Write a default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },
}
