//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use pngpress_core::{Config, NotifierMethod};

#[derive(Debug, Parser)]
#[command(name = "pngpress")]
#[command(version, about = "Shrink PNG images into WEBP copies", long_about = None)]
pub struct Args {
    /// Directory scanned for PNG files (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving WEBP files and logs (default: <INPUT>/Compressed)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Longest side of an output image, in pixels
    #[arg(short, long, value_name = "PX")]
    pub max_dimension: Option<u32>,

    /// WEBP quality (0-100)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: Option<u8>,

    /// How problems are reported at the end of the run
    #[arg(short, long, value_enum)]
    pub notifier: Option<NotifierArg>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotifierArg {
    Desktop,
    Terminal,
    ExitCode,
}

impl From<NotifierArg> for NotifierMethod {
    fn from(arg: NotifierArg) -> Self {
        match arg {
            NotifierArg::Desktop => NotifierMethod::Desktop,
            NotifierArg::Terminal => NotifierMethod::Terminal,
            NotifierArg::ExitCode => NotifierMethod::ExitCode,
        }
    }
}

impl Args {
    /// Apply flags on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.input_dir {
            config.batch.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.batch.output_dir = Some(dir.clone());
        }
        if let Some(max) = self.max_dimension {
            config.batch.max_dimension = max;
        }
        if let Some(quality) = self.quality {
            config.batch.quality = quality;
        }
        if let Some(notifier) = self.notifier {
            config.notifier.method = notifier.into();
        }
    }
}
