//! Batch module: the PNG to WEBP run itself.
//!
//! A run walks the input directory in file name order and, for every PNG:
//!
//! 1. decodes it,
//! 2. caps its longest side at `max_dimension` (truncating the other side),
//! 3. derives `<stem>.webp`,
//! 4. records a duplicate if that name already exists in the output
//!    directory, otherwise
//! 5. encodes it as WEBP at `quality` and writes it, recording a failure on
//!    any decode/encode/write error.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pngpress_core::batch::{BatchConfig, BatchConverter};
//! use pngpress_core::codec::WebpCodec;
//! use pngpress_core::notify::TerminalNotifier;
//!
//! let config = BatchConfig::for_dir("/photos");
//! let converter = BatchConverter::new(config, Arc::new(WebpCodec::new()))
//!     .with_notifier(Arc::new(TerminalNotifier::new()));
//!
//! let report = converter.run().await?;
//! println!("{} converted, {} duplicates, {} failed",
//!     report.converted_count(), report.duplicates.len(), report.failures.len());
//! ```

mod config;
mod error;
mod run_log;
mod runner;
mod scan;
mod types;

pub use config::{BatchConfig, DEFAULT_OUTPUT_SUBDIR};
pub use error::BatchError;
pub use run_log::RunLog;
pub use runner::BatchConverter;
pub use scan::{has_png_extension, list_png_inputs, webp_target_name};
pub use types::{BatchProgress, BatchReport, FailureStage, FileOutcome, InputFile};
