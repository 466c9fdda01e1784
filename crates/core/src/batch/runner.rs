//! Batch converter implementation.

use chrono::Utc;
use image::DynamicImage;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::codec::{Dimensions, ImageCodec, ResizeFilter};
use crate::notify::Notifier;

use super::config::BatchConfig;
use super::error::BatchError;
use super::run_log::RunLog;
use super::scan::{list_png_inputs, webp_target_name};
use super::types::{BatchProgress, BatchReport, FailureStage, FileOutcome, InputFile};

/// A decoded image, already scaled to its output size.
struct PreparedImage {
    image: DynamicImage,
    original: Dimensions,
    written: Dimensions,
}

type StageFailure = (FailureStage, String);

/// Converts every PNG in a directory to a size-capped WEBP.
///
/// Files are processed one at a time in file name order. Each input ends up
/// as exactly one of: a new WEBP in the output directory, an entry in the
/// duplicate log, or an entry in the failure log. Only setup problems
/// (output directory, log files, listing the input directory) abort a run.
pub struct BatchConverter {
    config: BatchConfig,
    codec: Arc<dyn ImageCodec>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl BatchConverter {
    /// Creates a new batch converter.
    pub fn new(config: BatchConfig, codec: Arc<dyn ImageCodec>) -> Self {
        Self {
            config,
            codec,
            notifier: None,
        }
    }

    /// Sets the notifier used for end-of-run alerts.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Runs the batch.
    pub async fn run(&self) -> Result<BatchReport, BatchError> {
        self.run_batch(None).await
    }

    /// Runs the batch with progress reporting.
    ///
    /// One update is sent per PNG before it is processed. Updates are dropped
    /// when the channel is full or closed.
    pub async fn run_with_progress(
        &self,
        progress_tx: mpsc::Sender<BatchProgress>,
    ) -> Result<BatchReport, BatchError> {
        self.run_batch(Some(progress_tx)).await
    }

    async fn run_batch(
        &self,
        progress_tx: Option<mpsc::Sender<BatchProgress>>,
    ) -> Result<BatchReport, BatchError> {
        let started_at = Utc::now();
        let start = Instant::now();
        let input_dir = self.config.input_dir.clone();
        let output_dir = self.config.resolved_output_dir();

        ensure_output_dir(&output_dir).await?;
        let mut duplicates = RunLog::create(self.config.duplicate_log_path()).await?;
        let mut failures = RunLog::create(self.config.failure_log_path()).await?;

        let inputs = list_png_inputs(&input_dir).await?;
        let total = inputs.len();
        info!(
            "Found {} PNG files in {}, writing to {}",
            total,
            input_dir.display(),
            output_dir.display()
        );

        let mut outcomes = Vec::with_capacity(total);
        for (index, input) in inputs.iter().enumerate() {
            info!("Processing file: {}", input.name);
            if let Some(ref tx) = progress_tx {
                let _ = tx.try_send(BatchProgress {
                    index,
                    total,
                    file_name: input.name.clone(),
                });
            }

            let outcome = self.process_file(input, &output_dir).await;
            match &outcome {
                FileOutcome::Converted {
                    written,
                    size_bytes,
                    ..
                } => {
                    debug!("Wrote {} ({}, {} bytes)", input.name, written, size_bytes);
                }
                FileOutcome::Duplicate { target, .. } => {
                    warn!("Skipping {}: {} already exists", input.name, target);
                    duplicates.append(target).await?;
                }
                FileOutcome::Failed { reason, .. } => {
                    warn!("Failed to compress {}: {}", input.name, reason);
                    failures.append(&input.name).await?;
                }
            }
            outcomes.push(outcome);
        }

        duplicates.sync().await?;
        failures.sync().await?;

        let report = BatchReport {
            input_dir,
            output_dir,
            started_at,
            duration_ms: start.elapsed().as_millis() as u64,
            outcomes,
            duplicates: duplicates.into_entries(),
            failures: failures.into_entries(),
        };

        info!(
            "Batch complete: {} converted, {} duplicates, {} failed in {} ms",
            report.converted_count(),
            report.duplicates.len(),
            report.failures.len(),
            report.duration_ms
        );

        self.raise_alerts(&report).await;
        Ok(report)
    }

    /// Runs one input through decode, resize, collision check, encode and write.
    async fn process_file(&self, input: &InputFile, output_dir: &Path) -> FileOutcome {
        let failed = |(stage, reason): StageFailure| FileOutcome::Failed {
            input: input.name.clone(),
            stage,
            reason,
        };

        let codec = Arc::clone(&self.codec);
        let path = input.path.clone();
        let max_dimension = self.config.max_dimension;
        let filter = self.config.resize_filter;
        let prepared = match tokio::task::spawn_blocking(move || {
            prepare_image(codec.as_ref(), &path, max_dimension, filter)
        })
        .await
        {
            Ok(Ok(prepared)) => prepared,
            Ok(Err(failure)) => return failed(failure),
            Err(e) => {
                return failed((FailureStage::Decode, format!("decoder crashed: {}", e)));
            }
        };

        let output = output_dir.join(webp_target_name(&input.path));
        let target = output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match fs::try_exists(&output).await {
            Ok(true) => {
                return FileOutcome::Duplicate {
                    input: input.name.clone(),
                    target,
                }
            }
            Ok(false) => {}
            Err(e) => {
                return failed((
                    FailureStage::Write,
                    format!("cannot inspect {}: {}", output.display(), e),
                ));
            }
        }

        let codec = Arc::clone(&self.codec);
        let quality = self.config.quality;
        let PreparedImage {
            image,
            original,
            written,
        } = prepared;
        let bytes = match tokio::task::spawn_blocking(move || codec.encode_webp(&image, quality))
            .await
        {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => return failed((FailureStage::Encode, e.to_string())),
            Err(e) => return failed((FailureStage::Encode, format!("encoder crashed: {}", e))),
        };

        match write_new_file(&output, &bytes).await {
            Ok(()) => FileOutcome::Converted {
                input: input.name.clone(),
                output,
                original,
                written,
                size_bytes: bytes.len() as u64,
            },
            // Claimed by someone else between the check and the write.
            Err(e) if e.kind() == ErrorKind::AlreadyExists => FileOutcome::Duplicate {
                input: input.name.clone(),
                target,
            },
            Err(e) => failed((
                FailureStage::Write,
                format!("cannot write {}: {}", output.display(), e),
            )),
        }
    }

    async fn raise_alerts(&self, report: &BatchReport) {
        let Some(notifier) = &self.notifier else {
            return;
        };

        for alert in report.alerts() {
            if let Err(e) = notifier.notify(&alert).await {
                warn!(
                    "Failed to deliver {} alert via {}: {}",
                    alert.kind,
                    notifier.method_name(),
                    e
                );
            }
        }
    }
}

/// Decodes `path` and applies the size cap.
fn prepare_image(
    codec: &dyn ImageCodec,
    path: &Path,
    max_dimension: u32,
    filter: ResizeFilter,
) -> Result<PreparedImage, StageFailure> {
    let image = codec
        .decode(path)
        .map_err(|e| (FailureStage::Decode, e.to_string()))?;
    let original = Dimensions::new(image.width(), image.height());

    let Some(target) = original.fit_within(max_dimension) else {
        return Ok(PreparedImage {
            image,
            original,
            written: original,
        });
    };

    if target.is_empty() {
        return Err((
            FailureStage::Resize,
            format!("{} cannot be scaled to fit {}px", original, max_dimension),
        ));
    }

    debug!("Resizing {} -> {} ({})", original, target, filter.as_str());
    let resized = codec.resize(&image, target, filter);
    Ok(PreparedImage {
        written: Dimensions::new(resized.width(), resized.height()),
        image: resized,
        original,
    })
}

/// Creates the output directory if needed.
async fn ensure_output_dir(path: &Path) -> Result<(), BatchError> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => {
            return Err(BatchError::OutputNotDirectory {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(source) => {
            return Err(BatchError::OutputDirectory {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    fs::create_dir_all(path)
        .await
        .map_err(|source| BatchError::OutputDirectory {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Created output directory {}", path.display());
    Ok(())
}

/// Writes `bytes` to a file that must not exist yet.
///
/// A partially written file is removed on error.
async fn write_new_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;

    let result = async {
        file.write_all(bytes).await?;
        file.flush().await
    }
    .await;

    if let Err(e) = result {
        drop(file);
        if let Err(cleanup) = fs::remove_file(path).await {
            warn!("Failed to remove partial output {}: {}", path.display(), cleanup);
        }
        return Err(e);
    }
    Ok(())
}
