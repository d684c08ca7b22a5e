//! High-level, ergonomic library API: discover MP4 sources, convert a single
//! file to HLS, and batch helpers for whole directories. Prefer these
//! entrypoints over the low-level `encoder` module when integrating HLSBATCH.
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::params::ConversionParams;
use crate::encoder::command::{CancelToken, CommandRunner};
use crate::encoder::ffmpeg::{self, FFMPEG, PLAYLIST_NAME};
use crate::error::{Error, Result};
use crate::types::InputFormat;

/// Result of one conversion attempt
#[derive(Debug, Clone, Serialize)]
pub struct ConversionOutcome {
    pub input: PathBuf,
    pub success: bool,
    /// Captured diagnostic text when the conversion failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Batch conversion report
///
/// Counts are updated as each outcome arrives; `outcomes` preserves the
/// order in which inputs were attempted, so `succeeded + failed` always
/// equals `outcomes.len()`.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
    /// Per-input outcomes in discovery order
    pub outcomes: Vec<ConversionOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    fn record(&mut self, outcome: ConversionOutcome) {
        if outcome.success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }
}

/// List the files in `dir` whose extension matches `format`, compared
/// case-insensitively, in directory-listing order.
///
/// Fails with [`Error::MissingDirectory`] when `dir` does not exist; the
/// source directory is never created on the caller's behalf. Subdirectories
/// and non-matching files are skipped.
pub fn find_input_files(dir: &Path, format: InputFormat) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::missing_directory(dir));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            debug!("skipping non-file entry: {:?}", path);
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(format.extension()));

        if matches {
            files.push(path);
        }
    }

    Ok(files)
}

/// Convert a single input into `<output_root>/<base name>/` and return the
/// path to the written playlist.
///
/// The per-video directory is created if missing, so re-running over prior
/// results overwrites them in place rather than duplicating anything.
pub fn convert_file(
    runner: &dyn CommandRunner,
    input: &Path,
    output_root: &Path,
    params: &ConversionParams,
    cancel: &CancelToken,
) -> Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        Error::InvalidInput(format!("input has no file name: {}", input.display()))
    })?;
    let out_dir = output_root.join(stem);
    fs::create_dir_all(&out_dir)?;

    let args = ffmpeg::hls_args(input, &out_dir, params);
    runner.run(FFMPEG, &args, cancel)?;

    Ok(out_dir.join(PLAYLIST_NAME))
}

/// Convert every matching file from `source_dir` into per-video HLS folders
/// under `output_root`.
///
/// Jobs run sequentially in discovery order; one job's encoder process fully
/// exits before the next starts. A failed job is recorded in the report and
/// does not abort or skip the remaining jobs. Cancellation stops launching
/// new jobs, kills the in-flight encoder, and keeps already-completed
/// outcomes in the report.
pub fn convert_directory(
    runner: &dyn CommandRunner,
    source_dir: &Path,
    output_root: &Path,
    params: &ConversionParams,
    cancel: &CancelToken,
) -> Result<BatchReport> {
    let inputs = find_input_files(source_dir, params.input_format)?;
    fs::create_dir_all(output_root)?;

    let mut report = BatchReport::default();

    if inputs.is_empty() {
        info!(
            "no {} files found in {:?}; add some and run again",
            params.input_format, source_dir
        );
        return Ok(report);
    }

    info!(
        "found {} {} file(s) to convert",
        inputs.len(),
        params.input_format
    );
    for input in &inputs {
        debug!("queued: {:?}", input);
    }

    let total = inputs.len();
    for input in inputs {
        if cancel.is_cancelled() {
            warn!(
                "cancelled; {} job(s) were not started",
                total - report.total()
            );
            break;
        }

        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());

        info!("converting {}", name);
        match convert_file(runner, &input, output_root, params, cancel) {
            Ok(playlist) => {
                info!("converted {} -> {:?}", name, playlist);
                report.record(ConversionOutcome {
                    input,
                    success: true,
                    detail: None,
                });
            }
            Err(Error::Cancelled) => {
                warn!("cancelled while converting {}", name);
                break;
            }
            Err(e) => {
                warn!("failed to convert {}: {}", name, e);
                report.record(ConversionOutcome {
                    input,
                    success: false,
                    detail: Some(e.to_string()),
                });
            }
        }
    }

    Ok(report)
}
