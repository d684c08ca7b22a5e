//! End-to-end batch behavior through the public API, using a scripted fake
//! command runner so no real encoder processes are spawned.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use hlsbatch::{
    CancelToken, CommandRunner, ConversionParams, Error, ToolOutput, check_tool,
    convert_directory, convert_file,
};

/// Scripted runner: records every invocation in order, fails any whose input
/// path contains one of the configured markers, and can trigger a cancel
/// token once a given number of invocations has completed.
#[derive(Default)]
struct FakeRunner {
    fail_containing: Vec<&'static str>,
    stdout: String,
    cancel_after: Option<(usize, CancelToken)>,
    invocations: Mutex<Vec<Vec<OsString>>>,
}

impl FakeRunner {
    fn new() -> Self {
        Self::default()
    }

    fn failing_on(markers: &[&'static str]) -> Self {
        Self {
            fail_containing: markers.to_vec(),
            ..Self::default()
        }
    }

    fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }

    /// Input paths in the order the runner was invoked.
    fn inputs_seen(&self) -> Vec<PathBuf> {
        self.invocations
            .lock()
            .unwrap()
            .iter()
            .map(|args| PathBuf::from(&args[1]))
            .collect()
    }

    fn last_args(&self) -> Vec<String> {
        self.invocations
            .lock()
            .unwrap()
            .last()
            .map(|args| {
                args.iter()
                    .map(|a| a.to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl CommandRunner for FakeRunner {
    fn run(
        &self,
        _tool: &str,
        args: &[OsString],
        _cancel: &CancelToken,
    ) -> hlsbatch::Result<ToolOutput> {
        let count = {
            let mut invocations = self.invocations.lock().unwrap();
            invocations.push(args.to_vec());
            invocations.len()
        };

        if let Some((after, token)) = &self.cancel_after {
            if count >= *after {
                token.cancel();
            }
        }

        let joined = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ");
        if self.fail_containing.iter().any(|m| joined.contains(m)) {
            Err(Error::ToolFailed {
                tool: "ffmpeg".to_string(),
                code: Some(1),
                stderr: format!("cannot decode {joined}"),
            })
        } else {
            Ok(ToolOutput {
                stdout: self.stdout.clone(),
                stderr: String::new(),
            })
        }
    }
}

fn touch(path: &Path) {
    fs::write(path, b"").unwrap();
}

fn setup_source(names: &[&str]) -> (tempfile::TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("raw");
    let output = dir.path().join("hls");
    fs::create_dir_all(&source).unwrap();
    for name in names {
        touch(&source.join(name));
    }
    (dir, source, output)
}

#[test]
fn every_input_yields_exactly_one_outcome() {
    let (_tmp, source, output) = setup_source(&["a.mp4", "b.mp4", "c.MP4", "d.mp4", "notes.txt"]);
    let runner = FakeRunner::new();

    let report = convert_directory(
        &runner,
        &source,
        &output,
        &ConversionParams::default(),
        &CancelToken::new(),
    )
    .unwrap();

    assert_eq!(report.total(), 4);
    assert_eq!(report.succeeded, 4);
    assert_eq!(report.failed, 0);
    assert_eq!(report.succeeded + report.failed, report.total());

    // Outcomes arrive in the same order jobs were launched.
    let attempted: Vec<PathBuf> = report.outcomes.iter().map(|o| o.input.clone()).collect();
    assert_eq!(attempted, runner.inputs_seen());

    for outcome in &report.outcomes {
        let stem = outcome.input.file_stem().unwrap();
        assert!(output.join(stem).is_dir());
    }
}

#[test]
fn a_failed_job_does_not_abort_the_batch() {
    let (_tmp, source, output) = setup_source(&["a.mp4", "b.mp4", "c.mp4"]);
    let runner = FakeRunner::failing_on(&["b.mp4"]);

    let report = convert_directory(
        &runner,
        &source,
        &output,
        &ConversionParams::default(),
        &CancelToken::new(),
    )
    .unwrap();

    // All three jobs were attempted despite the middle failure.
    assert_eq!(runner.invocation_count(), 3);
    assert_eq!(report.total(), 3);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);

    for outcome in &report.outcomes {
        let is_b = outcome.input.ends_with("b.mp4");
        assert_eq!(outcome.success, !is_b);
        if is_b {
            let detail = outcome.detail.as_deref().unwrap();
            assert!(detail.contains("cannot decode"));
        } else {
            assert!(outcome.detail.is_none());
        }
    }
}

#[test]
fn zero_qualifying_inputs_is_a_successful_noop() {
    let (_tmp, source, output) = setup_source(&["readme.md"]);
    let runner = FakeRunner::new();

    let report = convert_directory(
        &runner,
        &source,
        &output,
        &ConversionParams::default(),
        &CancelToken::new(),
    )
    .unwrap();

    assert_eq!(report.total(), 0);
    assert_eq!(report.succeeded, 0);
    assert_eq!(report.failed, 0);
    assert_eq!(runner.invocation_count(), 0);
    assert!(output.is_dir());
}

#[test]
fn missing_source_directory_aborts_before_any_job() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("absent");
    let output = tmp.path().join("hls");
    let runner = FakeRunner::new();

    let result = convert_directory(
        &runner,
        &source,
        &output,
        &ConversionParams::default(),
        &CancelToken::new(),
    );

    assert!(matches!(result, Err(Error::MissingDirectory { .. })));
    assert_eq!(runner.invocation_count(), 0);
    assert!(!output.exists());
}

#[test]
fn output_layout_matches_the_fixed_naming() {
    let (_tmp, source, output) = setup_source(&["clip.mp4"]);
    let runner = FakeRunner::new();

    let playlist = convert_file(
        &runner,
        &source.join("clip.mp4"),
        &output,
        &ConversionParams::default(),
        &CancelToken::new(),
    )
    .unwrap();

    assert_eq!(playlist, output.join("clip").join("playlist.m3u8"));
    assert!(output.join("clip").is_dir());

    let args = runner.last_args();
    let clip_dir = output.join("clip");
    assert_eq!(args[0], "-i");
    assert_eq!(args[1], source.join("clip.mp4").display().to_string());
    assert!(args.contains(&clip_dir.join("segment_%03d.ts").display().to_string()));
    assert_eq!(
        args.last().unwrap(),
        &clip_dir.join("playlist.m3u8").display().to_string()
    );
}

#[test]
fn rerunning_over_existing_output_reuses_directories() {
    let (_tmp, source, output) = setup_source(&["a.mp4", "b.mp4"]);

    let first = convert_directory(
        &FakeRunner::new(),
        &source,
        &output,
        &ConversionParams::default(),
        &CancelToken::new(),
    )
    .unwrap();
    assert_eq!(first.total(), 2);

    // Leave a stale artifact behind to prove the directory is reused, not
    // recreated from scratch.
    let stale = output.join("a").join("segment_000.ts");
    touch(&stale);

    let second = convert_directory(
        &FakeRunner::new(),
        &source,
        &output,
        &ConversionParams::default(),
        &CancelToken::new(),
    )
    .unwrap();

    assert_eq!(second.total(), 2);
    assert_eq!(second.succeeded, 2);
    assert!(stale.exists());
}

#[test]
fn cancellation_before_the_loop_runs_nothing() {
    let (_tmp, source, output) = setup_source(&["a.mp4", "b.mp4"]);
    let runner = FakeRunner::new();
    let cancel = CancelToken::new();
    cancel.cancel();

    let report = convert_directory(
        &runner,
        &source,
        &output,
        &ConversionParams::default(),
        &cancel,
    )
    .unwrap();

    assert_eq!(runner.invocation_count(), 0);
    assert_eq!(report.total(), 0);
}

#[test]
fn cancellation_mid_batch_preserves_completed_outcomes() {
    let (_tmp, source, output) = setup_source(&["a.mp4", "b.mp4", "c.mp4"]);
    let cancel = CancelToken::new();
    let runner = FakeRunner {
        cancel_after: Some((1, cancel.clone())),
        ..FakeRunner::default()
    };

    let report = convert_directory(
        &runner,
        &source,
        &output,
        &ConversionParams::default(),
        &cancel,
    )
    .unwrap();

    // The first job completed before the token tripped; no further jobs ran.
    assert_eq!(runner.invocation_count(), 1);
    assert_eq!(report.total(), 1);
    assert_eq!(report.succeeded, 1);
}

#[test]
fn probe_resolves_through_the_runner_seam() {
    let ok = FakeRunner {
        stdout: "ffmpeg version 6.1.1\nbuilt with gcc\n".to_string(),
        ..FakeRunner::default()
    };
    let info = check_tool(&ok, "ffmpeg");
    assert!(info.available);
    assert_eq!(info.version.as_deref(), Some("ffmpeg version 6.1.1"));

    let broken = FakeRunner::failing_on(&["-version"]);
    let info = check_tool(&broken, "ffmpeg");
    assert!(!info.available);
    assert!(info.version.is_none());
}
