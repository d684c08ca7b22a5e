//! Subprocess execution with full output capture and cooperative cancellation.
//!
//! `CommandRunner` is the seam between the conversion pipeline and the
//! operating system: production code goes through `SystemRunner`, while tests
//! substitute a scripted fake and never spawn a real process.

use std::ffi::OsString;
use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};

/// How often the runner polls a live child for exit or cancellation.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Cooperative cancellation flag shared between the caller and the runner.
///
/// Cloning yields a handle to the same flag. Once cancelled, the batch loop
/// stops launching new jobs and `SystemRunner` kills the in-flight child.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Captured output of a successfully exited tool. Both streams are buffered
/// in full and decoded lossily; interleaving order is not preserved.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Executes an external command-line tool.
///
/// Implementations resolve with the captured output on a zero exit status,
/// fail with [`Error::ToolFailed`] on a nonzero exit, and fail with
/// [`Error::Launch`] when the process cannot be started at all.
pub trait CommandRunner {
    /// Run `tool` with `args` and block until it exits.
    ///
    /// No timeout is enforced: encodes of long inputs legitimately run for
    /// hours, so the call waits indefinitely unless `cancel` is triggered,
    /// in which case the child is killed and [`Error::Cancelled`] returned.
    fn run(&self, tool: &str, args: &[OsString], cancel: &CancelToken) -> Result<ToolOutput>;
}

/// `CommandRunner` backed by real subprocesses via `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, tool: &str, args: &[OsString], cancel: &CancelToken) -> Result<ToolOutput> {
        debug!("spawning {} with {} args", tool, args.len());

        let mut child = Command::new(tool)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::launch(tool, e))?;

        // Both pipes are drained on their own threads so a chatty child
        // cannot deadlock against a full pipe buffer.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = loop {
            if cancel.is_cancelled() {
                let _ = child.kill();
                let _ = child.wait();
                let _ = stdout.join();
                let _ = stderr.join();
                debug!("{} killed after cancellation", tool);
                return Err(Error::Cancelled);
            }
            match child.try_wait()? {
                Some(status) => break status,
                None => thread::sleep(POLL_INTERVAL),
            }
        };

        let stdout = stdout.join().unwrap_or_default();
        let stderr = stderr.join().unwrap_or_default();

        if status.success() {
            Ok(ToolOutput { stdout, stderr })
        } else {
            Err(Error::tool_failed(
                tool,
                status.code(),
                stderr.trim_end().to_string(),
            ))
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}
