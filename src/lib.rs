#![doc = r#"
HLSBATCH — a batch MP4 to HLS converter driving the ffmpeg CLI.

This crate scans a directory for MP4 sources and turns each one into an HLS
rendition (a `playlist.m3u8` manifest plus numbered `.ts` segments) in its
own folder under an output root. The actual transcoding is delegated to the
external `ffmpeg` binary; this crate contributes discovery, per-file failure
isolation, progress reporting, and an aggregate batch report. It powers the
HLSBATCH CLI and can be embedded in your own Rust applications.

Requirements
------------
- `ffmpeg` available on PATH (any build with the HLS muxer).
- Rust 2024 edition toolchain.

Add dependency
--------------
```toml
[dependencies]
hlsbatch = "0.1"
```

Quick start: convert a directory
--------------------------------
```rust,no_run
use std::path::Path;
use hlsbatch::{convert_directory, CancelToken, ConversionParams, SystemRunner};

fn main() -> hlsbatch::Result<()> {
    let report = convert_directory(
        &SystemRunner,
        Path::new("videos/raw"),
        Path::new("videos/hls"),
        &ConversionParams::default(),
        &CancelToken::new(),
    )?;

    println!("successful={} failed={}", report.succeeded, report.failed);
    Ok(())
}
```

Each converted `clip.mp4` yields `videos/hls/clip/playlist.m3u8` and
`videos/hls/clip/segment_000.ts`, `segment_001.ts`, ... A failed input is
recorded in the report and does not stop the batch.

Single file
-----------
```rust,no_run
use std::path::Path;
use hlsbatch::{convert_file, CancelToken, ConversionParams, SystemRunner};

fn main() -> hlsbatch::Result<()> {
    let playlist = convert_file(
        &SystemRunner,
        Path::new("videos/raw/clip.mp4"),
        Path::new("videos/hls"),
        &ConversionParams::default(),
        &CancelToken::new(),
    )?;
    println!("manifest at {}", playlist.display());
    Ok(())
}
```

Probing for ffmpeg
------------------
```rust,no_run
use hlsbatch::{check_tool, SystemRunner};

let info = check_tool(&SystemRunner, "ffmpeg");
if !info.available {
    eprintln!("ffmpeg not found; install it and ensure it is on PATH");
}
```

Testing without subprocesses
----------------------------
All conversion entrypoints take a [`CommandRunner`], so tests can substitute
a scripted fake and exercise the batch logic without ever spawning ffmpeg.
The production implementation is [`SystemRunner`].

Cancellation
------------
Every entrypoint also takes a [`CancelToken`]. Triggering it from another
thread kills the in-flight encoder process, stops launching new jobs, and
leaves already-completed outcomes in the returned report. No timeout is
enforced otherwise: a conversion blocks until its ffmpeg process exits.

Error handling
--------------
All public functions return `hlsbatch::Result<T>`; match on
`hlsbatch::Error` to handle specific cases.

```rust,no_run
use std::path::Path;
use hlsbatch::{convert_directory, CancelToken, ConversionParams, Error, SystemRunner};

fn main() {
    let result = convert_directory(
        &SystemRunner,
        Path::new("/missing"),
        Path::new("/out"),
        &ConversionParams::default(),
        &CancelToken::new(),
    );
    match result {
        Ok(report) => println!("converted {}", report.succeeded),
        Err(Error::MissingDirectory { path }) => eprintln!("no such source: {}", path.display()),
        Err(Error::Launch { tool, .. }) => eprintln!("{tool} could not be started"),
        Err(other) => eprintln!("other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level discovery, single-file, and batch entry points.
- [`encoder`] — the command-runner seam, ffmpeg arguments, and the probe.
- [`report`] — line-delimited JSON report records.
- [`types`] — shared enums (`PlaylistMode`, codecs, `InputFormat`).
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod encoder;
pub mod error;
pub mod report;
pub mod types;

// Curated public API surface
// Types
pub use core::params::ConversionParams;
pub use error::{Error, Result};
pub use types::{AudioCodec, InputFormat, PlaylistMode, VideoCodec};

// Encoder seam
pub use encoder::command::{CancelToken, CommandRunner, SystemRunner, ToolOutput};
pub use encoder::probe::{ToolInfo, check_tool, check_tool_with_arg};

// High-level API re-exports
pub use api::{BatchReport, ConversionOutcome, convert_directory, convert_file, find_input_files};

// Reporting
pub use report::ReportWriter;
