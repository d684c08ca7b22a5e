//! ffmpeg command-line construction for HLS packaging.
//!
//! One conversion job maps to one ffmpeg invocation producing a manifest and
//! numbered transport-stream segments inside the per-video output directory.

use std::ffi::OsString;
use std::path::Path;

use crate::core::params::ConversionParams;

/// Name of the encoder binary looked up on PATH.
pub const FFMPEG: &str = "ffmpeg";

/// Version-query argument used by the availability probe.
pub const PROBE_ARG: &str = "-version";

/// Fixed manifest file name written inside each per-video directory.
pub const PLAYLIST_NAME: &str = "playlist.m3u8";

/// printf-style segment naming pattern: segment_000.ts, segment_001.ts, ...
pub const SEGMENT_PATTERN: &str = "segment_%03d.ts";

/// Build the ffmpeg argument list converting `input` into an HLS rendition
/// rooted at `out_dir`.
///
/// `independent_segments` is requested so every segment decodes without
/// reference to earlier ones, which players need for seeking and quality
/// switching.
pub fn hls_args(input: &Path, out_dir: &Path, params: &ConversionParams) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(17);
    args.push("-i".into());
    args.push(input.as_os_str().to_owned());
    args.push("-c:v".into());
    args.push(params.video_codec.ffmpeg_name().into());
    args.push("-c:a".into());
    args.push(params.audio_codec.ffmpeg_name().into());
    args.push("-strict".into());
    args.push("-2".into());
    args.push("-hls_time".into());
    args.push(params.segment_seconds.to_string().into());
    args.push("-hls_playlist_type".into());
    args.push(params.playlist_mode.ffmpeg_name().into());
    args.push("-hls_segment_filename".into());
    args.push(out_dir.join(SEGMENT_PATTERN).into());
    args.push("-hls_flags".into());
    args.push("independent_segments".into());
    args.push(out_dir.join(PLAYLIST_NAME).into());
    args
}
