//! Shared types and enums used across HLSBATCH.
//! Includes `PlaylistMode`, `VideoCodec`, `AudioCodec`, and `InputFormat`,
//! each carrying the exact token the ffmpeg command line expects.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// HLS playlist type passed to `-hls_playlist_type`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum PlaylistMode {
    Vod,
    Event,
    Live,
}

impl PlaylistMode {
    /// The value ffmpeg expects on the command line.
    pub fn ffmpeg_name(&self) -> &'static str {
        match self {
            PlaylistMode::Vod => "vod",
            PlaylistMode::Event => "event",
            PlaylistMode::Live => "live",
        }
    }
}

impl std::fmt::Display for PlaylistMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ffmpeg_name())
    }
}

/// Video codec passed to `-c:v`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum VideoCodec {
    Libx264,
}

impl VideoCodec {
    pub fn ffmpeg_name(&self) -> &'static str {
        match self {
            VideoCodec::Libx264 => "libx264",
        }
    }
}

impl std::fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ffmpeg_name())
    }
}

/// Audio codec passed to `-c:a`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum AudioCodec {
    Aac,
}

impl AudioCodec {
    pub fn ffmpeg_name(&self) -> &'static str {
        match self {
            AudioCodec::Aac => "aac",
        }
    }
}

impl std::fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ffmpeg_name())
    }
}

/// Source container format accepted by the batch scanner.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum InputFormat {
    Mp4,
}

impl InputFormat {
    /// File extension matched during discovery, compared case-insensitively.
    pub fn extension(&self) -> &'static str {
        match self {
            InputFormat::Mp4 => "mp4",
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
