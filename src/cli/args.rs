use clap::Parser;
use std::path::PathBuf;

use hlsbatch::{AudioCodec, PlaylistMode, VideoCodec};

#[derive(Parser)]
#[command(name = "hlsbatch", version, about = "HLSBATCH CLI")]
pub struct CliArgs {
    /// Directory scanned for MP4 sources
    #[arg(long, default_value = "videos/raw")]
    pub source_dir: PathBuf,

    /// Directory receiving one HLS folder per converted video
    #[arg(long, default_value = "videos/hls")]
    pub output_dir: PathBuf,

    /// HLS segment duration in seconds
    #[arg(long, default_value_t = 6)]
    pub segment_seconds: u32,

    /// HLS playlist type (vod, event or live)
    #[arg(long, value_enum, default_value_t = PlaylistMode::Vod)]
    pub playlist_type: PlaylistMode,

    /// Video codec
    #[arg(long, value_enum, default_value_t = VideoCodec::Libx264)]
    pub video_codec: VideoCodec,

    /// Audio codec
    #[arg(long, value_enum, default_value_t = AudioCodec::Aac)]
    pub audio_codec: AudioCodec,

    /// Write a line-delimited JSON report of the run to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
