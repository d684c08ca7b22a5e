use serde::{Deserialize, Serialize};

use crate::types::{AudioCodec, InputFormat, PlaylistMode, VideoCodec};

/// Conversion parameters suitable for config files and presets
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConversionParams {
    pub input_format: InputFormat,
    /// Target segment duration in seconds (`-hls_time`)
    pub segment_seconds: u32,
    pub playlist_mode: PlaylistMode,
    pub video_codec: VideoCodec,
    pub audio_codec: AudioCodec,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            input_format: InputFormat::Mp4,
            segment_seconds: 6,
            playlist_mode: PlaylistMode::Vod,
            video_codec: VideoCodec::Libx264,
            audio_codec: AudioCodec::Aac,
        }
    }
}
