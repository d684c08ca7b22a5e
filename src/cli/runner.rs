use tracing::info;

use hlsbatch::api::convert_directory;
use hlsbatch::encoder::ffmpeg::FFMPEG;
use hlsbatch::{CancelToken, ConversionParams, ReportWriter, SystemRunner, check_tool};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), AppError> {
    let level = if args.log {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let runner = SystemRunner;

    info!("checking for {}", FFMPEG);
    let tool = check_tool(&runner, FFMPEG);
    if !tool.available {
        return Err(AppError::ToolUnavailable {
            tool: FFMPEG.to_string(),
        });
    }
    match (&tool.version, &tool.path) {
        (Some(version), _) => info!("{} available: {}", FFMPEG, version),
        (None, Some(path)) => info!("{} available at {:?}", FFMPEG, path),
        _ => info!("{} available", FFMPEG),
    }

    let params = ConversionParams {
        segment_seconds: args.segment_seconds,
        playlist_mode: args.playlist_type,
        video_codec: args.video_codec,
        audio_codec: args.audio_codec,
        ..Default::default()
    };

    let cancel = CancelToken::new();
    let report = convert_directory(
        &runner,
        &args.source_dir,
        &args.output_dir,
        &params,
        &cancel,
    )?;

    if let Some(path) = &args.report {
        let mut writer = ReportWriter::create(path)?;
        for outcome in &report.outcomes {
            writer.outcome(outcome)?;
        }
        writer.summary(&report, &args.output_dir)?;
        writer.flush()?;
        info!("report written to {:?}", path);
    }

    info!("conversion complete");
    info!("  successful: {}", report.succeeded);
    info!("  failed: {}", report.failed);
    info!("  output directory: {:?}", args.output_dir);

    Ok(())
}
