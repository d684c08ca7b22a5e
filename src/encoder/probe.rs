//! External tool detection.

use std::path::PathBuf;

use tracing::debug;

use crate::encoder::command::{CancelToken, CommandRunner};
use crate::encoder::ffmpeg::PROBE_ARG;

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Check if a tool is available by running its version query through `runner`.
///
/// Any successful exit counts as available; a launch failure or nonzero exit
/// reports the tool as missing. The check is advisory: a tool that probes
/// fine can still fail later on a specific malformed input.
pub fn check_tool(runner: &dyn CommandRunner, name: &str) -> ToolInfo {
    check_tool_with_arg(runner, name, PROBE_ARG)
}

/// Check if a tool is available using a custom version argument.
pub fn check_tool_with_arg(runner: &dyn CommandRunner, name: &str, version_arg: &str) -> ToolInfo {
    let result = runner.run(name, &[version_arg.into()], &CancelToken::new());

    match result {
        Ok(output) => {
            let version = output.stdout.lines().next().map(|s| s.to_string());
            let path = which::which(name).ok();

            ToolInfo {
                name: name.to_string(),
                available: true,
                version,
                path,
            }
        }
        Err(e) => {
            debug!("probe of {name} failed: {e}");
            ToolInfo {
                name: name.to_string(),
                available: false,
                version: None,
                path: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::command::SystemRunner;

    #[test]
    fn test_check_tool_not_found() {
        let info = check_tool(&SystemRunner, "nonexistent_tool_12345");
        assert!(!info.available);
        assert!(info.version.is_none());
        assert!(info.path.is_none());
    }

    #[test]
    #[cfg(unix)]
    fn test_check_tool_any_successful_exit_counts() {
        // `true` ignores its arguments and exits zero, which is all the
        // availability contract requires.
        let info = check_tool_with_arg(&SystemRunner, "true", "-version");
        assert!(info.available);
        assert!(info.path.is_some());
        assert!(info.version.is_none());
    }
}
