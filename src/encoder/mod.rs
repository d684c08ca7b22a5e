//! External encoder integration layer.
//! Provides the `command` runner seam (real subprocesses behind a trait so
//! tests can substitute fakes), `ffmpeg` argument construction for HLS
//! packaging, and the `probe` availability check.
pub mod command;
pub mod ffmpeg;
pub mod probe;

pub use command::{CancelToken, CommandRunner, SystemRunner, ToolOutput};
pub use probe::{ToolInfo, check_tool, check_tool_with_arg};
