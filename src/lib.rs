pub mod cli;
pub mod config;
pub mod core;
pub mod platform;
pub mod utils;

pub use config::Config;
pub use core::launcher::{build_command, CursorPosition, LaunchCommand};
pub use core::project::{classify_project, ProjectType};
pub use core::resolver::{resolve_ide_path, IdeFamily};
pub use platform::Platform;
pub use utils::{Result, SwitchError};
