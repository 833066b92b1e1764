use crate::platform::Platform;
use crate::utils::{Result, SwitchError};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};

/// Caret placement for file opens. `line` is 1-based the way editors show
/// it; `column` is the raw zero-based character offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: u32,
    pub column: u32,
}

/// A fully rendered launch invocation: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    program: String,
    args: Vec<String>,
}

impl LaunchCommand {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Shell-style rendering for logs and --dry-run output.
    pub fn rendered(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote_if_needed)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

fn quote_if_needed(arg: &str) -> String {
    if arg.contains(' ') {
        format!("\"{}\"", arg)
    } else {
        arg.to_string()
    }
}

/// Deep-link URL the JetBrains IDEs register a handler for.
pub fn deep_link(target: &Path, position: Option<CursorPosition>) -> String {
    let encoded = urlencoding::encode(&target.to_string_lossy()).into_owned();
    match position {
        Some(position) => format!(
            "idea://open?file={}&line={}&column={}",
            encoded, position.line, position.column
        ),
        None => format!("idea://open?file={}", encoded),
    }
}

/// Build the platform-specific launch invocation.
///
/// On macOS the IDE is reached through `open -a` with a deep-link URL rather
/// than by invoking its binary: a direct invocation shows a second,
/// transient dock icon whenever the IDE is already running. Everywhere else
/// the resolved binary is invoked directly.
pub fn build_command(
    ide: &str,
    target: &Path,
    position: Option<CursorPosition>,
    platform: Platform,
) -> LaunchCommand {
    match platform {
        Platform::MacOS => LaunchCommand {
            program: "open".to_string(),
            args: vec![
                "-a".to_string(),
                ide.to_string(),
                deep_link(target, position),
            ],
        },
        Platform::Windows | Platform::Linux => {
            let mut args = Vec::new();
            if let Some(position) = position {
                args.push("--line".to_string());
                args.push(position.line.to_string());
                args.push("--column".to_string());
                args.push(position.column.to_string());
            }
            args.push(target.to_string_lossy().into_owned());
            LaunchCommand {
                program: ide.to_string(),
                args,
            }
        }
    }
}

/// Run the launch command as a single child process and await it. One
/// attempt per user action; failures are reported, never retried.
pub fn execute(command: &LaunchCommand) -> Result<()> {
    let output = command.to_command().output();
    launch_outcome(&command.program, output)
}

fn launch_outcome(program: &str, output: std::io::Result<Output>) -> Result<()> {
    match output {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(SwitchError::launch_error(format!(
                "'{}' exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )))
        }
        // The IDE may have started even though the channel died under us.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("launch channel closed early, assuming '{}' started: {}", program, e);
            Ok(())
        }
        Err(e) => Err(SwitchError::launch_error(format!("'{}': {}", program, e))),
    }
}
