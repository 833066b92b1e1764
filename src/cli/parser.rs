use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jbswitch")]
#[command(about = "Open the active file or project in a JetBrains IDE")]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a file at a cursor position
    #[command(alias = "f")]
    File(FileArgs),
    /// Open a project directory
    #[command(alias = "p")]
    Project(ProjectArgs),
    /// Setup configuration
    Config(ConfigArgs),
    /// Generate shell completion script
    Completion(CompletionArgs),
}

#[derive(Args, Debug)]
pub struct FileArgs {
    /// File to open
    pub path: PathBuf,

    /// Caret line, 1-based as editors display it
    #[arg(long, default_value_t = 1)]
    pub line: u32,

    /// Caret column, zero-based character offset
    #[arg(long, default_value_t = 0)]
    pub column: u32,

    /// Workspace root used for project classification (defaults to the current directory)
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Print the launch command instead of executing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Project directory to open (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Print the launch command instead of executing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Interactive configuration wizard
    Setup,
    /// Auto-detect installed JetBrains IDEs and save their paths
    Auto,
    /// Show current configuration
    Show,
    /// Edit configuration file
    Edit,
    /// Reset configuration to defaults
    Reset,
    /// Print the configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completion for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Clone, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl FileArgs {
    pub fn validate(&self) -> crate::utils::Result<()> {
        if self.line == 0 {
            return Err(crate::utils::SwitchError::invalid_args(
                "Line numbers start at 1",
            ));
        }
        Ok(())
    }
}
