use crate::cli::commands::resolve_workspace_root;
use crate::cli::parser::FileArgs;
use crate::config::ConfigManager;
use crate::core::launcher::{self, CursorPosition};
use crate::core::project::classify_project;
use crate::core::resolver::resolve_ide_path;
use crate::platform::{home_dir, Platform};
use crate::utils::{ensure_absolute_path, ensure_file_exists, file_extension, Result, SwitchError};

pub fn execute(args: FileArgs) -> Result<()> {
    let file_path = ensure_absolute_path(&args.path);
    ensure_file_exists(&file_path)?;

    let workspace_root = resolve_workspace_root(args.project)?;

    let config = ConfigManager::load_or_create()
        .map_err(|e| SwitchError::config_error(format!("Failed to load configuration: {}", e)))?;

    let project_type = classify_project(&workspace_root);
    let file_type = file_extension(&file_path);

    let platform = Platform::current();
    let ide = resolve_ide_path(
        file_type.as_deref(),
        project_type,
        &config.ide,
        platform,
        &home_dir(),
    );

    let position = CursorPosition {
        line: args.line,
        column: args.column,
    };
    let command = launcher::build_command(&ide, &file_path, Some(position), platform);

    if args.dry_run {
        println!("{}", command.rendered());
        return Ok(());
    }

    tracing::debug!("executing launch command: {}", command.rendered());
    launcher::execute(&command)?;

    println!("✅ Opened {} in {}", file_path.display(), ide);
    Ok(())
}
