use crate::cli::commands::resolve_workspace_root;
use crate::cli::parser::ProjectArgs;
use crate::config::ConfigManager;
use crate::core::launcher;
use crate::core::project::classify_project;
use crate::core::resolver::resolve_ide_path;
use crate::platform::{home_dir, Platform};
use crate::utils::{Result, SwitchError};

pub fn execute(args: ProjectArgs) -> Result<()> {
    let project_path = resolve_workspace_root(args.path)?;

    let config = ConfigManager::load_or_create()
        .map_err(|e| SwitchError::config_error(format!("Failed to load configuration: {}", e)))?;

    let project_type = classify_project(&project_path);

    let platform = Platform::current();
    let ide = resolve_ide_path(None, project_type, &config.ide, platform, &home_dir());

    let command = launcher::build_command(&ide, &project_path, None, platform);

    if args.dry_run {
        println!("{}", command.rendered());
        return Ok(());
    }

    tracing::debug!("executing launch command: {}", command.rendered());
    launcher::execute(&command)?;

    println!("✅ Opened {} in {}", project_path.display(), ide);
    Ok(())
}
