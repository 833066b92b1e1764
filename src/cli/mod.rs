pub mod commands;
pub mod parser;

pub use parser::{Cli, Commands};

use crate::utils::Result;

pub fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::File(args)) => {
            args.validate()?;
            commands::file::execute(args)
        }
        Some(Commands::Project(args)) => commands::project::execute(args),
        Some(Commands::Config(args)) => commands::config::execute(args),
        Some(Commands::Completion(args)) => commands::completion::execute(args),
        None => {
            show_usage();
            Ok(())
        }
    }
}

fn show_usage() {
    println!("jbswitch - JetBrains IDE switch helper");
    println!();
    println!("Opens the file or project you are working on in IntelliJ IDEA or PyCharm,");
    println!("picking the IDE from the workspace's ecosystem.");
    println!();
    println!("Usage: jbswitch <COMMAND>");
    println!();
    println!("Commands:");
    println!("  file, f     Open a file at a cursor position");
    println!("  project, p  Open a project directory");
    println!("  config      Setup configuration");
    println!("  completion  Generate shell completion script");
    println!("  help        Print this message or the help of the given subcommand(s)");
    println!();
    println!("Use 'jbswitch <command> --help' for more information on a specific command.");
}
