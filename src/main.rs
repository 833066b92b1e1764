use clap::Parser;
use jbswitch::cli::{execute_command, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute_command(cli) {
        eprintln!("jbswitch: {}", e);
        std::process::exit(1);
    }
}
