use crate::cli::parser::{CompletionArgs, Shell};
use crate::utils::{Result, SwitchError};

pub fn execute(args: CompletionArgs) -> Result<()> {
    let completion_script = generate_completion(args.shell)?;
    println!("{}", completion_script);
    Ok(())
}

fn generate_completion(shell: Shell) -> Result<String> {
    use clap::CommandFactory;
    use clap_complete::{generate, shells};

    let mut cmd = crate::cli::parser::Cli::command();
    let mut buf = Vec::new();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, "jbswitch", &mut buf),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, "jbswitch", &mut buf),
        Shell::Fish => generate(shells::Fish, &mut cmd, "jbswitch", &mut buf),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, "jbswitch", &mut buf),
    }

    String::from_utf8(buf)
        .map_err(|e| SwitchError::invalid_args(format!("UTF-8 error generating completion: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completion_mentions_subcommands() {
        let script = generate_completion(Shell::Bash).unwrap();
        assert!(script.contains("jbswitch"));
        assert!(script.contains("project"));
    }
}
