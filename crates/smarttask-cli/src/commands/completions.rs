//! Shell completion scripts.

use clap::Command;
use clap_complete::{generate, Shell};

/// Write the completion script for `shell` to stdout.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<(), Box<dyn std::error::Error>> {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut std::io::stdout());
    Ok(())
}
