use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::greeting;
use tracing::{debug, instrument};

/// One-line description printed for `--summary` (rc help integration).
pub const SUMMARY: &str = "Displays a customizable greeting message (Python version)";

/// Fixed line printed for `--version` (rc utility convention).
pub const VERSION_LINE: &str = "hello - rcForge Utility v0.4.1";

/// Exactly one branch runs per invocation: summary wins over version,
/// version wins over greeting.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if cli.summary {
        println!("{SUMMARY}");
        return Ok(());
    }
    if cli.version {
        println!("{VERSION_LINE}");
        return Ok(());
    }
    greet(cli)
}

#[instrument]
fn greet(cli: &Cli) -> CliResult<()> {
    debug!("name: {:?}, format: {:?}", cli.name, cli.format);
    let mut line = greeting::render(&cli.format, &cli.name)?;
    if cli.uppercase {
        line = line.to_uppercase();
    }
    println!("{line}");
    Ok(())
}
