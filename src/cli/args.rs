//! CLI argument definitions using clap

use clap::Parser;

/// Displays a customizable greeting message
///
/// `--version` is a plain flag here, not clap's auto-generated one: the rc
/// framework expects the fixed line `hello - rcForge Utility v0.4.1`.
#[derive(Parser, Debug)]
#[command(name = "hello")]
#[command(author, about, long_about = None)]
pub struct Cli {
    /// Name to greet
    #[arg(default_value = "Friend")]
    pub name: String,

    /// Greeting format ({name} is the only recognized placeholder)
    #[arg(long, default_value = "Hello, {name}!")]
    pub format: String,

    /// Convert the greeting to uppercase
    #[arg(short, long)]
    pub uppercase: bool,

    /// Show the one-line summary for rc help
    #[arg(long)]
    pub summary: bool,

    /// Show version information
    #[arg(long)]
    pub version: bool,

    /// Enable debug output (repeat for more: -d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}
