//! OCC CLI - Normalizes OCC product configurator documents.

use anyhow::Result;
use clap::Parser;
use occ_cli::{commands, logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "occ")]
#[command(about = "Normalizes OCC product configurator documents into the storefront view model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Convert a wire configuration document into the view model
    Normalize(commands::NormalizeArgs),

    /// Manage the backend configuration file
    Config {
        /// Configuration file path (defaults to $OCC_CONFIG or ./occ.toml)
        #[arg(long, global = true)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        command: commands::ConfigCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Normalize(args) => commands::handle_normalize_command(args),
        Command::Config { config, command } => commands::handle_config_command(command, config),
    }
}
