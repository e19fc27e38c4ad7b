//! Okha CLI
//!
//! Renders theme variables for a given preference/variant pair, prints the
//! static stylesheet, and validates `okha.toml` files.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use okha_theme::{ColorScheme, ThemePreference, ThemeVariant};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Okha theme engine command line
#[derive(Parser, Debug)]
#[command(name = "okha")]
#[command(about = "Render Okha theme variables and stylesheets")]
#[command(version)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Theme selection shared by the rendering commands
#[derive(clap::Args, Debug, Default)]
pub struct Selection {
    /// light | dark | system
    #[arg(long)]
    pub theme: Option<ThemePreference>,

    /// base | sepia | forest | ocean
    #[arg(long)]
    pub variant: Option<ThemeVariant>,

    /// OS color scheme to assume when the preference is `system`
    #[arg(long)]
    pub system: Option<ColorScheme>,

    /// Configuration file or directory containing okha.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override a variable, e.g. --set primary-color=#FF5500
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = commands::parse_assignment)]
    pub overrides: Vec<(okha_theme::ThemeVariable, String)>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the :root block for the resolved theme
    Css {
        #[command(flatten)]
        selection: Selection,
    },

    /// Print scoped blocks for every theme/variant pair
    Stylesheet,

    /// List the resolved variables
    Variables {
        #[command(flatten)]
        selection: Selection,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a configuration file
    Check {
        /// File or directory containing okha.toml
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Css { selection } => print!("{}", commands::css(&selection)?),
        Command::Stylesheet => print!("{}", commands::stylesheet()),
        Command::Variables { selection, json } => {
            print!("{}", commands::variables(&selection, json)?)
        }
        Command::Check { path } => println!("{}", commands::check(&path)?),
    }

    Ok(())
}
