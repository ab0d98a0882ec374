//! pim CLI — student registration, review and self-assessment.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod session;

#[derive(Parser)]
#[command(
    name = "pim",
    version,
    about = "Student review and self-assessment platform"
)]
struct Cli {
    /// Roster JSON file (overrides PIM_DATA_PATH and the config file)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at info level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Session,

    /// Check the roster file for malformed or suspicious records
    Validate,

    /// Print per-discipline statistics for one student
    Report {
        /// Email of the student
        #[arg(long)]
        email: String,
    },

    /// Create a starter pim.toml
    Init,
}

/// Parse a comma-separated filter such as `pim=debug,pim_core=info`.
fn log_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).with_context(|| format!("invalid log_filter {directives:?}"))
}

/// `RUST_LOG` wins when set and valid; otherwise `directives` is used.
fn init_tracing(directives: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => log_filter(directives)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = config::load_config_from(cli.config.as_deref()).and_then(|config| {
        if cli.verbose {
            init_tracing("pim=info")?;
        } else {
            init_tracing(&config.log_filter)?;
        }

        let data_path = config.resolve_data_path(cli.data.as_deref());
        tracing::debug!("using roster file {}", data_path.display());

        match cli.command.unwrap_or(Commands::Session) {
            Commands::Session => commands::session::execute(data_path),
            Commands::Validate => commands::validate::execute(data_path),
            Commands::Report { email } => commands::report::execute(data_path, email),
            Commands::Init => commands::init::execute(),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
