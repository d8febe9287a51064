//! cursor-init: initialize your Cursor AI context in seconds
//!
//! Writes a `.cursorrules` file from a builtin template, a remote registry
//! entry, or any URL serving raw text.

use anyhow::Result;
use clap::{Parser, Subcommand};
use cursor_init::config::{CliOverrides, Settings};
use cursor_init::installer::stdin_prompt;
use cursor_init::resolver::InstallRequest;
use cursor_init::InitError;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "cursor-init")]
#[command(about = "Initialize your Cursor AI context in seconds", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Template registry URL
    #[arg(long, global = true, env = "CURSOR_INIT_REGISTRY")]
    registry: Option<String>,

    /// Skip the remote registry and use builtin templates only
    #[arg(long, global = true)]
    offline: bool,

    /// Network timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all available cursor rule templates
    List,

    /// Preview a template without installing it
    Show {
        /// Template name (e.g., python, nextjs, flutter, java-spring)
        template: String,

        /// Print only the template content
        #[arg(long)]
        raw: bool,
    },

    /// Install a template as .cursorrules in the current directory
    Install {
        /// Template name (e.g., python, nextjs, flutter, java-spring)
        template: Option<String>,

        /// Fetch the rules from a URL instead (takes precedence over a template name)
        #[arg(short, long)]
        url: Option<String>,

        /// Overwrite an existing .cursorrules without asking
        #[arg(short, long)]
        force: bool,

        /// Directory to write into (default: current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

/// Log level is controlled by `--debug`, then `RUST_LOG`, then defaults to
/// warnings only. Logs go to stderr.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cursor_init=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cursor_init=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(CliOverrides {
        registry_url: cli.registry,
        timeout_secs: cli.timeout,
        offline: cli.offline,
    })?;
    tracing::debug!("Settings: {:?}", settings);

    match cli.command {
        Commands::List => {
            println!("{}", commands::list::execute(&settings));
        }

        Commands::Show { template, raw } => {
            let output = commands::show::execute(&settings, &template, raw)?;
            if raw {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
        }

        Commands::Install {
            template,
            url,
            force,
            dir,
        } => {
            let target_directory = match dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let request = InstallRequest {
                key: template,
                url,
                force,
                target_directory,
            };
            commands::install::execute(&settings, &request, &mut stdin_prompt())?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            if let Some(InitError::UnknownTemplate { available, .. }) = e.downcast_ref::<InitError>() {
                eprintln!("\nAvailable templates:");
                for key in available {
                    eprintln!("  {}", key.dimmed());
                }
                eprintln!("\nRun {} to see details.", "cursor-init list".bold());
            }
            ExitCode::FAILURE
        }
    }
}
