#![deny(unsafe_code)]

//! buildstamp CLI: inspect and verify build identity stamps.

use std::path::{Path, PathBuf};

use anyhow::Result;
use buildstamp_core::{BuildIdentity, build_info};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// buildstamp: build identity stamping and verification.
#[derive(Parser)]
#[command(name = "buildstamp", version = &*build_info::version_string().leak(), about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the identity stamped into this binary.
    Info {
        /// Emit a JSON identity document instead of the one-line form.
        #[arg(long)]
        json: bool,
    },

    /// Verify the version-constants contract and exit non-zero on failure.
    Check {
        /// Check a JSON identity document instead of this binary's stamp.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up tracing subscriber with verbosity level
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    match cli.command {
        Commands::Info { json } => cmd_info(json)?,
        Commands::Check { file } => cmd_check(file.as_deref())?,
    }

    Ok(())
}

fn cmd_info(json: bool) -> Result<()> {
    let identity = BuildIdentity::current();
    if json {
        println!("{}", serde_json::to_string_pretty(&identity)?);
    } else {
        println!("buildstamp {identity}");
        println!("built at epoch {}", build_info::BUILD_TIMESTAMP);
    }
    Ok(())
}

fn cmd_check(file: Option<&Path>) -> Result<()> {
    let identity = match file {
        Some(path) => {
            info!(path = %path.display(), "checking identity document");
            // load() runs the check on whatever the document contains
            BuildIdentity::load(path)?
        }
        None => {
            let identity = BuildIdentity::current();
            identity.check()?;
            identity
        }
    };
    println!("ok: {identity}");
    Ok(())
}
