//! moshigen CLI - Moshi adapter generator harness
//!
//! Commands:
//! - `moshigen generate` - Generate adapter sources from a class model
//! - `moshigen check` - Validate a class model without writing files

use clap::{Parser, Subcommand};

mod check;
mod generate;
mod manifest;

#[derive(Parser)]
#[command(name = "moshigen")]
#[command(author, version, about = "Moshi JSON adapter generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate adapter and factory sources from a class model
    Generate {
        /// Path to the class model JSON (default: from moshigen.toml)
        #[arg(short, long)]
        model: Option<String>,

        /// Output directory for generated Java sources
        #[arg(short, long)]
        output: Option<String>,

        /// Path to moshigen.toml (default: ./moshigen.toml when present)
        #[arg(long)]
        manifest: Option<String>,

        /// Log elapsed time per generation phase
        #[arg(long)]
        trace: bool,
    },

    /// Validate a class model and manifest without writing files
    Check {
        /// Path to the class model JSON (default: from moshigen.toml)
        #[arg(short, long)]
        model: Option<String>,

        /// Path to moshigen.toml (default: ./moshigen.toml when present)
        #[arg(long)]
        manifest: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            model,
            output,
            manifest,
            trace,
        } => {
            generate::run(model, output, manifest, trace)?;
        }
        Commands::Check { model, manifest } => {
            check::run(model, manifest)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
