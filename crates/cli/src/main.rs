//! Vitrine CLI
//!
//! Commands:
//! - `vitrine serve` - Run the storefront server
//! - `vitrine check` - Verify the catalog source answers
//! - `vitrine browse` - Browse the catalog from the terminal

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use vitrine_kernel::settings::Settings;

use commands::{BrowseArgs, CheckArgs, ServeArgs};

/// Vitrine - server-rendered storefront over a headless CMS
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log at the configured level instead of warnings only
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Fetch categories, the first page and coupons once
    Check(CheckArgs),

    /// Interactive catalog browser reading commands from stdin
    Browse(BrowseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().with_context(|| "failed to load Vitrine settings")?;
    // one-shot commands write to the terminal; keep the logs out of the way
    if !cli.verbose && !matches!(cli.command, Commands::Serve(_)) {
        settings.telemetry.filter = "warn".to_string();
    }
    vitrine_telemetry::try_init(&settings.telemetry);

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run(args, settings).await,
        Commands::Check(args) => commands::check::run(args, &settings).await,
        Commands::Browse(args) => commands::browse::run(args, &settings).await,
    };

    if let Err(e) = result {
        eprintln!("erro: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
