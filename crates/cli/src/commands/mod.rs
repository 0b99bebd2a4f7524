//! CLI command implementations.

pub mod browse;
pub mod check;
pub mod serve;

use clap::Args;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind, overriding `server.host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding `server.port`.
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Category to list on the first page.
    #[arg(short, long, default_value = "Todas")]
    pub category: String,

    /// Search term for the first page.
    #[arg(short, long, default_value = "")]
    pub search: String,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Debounce applied to search input, overriding `search.debounce_ms`.
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}
