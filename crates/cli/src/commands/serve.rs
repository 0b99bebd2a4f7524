//! Run the storefront server until Ctrl+C or SIGTERM.

use anyhow::Result;
use vitrine_kernel::settings::Settings;

use super::ServeArgs;

pub async fn run(args: ServeArgs, mut settings: Settings) -> Result<()> {
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }

    tracing::info!(
        env = ?settings.environment,
        source = ?settings.cms.source,
        "vitrine serve starting"
    );
    vitrine_app::run(&settings, vitrine_http::shutdown_signal()).await
}
