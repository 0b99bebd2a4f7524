use anyhow::Context;
use vitrine_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load Vitrine settings")?;
    vitrine_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        source = ?settings.cms.source,
        "vitrine-app bootstrap starting"
    );

    vitrine_app::run(&settings, vitrine_http::shutdown_signal()).await?;

    tracing::info!("vitrine-app stopped");
    Ok(())
}
