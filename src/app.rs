//! Process bootstrap shared by the binary and the CLI.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use vitrine_kernel::{InitCtx, ModuleRegistry, Settings};

use crate::catalog::Storefront;
use crate::modules::{register_all, AppState, SharedState};

/// Build the catalog source from settings. Configuration errors, such as a
/// missing CMS endpoint, fail here before anything binds.
pub fn build_state(settings: &Settings) -> anyhow::Result<SharedState> {
    let storefront =
        Storefront::from_settings(settings).context("failed to configure the catalog source")?;
    Ok(AppState::new(Arc::new(storefront), settings))
}

pub fn build_registry(state: SharedState) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    register_all(&mut registry, state);
    registry
}

/// Boot every module, serve until `shutdown` resolves, then stop the modules
/// in reverse order.
pub async fn run<F>(settings: &Settings, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(settings)?;
    let registry = build_registry(state);

    tracing::info!(
        core = registry.core_module_count(),
        custom = registry.custom_module_count(),
        "booting modules"
    );
    registry
        .boot(&InitCtx { settings })
        .await
        .context("module boot failed")?;

    let served = vitrine_http::start_server(&registry, settings, shutdown).await;

    registry
        .shutdown()
        .await
        .context("module shutdown failed")?;
    served
}
