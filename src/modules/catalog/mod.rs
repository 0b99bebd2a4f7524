mod openapi;
mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use vitrine_kernel::{InitCtx, Module};

use super::SharedState;

/// Home page, the infinite-scroll fragment and the catalog JSON API.
pub struct CatalogModule {
    state: SharedState,
}

impl CatalogModule {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Module for CatalogModule {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            debounce_ms = self.state.debounce_ms,
            "catalog module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/products", get(routes::list_products))
            .route("/products/{id}", get(routes::get_product))
            .route("/categories", get(routes::list_categories))
            .with_state(self.state.clone())
    }

    fn pages(&self) -> Router {
        Router::new()
            .route("/", get(routes::home))
            .route("/fragments/products", get(routes::products_fragment))
            .with_state(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(openapi::document())
    }
}

pub fn create_module(state: SharedState) -> Arc<dyn Module> {
    Arc::new(CatalogModule::new(state))
}
