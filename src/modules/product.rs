use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use vitrine_kernel::Module;

use super::SharedState;
use crate::views::{error_page, product_not_found_page, product_page};

/// Product detail page at `/product/{id}`.
pub struct ProductModule {
    state: SharedState,
}

impl ProductModule {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Module for ProductModule {
    fn name(&self) -> &'static str {
        "product"
    }

    fn pages(&self) -> Router {
        Router::new()
            .route("/product/{id}", get(product_detail))
            .with_state(self.state.clone())
    }
}

async fn product_detail(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    match state.storefront.product(&id).await {
        Ok(Some(product)) => Html(product_page(&state.store, &product)).into_response(),
        Ok(None) => {
            tracing::debug!(product = %id, "product not found");
            (
                StatusCode::NOT_FOUND,
                Html(product_not_found_page(&state.store, &id)),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(product = %id, error = %err, "product page failed");
            let html = error_page(
                &state.store,
                "Erro ao carregar produto",
                "Não foi possível carregar os detalhes do produto.",
                &err.to_string(),
            );
            (StatusCode::BAD_GATEWAY, Html(html)).into_response()
        }
    }
}

pub fn create_module(state: SharedState) -> Arc<dyn Module> {
    Arc::new(ProductModule::new(state))
}
