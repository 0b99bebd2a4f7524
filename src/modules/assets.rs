use std::sync::Arc;

use async_trait::async_trait;
use axum::{http::header, response::IntoResponse, routing::get, Router};
use vitrine_kernel::Module;

use crate::views::{SCRIPT, STYLESHEET};

/// Stylesheet and script shared by every page.
pub struct AssetsModule;

#[async_trait]
impl Module for AssetsModule {
    fn name(&self) -> &'static str {
        "assets"
    }

    fn pages(&self) -> Router {
        Router::new()
            .route("/assets/vitrine.css", get(stylesheet))
            .route("/assets/vitrine.js", get(script))
    }
}

const CACHE_CONTROL: &str = "public, max-age=3600";

async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        STYLESHEET,
    )
}

async fn script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        SCRIPT,
    )
}

pub fn create_module() -> Arc<dyn Module> {
    Arc::new(AssetsModule)
}
