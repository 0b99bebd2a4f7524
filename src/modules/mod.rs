//! Storefront modules: the two core modules that own the catalog source and
//! the cache sweeper, plus the page and API surfaces.

pub mod assets;
pub mod cache;
pub mod catalog;
pub mod cms;
pub mod coupons;
pub mod product;

use std::sync::Arc;

use serde::Deserialize;
use vitrine_cms::ProductFilter;
use vitrine_kernel::settings::{Settings, StoreSettings};
use vitrine_kernel::ModuleRegistry;

use crate::catalog::Storefront;

/// Everything request handlers need.
pub struct AppState {
    pub storefront: Arc<Storefront>,
    pub store: StoreSettings,
    pub debounce_ms: u64,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(storefront: Arc<Storefront>, settings: &Settings) -> SharedState {
        Arc::new(Self {
            storefront,
            store: settings.store.clone(),
            debounce_ms: settings.search.debounce_ms,
        })
    }
}

/// Register every storefront module with the registry
pub fn register_all(registry: &mut ModuleRegistry, state: SharedState) {
    registry.register_core(cms::create_module(state.storefront.clone()));
    registry.register_core(cache::create_module(state.storefront.clone()));
    registry.register_custom(assets::create_module());
    registry.register_custom(catalog::create_module(state.clone()));
    registry.register_custom(product::create_module(state.clone()));
    registry.register_custom(coupons::create_module(state));
}

pub use crate::catalog::MAX_PAGE;

/// `?category=&search=&page=` as sent by the home page and its script.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
}

impl ListingParams {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter::new(
            self.category.as_deref().unwrap_or_default(),
            self.search.as_deref().unwrap_or_default(),
        )
    }

    /// 1-based page, `1` when absent.
    pub fn page(&self) -> Result<u32, String> {
        let Some(raw) = self.page.as_deref().map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(1);
        };
        match raw.parse::<u32>() {
            Ok(page) if (1..=MAX_PAGE).contains(&page) => Ok(page),
            _ => Err(format!("page must be an integer between 1 and {MAX_PAGE}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_catalog, CountingSource};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use std::sync::atomic::Ordering;
    use tower::ServiceExt;
    use vitrine_kernel::InitCtx;

    fn params(category: Option<&str>, search: Option<&str>, page: Option<&str>) -> ListingParams {
        ListingParams {
            category: category.map(String::from),
            search: search.map(String::from),
            page: page.map(String::from),
        }
    }

    #[test]
    fn listing_params_default_to_everything() {
        let p = params(None, None, None);
        assert_eq!(p.filter(), ProductFilter::all());
        assert_eq!(p.page(), Ok(1));
    }

    #[test]
    fn listing_params_validate_page() {
        assert_eq!(params(None, None, Some("3")).page(), Ok(3));
        assert_eq!(params(None, None, Some(" ")).page(), Ok(1));
        assert!(params(None, None, Some("0")).page().is_err());
        assert!(params(None, None, Some("dois")).page().is_err());
        assert!(params(None, None, Some("51")).page().is_err());
        assert_eq!(
            params(Some("Livros"), Some(" fone "), None).filter(),
            ProductFilter::new("Livros", "fone")
        );
    }

    fn app(products: usize) -> (Router, Arc<CountingSource>, ModuleRegistry) {
        let settings = Settings::default();
        let source = Arc::new(CountingSource::new(sample_catalog(products)));
        let storefront = Arc::new(Storefront::new(source.clone(), 12, &settings.cache));
        let mut registry = ModuleRegistry::new();
        register_all(&mut registry, AppState::new(storefront, &settings));
        let router = vitrine_http::build_router(&registry, &settings).unwrap();
        (router, source, registry)
    }

    async fn get(router: &Router, uri: &str) -> Response {
        router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn json(response: Response) -> serde_json::Value {
        serde_json::from_str(&text(response).await).unwrap()
    }

    #[tokio::test]
    async fn home_renders_first_page_and_categories() {
        let (router, _, _) = app(30);
        let response = get(&router, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = text(response).await;
        assert!(html.contains("Nossos Produtos"));
        assert_eq!(html.matches("Ver mais").count(), 12);
        assert!(html.contains(r#"data-category="Eletrônicos""#));
        assert!(html.contains(r#"data-next-page="2""#));
    }

    #[tokio::test]
    async fn home_page_param_accumulates_pages() {
        let (router, _, _) = app(30);
        let html = text(get(&router, "/?page=3").await).await;
        assert_eq!(html.matches("Ver mais").count(), 30);
        assert!(html.contains("Você viu todos os 30 produtos!"));
    }

    #[tokio::test]
    async fn home_shows_alert_when_cms_fails() {
        let (router, source, _) = app(30);
        source.fail.store(true, Ordering::SeqCst);

        let response = get(&router, "/").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = text(response).await;
        assert!(html.contains("Erro ao carregar dados"));
        assert!(html.contains("Não foi possível carregar os produtos ou categorias. Detalhes: "));
    }

    #[tokio::test]
    async fn fragment_serves_requested_page() {
        let (router, _, _) = app(30);
        let response = get(&router, "/fragments/products?category=Todas&page=2").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = text(response).await;
        assert_eq!(html.matches("Ver mais").count(), 12);
        assert!(html.contains(r#"data-next-page="3""#));
    }

    #[tokio::test]
    async fn fragment_filters_by_category_and_search() {
        let (router, _, _) = app(30);
        let html = text(
            get(&router, "/fragments/products?category=Livros&search=produto%201").await,
        )
        .await;
        // Livros: 1, 4, 7, ...; matching "produto 1": 1, 10, 13, 16, 19
        assert_eq!(html.matches("Ver mais").count(), 5);
        assert!(html.contains("Você viu todos os 5 produtos!"));
    }

    #[tokio::test]
    async fn deepest_fragment_ends_the_feed() {
        let (router, _, _) = app(700);

        let html = text(get(&router, "/fragments/products?page=50").await).await;
        assert_eq!(html.matches("Ver mais").count(), 12);
        assert!(html.contains(r#"data-product-id="prod-589""#));
        assert!(!html.contains("data-next-page"));
        assert!(html.contains("Você chegou ao fim da listagem de 700 produtos."));

        let body = json(get(&router, "/api/catalog/products?page=50").await).await;
        assert!(body["nextPage"].is_null());
        assert_eq!(body["truncated"], true);

        let response = get(&router, "/api/catalog/products?page=51").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn product_page_found_and_missing() {
        let (router, _, _) = app(3);

        let response = get(&router, "/product/prod-1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("Comprar na Amazon"));

        let response = get(&router, "/product/nao-existe").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(text(response).await.contains("Produto não encontrado"));
    }

    #[tokio::test]
    async fn product_page_cms_failure_is_bad_gateway() {
        let (router, source, _) = app(3);
        source.fail.store(true, Ordering::SeqCst);

        let response = get(&router, "/product/prod-1").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(text(response).await.contains("Erro ao carregar produto"));
    }

    #[tokio::test]
    async fn coupons_fragment_and_api() {
        let (router, _, _) = app(3);

        let html = text(get(&router, "/fragments/coupons").await).await;
        assert!(html.contains("ONTECH10"));
        assert!(html.contains("Expirado em: 01/01/2020"));

        let body = json(get(&router, "/api/coupons").await).await;
        assert_eq!(body[0]["code"], "ONTECH10");
        assert_eq!(body[0]["expired"], false);
        assert_eq!(body[1]["expired"], true);
        assert_eq!(body[1]["expiration"], "01/01/2020");
    }

    #[tokio::test]
    async fn catalog_api_lists_pages() {
        let (router, _, _) = app(30);
        let body = json(get(&router, "/api/catalog/products?category=Casa").await).await;
        assert_eq!(body["totalProducts"], 10);
        assert_eq!(body["page"], 1);
        assert!(body["nextPage"].is_null());
        assert_eq!(body["products"].as_array().unwrap().len(), 10);
        assert_eq!(body["products"][0]["category"], "Casa");
    }

    #[tokio::test]
    async fn catalog_api_rejects_bad_page() {
        let (router, _, _) = app(30);
        let response = get(&router, "/api/catalog/products?page=0").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(response).await["error"]["code"], "bad_request");
    }

    #[tokio::test]
    async fn catalog_api_product_and_categories() {
        let (router, _, _) = app(3);

        let body = json(get(&router, "/api/catalog/products/prod-1").await).await;
        assert_eq!(body["coverImage"], "https://cdn.example.com/capa-1.jpg");
        assert_eq!(body["affiliateLinks"][0]["name"], "Amazon");

        let response = get(&router, "/api/catalog/products/nao-existe").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json(get(&router, "/api/catalog/categories").await).await;
        assert_eq!(body, serde_json::json!(["Todas", "Livros", "Casa", "Eletrônicos"]));
    }

    #[tokio::test]
    async fn catalog_api_failure_is_upstream_error() {
        let (router, source, _) = app(3);
        source.fail.store(true, Ordering::SeqCst);

        let response = get(&router, "/api/catalog/categories").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json(response).await;
        assert_eq!(body["error"]["code"], "upstream_error");
        assert_eq!(
            body["error"]["message"],
            "Não foi possível carregar as categorias do Hygraph."
        );
    }

    #[tokio::test]
    async fn assets_health_and_docs_are_served() {
        let (router, _, _) = app(1);

        let response = get(&router, "/assets/vitrine.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/javascript"));

        assert_eq!(text(get(&router, "/healthz").await).await, "ok");

        let spec = json(get(&router, "/docs/openapi.json").await).await;
        assert!(spec["paths"]["/api/catalog/products"]["get"].is_object());
        assert!(spec["paths"]["/api/coupons"]["get"].is_object());
    }

    #[tokio::test]
    async fn registry_boots_and_shuts_down() {
        let (_, source, registry) = app(3);
        let settings = Settings::default();

        registry.boot(&InitCtx { settings: &settings }).await.unwrap();
        // cms module warms the category list on start
        assert_eq!(source.categories.load(Ordering::SeqCst), 1);
        registry.shutdown().await.unwrap();
    }
}
