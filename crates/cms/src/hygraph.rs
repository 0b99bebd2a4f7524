//! [`CatalogSource`] backed by the Hygraph content API.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use vitrine_kernel::settings::CmsSettings;

use crate::client::GraphQlClient;
use crate::error::{CmsError, TransportError};
use crate::filter::ProductQuery;
use crate::model::{
    CategoriesResponse, Coupon, CouponsResponse, Product, ProductPage, ProductResponse,
    ProductsResponse,
};
use crate::queries::{self, CATEGORY_SCAN_PAGE};
use crate::source::{category_list, CatalogSource};

pub struct HygraphCatalog {
    client: GraphQlClient,
}

impl HygraphCatalog {
    /// Fails with [`CmsError::MissingApiUrl`] when no endpoint is configured.
    pub fn from_settings(settings: &CmsSettings) -> Result<Self, CmsError> {
        let api_url = settings
            .api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(CmsError::MissingApiUrl)?;

        let client = GraphQlClient::new(
            api_url,
            settings.auth_token.clone(),
            Duration::from_millis(settings.request_timeout_ms),
        )?;

        Ok(Self { client })
    }

    pub fn new(client: GraphQlClient) -> Self {
        Self { client }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint().as_str()
    }
}

fn log_failure(operation: &str, error: &TransportError) {
    tracing::error!(operation, error = %error, "CMS request failed");
}

#[async_trait]
impl CatalogSource for HygraphCatalog {
    fn name(&self) -> &'static str {
        "hygraph"
    }

    async fn products(&self, query: &ProductQuery) -> Result<ProductPage, CmsError> {
        let variables = json!({
            "first": query.limit,
            "skip": query.skip(),
            "where": queries::where_input(&query.filter),
        });

        tracing::debug!(
            page = query.page,
            limit = query.limit,
            category = query.filter.category.as_selection(),
            search = query.filter.search_term(),
            "fetching products"
        );

        let data: ProductsResponse = self
            .client
            .request(&queries::products_query(), variables)
            .await
            .map_err(|e| {
                log_failure("products", &e);
                CmsError::fetch("Não foi possível carregar os produtos do Hygraph.", e)
            })?;

        Ok(ProductPage {
            products: data.products.into_iter().map(Product::from).collect(),
            total_products: data.products_connection.aggregate.count,
        })
    }

    async fn product(&self, id: &str) -> Result<Option<Product>, CmsError> {
        let data: ProductResponse = self
            .client
            .request(&queries::product_by_id_query(), json!({ "id": id }))
            .await
            .map_err(|e| {
                log_failure("product", &e);
                CmsError::fetch(
                    format!("Não foi possível carregar o produto {id} do Hygraph."),
                    e,
                )
            })?;

        Ok(data.product.map(Product::from))
    }

    async fn categories(&self) -> Result<Vec<String>, CmsError> {
        let mut names = Vec::new();
        let mut skip = 0;

        loop {
            let data: CategoriesResponse = self
                .client
                .request(
                    queries::CATEGORIES_QUERY,
                    json!({ "first": CATEGORY_SCAN_PAGE, "skip": skip }),
                )
                .await
                .map_err(|e| {
                    log_failure("categories", &e);
                    CmsError::fetch("Não foi possível carregar as categorias do Hygraph.", e)
                })?;

            let fetched = data.products.len();
            names.extend(
                data.products
                    .into_iter()
                    .filter_map(|node| node.category.map(|c| c.name)),
            );

            if fetched < CATEGORY_SCAN_PAGE as usize {
                break;
            }
            skip += CATEGORY_SCAN_PAGE;
        }

        Ok(category_list(names.iter().map(String::as_str)))
    }

    async fn coupons(&self) -> Result<Vec<Coupon>, CmsError> {
        let data: CouponsResponse = self
            .client
            .request(queries::COUPONS_QUERY, json!({}))
            .await
            .map_err(|e| {
                log_failure("coupons", &e);
                CmsError::fetch("Não foi possível carregar os cupons do Hygraph.", e)
            })?;

        Ok(data.coupons)
    }
}
