//! In-memory catalog, loaded from a JSON file for offline runs and tests.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::CmsError;
use crate::filter::ProductQuery;
use crate::model::{Coupon, Product, ProductPage};
use crate::source::{category_list, CatalogSource};

#[derive(Debug, Default, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    coupons: Vec<Coupon>,
}

/// Applies the listing semantics locally: exact category, case-insensitive
/// substring search, `skip`/`limit` slicing of the filtered set.
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    products: Vec<Product>,
    coupons: Vec<Coupon>,
}

impl FixtureCatalog {
    pub fn new(products: Vec<Product>, coupons: Vec<Coupon>) -> Self {
        Self { products, coupons }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CmsError> {
        let path = path.as_ref();
        let fixture_err = |reason: String| CmsError::Fixture {
            path: path.display().to_string(),
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| fixture_err(e.to_string()))?;
        let file: FixtureFile = serde_json::from_str(&raw).map_err(|e| fixture_err(e.to_string()))?;

        tracing::info!(
            path = %path.display(),
            products = file.products.len(),
            coupons = file.coupons.len(),
            "loaded catalog fixture"
        );
        Ok(Self::new(file.products, file.coupons))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogSource for FixtureCatalog {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn products(&self, query: &ProductQuery) -> Result<ProductPage, CmsError> {
        let filtered: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| query.filter.matches(p))
            .collect();

        let products = filtered
            .iter()
            .skip(query.skip() as usize)
            .take(query.limit as usize)
            .map(|p| (*p).clone())
            .collect();

        Ok(ProductPage {
            products,
            total_products: filtered.len(),
        })
    }

    async fn product(&self, id: &str) -> Result<Option<Product>, CmsError> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn categories(&self) -> Result<Vec<String>, CmsError> {
        Ok(category_list(self.products.iter().map(|p| p.category.as_str())))
    }

    async fn coupons(&self) -> Result<Vec<Coupon>, CmsError> {
        Ok(self.coupons.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ProductFilter;

    const CATEGORIES: [&str; 3] = ["Eletrônicos", "Livros", "Casa"];

    fn catalog(count: usize) -> FixtureCatalog {
        let products = (1..=count)
            .map(|i| Product {
                id: format!("prod-{i}"),
                name: format!("Produto {i}"),
                description: format!("Descrição breve do Produto {i}."),
                image_url: format!("https://picsum.photos/seed/{i}/300/200"),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                cover_image: None,
                technical_specs: None,
                affiliate_links: None,
                long_description: None,
            })
            .collect();
        FixtureCatalog::new(products, Vec::new())
    }

    #[tokio::test]
    async fn todas_returns_the_unfiltered_set() {
        let catalog = catalog(30);
        let page = catalog
            .products(&ProductQuery::new(ProductFilter::new("Todas", ""), 1, 100))
            .await
            .unwrap();
        assert_eq!(page.total_products, 30);
        assert_eq!(page.products.len(), 30);
    }

    #[tokio::test]
    async fn pages_slice_the_filtered_set() {
        let catalog = catalog(30);
        let filter = ProductFilter::new("Livros", "");

        let first = catalog
            .products(&ProductQuery::new(filter.clone(), 1, 4))
            .await
            .unwrap();
        let third = catalog
            .products(&ProductQuery::new(filter, 3, 4))
            .await
            .unwrap();

        assert_eq!(first.total_products, 10);
        assert_eq!(first.products.len(), 4);
        assert_eq!(third.products.len(), 2);
        assert!(third.products.iter().all(|p| p.category == "Livros"));
        assert_eq!(third.products[0].id, "prod-25");
    }

    #[tokio::test]
    async fn search_is_substring_over_name_and_description() {
        let catalog = catalog(30);
        let page = catalog
            .products(&ProductQuery::new(ProductFilter::new("Todas", "produto 2"), 1, 50))
            .await
            .unwrap();
        // "Produto 2" and "Produto 20".."Produto 29"
        assert_eq!(page.total_products, 11);
    }

    #[tokio::test]
    async fn categories_start_with_todas() {
        let categories = catalog(5).categories().await.unwrap();
        assert_eq!(categories, vec!["Todas", "Livros", "Casa", "Eletrônicos"]);
    }

    #[tokio::test]
    async fn product_lookup_by_id() {
        let catalog = catalog(3);
        assert_eq!(
            catalog.product("prod-2").await.unwrap().unwrap().name,
            "Produto 2"
        );
        assert!(catalog.product("prod-99").await.unwrap().is_none());
    }

    #[test]
    fn missing_file_is_a_fixture_error() {
        let err = FixtureCatalog::from_path("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CmsError::Fixture { .. }));
        assert!(err.is_configuration());
    }
}
