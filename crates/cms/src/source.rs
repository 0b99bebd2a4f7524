use std::sync::Arc;

use async_trait::async_trait;
use vitrine_kernel::settings::{CatalogSourceKind, CmsSettings};

use crate::error::CmsError;
use crate::filter::{ProductQuery, ALL_CATEGORIES};
use crate::fixture::FixtureCatalog;
use crate::hygraph::HygraphCatalog;
use crate::model::{Coupon, Product, ProductPage};

/// Read-only access to the catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// One page of the filtered listing, with the filtered total.
    async fn products(&self, query: &ProductQuery) -> Result<ProductPage, CmsError>;

    /// `Ok(None)` when no product has this id.
    async fn product(&self, id: &str) -> Result<Option<Product>, CmsError>;

    /// `"Todas"` followed by the distinct category names.
    async fn categories(&self) -> Result<Vec<String>, CmsError>;

    async fn coupons(&self) -> Result<Vec<Coupon>, CmsError>;
}

/// Build the source selected by `cms.source`.
pub fn from_settings(settings: &CmsSettings) -> Result<Arc<dyn CatalogSource>, CmsError> {
    match settings.source {
        CatalogSourceKind::Hygraph => Ok(Arc::new(HygraphCatalog::from_settings(settings)?)),
        CatalogSourceKind::Fixture => {
            let path = settings
                .fixture_path
                .as_deref()
                .ok_or_else(|| CmsError::Fixture {
                    path: String::new(),
                    reason: "cms.fixture_path is not set".to_string(),
                })?;
            Ok(Arc::new(FixtureCatalog::from_path(path)?))
        }
    }
}

/// Prepend `"Todas"` to the distinct, non-empty names, keeping first-seen order.
pub(crate) fn category_list<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for name in names {
        let name = name.trim();
        if !name.is_empty() && !categories.iter().any(|c| c == name) {
            categories.push(name.to_string());
        }
    }
    categories
}
