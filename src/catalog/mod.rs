//! Catalog reads through the query caches.
//!
//! [`Storefront`] is the single entry point pages and API handlers use to
//! reach the CMS. Every read goes through a [`QueryCache`] keyed the same way
//! the browser keys its queries, so repeated renders within the stale time
//! never hit the CMS twice.

pub mod browser;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use vitrine_cms::{
    CatalogSource, CmsError, Coupon, Product, ProductFilter, ProductPage, ProductQuery,
};
use vitrine_kernel::settings::{CacheSettings, Settings};
use vitrine_query::{InfiniteData, InfiniteQuery, QueryCache, QueryKey, StaleTime};

pub use browser::{BrowserView, CatalogBrowser};

/// `["products", category, search]`, with `"Todas"` for no category and an
/// empty part for no search.
pub fn products_key(filter: &ProductFilter) -> QueryKey {
    QueryKey::new([
        "products",
        filter.category.as_selection(),
        filter.search_term(),
    ])
}

pub fn product_key(id: &str) -> QueryKey {
    QueryKey::root("product").with(id)
}

/// Deepest page a listing request may ask for; every page before it is loaded
/// too.
pub const MAX_PAGE: u32 = 50;

/// One page of a feed as served to the infinite scroll.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub page: u32,
    pub products: Vec<Product>,
    pub total_products: usize,
    /// Page to request next, `None` once the filtered set is exhausted or the
    /// next page would be past [`MAX_PAGE`].
    pub next_page: Option<u32>,
    /// More products match than [`MAX_PAGE`] pages can show.
    pub truncated: bool,
}

/// Split a next page into the one that can be requested and whether the
/// listing stops short of its total.
pub fn reachable_next_page(next: Option<u32>) -> (Option<u32>, bool) {
    match next {
        Some(page) if page > MAX_PAGE => (None, true),
        next => (next, false),
    }
}

pub struct Storefront {
    source: Arc<dyn CatalogSource>,
    page_size: u32,
    gc_time: Duration,
    categories: QueryCache<Vec<String>>,
    products: InfiniteQuery<ProductPage>,
    product: QueryCache<Option<Product>>,
    coupons: QueryCache<Vec<Coupon>>,
}

impl Storefront {
    pub fn new(source: Arc<dyn CatalogSource>, page_size: u32, cache: &CacheSettings) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            gc_time: Duration::from_secs(cache.gc_secs),
            categories: QueryCache::new(StaleTime::from(cache.categories_stale_secs)),
            products: InfiniteQuery::new(StaleTime::from_secs(cache.products_stale_secs)),
            product: QueryCache::new(StaleTime::from_secs(cache.product_stale_secs)),
            coupons: QueryCache::new(StaleTime::from_secs(cache.coupons_stale_secs)),
        }
    }

    /// Build the configured catalog source and wrap it.
    pub fn from_settings(settings: &Settings) -> Result<Self, CmsError> {
        let source = vitrine_cms::from_settings(&settings.cms)?;
        tracing::info!(source = source.name(), page_size = settings.cms.page_size, "catalog source ready");
        Ok(Self::new(source, settings.cms.page_size, &settings.cache))
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub async fn categories(&self) -> Result<Vec<String>, CmsError> {
        self.categories
            .fetch(&QueryKey::root("categories"), || self.source.categories())
            .await
    }

    fn fetch_page<'a>(
        &'a self,
        filter: &ProductFilter,
        page: u32,
    ) -> impl Future<Output = Result<ProductPage, CmsError>> + Send + 'a {
        let query = ProductQuery::new(filter.clone(), page, self.page_size);
        async move { self.source.products(&query).await }
    }

    /// The first page for `filter`, from cache while fresh.
    pub async fn first_page(
        &self,
        filter: &ProductFilter,
    ) -> Result<InfiniteData<ProductPage>, CmsError> {
        self.products
            .fetch_first_page(&products_key(filter), |page| self.fetch_page(filter, page))
            .await
    }

    /// The first `pages` pages for `filter` (fewer when the set runs out).
    pub async fn feed(
        &self,
        filter: &ProductFilter,
        pages: usize,
    ) -> Result<InfiniteData<ProductPage>, CmsError> {
        self.products
            .ensure_pages(&products_key(filter), pages.max(1), |page| {
                self.fetch_page(filter, page)
            })
            .await
    }

    /// Append the next page to the feed for `filter`.
    pub async fn next_page(
        &self,
        filter: &ProductFilter,
    ) -> Result<InfiniteData<ProductPage>, CmsError> {
        self.products
            .fetch_next_page(&products_key(filter), |page| self.fetch_page(filter, page))
            .await
    }

    /// Page `page` of the feed, loading the pages before it as needed. A page
    /// past the end comes back empty with no next page.
    pub async fn page(&self, filter: &ProductFilter, page: u32) -> Result<FeedPage, CmsError> {
        let page = page.max(1);
        let data = self.feed(filter, page as usize).await?;
        let index = page as usize - 1;

        let (next_page, truncated) = reachable_next_page(match (index + 1).cmp(&data.pages.len()) {
            std::cmp::Ordering::Less => Some(page + 1),
            std::cmp::Ordering::Equal => data.next_page_param(),
            std::cmp::Ordering::Greater => None,
        });

        Ok(FeedPage {
            page,
            products: data
                .pages
                .get(index)
                .map(|p| p.products.clone())
                .unwrap_or_default(),
            total_products: data.total(),
            next_page,
            truncated,
        })
    }

    /// Whatever is cached for `filter`, fresh or stale.
    pub fn cached_feed(&self, filter: &ProductFilter) -> Option<InfiniteData<ProductPage>> {
        self.products.data(&products_key(filter))
    }

    /// Mark the feed for `filter` stale so its next read restarts at page 1.
    pub fn invalidate_products(&self, filter: &ProductFilter) -> usize {
        self.products.invalidate(&products_key(filter))
    }

    pub async fn product(&self, id: &str) -> Result<Option<Product>, CmsError> {
        self.product
            .fetch(&product_key(id), || self.source.product(id))
            .await
    }

    pub async fn coupons(&self) -> Result<Vec<Coupon>, CmsError> {
        self.coupons
            .fetch(&QueryKey::root("coupons"), || self.source.coupons())
            .await
    }

    /// Evict every cached query untouched for the gc time.
    pub fn sweep(&self) -> usize {
        self.categories.sweep(self.gc_time)
            + self.products.sweep(self.gc_time)
            + self.product.sweep(self.gc_time)
            + self.coupons.sweep(self.gc_time)
    }
}
