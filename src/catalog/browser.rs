//! Interactive catalog browsing state.
//!
//! Mirrors what a visitor does on the home page: pick a category, type a
//! search term (debounced), scroll for more. The feed shown is always the one
//! for the *active* filter; after the category or the debounced term changes,
//! the previous feed stays visible as placeholder until [`CatalogBrowser::refresh`]
//! loads page 1 of the new one.

use std::sync::Arc;
use std::time::Duration;

use vitrine_cms::{CmsError, Product, ProductFilter, ProductPage, ALL_CATEGORIES};
use vitrine_query::{Debouncer, InfiniteData};

use super::Storefront;

/// Snapshot of what the browser currently displays.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserView {
    pub category: String,
    /// What the visitor typed, debounced or not.
    pub search_input: String,
    pub products: Vec<Product>,
    /// Size of the whole filtered set, from the first page.
    pub total: usize,
    pub has_next: bool,
    /// The products belong to the previous filter.
    pub is_placeholder: bool,
    pub error: Option<String>,
}

pub struct CatalogBrowser {
    storefront: Arc<Storefront>,
    category: String,
    search: Debouncer<String>,
    active: ProductFilter,
    data: Option<InfiniteData<ProductPage>>,
    error: Option<String>,
}

impl CatalogBrowser {
    /// Start on `"Todas"` with no search and load the first page.
    pub async fn open(storefront: Arc<Storefront>, debounce: Duration) -> Result<Self, CmsError> {
        let mut browser = Self {
            storefront,
            category: ALL_CATEGORIES.to_string(),
            search: Debouncer::new(String::new(), debounce),
            active: ProductFilter::all(),
            data: None,
            error: None,
        };
        let result = browser.storefront.first_page(&browser.active).await;
        browser.record(result)?;
        Ok(browser)
    }

    /// The filter the visitor asked for: selected category plus debounced term.
    pub fn filter(&self) -> ProductFilter {
        ProductFilter::new(&self.category, &self.search.current())
    }

    pub fn select_category(&mut self, category: &str) {
        self.category = category.trim().to_string();
        if self.category.is_empty() {
            self.category = ALL_CATEGORIES.to_string();
        }
    }

    /// Record a keystroke; only the debounced value ever reaches the CMS.
    pub fn type_search(&mut self, input: &str) {
        self.search.push(input.to_string());
    }

    /// Wait for the debounced term to catch up, then refresh.
    pub async fn settle(&mut self) -> Result<(), CmsError> {
        self.search.settled().await;
        self.refresh().await
    }

    /// Load page 1 for the requested filter if it differs from the active one.
    /// The new key is invalidated first so it always refetches; on failure the
    /// previous feed stays active.
    pub async fn refresh(&mut self) -> Result<(), CmsError> {
        let requested = self.filter();
        if requested == self.active && self.data.is_some() {
            return Ok(());
        }

        tracing::debug!(
            category = requested.category.as_selection(),
            search = requested.search_term(),
            "catalog filter changed"
        );
        self.storefront.invalidate_products(&requested);
        let result = self.storefront.first_page(&requested).await;
        self.record(result)?;
        self.active = requested;
        Ok(())
    }

    /// Append the next page. Returns `false` when there is nothing more to load
    /// or the filter changed and the feed needs a refresh first.
    pub async fn load_more(&mut self) -> Result<bool, CmsError> {
        if self.is_placeholder() || !self.has_next() {
            return Ok(false);
        }

        let before = self.data.as_ref().map_or(0, |d| d.pages.len());
        let result = self.storefront.next_page(&self.active).await;
        let data = self.record(result)?;
        Ok(data.pages.len() > before)
    }

    pub fn has_next(&self) -> bool {
        self.data.as_ref().is_some_and(InfiniteData::has_next_page)
    }

    pub fn is_placeholder(&self) -> bool {
        self.data.is_some() && self.filter() != self.active
    }

    pub fn view(&self) -> BrowserView {
        let (products, total) = match &self.data {
            Some(data) => (
                data.pages
                    .iter()
                    .flat_map(|page| page.products.iter().cloned())
                    .collect(),
                data.total(),
            ),
            None => (Vec::new(), 0),
        };

        BrowserView {
            category: self.category.clone(),
            search_input: self.search.pending(),
            products,
            total,
            has_next: self.has_next(),
            is_placeholder: self.is_placeholder(),
            error: self.error.clone(),
        }
    }

    /// Keep the previous data on failure so it stays on screen.
    fn record(
        &mut self,
        result: Result<InfiniteData<ProductPage>, CmsError>,
    ) -> Result<&InfiniteData<ProductPage>, CmsError> {
        match result {
            Ok(data) => {
                self.error = None;
                Ok(self.data.insert(data))
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog fetch failed");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
