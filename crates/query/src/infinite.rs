//! Infinite (append-only) pagination over a [`QueryCache`].
//!
//! Each key holds the pages fetched so far. The next page parameter is
//! derived from the total reported by the last page: while fewer items than
//! the total have been accumulated, the next page is `pages.len() + 1`.

use std::future::Future;
use std::time::Duration;

use crate::cache::{EntryState, QueryCache, StaleTime};
use crate::key::QueryKey;

pub const INITIAL_PAGE_PARAM: u32 = 1;

/// A page that knows its own size and the size of the whole result set.
pub trait Page {
    fn item_count(&self) -> usize;
    fn total(&self) -> usize;
}

/// Next page to request after `pages`, or `None` when the set is exhausted.
///
/// An empty page also ends pagination, so a total that overstates the
/// available items cannot loop forever.
pub fn next_page_param<P: Page>(pages: &[P]) -> Option<u32> {
    let Some(last) = pages.last() else {
        return Some(INITIAL_PAGE_PARAM);
    };
    if last.item_count() == 0 {
        return None;
    }

    let fetched: usize = pages.iter().map(Page::item_count).sum();
    (fetched < last.total()).then(|| pages.len() as u32 + 1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfiniteData<P> {
    pub pages: Vec<P>,
    pub page_params: Vec<u32>,
}

impl<P> Default for InfiniteData<P> {
    fn default() -> Self {
        Self {
            pages: Vec::new(),
            page_params: Vec::new(),
        }
    }
}

impl<P: Page> InfiniteData<P> {
    pub fn first(page: P) -> Self {
        Self {
            pages: vec![page],
            page_params: vec![INITIAL_PAGE_PARAM],
        }
    }

    pub fn next_page_param(&self) -> Option<u32> {
        next_page_param(&self.pages)
    }

    pub fn has_next_page(&self) -> bool {
        !self.pages.is_empty() && self.next_page_param().is_some()
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Page::item_count).sum()
    }

    /// Total reported by the first page; `0` before anything loaded.
    pub fn total(&self) -> usize {
        self.pages.first().map_or(0, Page::total)
    }

    /// Append the page fetched for `param`, unless it is not the expected next
    /// page (already present, or the data was reset meanwhile).
    fn append(&mut self, param: u32, page: P) -> bool {
        if self.next_page_param() != Some(param) || self.page_params.contains(&param) {
            return false;
        }
        self.pages.push(page);
        self.page_params.push(param);
        true
    }
}

pub struct InfiniteQuery<P> {
    cache: QueryCache<InfiniteData<P>>,
}

impl<P: Page + Clone> InfiniteQuery<P> {
    pub fn new(stale_time: impl Into<StaleTime>) -> Self {
        Self {
            cache: QueryCache::new(stale_time),
        }
    }

    /// Pages cached under `key`, fresh or not.
    pub fn data(&self, key: &QueryKey) -> Option<InfiniteData<P>> {
        self.cache.get(key)
    }

    pub fn state(&self, key: &QueryKey) -> Option<EntryState> {
        self.cache.state(key)
    }

    /// Fresh data for `key`, or a restart from the first page.
    pub async fn fetch_first_page<F, Fut, E>(
        &self,
        key: &QueryKey,
        fetcher: F,
    ) -> Result<InfiniteData<P>, E>
    where
        F: FnOnce(u32) -> Fut,
        Fut: Future<Output = Result<P, E>>,
    {
        self.cache
            .fetch(key, || async move {
                let page = fetcher(INITIAL_PAGE_PARAM).await?;
                Ok(InfiniteData::first(page))
            })
            .await
    }

    /// Append the next page when there is one. Pages past their stale time
    /// still grow; invalidated or missing data restarts from the first page.
    pub async fn fetch_next_page<F, Fut, E>(
        &self,
        key: &QueryKey,
        fetcher: F,
    ) -> Result<InfiniteData<P>, E>
    where
        F: FnOnce(u32) -> Fut,
        Fut: Future<Output = Result<P, E>>,
    {
        let Some(mut data) = self.cache.get_valid(key) else {
            return self.fetch_first_page(key, fetcher).await;
        };
        let Some(param) = data.next_page_param() else {
            return Ok(data);
        };

        tracing::debug!(key = %key, page = param, "fetching next page");
        let page = fetcher(param).await?;

        // Re-read: another caller may have appended or reset while we awaited.
        if let Some(current) = self.cache.get(key) {
            data = current;
        }
        if data.append(param, page) {
            self.cache.set(key.clone(), data.clone());
        }
        Ok(data)
    }

    /// Accumulate pages until `count` are loaded or the set is exhausted.
    pub async fn ensure_pages<F, Fut, E>(
        &self,
        key: &QueryKey,
        count: usize,
        fetcher: F,
    ) -> Result<InfiniteData<P>, E>
    where
        F: Fn(u32) -> Fut,
        Fut: Future<Output = Result<P, E>>,
    {
        let mut data = self.fetch_first_page(key, &fetcher).await?;
        while data.pages.len() < count && data.has_next_page() {
            let before = data.pages.len();
            data = self.fetch_next_page(key, &fetcher).await?;
            if data.pages.len() == before {
                break;
            }
        }
        Ok(data)
    }

    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        self.cache.invalidate(prefix)
    }

    pub fn remove(&self, key: &QueryKey) -> Option<InfiniteData<P>> {
        self.cache.remove(key)
    }

    pub fn sweep(&self, gc_time: Duration) -> usize {
        self.cache.sweep(gc_time)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    struct Numbers {
        items: Vec<u32>,
        total: usize,
    }

    impl Page for Numbers {
        fn item_count(&self) -> usize {
            self.items.len()
        }

        fn total(&self) -> usize {
            self.total
        }
    }

    /// Serves `total` numbers, `per_page` at a time.
    fn server(total: u32, per_page: u32, calls: &AtomicUsize) -> impl Fn(u32) -> std::future::Ready<Result<Numbers, String>> + '_ {
        move |page| {
            calls.fetch_add(1, Ordering::SeqCst);
            let start = (page - 1) * per_page;
            let items = (start..total.min(start + per_page)).collect();
            std::future::ready(Ok(Numbers {
                items,
                total: total as usize,
            }))
        }
    }

    fn key() -> QueryKey {
        QueryKey::new(["products", "Todas", ""])
    }

    #[test]
    fn next_param_follows_total() {
        let page = |n: usize, total| Numbers {
            items: vec![0; n],
            total,
        };
        assert_eq!(next_page_param::<Numbers>(&[]), Some(1));
        assert_eq!(next_page_param(&[page(12, 30)]), Some(2));
        assert_eq!(next_page_param(&[page(12, 30), page(12, 30)]), Some(3));
        assert_eq!(next_page_param(&[page(12, 30), page(12, 30), page(6, 30)]), None);
        assert_eq!(next_page_param(&[page(12, 12)]), None);
        assert_eq!(next_page_param(&[page(0, 5)]), None);
    }

    #[tokio::test]
    async fn pages_accumulate_without_duplicates_until_total() {
        let calls = AtomicUsize::new(0);
        let query = InfiniteQuery::new(StaleTime::Never);
        let fetch = server(30, 12, &calls);

        let mut data = query.fetch_first_page(&key(), &fetch).await.unwrap();
        while data.has_next_page() {
            data = query.fetch_next_page(&key(), &fetch).await.unwrap();
        }

        let all: Vec<u32> = data.pages.iter().flat_map(|p| p.items.clone()).collect();
        assert_eq!(all, (0..30).collect::<Vec<_>>());
        assert_eq!(data.page_params, vec![1, 2, 3]);
        assert_eq!(data.total(), 30);
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        // exhausted: no further fetches
        let again = query.fetch_next_page(&key(), &fetch).await.unwrap();
        assert_eq!(again.pages.len(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn ensure_pages_stops_at_requested_count() {
        let calls = AtomicUsize::new(0);
        let query = InfiniteQuery::new(StaleTime::Never);

        let data = query
            .ensure_pages(&key(), 2, server(100, 10, &calls))
            .await
            .unwrap();
        assert_eq!(data.pages.len(), 2);
        assert_eq!(data.item_count(), 20);

        // already loaded pages are reused
        let data = query
            .ensure_pages(&key(), 2, server(100, 10, &calls))
            .await
            .unwrap();
        assert_eq!(data.pages.len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn ensure_pages_stops_at_total() {
        let calls = AtomicUsize::new(0);
        let query = InfiniteQuery::new(StaleTime::Never);

        let data = query
            .ensure_pages(&key(), 10, server(25, 12, &calls))
            .await
            .unwrap();
        assert_eq!(data.pages.len(), 3);
        assert!(!data.has_next_page());
    }

    #[tokio::test]
    async fn invalidated_key_restarts_from_first_page() {
        let calls = AtomicUsize::new(0);
        let query = InfiniteQuery::new(StaleTime::Never);
        let fetch = server(30, 12, &calls);

        query.ensure_pages(&key(), 3, &fetch).await.unwrap();
        query.invalidate(&QueryKey::root("products"));

        // previous pages remain readable as placeholder
        assert_eq!(query.data(&key()).unwrap().pages.len(), 3);

        let data = query.fetch_next_page(&key(), &fetch).await.unwrap();
        assert_eq!(data.pages.len(), 1);
        assert_eq!(data.page_params, vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_key_restarts_from_first_page() {
        let calls = AtomicUsize::new(0);
        let query = InfiniteQuery::new(Duration::from_secs(60));
        let fetch = server(30, 12, &calls);

        query.ensure_pages(&key(), 2, &fetch).await.unwrap();
        tokio::time::advance(Duration::from_secs(61)).await;

        let data = query.ensure_pages(&key(), 1, &fetch).await.unwrap();
        assert_eq!(data.pages.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn next_page_appends_to_time_stale_pages() {
        let calls = AtomicUsize::new(0);
        let query = InfiniteQuery::new(Duration::from_secs(60));
        let fetch = server(60, 12, &calls);

        query.fetch_first_page(&key(), &fetch).await.unwrap();
        tokio::time::advance(Duration::from_secs(61)).await;
        assert_eq!(query.state(&key()), Some(EntryState::Stale));

        let data = query.fetch_next_page(&key(), &fetch).await.unwrap();
        assert_eq!(data.page_params, vec![1, 2]);
        assert_eq!(data.item_count(), 24);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn append_rejects_duplicates_and_gaps() {
        let mut data = InfiniteData::first(Numbers {
            items: vec![1, 2],
            total: 6,
        });
        let next = Numbers {
            items: vec![3, 4],
            total: 6,
        };
        assert!(!data.append(1, next.clone()));
        assert!(!data.append(3, next.clone()));
        assert!(data.append(2, next.clone()));
        assert!(!data.append(2, next));
        assert_eq!(data.page_params, vec![1, 2]);
    }
}
