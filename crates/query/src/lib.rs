//! Client-side data fetching primitives.
//!
//! A keyed [`QueryCache`] with stale times, [`InfiniteQuery`] page
//! accumulation on top of it, and a [`Debouncer`] for search input. These
//! follow the contract of a browser query-caching library: fresh values are
//! served from cache, stale ones refetch, writes are last-write-wins per key.

pub mod cache;
pub mod debounce;
pub mod infinite;
pub mod key;

pub use cache::{EntryState, QueryCache, StaleTime};
pub use debounce::Debouncer;
pub use infinite::{next_page_param, InfiniteData, InfiniteQuery, Page, INITIAL_PAGE_PARAM};
pub use key::QueryKey;
