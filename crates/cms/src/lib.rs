//! Data access for the storefront catalog.
//!
//! Products, categories and coupons live in a headless GraphQL CMS. This crate
//! maps the CMS schema onto plain domain records and exposes them through the
//! [`CatalogSource`] trait, implemented by [`HygraphCatalog`] for the real API
//! and by [`FixtureCatalog`] for offline use and tests.

pub mod client;
pub mod coupon;
pub mod error;
pub mod filter;
pub mod fixture;
pub mod hygraph;
pub mod model;
mod queries;
pub mod rich_text;
pub mod source;

pub use coupon::{CouponDateError, CouponStatus};
pub use error::{CmsError, TransportError};
pub use filter::{CategoryFilter, ProductFilter, ProductQuery, ALL_CATEGORIES, DEFAULT_PAGE_SIZE};
pub use fixture::FixtureCatalog;
pub use hygraph::HygraphCatalog;
pub use model::{AffiliateLink, Coupon, Product, ProductPage};
pub use rich_text::RichText;
pub use source::{from_settings, CatalogSource};
