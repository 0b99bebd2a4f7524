//! Vitrine application library
//!
//! Catalog reads, HTML views and the storefront modules served by the
//! `vitrine-app` binary and driven by `vitrine-cli`.

pub mod app;
pub mod catalog;
pub mod modules;
pub mod views;

#[cfg(test)]
mod testing;

pub use app::{build_registry, build_state, run};
pub use catalog::{BrowserView, CatalogBrowser, Storefront};
