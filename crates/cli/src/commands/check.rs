//! One round trip to each catalog query, printed as a short report.

use anyhow::{Context, Result};
use vitrine_app::build_state;
use vitrine_cms::ProductFilter;
use vitrine_kernel::settings::{CatalogSourceKind, Settings};

use super::CheckArgs;

pub async fn run(args: CheckArgs, settings: &Settings) -> Result<()> {
    let state = build_state(settings)?;
    let storefront = &state.storefront;

    println!("Fonte: {}", storefront.source_name());
    match settings.cms.source {
        CatalogSourceKind::Hygraph => {
            if let Some(url) = &settings.cms.api_url {
                println!("Endpoint: {url}");
            }
        }
        CatalogSourceKind::Fixture => {
            if let Some(path) = &settings.cms.fixture_path {
                println!("Arquivo: {path}");
            }
        }
    }

    let categories = storefront
        .categories()
        .await
        .context("categorias")?;
    println!("Categorias: {}", categories.join(", "));

    let filter = ProductFilter::new(&args.category, &args.search);
    let page = storefront.page(&filter, 1).await.context("produtos")?;
    println!(
        "Produtos: {} no total, {} na primeira página",
        page.total_products,
        page.products.len()
    );
    for product in &page.products {
        println!("  - {} [{}] /product/{}", product.name, product.category, product.id);
    }

    let coupons = storefront.coupons().await.context("cupons")?;
    let expired = coupons.iter().filter(|c| c.status().is_expired()).count();
    println!("Cupons: {} ({} expirados)", coupons.len(), expired);

    Ok(())
}
